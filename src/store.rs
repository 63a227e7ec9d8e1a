// src/store.rs
//
// In-memory tabular shape shared by the dashboard tables, clipboard copy and
// CLI output. Nothing here touches the disk: a run's table lives only as long
// as the process.

#[derive(Clone, Debug, Default, PartialEq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn new(headers: &[&str], rows: Vec<Vec<String>>) -> Self {
        Self { headers: Some(headers.iter().map(|h| s!(*h)).collect()), rows }
    }

    pub fn row_count(&self) -> usize { self.rows.len() }

    pub fn header_count(&self) -> usize {
        self.headers.as_ref().map(|h| h.len()).unwrap_or(0)
    }

    pub fn ncols(&self) -> usize {
        self.headers
            .as_ref()
            .map(|h| h.len())
            .or_else(|| self.rows.first().map(|r| r.len()))
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
}
