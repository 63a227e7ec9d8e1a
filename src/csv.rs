// src/csv.rs
use std::io::{self, Write};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delim {
    Csv,
    Tsv,
}

impl Delim {
    pub fn sep(self) -> char {
        match self { Delim::Csv => ',', Delim::Tsv => '\t' }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Some(Delim::Csv),
            "tsv" => Some(Delim::Tsv),
            _ => None,
        }
    }
}

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Stringify a table (headers first, if any).
pub fn rows_to_string(headers: &Option<Vec<String>>, rows: &[Vec<String>], delim: Delim) -> String {
    let sep = delim.sep();
    let mut buf: Vec<u8> = Vec::new();

    if let Some(h) = headers {
        let _ = write_row(&mut buf, h, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_only_when_needed() {
        let h = Some(row!["Candidate", "Total"]);
        let rows = vec![row!["Iván Cepeda", 3], row!["a, b", "x\"y"]];
        assert_eq!(
            rows_to_string(&h, &rows, Delim::Csv),
            "Candidate,Total\nIván Cepeda,3\n\"a, b\",\"x\"\"y\"\n"
        );
        assert_eq!(rows_to_string(&None, &rows[..1], Delim::Tsv), "Iván Cepeda\t3\n");
    }
}
