// src/config/state.rs
use crate::model::Candidate;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Candidate shown on the Breakdown tab
    pub selected_candidate: Option<Candidate>,

    pub window_w: u32,
    pub window_h: u32,

    /// Active tab index into router::PAGES
    pub current_page_index: usize,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            selected_candidate: None,
            window_w: 1100,
            window_h: 720,
            current_page_index: 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Balance,
    Trend,
    Breakdown,
    Posts,
}
