// src/gui/pages/mod.rs
use eframe::egui;

use crate::{
    config::state::{GuiState, PageKind},
    pipeline::PipelineRun,
    store::DataSet,
};

pub mod balance;
pub mod breakdown;
pub mod posts;
pub mod trend;

/// One dashboard tab: a table projection of the run, optionally with a chart above it.
pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Columns rendered right-aligned / centered as numbers.
    fn numeric_columns(&self) -> &'static [usize] { &[] }

    /// Optional: per-page column widths (in px-ish)
    fn preferred_column_widths(&self) -> Option<&'static [f32]> { None }

    /// Whether the page follows the candidate picked in the side panel.
    fn follows_candidate(&self) -> bool { false }

    /// Table shown under the chart (and copied by "Copy").
    fn view(&self, run: &PipelineRun, gui: &GuiState) -> DataSet;

    /// Chart area above the table. Default: none.
    fn draw_chart(&self, _ui: &mut egui::Ui, _run: &PipelineRun, _gui: &GuiState) {}
}
