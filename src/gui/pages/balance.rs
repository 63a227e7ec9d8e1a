// src/gui/pages/balance.rs
use eframe::egui;

use crate::{
    config::state::{GuiState, PageKind},
    data,
    gui::components::charts::{self, Bar},
    pipeline::PipelineRun,
    store::DataSet,
};

use super::Page;

pub struct BalancePage;
pub static PAGE: BalancePage = BalancePage;

impl Page for BalancePage {
    fn title(&self) -> &'static str { "Balance" }
    fn kind(&self) -> PageKind { PageKind::Balance }

    fn numeric_columns(&self) -> &'static [usize] { &[1, 2, 3] }
    fn preferred_column_widths(&self) -> Option<&'static [f32]> { Some(&[220.0, 110.0, 110.0, 80.0]) }

    fn view(&self, run: &PipelineRun, _gui: &GuiState) -> DataSet {
        data::balance(&run.aggregates)
    }

    fn draw_chart(&self, ui: &mut egui::Ui, run: &PipelineRun, _gui: &GuiState) {
        ui.label(egui::RichText::new("Net sentiment balance (for vs against)").strong());
        let bars: Vec<Bar> = run
            .aggregates
            .per_candidate
            .iter()
            .map(|(cand, total)| Bar {
                label: cand.to_string(),
                value: *total as f64,
                color: charts::diverging(*total),
            })
            .collect();
        charts::bars(ui, &bars);
    }
}
