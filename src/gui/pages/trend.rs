// src/gui/pages/trend.rs
use std::collections::BTreeMap;

use eframe::egui;

use crate::{
    config::state::{GuiState, PageKind},
    data,
    gui::components::charts::{self, Series},
    pipeline::PipelineRun,
    store::DataSet,
};

use super::Page;

pub struct TrendPage;
pub static PAGE: TrendPage = TrendPage;

impl Page for TrendPage {
    fn title(&self) -> &'static str { "Trend" }
    fn kind(&self) -> PageKind { PageKind::Trend }

    fn numeric_columns(&self) -> &'static [usize] { &[2] }
    fn preferred_column_widths(&self) -> Option<&'static [f32]> { Some(&[110.0, 220.0, 110.0]) }

    fn view(&self, run: &PipelineRun, _gui: &GuiState) -> DataSet {
        data::trend(&run.aggregates)
    }

    fn draw_chart(&self, ui: &mut egui::Ui, run: &PipelineRun, _gui: &GuiState) {
        ui.label(egui::RichText::new("Opinion over time").strong());

        let mut by_cand: BTreeMap<String, Vec<_>> = BTreeMap::new();
        for p in run.aggregates.time_series() {
            by_cand.entry(p.candidate.to_string()).or_default().push((p.date, p.total as f64));
        }
        let series: Vec<Series> = by_cand
            .into_iter()
            .enumerate()
            .map(|(i, (name, points))| Series { name, points, color: charts::palette(i) })
            .collect();
        charts::lines(ui, &series);
    }
}
