// src/gui/pages/breakdown.rs
use eframe::egui;

use crate::{
    config::state::{GuiState, PageKind},
    data,
    gui::components::charts::{self, Bar},
    model::SentimentLabel,
    pipeline::PipelineRun,
    store::DataSet,
};

use super::Page;

pub struct BreakdownPage;
pub static PAGE: BreakdownPage = BreakdownPage;

impl Page for BreakdownPage {
    fn title(&self) -> &'static str { "Breakdown" }
    fn kind(&self) -> PageKind { PageKind::Breakdown }

    fn numeric_columns(&self) -> &'static [usize] { &[1] }
    fn preferred_column_widths(&self) -> Option<&'static [f32]> { Some(&[80.0, 80.0]) }
    fn follows_candidate(&self) -> bool { true }

    fn view(&self, run: &PipelineRun, gui: &GuiState) -> DataSet {
        match &gui.selected_candidate {
            Some(c) => data::breakdown(&run.aggregates, c),
            None => DataSet::new(data::BREAKDOWN_HEADERS, Vec::new()),
        }
    }

    fn draw_chart(&self, ui: &mut egui::Ui, run: &PipelineRun, gui: &GuiState) {
        let Some(cand) = &gui.selected_candidate else {
            ui.label("Pick a candidate on the left.");
            return;
        };
        ui.label(egui::RichText::new(format!("Opinion breakdown: {}", cand)).strong());

        let counts = run.aggregates.label_breakdown(cand);
        let total = counts.total().max(1) as f64;
        let bars: Vec<Bar> = SentimentLabel::ALL
            .iter()
            .map(|&l| {
                let n = counts.get(l);
                Bar {
                    label: format!("{} {:.0}%", l.tag(), 100.0 * n as f64 / total),
                    value: n as f64,
                    color: charts::label_color(l),
                }
            })
            .collect();
        charts::bars(ui, &bars);
    }
}
