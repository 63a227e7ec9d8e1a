// src/gui/app.rs
use std::error::Error;

use eframe::egui::{self, RichText};

use crate::{
    config::{
        options::PipelineOptions,
        state::{GuiState, PageKind},
    },
    csv::Delim,
    model::Candidate,
    pipeline::{self, PipelineRun},
    scrape::SnscrapeCli,
    sentiment::LexiconLoader,
    store::DataSet,
};

use super::{components, pages::Page, progress::GuiProgress, router};

/// Runs the pipeline to completion, then opens the dashboard on the result.
pub fn run(options: eframe::NativeOptions, pipeline_opts: PipelineOptions) -> Result<(), Box<dyn Error>> {
    let scraper = SnscrapeCli::default();
    let loader = LexiconLoader::new(pipeline_opts.classifier.model.clone());
    let mut progress = GuiProgress::new();

    let run = pipeline::run(&pipeline_opts, &scraper, &loader, Some(&mut progress));
    let app = App::new(run, pipeline_opts.source.candidates.clone(), progress);

    eframe::run_native(
        "Candidate Sentiment Monitor",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(app))
        }),
    )?;
    Ok(())
}

pub struct App {
    pub state: GuiState,
    pub run: PipelineRun,

    /// Candidates in panel order: configured ones, then any that only appear in the data.
    pub candidates: Vec<Candidate>,

    /// In-memory table for the CURRENT page
    pub view: DataSet,

    pub copy_format: Delim,
    pub status: String,
    /// Pipeline notes, shown when hovering the status line
    pub notes: Vec<String>,
    pub warnings: Vec<String>,
}

impl App {
    pub fn new(run: PipelineRun, configured: Vec<Candidate>, progress: GuiProgress) -> Self {
        let mut candidates = configured;
        for c in run.aggregates.per_candidate.keys() {
            if !candidates.contains(c) {
                candidates.push(c.clone());
            }
        }

        let state = GuiState {
            selected_candidate: candidates.first().cloned(),
            ..GuiState::default()
        };

        logf!("Init: candidates={}, records={}, default page={:?}",
            candidates.len(), run.records.len(), PageKind::Balance);

        let mut app = Self {
            state,
            run,
            candidates,
            view: DataSet::default(),
            copy_format: Delim::Tsv,
            status: progress.status(),
            notes: progress.notes,
            warnings: progress.warnings,
        };
        app.rebuild_view();
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.current_page_index = idx; }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page {
        let pages = router::all_pages();
        pages[self.current_index().min(pages.len() - 1)]
    }

    /// Re-project the run for the current page and selection.
    pub fn rebuild_view(&mut self) {
        self.view = self.current_page().view(&self.run, &self.state);
        logd!("View: {:?} rows={}", self.current_page_kind(), self.view.row_count());
    }

    fn footer(&self) -> String {
        format!("{} posts analysed ({} data)", self.run.records.len(), self.run.origin.label())
    }
}

fn no_data_panel(ui: &mut egui::Ui, warnings: &[String]) {
    ui.vertical_centered(|ui| {
        ui.add_space(80.0);
        ui.heading("No data");
        ui.label("The pipeline finished without any records to display.");
        for w in warnings {
            ui.label(RichText::new(w).color(egui::Color32::from_rgb(0xF0, 0xD2, 0x3C)));
        }
    });
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(self.footer());
                for w in &self.warnings {
                    ui.separator();
                    ui.label(RichText::new(w).color(egui::Color32::from_rgb(0xF0, 0xD2, 0x3C)));
                }
            });
        });

        if self.run.is_empty() {
            egui::CentralPanel::default().show(ctx, |ui| no_data_panel(ui, &self.warnings));
            return;
        }

        egui::SidePanel::left("candidates")
            .resizable(false)
            .show(ctx, |ui| {
                components::candidate_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::tabs::draw(ui, self);

            ui.separator();

            components::toolbar::draw(ui, self);

            ui.separator();

            let page = self.current_page();
            page.draw_chart(ui, &self.run, &self.state);

            ui.separator();

            components::data_table::draw(ui, self);
        });
    }
}
