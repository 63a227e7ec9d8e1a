// src/gui/components/toolbar.rs
//
// Copy button, clipboard format and the status line.

use eframe::egui;

use crate::{csv::Delim, gui::{actions, app::App}};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Format:");
        let prev = app.copy_format;
        ui.selectable_value(&mut app.copy_format, Delim::Tsv, "TSV");
        ui.selectable_value(&mut app.copy_format, Delim::Csv, "CSV");
        if app.copy_format != prev {
            logf!("UI: Copy format → {:?}", app.copy_format);
        }

        ui.separator();

        if ui.add_enabled(!app.view.is_empty(), egui::Button::new("Copy")).clicked() {
            actions::copy(app, ui.ctx());
        }

        let status = ui.label(app.status.as_str());
        if !app.notes.is_empty() {
            status.on_hover_text(app.notes.join("\n"));
        }
    });
}
