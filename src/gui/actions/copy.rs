// src/gui/actions/copy.rs
use eframe::egui;

use crate::{csv::{rows_to_string, Delim}, gui::app::App, store::DataSet};

/// Clipboard text for a view (headers first).
pub fn view_text(view: &DataSet, delim: Delim) -> String {
    rows_to_string(&view.headers, &view.rows, delim)
}

pub fn copy(app: &mut App, ui_ctx: &egui::Context) {
    if app.view.is_empty() {
        app.status = s!("Nothing to copy");
        logd!("Copy: Clicked, but there's nothing to copy");
        return;
    }

    let txt = view_text(&app.view, app.copy_format);
    logf!(
        "Copy: page={:?}, rows={}, headers={}",
        app.current_page_kind(),
        app.view.row_count(),
        app.view.header_count()
    );

    ui_ctx.copy_text(txt);
    app.status = format!("Copied {} rows to clipboard", app.view.row_count());
}
