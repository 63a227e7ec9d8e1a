// src/gui/components/data_table.rs
//
// Draws the current view table. Purely a view over app.view.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &App) {
    let page = app.current_page();
    let kind = page.kind();
    let view = &app.view;
    let cols = view.ncols();
    if cols == 0 {
        return;
    }

    let widths: Vec<f32> = match page.preferred_column_widths() {
        Some(ws) if ws.len() == cols => ws.to_vec(),
        _ => vec![120.0; cols],
    };
    let numeric = page.numeric_columns();

    // Same scroll bar look as the candidate panel
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::horizontal()
        .id_salt("table_hscroll")
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .min_scrolled_height(0.0)
                .id_salt(("table_state", kind));
            for &w in &widths {
                table = table.column(Column::initial(w).resizable(true).clip(true).at_least(20.0));
            }

            let cell = |ui: &mut egui::Ui, text: RichText, right: bool| {
                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                if right {
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| { ui.label(text); });
                } else {
                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| { ui.label(text); });
                }
            };

            table
                .header(24.0, |mut header| {
                    let headers = view.headers.as_deref().unwrap_or(&[]);
                    for ci in 0..cols {
                        let label = headers.get(ci).cloned().unwrap_or_else(|| format!("Col {}", ci + 1));
                        header.col(|ui| cell(ui, RichText::new(label).strong(), numeric.contains(&ci)));
                    }
                })
                .body(|body| {
                    body.rows(20.0, view.row_count(), |mut row| {
                        let Some(data) = view.rows.get(row.index()) else { return };
                        for ci in 0..cols {
                            let text = data.get(ci).map(String::as_str).unwrap_or("");
                            let mut rt = RichText::new(text);
                            // sentiment tags in label colours
                            if let Some(label) = tag_label(text) {
                                rt = rt.color(super::charts::label_color(label));
                            }
                            row.col(|ui| cell(ui, rt, numeric.contains(&ci)));
                        }
                    });
                });
        });
}

fn tag_label(cell: &str) -> Option<crate::model::SentimentLabel> {
    use crate::model::SentimentLabel::*;
    match cell {
        "POS" => Some(Positive),
        "NEG" => Some(Negative),
        "NEU" => Some(Neutral),
        _ => None,
    }
}
