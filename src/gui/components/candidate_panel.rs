// src/gui/components/candidate_panel.rs
//
// Left panel: candidates with their net totals. Clicking one selects it for
// the Breakdown tab (and jumps there).

use eframe::egui::{self, RichText};

use crate::{config::state::PageKind, gui::{app::App, router}};

use super::charts;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Candidates");
    ui.separator();

    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let mut clicked = None;
    egui::ScrollArea::vertical()
        .id_salt("candidate_panel_scroll")
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);

            for cand in &app.candidates {
                let is_selected = app.state.selected_candidate.as_ref() == Some(cand);
                let total = app.run.aggregates.per_candidate.get(cand).copied().unwrap_or(0);

                ui.horizontal(|ui| {
                    if ui.selectable_label(is_selected, cand.name()).clicked() && !is_selected {
                        clicked = Some(cand.clone());
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(format!("{:+}", total)).color(charts::diverging(total)));
                    });
                });
            }
        });

    if let Some(cand) = clicked {
        logf!("UI: Candidate → {}", cand);
        app.state.selected_candidate = Some(cand);
        if !app.current_page().follows_candidate() {
            app.set_current_index(router::index_of(PageKind::Breakdown));
        }
        app.rebuild_view();
    }
}
