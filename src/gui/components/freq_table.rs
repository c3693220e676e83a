// src/gui/components/freq_table.rs
//
// The Rank / Word / Count table for the current view, or the guidance
// message when there is nothing to show yet.

use eframe::egui;
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(view) = &app.view else {
        if let Some(note) = &app.view_note {
            ui.colored_label(ui.visuals().warn_fg_color, note);
        } else if app.fetched.is_none() {
            ui.label("Enter an article URL above to start.");
        }
        return;
    };

    ui.strong("Top 20 words");

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .column(Column::exact(48.0))
        .column(Column::remainder())
        .column(Column::exact(64.0))
        .header(20.0, |mut header| {
            if let Some(headers) = &view.table.headers {
                for h in headers {
                    header.col(|ui| {
                        ui.strong(h.as_str());
                    });
                }
            }
        })
        .body(|mut body| {
            for row in &view.table.rows {
                body.row(18.0, |mut r| {
                    for cell in row {
                        r.col(|ui| {
                            ui.label(cell.as_str());
                        });
                    }
                });
            }
        });
}
