// src/gui/components/fetch_bar.rs

use eframe::egui;

use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Article URL:");

        let width = (ui.available_width() - 90.0).max(120.0);
        let edit = ui.add(
            egui::TextEdit::singleline(&mut app.url_text)
                .desired_width(width)
                .hint_text("https://example.com/article.html"),
        );

        let submitted =
            edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button("Analyze").clicked() || submitted {
            actions::analyze(app);
        }
    });

    let status = app.status.lock().unwrap().clone();
    ui.label(egui::RichText::new(status).weak());
}
