// src/gui/components/controls_panel.rs

use eframe::egui;

use crate::{
    chart::ChartKind,
    config::{
        consts::{MIN_COUNT_CEIL, MIN_COUNT_FLOOR},
        options::ExportFormat,
    },
    gui::{actions, app::App},
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum UiFormat { Csv, Tsv }

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Controls");
    ui.separator();

    // --- Chart kind + threshold ---
    let mut changed = false;
    {
        let analyze = &mut app.state.options.analyze;

        ui.label("Chart");
        egui::ComboBox::from_id_salt("chart_kind")
            .selected_text(analyze.chart.label())
            .show_ui(ui, |ui| {
                for kind in ChartKind::ALL {
                    if ui
                        .selectable_value(&mut analyze.chart, kind, kind.label())
                        .changed()
                    {
                        changed = true;
                    }
                }
            });

        ui.add_space(8.0);
        ui.label("Minimum count");
        if ui
            .add(egui::Slider::new(
                &mut analyze.min_count,
                MIN_COUNT_FLOOR..=MIN_COUNT_CEIL,
            ))
            .changed()
        {
            changed = true;
        }
        ui.label(
            egui::RichText::new("Words below this count are filtered out")
                .small()
                .weak(),
        );
    }
    if changed {
        logf!(
            "UI: chart={:?} min_count={}",
            app.state.options.analyze.chart,
            app.state.options.analyze.min_count
        );
        // No refetch; just re-rank the counts we already have.
        app.rebuild_view();
    }

    ui.add_space(16.0);
    ui.separator();

    // --- Export ---
    ui.label("Export");
    {
        let export = &mut app.state.options.export;

        let prev_fmt = match export.format {
            ExportFormat::Csv => UiFormat::Csv,
            ExportFormat::Tsv => UiFormat::Tsv,
        };
        let mut fmt = prev_fmt;

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut fmt, UiFormat::Csv, "CSV");
            ui.selectable_value(&mut fmt, UiFormat::Tsv, "TSV");
        });

        if fmt != prev_fmt {
            export.format = match fmt {
                UiFormat::Csv => ExportFormat::Csv,
                UiFormat::Tsv => ExportFormat::Tsv,
            };
            logf!("UI: Export format → {:?}", export.format);
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }

        ui.checkbox(&mut export.include_headers, "Include headers");
    }

    ui.label("Output:");
    if ui
        .add(egui::TextEdit::singleline(&mut app.out_path_text).desired_width(180.0))
        .changed()
    {
        app.out_path_dirty = true;
    }

    let have_view = app.view.is_some();
    ui.horizontal(|ui| {
        if ui
            .add_enabled(have_view, egui::Button::new("Export table"))
            .clicked()
        {
            actions::export_table(app);
        }
        if ui
            .add_enabled(have_view, egui::Button::new("Chart JSON"))
            .clicked()
        {
            actions::export_chart(app);
        }
    });
}
