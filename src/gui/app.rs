// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    analysis::freq::WordCounts,
    analyze,
    chart::ChartData,
    config::state::AppState,
    table::DataSet,
};

use super::{components, fonts};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Cifreq — article word frequency",
        options,
        Box::new(|cc| {
            fonts::install(&cc.egui_ctx);
            Ok(Box::new(App::new(AppState::default())))
        }),
    )?;
    Ok(())
}

/// Canonical per-URL data: one fetch, one segmentation. Re-ranking on
/// control changes reuses this instead of hitting the network again.
pub struct Fetched {
    pub url: String,
    pub text: String,
    pub preview: String,
    pub counts: WordCounts,
}

/// What the current options make of the fetched counts.
pub struct View {
    pub table: DataSet,
    pub chart: ChartData,
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // URL text field UX
    pub url_text: String,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // status line
    pub status: Arc<Mutex<String>>,

    // canonical data + derived view for the current request
    pub fetched: Option<Fetched>,
    pub view: Option<View>,

    // guidance when the view can't be built (threshold too high)
    pub view_note: Option<String>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let out_path_text = state.options.export.out_path().to_string_lossy().into_owned();

        logf!("Init: default chart={:?}", state.options.analyze.chart);

        Self {
            state,
            url_text: s!(),
            out_path_text,
            out_path_dirty: false,
            status: Arc::new(Mutex::new(s!("Idle"))),
            fetched: None,
            view: None,
            view_note: None,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    /// Rebuild table + chart from the fetched counts under the current
    /// options. Cheap; no network.
    pub fn rebuild_view(&mut self) {
        self.view = None;
        self.view_note = None;

        let Some(fetched) = &self.fetched else { return };

        match analyze::rank_and_shape(&fetched.counts, &self.state.options.analyze) {
            Ok((_, table, chart)) => {
                self.view = Some(View { table, chart });
                self.status("Ready");
            }
            Err(e) => {
                logd!("View: {}", e);
                self.view_note = Some(e.to_string());
                self.status(e.to_string());
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("controls")
            .resizable(false)
            .show(ctx, |ui| {
                components::controls_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            components::fetch_bar::draw(ui, self);

            ui.separator();

            egui::ScrollArea::vertical().show(ui, |ui| {
                if let Some(fetched) = &self.fetched {
                    let preview = fetched.preview.clone();
                    egui::CollapsingHeader::new("Text preview")
                        .default_open(self.state.gui.preview_open)
                        .show(ui, |ui| {
                            ui.label(preview);
                        });
                    ui.separator();
                }

                components::freq_table::draw(ui, self);
                ui.separator();
                components::chart_canvas::draw(ui, self);
            });
        });
    }
}
