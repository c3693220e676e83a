// src/gui/actions.rs
//
// Button "executive" actions. Keeps UI code (layout) in the components and
// the operational logic here.

use crate::{
    analyze,
    config::consts::PREVIEW_CHARS,
    core::sanitize,
    export,
    gui::app::{App, Fetched},
    gui::progress::GuiProgress,
};

/// Fetch + segment + count the current URL, then build the view.
/// Runs on the UI thread; status updates go through GuiProgress.
pub fn analyze(app: &mut App) {
    let url = app.url_text.trim().to_string();
    if url.is_empty() {
        app.status("Enter an article URL first");
        return;
    }
    app.state.options.analyze.url = s!(&url);

    logf!("Analyze: Begin url={}", url);
    let mut prog = GuiProgress::new(app.status.clone());

    match analyze::fetch_and_count(&url, Some(&mut prog)) {
        Ok((text, counts)) => {
            logf!("Analyze: OK chars={} distinct_words={}", text.chars().count(), counts.len());
            let preview = sanitize::preview_snippet(&text, PREVIEW_CHARS);
            app.fetched = Some(Fetched { url, text, preview, counts });
            app.rebuild_view();
        }
        Err(e) => {
            loge!("Analyze: Error url={}: {}", url, e);
            app.fetched = None;
            app.view = None;
            app.view_note = None;
            app.status(format!("Error: {e}"));
        }
    }
}

/// Write the current table using the export options (path from the text
/// field, delimiter from the format toggle).
pub fn export_table(app: &mut App) {
    let Some(view) = &app.view else {
        app.status("Nothing to export yet");
        return;
    };

    app.state.options.export.set_path(&app.out_path_text);

    match export::write_table(&app.state.options.export, &view.table) {
        Ok(path) => {
            logf!("Export: table → {}", path.display());
            app.status(format!("Wrote {}", path.display()));
        }
        Err(e) => {
            loge!("Export: table failed: {}", e);
            app.status(format!("Export failed: {e}"));
        }
    }
}

/// Write the shaped chart next to the table as `<kind>.json`.
pub fn export_chart(app: &mut App) {
    let Some(view) = &app.view else {
        app.status("Nothing to export yet");
        return;
    };

    app.state.options.export.set_path(&app.out_path_text);
    let path = app
        .state
        .options
        .export
        .chart_path(app.state.options.analyze.chart);

    match export::write_chart_json(&path, &view.chart) {
        Ok(()) => {
            logf!("Export: chart → {}", path.display());
            app.status(format!("Wrote {}", path.display()));
        }
        Err(e) => {
            loge!("Export: chart failed: {}", e);
            app.status(format!("Export failed: {e}"));
        }
    }
}
