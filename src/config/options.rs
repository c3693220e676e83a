// src/config/options.rs
use std::path::{Path, PathBuf};

use super::consts::*;
use crate::chart::ChartKind;

#[derive(Clone, Debug, PartialEq)]
pub struct AppOptions {
    pub analyze: AnalyzeOptions,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            analyze: AnalyzeOptions::default(),
            export: ExportOptions::default(),
        }
    }
}

/// Request-scoped inputs for one analysis run: the URL, the frequency
/// threshold and the chart to shape. Passed into the pipeline explicitly;
/// nothing ambient.
#[derive(Clone, Debug, PartialEq)]
pub struct AnalyzeOptions {
    pub url: String,
    pub min_count: u32,
    pub chart: ChartKind,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            url: s!(),
            min_count: DEFAULT_MIN_COUNT,
            chart: ChartKind::WordCloud,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Tsv => "tsv" }
    }
    pub fn delim(&self) -> char {
        match self { ExportFormat::Csv => ',', ExportFormat::Tsv => '\t' }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    dir: PathBuf,
    file_stem: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: s!(DEFAULT_TABLE_STEM),
        }
    }
}

impl ExportOptions {
    /// Full table path: `<dir>/<stem>.<ext>` — the extension always follows
    /// the selected format.
    pub fn out_path(&self) -> PathBuf {
        self.dir.join(format!("{}.{}", self.file_stem, self.format.ext()))
    }

    /// Where the shaped chart JSON lands by default: `<dir>/<kind>.json`.
    pub fn chart_path(&self, kind: ChartKind) -> PathBuf {
        self.dir.join(format!("{}.json", kind.name()))
    }

    /// Parse user text into dir + stem. A pasted extension is ignored;
    /// the format controls it.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        if s.is_empty() {
            return;
        }
        let p = Path::new(s);
        if let Some(parent) = p.parent() {
            if !parent.as_os_str().is_empty() {
                self.dir = parent.to_path_buf();
            }
        }
        if let Some(stem) = p.file_stem() {
            self.file_stem = stem.to_string_lossy().into_owned();
        }
    }
}
