// src/export.rs

use std::{
    error::Error,
    fs,
    path::{Path, PathBuf},
};

use crate::chart::ChartData;
use crate::config::options::ExportOptions;
use crate::csv;
use crate::table::DataSet;

/// Write the ranking table according to `export` (path, headers policy,
/// delimiter). Returns the final path written to.
pub fn write_table(
    export: &ExportOptions,
    data: &DataSet,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = export.out_path();
    ensure_parent(&path)?;

    let contents = csv::to_export_string(
        &data.headers,
        &data.rows,
        export.include_headers,
        export.format.delim(),
    );
    fs::write(&path, contents)?;
    Ok(path)
}

/// Write a shaped chart as pretty-printed JSON.
pub fn write_chart_json(
    path: &Path,
    chart: &ChartData,
) -> Result<(), Box<dyn Error>> {
    ensure_parent(path)?;
    fs::write(path, serde_json::to_vec_pretty(chart)?)?;
    Ok(())
}

pub fn ensure_directory(dir: &Path) -> Result<(), Box<dyn Error>> {
    if dir.exists() && !dir.is_dir() {
        return Err(format!("Path exists but is not a directory: {}", dir.display()).into());
    }
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(())
}
