// src/cli.rs
use std::{env, error::Error, path::PathBuf};

use crate::{
    analyze,
    chart::ChartKind,
    config::{
        consts::{MIN_COUNT_CEIL, MIN_COUNT_FLOOR},
        options::{AnalyzeOptions, ExportFormat, ExportOptions},
    },
    export,
    progress::Progress,
};

struct CliProgress;
impl Progress for CliProgress {
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
}

struct CliParams {
    analyze: AnalyzeOptions,
    export: ExportOptions,
    write_table: bool,
    chart_out: Option<PathBuf>,
    preview: bool,
}

impl CliParams {
    fn new() -> Self {
        Self {
            analyze: AnalyzeOptions::default(),
            export: ExportOptions::default(),
            write_table: false,
            chart_out: None,
            preview: false,
        }
    }
}

pub fn run() -> Result<(), Box<dyn Error>> {
    let params = parse_cli()?;

    let mut prog = CliProgress;
    let analysis = analyze::run(&params.analyze, Some(&mut prog))?;

    if params.preview {
        println!("--- text preview ---");
        println!("{}", analysis.preview);
        println!("--------------------");
    }

    // Rank / Word / Count to stdout
    for row in &analysis.table.rows {
        println!("{:>4}  {}  ({})", row[0], row[1], row[2]);
    }

    if params.write_table {
        let path = export::write_table(&params.export, &analysis.table)?;
        eprintln!("Wrote {}", path.display());
    }
    if let Some(path) = &params.chart_out {
        export::write_chart_json(path, &analysis.chart)?;
        eprintln!("Wrote {}", path.display());
    }

    Ok(())
}

fn parse_cli() -> Result<CliParams, Box<dyn Error>> {
    let mut params = CliParams::new();

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--url" | "-u" => {
                params.analyze.url = args.next().ok_or("Missing value for --url")?;
            }
            "--min-count" | "-m" => {
                let v: u32 = args.next().ok_or("Missing value for --min-count")?.parse()?;
                if !(MIN_COUNT_FLOOR..=MIN_COUNT_CEIL).contains(&v) {
                    return Err(format!(
                        "Threshold out of range ({}..={})",
                        MIN_COUNT_FLOOR, MIN_COUNT_CEIL
                    )
                    .into());
                }
                params.analyze.min_count = v;
            }
            "--chart" | "-c" => {
                let v = args.next().ok_or("Missing value for --chart")?;
                params.analyze.chart = ChartKind::parse(&v)
                    .ok_or_else(|| format!("Unknown chart kind: {}", v))?;
            }
            "-o" | "--out" => {
                let v = args.next().ok_or("Missing output path")?;
                params.export.set_path(&v);
                params.write_table = true;
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "--no-headers" => params.export.include_headers = false,
            "--chart-out" => {
                params.chart_out =
                    Some(PathBuf::from(args.next().ok_or("Missing chart output path")?));
            }
            "--preview" => params.preview = true,
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            // A bare first argument is taken as the URL.
            other if params.analyze.url.is_empty() && !other.starts_with('-') => {
                params.analyze.url = s!(other);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if params.analyze.url.trim().is_empty() {
        return Err("Missing article URL (--url <address>)".into());
    }

    Ok(params)
}
