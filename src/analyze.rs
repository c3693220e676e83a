// src/analyze.rs
//
// The whole pipeline, in strict sequence:
//   fetch → extract → segment → count → rank → table + chart
//
// Frontends that re-rank on control changes call fetch_and_count() once per
// URL and rank_and_shape() per change; run() does both for one-shot use.

use thiserror::Error;

use crate::{
    analysis::{
        freq::WordCounts,
        rank::{self, Ranking},
        segment,
    },
    chart::{self, ChartData},
    config::{
        consts::{MIN_COUNT_CEIL, MIN_COUNT_FLOOR, PREVIEW_CHARS},
        options::AnalyzeOptions,
    },
    core::{
        extract,
        fetch::{self, FetchError},
        sanitize,
    },
    progress::Progress,
    table::{self, DataSet},
};

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("no words cleared the frequency threshold; lower it and retry")]
    EmptyResult,
    #[error(
        "frequency threshold must be between {} and {}",
        MIN_COUNT_FLOOR,
        MIN_COUNT_CEIL
    )]
    BadThreshold,
}

/// Everything one request produces.
pub struct Analysis {
    pub url: String,
    pub text: String,
    pub preview: String,
    pub counts: WordCounts,
    pub ranking: Ranking,
    pub table: DataSet,
    pub chart: ChartData,
}

pub fn check_threshold(min_count: u32) -> Result<(), AnalyzeError> {
    if (MIN_COUNT_FLOOR..=MIN_COUNT_CEIL).contains(&min_count) {
        Ok(())
    } else {
        Err(AnalyzeError::BadThreshold)
    }
}

/// The heavy half: one network fetch, then segmentation and counting.
pub fn fetch_and_count(
    url: &str,
    mut progress: Option<&mut (dyn Progress + '_)>,
) -> Result<(String, WordCounts), AnalyzeError> {
    if let Some(p) = progress.as_deref_mut() {
        p.begin(3);
        p.log("Fetching article...");
    }
    let html_doc = fetch::fetch_html(url)?;
    let text = extract::visible_text(&html_doc);
    if let Some(p) = progress.as_deref_mut() {
        p.stage_done("fetch");
        p.log("Segmenting text...");
    }

    let tokens = segment::segment_words(&text);
    let counts = WordCounts::from_tokens(tokens);
    if let Some(p) = progress.as_deref_mut() {
        p.stage_done("segment");
    }

    Ok((text, counts))
}

/// The cheap half: threshold → ranking → table + shaped chart.
pub fn rank_and_shape(
    counts: &WordCounts,
    opts: &AnalyzeOptions,
) -> Result<(Ranking, DataSet, ChartData), AnalyzeError> {
    check_threshold(opts.min_count)?;
    let ranking =
        rank::rank(counts, opts.min_count).ok_or(AnalyzeError::EmptyResult)?;
    let data = table::ranking_table(&ranking);
    let shaped = chart::shape(opts.chart, &ranking);
    Ok((ranking, data, shaped))
}

/// One-shot pipeline for the CLI (and anything else without a resident UI).
pub fn run(
    opts: &AnalyzeOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<Analysis, AnalyzeError> {
    check_threshold(opts.min_count)?;

    let (text, counts) = fetch_and_count(&opts.url, progress.as_deref_mut())?;

    if let Some(p) = progress.as_deref_mut() {
        p.log("Ranking words...");
    }
    let (ranking, data, shaped) = rank_and_shape(&counts, opts)?;
    if let Some(p) = progress.as_deref_mut() {
        p.stage_done("rank");
        p.finish();
    }

    Ok(Analysis {
        url: s!(&opts.url),
        preview: sanitize::preview_snippet(&text, PREVIEW_CHARS),
        text,
        counts,
        ranking,
        table: data,
        chart: shaped,
    })
}
