// src/chart/shape.rs

use crate::analysis::rank::Ranking;
use crate::config::consts::{
    CLOUD_SIZE_MAX, CLOUD_SIZE_MIN, HEAT_COLS, HEAT_ROWS, RADAR_LIMIT,
};

use super::*;

/// Shape ranked data for one chart kind. Dispatched once; each arm builds
/// the layout that kind's renderer needs.
pub fn shape(kind: ChartKind, ranking: &Ranking) -> ChartData {
    match kind {
        ChartKind::WordCloud => ChartData::WordCloud(word_cloud(ranking)),
        ChartKind::Bar => ChartData::Bar(series(
            ranking,
            "Top 20 words",
            "Occurrences, ranked",
        )),
        ChartKind::Line => ChartData::Line(line(ranking)),
        ChartKind::Pie => ChartData::Pie(pie(ranking)),
        ChartKind::Radar => ChartData::Radar(radar(ranking)),
        ChartKind::Scatter => ChartData::Scatter(series(
            ranking,
            "Frequency scatter",
            "Word vs. occurrences",
        )),
        ChartKind::HeatMap => ChartData::HeatMap(heat_map(ranking)),
        ChartKind::TreeMap => ChartData::TreeMap(tree_map(ranking)),
    }
}

fn head(title: &str, subtitle: &str) -> ChartHead {
    ChartHead { title: s!(title), subtitle: s!(subtitle) }
}

/// The cloud consumes the whole filtered sequence, not just the top 20.
fn word_cloud(r: &Ranking) -> WordCloudData {
    let hi = r.max_count();
    let lo = r.entries().last().map(|(_, c)| *c).unwrap_or(0);
    let span = hi.saturating_sub(lo).max(1) as f32;

    let words = r
        .entries()
        .iter()
        .map(|(w, c)| CloudWord {
            word: w.clone(),
            count: *c,
            size: CLOUD_SIZE_MIN
                + (c - lo) as f32 / span * (CLOUD_SIZE_MAX - CLOUD_SIZE_MIN),
        })
        .collect();

    WordCloudData {
        head: head("Word cloud", "Bigger words occur more often"),
        words,
    }
}

fn series(r: &Ranking, title: &str, subtitle: &str) -> SeriesData {
    let (words, counts) = split_pairs(r.top());
    SeriesData { head: head(title, subtitle), words, counts }
}

fn line(r: &Ranking) -> LineData {
    let (words, counts) = split_pairs(r.top());
    let (max_at, min_at) = extremes(&counts);
    LineData {
        head: head("Frequency trend", "Top 20 with peak and floor marked"),
        words,
        counts,
        max_at,
        min_at,
    }
}

fn pie(r: &Ranking) -> PieData {
    PieData {
        head: head("Frequency share", "Top 20 as proportions"),
        slices: r.top().to_vec(),
    }
}

fn radar(r: &Ranking) -> RadarData {
    let top: Vec<_> = r.top().iter().take(RADAR_LIMIT).cloned().collect();
    let (axes, values) = split_pairs(&top);
    // Ranking is non-empty by construction, so the max is well-defined.
    let axis_max = values.iter().copied().max().unwrap_or(1);
    RadarData {
        head: head("Top 8 comparison", "One axis per word"),
        axes,
        values,
        axis_max,
    }
}

/// First rows×cols entries laid out row-major (row = i / cols,
/// col = i % cols). Under-filled grids get zero-count placeholder cells
/// rather than failing.
fn heat_map(r: &Ranking) -> HeatMapData {
    let want = HEAT_ROWS * HEAT_COLS;
    let mut pairs: Vec<(String, u32)> =
        r.top().iter().take(want).cloned().collect();
    let real = pairs.len();
    while pairs.len() < want {
        pairs.push((s!(), 0));
    }

    let min = pairs[..real].iter().map(|(_, c)| *c).min().unwrap_or(0);
    let max = pairs[..real].iter().map(|(_, c)| *c).max().unwrap_or(0);

    let cells = pairs
        .into_iter()
        .enumerate()
        .map(|(i, (word, count))| HeatCell {
            row: i / HEAT_COLS,
            col: i % HEAT_COLS,
            word,
            count,
        })
        .collect();

    HeatMapData {
        head: head("Frequency heat map", "Top 10 in a 5x2 grid"),
        rows: HEAT_ROWS,
        cols: HEAT_COLS,
        cells,
        min,
        max,
    }
}

fn tree_map(r: &Ranking) -> TreeMapData {
    let children = r
        .top()
        .iter()
        .map(|(w, c)| TreeNode {
            name: w.clone(),
            value: Some(*c),
            children: Vec::new(),
        })
        .collect();

    TreeMapData {
        head: head("Frequency tree map", "Top 20 under one root"),
        root: TreeNode {
            name: s!("All words"),
            value: None,
            children,
        },
    }
}

/* ---------------- helpers ---------------- */

fn split_pairs(pairs: &[(String, u32)]) -> (Vec<String>, Vec<u32>) {
    let words = pairs.iter().map(|(w, _)| w.clone()).collect();
    let counts = pairs.iter().map(|(_, c)| *c).collect();
    (words, counts)
}

/// Indices of the first maximum and first minimum.
fn extremes(counts: &[u32]) -> (usize, usize) {
    let mut max_at = 0;
    let mut min_at = 0;
    for (i, &c) in counts.iter().enumerate() {
        if c > counts[max_at] {
            max_at = i;
        }
        if c < counts[min_at] {
            min_at = i;
        }
    }
    (max_at, min_at)
}
