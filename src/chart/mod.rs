// src/chart/mod.rs

pub mod shape;

pub use shape::shape;

use serde::Serialize;

/// The eight selectable visualizations. A closed set: both frontends pick
/// from `ALL`, so there is no "unknown kind" path past input parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    WordCloud,
    Bar,
    Line,
    Pie,
    Radar,
    Scatter,
    HeatMap,
    TreeMap,
}

impl ChartKind {
    pub const ALL: [ChartKind; 8] = [
        ChartKind::WordCloud,
        ChartKind::Bar,
        ChartKind::Line,
        ChartKind::Pie,
        ChartKind::Radar,
        ChartKind::Scatter,
        ChartKind::HeatMap,
        ChartKind::TreeMap,
    ];

    /// Human label for selectors.
    pub fn label(self) -> &'static str {
        match self {
            ChartKind::WordCloud => "Word cloud",
            ChartKind::Bar => "Ranked bars",
            ChartKind::Line => "Trend line",
            ChartKind::Pie => "Proportion pie",
            ChartKind::Radar => "Radar comparison",
            ChartKind::Scatter => "Scatter distribution",
            ChartKind::HeatMap => "Heat map",
            ChartKind::TreeMap => "Tree map",
        }
    }

    /// Stable machine name (CLI flag values, export file stems).
    pub fn name(self) -> &'static str {
        match self {
            ChartKind::WordCloud => "wordcloud",
            ChartKind::Bar => "bar",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
            ChartKind::Radar => "radar",
            ChartKind::Scatter => "scatter",
            ChartKind::HeatMap => "heatmap",
            ChartKind::TreeMap => "treemap",
        }
    }

    pub fn parse(s: &str) -> Option<ChartKind> {
        let s = s.to_ascii_lowercase();
        ChartKind::ALL.into_iter().find(|k| k.name() == s)
    }
}

/// Kind-specific data, shaped and ready for a renderer (or JSON export).
#[derive(Clone, Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartData {
    WordCloud(WordCloudData),
    Bar(SeriesData),
    Line(LineData),
    Pie(PieData),
    Radar(RadarData),
    Scatter(SeriesData),
    HeatMap(HeatMapData),
    TreeMap(TreeMapData),
}

impl ChartData {
    pub fn head(&self) -> &ChartHead {
        match self {
            ChartData::WordCloud(d) => &d.head,
            ChartData::Bar(d) | ChartData::Scatter(d) => &d.head,
            ChartData::Line(d) => &d.head,
            ChartData::Pie(d) => &d.head,
            ChartData::Radar(d) => &d.head,
            ChartData::HeatMap(d) => &d.head,
            ChartData::TreeMap(d) => &d.head,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct ChartHead {
    pub title: String,
    pub subtitle: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct CloudWord {
    pub word: String,
    pub count: u32,
    /// Pixel size, linear in count within [CLOUD_SIZE_MIN, CLOUD_SIZE_MAX].
    pub size: f32,
}

/// Full filtered sequence, sized by count, circular layout.
#[derive(Clone, Debug, Serialize)]
pub struct WordCloudData {
    pub head: ChartHead,
    pub words: Vec<CloudWord>,
}

/// Parallel top-20 arrays; used by both bar (horizontal) and scatter.
#[derive(Clone, Debug, Serialize)]
pub struct SeriesData {
    pub head: ChartHead,
    pub words: Vec<String>,
    pub counts: Vec<u32>,
}

/// Top-20 series with the maximum and minimum points marked.
#[derive(Clone, Debug, Serialize)]
pub struct LineData {
    pub head: ChartHead,
    pub words: Vec<String>,
    pub counts: Vec<u32>,
    pub max_at: usize,
    pub min_at: usize,
}

#[derive(Clone, Debug, Serialize)]
pub struct PieData {
    pub head: ChartHead,
    pub slices: Vec<(String, u32)>,
}

/// First 8 entries; one axis per word, all scaled to `axis_max`.
#[derive(Clone, Debug, Serialize)]
pub struct RadarData {
    pub head: ChartHead,
    pub axes: Vec<String>,
    pub values: Vec<u32>,
    pub axis_max: u32,
}

#[derive(Clone, Debug, Serialize)]
pub struct HeatCell {
    pub row: usize,
    pub col: usize,
    /// Empty for placeholder cells padded in when fewer than rows×cols
    /// entries qualify.
    pub word: String,
    pub count: u32,
}

#[derive(Clone, Debug, Serialize)]
pub struct HeatMapData {
    pub head: ChartHead,
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<HeatCell>,
    pub min: u32,
    pub max: u32,
}

#[derive(Clone, Debug, Serialize)]
pub struct TreeNode {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

/// Top-20 leaves under one synthetic overview root.
#[derive(Clone, Debug, Serialize)]
pub struct TreeMapData {
    pub head: ChartHead,
    pub root: TreeNode,
}
