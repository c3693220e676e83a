// src/table.rs

use crate::analysis::rank::Ranking;

pub const TABLE_HEADERS: [&str; 3] = ["Rank", "Word", "Count"];

/// Canonical tabular data: optional header row plus string rows.
#[derive(Clone, Debug, Default)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn header_count(&self) -> usize {
        self.headers.as_ref().map(|h| h.len()).unwrap_or(0)
    }
}

/// Rank / Word / Count table over the top-20 prefix.
pub fn ranking_table(ranking: &Ranking) -> DataSet {
    let headers = Some(TABLE_HEADERS.iter().map(|h| s!(*h)).collect());
    let rows = ranking
        .top()
        .iter()
        .enumerate()
        .map(|(i, (word, count))| {
            vec![(i + 1).to_string(), word.clone(), count.to_string()]
        })
        .collect();
    DataSet { headers, rows }
}
