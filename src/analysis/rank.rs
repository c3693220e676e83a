// src/analysis/rank.rs

use std::cmp::Reverse;

use crate::analysis::freq::WordCounts;
use crate::config::consts::TOP_LIMIT;

/// Threshold-filtered, descending-by-count view over a `WordCounts`.
///
/// Exposes both the full filtered sequence (the word cloud's proportional
/// view) and its first-20 prefix (everything else).
#[derive(Clone, Debug)]
pub struct Ranking {
    entries: Vec<(String, u32)>,
}

impl Ranking {
    /// All qualifying entries, highest count first; ties keep first-seen
    /// order.
    pub fn entries(&self) -> &[(String, u32)] {
        &self.entries
    }

    /// The prefix that drives the "top 20" charts and the table.
    pub fn top(&self) -> &[(String, u32)] {
        &self.entries[..self.entries.len().min(TOP_LIMIT)]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn max_count(&self) -> u32 {
        self.entries.first().map(|(_, c)| *c).unwrap_or(0)
    }
}

/// Keep entries with count ≥ `min_count` and sort. Returns `None` when
/// nothing qualifies; callers surface that as "lower the threshold".
pub fn rank(counts: &WordCounts, min_count: u32) -> Option<Ranking> {
    let mut entries: Vec<(String, u32)> = counts
        .iter()
        .filter(|(_, c)| *c >= min_count)
        .map(|(t, c)| (s!(t), c))
        .collect();

    // Stable sort: equal counts keep first-seen order.
    entries.sort_by_key(|(_, c)| Reverse(*c));

    if entries.is_empty() { None } else { Some(Ranking { entries }) }
}
