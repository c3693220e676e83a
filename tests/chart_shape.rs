// tests/chart_shape.rs
//
// Shaping invariants per chart kind, including the padded heat-map grid.
//
use std::collections::HashSet;

use cifreq::analysis::freq::WordCounts;
use cifreq::analysis::rank::{Ranking, rank};
use cifreq::chart::{ChartData, ChartKind, shape};

/// Ranking with `n` distinct words, counts n+1, n, ..., 2 (all ≥ 2,
/// strictly descending so ordering is unambiguous).
fn ranking(n: usize) -> Ranking {
    let mut stream = Vec::new();
    for i in 0..n {
        let word = format!("第{i}词");
        for _ in 0..(n + 1 - i) {
            stream.push(word.clone());
        }
    }
    rank(&WordCounts::from_tokens(stream), 2).expect("non-empty")
}

#[test]
fn heat_map_with_exactly_ten_covers_the_grid() {
    let r = ranking(10);
    let ChartData::HeatMap(d) = shape(ChartKind::HeatMap, &r) else {
        panic!("wrong variant")
    };

    assert_eq!((d.rows, d.cols), (5, 2));
    assert_eq!(d.cells.len(), 10);

    // row = i/2, col = i%2; every input word appears exactly once.
    let mut seen = HashSet::new();
    for (i, cell) in d.cells.iter().enumerate() {
        assert_eq!(cell.row, i / 2);
        assert_eq!(cell.col, i % 2);
        assert!(!cell.word.is_empty());
        assert!(seen.insert(cell.word.clone()), "duplicate {}", cell.word);
        assert_eq!(cell.count, r.entries()[i].1);
    }
    assert_eq!(d.max, 11);
    assert_eq!(d.min, 2);
}

#[test]
fn heat_map_pads_when_fewer_than_ten_qualify() {
    let r = ranking(7);
    let ChartData::HeatMap(d) = shape(ChartKind::HeatMap, &r) else {
        panic!("wrong variant")
    };

    assert_eq!(d.cells.len(), 10);
    let placeholders = d.cells.iter().filter(|c| c.word.is_empty()).count();
    assert_eq!(placeholders, 3);
    assert!(d.cells.iter().filter(|c| c.word.is_empty()).all(|c| c.count == 0));
    // Scale bounds come from the real cells only.
    assert_eq!(d.max, 8);
    assert_eq!(d.min, 2);
}

#[test]
fn radar_is_limited_to_eight_axes() {
    let r = ranking(12);
    let ChartData::Radar(d) = shape(ChartKind::Radar, &r) else {
        panic!("wrong variant")
    };

    assert_eq!(d.axes.len(), 8);
    assert_eq!(d.values.len(), 8);
    assert_eq!(d.axis_max, 13); // top count among the 8
    assert!(d.values.iter().all(|v| *v <= d.axis_max));
}

#[test]
fn radar_with_fewer_entries_uses_what_qualifies() {
    let r = ranking(3);
    let ChartData::Radar(d) = shape(ChartKind::Radar, &r) else {
        panic!("wrong variant")
    };
    assert_eq!(d.axes.len(), 3);
    assert_eq!(d.axis_max, 4);
}

#[test]
fn line_marks_first_max_and_min() {
    let r = ranking(6);
    let ChartData::Line(d) = shape(ChartKind::Line, &r) else {
        panic!("wrong variant")
    };
    assert_eq!(d.max_at, 0);
    assert_eq!(d.min_at, d.counts.len() - 1);
    assert_eq!(d.words.len(), d.counts.len());
}

#[test]
fn cloud_uses_full_sequence_with_bounded_sizes() {
    let r = ranking(25);
    let ChartData::WordCloud(d) = shape(ChartKind::WordCloud, &r) else {
        panic!("wrong variant")
    };

    // Not truncated to 20: the cloud sees the whole filtered sequence.
    assert_eq!(d.words.len(), 25);
    for w in &d.words {
        assert!(w.size >= 15.0 && w.size <= 60.0, "size {}", w.size);
    }
    assert_eq!(d.words[0].size, 60.0);
    assert_eq!(d.words.last().unwrap().size, 15.0);
}

#[test]
fn top_twenty_charts_truncate() {
    let r = ranking(25);

    let ChartData::Bar(bar) = shape(ChartKind::Bar, &r) else {
        panic!("wrong variant")
    };
    assert_eq!(bar.words.len(), 20);
    assert_eq!(bar.counts.len(), 20);

    let ChartData::Pie(pie) = shape(ChartKind::Pie, &r) else {
        panic!("wrong variant")
    };
    assert_eq!(pie.slices.len(), 20);

    let ChartData::TreeMap(tm) = shape(ChartKind::TreeMap, &r) else {
        panic!("wrong variant")
    };
    assert_eq!(tm.root.children.len(), 20);
    assert!(tm.root.value.is_none());
    assert!(tm.root.children.iter().all(|n| n.value.is_some()));
}

#[test]
fn chart_kind_parse_round_trips() {
    for kind in ChartKind::ALL {
        assert_eq!(ChartKind::parse(kind.name()), Some(kind));
    }
    assert_eq!(ChartKind::parse("sparkline"), None);
}

#[test]
fn shaped_charts_serialize_with_a_kind_tag() {
    let r = ranking(5);
    let json = serde_json::to_value(shape(ChartKind::Pie, &r)).unwrap();
    assert_eq!(json["kind"], "pie");
    assert!(json["slices"].is_array());
}
