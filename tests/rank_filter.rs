// tests/rank_filter.rs
//
// Ranker/filter properties: threshold, ordering, prefix length,
// monotonicity, tie stability.
//
use cifreq::analysis::freq::WordCounts;
use cifreq::analysis::rank::rank;
use cifreq::analysis::segment::keep_token;

/// Expand (token, count) pairs into a flat token stream.
fn tokens(pairs: &[(&str, u32)]) -> Vec<String> {
    let mut out = Vec::new();
    for (tok, n) in pairs {
        for _ in 0..*n {
            out.push(tok.to_string());
        }
    }
    out
}

#[test]
fn threshold_and_descending_order() {
    let wc = WordCounts::from_tokens(tokens(&[
        ("发展", 7),
        ("经济", 4),
        ("城市", 2),
        ("建设", 1),
    ]));

    let ranking = rank(&wc, 2).expect("entries qualify");
    for (_, c) in ranking.entries() {
        assert!(*c >= 2);
    }
    let counts: Vec<u32> = ranking.entries().iter().map(|(_, c)| *c).collect();
    assert_eq!(counts, vec![7, 4, 2]);
    assert!(ranking.entries().iter().all(|(w, _)| w != "建设"));
}

#[test]
fn quick_fox_scenario_in_chinese() {
    // "the quick quick fox fox fox": stop-word filtered, then counted.
    let stream = ["的", "快快", "快快", "狐狸", "狐狸", "狐狸"];
    let wc = WordCounts::from_tokens(stream.into_iter().filter(|t| keep_token(t)));

    assert_eq!(wc.len(), 2);
    assert_eq!(wc.get("快快"), 2);
    assert_eq!(wc.get("狐狸"), 3);
    assert_eq!(wc.get("的"), 0);

    let ranking = rank(&wc, 2).unwrap();
    let got: Vec<(&str, u32)> = ranking
        .entries()
        .iter()
        .map(|(w, c)| (w.as_str(), *c))
        .collect();
    assert_eq!(got, vec![("狐狸", 3), ("快快", 2)]);
}

#[test]
fn ties_keep_first_seen_order() {
    let wc = WordCounts::from_tokens(tokens(&[
        ("乙词", 3),
        ("甲词", 3),
        ("丙词", 3),
    ]));

    let ranking = rank(&wc, 1).unwrap();
    let order: Vec<&str> = ranking.entries().iter().map(|(w, _)| w.as_str()).collect();
    assert_eq!(order, vec!["乙词", "甲词", "丙词"]);
}

#[test]
fn top_prefix_is_min_of_20_and_qualifying() {
    // 25 distinct words, all with count 2.
    let pairs: Vec<(String, u32)> = (0..25).map(|i| (format!("词{i}"), 2)).collect();
    let borrowed: Vec<(&str, u32)> =
        pairs.iter().map(|(w, c)| (w.as_str(), *c)).collect();
    let wc = WordCounts::from_tokens(tokens(&borrowed));

    let ranking = rank(&wc, 2).unwrap();
    assert_eq!(ranking.len(), 25);
    assert_eq!(ranking.top().len(), 20);

    let small = rank(&wc, 3);
    assert!(small.is_none());
}

#[test]
fn raising_threshold_only_removes_entries() {
    let wc = WordCounts::from_tokens(tokens(&[
        ("一号", 9),
        ("二号", 6),
        ("三号", 4),
        ("四号", 2),
        ("五号", 1),
    ]));

    let mut prev: Option<Vec<String>> = None;
    for k in 1..=20 {
        let words: Vec<String> = match rank(&wc, k) {
            Some(r) => r.entries().iter().map(|(w, _)| w.clone()).collect(),
            None => Vec::new(),
        };
        if let Some(prev) = &prev {
            assert!(words.iter().all(|w| prev.contains(w)), "k={k} grew the set");
            assert!(words.len() <= prev.len());
        }
        prev = Some(words);
    }
}

#[test]
fn empty_result_when_threshold_above_max() {
    let wc = WordCounts::from_tokens(tokens(&[("少见", 3)]));
    assert!(rank(&wc, 4).is_none());
}
