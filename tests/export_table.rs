// tests/export_table.rs
//
// Table building and CSV/TSV export behavior.
//
use cifreq::analysis::{freq::WordCounts, rank::rank};
use cifreq::chart::ChartKind;
use cifreq::config::options::{ExportFormat, ExportOptions};
use cifreq::csv::{parse_rows, to_export_string};
use cifreq::table::{TABLE_HEADERS, ranking_table};

fn sample_table() -> cifreq::table::DataSet {
    let stream = ["城市", "城市", "城市", "发展", "发展", "经济", "经济"];
    let wc = WordCounts::from_tokens(stream);
    ranking_table(&rank(&wc, 2).unwrap())
}

#[test]
fn table_rows_are_rank_word_count() {
    let ds = sample_table();
    assert_eq!(
        ds.headers.as_deref().unwrap(),
        &TABLE_HEADERS.map(String::from)
    );
    assert_eq!(ds.rows.len(), 3);
    assert_eq!(ds.rows[0], vec!["1", "城市", "3"]);
    assert_eq!(ds.rows[1], vec!["2", "发展", "2"]);
    assert_eq!(ds.rows[2], vec!["3", "经济", "2"]);
}

#[test]
fn export_string_headers_toggle() {
    let ds = sample_table();

    let with = to_export_string(&ds.headers, &ds.rows, true, ',');
    assert!(with.starts_with("Rank,Word,Count\n"));

    let without = to_export_string(&ds.headers, &ds.rows, false, ',');
    assert!(without.starts_with("1,城市,3\n"));
    assert_eq!(without.lines().count(), 3);
}

#[test]
fn fields_with_delimiters_round_trip() {
    let rows = vec![vec!["a,b".to_string(), "plain".to_string(), "say \"hi\"".to_string()]];
    let text = to_export_string(&None, &rows, false, ',');
    assert_eq!(parse_rows(&text, ','), rows);
}

#[test]
fn out_path_extension_follows_format() {
    let mut export = ExportOptions::default();
    export.format = ExportFormat::Csv;
    assert!(export.out_path().to_string_lossy().ends_with(".csv"));

    export.format = ExportFormat::Tsv;
    assert!(export.out_path().to_string_lossy().ends_with(".tsv"));

    // A pasted extension is ignored; the format still controls it.
    export.set_path("somewhere/else/custom.data");
    let p = export.out_path();
    assert!(p.to_string_lossy().ends_with("custom.tsv"));
    assert!(p.starts_with("somewhere/else"));
}

#[test]
fn chart_json_lands_next_to_the_table() {
    let mut export = ExportOptions::default();
    export.set_path("out/run1/table.csv");
    let p = export.chart_path(ChartKind::HeatMap);
    assert_eq!(p.to_string_lossy().replace('\\', "/"), "out/run1/heatmap.json");
}
