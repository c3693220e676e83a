// tests/segment_filter.rs
//
// Segmentation output only ever contains qualifying tokens, regardless of
// what the dictionary makes of the input.
//
use cifreq::analysis::segment::{keep_token, segment_words};

#[test]
fn segmented_tokens_all_qualify_and_come_from_the_text() {
    let text = "今天天气很好，我们一起去公园散步。Rust 2024 edition! 公园里人很多。";
    let tokens = segment_words(text);

    for tok in &tokens {
        assert!(keep_token(tok), "unqualified token {tok:?}");
        assert!(text.contains(tok.as_str()), "token {tok:?} not in text");
    }
}

#[test]
fn ascii_only_text_yields_nothing() {
    assert!(segment_words("no chinese here, just 123 ascii").is_empty());
}

#[test]
fn punctuation_and_digits_never_survive() {
    let text = "价格是100元，真的很便宜！email: test@example.com";
    for tok in segment_words(text) {
        assert!(tok.chars().all(|c| ('\u{4e00}'..='\u{9fa5}').contains(&c)));
        assert!(tok.chars().count() > 1);
    }
}
