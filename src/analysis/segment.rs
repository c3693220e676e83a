// src/analysis/segment.rs

use std::collections::HashSet;

use chinese_segmenter::{initialize, tokenize};
use once_cell::sync::Lazy;

/// Common function words and interjections, excluded regardless of
/// frequency.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "的", "地", "得", "我", "你", "他", "她", "它", "我们", "你们", "他们",
        "是", "在", "有", "就", "不", "和", "也", "都", "这", "那", "着", "了",
        "过", "将", "要", "能", "会", "可以", "对", "对于", "关于", "与", "及",
        "或", "一个", "一些", "这种", "那种", "这里", "那里", "什么", "怎么",
        "为什么", "哪", "哪一个", "谁", "如何", "哦", "啊", "呀", "呢", "吧",
        "吗", "嗯", "哈", "嘿", "喂", "哎", "呃", "且", "而", "若", "因", "为",
        "之", "其", "所", "以", "并", "还", "只", "又", "更", "最", "很", "挺",
    ]
    .into_iter()
    .collect()
});

// CJK unified ideographs; tokens with anything outside this range
// (punctuation, digits, Latin, other scripts) don't qualify.
fn is_cjk(c: char) -> bool {
    ('\u{4e00}'..='\u{9fa5}').contains(&c)
}

/// Token qualification: longer than one character, CJK-only, not a
/// stop-word.
pub fn keep_token(tok: &str) -> bool {
    let mut chars = 0usize;
    for c in tok.chars() {
        if !is_cjk(c) {
            return false;
        }
        chars += 1;
    }
    chars > 1 && !STOP_WORDS.contains(tok)
}

/// Segment cleaned text into qualifying word tokens.
///
/// The text is cut into maximal CJK runs first and each run goes through
/// the dictionary segmenter, so word boundaries never depend on whitespace.
pub fn segment_words(text: &str) -> Vec<String> {
    initialize();

    let mut out = Vec::new();
    for run in cjk_runs(text) {
        for tok in tokenize(run) {
            if keep_token(tok) {
                out.push(s!(tok));
            }
        }
    }
    out
}

/// Maximal substrings of CJK ideographs.
fn cjk_runs(text: &str) -> Vec<&str> {
    let mut runs = Vec::new();
    let mut start: Option<usize> = None;
    for (i, c) in text.char_indices() {
        if is_cjk(c) {
            if start.is_none() {
                start = Some(i);
            }
        } else if let Some(at) = start.take() {
            runs.push(&text[at..i]);
        }
    }
    if let Some(at) = start {
        runs.push(&text[at..]);
    }
    runs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keep_token_rejects_non_qualifiers() {
        assert!(keep_token("狐狸"));
        assert!(!keep_token(""));
        assert!(!keep_token("狐"));          // single character
        assert!(!keep_token("我们"));        // stop-word
        assert!(!keep_token("可以"));        // stop-word
        assert!(!keep_token("ab"));          // Latin
        assert!(!keep_token("12"));          // digits
        assert!(!keep_token("狐狸!"));       // punctuation
        assert!(!keep_token("狐a"));         // mixed script
        assert!(!keep_token("词，频"));      // CJK punctuation
    }

    #[test]
    fn cjk_runs_split_on_foreign_chars() {
        assert_eq!(cjk_runs("abc中文def国字123"), vec!["中文", "国字"]);
        assert_eq!(cjk_runs("中文"), vec!["中文"]);
        assert!(cjk_runs("plain ascii").is_empty());
    }
}
