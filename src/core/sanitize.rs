// src/core/sanitize.rs

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// First `limit` characters, with a trailing ellipsis when truncated.
pub fn preview_snippet(s: &str, limit: usize) -> String {
    let mut it = s.chars();
    let head: String = it.by_ref().take(limit).collect();
    if it.next().is_some() { format!("{head}...") } else { head }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_ws_collapses_and_trims() {
        assert_eq!(normalize_ws("  a\t\tb \n c  "), "a b c");
        assert_eq!(normalize_ws(""), "");
    }

    #[test]
    fn preview_truncates_on_chars_not_bytes() {
        assert_eq!(preview_snippet("中文内容", 2), "中文...");
        assert_eq!(preview_snippet("short", 10), "short");
    }
}
