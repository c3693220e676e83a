// src/core/extract.rs

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use super::sanitize::normalize_ws;

/// Non-content regions dropped before text extraction.
static DROP: Lazy<Selector> = Lazy::new(|| {
    Selector::parse("script, style, nav, header, footer, aside").expect("static selector")
});

/// Visible text of an HTML document: boilerplate subtrees removed, remaining
/// text whitespace-collapsed and trimmed.
pub fn visible_text(html_doc: &str) -> String {
    let mut doc = Html::parse_document(html_doc);

    // Collect first, detach second; detaching invalidates the selection.
    let ids: Vec<_> = doc.select(&DROP).map(|el| el.id()).collect();
    for id in ids {
        if let Some(mut node) = doc.tree.get_mut(id) {
            node.detach();
        }
    }

    let text: String = doc
        .root_element()
        .text()
        .collect::<Vec<_>>()
        .join(" ");
    normalize_ws(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_boilerplate_subtrees() {
        let doc = r#"<html><head><style>p { color: red; }</style></head>
            <body>
              <nav>home about</nav>
              <p>first   paragraph</p>
              <script>var x = "noise";</script>
              <footer>copyright</footer>
            </body></html>"#;
        assert_eq!(visible_text(doc), "first paragraph");
    }

    #[test]
    fn collapses_whitespace_across_elements() {
        let doc = "<p>one</p>\n\n<p>two\tthree</p>";
        assert_eq!(visible_text(doc), "one two three");
    }
}
