// src/core/fetch.rs

// One GET per request, browser-like UA, fixed timeout, no retries.

use std::time::Duration;

use encoding_rs::{Encoding, UTF_8};
use thiserror::Error;

use crate::config::consts::{REQUEST_TIMEOUT_SECS, USER_AGENT};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request timed out; check that the URL is reachable")]
    Timeout,
    #[error("connection failed; check the URL and that the site is up")]
    Connection,
    #[error("HTTP error: status {0}")]
    Http(u16),
    #[error("fetch failed: {0}")]
    Other(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_connect() {
            FetchError::Connection
        } else if let Some(status) = e.status() {
            FetchError::Http(status.as_u16())
        } else {
            FetchError::Other(e.to_string())
        }
    }
}

/// GET `url` and return the decoded HTML document.
pub fn fetch_html(url: &str) -> Result<String, FetchError> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
        .build()?;

    let resp = client.get(url).send()?.error_for_status()?;
    let declared = header_charset(&resp);
    let bytes = resp.bytes()?;

    Ok(decode_body(&bytes, declared.as_deref()))
}

/// `charset=` parameter of the Content-Type header, if any.
fn header_charset(resp: &reqwest::blocking::Response) -> Option<String> {
    let ct = resp
        .headers()
        .get(reqwest::header::CONTENT_TYPE)?
        .to_str()
        .ok()?;
    for part in ct.split(';') {
        let part = part.trim().to_ascii_lowercase();
        if let Some(label) = part.strip_prefix("charset=") {
            let label = label.trim_matches(|c| c == '"' || c == '\'');
            if !label.is_empty() {
                return Some(s!(label));
            }
        }
    }
    None
}

/// Decode the body: header charset first, then a `<meta charset>` sniff of
/// the document head, then UTF-8. Mislabeled pages decode lossily rather
/// than fail.
fn decode_body(bytes: &[u8], declared: Option<&str>) -> String {
    let label = declared
        .map(|l| s!(l))
        .or_else(|| sniff_meta_charset(bytes));
    let enc = label
        .as_deref()
        .and_then(|l| Encoding::for_label(l.as_bytes()))
        .unwrap_or(UTF_8);
    let (text, _, _) = enc.decode(bytes);
    text.into_owned()
}

/// Look for `charset=...` in the first KiB of the body
/// (covers `<meta charset="x">` and the http-equiv form).
fn sniff_meta_charset(bytes: &[u8]) -> Option<String> {
    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(1024)]).to_ascii_lowercase();
    let at = head.find("charset=")? + "charset=".len();
    let rest = head[at..].trim_start_matches(|c| c == '"' || c == '\'');
    let end = rest
        .find(|c: char| matches!(c, '"' | '\'' | '>' | ';' | '/') || c.is_whitespace())
        .unwrap_or(rest.len());
    let label = rest[..end].trim();
    if label.is_empty() { None } else { Some(s!(label)) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sniffs_meta_charset_variants() {
        assert_eq!(
            sniff_meta_charset(br#"<html><head><meta charset="gbk"></head>"#),
            Some(s!("gbk"))
        );
        assert_eq!(
            sniff_meta_charset(
                br#"<meta http-equiv="Content-Type" content="text/html; charset=GB2312">"#
            ),
            Some(s!("gb2312"))
        );
        assert_eq!(sniff_meta_charset(b"<html><body>plain</body></html>"), None);
    }

    #[test]
    fn decodes_gbk_when_declared() {
        // "中文" in GBK
        let bytes = [0xd6, 0xd0, 0xce, 0xc4];
        assert_eq!(decode_body(&bytes, Some("gbk")), "中文");
    }

    #[test]
    fn falls_back_to_utf8() {
        assert_eq!(decode_body("中文".as_bytes(), None), "中文");
    }
}
