//! Format-specific quote boundary location

use crate::repair::repair_structure;
use crate::types::FormatTag;
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

// Candidate patterns per format are tried in order; the first match wins.
// O365 nests its reply marker at varying depths, so the marker-plus-sibling
// form is tried before the bare marker.
static O365_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r#"(?is)<div[^>]*id="divRplyFwdMsg"[^>]*>.*?</div>\s*<div[^>]*>.*"#).unwrap(),
        Regex::new(r#"(?is)<div[^>]*class="RplyEdtPrsngMsg"[^>]*>.*?</div>\s*<div[^>]*>.*"#)
            .unwrap(),
        Regex::new(r#"(?is)<div[^>]*id="divRplyFwdMsg"[^>]*>.*"#).unwrap(),
    ]
});

static OUTLOOK_DESKTOP_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<div[^>]*style="[^"]*border-top:(?:solid|double)[^"]*"[^>]*>.*"#).unwrap()
});

static GMAIL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r#"(?is)<div[^>]*class="[^"]*gmail_quote[^"]*"[^>]*>.*?</div>"#).unwrap(),
        Regex::new(r"(?is)<blockquote[^>]*>.*?</blockquote>").unwrap(),
    ]
});

static YAHOO_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<blockquote[^>]*>.*?</blockquote>").unwrap());

/// Split a document into a head (new content candidate) and its quoted
/// remainder, using format-specific rules.
///
/// For O365 and Outlook Desktop the quote is assumed to be a trailing
/// suffix: `quoted` is the marker and everything after it. For Gmail and
/// Yahoo the first quote container is excised from the middle of the
/// document, preserving any content after it in the head. Other formats
/// are returned unsplit.
///
/// When a boundary is found the head is passed through tag-balance repair.
#[must_use]
pub fn locate_quote_boundary(html: &str, format: FormatTag) -> (String, String) {
    let (head, quoted) = match format {
        FormatTag::O365 => truncate_at_first(html, O365_PATTERNS.as_slice()),
        FormatTag::OutlookDesktop => {
            truncate_at_first(html, std::slice::from_ref(&*OUTLOOK_DESKTOP_PATTERN))
        }
        FormatTag::Gmail => excise_first(html, GMAIL_PATTERNS.as_slice()),
        FormatTag::Yahoo => excise_first(html, std::slice::from_ref(&*YAHOO_PATTERN)),
        _ => (html.to_string(), String::new()),
    };

    if quoted.is_empty() {
        (head, quoted)
    } else {
        debug!(format = %format, quoted_len = quoted.len(), "quote boundary located");
        (repair_structure(&head), quoted)
    }
}

/// Trailing-suffix semantics: everything from the first match onward is
/// quoted history.
fn truncate_at_first(html: &str, patterns: &[Regex]) -> (String, String) {
    for pattern in patterns {
        if let Some(m) = pattern.find(html) {
            return (html[..m.start()].to_string(), html[m.start()..].to_string());
        }
    }
    (html.to_string(), String::new())
}

/// Mid-document excision: only the matched span is quoted, content after
/// it stays in the head.
fn excise_first(html: &str, patterns: &[Regex]) -> (String, String) {
    for pattern in patterns {
        if let Some(m) = pattern.find(html) {
            let mut head = String::with_capacity(html.len() - m.len());
            head.push_str(&html[..m.start()]);
            head.push_str(&html[m.end()..]);
            return (head, m.as_str().to_string());
        }
    }
    (html.to_string(), String::new())
}
