//! HTML to plain text rendering

use regex::Regex;
use std::sync::LazyLock;

static BR_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());

static PARA_CLOSE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)</p>").unwrap());

static TAG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

static BLANK_RUN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Convert HTML to plain text.
///
/// Line breaks and paragraph closers become newlines, remaining tags are
/// stripped, the common entity set is decoded and blank runs are collapsed.
#[must_use]
pub fn strip_html_to_text(html: &str) -> String {
    let text = BR_REGEX.replace_all(html, "\n");
    let text = PARA_CLOSE_REGEX.replace_all(&text, "\n");
    let text = TAG_REGEX.replace_all(&text, "");

    let text = text
        .replace("&nbsp;", " ")
        .replace("&#160;", " ")
        .replace("&#xA0;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&");

    BLANK_RUN_REGEX.replace_all(&text, "\n\n").trim().to_string()
}
