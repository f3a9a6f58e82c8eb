//! Trailing signature block isolation

use crate::text::strip_html_to_text;
use regex::Regex;
use std::sync::LazyLock;

// Structural forms, tried in order; the matched span runs to the end of
// content and becomes the signature.
static STRUCTURAL_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r#"(?is)<div[^>]*class="[^"]*signature[^"]*"[^>]*>.*$"#).unwrap(),
        Regex::new(r"(?is)<p[^>]*>\s*--\s*</p>.*$").unwrap(),
        Regex::new(r"(?is)<div[^>]*>\s*--\s*<br\s*/?>.*$").unwrap(),
    ]
});

static NAME_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w\s\-.]+$").unwrap());

static BLANK_LINE_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\n[ \t]*){4,}").unwrap());

/// Separate a trailing signature block from extracted content.
///
/// Returns `(remaining, signature_text)`. Structural patterns are tried
/// first (a signature-class container, a paragraph holding only `--`, a
/// div opening with `--` and a line break); when none match, the document
/// is flattened to plain text and scanned from the end for a bare `--`
/// separator line, then for a short trailing name block. When the
/// text-level fallbacks fire, the remaining content is the flattened text
/// rather than the original markup.
///
/// With `include_signature` false, no extraction is attempted.
#[must_use]
pub fn extract_signature(html: &str, include_signature: bool) -> (String, String) {
    if !include_signature {
        return (html.to_string(), String::new());
    }

    for pattern in &*STRUCTURAL_REGEXES {
        if let Some(m) = pattern.find(html) {
            let remaining = format!("{}{}", &html[..m.start()], &html[m.end()..]);
            return (remaining, normalize_signature(m.as_str()));
        }
    }

    let flat = strip_html_to_text(html);
    let lines: Vec<&str> = flat.lines().collect();

    // A line holding only `--` (or its typographic equivalents) separates
    // body from signature.
    for (i, line) in lines.iter().enumerate().rev() {
        if matches!(line.trim(), "--" | "\u{2013}" | "\u{2014}") {
            let remaining = lines[..i].join("\n");
            let signature = lines[i..].join("\n");
            return (remaining, normalize_signature(&signature));
        }
    }

    // Name heuristic: two trailing lines of plain word content, the last
    // longer than three characters, suggest a name/contact block.
    if lines.len() >= 3 {
        let last = lines[lines.len() - 1];
        let second_last = lines[lines.len() - 2];
        if NAME_LINE_REGEX.is_match(last)
            && NAME_LINE_REGEX.is_match(second_last)
            && last.trim().len() > 3
        {
            let remaining = lines[..lines.len() - 3].join("\n");
            let signature = lines[lines.len() - 3..].join("\n");
            return (remaining, normalize_signature(&signature));
        }
    }

    (html.to_string(), String::new())
}

/// Collapse a signature to trimmed plain text with at most one blank line
/// between runs.
fn normalize_signature(signature: &str) -> String {
    let text = if signature.contains('<') {
        strip_html_to_text(signature)
    } else {
        signature.to_string()
    };

    BLANK_LINE_RUN_REGEX
        .replace_all(&text, "\n\n")
        .trim()
        .to_string()
}
