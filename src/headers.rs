//! Sender and date extraction from quoted header lines

use crate::locale::{from_label_alternation, sent_label_alternation};
use crate::text::strip_html_to_text;
use crate::types::{DateInfo, SenderInfo};
use chrono::DateTime;
use regex::Regex;
use std::sync::LazyLock;

// The captured value may carry an anchor around a mailto link, so inline
// <a> tags are allowed inside the span and stripped afterwards.
static FROM_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)<b[^>]*>\s*(?:{})\s*:\s*</b>\s*((?:[^<\r\n]|<a[^>]*>|</a>)+)",
        from_label_alternation()
    ))
    .unwrap()
});

static SENT_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)<b[^>]*>\s*(?:{})\s*:\s*</b>\s*([^<]+)",
        sent_label_alternation()
    ))
    .unwrap()
});

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap()
});

/// Extract the sender from the first localized From header line.
///
/// All fields stay empty when no header line matches.
#[must_use]
pub fn extract_sender(html: &str) -> SenderInfo {
    let Some(caps) = FROM_HEADER_REGEX.captures(html) else {
        return SenderInfo::default();
    };

    let raw = strip_html_to_text(caps[1].trim());

    let email = EMAIL_REGEX
        .find(&raw)
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    // Display name precedes an angle-bracketed address; otherwise it is
    // whatever text remains once the bare address is removed.
    let name = raw.find('<').map_or_else(
        || raw.replace(&email, "").trim().trim_matches('"').to_string(),
        |pos| raw[..pos].trim().trim_matches('"').to_string(),
    );

    SenderInfo { name, email, raw }
}

/// Extract and parse the date from the first localized Sent/Date header
/// line.
///
/// The raw value is parsed as an RFC 2822 date; on failure it is retained
/// as `parsed` and the timestamp stays absent.
#[must_use]
pub fn parse_received_date(html: &str) -> DateInfo {
    let Some(caps) = SENT_HEADER_REGEX.captures(html) else {
        return DateInfo::default();
    };

    let raw = caps[1].trim().to_string();

    DateTime::parse_from_rfc2822(&raw).map_or_else(
        |_| DateInfo {
            raw: raw.clone(),
            parsed: raw.clone(),
            timestamp: None,
        },
        |dt| DateInfo {
            raw: raw.clone(),
            parsed: dt.to_rfc3339(),
            timestamp: Some(dt.timestamp()),
        },
    )
}
