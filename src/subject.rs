//! Subject prefix normalization and subject drift detection

use crate::locale::{LOCALES, subject_label_alternation};
use crate::types::{ForwardInfo, SubjectChange, SubjectInfo};
use regex::Regex;
use std::sync::LazyLock;

// One pattern per prefix token, preserving locale table order. Reply
// prefixes accept a bracketed counter ("RE[3]:").
static REPLY_PREFIX_REGEXES: LazyLock<Vec<Regex>> =
    LazyLock::new(|| prefix_regexes(|t| t.reply_prefixes));

static FORWARD_PREFIX_REGEXES: LazyLock<Vec<Regex>> =
    LazyLock::new(|| prefix_regexes(|t| t.forward_prefixes));

static SUBJECT_HEADER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)<b[^>]*>\s*(?:{})\s*:\s*</b>\s*([^<]+)",
        subject_label_alternation()
    ))
    .unwrap()
});

fn prefix_regexes(select: fn(&crate::locale::LocaleTable) -> &'static [&'static str]) -> Vec<Regex> {
    LOCALES
        .iter()
        .flat_map(|table| select(table).iter())
        .map(|token| {
            Regex::new(&format!(
                r"(?i)^\s*({}(?:\[\d+\])?)\s*:\s*",
                regex::escape(token)
            ))
            .unwrap()
        })
        .collect()
}

/// Strip a localized reply or forward prefix from a subject line.
///
/// Reply prefixes are tried first across all locales; forward prefixes
/// only when no reply prefix matched, so at most one of the two flags is
/// ever set.
#[must_use]
pub fn clean_subject(subject: &str) -> SubjectInfo {
    for pattern in &*REPLY_PREFIX_REGEXES {
        if let Some(caps) = pattern.captures(subject) {
            return SubjectInfo {
                original: subject.to_string(),
                clean: subject[caps.get(0).map_or(0, |m| m.end())..].trim().to_string(),
                prefix: caps[1].to_string(),
                is_reply: true,
                is_forward: false,
            };
        }
    }

    for pattern in &*FORWARD_PREFIX_REGEXES {
        if let Some(caps) = pattern.captures(subject) {
            return SubjectInfo {
                original: subject.to_string(),
                clean: subject[caps.get(0).map_or(0, |m| m.end())..].trim().to_string(),
                prefix: caps[1].to_string(),
                is_reply: false,
                is_forward: true,
            };
        }
    }

    SubjectInfo {
        original: subject.to_string(),
        clean: subject.trim().to_string(),
        prefix: String::new(),
        is_reply: false,
        is_forward: false,
    }
}

/// Extract the first bold-labeled subject header and clean its prefix.
#[must_use]
pub fn extract_subject_info(html: &str) -> Option<SubjectInfo> {
    SUBJECT_HEADER_REGEX
        .captures(html)
        .map(|caps| clean_subject(caps[1].trim()))
}

static FORWARD_PHRASE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)forwarded message|doorgestuurd bericht|message transf\u{e9}r\u{e9}|weitergeleitete nachricht",
    )
    .unwrap()
});

/// Count forward markers: subject headers carrying a forward prefix plus
/// forwarding-language phrases in the body.
#[must_use]
pub fn detect_forward(html: &str) -> ForwardInfo {
    let prefix_count = SUBJECT_HEADER_REGEX
        .captures_iter(html)
        .filter(|caps| clean_subject(caps[1].trim()).is_forward)
        .count();

    let phrase_count = FORWARD_PHRASE_REGEX.find_iter(html).count();
    let forward_count = prefix_count + phrase_count;

    ForwardInfo {
        is_forward: forward_count > 0,
        forward_count,
    }
}

/// Detect subject drift across a thread.
///
/// The first bold-labeled subject header is compared against the supplied
/// previous subject when given, otherwise against the last subject header
/// in the document. Comparison happens after prefix cleaning and case
/// folding; a mismatch marks both a subject change and a thread break.
#[must_use]
pub fn detect_subject_change(html: &str, previous_subject: Option<&str>) -> SubjectChange {
    let subjects: Vec<String> = SUBJECT_HEADER_REGEX
        .captures_iter(html)
        .map(|caps| caps[1].trim().to_string())
        .collect();

    let current = subjects.first().cloned();

    let previous = previous_subject.map_or_else(
        || {
            if subjects.len() > 1 {
                subjects.last().cloned()
            } else {
                None
            }
        },
        |p| Some(p.to_string()),
    );

    let changed = match (&current, &previous) {
        (Some(cur), Some(prev)) => {
            clean_subject(cur).clean.to_lowercase() != clean_subject(prev).clean.to_lowercase()
        }
        _ => false,
    };

    SubjectChange {
        subject_changed: changed,
        current_subject: current,
        previous_subject: previous,
        thread_break: changed,
    }
}
