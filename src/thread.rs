//! Multi-message thread detection and splitting

use crate::locale::header_label_alternation;
use crate::repair::repair_structure;
use crate::text::strip_html_to_text;
use crate::types::{ThreadMessage, ThreadStructure};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;
use tracing::debug;

/// Header-line matches closer to the start than this are ignored, to
/// avoid false positives from header-like lines in legitimate new content.
pub const DEFAULT_HEADER_OFFSET_THRESHOLD: usize = 500;

/// Thread detection configuration
#[derive(Debug, Clone)]
pub struct ThreadConfig {
    /// Minimum byte offset for a bold header line to count as a boundary
    pub header_offset_threshold: usize,
}

impl Default for ThreadConfig {
    fn default() -> Self {
        Self {
            header_offset_threshold: DEFAULT_HEADER_OFFSET_THRESHOLD,
        }
    }
}

static REPLY_MARKER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)divrplyfwdmsg").unwrap());

static BORDER_TOP_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)border-top:solid").unwrap());

static BLOCKQUOTE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<blockquote").unwrap());

static HEADER_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)<b[^>]*>\s*(?:{})\s*:",
        header_label_alternation()
    ))
    .unwrap()
});

/// Collect candidate message boundary offsets: reply marker ids, desktop
/// border-top styles, blockquote tags, and bold localized header lines
/// past the configured threshold. More than one offset means the document
/// is a concatenated thread.
#[must_use]
pub fn detect_thread(html: &str, config: &ThreadConfig) -> ThreadStructure {
    let offsets = boundary_offsets(html, config);
    let is_thread = offsets.len() > 1;

    ThreadStructure {
        is_thread,
        message_count: if is_thread { offsets.len() + 1 } else { 1 },
        positions: offsets,
    }
}

/// Split a document into ordered per-message fragments, newest first.
///
/// Cuts fall at offset 0 and at each detected boundary. Each fragment's
/// `html` is passed through tag-balance repair; `raw` keeps the exact
/// input slice so that concatenating fragments in index order
/// reconstructs the input.
#[must_use]
pub fn split_thread(html: &str, config: &ThreadConfig) -> Vec<ThreadMessage> {
    let structure = detect_thread(html, config);

    if !structure.is_thread {
        return vec![ThreadMessage {
            html: repair_structure(html),
            text: strip_html_to_text(html),
            raw: html.to_string(),
            index: 0,
            is_newest: true,
        }];
    }

    debug!(message_count = structure.message_count, "splitting thread");

    let mut cuts = vec![0];
    cuts.extend(structure.positions.iter().copied());
    cuts.push(html.len());

    cuts.windows(2)
        .enumerate()
        .map(|(index, window)| {
            let raw = &html[window[0]..window[1]];
            ThreadMessage {
                html: repair_structure(raw),
                text: strip_html_to_text(raw),
                raw: raw.to_string(),
                index,
                is_newest: index == 0,
            }
        })
        .collect()
}

static TEXT_HEADER_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)^\s*(?:{})\s*:",
        header_label_alternation()
    ))
    .unwrap()
});

/// True when a plain-text line is a localized quoted header label line
/// ("Van: ...", "Sent: ...") rather than authored content.
#[must_use]
pub fn is_quoted_header_line(line: &str) -> bool {
    TEXT_HEADER_LINE_REGEX.is_match(line)
}

/// The newest message of a document, without splitting the rest.
///
/// Equivalent to the first fragment returned by [`split_thread`].
#[must_use]
pub fn extract_first_message(html: &str, config: &ThreadConfig) -> ThreadMessage {
    let structure = detect_thread(html, config);
    let end = structure.positions.first().map_or(html.len(), |&p| p);
    let raw = &html[..end];

    ThreadMessage {
        html: repair_structure(raw),
        text: strip_html_to_text(raw),
        raw: raw.to_string(),
        index: 0,
        is_newest: true,
    }
}

fn boundary_offsets(html: &str, config: &ThreadConfig) -> Vec<usize> {
    let mut offsets = BTreeSet::new();

    // A marker at offset 0 means the document opens with quoted content;
    // it marks no boundary between messages.
    for pattern in [&*REPLY_MARKER_REGEX, &*BORDER_TOP_REGEX, &*BLOCKQUOTE_REGEX] {
        offsets.extend(
            pattern
                .find_iter(html)
                .map(|m| m.start())
                .filter(|&start| start > 0),
        );
    }

    offsets.extend(
        HEADER_LINE_REGEX
            .find_iter(html)
            .map(|m| m.start())
            .filter(|&start| start > config.header_offset_threshold),
    );

    offsets.into_iter().collect()
}
