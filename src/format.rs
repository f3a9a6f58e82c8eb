//! Email client format fingerprinting

use crate::types::FormatTag;

/// Detect the authoring client format from fingerprint substrings.
///
/// Fingerprints are evaluated in fixed priority order over a lowercased
/// copy of the input; the first match wins and `Unknown` is the total
/// default. Deterministic and side-effect free.
#[must_use]
pub fn detect_format(html: &str) -> FormatTag {
    let lower = html.to_lowercase();

    if lower.contains("divrplyfwdmsg") || lower.contains("rplyedtprsngmsg") {
        FormatTag::O365
    } else if lower.contains("border-top:solid") || lower.contains("border-top:double") {
        FormatTag::OutlookDesktop
    } else if lower.contains("gmail_quote") {
        FormatTag::Gmail
    } else if lower.contains("type=\"cite\"") {
        FormatTag::AppleMail
    } else if lower.contains("<blockquote") {
        FormatTag::Yahoo
    } else if lower.contains("microsoft word") || is_word_generator_meta(&lower) {
        FormatTag::WordGenerated
    } else {
        FormatTag::Unknown
    }
}

/// Word exports sometimes carry only a generator meta tag, e.g.
/// `<meta name=Generator content="Word 15">`, usually preceded by a
/// charset meta, so every meta tag is inspected.
fn is_word_generator_meta(lower: &str) -> bool {
    lower.match_indices("<meta").any(|(start, _)| {
        lower[start..]
            .split('>')
            .next()
            .is_some_and(|tag| tag.contains("generator") && tag.contains("word"))
    })
}
