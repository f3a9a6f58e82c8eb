//! Heuristic extraction confidence scoring

use crate::text::strip_html_to_text;
use crate::types::ConfidenceScore;
use serde_json::json;
use std::collections::BTreeMap;

/// Visible extractions shorter than this are penalized
const SHORT_EXTRACTION_CHARS: usize = 10;

/// Score the quality of an extraction.
///
/// The removed-content ratio is banded (more removed means the quote
/// heuristics clearly fired), a known quote marker in the original adds
/// 0.1 clamped at 1.0, and a non-empty but very short visible extraction
/// subtracts 0.2. The score is rounded to two decimals and every input to
/// the decision is recorded in the factors map.
#[must_use]
pub fn score_extraction(
    original_html: &str,
    extracted_html: &str,
    original_length: usize,
) -> ConfidenceScore {
    let mut factors = BTreeMap::new();

    if original_length == 0 {
        factors.insert("empty_input".to_string(), json!(true));
        return ConfidenceScore {
            score: 0.0,
            factors,
        };
    }

    #[allow(clippy::cast_precision_loss)]
    let ratio = extracted_html.trim().len() as f64 / original_length as f64;

    let (mut score, band) = if ratio < 0.1 {
        (0.95, "<0.1")
    } else if ratio < 0.3 {
        (0.85, "<0.3")
    } else if ratio < 0.5 {
        (0.7, "<0.5")
    } else if ratio < 0.8 {
        (0.5, "<0.8")
    } else {
        (0.3, ">=0.8")
    };

    let has_markers = contains_quote_marker(original_html);
    if has_markers {
        score = (score + 0.1_f64).min(1.0);
    }

    let visible = strip_html_to_text(extracted_html);
    let short_extraction = !visible.is_empty() && visible.len() < SHORT_EXTRACTION_CHARS;
    if short_extraction {
        score -= 0.2;
    }

    factors.insert("ratio".to_string(), json!(ratio));
    factors.insert("ratio_band".to_string(), json!(band));
    factors.insert("original_length".to_string(), json!(original_length));
    factors.insert(
        "extracted_length".to_string(),
        json!(extracted_html.trim().len()),
    );
    factors.insert("has_quote_markers".to_string(), json!(has_markers));
    factors.insert("short_extraction".to_string(), json!(short_extraction));

    ConfidenceScore {
        score: (score * 100.0).round() / 100.0,
        factors,
    }
}

/// Extracted content meaningfully shorter than the original indicates the
/// document actually contained a reply over quoted history.
#[must_use]
pub fn has_reply_content(extracted_html: &str, original_length: usize) -> bool {
    if original_length == 0 {
        return false;
    }

    let extracted_length = extracted_html.trim().len();
    if extracted_length == 0 {
        return false;
    }

    #[allow(clippy::cast_precision_loss)]
    let ratio = extracted_length as f64 / original_length as f64;
    ratio < 0.95
}

fn contains_quote_marker(html: &str) -> bool {
    let lower = html.to_lowercase();
    lower.contains("border-top:solid")
        || lower.contains("divrplyfwdmsg")
        || lower.contains("<blockquote")
}
