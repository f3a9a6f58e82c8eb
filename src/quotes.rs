//! General-purpose residual quote removal capability
//!
//! The client-specific heuristics in [`crate::boundary`] and
//! [`crate::pipeline`] handle structural quote markers. Whatever general
//! quotation remover runs after them is modeled as a capability so
//! alternative backends can be substituted without touching the pipeline.

use regex::Regex;
use std::sync::LazyLock;

/// A general-purpose HTML quotation remover.
///
/// Implementations must be deterministic, must not fail on well-formed or
/// mildly malformed HTML, and may return the input unchanged; the
/// surrounding pipeline tolerates both.
pub trait QuoteExtractor: Send + Sync {
    /// Remove residual non-structural quote boilerplate
    fn extract(&self, html: &str) -> String;
}

/// Identity backend: leaves the input untouched
pub struct PassthroughQuoteExtractor;

impl QuoteExtractor for PassthroughQuoteExtractor {
    fn extract(&self, html: &str) -> String {
        html.to_string()
    }
}

static CITATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)<(?:div|p)[^>]*>\s*(?:On\s[^<]{0,300}?\bwrote:|Op\s[^<]{0,300}?\bschreef[^<]{0,120}?:).*",
    )
    .unwrap()
});

static PRE_BLOCK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<pre[^>]*>.*?</pre>").unwrap());

static QUOTED_LINE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*(?:&gt;|>)[^\n]*\n?").unwrap());

/// Default backend: removes inline "On \<date\>, \<person\> wrote:" style
/// citation lead-ins (with the quoted tail that follows them) and leading
/// `>`-style plain-text quote lines inside preformatted blocks.
pub struct CitationQuoteExtractor;

impl QuoteExtractor for CitationQuoteExtractor {
    fn extract(&self, html: &str) -> String {
        let truncated = CITATION_REGEX
            .find(html)
            .map_or_else(|| html.to_string(), |m| html[..m.start()].to_string());

        PRE_BLOCK_REGEX
            .replace_all(&truncated, |caps: &regex::Captures<'_>| {
                QUOTED_LINE_REGEX.replace_all(&caps[0], "").into_owned()
            })
            .into_owned()
    }
}
