//! Ordered sanitization pipelines run before and after quote extraction
//!
//! Stages are idempotent string transforms behind a single-method
//! capability trait, assembled into an explicit ordered list per pipeline
//! configuration. All matching is case-insensitive with dot-matches-all
//! semantics across matched spans.

use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

/// A single sanitization stage
pub trait HtmlStage: Send + Sync {
    /// Stage name, for diagnostics
    fn name(&self) -> &'static str;

    /// Apply the transform. Must be safe to run even when earlier stages
    /// found nothing to change.
    fn apply(&self, html: &str) -> String;
}

/// An ordered list of stages, constructed once per configuration
pub struct Pipeline {
    stages: Vec<Box<dyn HtmlStage>>,
}

impl Pipeline {
    /// Build a pipeline from an explicit stage list
    #[must_use]
    pub const fn new(stages: Vec<Box<dyn HtmlStage>>) -> Self {
        Self { stages }
    }

    /// Default marker-stripping chain run before quote extraction
    #[must_use]
    pub fn preprocess() -> Self {
        Self::new(vec![
            Box::new(NormalizeBlockquotes),
            Box::new(StripReplyMarkers),
            Box::new(StripForwardMarkers),
            Box::new(StripDesktopQuote),
            Box::new(StripWebmailContainers),
        ])
    }

    /// Default sanitizing chain run after quote extraction
    #[must_use]
    pub fn postprocess() -> Self {
        Self::new(vec![Box::new(CleanEmptyElements), Box::new(Sanitize)])
    }

    /// Run every stage in order
    #[must_use]
    pub fn run(&self, html: &str) -> String {
        let mut current = html.to_string();
        for stage in &self.stages {
            let next = stage.apply(&current);
            if next.len() != current.len() {
                trace!(stage = stage.name(), before = current.len(), after = next.len());
            }
            current = next;
        }
        current
    }
}

// --- Preprocess stages ---

static CITE_BLOCKQUOTE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?is)<blockquote[^>]*type="cite"[^>]*>"#).unwrap());

/// Rewrite blockquote variants to the canonical webmail marker class so
/// later stages and the quote extractor see a single form.
pub struct NormalizeBlockquotes;

impl HtmlStage for NormalizeBlockquotes {
    fn name(&self) -> &'static str {
        "normalize_blockquotes"
    }

    fn apply(&self, html: &str) -> String {
        CITE_BLOCKQUOTE_REGEX
            .replace_all(html, r#"<blockquote type="cite" class="gmail_quote">"#)
            .into_owned()
    }
}

static REPLY_MARKER_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        // Marker div with a quoted sibling: the quoted history trails the
        // marker, so the match runs to the end of the document.
        Regex::new(r#"(?is)<div[^>]*id="divRplyFwdMsg"[^>]*>.*?</div>\s*<div[^>]*>.*"#).unwrap(),
        Regex::new(r#"(?is)<div[^>]*class="RplyEdtPrsngMsg"[^>]*>.*?</div>"#).unwrap(),
        Regex::new(r#"(?is)<div[^>]*id="divRplyFwdMsg"[^>]*>.*?</div>"#).unwrap(),
    ]
});

/// Strip web-client reply marker elements
pub struct StripReplyMarkers;

impl HtmlStage for StripReplyMarkers {
    fn name(&self) -> &'static str {
        "strip_reply_markers"
    }

    fn apply(&self, html: &str) -> String {
        let mut current = html.to_string();
        for pattern in &*REPLY_MARKER_REGEXES {
            current = pattern.replace_all(&current, "").into_owned();
        }
        current
    }
}

static FORWARD_MARKER_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r#"(?is)<div[^>]*class="[^"]*gmail_attr[^"]*"[^>]*>.*?</div>"#).unwrap(),
        Regex::new(
            r"(?is)<div[^>]*>[^<]*(?:forwarded message|doorgestuurd bericht|message transf\u{e9}r\u{e9}|weitergeleitete nachricht)[^<]*</div>",
        )
        .unwrap(),
    ]
});

/// Strip web-client forward marker elements containing forwarding language
pub struct StripForwardMarkers;

impl HtmlStage for StripForwardMarkers {
    fn name(&self) -> &'static str {
        "strip_forward_markers"
    }

    fn apply(&self, html: &str) -> String {
        let mut current = html.to_string();
        for pattern in &*FORWARD_MARKER_REGEXES {
            current = pattern.replace_all(&current, "").into_owned();
        }
        current
    }
}

static DESKTOP_QUOTE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<div[^>]*style="[^"]*border-top:(?:solid|double)[^"]*"[^>]*>.*"#).unwrap()
});

/// Strip desktop-client quoted blocks: the border-top styled element and
/// everything after it
pub struct StripDesktopQuote;

impl HtmlStage for StripDesktopQuote {
    fn name(&self) -> &'static str {
        "strip_desktop_quote"
    }

    fn apply(&self, html: &str) -> String {
        DESKTOP_QUOTE_REGEX.replace_all(html, "").into_owned()
    }
}

static WEBMAIL_CONTAINER_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r#"(?is)<div[^>]*class="[^"]*gmail_quote[^"]*"[^>]*>.*?</div>"#).unwrap(),
        Regex::new(r"(?is)<blockquote[^>]*>.*?</blockquote>").unwrap(),
    ]
});

/// Strip webmail quote container elements
pub struct StripWebmailContainers;

impl HtmlStage for StripWebmailContainers {
    fn name(&self) -> &'static str {
        "strip_webmail_containers"
    }

    fn apply(&self, html: &str) -> String {
        let mut current = html.to_string();
        for pattern in &*WEBMAIL_CONTAINER_REGEXES {
            current = pattern.replace_all(&current, "").into_owned();
        }
        current
    }
}

// --- Postprocess stages ---

static EMPTY_ELEMENT_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r"(?i)<div[^>]*>\s*(?:&nbsp;|\s)*\s*</div>").unwrap(),
        Regex::new(r"(?i)<p[^>]*>\s*(?:&nbsp;|\s)*\s*</p>").unwrap(),
    ]
});

/// Remove div/p elements whose only content is whitespace or a
/// non-breaking-space entity
pub struct CleanEmptyElements;

impl HtmlStage for CleanEmptyElements {
    fn name(&self) -> &'static str {
        "clean_empty_elements"
    }

    fn apply(&self, html: &str) -> String {
        let mut current = html.to_string();
        for pattern in &*EMPTY_ELEMENT_REGEXES {
            current = pattern.replace_all(&current, "").into_owned();
        }
        current
    }
}

static SCRIPT_PAIR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").unwrap());

static SCRIPT_SELF_CLOSE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<script[^>]*/>").unwrap());

static TRACKING_PIXEL_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r#"(?i)<img[^>]*width="1"[^>]*height="1"[^>]*>"#).unwrap(),
        Regex::new(r#"(?i)<img[^>]*height="1"[^>]*width="1"[^>]*>"#).unwrap(),
    ]
});

static DANGEROUS_TAGS: &[&str] = &["iframe", "object", "embed", "applet", "link"];

static DANGEROUS_TAG_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    DANGEROUS_TAGS
        .iter()
        .flat_map(|tag| {
            [
                Regex::new(&format!(r"(?is)<{tag}[^>]*>.*?</{tag}>")).unwrap(),
                Regex::new(&format!(r"(?i)<{tag}[^>]*/?>")).unwrap(),
            ]
        })
        .collect()
});

static EVENT_HANDLER_REGEXES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        Regex::new(r#"(?i)\son\w+\s*=\s*"[^"]*""#).unwrap(),
        Regex::new(r"(?i)\son\w+\s*=\s*'[^']*'").unwrap(),
        Regex::new(r"(?i)\son\w+\s*=\s*[^\s>]+").unwrap(),
    ]
});

/// Remove scripts, 1x1 tracking pixels, embedded active content and
/// inline event handler attributes
pub struct Sanitize;

impl HtmlStage for Sanitize {
    fn name(&self) -> &'static str {
        "sanitize"
    }

    fn apply(&self, html: &str) -> String {
        let mut current = SCRIPT_PAIR_REGEX.replace_all(html, "").into_owned();
        current = SCRIPT_SELF_CLOSE_REGEX.replace_all(&current, "").into_owned();

        for pattern in &*TRACKING_PIXEL_REGEXES {
            current = pattern.replace_all(&current, "").into_owned();
        }
        for pattern in &*DANGEROUS_TAG_REGEXES {
            current = pattern.replace_all(&current, "").into_owned();
        }
        for pattern in &*EVENT_HANDLER_REGEXES {
            current = pattern.replace_all(&current, "").into_owned();
        }

        current
    }
}
