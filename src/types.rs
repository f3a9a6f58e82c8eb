//! Core types for extraction results and metadata

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Detected email client markup dialect
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FormatTag {
    /// Outlook Web / Office 365 (`divRplyFwdMsg` markers)
    O365,
    /// Outlook Desktop (`border-top:solid` quote separators)
    OutlookDesktop,
    /// Gmail (`gmail_quote` containers)
    Gmail,
    /// Apple Mail (`type="cite"` blockquotes)
    AppleMail,
    /// Yahoo and other webmail relying on bare blockquotes
    Yahoo,
    /// Document exported from Microsoft Word
    WordGenerated,
    /// No recognizable fingerprint
    #[default]
    Unknown,
}

impl FormatTag {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::O365 => "o365",
            Self::OutlookDesktop => "outlook_desktop",
            Self::Gmail => "gmail",
            Self::AppleMail => "apple_mail",
            Self::Yahoo => "yahoo",
            Self::WordGenerated => "word_generated",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for FormatTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Options controlling a single extraction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractOptions {
    /// Attempt to isolate and remove a trailing signature block
    pub include_signature: bool,

    /// Split the document into ordered per-message thread fragments
    pub include_full_thread: bool,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            include_signature: true,
            include_full_thread: false,
        }
    }
}

/// Heuristic quality score for an extraction
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfidenceScore {
    /// Score in [0.0, 1.0], rounded to two decimals. Not a probability.
    pub score: f64,

    /// Named diagnostic values that fed the score
    pub factors: BTreeMap<String, serde_json::Value>,
}

/// One message fragment of a split thread
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadMessage {
    /// Fragment HTML after tag-balance repair
    pub html: String,

    /// Plain-text rendering of the fragment
    pub text: String,

    /// Exact slice of the original input. Concatenating these in index
    /// order reconstructs the input byte-for-byte.
    #[serde(skip)]
    pub raw: String,

    /// 0-based position, 0 = newest
    pub index: usize,

    /// True only for the first fragment
    pub is_newest: bool,
}

/// Subject line with reply/forward prefix analysis
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubjectInfo {
    /// Subject as found
    pub original: String,

    /// Subject with the matched prefix stripped
    pub clean: String,

    /// Matched prefix token (e.g. "RE", "RE[3]", "FW"), empty if none
    pub prefix: String,

    /// A reply prefix matched
    pub is_reply: bool,

    /// A forward prefix matched (never set together with `is_reply`)
    pub is_forward: bool,
}

/// Sender parsed from a quoted header line
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SenderInfo {
    /// Display name, empty when only an address was present
    pub name: String,

    /// Email address, empty when none matched
    pub email: String,

    /// Raw header value as captured
    pub raw: String,
}

/// Date parsed from a quoted header line
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DateInfo {
    /// Raw header value as captured
    pub raw: String,

    /// RFC 3339 rendering on successful parse, otherwise the raw value
    pub parsed: String,

    /// Unix timestamp, absent when the date did not parse
    pub timestamp: Option<i64>,
}

/// Thread structure detection result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadStructure {
    /// More than one quote marker offset was found
    pub is_thread: bool,

    /// Number of concatenated messages (1 when not a thread)
    pub message_count: usize,

    /// Ascending byte offsets of detected message boundaries
    pub positions: Vec<usize>,
}

impl Default for ThreadStructure {
    fn default() -> Self {
        Self {
            is_thread: false,
            message_count: 1,
            positions: Vec::new(),
        }
    }
}

/// Forward marker detection result
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ForwardInfo {
    /// At least one forward marker was found
    pub is_forward: bool,

    /// Number of forward markers found
    pub forward_count: usize,
}

/// Subject drift detection across a thread
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubjectChange {
    /// Current and previous subjects differ after prefix cleaning
    pub subject_changed: bool,

    /// First subject header found in the document
    pub current_subject: Option<String>,

    /// Supplied previous subject, or the last subject header found
    pub previous_subject: Option<String>,

    /// Set together with `subject_changed`
    pub thread_break: bool,
}

/// Metadata attached to an extraction response
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResponseMetadata {
    /// Extracted content is meaningfully shorter than the original
    pub has_reply: bool,

    /// Subject or body markers indicate a forward
    pub is_forward: bool,

    /// Subject prefix indicates a reply
    pub is_reply: bool,

    /// Sender parsed from quoted header lines
    pub sender: SenderInfo,

    /// Date parsed from quoted header lines
    pub date: DateInfo,

    /// Thread structure detection
    pub thread: ThreadStructure,

    /// Forward marker detection
    pub forward: ForwardInfo,

    /// First subject header found, prefix-cleaned
    pub subject: Option<SubjectInfo>,

    /// Subject drift across the thread
    pub subject_change: SubjectChange,
}

/// Full extraction response as consumed by a serving layer
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResponse {
    /// False for empty input or an internal fault
    pub success: bool,

    /// Fault description when `success` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Extracted new-content HTML
    pub html: String,

    /// Plain-text rendering of `html`
    pub text: String,

    /// Input document, verbatim
    pub original_html: String,

    /// Quoted history removed by the boundary locator
    pub quoted_html: String,

    /// Normalized signature text, empty when none was found
    pub signature: String,

    /// Always empty; attachment handling is out of scope
    pub attachments: Vec<String>,

    /// Byte length of the input
    pub original_length: usize,

    /// Byte length of the extracted HTML
    pub extracted_length: usize,

    /// `extracted_length / original_length`, 1.0 for empty input
    pub ratio: f64,

    /// Detected client format
    pub format_detected: FormatTag,

    /// Heuristic extraction confidence
    pub confidence: ConfidenceScore,

    /// Reply/forward/thread/sender metadata
    pub metadata: ResponseMetadata,

    /// Per-message fragments, present only in full-thread mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thread_messages: Option<Vec<ThreadMessage>>,
}

impl ExtractionResponse {
    /// Failure shape for empty or missing input
    #[must_use]
    pub fn empty_input() -> Self {
        Self {
            success: false,
            error: Some("Empty HTML input".to_string()),
            html: String::new(),
            text: String::new(),
            original_html: String::new(),
            quoted_html: String::new(),
            signature: String::new(),
            attachments: Vec::new(),
            original_length: 0,
            extracted_length: 0,
            ratio: 1.0,
            format_detected: FormatTag::Unknown,
            confidence: ConfidenceScore::default(),
            metadata: ResponseMetadata::default(),
            thread_messages: None,
        }
    }

    /// Failure shape for an internal fault: the original document is
    /// returned verbatim with a best-effort plain-text rendering.
    #[must_use]
    pub fn fault(original_html: &str, error: impl fmt::Display) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
            html: original_html.to_string(),
            text: crate::text::strip_html_to_text(original_html),
            original_html: original_html.to_string(),
            quoted_html: String::new(),
            signature: String::new(),
            attachments: Vec::new(),
            original_length: original_html.len(),
            extracted_length: original_html.len(),
            ratio: 1.0,
            format_detected: FormatTag::Unknown,
            confidence: ConfidenceScore::default(),
            metadata: ResponseMetadata::default(),
            thread_messages: None,
        }
    }
}
