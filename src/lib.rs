// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Reply Extraction for HTML Email
//!
//! Extracts the newly authored portion of an HTML email body by detecting
//! and removing previously quoted thread history across several email-client
//! markup dialects (Outlook Web/O365, Outlook Desktop, Gmail, Apple Mail,
//! Yahoo, Word-generated documents).
//!
//! # Features
//!
//! - Client format fingerprinting
//! - Format-specific quote boundary location
//! - Configurable pre/post sanitization pipelines
//! - Signature block isolation
//! - Multi-message thread splitting
//! - Localized subject prefix normalization
//! - Heuristic extraction confidence scoring
//!
//! # Example
//!
//! ```rust
//! use reply_extract::{extract_reply, ExtractOptions};
//!
//! let html = r#"<html><body><p>Thanks, works for me.</p>
//! <blockquote type="cite"><p>Does Tuesday work?</p></blockquote>
//! </body></html>"#;
//!
//! let result = extract_reply(html, &ExtractOptions::default());
//!
//! assert!(result.success);
//! assert!(result.html.contains("works for me"));
//! assert!(!result.html.contains("Does Tuesday work"));
//! ```

mod boundary;
mod confidence;
mod error;
mod extract;
mod format;
mod headers;
pub mod locale;
mod pipeline;
mod quotes;
mod repair;
mod signature;
mod subject;
mod text;
mod thread;
mod types;

pub use boundary::locate_quote_boundary;
pub use confidence::{has_reply_content, score_extraction};
pub use error::{ExtractError, Result};
pub use extract::{Extractor, extract_reply};
pub use format::detect_format;
pub use headers::{extract_sender, parse_received_date};
pub use pipeline::{HtmlStage, Pipeline};
pub use quotes::{CitationQuoteExtractor, PassthroughQuoteExtractor, QuoteExtractor};
pub use repair::repair_structure;
pub use signature::extract_signature;
pub use subject::{clean_subject, detect_forward, detect_subject_change, extract_subject_info};
pub use text::strip_html_to_text;
pub use thread::{
    DEFAULT_HEADER_OFFSET_THRESHOLD, ThreadConfig, detect_thread, extract_first_message,
    is_quoted_header_line, split_thread,
};
pub use types::*;
