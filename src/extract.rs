//! Extraction pipeline orchestration

use crate::boundary::locate_quote_boundary;
use crate::confidence::{has_reply_content, score_extraction};
use crate::error::{ExtractError, Result};
use crate::format::detect_format;
use crate::headers::{extract_sender, parse_received_date};
use crate::pipeline::Pipeline;
use crate::quotes::{CitationQuoteExtractor, QuoteExtractor};
use crate::signature::extract_signature;
use crate::subject::{detect_forward, detect_subject_change, extract_subject_info};
use crate::text::strip_html_to_text;
use crate::thread::{ThreadConfig, detect_thread, split_thread};
use crate::types::{ExtractOptions, ExtractionResponse, ResponseMetadata};
use std::panic::{AssertUnwindSafe, catch_unwind};
use tracing::{debug, error};

/// Configured extraction pipeline.
///
/// Holds the pre/post sanitization chains, the quote extraction backend
/// and the thread detection configuration. Built once and reused across
/// documents; every extraction is a pure, synchronous transform with no
/// shared mutable state.
pub struct Extractor {
    preprocess: Pipeline,
    postprocess: Pipeline,
    quote_extractor: Box<dyn QuoteExtractor>,
    thread_config: ThreadConfig,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(
            Pipeline::preprocess(),
            Pipeline::postprocess(),
            Box::new(CitationQuoteExtractor),
            ThreadConfig::default(),
        )
    }
}

impl Extractor {
    /// Assemble an extractor from explicit collaborators
    #[must_use]
    pub const fn new(
        preprocess: Pipeline,
        postprocess: Pipeline,
        quote_extractor: Box<dyn QuoteExtractor>,
        thread_config: ThreadConfig,
    ) -> Self {
        Self {
            preprocess,
            postprocess,
            quote_extractor,
            thread_config,
        }
    }

    /// Default pipelines with a substituted quote extraction backend
    #[must_use]
    pub fn with_quote_extractor(quote_extractor: Box<dyn QuoteExtractor>) -> Self {
        Self::new(
            Pipeline::preprocess(),
            Pipeline::postprocess(),
            quote_extractor,
            ThreadConfig::default(),
        )
    }

    /// Extract the newly authored portion of an HTML email body.
    ///
    /// Empty input short-circuits to the empty-input failure shape. Any
    /// internal fault degrades to a failure response carrying the
    /// original document verbatim; extraction never panics outward.
    #[must_use]
    pub fn extract(&self, html: &str, options: &ExtractOptions) -> ExtractionResponse {
        match self.try_extract(html, options) {
            Ok(response) => response,
            Err(ExtractError::EmptyInput) => ExtractionResponse::empty_input(),
            Err(e) => {
                error!(error = %e, "extraction fault, returning original document");
                ExtractionResponse::fault(html, e)
            }
        }
    }

    /// Fallible form of [`Self::extract`].
    ///
    /// A panic anywhere in the stage chain is caught here and surfaced as
    /// [`ExtractError::Processing`] instead of unwinding into the caller.
    pub fn try_extract(&self, html: &str, options: &ExtractOptions) -> Result<ExtractionResponse> {
        if html.is_empty() {
            return Err(ExtractError::EmptyInput);
        }

        catch_unwind(AssertUnwindSafe(|| self.run_extraction(html, options))).map_err(|payload| {
            ExtractError::Processing {
                stage: "extraction".to_string(),
                details: panic_details(payload.as_ref()),
            }
        })
    }

    fn run_extraction(&self, html: &str, options: &ExtractOptions) -> ExtractionResponse {
        let original_length = html.len();

        let format = detect_format(html);
        let (head, quoted_html) = locate_quote_boundary(html, format);

        let cleaned = self.preprocess.run(&head);
        let extracted = self.quote_extractor.extract(&cleaned);
        let extracted = self.postprocess.run(&extracted);

        let (extracted, signature) = extract_signature(&extracted, options.include_signature);

        let text = strip_html_to_text(&extracted);
        let confidence = score_extraction(html, &extracted, original_length);

        let extracted_length = extracted.len();
        #[allow(clippy::cast_precision_loss)]
        let ratio = if original_length > 0 {
            extracted_length as f64 / original_length as f64
        } else {
            1.0
        };

        let metadata = self.build_metadata(html, &extracted, original_length);

        debug!(
            format = %format,
            original_length,
            extracted_length,
            confidence = confidence.score,
            "extraction complete"
        );

        let thread_messages = options
            .include_full_thread
            .then(|| split_thread(html, &self.thread_config));

        ExtractionResponse {
            success: true,
            error: None,
            html: extracted,
            text,
            original_html: html.to_string(),
            quoted_html,
            signature,
            attachments: Vec::new(),
            original_length,
            extracted_length,
            ratio,
            format_detected: format,
            confidence,
            metadata,
            thread_messages,
        }
    }

    fn build_metadata(
        &self,
        original_html: &str,
        extracted_html: &str,
        original_length: usize,
    ) -> ResponseMetadata {
        let subject = extract_subject_info(original_html);
        let forward = detect_forward(original_html);

        let is_reply = subject.as_ref().is_some_and(|s| s.is_reply);
        let is_forward =
            subject.as_ref().is_some_and(|s| s.is_forward) || forward.is_forward;

        ResponseMetadata {
            has_reply: has_reply_content(extracted_html, original_length),
            is_forward,
            is_reply,
            sender: extract_sender(original_html),
            date: parse_received_date(original_html),
            thread: detect_thread(original_html, &self.thread_config),
            forward,
            subject,
            subject_change: detect_subject_change(original_html, None),
        }
    }
}

/// Extract with the default pipeline configuration.
#[must_use]
pub fn extract_reply(html: &str, options: &ExtractOptions) -> ExtractionResponse {
    Extractor::default().extract(html, options)
}

fn panic_details(payload: &(dyn std::any::Any + Send)) -> String {
    payload.downcast_ref::<&str>().map_or_else(
        || {
            payload
                .downcast_ref::<String>()
                .cloned()
                .unwrap_or_else(|| "unrecoverable stage failure".to_string())
        },
        |s| (*s).to_string(),
    )
}
