//! Text extraction from uploaded files
//!
//! The extractor itself is external (an AI service reached from the
//! JavaScript side, or anything implementing [`TextExtractor`]). This module
//! owns the transient "processing" indicator and the draft the extracted
//! text lands in. Only the most recent request may complete; results from a
//! superseded request are dropped.

pub mod errors;

pub use errors::ExtractionError;

use serde::{Deserialize, Serialize};

/// The only file type accepted for extraction
pub const PDF_MIME_TYPE: &str = "application/pdf";

const PDF_EXTENSION: &str = ".pdf";

const PROCESSING_MESSAGE: &str = "Reading the PDF content...";

/// Something that turns file bytes into plain text
#[allow(async_fn_in_trait)]
pub trait TextExtractor {
    async fn extract(&self, bytes: &[u8], mime_type: &str) -> Result<String, ExtractionError>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingState {
    pub is_processing: bool,
    pub message: String,
}

impl ProcessingState {
    fn idle() -> Self {
        Self::default()
    }

    fn busy(message: &str) -> Self {
        Self {
            is_processing: true,
            message: message.to_string(),
        }
    }
}

/// Title and content waiting to become a document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionDraft {
    pub title: String,
    pub content: String,
}

/// Identifies one extraction request
pub type RequestId = u64;

#[derive(Debug, Default)]
pub struct ExtractionTracker {
    next_request: RequestId,
    current: Option<(RequestId, String)>,
    state: ProcessingState,
    draft: ExtractionDraft,
    last_error: Option<String>,
}

impl ExtractionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &ProcessingState {
        &self.state
    }

    pub fn is_processing(&self) -> bool {
        self.state.is_processing
    }

    pub fn draft(&self) -> &ExtractionDraft {
        &self.draft
    }

    pub fn set_draft_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    /// Hand the draft over (e.g. to create a document) and start a fresh one
    pub fn take_draft(&mut self) -> ExtractionDraft {
        std::mem::take(&mut self.draft)
    }

    /// User-facing message of the last failed request
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Start a request for `file_name`
    ///
    /// Non-PDF files are refused without touching the processing state. A new
    /// request supersedes any request still in flight.
    pub fn begin(&mut self, file_name: &str, mime_type: &str) -> Result<RequestId, ExtractionError> {
        if mime_type != PDF_MIME_TYPE {
            log::warn!("extraction: refused '{}' with type '{}'", file_name, mime_type);
            return Err(ExtractionError::UnsupportedMimeType(mime_type.to_string()));
        }

        self.next_request += 1;
        let id = self.next_request;
        if let Some((previous, _)) = &self.current {
            log::debug!("extraction: request {} supersedes {}", id, previous);
        }

        self.current = Some((id, file_name.to_string()));
        self.state = ProcessingState::busy(PROCESSING_MESSAGE);
        self.last_error = None;
        log::info!("extraction: request {} started for '{}'", id, file_name);
        Ok(id)
    }

    /// Deliver the outcome of a request
    ///
    /// Returns `false` when the request was superseded and its outcome
    /// ignored. Otherwise the processing state is reset to idle; text is
    /// committed to the draft only on success.
    pub fn complete(&mut self, request: RequestId, result: Result<String, ExtractionError>) -> bool {
        self.finish(request, require_text(result))
    }

    fn finish(&mut self, request: RequestId, outcome: Result<String, ExtractionError>) -> bool {
        let file_name = match &self.current {
            Some((id, file_name)) if *id == request => file_name.clone(),
            _ => {
                log::debug!("extraction: dropping result of superseded request {}", request);
                return false;
            }
        };

        self.current = None;
        self.state = ProcessingState::idle();

        match outcome {
            Ok(text) => {
                log::info!("extraction: request {} produced {} chars", request, text.chars().count());
                self.draft.content = text;
                if self.draft.title.trim().is_empty() {
                    self.draft.title = title_from_file_name(&file_name);
                }
            }
            Err(e) => {
                log::warn!("extraction: request {} failed: {}", request, e);
                self.last_error = Some(e.user_message().to_string());
            }
        }
        true
    }
}

/// Blank extracted text counts as a failed extraction
fn require_text(result: Result<String, ExtractionError>) -> Result<String, ExtractionError> {
    result.and_then(|text| {
        if text.trim().is_empty() {
            Err(ExtractionError::EmptyResult)
        } else {
            Ok(text)
        }
    })
}

/// Draft title for an uploaded file: the name without its `.pdf` extension
pub fn title_from_file_name(file_name: &str) -> String {
    let name = file_name.trim();
    let stem = match name.len().checked_sub(PDF_EXTENSION.len()) {
        Some(split) if name.is_char_boundary(split) && name[split..].eq_ignore_ascii_case(PDF_EXTENSION) => {
            &name[..split]
        }
        _ => name,
    };
    stem.to_string()
}

/// Run one request end to end against an extractor
///
/// For hosts that can await the extractor directly; the browser front end
/// uses `begin`/`complete` as separate events instead.
pub async fn run_extraction<E: TextExtractor>(
    tracker: &mut ExtractionTracker,
    extractor: &E,
    file_name: &str,
    mime_type: &str,
    bytes: &[u8],
) -> Result<(), ExtractionError> {
    let request = tracker.begin(file_name, mime_type)?;

    let result = if bytes.is_empty() {
        Err(ExtractionError::MalformedInput("empty file".to_string()))
    } else {
        extractor.extract(bytes, mime_type).await
    };

    let outcome = require_text(result);
    let failure = outcome.as_ref().err().cloned();
    tracker.finish(request, outcome);
    failure.map_or(Ok(()), Err)
}
