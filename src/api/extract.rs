//! PDF extraction events
//!
//! The extraction service is called from JavaScript. These functions bracket
//! the call: `beginExtraction` before, `completeExtraction` or
//! `failExtraction` after. Request ids are plain numbers on the JS side.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use crate::api::helpers::{serialize, validation_error, with_app};
use crate::extract::{ExtractionDraft, ExtractionError, ProcessingState, RequestId};
use crate::{wasm_info, wasm_log};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ExtractionStatus<'a> {
    #[serde(flatten)]
    state: &'a ProcessingState,
    draft: &'a ExtractionDraft,
    last_error: Option<&'a str>,
}

fn request_id(value: f64) -> Result<RequestId, JsValue> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 {
        Ok(value as RequestId)
    } else {
        Err(validation_error(format!("Invalid request id: {}", value)))
    }
}

/// Start extracting `fileName`; returns the request id
///
/// Fails with a user-facing message when the file is not a PDF.
#[wasm_bindgen(js_name = beginExtraction)]
pub fn begin_extraction(file_name: &str, mime_type: &str) -> Result<f64, JsValue> {
    with_app(|app| {
        app.extraction
            .begin(file_name, mime_type)
            .map(|id| id as f64)
            .map_err(|e| validation_error(e.user_message()))
    })
}

/// Deliver extracted text; returns `false` if the request was superseded
#[wasm_bindgen(js_name = completeExtraction)]
pub fn complete_extraction(request: f64, text: String) -> Result<bool, JsValue> {
    let request = request_id(request)?;
    with_app(|app| {
        let accepted = app.extraction.complete(request, Ok(text));
        wasm_info!("completeExtraction: request {} accepted={}", request, accepted);
        Ok(accepted)
    })
}

/// Report that the extraction service failed
#[wasm_bindgen(js_name = failExtraction)]
pub fn fail_extraction(request: f64, reason: String) -> Result<bool, JsValue> {
    let request = request_id(request)?;
    with_app(|app| {
        let accepted = app.extraction.complete(request, Err(ExtractionError::Upstream(reason)));
        wasm_log!("failExtraction: request {} accepted={}", request, accepted);
        Ok(accepted)
    })
}

/// `{ isProcessing, message, draft, lastError }`
#[wasm_bindgen(js_name = getProcessingState)]
pub fn get_processing_state() -> Result<JsValue, JsValue> {
    with_app(|app| {
        let status = ExtractionStatus {
            state: app.extraction.state(),
            draft: app.extraction.draft(),
            last_error: app.extraction.last_error(),
        };
        serialize(&status, "Failed to serialize processing state")
    })
}

#[wasm_bindgen(js_name = setDraftTitle)]
pub fn set_draft_title(title: &str) -> Result<(), JsValue> {
    with_app(|app| {
        app.extraction.set_draft_title(title);
        Ok(())
    })
}

/// Hand over the draft and clear it, e.g. once it has been added as a document
#[wasm_bindgen(js_name = takeDraft)]
pub fn take_draft() -> Result<JsValue, JsValue> {
    with_app(|app| {
        let draft = app.extraction.take_draft();
        serialize(&draft, "Failed to serialize draft")
    })
}
