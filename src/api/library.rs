//! Library operations: initialization and the document list

use wasm_bindgen::prelude::*;

use crate::api::helpers::{deserialize, deserialize_or_default, install_app, serialize, validation_error, with_app, AppState};
use crate::config::Settings;
use crate::extract::ExtractionTracker;
use crate::models::NewDocument;
use crate::store::{Library, LocalStorageBlobStore};
use crate::{wasm_info, wasm_log, wasm_warn};

/// Load the library from local storage
///
/// `settings` may be omitted; missing fields take their defaults. Calling
/// this again reloads everything and closes the open document.
#[wasm_bindgen(js_name = initLibrary)]
pub fn init_library(settings: JsValue) -> Result<(), JsValue> {
    let settings: Settings = deserialize_or_default(settings, "Invalid settings")?;
    log::set_max_level(settings.log_level().to_level_filter());

    let library = Library::load(LocalStorageBlobStore, settings);
    wasm_info!(
        "initLibrary: {} documents, page size {}",
        library.documents().len(),
        library.pagination().page_size()
    );

    install_app(AppState {
        library,
        extraction: ExtractionTracker::new(),
    })
}

/// All documents, newest first
#[wasm_bindgen(js_name = listDocuments)]
pub fn list_documents() -> Result<JsValue, JsValue> {
    with_app(|app| serialize(app.library.documents(), "Failed to serialize documents"))
}

/// Add a document from `{ title, content, mode?, repeatCount? }`
///
/// Returns the stored document, or `null` when title or content is blank.
#[wasm_bindgen(js_name = addDocument)]
pub fn add_document(new_document: JsValue) -> Result<JsValue, JsValue> {
    let new_document: NewDocument = deserialize(new_document, "Invalid document")?;
    wasm_log!(
        "addDocument: '{}' mode={} repeat={}",
        new_document.title,
        new_document.mode.name(),
        new_document.repeat_count
    );

    with_app(|app| match app.library.add_document(new_document) {
        Some(doc) => serialize(doc, "Failed to serialize document"),
        None => {
            wasm_warn!("addDocument: title and content are required");
            Ok(JsValue::NULL)
        }
    })
}

#[wasm_bindgen(js_name = deleteDocument)]
pub fn delete_document(id: &str) -> Result<bool, JsValue> {
    with_app(|app| Ok(app.library.remove_document(id)))
}

/// Open a document for reading; returns it, or an error for an unknown id
#[wasm_bindgen(js_name = selectDocument)]
pub fn select_document(id: &str) -> Result<JsValue, JsValue> {
    with_app(|app| {
        let doc = app
            .library
            .select_document(id)
            .ok_or_else(|| validation_error(format!("Document not found: {}", id)))?;
        serialize(doc, "Failed to serialize document")
    })
}

/// The open document, or `null`
#[wasm_bindgen(js_name = getActiveDocument)]
pub fn get_active_document() -> Result<JsValue, JsValue> {
    with_app(|app| match app.library.active_document() {
        Some(doc) => serialize(doc, "Failed to serialize document"),
        None => Ok(JsValue::NULL),
    })
}

#[wasm_bindgen(js_name = closeDocument)]
pub fn close_document() -> Result<(), JsValue> {
    with_app(|app| {
        app.library.deactivate();
        Ok(())
    })
}
