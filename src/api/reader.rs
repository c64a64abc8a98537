//! Reader operations on the open document: typing, paging and highlights
//!
//! Every function here acts on the document selected with `selectDocument`
//! and fails when none is open.

use wasm_bindgen::prelude::*;

use crate::api::helpers::{active_document_id, deserialize, serialize, validation_error, with_app};
use crate::models::HighlightColor;
use crate::text::{IndexedSelection, KeyInput, SelectionMapper};
use crate::{wasm_log, wasm_warn};

/// Feed one key to the typing cursor
///
/// `key` is the `KeyboardEvent.key` value: a single character, `"Enter"` or
/// `"Backspace"`. Returns the new cursor, or `undefined` when the key did
/// not match the expected character or is not a typing key.
#[wasm_bindgen(js_name = typeKey)]
pub fn type_key(key: &str) -> Result<Option<usize>, JsValue> {
    let Some(input) = KeyInput::from_key(key) else {
        wasm_log!("typeKey: ignoring key {:?}", key);
        return Ok(None);
    };

    with_app(|app| {
        let id = active_document_id(app)?;
        Ok(app.library.type_key(&id, input))
    })
}

/// Move the cursor to the first character of a one-based page
///
/// Out-of-range pages are clamped. Returns the new cursor.
#[wasm_bindgen(js_name = jumpToPage)]
pub fn jump_to_page(page: usize) -> Result<usize, JsValue> {
    with_app(|app| {
        let id = active_document_id(app)?;
        let cursor = app
            .library
            .jump_to_page(&id, page)
            .ok_or_else(|| validation_error(format!("Document not found: {}", id)))?;
        wasm_log!("jumpToPage: page {} -> cursor {}", page, cursor);
        Ok(cursor)
    })
}

/// The page containing the cursor, with its highlights
#[wasm_bindgen(js_name = getPageView)]
pub fn get_page_view() -> Result<JsValue, JsValue> {
    with_app(|app| {
        let id = active_document_id(app)?;
        let view = app
            .library
            .page_view(&id)
            .ok_or_else(|| validation_error(format!("Document not found: {}", id)))?;
        serialize(&view, "Failed to serialize page view")
    })
}

/// Paint the selection with `color`, or erase it when `color` is omitted
///
/// `selection` is `{ anchorIndex, focusIndex, text }`. Returns the
/// document's highlights after the change, or `null` when nothing changed
/// (empty selection, or the document is not in study mode).
#[wasm_bindgen(js_name = applyHighlight)]
pub fn apply_highlight(selection: JsValue, color: Option<String>) -> Result<JsValue, JsValue> {
    let selection: IndexedSelection = deserialize(selection, "Invalid selection")?;
    let color = match color.as_deref() {
        None => None,
        Some(name) => Some(
            HighlightColor::from_name(name)
                .ok_or_else(|| validation_error(format!("Unknown highlight color: {}", name)))?,
        ),
    };

    let Some(span) = selection.map_selection() else {
        wasm_log!("applyHighlight: nothing selected");
        return Ok(JsValue::NULL);
    };

    with_app(|app| {
        let id = active_document_id(app)?;
        match app.library.apply_highlight(&id, span.start, span.end, color) {
            Some(highlights) => {
                wasm_log!(
                    "applyHighlight: {}..{} {} -> {} highlights",
                    span.start,
                    span.end,
                    color.map_or("erase", |c| c.name()),
                    highlights.len()
                );
                serialize(highlights, "Failed to serialize highlights")
            }
            None => {
                wasm_warn!("applyHighlight: refused {}..{} on {}", span.start, span.end, id);
                Ok(JsValue::NULL)
            }
        }
    })
}
