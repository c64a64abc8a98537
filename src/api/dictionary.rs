//! Dictionary and folder operations

use wasm_bindgen::prelude::*;

use crate::api::helpers::{active_document_id, deserialize, deserialize_or_default, serialize, with_app};
use crate::models::{DictionaryEntry, EntryFilter};
use crate::text::{IndexedSelection, SelectionMapper};
use crate::{wasm_info, wasm_log, wasm_warn};

/// Save the selected word of the open vocabulary-mode document
///
/// Returns the new entry, or `null` when the selection is empty or the
/// document is not in vocabulary mode.
#[wasm_bindgen(js_name = addToDictionary)]
pub fn add_to_dictionary(selection: JsValue, definition: Option<String>) -> Result<JsValue, JsValue> {
    let selection: IndexedSelection = deserialize(selection, "Invalid selection")?;
    let Some(span) = selection.map_selection() else {
        wasm_log!("addToDictionary: nothing selected");
        return Ok(JsValue::NULL);
    };

    with_app(|app| {
        let id = active_document_id(app)?;
        let definition = definition.as_deref().unwrap_or("");
        match app.library.add_entry_from_selection(&id, span, definition) {
            Some(entry) => {
                wasm_info!("addToDictionary: '{}' from {}", entry.word, id);
                serialize(entry, "Failed to serialize dictionary entry")
            }
            None => {
                wasm_warn!("addToDictionary: refused {}..{} on {}", span.start, span.end, id);
                Ok(JsValue::NULL)
            }
        }
    })
}

/// Entries matching `{ search?, folder? }`; omit the filter to list all
#[wasm_bindgen(js_name = listDictionary)]
pub fn list_dictionary(filter: JsValue) -> Result<JsValue, JsValue> {
    let filter: EntryFilter = deserialize_or_default(filter, "Invalid dictionary filter")?;
    with_app(|app| {
        let entries = app.library.filter_entries(&filter);
        wasm_log!("listDictionary: {} of {} entries", entries.len(), app.library.dictionary().len());
        serialize(&entries, "Failed to serialize dictionary")
    })
}

/// Replace an entry (matched by id) with an edited copy
#[wasm_bindgen(js_name = updateDictionaryEntry)]
pub fn update_dictionary_entry(entry: JsValue) -> Result<bool, JsValue> {
    let entry: DictionaryEntry = deserialize(entry, "Invalid dictionary entry")?;
    with_app(|app| Ok(app.library.update_entry(entry)))
}

/// Move an entry into a folder, or out of all folders when `folderId` is omitted
#[wasm_bindgen(js_name = moveDictionaryEntry)]
pub fn move_dictionary_entry(id: &str, folder_id: Option<String>) -> Result<bool, JsValue> {
    with_app(|app| Ok(app.library.move_entry(id, folder_id.as_deref())))
}

#[wasm_bindgen(js_name = deleteDictionaryEntry)]
pub fn delete_dictionary_entry(id: &str) -> Result<bool, JsValue> {
    with_app(|app| Ok(app.library.remove_entry(id)))
}

#[wasm_bindgen(js_name = listFolders)]
pub fn list_folders() -> Result<JsValue, JsValue> {
    with_app(|app| serialize(app.library.folders(), "Failed to serialize folders"))
}

/// Create a folder; returns it, or `null` for a blank name
#[wasm_bindgen(js_name = createFolder)]
pub fn create_folder(name: &str) -> Result<JsValue, JsValue> {
    with_app(|app| match app.library.create_folder(name) {
        Some(folder) => serialize(folder, "Failed to serialize folder"),
        None => Ok(JsValue::NULL),
    })
}

#[wasm_bindgen(js_name = renameFolder)]
pub fn rename_folder(id: &str, name: &str) -> Result<bool, JsValue> {
    with_app(|app| Ok(app.library.rename_folder(id, name)))
}

/// Delete a folder; its entries stay in the dictionary, uncategorized
#[wasm_bindgen(js_name = deleteFolder)]
pub fn delete_folder(id: &str) -> Result<bool, JsValue> {
    with_app(|app| Ok(app.library.delete_folder(id)))
}
