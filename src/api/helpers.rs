//! Shared helpers for WASM API operations
//!
//! This module contains the global application state and common patterns for
//! serialization, deserialization, error handling and logging across all API
//! operations.

use lazy_static::lazy_static;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::{Mutex, MutexGuard};
use wasm_bindgen::prelude::*;

use crate::extract::ExtractionTracker;
use crate::store::{Library, LocalStorageBlobStore};

// ============================================================================
// Application State
// ============================================================================

/// Everything the JavaScript side talks to
pub struct AppState {
    pub library: Library<LocalStorageBlobStore>,
    pub extraction: ExtractionTracker,
}

// WASM-owned application state (canonical source of truth)
lazy_static! {
    static ref APP: Mutex<Option<AppState>> = Mutex::new(None);
}

/// Install a freshly loaded state, replacing any previous one
pub fn install_app(state: AppState) -> Result<(), JsValue> {
    let mut guard = lock_app()?;
    *guard = Some(state);
    Ok(())
}

pub fn lock_app() -> Result<MutexGuard<'static, Option<AppState>>, JsValue> {
    APP.lock()
        .map_err(|e| validation_error(format!("Failed to lock application state: {}", e)))
}

/// Run `f` against the initialized state
pub fn with_app<T>(f: impl FnOnce(&mut AppState) -> Result<T, JsValue>) -> Result<T, JsValue> {
    let mut guard = lock_app()?;
    let app = guard
        .as_mut()
        .ok_or_else(|| validation_error("Library not initialized; call initLibrary() first"))?;
    f(app)
}

/// Id of the open document, or an error if none is open
pub fn active_document_id(app: &AppState) -> Result<String, JsValue> {
    app.library
        .active_document_id()
        .map(str::to_string)
        .ok_or_else(|| validation_error("No document open"))
}

// ============================================================================
// Logging Macros
// ============================================================================

/// Log a debug message with [WASM] prefix
#[macro_export]
macro_rules! wasm_log {
    ($($arg:tt)*) => {
        ::log::debug!("[WASM] {}", format!($($arg)*))
    };
}

/// Log an info message with [WASM] prefix
#[macro_export]
macro_rules! wasm_info {
    ($($arg:tt)*) => {
        ::log::info!("[WASM] {}", format!($($arg)*))
    };
}

/// Log a warning message with [WASM] prefix
#[macro_export]
macro_rules! wasm_warn {
    ($($arg:tt)*) => {
        ::log::warn!("[WASM] {}", format!($($arg)*))
    };
}

/// Log an error message with [WASM] prefix
#[macro_export]
macro_rules! wasm_error {
    ($($arg:tt)*) => {
        ::log::error!("[WASM] {}", format!($($arg)*))
    };
}

// ============================================================================
// Serialization/Deserialization Helpers
// ============================================================================

/// Deserialize a value from JavaScript with automatic error handling
pub fn deserialize<T: DeserializeOwned>(value: JsValue, error_context: &str) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| validation_error(format!("{}: {}", error_context, e)))
}

/// Deserialize an optional argument; `undefined` and `null` give the default
pub fn deserialize_or_default<T: DeserializeOwned + Default>(
    value: JsValue,
    error_context: &str,
) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    deserialize(value, error_context)
}

/// Serialize a value to JavaScript with automatic error handling
///
/// Maps become plain objects so the front end can read fields directly.
pub fn serialize<T: Serialize + ?Sized>(value: &T, error_context: &str) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::json_compatible();
    value
        .serialize(&serializer)
        .map_err(|e| validation_error(format!("{}: {}", error_context, e)))
}

// ============================================================================
// Result Conversion Helpers
// ============================================================================

/// Convert a validation error to a JsValue
pub fn validation_error(msg: impl Into<String>) -> JsValue {
    let msg = msg.into();
    wasm_error!("{}", msg);
    JsValue::from_str(&msg)
}
