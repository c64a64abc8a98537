//! Mürekkep Reading Library WASM Module
//!
//! Core of a typing-practice reader: a library of documents typed through
//! character by character, colored study highlights, and a word dictionary
//! with folders. Everything persists to browser local storage.

pub mod config;
pub mod extract;
pub mod models;
pub mod store;
pub mod text;
pub mod api;

// Re-export commonly used types
pub use config::Settings;
pub use models::core::*;
pub use models::dictionary::*;
pub use models::elements::*;
pub use store::{BlobStore, Library, MemoryBlobStore};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already initialized: {}", e).into());
    }

    log::info!("Mürekkep WASM module initialized");
}
