//! Reading Library WASM API
//!
//! This module provides the JavaScript-facing API. All state lives in one
//! global [`helpers::AppState`] created by `initLibrary`.
//!
//! # Module Structure
//!
//! - `helpers`: Shared state, serialization, error handling and logging
//! - `library`: Initialization and the document list
//! - `reader`: Typing, paging and highlights on the open document
//! - `dictionary`: Dictionary entries and folders
//! - `extract`: PDF extraction events and the draft

pub mod helpers;
pub mod dictionary;
pub mod extract;
pub mod library;
pub mod reader;

pub use dictionary::*;
pub use extract::*;
pub use library::*;
pub use reader::*;
