//! Library settings
//!
//! Passed from JavaScript when the library is initialized. Every field has a
//! default, so `{}` or `undefined` gives the stock configuration.

use serde::{Deserialize, Serialize};

use crate::text::DEFAULT_PAGE_SIZE;

pub const DEFAULT_DOCUMENTS_KEY: &str = "murekkep_books";
pub const DEFAULT_DICTIONARY_KEY: &str = "murekkep_dictionary";
pub const DEFAULT_FOLDERS_KEY: &str = "murekkep_folders";

/// Longest document content accepted, repeats included
pub const DEFAULT_MAX_CONTENT_CHARS: usize = 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Characters per page
    pub page_size: usize,

    /// Collapse whitespace runs (including line breaks) when adding content
    pub collapse_whitespace: bool,

    /// Longest content, in characters, a new document may have after repeats
    pub max_content_chars: usize,

    /// Blob key for the documents collection
    pub documents_key: String,

    /// Blob key for the dictionary entries collection
    pub dictionary_key: String,

    /// Blob key for the folders collection
    pub folders_key: String,

    /// Console log level ("error", "warn", "info", "debug", "trace")
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            collapse_whitespace: true,
            max_content_chars: DEFAULT_MAX_CONTENT_CHARS,
            documents_key: DEFAULT_DOCUMENTS_KEY.to_string(),
            dictionary_key: DEFAULT_DICTIONARY_KEY.to_string(),
            folders_key: DEFAULT_FOLDERS_KEY.to_string(),
            log_level: "debug".to_string(),
        }
    }
}

impl Settings {
    /// Settings with out-of-range values pulled back into range
    pub fn validated(mut self) -> Self {
        if self.page_size == 0 {
            log::warn!("settings: pageSize 0 is not allowed, using 1");
            self.page_size = 1;
        }
        if self.max_content_chars == 0 {
            log::warn!("settings: maxContentChars 0 is not allowed, using {}", DEFAULT_MAX_CONTENT_CHARS);
            self.max_content_chars = DEFAULT_MAX_CONTENT_CHARS;
        }
        self
    }

    /// Parsed log level, `Debug` when unrecognized
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Debug)
    }
}
