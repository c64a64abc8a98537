//! Dictionary entries and folders
//!
//! Entries are captured from vocabulary-mode documents. Folders group entries;
//! an entry without a folder is "uncategorized".

use serde::{Deserialize, Serialize};

use super::core::{new_id, now_millis};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryEntry {
    pub id: String,

    pub word: String,

    #[serde(default)]
    pub definition: String,

    /// Document the word was captured from
    #[serde(rename = "sourceBookId", default, skip_serializing_if = "Option::is_none")]
    pub source_document_id: Option<String>,

    /// Must name a live folder when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<String>,

    pub created_at: i64,
}

impl DictionaryEntry {
    pub fn new(
        word: impl Into<String>,
        definition: impl Into<String>,
        source_document_id: Option<String>,
    ) -> Self {
        Self {
            id: new_id(),
            word: word.into(),
            definition: definition.into(),
            source_document_id,
            folder_id: None,
            created_at: now_millis(),
        }
    }

    /// Case-insensitive substring match over word and definition
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.word.to_lowercase().contains(&needle)
            || self.definition.to_lowercase().contains(&needle)
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DictionaryFolder {
    pub id: String,
    pub name: String,
    pub created_at: i64,
}

impl DictionaryFolder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: new_id(),
            name: name.into(),
            created_at: now_millis(),
        }
    }
}

/// Which folder(s) a dictionary listing is restricted to
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(tag = "kind", content = "id", rename_all = "camelCase")]
pub enum FolderFilter {
    #[default]
    All,
    /// Entries with no folder
    Uncategorized,
    Folder(String),
}

impl FolderFilter {
    pub fn matches(&self, entry: &DictionaryEntry) -> bool {
        match self {
            FolderFilter::All => true,
            FolderFilter::Uncategorized => entry.folder_id.is_none(),
            FolderFilter::Folder(id) => entry.folder_id.as_deref() == Some(id.as_str()),
        }
    }
}

/// Search text plus folder restriction for dictionary listings
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EntryFilter {
    #[serde(default)]
    pub search: String,

    #[serde(default)]
    pub folder: FolderFilter,
}

impl EntryFilter {
    pub fn matches(&self, entry: &DictionaryEntry) -> bool {
        entry.matches_search(&self.search) && self.folder.matches(entry)
    }
}
