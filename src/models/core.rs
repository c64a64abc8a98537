//! Core data structures for the reading library
//!
//! Documents carry their own typing progress and highlight set. All offsets
//! are character offsets (Unicode scalar values), never byte offsets.

use serde::{Deserialize, Serialize};

pub use super::elements::{DocumentMode, HighlightColor};

/// A colored half-open interval `[start, end)` over a document's characters
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Highlight {
    pub start: usize,
    pub end: usize,
    pub color: HighlightColor,
}

impl Highlight {
    pub fn new(start: usize, end: usize, color: HighlightColor) -> Self {
        Self { start, end, color }
    }

    /// Check if this highlight is valid (start < end)
    pub fn is_valid(&self) -> bool {
        self.start < self.end
    }

    /// Check if this highlight shares at least one offset with `[start, end)`
    pub fn overlaps(&self, start: usize, end: usize) -> bool {
        self.start < end && self.end > start
    }
}

/// A unit of text with independent typing progress and highlights
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,

    pub title: String,

    pub content: String,

    /// Number of correctly typed characters from the start
    #[serde(rename = "progressIndex", default)]
    pub cursor: usize,

    /// Milliseconds since the Unix epoch
    pub created_at: i64,

    #[serde(default)]
    pub mode: DocumentMode,

    /// Sorted by start, pairwise non-overlapping
    #[serde(default)]
    pub highlights: Vec<Highlight>,
}

impl Document {
    /// Create a fresh document with a generated id, cursor 0 and no highlights
    pub fn new(title: impl Into<String>, content: impl Into<String>, mode: DocumentMode) -> Self {
        Self {
            id: new_id(),
            title: title.into(),
            content: content.into(),
            cursor: 0,
            created_at: now_millis(),
            mode,
            highlights: Vec::new(),
        }
    }

    /// Content length in characters
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Characters in `[start, end)`, clamped to the content
    pub fn slice_chars(&self, start: usize, end: usize) -> String {
        self.content
            .chars()
            .skip(start)
            .take(end.saturating_sub(start))
            .collect()
    }

    /// Typing progress as a percentage in `[0, 100]`
    pub fn progress_percent(&self) -> f64 {
        let len = self.char_len();
        if len == 0 {
            return 0.0;
        }
        (self.cursor as f64 / len as f64 * 100.0).min(100.0)
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.char_len()
    }
}

/// User input for creating a document
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewDocument {
    pub title: String,

    pub content: String,

    #[serde(default)]
    pub mode: DocumentMode,

    /// How many times the content is repeated back to back
    #[serde(default = "default_repeat_count")]
    pub repeat_count: usize,
}

fn default_repeat_count() -> usize {
    1
}

impl NewDocument {
    pub fn new(title: impl Into<String>, content: impl Into<String>, mode: DocumentMode) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            mode,
            repeat_count: 1,
        }
    }

    pub fn with_repeat_count(mut self, repeat_count: usize) -> Self {
        self.repeat_count = repeat_count;
        self
    }

    /// Title and content must both be non-blank
    pub fn is_valid(&self) -> bool {
        !self.title.trim().is_empty() && !self.content.trim().is_empty()
    }
}

/// Generate a fresh entity id (UUID v4)
pub fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Current time in milliseconds since the Unix epoch
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
