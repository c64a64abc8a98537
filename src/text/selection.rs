//! Mapping a visual selection back to character offsets
//!
//! The renderer knows how it laid characters out; the engines only need a
//! normalized `[start, end)` span. `SelectionMapper` is the seam between them.

use serde::{Deserialize, Serialize};

/// A normalized character span, `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSpan {
    pub start: usize,
    pub end: usize,
}

impl TextSpan {
    /// Build a span from two endpoints given in either order
    pub fn new(a: usize, b: usize) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Resolves whatever the rendering layer calls a selection
pub trait SelectionMapper {
    /// The selected span, or `None` when nothing resolvable is selected
    fn map_selection(&self) -> Option<TextSpan>;
}

/// A selection whose endpoints are the global indices of the characters at
/// each boundary
///
/// The renderer tags every character with its index; the anchor is where the
/// drag started and the focus where it ended. Both boundary characters are
/// included, so a left-to-right drag from 3 to 5 selects `[3, 6)`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexedSelection {
    pub anchor_index: Option<usize>,
    pub focus_index: Option<usize>,
    /// The text the browser reports as selected
    #[serde(default)]
    pub text: String,
}

impl IndexedSelection {
    pub fn new(anchor_index: usize, focus_index: usize, text: impl Into<String>) -> Self {
        Self {
            anchor_index: Some(anchor_index),
            focus_index: Some(focus_index),
            text: text.into(),
        }
    }

    /// Selected text with surrounding whitespace removed
    pub fn trimmed_text(&self) -> &str {
        self.text.trim()
    }
}

impl SelectionMapper for IndexedSelection {
    fn map_selection(&self) -> Option<TextSpan> {
        if self.trimmed_text().is_empty() {
            return None;
        }
        let (anchor, focus) = (self.anchor_index?, self.focus_index?);
        let span = TextSpan::new(anchor, focus);
        Some(TextSpan {
            start: span.start,
            end: span.end.checked_add(1)?,
        })
    }
}
