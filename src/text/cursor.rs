//! Typing progress and pagination
//!
//! The cursor counts correctly typed characters. It only moves on a matching
//! keystroke, a backspace or an explicit jump; everything page-related is
//! derived from it.

use serde::{Deserialize, Serialize};
use std::ops::Range;

use super::highlights::highlights_in;
use crate::models::{Document, Highlight};

/// Characters per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 400;

/// A keystroke as seen by the typing state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyInput {
    /// A printable character
    Char(char),
    Backspace,
    /// Enter; matches a newline in the content
    LineSubmit,
}

impl KeyInput {
    /// Translate a DOM `KeyboardEvent.key` value
    ///
    /// Modifier, navigation and function keys have multi-character names and
    /// map to `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Backspace" => Some(KeyInput::Backspace),
            "Enter" => Some(KeyInput::LineSubmit),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(ch), None) => Some(KeyInput::Char(ch)),
                    _ => None,
                }
            }
        }
    }

    /// Whether this input types the expected character
    fn matches(&self, expected: char) -> bool {
        match self {
            KeyInput::Char(ch) => *ch == expected,
            KeyInput::LineSubmit => expected == '\n',
            KeyInput::Backspace => false,
        }
    }
}

/// Cursor into a text of `len` characters, always within `[0, len]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypingCursor {
    pos: usize,
    len: usize,
}

impl TypingCursor {
    pub fn new(pos: usize, len: usize) -> Self {
        Self { pos: pos.min(len), len }
    }

    pub fn for_document(doc: &Document) -> Self {
        Self::new(doc.cursor, doc.char_len())
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_finished(&self) -> bool {
        self.pos == self.len
    }

    /// Move one character forward; `None` at the end of the text
    pub fn advance(&mut self) -> Option<usize> {
        if self.pos >= self.len {
            return None;
        }
        self.pos += 1;
        Some(self.pos)
    }

    /// Move one character back; `None` at the start of the text
    pub fn retreat(&mut self) -> Option<usize> {
        if self.pos == 0 {
            return None;
        }
        self.pos -= 1;
        Some(self.pos)
    }

    /// Move directly to `target`, clamped to `[0, len]`
    pub fn jump(&mut self, target: usize) -> usize {
        self.pos = target.min(self.len);
        self.pos
    }

    /// Apply a keystroke against `content`
    ///
    /// Returns the new position when the cursor moved. A character that does
    /// not match the expected one is silently ignored.
    pub fn handle_input(&mut self, content: &str, input: KeyInput) -> Option<usize> {
        if input == KeyInput::Backspace {
            return self.retreat();
        }

        let expected = content.chars().nth(self.pos)?;
        if input.matches(expected) {
            self.advance()
        } else {
            log::debug!("typing: mismatch at {} (expected {:?}, got {:?})", self.pos, expected, input);
            None
        }
    }
}

/// Fixed-size page windows over a text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pagination {
    pub fn new(page_size: usize) -> Self {
        Self { page_size: page_size.max(1) }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Zero-based page containing `cursor`
    pub fn page_index(&self, cursor: usize) -> usize {
        cursor / self.page_size
    }

    /// One-based page number shown to the user
    pub fn page_number(&self, cursor: usize) -> usize {
        self.page_index(cursor) + 1
    }

    pub fn page_start(&self, cursor: usize) -> usize {
        self.page_index(cursor) * self.page_size
    }

    /// Character range of the page containing `cursor`, clamped to `len`
    pub fn page_range(&self, cursor: usize, len: usize) -> Range<usize> {
        let start = self.page_start(cursor).min(len);
        let end = (start + self.page_size).min(len);
        start..end
    }

    /// Number of pages, never less than one
    pub fn total_pages(&self, len: usize) -> usize {
        len.div_ceil(self.page_size).max(1)
    }

    /// Cursor position for a one-based page jump, with the page clamped to
    /// `[1, total_pages]`
    pub fn jump_target(&self, page: usize, len: usize) -> usize {
        let page = page.clamp(1, self.total_pages(len));
        ((page - 1) * self.page_size).min(len)
    }

    /// Snapshot of the page containing the document's cursor
    pub fn view(&self, doc: &Document) -> PageView {
        let len = doc.char_len();
        let range = self.page_range(doc.cursor, len);

        PageView {
            document_id: doc.id.clone(),
            page_number: self.page_number(doc.cursor),
            total_pages: self.total_pages(len),
            page_start: range.start,
            text: doc.slice_chars(range.start, range.end),
            cursor: doc.cursor,
            progress_percent: doc.progress_percent(),
            highlights: highlights_in(&doc.highlights, range.start, range.end),
        }
    }
}

/// What the renderer needs to draw the current page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub document_id: String,
    pub page_number: usize,
    pub total_pages: usize,
    /// Global offset of the first character of `text`
    pub page_start: usize,
    pub text: String,
    pub cursor: usize,
    pub progress_percent: f64,
    /// Highlights overlapping this page, in global offsets
    pub highlights: Vec<Highlight>,
}
