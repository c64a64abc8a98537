//! Text engines
//!
//! Pure logic over a document's characters, with no storage or browser
//! knowledge.
//!
//! ## Modules
//!
//! - `highlights`: flattening paint/erase of colored ranges
//! - `cursor`: typing progress state machine and pagination
//! - `selection`: visual selection to character span
//! - `normalize`: content clean-up on add

pub mod cursor;
pub mod highlights;
pub mod normalize;
pub mod selection;

// Re-exports for convenience
pub use cursor::{KeyInput, PageView, Pagination, TypingCursor, DEFAULT_PAGE_SIZE};
pub use highlights::{apply_highlight, clip_and_flatten, highlights_in, is_normalized, is_normalized_within};
pub use normalize::normalize_content;
pub use selection::{IndexedSelection, SelectionMapper, TextSpan};
