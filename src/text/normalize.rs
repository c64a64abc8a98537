//! Content clean-up applied when a document is added

/// Collapse every whitespace run to a single space and trim both ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Repeat `text` back to back, separated by a space
///
/// A count of 0 or 1 returns the text unchanged. Returns `None` when the
/// result would be longer than `max_chars` characters.
pub fn repeat_content(text: &str, count: usize, max_chars: usize) -> Option<String> {
    let count = count.max(1);
    let chars = text.chars().count();
    let total = chars.checked_mul(count).and_then(|n| n.checked_add(count - 1));
    if total.map_or(true, |total| total > max_chars) {
        log::warn!("repeat_content: {} chars x {} would exceed {} chars", chars, count, max_chars);
        return None;
    }
    Some(vec![text; count].join(" "))
}

/// Prepare pasted or extracted text for typing practice
///
/// `None` when the prepared text would exceed `max_chars`.
pub fn normalize_content(text: &str, collapse: bool, repeat_count: usize, max_chars: usize) -> Option<String> {
    let base = if collapse {
        collapse_whitespace(text)
    } else {
        text.trim().to_string()
    };
    repeat_content(&base, repeat_count, max_chars)
}
