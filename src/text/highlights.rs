//! Highlight interval engine
//!
//! Highlights are kept as a flat, sorted, non-overlapping list. Every write
//! flattens again: the touched range is cut out of whatever was there and,
//! when painting, re-added as one new highlight.

use crate::models::{Highlight, HighlightColor};

/// Paint (`Some(color)`) or erase (`None`) the range `[start, end)`
///
/// `existing` must be sorted and non-overlapping. Overlapped highlights keep
/// only their parts outside the range; the middle is dropped in both the
/// paint and the erase case, so repainting with the same color goes through
/// the same path. An empty or inverted range (`start >= end`) changes nothing.
pub fn apply_highlight(
    existing: &[Highlight],
    start: usize,
    end: usize,
    color: Option<HighlightColor>,
) -> Vec<Highlight> {
    if start >= end {
        log::debug!("apply_highlight: ignoring empty range {}..{}", start, end);
        return existing.to_vec();
    }

    let mut result: Vec<Highlight> = Vec::with_capacity(existing.len() + 2);

    for h in existing {
        if !h.overlaps(start, end) {
            result.push(*h);
            continue;
        }

        // Left remnant
        if h.start < start {
            result.push(Highlight::new(h.start, start, h.color));
        }

        // Right remnant
        if h.end > end {
            result.push(Highlight::new(end, h.end, h.color));
        }
    }

    if let Some(color) = color {
        result.push(Highlight::new(start, end, color));
    }

    result.sort_by_key(|h| h.start);
    result
}

/// Check the at-rest invariant: every highlight non-empty, sorted by start,
/// and no highlight reaching past the start of the next one
pub fn is_normalized(highlights: &[Highlight]) -> bool {
    highlights.iter().all(Highlight::is_valid)
        && highlights.windows(2).all(|pair| pair[0].end <= pair[1].start)
}

/// `is_normalized`, and nothing reaches past a text of `len` characters
pub fn is_normalized_within(highlights: &[Highlight], len: usize) -> bool {
    is_normalized(highlights) && highlights.last().map_or(true, |h| h.end <= len)
}

/// Clip highlights to a text of `len` characters and flatten them again
///
/// Highlights are replayed in order, so a later one wins where two overlap.
/// Anything that ends up empty is dropped.
pub fn clip_and_flatten(highlights: &[Highlight], len: usize) -> Vec<Highlight> {
    highlights.iter().fold(Vec::new(), |flat, h| {
        apply_highlight(&flat, h.start, h.end.min(len), Some(h.color))
    })
}

/// Highlights that share at least one offset with `[start, end)`
pub fn highlights_in(highlights: &[Highlight], start: usize, end: usize) -> Vec<Highlight> {
    highlights
        .iter()
        .filter(|h| h.overlaps(start, end))
        .copied()
        .collect()
}
