//! Element types and enumerations for the reading library
//!
//! Small closed sets of values shared between the document model, the
//! highlight engine and the JavaScript API.

use serde::{Deserialize, Serialize};

/// Reading mode of a document
///
/// The mode decides which selection tools the front end offers:
/// study mode paints highlights, vocabulary mode captures dictionary entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentMode {
    /// Typing only, no selection tools
    #[default]
    #[serde(rename = "normal")]
    Plain,

    /// Selections can be saved into the dictionary
    Vocabulary,

    /// Selections can be highlighted in color
    Study,
}

impl DocumentMode {
    pub fn name(&self) -> &'static str {
        match self {
            DocumentMode::Plain => "normal",
            DocumentMode::Vocabulary => "vocabulary",
            DocumentMode::Study => "study",
        }
    }

    /// Whether highlights may be painted or erased in this mode
    pub fn allows_highlights(&self) -> bool {
        matches!(self, DocumentMode::Study)
    }

    /// Whether selections may be saved to the dictionary in this mode
    pub fn allows_vocabulary(&self) -> bool {
        matches!(self, DocumentMode::Vocabulary)
    }
}

/// Paint color of a highlight
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightColor {
    Red,
    Blue,
    Green,
}

impl HighlightColor {
    /// Parse a color name ("red", "blue", "green")
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "red" => Some(HighlightColor::Red),
            "blue" => Some(HighlightColor::Blue),
            "green" => Some(HighlightColor::Green),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            HighlightColor::Red => "red",
            HighlightColor::Blue => "blue",
            HighlightColor::Green => "green",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_wire_names() {
        assert_eq!(serde_json::to_string(&DocumentMode::Plain).unwrap(), "\"normal\"");
        assert_eq!(serde_json::to_string(&DocumentMode::Study).unwrap(), "\"study\"");

        let mode: DocumentMode = serde_json::from_str("\"vocabulary\"").unwrap();
        assert_eq!(mode, DocumentMode::Vocabulary);
    }

    #[test]
    fn test_color_round_trip_names() {
        for color in [HighlightColor::Red, HighlightColor::Blue, HighlightColor::Green] {
            assert_eq!(HighlightColor::from_name(color.name()), Some(color));
        }
        assert_eq!(HighlightColor::from_name("purple"), None);
    }
}
