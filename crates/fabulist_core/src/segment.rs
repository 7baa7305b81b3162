//! Renderable pieces of a composed story.

use serde::{Deserialize, Serialize};

/// One renderable piece of a story body, in reading order.
///
/// # Examples
///
/// ```
/// use fabulist_core::RenderSegment;
///
/// let text = RenderSegment::Text { lines: vec!["Once upon a time.".to_string()] };
/// let image = RenderSegment::Image { index: 0, url: "data:image/jpeg;base64,AA".to_string() };
///
/// assert!(text.is_text());
/// assert!(image.is_image());
/// assert_eq!(image.to_string(), "Image(0)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RenderSegment {
    /// A run of text, one paragraph per line
    Text {
        /// Non-blank lines in order
        lines: Vec<String>,
    },
    /// An illustration resolved from a placeholder
    Image {
        /// Zero-based illustration index
        index: usize,
        /// Embeddable image reference
        url: String,
    },
}

impl RenderSegment {
    /// Whether this is a text segment.
    pub fn is_text(&self) -> bool {
        matches!(self, RenderSegment::Text { .. })
    }

    /// Whether this is an image segment.
    pub fn is_image(&self) -> bool {
        matches!(self, RenderSegment::Image { .. })
    }
}

impl std::fmt::Display for RenderSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RenderSegment::Text { lines } => write!(f, "Text({} lines)", lines.len()),
            RenderSegment::Image { index, .. } => write!(f, "Image({})", index),
        }
    }
}
