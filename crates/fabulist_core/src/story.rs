//! Story records before and after illustration.

use serde::{Deserialize, Serialize};

/// A story as returned by the text service, after shape validation.
///
/// `story_text` carries zero or more `[IMAGE_<n>]` placeholders, 1-indexed,
/// one per entry of `image_summaries`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StoryDraft {
    /// Story title
    pub title: String,
    /// Full story text with placeholders
    pub story_text: String,
    /// One-line moral
    pub moral: String,
    /// One illustration prompt per placeholder, in order
    pub image_summaries: Vec<String>,
}

/// A fully generated story with its resolved illustrations.
///
/// Built once per successful generation and never mutated afterwards.
///
/// # Examples
///
/// ```
/// use fabulist_core::{IllustratedStory, StoryDraft};
///
/// let draft = StoryDraft {
///     title: "Zara and the Moon".to_string(),
///     story_text: "Once [IMAGE_1] there was a moon.".to_string(),
///     moral: "Be brave.".to_string(),
///     image_summaries: vec!["a girl on the moon".to_string()],
/// };
///
/// let story = IllustratedStory::from_draft(draft, vec!["data:image/jpeg;base64,AA".to_string()]);
/// assert_eq!(story.title(), "Zara and the Moon");
/// assert_eq!(story.image_urls().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct IllustratedStory {
    /// Story title
    title: String,
    /// Story text with `[IMAGE_<n>]` placeholders
    body: String,
    /// One-line moral
    moral: String,
    /// Resolved image references, positionally matched to placeholders
    image_urls: Vec<String>,
}

impl IllustratedStory {
    /// Assemble a story from its parts.
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        moral: impl Into<String>,
        image_urls: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            moral: moral.into(),
            image_urls,
        }
    }

    /// Pair a validated draft with one image reference per summary.
    pub fn from_draft(draft: StoryDraft, image_urls: Vec<String>) -> Self {
        Self {
            title: draft.title,
            body: draft.story_text,
            moral: draft.moral,
            image_urls,
        }
    }

    /// Image reference for a zero-based placeholder index, if one exists.
    pub fn image_url(&self, index: usize) -> Option<&str> {
        self.image_urls.get(index).map(String::as_str)
    }
}
