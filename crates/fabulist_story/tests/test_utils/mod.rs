//! Test utilities for story pipeline tests.
//!
//! Scripted provider mocks and story fixtures.

pub mod mock_providers;

#[allow(unused_imports)]
pub use mock_providers::{ImageOutcome, MockIllustrator, MockStoryWriter, ScriptedImage};

/// A well-formed story reply about space with two illustrations.
#[allow(dead_code)]
pub fn space_story_json() -> String {
    serde_json::json!({
        "title": "Zara's Trip to the Moon",
        "story_text": "Zara loved looking at the stars.\nOne night she built a rocket.\n[IMAGE_1]\nShe landed softly on the moon and met a friendly alien.\n[IMAGE_2]\nThey shared snacks and laughed until it was time to go home.",
        "moral": "Friends can be found in the most unexpected places.",
        "image_summaries": [
            "A girl with curly hair building a cardboard rocket in her backyard at night",
            "The girl and a small green alien sharing snacks on the moon"
        ]
    })
    .to_string()
}
