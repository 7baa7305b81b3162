//! Story prompt and response schema construction.

use fabulist_core::{Category, StoryRequest, StorySettings};
use serde_json::{Value, json};

/// Fixed instruction describing audience, tone, length and output shape.
pub const SYSTEM_INSTRUCTION: &str = "You are a creative storyteller for children aged 5–10. \
Your stories are around 300 words, positive, have a happy ending, and contain a simple moral. \
You must avoid violence, scary situations, or complex adult themes. \
For each story, you must provide 2-3 concise image summaries in an array. \
The story text must contain placeholders like [IMAGE_1], [IMAGE_2], etc., where the images should be inserted. \
You must return the story as a JSON object matching the provided schema.";

/// MIME type requested for structured story output.
pub const RESPONSE_MIME_TYPE: &str = "application/json";

/// User prompt embedding the category verbatim.
pub fn story_prompt(category: &Category) -> String {
    format!(
        "Write a short story for a child about the category \"{}\".",
        category
    )
}

/// Structured-output schema the story response must satisfy.
pub fn story_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "title": {
                "type": "STRING",
                "description": "The title of the story."
            },
            "story_text": {
                "type": "STRING",
                "description": "The full text of the story, around 300 words. The story must contain \
2-3 placeholders like [IMAGE_1], [IMAGE_2], etc., where illustrations should be placed."
            },
            "moral": {
                "type": "STRING",
                "description": "A one-line moral for the story."
            },
            "image_summaries": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "An array of 2-3 simple, descriptive summaries for an AI image \
generator. Each summary should correspond to a placeholder in the story_text. Describe the main \
character, the setting, and the action in a friendly, cartoon style with bright colors."
            }
        },
        "required": ["title", "story_text", "moral", "image_summaries"]
    })
}

/// Build the complete text generation request for a category.
///
/// # Examples
///
/// ```
/// use fabulist_core::{Category, StorySettings};
/// use fabulist_story::build_story_request;
///
/// let category = Category::parse("space").unwrap();
/// let request = build_story_request(&category, &StorySettings::default());
///
/// assert_eq!(
///     request.prompt,
///     "Write a short story for a child about the category \"space\"."
/// );
/// assert_eq!(request.response_mime_type, "application/json");
/// ```
pub fn build_story_request(category: &Category, settings: &StorySettings) -> StoryRequest {
    StoryRequest {
        model: settings.model().clone(),
        system_instruction: SYSTEM_INSTRUCTION.to_string(),
        prompt: story_prompt(category),
        response_mime_type: RESPONSE_MIME_TYPE.to_string(),
        response_schema: story_schema(),
        temperature: Some(*settings.temperature()),
        top_k: Some(*settings.top_k()),
        top_p: Some(*settings.top_p()),
    }
}
