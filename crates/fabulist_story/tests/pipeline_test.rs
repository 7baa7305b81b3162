//! End-to-end pipeline tests against scripted providers.

mod test_utils;

use std::sync::Arc;

use fabulist_core::{Category, StorySettings};
use fabulist_error::{GeminiErrorKind, StoryErrorKind};
use fabulist_story::{
    StoryPipeline, SYSTEM_INSTRUCTION, build_story_request, compose_segments, narration_text,
};
use test_utils::{MockIllustrator, MockStoryWriter, ScriptedImage, space_story_json};

fn category(raw: &str) -> Category {
    Category::parse(raw).expect("valid category")
}

#[test]
fn test_story_request_embeds_category_and_schema() {
    let request = build_story_request(&category("  dinosaurs "), &StorySettings::default());

    assert_eq!(
        request.prompt,
        "Write a short story for a child about the category \"dinosaurs\"."
    );
    assert_eq!(request.system_instruction, SYSTEM_INSTRUCTION);
    assert_eq!(request.model, "gemini-2.5-flash");
    assert_eq!(request.temperature, Some(0.8));
    assert_eq!(request.top_k, Some(40));
    assert_eq!(request.top_p, Some(0.95));

    let schema = &request.response_schema;
    assert_eq!(schema["type"], "OBJECT");
    assert_eq!(schema["properties"]["image_summaries"]["type"], "ARRAY");
    assert_eq!(schema["properties"]["image_summaries"]["items"]["type"], "STRING");
    assert_eq!(
        schema["required"],
        serde_json::json!(["title", "story_text", "moral", "image_summaries"])
    );
}

#[tokio::test]
async fn test_space_story_end_to_end() -> anyhow::Result<()> {
    let writer = Arc::new(MockStoryWriter::new_success(space_story_json()));
    let illustrator = Arc::new(MockIllustrator::new(vec![
        ScriptedImage::image("cardboard rocket", 20),
        ScriptedImage::image("small green alien", 5),
    ]));
    let pipeline = StoryPipeline::new(writer.clone(), illustrator.clone());

    let story = pipeline.generate(&category("space")).await?;

    assert_eq!(story.title(), "Zara's Trip to the Moon");
    assert_eq!(story.image_urls().len(), 2);
    assert_eq!(story.image_urls()[0], "data:image/jpeg;base64,IMG:cardboard rocket");
    assert_eq!(story.image_urls()[1], "data:image/jpeg;base64,IMG:small green alien");

    let segments = compose_segments(&story);
    assert_eq!(segments.iter().filter(|s| s.is_image()).count(), 2);
    assert!(segments.iter().any(|s| s.is_text()));

    let narration = narration_text(&story);
    assert!(narration.starts_with("Zara's Trip to the Moon. "));
    assert!(!narration.contains("[IMAGE_"));

    assert_eq!(writer.call_count(), 1);
    assert_eq!(illustrator.call_count(), 2);
    let request = writer.last_request().expect("request recorded");
    assert!(request.prompt.contains("\"space\""));
    Ok(())
}

#[tokio::test]
async fn test_malformed_story_skips_illustration() {
    let writer = Arc::new(MockStoryWriter::new_success("not json"));
    let illustrator = Arc::new(MockIllustrator::new(Vec::new()));
    let pipeline = StoryPipeline::new(writer, illustrator.clone());

    let err = pipeline.generate(&category("space")).await.unwrap_err();

    assert!(matches!(
        err.story_kind(),
        Some(StoryErrorKind::MalformedResponse(_))
    ));
    assert_eq!(illustrator.call_count(), 0);
}

#[tokio::test]
async fn test_empty_reply_is_empty_response() {
    let pipeline = StoryPipeline::new(
        Arc::new(MockStoryWriter::new_empty()),
        Arc::new(MockIllustrator::new(Vec::new())),
    );
    let err = pipeline.generate(&category("cats")).await.unwrap_err();
    assert_eq!(err.story_kind(), Some(&StoryErrorKind::EmptyResponse));
}

#[tokio::test]
async fn test_image_failure_discards_story() {
    let illustrator = Arc::new(MockIllustrator::new(vec![ScriptedImage::empty(
        "small green alien",
        0,
    )]));
    let pipeline = StoryPipeline::new(
        Arc::new(MockStoryWriter::new_success(space_story_json())),
        illustrator,
    );

    let err = pipeline.generate(&category("space")).await.unwrap_err();
    assert!(matches!(
        err.story_kind(),
        Some(StoryErrorKind::ImageGenerationFailed { index: 1, .. })
    ));
}

#[tokio::test]
async fn test_transport_error_is_propagated() {
    let pipeline = StoryPipeline::new(
        Arc::new(MockStoryWriter::new_error(GeminiErrorKind::HttpError {
            status_code: 429,
            message: "quota".to_string(),
        })),
        Arc::new(MockIllustrator::new(Vec::new())),
    );

    let err = pipeline.generate(&category("cats")).await.unwrap_err();
    assert!(err.story_kind().is_none());
    assert_eq!(
        err.user_message(),
        "The storyteller is very busy right now. Please wait a moment and try again."
    );
}
