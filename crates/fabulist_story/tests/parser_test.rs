//! Tests for story reply validation.

use fabulist_error::StoryErrorKind;
use fabulist_story::parse_story;
use serde_json::json;

fn kind_of(raw: Option<&str>) -> StoryErrorKind {
    let err = parse_story(raw).expect_err("parse should fail");
    err.story_kind().cloned().expect("story error")
}

fn valid() -> serde_json::Value {
    json!({
        "title": "The Brave Little Seed",
        "story_text": "A seed slept. [IMAGE_1] It grew. [IMAGE_2]",
        "moral": "Patience helps us grow.",
        "image_summaries": ["a sleeping seed", "a tall sunflower"]
    })
}

#[test]
fn test_valid_story_is_returned_unchanged() -> anyhow::Result<()> {
    let draft = parse_story(Some(&valid().to_string()))?;
    assert_eq!(draft.title, "The Brave Little Seed");
    assert_eq!(draft.story_text, "A seed slept. [IMAGE_1] It grew. [IMAGE_2]");
    assert_eq!(draft.moral, "Patience helps us grow.");
    assert_eq!(draft.image_summaries, vec!["a sleeping seed", "a tall sunflower"]);
    Ok(())
}

#[test]
fn test_missing_or_blank_text_is_empty_response() {
    assert_eq!(kind_of(None), StoryErrorKind::EmptyResponse);
    assert_eq!(kind_of(Some("")), StoryErrorKind::EmptyResponse);
    assert_eq!(kind_of(Some("  \n")), StoryErrorKind::EmptyResponse);
}

#[test]
fn test_not_json_is_malformed() {
    assert!(matches!(
        kind_of(Some("not json")),
        StoryErrorKind::MalformedResponse(_)
    ));
}

#[test]
fn test_non_object_json_is_malformed() {
    assert!(matches!(
        kind_of(Some("[1, 2, 3]")),
        StoryErrorKind::MalformedResponse(_)
    ));
    assert!(matches!(
        kind_of(Some("\"a story\"")),
        StoryErrorKind::MalformedResponse(_)
    ));
}

#[test]
fn test_missing_moral_is_incomplete() {
    let mut value = valid();
    value.as_object_mut().unwrap().remove("moral");
    assert_eq!(
        kind_of(Some(&value.to_string())),
        StoryErrorKind::IncompleteStory("moral".to_string())
    );
}

#[test]
fn test_null_or_empty_fields_are_incomplete() {
    let mut value = valid();
    value["title"] = json!(null);
    assert_eq!(
        kind_of(Some(&value.to_string())),
        StoryErrorKind::IncompleteStory("title".to_string())
    );

    let mut value = valid();
    value["story_text"] = json!("");
    assert_eq!(
        kind_of(Some(&value.to_string())),
        StoryErrorKind::IncompleteStory("story_text".to_string())
    );
}

#[test]
fn test_false_or_zero_fields_are_incomplete() {
    let mut value = valid();
    value["moral"] = json!(false);
    assert_eq!(
        kind_of(Some(&value.to_string())),
        StoryErrorKind::IncompleteStory("moral".to_string())
    );

    let mut value = valid();
    value["moral"] = json!(0);
    assert_eq!(
        kind_of(Some(&value.to_string())),
        StoryErrorKind::IncompleteStory("moral".to_string())
    );

    let mut value = valid();
    value["title"] = json!(0.0);
    assert_eq!(
        kind_of(Some(&value.to_string())),
        StoryErrorKind::IncompleteStory("title".to_string())
    );
}

#[test]
fn test_truthy_non_strings_stay_malformed() {
    let mut value = valid();
    value["moral"] = json!(true);
    assert!(matches!(
        kind_of(Some(&value.to_string())),
        StoryErrorKind::MalformedResponse(_)
    ));

    let mut value = valid();
    value["story_text"] = json!({"text": "hi"});
    assert!(matches!(
        kind_of(Some(&value.to_string())),
        StoryErrorKind::MalformedResponse(_)
    ));
}

#[test]
fn test_summaries_must_be_an_array() {
    let mut value = valid();
    value["image_summaries"] = json!("one picture");
    assert_eq!(
        kind_of(Some(&value.to_string())),
        StoryErrorKind::IncompleteStory("image_summaries".to_string())
    );

    let mut value = valid();
    value.as_object_mut().unwrap().remove("image_summaries");
    assert_eq!(
        kind_of(Some(&value.to_string())),
        StoryErrorKind::IncompleteStory("image_summaries".to_string())
    );
}

#[test]
fn test_wrong_field_types_are_malformed() {
    let mut value = valid();
    value["title"] = json!(5);
    assert!(matches!(
        kind_of(Some(&value.to_string())),
        StoryErrorKind::MalformedResponse(_)
    ));

    let mut value = valid();
    value["image_summaries"] = json!([1, 2]);
    assert!(matches!(
        kind_of(Some(&value.to_string())),
        StoryErrorKind::MalformedResponse(_)
    ));
}

#[test]
fn test_empty_summaries_and_extra_fields_are_accepted() -> anyhow::Result<()> {
    let mut value = valid();
    value["image_summaries"] = json!([]);
    value["reading_level"] = json!("easy");
    let draft = parse_story(Some(&value.to_string()))?;
    assert!(draft.image_summaries.is_empty());
    Ok(())
}

#[test]
fn test_fenced_json_is_unwrapped() -> anyhow::Result<()> {
    let fenced = format!("```json\n{}\n```", valid());
    let draft = parse_story(Some(&fenced))?;
    assert_eq!(draft.title, "The Brave Little Seed");
    Ok(())
}

#[test]
fn test_user_messages_match_each_failure() {
    let empty = parse_story(None).unwrap_err();
    assert_eq!(
        empty.user_message(),
        "Received an empty response from the AI for the story."
    );

    let incomplete = parse_story(Some("{}")).unwrap_err();
    assert_eq!(
        incomplete.user_message(),
        "Received incomplete story data from the AI."
    );
}
