//! Validation of raw story text into a [`StoryDraft`].

use fabulist_core::StoryDraft;
use fabulist_error::{FabulistResult, StoryError, StoryErrorKind};
use serde_json::{Map, Value};
use tracing::{debug, warn};

const REQUIRED_TEXT_FIELDS: [&str; 3] = ["title", "story_text", "moral"];
const SUMMARIES_FIELD: &str = "image_summaries";

/// Parse the text service's raw output into a story draft.
///
/// A payload wrapped in a markdown code fence is unwrapped first. The draft
/// is returned exactly as received; nothing is defaulted.
///
/// # Errors
///
/// - `EmptyResponse` if there is no text
/// - `MalformedResponse` if the text is not a JSON object or a field has the wrong type
/// - `IncompleteStory` if a required field is missing or falsy (`null`, `false`, `0`, `""`)
///
/// # Examples
///
/// ```
/// use fabulist_story::parse_story;
///
/// let raw = r#"{"title":"T","story_text":"S [IMAGE_1]","moral":"M","image_summaries":["a"]}"#;
/// let draft = parse_story(Some(raw)).unwrap();
/// assert_eq!(draft.image_summaries, vec!["a".to_string()]);
///
/// let err = parse_story(Some("not json")).unwrap_err();
/// assert_eq!(
///     err.user_message(),
///     "The AI returned a story in an unexpected format. Please try again."
/// );
/// ```
pub fn parse_story(raw: Option<&str>) -> FabulistResult<StoryDraft> {
    let raw = match raw {
        Some(text) if !text.trim().is_empty() => text,
        _ => {
            warn!("Story response was empty");
            return Err(StoryError::new(StoryErrorKind::EmptyResponse).into());
        }
    };

    let payload = unwrap_code_fence(raw);
    let value: Value = serde_json::from_str(payload).map_err(|e| {
        warn!(error = %e, length = payload.len(), "Story response is not valid JSON");
        StoryError::new(StoryErrorKind::MalformedResponse(e.to_string()))
    })?;

    let Value::Object(object) = value else {
        warn!("Story response is not a JSON object");
        return Err(StoryError::new(StoryErrorKind::MalformedResponse(
            "expected a JSON object".to_string(),
        ))
        .into());
    };

    let [title, story_text, moral] = REQUIRED_TEXT_FIELDS.map(|name| required_text(&object, name));
    let draft = StoryDraft {
        title: title?,
        story_text: story_text?,
        moral: moral?,
        image_summaries: required_summaries(&object)?,
    };

    debug!(
        title = %draft.title,
        summaries = draft.image_summaries.len(),
        "Parsed story draft"
    );
    Ok(draft)
}

/// Strip a surrounding markdown code fence, with or without a language tag.
fn unwrap_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return raw;
    };
    // Drop the language tag line, if any
    let body = match rest.find('\n') {
        Some(newline) => &rest[newline + 1..],
        None => rest,
    };
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

fn required_text(object: &Map<String, Value>, name: &str) -> FabulistResult<String> {
    match object.get(name) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(value) if !is_falsy(value) => Err(wrong_type(name, "a string", value)),
        _ => Err(incomplete(name)),
    }
}

/// `null`, `false`, `0` and `""` count as absent.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn required_summaries(object: &Map<String, Value>) -> FabulistResult<Vec<String>> {
    let Some(Value::Array(items)) = object.get(SUMMARIES_FIELD) else {
        return Err(incomplete(SUMMARIES_FIELD));
    };
    items
        .iter()
        .map(|item| match item {
            Value::String(s) => Ok(s.clone()),
            other => Err(wrong_type(SUMMARIES_FIELD, "an array of strings", other)),
        })
        .collect()
}

fn incomplete(name: &str) -> fabulist_error::FabulistError {
    warn!(field = name, "Story response is incomplete");
    StoryError::new(StoryErrorKind::IncompleteStory(name.to_string())).into()
}

fn wrong_type(name: &str, expected: &str, found: &Value) -> fabulist_error::FabulistError {
    warn!(field = name, "Story field has the wrong type");
    StoryError::new(StoryErrorKind::MalformedResponse(format!(
        "field '{}' must be {}, found {}",
        name,
        expected,
        json_type(found)
    )))
    .into()
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fence_with_language_tag_is_removed() {
        let raw = "```json\n{\"a\": 1}\n```\n";
        assert_eq!(unwrap_code_fence(raw), "{\"a\": 1}");
    }

    #[test]
    fn bare_fence_is_removed() {
        assert_eq!(unwrap_code_fence("```\n[1]\n```"), "[1]");
    }

    #[test]
    fn unfenced_text_is_untouched() {
        assert_eq!(unwrap_code_fence(" {\"a\": 1} "), " {\"a\": 1} ");
    }
}
