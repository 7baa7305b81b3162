//! Derivations over a finished story: render segments and narration text.

use fabulist_core::{IllustratedStory, RenderSegment};
use regex::Regex;
use std::sync::LazyLock;
use tracing::trace;

static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[IMAGE_([0-9]+)\]").expect("Valid placeholder regex"));

/// Split a story body into text and image segments in reading order.
///
/// `[IMAGE_<n>]` resolves to `image_urls[n - 1]`. Placeholders without a
/// matching image (`[IMAGE_0]`, out of range, or too large to index) are
/// dropped, as are text fragments that are blank after trimming.
///
/// Only ASCII digits form a placeholder. Each text fragment between
/// placeholders becomes a single `Text` segment; its non-blank lines, trimmed,
/// are the segment's `lines`, and each line renders as its own paragraph.
///
/// # Examples
///
/// ```
/// use fabulist_core::{IllustratedStory, RenderSegment};
/// use fabulist_story::compose_segments;
///
/// let story = IllustratedStory::new(
///     "Moon",
///     "Hello.\n[IMAGE_1]\nBye. [IMAGE_5]",
///     "Be kind.",
///     vec!["data:image/jpeg;base64,AA".to_string()],
/// );
///
/// let segments = compose_segments(&story);
/// assert_eq!(segments.len(), 3);
/// assert_eq!(
///     segments[1],
///     RenderSegment::Image { index: 0, url: "data:image/jpeg;base64,AA".to_string() }
/// );
/// ```
pub fn compose_segments(story: &IllustratedStory) -> Vec<RenderSegment> {
    let body = story.body();
    let mut segments = Vec::new();
    let mut cursor = 0;

    for captures in PLACEHOLDER.captures_iter(body) {
        let Some(whole) = captures.get(0) else {
            continue;
        };
        push_text(&mut segments, &body[cursor..whole.start()]);
        cursor = whole.end();

        let index = captures
            .get(1)
            .and_then(|digits| digits.as_str().parse::<usize>().ok())
            .and_then(|n| n.checked_sub(1));
        match index.and_then(|i| story.image_url(i).map(|url| (i, url))) {
            Some((index, url)) => segments.push(RenderSegment::Image {
                index,
                url: url.to_string(),
            }),
            None => trace!(placeholder = whole.as_str(), "Dropping unresolved placeholder"),
        }
    }
    push_text(&mut segments, &body[cursor..]);

    segments
}

fn push_text(segments: &mut Vec<RenderSegment>, fragment: &str) {
    if fragment.trim().is_empty() {
        return;
    }
    let lines = fragment
        .split('\n')
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    segments.push(RenderSegment::Text { lines });
}

/// Text read aloud for a story: title, body without placeholders, then the moral.
///
/// # Examples
///
/// ```
/// use fabulist_core::IllustratedStory;
/// use fabulist_story::narration_text;
///
/// let story = IllustratedStory::new("Moon", "Hi.[IMAGE_1]Bye.", "Be kind.", vec![]);
/// assert_eq!(
///     narration_text(&story),
///     "Moon. Hi. Bye. The moral of the story is: Be kind."
/// );
/// ```
pub fn narration_text(story: &IllustratedStory) -> String {
    format!(
        "{}. {} The moral of the story is: {}",
        story.title(),
        PLACEHOLDER.replace_all(story.body(), " "),
        story.moral()
    )
}
