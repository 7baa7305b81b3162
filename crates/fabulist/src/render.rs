//! Story rendering for the terminal and for standalone HTML pages.

use fabulist_core::{IllustratedStory, RenderSegment};
use fabulist_error::{FabulistError, FabulistErrorKind, GeminiErrorKind};
use fabulist_story::compose_segments;
use std::fmt::Write;

/// Escape text for HTML element content and quoted attributes.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Alt text for an illustration, numbered from 1.
pub fn illustration_alt(index: usize, title: &str) -> String {
    format!("Illustration {} for {}", index + 1, title)
}

/// One line describing a failure for the terminal.
///
/// Fabulist errors show their user-facing sentence, followed by the cause
/// when the user can act on it (bad configuration or a missing API key).
/// Anything else shows its `Display` text.
///
/// ```
/// use fabulist::{StoryError, StoryErrorKind, FabulistError, error_message};
///
/// let err: Box<dyn std::error::Error> =
///     Box::new(FabulistError::from(StoryError::new(StoryErrorKind::EmptyResponse)));
/// assert_eq!(
///     error_message(err.as_ref()),
///     "Received an empty response from the AI for the story."
/// );
/// ```
pub fn error_message(error: &(dyn std::error::Error + 'static)) -> String {
    let Some(e) = error.downcast_ref::<FabulistError>() else {
        return error.to_string();
    };
    match e.kind() {
        FabulistErrorKind::Config(config) => format!("{} {}", e.user_message(), config.kind),
        FabulistErrorKind::Gemini(gemini)
            if matches!(gemini.kind, GeminiErrorKind::MissingApiKey(_)) =>
        {
            format!("{} {}", e.user_message(), gemini.kind)
        }
        _ => e.user_message().to_string(),
    }
}

/// Plain-text rendering: paragraphs separated by blank lines, illustrations
/// as numbered markers.
///
/// # Examples
///
/// ```
/// use fabulist::{IllustratedStory, render_text};
///
/// let story = IllustratedStory::new("Moon", "Hi.\n[IMAGE_1]", "Be kind.", vec!["data:,".into()]);
/// let text = render_text(&story);
/// assert!(text.starts_with("Moon\n"));
/// assert!(text.contains("[Illustration 1]"));
/// assert!(text.ends_with("The moral of the story: Be kind.\n"));
/// ```
pub fn render_text(story: &IllustratedStory) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", story.title());
    let _ = writeln!(out, "{}", "=".repeat(story.title().chars().count()));

    for segment in compose_segments(story) {
        match segment {
            RenderSegment::Text { lines } => {
                for line in lines {
                    let _ = writeln!(out, "\n{}", line);
                }
            }
            RenderSegment::Image { index, .. } => {
                let _ = writeln!(out, "\n[Illustration {}]", index + 1);
            }
        }
    }

    let _ = writeln!(out, "\nThe moral of the story: {}", story.moral());
    out
}

/// Self-contained HTML page with embedded illustrations.
pub fn render_html(story: &IllustratedStory) -> String {
    let title = escape_html(story.title());
    let mut body = String::new();

    for segment in compose_segments(story) {
        match segment {
            RenderSegment::Text { lines } => {
                for line in lines {
                    let _ = writeln!(body, "    <p>{}</p>", escape_html(&line));
                }
            }
            RenderSegment::Image { index, url } => {
                let _ = writeln!(
                    body,
                    "    <figure><img src=\"{}\" alt=\"{}\"></figure>",
                    escape_html(&url),
                    escape_html(&illustration_alt(index, story.title()))
                );
            }
        }
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{title}</title>
  <style>
    body {{ font-family: sans-serif; max-width: 40rem; margin: 2rem auto; padding: 0 1rem; line-height: 1.6; }}
    figure {{ margin: 1.5rem 0; text-align: center; }}
    img {{ max-width: 100%; border-radius: 1rem; }}
    .moral {{ background: #fff7d6; border-radius: 1rem; padding: 1rem; }}
  </style>
</head>
<body>
  <article>
    <h1>{title}</h1>
{body}    <section class="moral">
      <h2>The Moral of the Story</h2>
      <p>{moral}</p>
    </section>
  </article>
</body>
</html>
"#,
        title = title,
        body = body,
        moral = escape_html(story.moral()),
    )
}
