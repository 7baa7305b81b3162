//! Concurrent illustration of a story's image summaries.

use fabulist_core::{IllustrationSettings, ImageRequest};
use fabulist_error::{FabulistError, FabulistResult, StoryError, StoryErrorKind};
use fabulist_interface::ImageGeneration;
use futures::future::try_join_all;
use tracing::{debug, info, instrument, warn};

/// Wrap a scene summary in the fixed children's-book style.
///
/// # Examples
///
/// ```
/// use fabulist_story::illustration_prompt;
///
/// let prompt = illustration_prompt("a fox reading under a tree");
/// assert!(prompt.contains("Scene: a fox reading under a tree."));
/// ```
pub fn illustration_prompt(summary: &str) -> String {
    format!(
        "Create a bright, friendly, cartoon-style illustration for a children's story. \
Scene: {}. Use rounded shapes, exaggerated expressions, warm palette, and no text in the image. \
Keep composition simple so the character(s) are clearly visible on a phone screen.",
        summary
    )
}

/// Request for exactly one illustration of `summary`.
pub fn image_request(summary: &str, settings: &IllustrationSettings) -> ImageRequest {
    ImageRequest {
        model: settings.model().clone(),
        prompt: illustration_prompt(summary),
        number_of_images: 1,
        mime_type: settings.mime_type().clone(),
        aspect_ratio: settings.aspect_ratio().clone(),
    }
}

fn failed(index: usize, reason: impl Into<String>) -> FabulistError {
    StoryError::new(StoryErrorKind::ImageGenerationFailed {
        index,
        reason: reason.into(),
    })
    .into()
}

/// Illustrate every summary concurrently and return `data:` URLs in input order.
///
/// All calls run at once with no retry. The first failure, or a call that
/// yields no image, fails the whole batch and drops the calls still in flight.
///
/// # Errors
///
/// Returns `ImageGenerationFailed` naming the zero-based summary that failed.
#[instrument(skip_all, fields(provider = images.provider_name(), count = summaries.len()))]
pub async fn illustrate_all(
    images: &dyn ImageGeneration,
    summaries: &[String],
    settings: &IllustrationSettings,
) -> FabulistResult<Vec<String>> {
    if summaries.is_empty() {
        debug!("No image summaries; skipping illustration");
        return Ok(Vec::new());
    }

    let calls = summaries.iter().enumerate().map(|(index, summary)| {
        let request = image_request(summary, settings);
        async move {
            let generated = images.generate_images(&request).await.map_err(|e| {
                warn!(index, error = %e, "Illustration request failed");
                failed(index, e.to_string())
            })?;
            match generated.first() {
                Some(image) => {
                    debug!(index, "Illustration received");
                    Ok(image.to_data_url())
                }
                None => {
                    warn!(index, "Illustration service returned no images");
                    Err(failed(index, "no images returned"))
                }
            }
        }
    });

    let urls = try_join_all(calls).await?;
    info!(count = urls.len(), "Story illustrated");
    Ok(urls)
}
