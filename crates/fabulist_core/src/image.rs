//! Generated image payloads.

use serde::{Deserialize, Serialize};

/// One image returned by an image generation service.
///
/// # Examples
///
/// ```
/// use fabulist_core::GeneratedImage;
///
/// let image = GeneratedImage::new("image/jpeg", "AAAA");
/// assert_eq!(image.to_data_url(), "data:image/jpeg;base64,AAAA");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct GeneratedImage {
    /// MIME type of the encoded image
    mime_type: String,
    /// Base64-encoded image bytes
    base64_data: String,
}

impl GeneratedImage {
    /// Wrap an encoded image.
    pub fn new(mime_type: impl Into<String>, base64_data: impl Into<String>) -> Self {
        Self {
            mime_type: mime_type.into(),
            base64_data: base64_data.into(),
        }
    }

    /// Self-contained `data:` URL that can be embedded as an image source.
    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime_type, self.base64_data)
    }
}
