//! Core data types for the Fabulist story generation library.
//!
//! This crate provides the data model shared by every Fabulist crate: the
//! untrusted [`StoryDraft`] returned by a text service, the trusted
//! [`IllustratedStory`] assembled from it, the [`RenderSegment`]s derived for
//! display, and the request types handed to provider implementations.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod category;
mod image;
mod request;
mod segment;
mod settings;
mod story;

pub use category::Category;
pub use image::GeneratedImage;
pub use request::{ImageRequest, SpeechRequest, StoryRequest};
pub use segment::RenderSegment;
pub use settings::{IllustrationSettings, NarrationSettings, StorySettings};
pub use story::{IllustratedStory, StoryDraft};
