//! Story generation pipeline for Fabulist.
//!
//! Turns a [`Category`](fabulist_core::Category) into an
//! [`IllustratedStory`](fabulist_core::IllustratedStory):
//!
//! 1. [`build_story_request`] assembles the prompt and response schema
//! 2. [`parse_story`] validates the raw reply into a draft
//! 3. [`illustrate_all`] fetches one illustration per summary, concurrently
//! 4. [`compose_segments`] and [`narration_text`] derive display and audio text
//!
//! [`StoryPipeline`] runs steps 1 to 3 against any provider implementing
//! the `fabulist_interface` traits.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod composer;
mod illustrate;
mod parser;
mod pipeline;
mod prompt;

pub use composer::{compose_segments, narration_text};
pub use illustrate::{illustrate_all, illustration_prompt, image_request};
pub use parser::parse_story;
pub use pipeline::StoryPipeline;
pub use prompt::{
    RESPONSE_MIME_TYPE, SYSTEM_INSTRUCTION, build_story_request, story_prompt, story_schema,
};
