//! Test utilities for audio tests.

pub mod mock_audio;

#[allow(unused_imports)]
pub use mock_audio::{MockNarrator, MockOutput, OutputLog, pcm_base64};
