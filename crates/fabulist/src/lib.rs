//! Fabulist: illustrated, narrated children's stories from a single category.
//!
//! Give Fabulist a topic such as "space" or "kindness" and it asks a
//! generative text service for a short story with a moral, illustrates each
//! scene concurrently, and can read the finished story aloud.
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//! use fabulist::{FabulistConfig, GeminiClient, StoryApp, StoryPipeline, render_text};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = FabulistConfig::load()?;
//! let client = Arc::new(GeminiClient::from_settings(config.gemini())?);
//! let pipeline = StoryPipeline::new(client.clone(), client)
//!     .with_story_settings(config.story().clone())
//!     .with_illustration_settings(config.illustration().clone());
//!
//! let app = StoryApp::new(pipeline);
//! let story = app.submit("space").await?;
//! println!("{}", render_text(&story));
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! - `fabulist_error` - Error types
//! - `fabulist_core` - Story, segment, request and settings types
//! - `fabulist_config` - Layered TOML configuration
//! - `fabulist_interface` - Provider capability traits
//! - `fabulist_models` - Gemini REST client
//! - `fabulist_story` - Prompting, parsing, illustration and composition
//! - `fabulist_audio` - PCM decoding and the read-aloud session
//!
//! This crate re-exports everything for convenience.

pub use fabulist_audio::*;
pub use fabulist_config::*;
pub use fabulist_core::*;
pub use fabulist_error::*;
pub use fabulist_interface::*;
pub use fabulist_models::{GeminiClient, ProviderMetrics};
pub use fabulist_story::*;

mod app;
mod render;
mod telemetry;

pub use app::{StoryApp, StoryPhase};
pub use render::{error_message, escape_html, illustration_alt, render_html, render_text};
pub use telemetry::init_tracing;
