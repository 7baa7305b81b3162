//! Error types for the Fabulist library.
//!
//! This crate provides the foundation error types used throughout the Fabulist workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! Every error can also produce a short, human-readable sentence through
//! `user_message()`, which is what a front-end shows in its error region.
//!
//! # Examples
//!
//! ```
//! use fabulist_error::{FabulistResult, StoryError, StoryErrorKind};
//!
//! fn parse() -> FabulistResult<String> {
//!     Err(StoryError::new(StoryErrorKind::EmptyResponse))?
//! }
//!
//! match parse() {
//!     Ok(text) => println!("Got: {}", text),
//!     Err(e) => eprintln!("{}", e.user_message()),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod audio;
mod config;
mod error;
mod gemini;
mod story;

pub use audio::{AudioError, AudioErrorKind};
pub use config::{ConfigError, ConfigErrorKind};
pub use error::{FabulistError, FabulistErrorKind, FabulistResult};
pub use gemini::{GeminiError, GeminiErrorKind};
pub use story::{StoryError, StoryErrorKind};
