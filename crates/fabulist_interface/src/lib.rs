//! Trait definitions for the Fabulist provider interface.
//!
//! The story pipeline never talks to a concrete service. It receives
//! implementations of these traits, which lets tests substitute scripted
//! mocks for the real provider client.

mod traits;

pub use traits::{FabulistDriver, ImageGeneration, SpeechSynthesis, TextGeneration};
