//! Configuration loading for Fabulist.
//!
//! Configuration is TOML, merged from several sources (later sources win):
//! 1. Bundled defaults (`fabulist.toml` shipped with the library)
//! 2. User config in the home directory (`~/.config/fabulist/fabulist.toml`)
//! 3. User config in the current directory (`./fabulist.toml`)
//! 4. An explicit file passed by the caller
//!
//! ```no_run
//! use fabulist_config::FabulistConfig;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = FabulistConfig::load()?;
//! println!("Story model: {}", config.story().model());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod loader;

pub use loader::{FabulistConfig, GeminiSettings};
