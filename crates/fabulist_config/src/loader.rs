//! Configuration structures and loaders.

use config::{Config, File, FileFormat};
use fabulist_core::{IllustrationSettings, NarrationSettings, StorySettings};
use fabulist_error::{ConfigError, ConfigErrorKind, FabulistError, FabulistResult};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};

// Bundled default configuration
const DEFAULT_CONFIG: &str = include_str!("../../../fabulist.toml");

fn source_error(origin: impl Into<String>, err: impl std::fmt::Display) -> FabulistError {
    ConfigError::new(ConfigErrorKind::Source {
        origin: origin.into(),
        reason: err.to_string(),
    })
    .into()
}

fn parse_error(err: config::ConfigError) -> FabulistError {
    ConfigError::new(ConfigErrorKind::Parse(err.to_string())).into()
}

/// Connection settings for the Gemini REST API.
///
/// ```toml
/// [gemini]
/// base_url = "https://generativelanguage.googleapis.com/v1beta"
/// api_key_env = "GEMINI_API_KEY"
/// timeout_secs = 120
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, derive_getters::Getters)]
pub struct GeminiSettings {
    /// Base URL of the REST API, without a trailing slash
    #[serde(default = "default_base_url")]
    base_url: String,

    /// Name of the environment variable holding the API key
    #[serde(default = "default_api_key_env")]
    api_key_env: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

impl Default for GeminiSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GeminiSettings {
    /// Request timeout as a `Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Point the client at a different endpoint (proxies, test servers).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

/// Top-level Fabulist configuration.
///
/// # Example
///
/// ```
/// use fabulist_config::FabulistConfig;
///
/// let config = FabulistConfig::default();
/// assert_eq!(config.narration().voice(), "Kore");
/// assert_eq!(config.gemini().api_key_env(), "GEMINI_API_KEY");
/// ```
#[derive(
    Debug, Clone, PartialEq, Default, Deserialize, Serialize, derive_getters::Getters,
)]
pub struct FabulistConfig {
    /// Gemini connection settings
    #[serde(default)]
    gemini: GeminiSettings,

    /// Story text generation settings
    #[serde(default)]
    story: StorySettings,

    /// Illustration settings
    #[serde(default)]
    illustration: IllustrationSettings,

    /// Narration settings
    #[serde(default)]
    narration: NarrationSettings,
}

impl FabulistConfig {
    /// Load configuration from a single file, with no other layers.
    ///
    /// Missing sections and fields fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a value
    /// fails [`FabulistConfig::validate`].
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> FabulistResult<Self> {
        debug!("Loading configuration from file");

        let config: Self = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| source_error(path.as_ref().display().to_string(), e))?
            .try_deserialize()
            .map_err(parse_error)?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration with precedence: current dir > home dir > bundled defaults.
    ///
    /// User config files are optional and silently skipped when absent.
    #[instrument]
    pub fn load() -> FabulistResult<Self> {
        Self::load_with_override(None::<&Path>)
    }

    /// Load the layered configuration, then apply an explicit file on top.
    ///
    /// Unlike the optional user layers, the explicit file must exist.
    #[instrument(skip(explicit))]
    pub fn load_with_override(explicit: Option<impl AsRef<Path>>) -> FabulistResult<Self> {
        debug!("Loading configuration with precedence: explicit > current dir > home dir > bundled defaults");

        let mut builder = Config::builder()
            // Start with bundled defaults
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml));

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/fabulist/fabulist.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("fabulist").required(false));

        if let Some(path) = explicit {
            debug!(path = %path.as_ref().display(), "Adding explicit configuration file");
            builder = builder.add_source(File::from(path.as_ref()).required(true));
        }

        let config: Self = builder
            .build()
            .map_err(|e| source_error("layered sources", e))?
            .try_deserialize()
            .map_err(parse_error)?;

        config.validate()?;
        Ok(config)
    }

    /// Parse the bundled defaults only.
    pub fn bundled() -> FabulistResult<Self> {
        toml::from_str(DEFAULT_CONFIG).map_err(|e| source_error("bundled defaults", e))
    }

    /// Check values that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns an error for a zero timeout, sample rate or channel count,
    /// or a sampling parameter outside its valid range.
    pub fn validate(&self) -> FabulistResult<()> {
        if self.gemini.timeout_secs == 0 {
            return Err(ConfigError::invalid("gemini.timeout_secs", "must be greater than 0").into());
        }
        if *self.narration.sample_rate() == 0 {
            return Err(ConfigError::invalid("narration.sample_rate", "must be greater than 0").into());
        }
        if *self.narration.channels() == 0 {
            return Err(ConfigError::invalid("narration.channels", "must be greater than 0").into());
        }
        let top_p = *self.story.top_p();
        if !(0.0..=1.0).contains(&top_p) {
            return Err(ConfigError::invalid(
                "story.top_p",
                format!("must be in [0.0, 1.0], got {}", top_p),
            )
            .into());
        }
        let temperature = *self.story.temperature();
        if !(0.0..=2.0).contains(&temperature) {
            return Err(ConfigError::invalid(
                "story.temperature",
                format!("must be in [0.0, 2.0], got {}", temperature),
            )
            .into());
        }
        Ok(())
    }

    /// Render the configuration as TOML.
    pub fn to_toml(&self) -> FabulistResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(ConfigErrorKind::Render(e.to_string())).into())
    }

    /// Replace the Gemini connection settings.
    pub fn with_gemini(mut self, gemini: GeminiSettings) -> Self {
        self.gemini = gemini;
        self
    }
}
