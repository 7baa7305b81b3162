//! Configuration error types.

/// What went wrong while loading or checking configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ConfigErrorKind {
    /// A configuration source could not be read or merged
    #[display("Failed to read configuration from {}: {}", origin, reason)]
    Source {
        /// File or layer description
        origin: String,
        /// Underlying failure
        reason: String,
    },
    /// The merged configuration does not match the expected shape
    #[display("Failed to parse configuration: {}", _0)]
    Parse(String),
    /// A value parsed but is outside its allowed range
    #[display("{} {}", field, reason)]
    Invalid {
        /// Dotted key, e.g. `narration.sample_rate`
        field: &'static str,
        /// Constraint the value broke
        reason: String,
    },
    /// The configuration could not be rendered back to TOML
    #[display("Failed to serialize configuration: {}", _0)]
    Render(String),
}

/// Configuration error with source location.
///
/// # Examples
///
/// ```
/// use fabulist_error::{ConfigError, ConfigErrorKind};
///
/// let err = ConfigError::new(ConfigErrorKind::Invalid {
///     field: "narration.channels",
///     reason: "must be greater than 0".into(),
/// });
/// assert!(err.to_string().contains("narration.channels must be greater than 0"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", kind, line, file)]
pub struct ConfigError {
    /// The specific failure
    pub kind: ConfigErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new error at the caller's location.
    #[track_caller]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for an out-of-range value.
    #[track_caller]
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::new(ConfigErrorKind::Invalid {
            field,
            reason: reason.into(),
        })
    }
}
