//! Configuration error model.

use thiserror::Error;

/// Result type used by configuration constructors.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration-level error.
///
/// The search and filter operations themselves are total; errors only surface
/// when a caller hands us an out-of-range or unparseable setting.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// The fuzziness threshold fell outside `[0, 1]` (or was NaN).
    #[error("threshold out of range: {0} (expected a value between 0 and 1)")]
    ThresholdOutOfRange(f64),

    /// A setting could not be parsed from its textual form.
    #[error("invalid value for {key}: {message}")]
    Invalid { key: String, message: String },

    /// A search key name was not recognised.
    #[error("unknown search key: {0}")]
    UnknownSearchKey(String),

    /// The key list was empty; at least one field must be indexed.
    #[error("at least one search key is required")]
    NoSearchKeys,
}

impl ConfigError {
    pub fn invalid(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            key: key.into(),
            message: message.into(),
        }
    }

    pub fn unknown_key(name: impl Into<String>) -> Self {
        Self::UnknownSearchKey(name.into())
    }
}
