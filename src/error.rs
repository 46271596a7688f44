//! Error types used by the emitter.
//!
//! Only construction is fallible: registry operations normalize bad throttle
//! numbers silently and treat unknown events/contexts as no-ops, so the sole
//! error enum here is [`ConfigError`].
//!
//! The type provides helper methods (`as_label`, `as_message`) for
//! logging/metrics.

use thiserror::Error;

/// # Errors produced while constructing an emitter.
///
/// These represent invalid configuration, such as an empty namespace
/// delimiter. Subscribe/unsubscribe/emit never return errors.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The namespace delimiter was empty; an empty delimiter would make every
    /// name its own descendant and break parent truncation.
    #[error("namespace delimiter must be a non-empty string")]
    EmptyDelimiter,
}

impl ConfigError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use nsemit::ConfigError;
    ///
    /// let err = ConfigError::EmptyDelimiter;
    /// assert_eq!(err.as_label(), "config_empty_delimiter");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ConfigError::EmptyDelimiter => "config_empty_delimiter",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            ConfigError::EmptyDelimiter => "empty namespace delimiter".to_string(),
        }
    }
}
