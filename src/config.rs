//! # Emitter configuration.
//!
//! [`EmitterConfig`] defines the emitter's construction-time settings. Today
//! that is a single knob: the namespace delimiter used both to detect
//! descendant keys (prefix + delimiter) and to compute the parent of an event
//! name (substring up to the delimiter's last occurrence).
//!
//! # Example
//! ```
//! use nsemit::EmitterConfig;
//!
//! let cfg = EmitterConfig::with_delimiter("::");
//! assert!(cfg.validate().is_ok());
//! assert_eq!(cfg.delimiter, "::");
//! ```

use crate::error::ConfigError;

/// Construction-time configuration for an [`Emitter`](crate::Emitter).
#[derive(Clone, Debug)]
pub struct EmitterConfig {
    /// Substring separating namespace segments in event names.
    ///
    /// Must be non-empty. Matching is literal: a delimiter that also occurs
    /// inside a segment is treated as a separator there too.
    pub delimiter: String,
}

impl Default for EmitterConfig {
    /// Provides a default configuration:
    /// - `delimiter = "."`
    fn default() -> Self {
        Self {
            delimiter: ".".to_string(),
        }
    }
}

impl EmitterConfig {
    /// Creates a configuration with the given delimiter.
    pub fn with_delimiter(delimiter: impl Into<String>) -> Self {
        Self {
            delimiter: delimiter.into(),
        }
    }

    /// Checks the configuration for internal consistency.
    ///
    /// Fails with [`ConfigError::EmptyDelimiter`] when the delimiter is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.delimiter.is_empty() {
            return Err(ConfigError::EmptyDelimiter);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_delimiter_is_dot() {
        let cfg = EmitterConfig::default();
        assert_eq!(cfg.delimiter, ".");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_empty_delimiter_rejected() {
        let cfg = EmitterConfig::with_delimiter("");
        let err = cfg.validate().unwrap_err();
        assert_eq!(err.as_label(), "config_empty_delimiter");
    }

    #[test]
    fn test_multi_char_delimiter_accepted() {
        let cfg = EmitterConfig::with_delimiter("::");
        assert!(cfg.validate().is_ok());
    }
}
