//! Configuration model for the sizedecor CLI.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SizeDecorError};
use crate::types::FormatOptions;

/// Root configuration, read from a JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeDecorConfig {
    /// Directives applied when the command line leaves them unset.
    pub defaults: FormatOptions,
    /// `tracing` filter used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for SizeDecorConfig {
    fn default() -> Self {
        Self {
            defaults: FormatOptions::default(),
            log_filter: crate::constants::DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl SizeDecorConfig {
    /// Loads the configuration from a JSON file.
    ///
    /// Keys missing from the file keep their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// log filter is empty.
    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "loading configuration");
        let raw = std::fs::read_to_string(path).map_err(|source| SizeDecorError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw)?;
        if config.log_filter.trim().is_empty() {
            return Err(SizeDecorError::Config {
                message: format!("empty log_filter in {}", path.display()),
            });
        }
        Ok(config)
    }

    /// Loads the configuration from `path` if given, otherwise returns the
    /// defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the given file cannot be loaded.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("should create temp file");
        file.write_all(contents.as_bytes()).expect("should write config");
        file
    }

    #[test]
    fn default_config_is_plain() {
        let config = SizeDecorConfig::default();
        assert_eq!(config.defaults, FormatOptions::default());
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn load_full_config() {
        let file = write_config(
            r#"{
                "defaults": {"width": 10, "left_justify": true, "uppercase": true, "precision": 2},
                "log_filter": "debug"
            }"#,
        );
        let config = SizeDecorConfig::load(file.path()).expect("should load");
        assert_eq!(
            config.defaults,
            FormatOptions::default().width(10).left().upper().precision(2)
        );
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn load_partial_config_keeps_defaults() {
        let file = write_config(r#"{"defaults": {"precision": 1}}"#);
        let config = SizeDecorConfig::load(file.path()).expect("should load");
        assert_eq!(config.defaults, FormatOptions::default().precision(1));
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn load_rejects_empty_log_filter() {
        let file = write_config(r#"{"log_filter": "  "}"#);
        let err = SizeDecorConfig::load(file.path()).expect_err("should reject");
        assert!(matches!(err, SizeDecorError::Config { .. }));
    }

    #[test]
    fn load_reports_malformed_json() {
        let file = write_config("{ not json");
        let err = SizeDecorConfig::load(file.path()).expect_err("should reject");
        assert!(matches!(err, SizeDecorError::Serialization { .. }));
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempfile::tempdir().expect("should create temp dir");
        let path = dir.path().join("missing.json");
        let err = SizeDecorConfig::load(&path).expect_err("should fail");
        assert!(matches!(err, SizeDecorError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[test]
    fn load_or_default_without_path() {
        let config = SizeDecorConfig::load_or_default(None).expect("should default");
        assert_eq!(config, SizeDecorConfig::default());
    }
}
