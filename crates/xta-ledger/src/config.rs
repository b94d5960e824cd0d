use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Knobs for the terminal report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// List non-fatal execution diagnostics even when the caller does not
    /// ask for them at evaluation.
    pub list_warnings: bool,
    /// Write the raw output under `OUTPUT:`.
    pub show_output: bool,
    /// Context lines around each hunk of an equality diff.
    pub diff_context: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            list_warnings: false,
            show_output: true,
            diff_context: 3,
        }
    }
}

impl ReportConfig {
    /// Parse a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = ReportConfig::default();
        assert!(!c.list_warnings);
        assert!(c.show_output);
        assert_eq!(c.diff_context, 3);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c = ReportConfig::from_toml_str("list_warnings = true").unwrap();
        assert!(c.list_warnings);
        assert!(c.show_output);
        assert_eq!(c.diff_context, 3);
    }

    #[test]
    fn invalid_toml_is_rejected() {
        let err = ReportConfig::from_toml_str("diff_context = \"many\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = ReportConfig::from_file(Path::new("/no/such/xta.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
