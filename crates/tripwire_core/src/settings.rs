//! Diagnostics settings

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Toggles for the load diagnostics.
///
/// Missing fields fall back to their defaults, so a settings file only
/// needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticsSettings {
    /// Feed every load through the frame load tracker.
    pub track_frame_loads: bool,
    /// Log a warning when an asset is loaded on consecutive frames.
    pub warn_consecutive_loads: bool,
    /// Log failed loads before returning the error.
    pub log_load_failures: bool,
}

impl Default for DiagnosticsSettings {
    fn default() -> Self {
        Self {
            track_frame_loads: true,
            warn_consecutive_loads: true,
            log_load_failures: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse diagnostics settings: {0}")]
    Parse(#[from] serde_json::Error),
}

impl DiagnosticsSettings {
    pub fn from_json_str(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json_str(&json)?;
        tracing::debug!(path = %path.display(), ?settings, "loaded diagnostics settings");
        Ok(settings)
    }

    pub fn to_json_string(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_enable_everything() {
        let settings = DiagnosticsSettings::default();
        assert!(settings.track_frame_loads);
        assert!(settings.warn_consecutive_loads);
        assert!(settings.log_load_failures);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let settings =
            DiagnosticsSettings::from_json_str(r#"{ "warn_consecutive_loads": false }"#).unwrap();
        assert!(settings.track_frame_loads);
        assert!(!settings.warn_consecutive_loads);
        assert!(settings.log_load_failures);
    }

    #[test]
    fn json_survives_a_write_and_read() {
        let settings = DiagnosticsSettings {
            track_frame_loads: false,
            ..Default::default()
        };
        let json = settings.to_json_string().unwrap();
        assert_eq!(DiagnosticsSettings::from_json_str(&json).unwrap(), settings);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = DiagnosticsSettings::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let err = DiagnosticsSettings::load("definitely/not/a/settings.json").unwrap_err();
        assert!(matches!(err, SettingsError::Read { .. }));
    }
}
