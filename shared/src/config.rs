use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::upload::format_limit;

/// Front-end runtime settings, loaded from `config/app.yaml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Local storage key holding the serialized session user.
    pub storage_key: String,
    pub auth_delay_ms: u32,
    pub analysis_delay_ms: u32,
    pub max_upload_bytes: u64,
    pub toast_duration_ms: u32,
    /// Leftover probability mass below this is folded into the dominant label.
    pub leftover_epsilon: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_key: "user".to_string(),
            auth_delay_ms: 1000,
            analysis_delay_ms: 1500,
            max_upload_bytes: 5 * 1024 * 1024,
            toast_duration_ms: 4000,
            leftover_epsilon: 0.001,
        }
    }
}

impl AppConfig {
    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = serde_yaml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses `source`, falling back to defaults when it is malformed.
    pub fn load_or_default(source: &str) -> Self {
        match Self::from_yaml(source) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Failed to load app config, using defaults: {}", e);
                Self::default()
            }
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.is_empty() {
            return Err(ConfigError::Value {
                field: "storage_key",
                reason: "must not be empty".into(),
            });
        }
        if !(0.0..0.05).contains(&self.leftover_epsilon) {
            return Err(ConfigError::Value {
                field: "leftover_epsilon",
                reason: format!("{} is outside [0, 0.05)", self.leftover_epsilon),
            });
        }
        if self.max_upload_bytes == 0 {
            return Err(ConfigError::Value {
                field: "max_upload_bytes",
                reason: "must be positive".into(),
            });
        }
        Ok(())
    }

    /// Upload limit as shown to the user, e.g. `5MB`.
    pub fn max_upload_label(&self) -> String {
        format_limit(self.max_upload_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_document_keeps_defaults() {
        let config = AppConfig::from_yaml("analysis_delay_ms: 10\n").unwrap();
        assert_eq!(config.analysis_delay_ms, 10);
        assert_eq!(config.storage_key, "user");
        assert_eq!(config.max_upload_label(), "5MB");
    }

    #[test]
    fn bundled_config_parses() {
        let config = AppConfig::from_yaml(include_str!("../../config/app.yaml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn rejects_empty_storage_key() {
        let err = AppConfig::from_yaml("storage_key: \"\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Value { field: "storage_key", .. }));
    }

    #[test]
    fn small_upload_limit_is_labelled_in_kilobytes() {
        let config = AppConfig::from_yaml("max_upload_bytes: 524288\n").unwrap();
        assert_eq!(config.max_upload_label(), "512KB");
    }

    #[test]
    fn malformed_yaml_falls_back() {
        let config = AppConfig::load_or_default("auth_delay_ms: [not a number");
        assert_eq!(config, AppConfig::default());
    }
}
