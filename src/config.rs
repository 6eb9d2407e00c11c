//! Engine configuration loaded from JSON.
//!
//! Every field has a serde default, so an empty object (or no file at all)
//! gives the standard dashboard settings: 20/50/200 averages, 20-point bands
//! at 2σ and an open estimated at 99% of the close.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ConfigError;
use crate::indicators::candle_patterns::OpenFallback;
use crate::indicators::volatility::{DEFAULT_BOLLINGER_K, DEFAULT_BOLLINGER_PERIOD};

fn default_short_window() -> usize {
    20
}

fn default_medium_window() -> usize {
    50
}

fn default_long_window() -> usize {
    200
}

fn default_bollinger_window() -> usize {
    DEFAULT_BOLLINGER_PERIOD
}

fn default_bollinger_k() -> f64 {
    DEFAULT_BOLLINGER_K
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_short_window")]
    pub short_window: usize,
    #[serde(default = "default_medium_window")]
    pub medium_window: usize,
    #[serde(default = "default_long_window")]
    pub long_window: usize,
    #[serde(default = "default_bollinger_window")]
    pub bollinger_window: usize,
    #[serde(default = "default_bollinger_k")]
    pub bollinger_k: f64,
    #[serde(default)]
    pub open_fallback: OpenFallback,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            short_window: default_short_window(),
            medium_window: default_medium_window(),
            long_window: default_long_window(),
            bollinger_window: default_bollinger_window(),
            bollinger_k: default_bollinger_k(),
            open_fallback: OpenFallback::default(),
        }
    }
}

impl EngineConfig {
    /// Reads and validates a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read engine config from {}", path.display()))?;

        let config = Self::from_json(&content)
            .with_context(|| format!("failed to load engine config from {}", path.display()))?;

        info!(
            path = %path.display(),
            short = config.short_window,
            medium = config.medium_window,
            long = config.long_window,
            bollinger = config.bollinger_window,
            "engine config loaded"
        );

        Ok(config)
    }

    /// Parses a config and checks it with `validate`.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let windows = [
            ("short", self.short_window),
            ("medium", self.medium_window),
            ("long", self.long_window),
            ("bollinger", self.bollinger_window),
        ];
        if let Some((name, _)) = windows.iter().find(|(_, w)| *w == 0) {
            return Err(ConfigError::ZeroWindow { name: *name });
        }

        if !self.bollinger_k.is_finite() || self.bollinger_k < 0.0 {
            return Err(ConfigError::BollingerK(self.bollinger_k));
        }

        if let OpenFallback::Estimate { ratio } = self.open_fallback {
            if !ratio.is_finite() || ratio <= 0.0 {
                return Err(ConfigError::OpenRatio(ratio));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IndicatorError;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"long_window":100,"open_fallback":{"mode":"skip"}}"#).unwrap();
        assert_eq!(config.long_window, 100);
        assert_eq!(config.short_window, 20);
        assert_eq!(config.open_fallback, OpenFallback::Skip);
    }

    #[test]
    fn test_zero_window_rejected() {
        let config = EngineConfig {
            medium_window: 0,
            ..EngineConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::ZeroWindow { name: "medium" })
        );
    }

    #[test]
    fn test_bad_band_width_rejected() {
        let config = EngineConfig {
            bollinger_k: f64::NAN,
            ..EngineConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::BollingerK(_))));
    }

    #[test]
    fn test_bad_open_ratio_rejected() {
        let config = EngineConfig {
            open_fallback: OpenFallback::Estimate { ratio: 0.0 },
            ..EngineConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::OpenRatio(0.0)));
    }

    #[test]
    fn test_from_json_reports_invalid_values() {
        let err = EngineConfig::from_json(r#"{"bollinger_window":0}"#).unwrap_err();
        assert!(matches!(
            err,
            IndicatorError::Config(ConfigError::ZeroWindow { name: "bollinger" })
        ));

        let err = EngineConfig::from_json(r#"{"short_window":"twenty"}"#).unwrap_err();
        assert!(matches!(err, IndicatorError::Json(_)));
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let path = std::env::temp_dir().join(format!("engine-config-bad-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"bollinger_k":-1.0}"#).unwrap();

        let err = EngineConfig::load(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<IndicatorError>(),
            Some(IndicatorError::Config(ConfigError::BollingerK(_)))
        ));

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_missing_file_fails_with_path() {
        let err = EngineConfig::load("/nonexistent/engine.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/engine.json"));
    }

    #[test]
    fn test_load_reads_file() {
        let path = std::env::temp_dir().join(format!("engine-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"bollinger_k":2.5}"#).unwrap();

        let config = EngineConfig::load(&path).unwrap();
        assert_eq!(config.bollinger_k, 2.5);

        std::fs::remove_file(&path).unwrap();
    }
}
