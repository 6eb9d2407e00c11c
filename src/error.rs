//! Error types for configuration and analysis payloads.
//!
//! The indicator computation itself cannot fail; errors only come from
//! checking inputs at the boundary.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, IndicatorError>;

#[derive(Error, Debug)]
pub enum IndicatorError {
    #[error("invalid engine config: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid analysis payload: {0}")]
    Payload(#[from] PayloadError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Rejected `EngineConfig` values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} window must be at least 1")]
    ZeroWindow { name: &'static str },

    #[error("bollinger_k must be a finite non-negative number, got {0}")]
    BollingerK(f64),

    #[error("open fallback ratio must be finite and positive, got {0}")]
    OpenRatio(f64),
}

/// Problems with an analysis payload after it has been parsed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PayloadError {
    #[error("latest.{field} is not a finite number")]
    LatestNotFinite { field: &'static str },

    #[error("chart_data[{index}].{field} is not a finite number")]
    ChartPointNotFinite { index: usize, field: &'static str },

    #[error("AI analysis reported an error: {0}")]
    AiReported(String),

    #[error("AI analysis payload has no analysis")]
    MissingAnalysis,
}
