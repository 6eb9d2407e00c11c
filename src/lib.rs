//! Indicator engine for the market analysis dashboard.
//!
//! `indicators` holds the pure computation; `dashboard` maps API payloads
//! into engine input and derives the display signals.

pub mod config;
pub mod dashboard;
pub mod error;
pub mod indicators;

pub use config::EngineConfig;
pub use error::{IndicatorError, Result};
pub use indicators::{IndicatorEngine, IndicatorPoint, PricePoint, compute_indicators};
