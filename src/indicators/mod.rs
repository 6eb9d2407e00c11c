//! Technical indicators for daily price data

pub mod candle_patterns;
pub mod engine;
pub mod moving_averages;
pub mod price_point;
pub mod volatility;

pub use engine::{IndicatorEngine, compute_indicators};
pub use price_point::{IndicatorPoint, PricePoint};
