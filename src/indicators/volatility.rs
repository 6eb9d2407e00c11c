//! Volatility indicators: Bollinger Bands

use serde::{Deserialize, Serialize};

use crate::indicators::moving_averages::sma;

pub const DEFAULT_BOLLINGER_PERIOD: usize = 20;
pub const DEFAULT_BOLLINGER_K: f64 = 2.0;

/// Upper, middle and lower band for one window.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BollingerBands {
    pub upper: f64,
    pub middle: f64,
    pub lower: f64,
}

/// Calculates Bollinger Bands over the most recent `period` closes.
///
/// - `middle` = SMA
/// - `upper`  = SMA + `k` * σ
/// - `lower`  = SMA - `k` * σ
///
/// σ is the population standard deviation (variance divided by `period`).
/// Returns `None` if there are not enough closes for the given period.
pub fn bollinger(closes: &[f64], period: usize, k: f64) -> Option<BollingerBands> {
    let middle = sma(closes, period)?;
    let window = &closes[closes.len() - period..];

    let variance = window
        .iter()
        .map(|c| (c - middle).powi(2))
        .sum::<f64>()
        / period as f64;
    let std_dev = variance.sqrt();

    Some(BollingerBands {
        upper: middle + k * std_dev,
        middle,
        lower: middle - k * std_dev,
    })
}

/// Calculates Bollinger Bands for every index, aligned with the input.
pub fn bollinger_series(closes: &[f64], period: usize, k: f64) -> Vec<Option<BollingerBands>> {
    (0..closes.len())
        .map(|i| bollinger(&closes[..=i], period, k))
        .collect()
}
