//! Indicator engine: turns daily price points into chart indicator points.
//!
//! The engine is a pure transform. Points are stably sorted by date, then every
//! point gets its moving averages, Bollinger Bands and direction flags from
//! the closes at or before it. Nothing is cached between calls.

use tracing::debug;

use crate::config::EngineConfig;
use crate::indicators::candle_patterns::Direction;
use crate::indicators::moving_averages::sma_series;
use crate::indicators::price_point::{IndicatorPoint, PricePoint};
use crate::indicators::volatility::bollinger_series;

/// Computes indicators with the default dashboard settings.
pub fn compute_indicators(points: &[PricePoint]) -> Vec<IndicatorPoint> {
    IndicatorEngine::default().compute(points)
}

#[derive(Debug, Clone, Default)]
pub struct IndicatorEngine {
    config: EngineConfig,
}

impl IndicatorEngine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Returns one `IndicatorPoint` per input point, in ascending date order.
    ///
    /// Points sharing a date keep their input order.
    pub fn compute(&self, points: &[PricePoint]) -> Vec<IndicatorPoint> {
        let mut sorted = points.to_vec();
        sorted.sort_by_key(|p| p.get_date());

        let closes: Vec<f64> = sorted.iter().map(|p| p.get_price()).collect();
        let short = sma_series(&closes, self.config.short_window);
        let medium = sma_series(&closes, self.config.medium_window);
        let long = sma_series(&closes, self.config.long_window);
        let bands = bollinger_series(&closes, self.config.bollinger_window, self.config.bollinger_k);

        let mut output = Vec::with_capacity(sorted.len());
        for (i, point) in sorted.iter().enumerate() {
            let mut indicator = IndicatorPoint::empty(point);
            indicator.ema20 = short[i];
            indicator.ema50 = medium[i];
            indicator.ema200 = long[i];

            if let Some(b) = bands[i] {
                indicator.bollinger_upper = Some(b.upper);
                indicator.bollinger_middle = Some(b.middle);
                indicator.bollinger_lower = Some(b.lower);
            }

            if i > 0 {
                if let Some(dir) = Direction::between(&sorted[i - 1], point, &self.config.open_fallback) {
                    indicator.bullish = Some(dir.bullish);
                    indicator.reversal = Some(dir.reversal);
                }
            }

            output.push(indicator);
        }

        debug!(
            points = output.len(),
            with_long_average = output.iter().filter(|p| p.ema200.is_some()).count(),
            "indicators computed"
        );

        output
    }
}
