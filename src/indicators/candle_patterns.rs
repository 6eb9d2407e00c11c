//! Two-point candle direction: bullish and reversal flags
//!
//! Daily data from the analysis API usually carries only the close, so the
//! open is either taken from the point or estimated through an `OpenFallback`.
//! Direction is the sign of `close - open`; a zero change has no direction.

use serde::{Deserialize, Serialize};

use crate::indicators::price_point::PricePoint;

pub const DEFAULT_OPEN_RATIO: f64 = 0.99;

/// How to treat a point that has no opening price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum OpenFallback {
    /// Substitute `price * ratio` for the missing open.
    Estimate { ratio: f64 },
    /// Produce no direction flags when either point lacks an open.
    Skip,
}

impl Default for OpenFallback {
    fn default() -> Self {
        OpenFallback::Estimate {
            ratio: DEFAULT_OPEN_RATIO,
        }
    }
}

impl OpenFallback {
    /// Returns the point's open, or the estimate for a missing one.
    pub fn resolve_open(&self, point: &PricePoint) -> Option<f64> {
        match (point.get_open(), self) {
            (Some(open), _) => Some(open),
            (None, OpenFallback::Estimate { ratio }) => Some(point.get_price() * ratio),
            (None, OpenFallback::Skip) => None,
        }
    }

    /// Returns `close - open` for the point.
    pub fn change(&self, point: &PricePoint) -> Option<f64> {
        self.resolve_open(point).map(|open| point.get_price() - open)
    }
}

/// Direction flags for a point relative to the one before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    pub bullish: bool,
    pub reversal: bool,
}

impl Direction {
    /// Builds the flags from the previous and current `close - open` changes.
    pub fn from_changes(prev_change: f64, curr_change: f64) -> Self {
        Self {
            bullish: curr_change > 0.0,
            reversal: is_reversal(prev_change, curr_change),
        }
    }

    /// Computes the flags for `curr` given the immediately preceding point.
    ///
    /// Returns `None` only under `OpenFallback::Skip` when an open is missing.
    pub fn between(prev: &PricePoint, curr: &PricePoint, fallback: &OpenFallback) -> Option<Self> {
        let prev_change = fallback.change(prev)?;
        let curr_change = fallback.change(curr)?;
        Some(Self::from_changes(prev_change, curr_change))
    }
}

/// True when the sign of change flips between two consecutive points.
pub fn is_reversal(prev_change: f64, curr_change: f64) -> bool {
    (prev_change < 0.0 && curr_change > 0.0) || (prev_change > 0.0 && curr_change < 0.0)
}
