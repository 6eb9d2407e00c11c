//! Analysis payloads as the dashboard API emits them.
//!
//! Required fields are plain types and fail deserialization when missing;
//! optional ones are `Option`. After parsing, `validate` rejects non-finite
//! numbers so that the engine only sees usable prices.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{PayloadError, Result};
use crate::indicators::price_point::PricePoint;

/// Most recent values from `/analysis`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatestSnapshot {
    pub date: NaiveDate,
    pub price: f64,
    pub rsi: f64,
    pub macd: f64,
    pub signal: f64,
}

/// One row of `chart_data`. Keys keep the API's capitalisation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: NaiveDate,
    #[serde(rename = "Price")]
    pub price: f64,
    #[serde(rename = "Open", default, skip_serializing_if = "Option::is_none")]
    pub open: Option<f64>,
    #[serde(rename = "RSI", default)]
    pub rsi: Option<f64>,
    #[serde(rename = "MACD", default)]
    pub macd: Option<f64>,
    #[serde(rename = "Signal", default)]
    pub signal: Option<f64>,
}

impl ChartPoint {
    pub fn to_price_point(&self) -> PricePoint {
        let point = PricePoint::new(self.date, self.price);
        match self.open {
            Some(open) => point.with_open(open),
            None => point,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisPayload {
    pub latest: LatestSnapshot,
    #[serde(default)]
    pub chart_data: Vec<ChartPoint>,
    #[serde(default)]
    pub sample: bool,
    #[serde(default)]
    pub period: Option<String>,
    /// Set by the API when it fell back to sample data.
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl AnalysisPayload {
    /// Parses and validates a payload.
    pub fn from_json(json: &str) -> Result<Self> {
        let payload: Self = serde_json::from_str(json)?;
        payload.validate()?;
        Ok(payload)
    }

    pub fn validate(&self) -> std::result::Result<(), PayloadError> {
        let latest = [
            ("price", self.latest.price),
            ("rsi", self.latest.rsi),
            ("macd", self.latest.macd),
            ("signal", self.latest.signal),
        ];
        for (field, value) in latest {
            if !value.is_finite() {
                return Err(PayloadError::LatestNotFinite { field });
            }
        }

        for (index, point) in self.chart_data.iter().enumerate() {
            if !point.price.is_finite() {
                return Err(PayloadError::ChartPointNotFinite { index, field: "Price" });
            }
            if point.open.is_some_and(|open| !open.is_finite()) {
                return Err(PayloadError::ChartPointNotFinite { index, field: "Open" });
            }
        }

        Ok(())
    }

    /// Chart rows as engine input, in payload order.
    pub fn price_points(&self) -> Vec<PricePoint> {
        self.chart_data.iter().map(ChartPoint::to_price_point).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiRecommendation {
    pub action: String,
    #[serde(default)]
    pub confidence: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketCondition {
    #[serde(default)]
    pub market_phase: Option<String>,
    #[serde(default)]
    pub trend_strength: Option<String>,
    #[serde(default)]
    pub volatility_state: Option<String>,
    #[serde(default)]
    pub market_sentiment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    #[serde(default)]
    pub direction: Option<String>,
    /// Expected change in percent.
    #[serde(default)]
    pub prediction: Option<f64>,
    #[serde(default)]
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Predictions {
    #[serde(default)]
    pub short_term: Option<Prediction>,
    #[serde(default)]
    pub medium_term: Option<Prediction>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiAnalysis {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub recommendation: Option<AiRecommendation>,
    #[serde(default)]
    pub market_condition: Option<MarketCondition>,
    #[serde(default)]
    pub predictions: Option<Predictions>,
}

/// Response of `/ai-analysis`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiAnalysisPayload {
    #[serde(default)]
    pub analysis: Option<AiAnalysis>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub sample: bool,
}

impl AiAnalysisPayload {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns the analysis, or the reported error when there is none to show.
    pub fn into_analysis(self) -> std::result::Result<AiAnalysis, PayloadError> {
        if let Some(error) = self.error {
            return Err(PayloadError::AiReported(error));
        }
        self.analysis.ok_or(PayloadError::MissingAnalysis)
    }
}
