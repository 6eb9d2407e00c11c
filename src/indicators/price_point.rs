//! Daily price point (input) and derived indicator point (output)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single daily closing price with an optional opening price.
///
/// The date is only used as the sort key; nothing else is derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    date: NaiveDate,
    price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    open: Option<f64>,
}

impl PricePoint {
    /// Creates a point without an opening price.
    pub fn new(date: NaiveDate, price: f64) -> Self {
        Self {
            date,
            price,
            open: None,
        }
    }

    pub fn with_open(mut self, open: f64) -> Self {
        self.open = Some(open);
        self
    }

    pub fn get_date(&self) -> NaiveDate {
        self.date
    }

    /// Returns the closing price.
    pub fn get_price(&self) -> f64 {
        self.price
    }

    pub fn get_open(&self) -> Option<f64> {
        self.open
    }
}

/// Indicators derived for one price point.
///
/// Windowed fields stay `None` until enough history exists; they are never
/// filled with zero. `bullish` and `reversal` are `None` for the first point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorPoint {
    pub date: NaiveDate,
    #[serde(rename = "Price")]
    pub price: f64,
    // Arithmetic means, the dashboard just calls them EMA.
    #[serde(rename = "EMA20", skip_serializing_if = "Option::is_none")]
    pub ema20: Option<f64>,
    #[serde(rename = "EMA50", skip_serializing_if = "Option::is_none")]
    pub ema50: Option<f64>,
    #[serde(rename = "EMA200", skip_serializing_if = "Option::is_none")]
    pub ema200: Option<f64>,
    #[serde(rename = "BollingerUpper", skip_serializing_if = "Option::is_none")]
    pub bollinger_upper: Option<f64>,
    #[serde(rename = "BollingerMiddle", skip_serializing_if = "Option::is_none")]
    pub bollinger_middle: Option<f64>,
    #[serde(rename = "BollingerLower", skip_serializing_if = "Option::is_none")]
    pub bollinger_lower: Option<f64>,
    #[serde(rename = "Bullish", skip_serializing_if = "Option::is_none")]
    pub bullish: Option<bool>,
    #[serde(rename = "Reversal", skip_serializing_if = "Option::is_none")]
    pub reversal: Option<bool>,
}

impl IndicatorPoint {
    /// Creates a point with every derived field absent.
    pub fn empty(point: &PricePoint) -> Self {
        Self {
            date: point.get_date(),
            price: point.get_price(),
            ema20: None,
            ema50: None,
            ema200: None,
            bollinger_upper: None,
            bollinger_middle: None,
            bollinger_lower: None,
            bullish: None,
            reversal: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_price_point_open_is_optional() {
        let point = PricePoint::new(day(2), 100.0);
        assert_eq!(point.get_open(), None);

        let point = point.with_open(98.5);
        assert_eq!(point.get_open(), Some(98.5));
        assert_eq!(point.get_price(), 100.0);
    }

    #[test]
    fn test_price_point_deserializes_without_open() {
        let point: PricePoint =
            serde_json::from_str(r#"{"date":"2024-01-03","price":101.5}"#).unwrap();
        assert_eq!(point.get_date(), day(3));
        assert_eq!(point.get_open(), None);
    }

    #[test]
    fn test_empty_indicator_point_skips_absent_fields() {
        let point = IndicatorPoint::empty(&PricePoint::new(day(4), 50.0));
        let json = serde_json::to_value(point).unwrap();
        assert_eq!(json["date"], "2024-01-04");
        assert_eq!(json["Price"], 50.0);
        assert!(json.get("EMA20").is_none());
        assert!(json.get("Bullish").is_none());
    }
}
