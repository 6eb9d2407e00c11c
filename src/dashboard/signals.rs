//! Display signals derived from the latest RSI/MACD snapshot and the AI
//! analysis.
//!
//! These only map numbers and labels to badge classes, arrows and stars;
//! nothing here renders HTML.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const RSI_OVERBOUGHT: f64 = 70.0;
pub const RSI_OVERSOLD: f64 = 30.0;

/// Buy/sell reading of a single indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsiSignal {
    Buy,
    Sell,
    Neutral,
}

impl RsiSignal {
    pub fn from_rsi(rsi: f64) -> Self {
        if rsi > RSI_OVERBOUGHT {
            RsiSignal::Sell
        } else if rsi < RSI_OVERSOLD {
            RsiSignal::Buy
        } else {
            RsiSignal::Neutral
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            RsiSignal::Sell => "bg-danger",
            RsiSignal::Buy => "bg-success",
            RsiSignal::Neutral => "bg-secondary",
        }
    }

    /// CSS class for the numeric RSI value.
    pub fn tone_class(&self) -> &'static str {
        match self {
            RsiSignal::Sell => "rsi-overbought",
            RsiSignal::Buy => "rsi-oversold",
            RsiSignal::Neutral => "rsi-neutral",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RsiSignal::Buy => "Buy",
            RsiSignal::Sell => "Sell",
            RsiSignal::Neutral => "Neutral",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MacdSignal {
    Buy,
    Sell,
}

impl MacdSignal {
    /// Buy while MACD is above its signal line, sell otherwise (ties included).
    pub fn from_values(macd: f64, signal: f64) -> Self {
        if macd > signal {
            MacdSignal::Buy
        } else {
            MacdSignal::Sell
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            MacdSignal::Buy => "bg-success",
            MacdSignal::Sell => "bg-danger",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MacdSignal::Buy => "Buy",
            MacdSignal::Sell => "Sell",
        }
    }
}

/// Overall market signal from the RSI and MACD votes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverallSignal {
    StrongBuy,
    WeakBuy,
    Neutral,
    WeakSell,
    StrongSell,
}

impl OverallSignal {
    pub fn from_snapshot(rsi: f64, macd: f64, signal: f64) -> Self {
        let mut buy = 0u8;
        let mut sell = 0u8;

        match RsiSignal::from_rsi(rsi) {
            RsiSignal::Buy => buy += 1,
            RsiSignal::Sell => sell += 1,
            RsiSignal::Neutral => {}
        }
        match MacdSignal::from_values(macd, signal) {
            MacdSignal::Buy => buy += 1,
            MacdSignal::Sell => sell += 1,
        }

        Self::from_votes(buy, sell)
    }

    pub fn from_votes(buy: u8, sell: u8) -> Self {
        if buy > sell + 1 {
            OverallSignal::StrongBuy
        } else if buy > sell {
            OverallSignal::WeakBuy
        } else if sell > buy + 1 {
            OverallSignal::StrongSell
        } else if sell > buy {
            OverallSignal::WeakSell
        } else {
            OverallSignal::Neutral
        }
    }

    pub fn is_buy(&self) -> bool {
        matches!(self, OverallSignal::StrongBuy | OverallSignal::WeakBuy)
    }

    pub fn is_sell(&self) -> bool {
        matches!(self, OverallSignal::StrongSell | OverallSignal::WeakSell)
    }

    /// Bootstrap contextual class (without the `bg-` prefix).
    pub fn class(&self) -> &'static str {
        if self.is_buy() {
            "success"
        } else if self.is_sell() {
            "danger"
        } else {
            "warning"
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            OverallSignal::StrongBuy => {
                "A short-term buying opportunity is likely: RSI is oversold and MACD shows a buy signal."
            }
            OverallSignal::WeakBuy => {
                "A tentative buy signal is present. Consider adding cautiously while watching the market."
            }
            OverallSignal::StrongSell => {
                "Short-term selling pressure is building. Consider taking profits or trimming positions."
            }
            OverallSignal::WeakSell => {
                "A tentative sell signal is present. Hold back on adding new positions."
            }
            OverallSignal::Neutral => "No clear direction. Waiting on the sidelines is recommended.",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OverallSignal::StrongBuy => "Strong Buy",
            OverallSignal::WeakBuy => "Weak Buy",
            OverallSignal::Neutral => "Neutral",
            OverallSignal::WeakSell => "Weak Sell",
            OverallSignal::StrongSell => "Strong Sell",
        }
    }
}

impl fmt::Display for OverallSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Recommended action reported by the AI analysis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recommendation {
    Buy,
    StrongBuy,
    Sell,
    StrongSell,
    Wait,
    Other(String),
}

impl Recommendation {
    /// Parses an action label. English and the API's Japanese labels are accepted.
    pub fn parse(action: &str) -> Self {
        match action.trim() {
            "buy" | "Buy" | "買い" => Recommendation::Buy,
            "strong_buy" | "Strong Buy" | "強い買い" => Recommendation::StrongBuy,
            "sell" | "Sell" | "売り" => Recommendation::Sell,
            "strong_sell" | "Strong Sell" | "強い売り" => Recommendation::StrongSell,
            "wait" | "Wait" | "様子見" => Recommendation::Wait,
            other => Recommendation::Other(other.to_string()),
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            Recommendation::Buy | Recommendation::StrongBuy => "bg-success",
            Recommendation::Sell | Recommendation::StrongSell => "bg-danger",
            Recommendation::Wait => "bg-warning",
            Recommendation::Other(_) => "bg-secondary",
        }
    }

    /// Text colour and arrow next to the recommended action.
    ///
    /// Only the plain buy and sell actions get a direction.
    pub fn text_class(&self) -> &'static str {
        match self {
            Recommendation::Buy => "text-success",
            Recommendation::Sell => "text-danger",
            _ => "text-warning",
        }
    }

    pub fn arrow(&self) -> &'static str {
        match self {
            Recommendation::Buy => "↑",
            Recommendation::Sell => "↓",
            _ => "→",
        }
    }
}

/// Star rating for the AI confidence label; unknown or missing is one star.
pub fn confidence_stars(confidence: Option<&str>) -> &'static str {
    match confidence.map(str::trim) {
        Some("高" | "high" | "High") => "★★★",
        Some("中" | "medium" | "Medium") => "★★☆",
        _ => "★☆☆",
    }
}

/// Badge class for a market phase description such as "強気相場（ブル・マーケット）".
pub fn market_phase_badge(phase: Option<&str>) -> &'static str {
    match phase {
        Some(p) if p.contains("強気") => "bg-success",
        Some(p) if p.contains("弱気") => "bg-danger",
        _ => "bg-secondary",
    }
}

/// Direction arrows for a signed value: doubled past `strong`, single past `weak`.
pub fn trend_icon(value: f64, weak: f64, strong: f64) -> &'static str {
    if value > strong {
        "↑↑"
    } else if value > weak {
        "↑"
    } else if value < -strong {
        "↓↓"
    } else if value < -weak {
        "↓"
    } else {
        "→"
    }
}

/// Merges the AI recommendation with the indicator-based signal.
///
/// Agreement strengthens the signal; a single buy or sell side gives a weak one.
pub fn combine(ai: &Recommendation, basic: OverallSignal) -> OverallSignal {
    let ai_buy = *ai == Recommendation::Buy;
    let ai_sell = *ai == Recommendation::Sell;

    if ai_buy && basic.is_buy() {
        OverallSignal::StrongBuy
    } else if ai_sell && basic.is_sell() {
        OverallSignal::StrongSell
    } else if ai_buy || basic.is_buy() {
        OverallSignal::WeakBuy
    } else if ai_sell || basic.is_sell() {
        OverallSignal::WeakSell
    } else {
        OverallSignal::Neutral
    }
}
