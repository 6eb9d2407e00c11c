//! Owned view state for one dashboard refresh.
//!
//! A `DashboardView` is built from a validated payload and handed to
//! whatever renders it. Replacing the view replaces the charts; there are no
//! global chart handles.

use chrono::NaiveDate;
use serde::Serialize;

use crate::dashboard::payload::{AiAnalysis, AnalysisPayload, LatestSnapshot};
use crate::dashboard::signals::{
    MacdSignal, OverallSignal, Recommendation, RsiSignal, combine, confidence_stars,
    market_phase_badge, trend_icon,
};
use crate::indicators::engine::IndicatorEngine;
use crate::indicators::price_point::IndicatorPoint;

/// Labels and badge classes for the latest snapshot card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LatestView {
    pub snapshot: LatestSnapshot,
    pub rsi_signal: &'static str,
    pub rsi_badge: &'static str,
    pub rsi_tone: &'static str,
    pub macd_signal: &'static str,
    pub macd_badge: &'static str,
    pub overall: OverallSignal,
    pub overall_class: &'static str,
    pub summary: &'static str,
}

impl LatestView {
    pub fn new(snapshot: LatestSnapshot) -> Self {
        let rsi = RsiSignal::from_rsi(snapshot.rsi);
        let macd = MacdSignal::from_values(snapshot.macd, snapshot.signal);
        let overall = OverallSignal::from_snapshot(snapshot.rsi, snapshot.macd, snapshot.signal);

        Self {
            snapshot,
            rsi_signal: rsi.as_str(),
            rsi_badge: rsi.badge_class(),
            rsi_tone: rsi.tone_class(),
            macd_signal: macd.as_str(),
            macd_badge: macd.badge_class(),
            overall,
            overall_class: overall.class(),
            summary: overall.summary(),
        }
    }
}

/// Labels for the AI analysis card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AiView {
    pub date: Option<NaiveDate>,
    pub price: Option<f64>,
    pub action: Option<String>,
    pub action_badge: &'static str,
    pub action_class: &'static str,
    pub action_arrow: &'static str,
    pub confidence_stars: &'static str,
    pub market_phase: Option<String>,
    pub market_phase_badge: &'static str,
    /// Arrows for the short-term prediction, when one was reported.
    pub short_term_icon: Option<&'static str>,
    pub explanation: Option<String>,
}

impl AiView {
    pub fn new(analysis: &AiAnalysis) -> Self {
        let rec = analysis.recommendation.as_ref();
        let action = recommendation(analysis);
        let market_phase = analysis
            .market_condition
            .as_ref()
            .and_then(|c| c.market_phase.clone());
        let short_term_icon = analysis
            .predictions
            .as_ref()
            .and_then(|p| p.short_term.as_ref())
            .and_then(|p| p.prediction)
            .map(|change| trend_icon(change, PREDICTION_WEAK_PCT, PREDICTION_STRONG_PCT));

        Self {
            date: analysis.date,
            price: analysis.price,
            action: rec.map(|r| r.action.clone()),
            action_badge: action.badge_class(),
            action_class: action.text_class(),
            action_arrow: action.arrow(),
            confidence_stars: confidence_stars(rec.and_then(|r| r.confidence.as_deref())),
            market_phase_badge: market_phase_badge(market_phase.as_deref()),
            market_phase,
            short_term_icon,
            explanation: rec.and_then(|r| r.explanation.clone()),
        }
    }
}

/// Signal shown once the AI analysis has arrived.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CombinedView {
    pub signal: OverallSignal,
    pub class: &'static str,
    pub ai: AiView,
}

/// Short-term predictions are percent changes; arrows start at these magnitudes.
const PREDICTION_WEAK_PCT: f64 = 0.5;
const PREDICTION_STRONG_PCT: f64 = 2.0;

// A missing recommendation counts as undecided.
fn recommendation(analysis: &AiAnalysis) -> Recommendation {
    match &analysis.recommendation {
        Some(rec) => Recommendation::parse(&rec.action),
        None => Recommendation::Other(String::new()),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub latest: LatestView,
    pub series: Vec<IndicatorPoint>,
    pub sample: bool,
}

impl DashboardView {
    pub fn build(payload: &AnalysisPayload, engine: &IndicatorEngine) -> Self {
        Self {
            latest: LatestView::new(payload.latest.clone()),
            series: engine.compute(&payload.price_points()),
            sample: payload.sample,
        }
    }

    /// Combines the AI recommendation with the indicator-based signal.
    pub fn apply_ai(&self, analysis: &AiAnalysis) -> CombinedView {
        let signal = combine(&recommendation(analysis), self.latest.overall);

        CombinedView {
            signal,
            class: signal.class(),
            ai: AiView::new(analysis),
        }
    }
}
