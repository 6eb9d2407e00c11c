use chrono::{Duration, NaiveDate};
use serde_json::{Value, json};

use indicator_engine::dashboard::{AiAnalysisPayload, AnalysisPayload, DashboardView, OverallSignal};
use indicator_engine::{EngineConfig, IndicatorEngine, compute_indicators};

/// Builds an `/analysis` response the way the API shapes it: 200 daily rows
/// with `Price`, `RSI`, `MACD` and `Signal`, newest last.
fn analysis_sample(rows: usize, sample: bool) -> String {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let chart: Vec<Value> = (0..rows)
        .map(|i| {
            let price = 33000.0 + (i as f64 * 0.2).sin() * 400.0 + i as f64 * 15.0;
            json!({
                "date": (start + Duration::days(i as i64)).format("%Y-%m-%d").to_string(),
                "Price": price,
                "RSI": 50.0,
                "MACD": 12.5,
                "Signal": 10.0,
            })
        })
        .collect();

    json!({
        "latest": {"date": "2024-07-18", "price": 36000.0, "rsi": 28.4, "macd": 35.2, "signal": 20.1},
        "chart_data": chart,
        "period": "1y",
        "sample": sample,
    })
    .to_string()
}

#[test]
fn test_analysis_sample_to_view() {
    let payload = AnalysisPayload::from_json(&analysis_sample(200, false)).unwrap();
    let view = DashboardView::build(&payload, &IndicatorEngine::default());

    assert_eq!(view.series.len(), 200);
    assert!(view.series[198].ema200.is_none());
    assert!(view.series[199].ema200.is_some());
    assert_eq!(view.latest.overall, OverallSignal::StrongBuy);
    assert_eq!(view.latest.rsi_badge, "bg-success");
}

#[test]
fn test_view_serializes_chart_keys() {
    let payload = AnalysisPayload::from_json(&analysis_sample(25, true)).unwrap();
    let view = DashboardView::build(&payload, &IndicatorEngine::default());
    let value = serde_json::to_value(&view).unwrap();

    assert_eq!(value["sample"], true);
    assert_eq!(value["latest"]["overall"], "strong_buy");
    assert!(value["series"][0].get("EMA20").is_none());
    assert!(value["series"][0].get("Bullish").is_none());
    assert!(value["series"][19]["EMA20"].is_number());
    assert!(value["series"][19]["BollingerUpper"].is_number());
    assert_eq!(value["series"][1]["Bullish"], true);
}

#[test]
fn test_payload_rows_in_any_order() {
    let json = analysis_sample(60, false);
    let mut value: Value = serde_json::from_str(&json).unwrap();
    value["chart_data"].as_array_mut().unwrap().reverse();

    let ordered = AnalysisPayload::from_json(&json).unwrap();
    let reversed = AnalysisPayload::from_json(&value.to_string()).unwrap();

    assert_eq!(
        compute_indicators(&ordered.price_points()),
        compute_indicators(&reversed.price_points())
    );
}

#[test]
fn test_error_payload_still_parses_as_sample() {
    let msg = r#"{"error":"upstream timeout","message":"showing sample data","sample":true,"latest":{"date":"2024-07-18","price":30000,"rsi":50,"macd":0,"signal":0},"chart_data":[]}"#;
    let payload = AnalysisPayload::from_json(msg).unwrap();

    assert!(payload.sample);
    assert_eq!(payload.error.as_deref(), Some("upstream timeout"));
    let view = DashboardView::build(&payload, &IndicatorEngine::default());
    assert!(view.series.is_empty());
    // RSI neutral, MACD tie counts as sell
    assert_eq!(view.latest.overall, OverallSignal::WeakSell);
}

#[test]
fn test_ai_sample_combines_with_basic_signal() {
    let msg = r#"{"sample":true,"analysis":{"date":"2024-07-18","price":32500,"indicators":{"rsi":52.5},"market_condition":{"market_phase":"強気相場（ブル・マーケット）","trend_strength":"中程度"},"recommendation":{"action":"様子見","confidence":"中","explanation":"wait for confirmation"}}}"#;
    let analysis = AiAnalysisPayload::from_json(msg).unwrap().into_analysis().unwrap();
    assert_eq!(
        analysis.market_condition.as_ref().unwrap().trend_strength.as_deref(),
        Some("中程度")
    );

    let payload = AnalysisPayload::from_json(&analysis_sample(5, false)).unwrap();
    let view = DashboardView::build(&payload, &IndicatorEngine::default());
    let combined = view.apply_ai(&analysis);

    assert_eq!(combined.signal, OverallSignal::WeakBuy);
    assert_eq!(combined.ai.action_badge, "bg-warning");
    assert_eq!(combined.ai.action_class, "text-warning");
    assert_eq!(combined.ai.confidence_stars, "★★☆");
    assert_eq!(combined.ai.market_phase_badge, "bg-success");
    assert_eq!(combined.ai.price, Some(32500.0));
    assert_eq!(combined.ai.explanation.as_deref(), Some("wait for confirmation"));

    let json = serde_json::to_value(&combined).unwrap();
    assert_eq!(json["ai"]["action_arrow"], "→");
}

#[test]
fn test_custom_config_from_json() {
    let config: EngineConfig =
        serde_json::from_str(r#"{"short_window":5,"open_fallback":{"mode":"skip"}}"#).unwrap();
    let payload = AnalysisPayload::from_json(&analysis_sample(10, false)).unwrap();
    let view = DashboardView::build(&payload, &IndicatorEngine::new(config));

    assert!(view.series[3].ema20.is_none());
    assert!(view.series[4].ema20.is_some());
    assert!(view.series.iter().all(|p| p.bullish.is_none()));
}
