//! Reads an analysis payload, computes chart indicators and prints them as JSON.
//!
//! Usage: indicator-engine <analysis.json> [config.json] [ai-analysis.json]
//! The config path may also come from `INDICATOR_CONFIG`; pass `-` to keep the
//! defaults while giving an AI analysis. Set `RUST_LOG` to change log
//! verbosity (default `info`).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use indicator_engine::EngineConfig;
use indicator_engine::dashboard::{
    AiAnalysis, AiAnalysisPayload, AnalysisPayload, CombinedView, DashboardView,
};
use indicator_engine::indicators::IndicatorEngine;

const USAGE: &str = "usage: indicator-engine <analysis.json> [config.json] [ai-analysis.json]";

#[derive(Serialize)]
struct Report<'a> {
    #[serde(flatten)]
    view: &'a DashboardView,
    #[serde(skip_serializing_if = "Option::is_none")]
    ai: Option<CombinedView>,
}

fn load_ai_analysis(path: &Path) -> Result<AiAnalysis> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read AI analysis from {}", path.display()))?;
    let payload = AiAnalysisPayload::from_json(&json)
        .with_context(|| format!("failed to load AI analysis from {}", path.display()))?;

    if payload.sample {
        warn!(path = %path.display(), "AI analysis contains sample data");
    }

    let analysis = payload
        .into_analysis()
        .with_context(|| format!("no usable AI analysis in {}", path.display()))?;
    Ok(analysis)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(payload_path) = args.next().map(PathBuf::from) else {
        bail!(USAGE);
    };
    let config_path = match args.next() {
        Some(arg) if arg == "-" => None,
        Some(arg) => Some(PathBuf::from(arg)),
        None => std::env::var("INDICATOR_CONFIG").ok().map(PathBuf::from),
    };
    let ai_path = args.next().map(PathBuf::from);
    if args.next().is_some() {
        bail!(USAGE);
    }

    let config = match config_path {
        Some(path) => EngineConfig::load(&path)?,
        None => EngineConfig::default(),
    };

    let json = std::fs::read_to_string(&payload_path)
        .with_context(|| format!("failed to read payload from {}", payload_path.display()))?;
    let payload = AnalysisPayload::from_json(&json)
        .with_context(|| format!("failed to load payload from {}", payload_path.display()))?;

    if payload.sample {
        warn!(
            error = payload.error.as_deref().unwrap_or(""),
            detail = payload.message.as_deref().unwrap_or(""),
            "payload contains sample data"
        );
    }

    let view = DashboardView::build(&payload, &IndicatorEngine::new(config));

    info!(
        date = %view.latest.snapshot.date,
        price = view.latest.snapshot.price,
        rsi = view.latest.rsi_signal,
        macd = view.latest.macd_signal,
        overall = %view.latest.overall,
        points = view.series.len(),
        "analysis ready"
    );

    let ai = match ai_path {
        Some(path) => {
            let combined = view.apply_ai(&load_ai_analysis(&path)?);
            info!(
                action = combined.ai.action.as_deref().unwrap_or(""),
                confidence = combined.ai.confidence_stars,
                signal = %combined.signal,
                "AI analysis combined"
            );
            Some(combined)
        }
        None => None,
    };

    let report = Report { view: &view, ai };
    let output =
        serde_json::to_string_pretty(&report).context("failed to serialise dashboard view")?;
    println!("{output}");

    Ok(())
}
