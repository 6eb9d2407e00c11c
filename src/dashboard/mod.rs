//! Dashboard payloads, display signals and view state

pub mod payload;
pub mod signals;
pub mod view;

pub use payload::{AiAnalysis, AiAnalysisPayload, AnalysisPayload, ChartPoint, LatestSnapshot};
pub use signals::{MacdSignal, OverallSignal, Recommendation, RsiSignal};
pub use view::{AiView, CombinedView, DashboardView, LatestView};
