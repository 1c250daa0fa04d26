// Report domain model - outcome of one analysis run
use super::trend::{FitStatistics, TrendModel};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct TrendSummary {
    pub label: String,
    pub model: TrendModel,
    pub statistics: FitStatistics,
    pub horizon_year: i32,
    pub horizon_value: f64,
}

#[derive(Debug, Clone)]
pub struct SeaLevelReport {
    pub observations_loaded: usize,
    pub full_history: TrendSummary,
    pub recent: TrendSummary,
    pub chart_path: PathBuf,
}

impl SeaLevelReport {
    /// How many times steeper the recent trend is than the full-history one.
    pub fn slope_ratio(&self) -> Option<f64> {
        let base = self.full_history.model.slope;
        if base == 0.0 {
            return None;
        }
        Some(self.recent.model.slope / base)
    }
}
