// Plain-text summary of an analysis run
use crate::domain::report::{SeaLevelReport, TrendSummary};
use std::fmt::Write;

pub fn format_summary(report: &SeaLevelReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Observations: {}", report.observations_loaded);
    write_trend(&mut out, &report.full_history);
    write_trend(&mut out, &report.recent);
    if let Some(ratio) = report.slope_ratio() {
        let _ = writeln!(out, "Recent trend is {:.2}x the long-term trend", ratio);
    }
    let _ = writeln!(out, "Chart: {}", report.chart_path.display());
    out
}

fn write_trend(out: &mut String, trend: &TrendSummary) {
    let _ = writeln!(
        out,
        "{}: slope {:.4}/yr, intercept {:.3}, r {:.3}, p {:.2e}, stderr {:.4}; {:.2} in {}",
        trend.label,
        trend.model.slope,
        trend.model.intercept,
        trend.statistics.r_value,
        trend.statistics.p_value,
        trend.statistics.std_err,
        trend.horizon_value,
        trend.horizon_year
    );
}
