// Sea level service - Use case for comparing long-term and recent trends
use crate::application::chart_renderer::ChartRenderer;
use crate::application::observation_repository::ObservationRepository;
use crate::application::trend_projector::{fit_with_statistics, project};
use crate::domain::chart::{ChartData, ChartPoint, SeriesColor, SeriesData, SeriesKind};
use crate::domain::observation::{Observation, min_year, since_year};
use crate::domain::report::{SeaLevelReport, TrendSummary};
use crate::domain::trend::ProjectedPoint;
use crate::infrastructure::config::{AnalysisSettings, ChartSettings};
use anyhow::{Context, Result};
use std::sync::Arc;

pub const OBSERVATIONS_SERIES: &str = "observations";
pub const FULL_HISTORY_SERIES: &str = "full_history";
pub const RECENT_SERIES: &str = "recent";

/// A fitted window together with its projection.
struct WindowTrend {
    summary: TrendSummary,
    projection: Vec<ProjectedPoint>,
}

pub struct SeaLevelService {
    repository: Arc<dyn ObservationRepository>,
    renderer: Arc<dyn ChartRenderer>,
    analysis: AnalysisSettings,
    chart: ChartSettings,
}

impl SeaLevelService {
    pub fn new(
        repository: Arc<dyn ObservationRepository>,
        renderer: Arc<dyn ChartRenderer>,
        analysis: AnalysisSettings,
        chart: ChartSettings,
    ) -> Self {
        Self {
            repository,
            renderer,
            analysis,
            chart,
        }
    }

    pub fn run(&self) -> Result<SeaLevelReport> {
        let source = self.repository.source_name();
        let observations = self
            .repository
            .load_observations()
            .with_context(|| format!("Failed to load observations from {}", source))?;
        tracing::info!("Loaded {} observations from {}", observations.len(), source);

        let first_year = min_year(&observations).context("No observations to analyse")?;
        let full_history = self
            .fit_window(&observations, first_year)
            .context("Failed to compute full-history trend")?;

        let recent_observations = since_year(&observations, self.analysis.cutoff_year);
        let recent = self
            .fit_window(&recent_observations, self.analysis.cutoff_year)
            .with_context(|| {
                format!(
                    "Failed to compute trend since {}",
                    self.analysis.cutoff_year
                )
            })?;

        let chart = self.build_chart(&observations, &full_history, &recent)?;
        let chart_path = self.renderer.render(&chart).context("Failed to render chart")?;

        Ok(SeaLevelReport {
            observations_loaded: observations.len(),
            full_history: full_history.summary,
            recent: recent.summary,
            chart_path,
        })
    }

    fn fit_window(&self, observations: &[Observation], window_start: i32) -> Result<WindowTrend> {
        let (model, statistics) = fit_with_statistics(observations)?;
        let horizon_year = self.analysis.horizon_year;
        let projection = project(&model, window_start, horizon_year)?;
        let horizon_value = model.predict(horizon_year);

        tracing::debug!(
            "Window from {}: {} observations, slope={:.6}, intercept={:.4}, r={:.4}, p={:.3e}, {} projected years",
            window_start,
            model.n_observations,
            model.slope,
            model.intercept,
            statistics.r_value,
            statistics.p_value,
            projection.len()
        );

        Ok(WindowTrend {
            summary: TrendSummary {
                label: format!("Best Fit Line ({}-Present)", window_start),
                model,
                statistics,
                horizon_year,
                horizon_value,
            },
            projection,
        })
    }

    fn build_chart(
        &self,
        observations: &[Observation],
        full_history: &WindowTrend,
        recent: &WindowTrend,
    ) -> Result<ChartData> {
        let color = |value: &str| {
            SeriesColor::parse(value).with_context(|| format!("Unknown chart color '{}'", value))
        };

        let series = vec![
            SeriesData::new(
                OBSERVATIONS_SERIES.to_string(),
                "Observed".to_string(),
                SeriesKind::Scatter,
                color(&self.chart.observation_color)?,
                observations.iter().map(ChartPoint::from).collect(),
            ),
            SeriesData::new(
                FULL_HISTORY_SERIES.to_string(),
                full_history.summary.label.clone(),
                SeriesKind::Line,
                color(&self.chart.full_history_color)?,
                full_history.projection.iter().map(ChartPoint::from).collect(),
            ),
            SeriesData::new(
                RECENT_SERIES.to_string(),
                recent.summary.label.clone(),
                SeriesKind::Line,
                color(&self.chart.recent_color)?,
                recent.projection.iter().map(ChartPoint::from).collect(),
            ),
        ];

        Ok(ChartData {
            title: self.chart.title.clone(),
            x_label: self.chart.x_label.clone(),
            y_label: self.chart.y_label.clone(),
            x_range: (self.chart.x_min, self.chart.x_max),
            y_range: (self.chart.y_min, self.chart.y_max),
            width: self.chart.width,
            height: self.chart.height,
            series,
        })
    }
}
