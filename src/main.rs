// Main entry point - Dependency wiring and a single analysis run
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use crate::application::sea_level_service::SeaLevelService;
use crate::infrastructure::config::load_config;
use crate::infrastructure::csv_repository::CsvObservationRepository;
use crate::infrastructure::png_renderer::PngChartRenderer;
use crate::presentation::summary::format_summary;

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let app_config = load_config()?;

    // Create repository and renderer (infrastructure layer)
    let repository = Arc::new(CsvObservationRepository::new(
        app_config.input.path,
        app_config.input.year_column,
        app_config.input.value_column,
    ));
    let renderer = Arc::new(PngChartRenderer::new(app_config.chart.output_path.clone()));

    // Create service (application layer)
    let service = SeaLevelService::new(repository, renderer, app_config.analysis, app_config.chart);

    let report = service.run()?;
    print!("{}", format_summary(&report));

    Ok(())
}
