// Renderer trait for persisting a chart
use crate::domain::chart::ChartData;
use std::path::PathBuf;

pub trait ChartRenderer {
    /// Draw the chart and return the path of the written artifact
    fn render(&self, chart: &ChartData) -> anyhow::Result<PathBuf>;
}
