// PNG chart renderer built on plotters
use crate::application::chart_renderer::ChartRenderer;
use crate::domain::chart::{ChartData, SeriesColor, SeriesKind};
use anyhow::{Context, Result};
use plotters::prelude::*;
use std::fs;
use std::path::PathBuf;

const POINT_RADIUS: i32 = 3;
const LINE_WIDTH: u32 = 2;

#[derive(Debug, Clone)]
pub struct PngChartRenderer {
    output_path: PathBuf,
}

impl PngChartRenderer {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }
}

fn rgb(color: SeriesColor) -> RGBColor {
    RGBColor(color.0, color.1, color.2)
}

impl ChartRenderer for PngChartRenderer {
    fn render(&self, chart: &ChartData) -> Result<PathBuf> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
        }

        let root = BitMapBackend::new(&self.output_path, (chart.width, chart.height))
            .into_drawing_area();
        root.fill(&WHITE).context("Failed to clear chart background")?;

        let mut plot = ChartBuilder::on(&root)
            .caption(&chart.title, ("sans-serif", 28))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(
                chart.x_range.0..chart.x_range.1,
                chart.y_range.0..chart.y_range.1,
            )
            .context("Failed to build chart axes")?;

        plot
            .configure_mesh()
            .x_desc(chart.x_label.as_str())
            .y_desc(chart.y_label.as_str())
            .x_label_formatter(&|x: &f64| format!("{:.0}", x))
            .draw()
            .context("Failed to draw chart mesh")?;

        for series in &chart.series {
            let color = rgb(series.color);
            match series.kind {
                SeriesKind::Scatter => {
                    plot
                        .draw_series(
                            series
                                .points
                                .iter()
                                .map(|p| Circle::new((p.x, p.y), POINT_RADIUS, color.filled())),
                        )
                        .with_context(|| format!("Failed to draw series {}", series.id))?
                        .label(series.name.as_str())
                        .legend(move |(x, y)| Circle::new((x + 10, y), POINT_RADIUS, color.filled()));
                }
                SeriesKind::Line => {
                    plot
                        .draw_series(LineSeries::new(
                            series.points.iter().map(|p| (p.x, p.y)),
                            color.stroke_width(LINE_WIDTH),
                        ))
                        .with_context(|| format!("Failed to draw series {}", series.id))?
                        .label(series.name.as_str())
                        .legend(move |(x, y)| {
                            PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(LINE_WIDTH))
                        });
                }
            }
        }

        plot
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()
            .context("Failed to draw legend")?;

        root.present()
            .with_context(|| format!("Failed to write {}", self.output_path.display()))?;

        tracing::info!("Chart written to {}", self.output_path.display());
        Ok(self.output_path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::{ChartPoint, SeriesData};

    #[test]
    fn test_render_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("nested").join("plot.png");
        let renderer = PngChartRenderer::new(output.clone());

        let chart = ChartData {
            title: "Rise in Sea Level".to_string(),
            x_label: "Year".to_string(),
            y_label: "Sea Level (inches)".to_string(),
            x_range: (1870.0, 2060.0),
            y_range: (-1.0, 16.0),
            width: 400,
            height: 200,
            series: vec![
                SeriesData::new(
                    "observations".to_string(),
                    "Observed".to_string(),
                    SeriesKind::Scatter,
                    SeriesColor::BLUE,
                    vec![ChartPoint::new(1880.0, 0.0), ChartPoint::new(2000.0, 7.0)],
                ),
                SeriesData::new(
                    "full".to_string(),
                    "Best Fit Line (1880-Present)".to_string(),
                    SeriesKind::Line,
                    SeriesColor::RED,
                    vec![ChartPoint::new(1880.0, 0.0), ChartPoint::new(2050.0, 10.0)],
                ),
            ],
        };

        let written = renderer.render(&chart).unwrap();

        assert_eq!(written, output);
        let bytes = fs::read(&output).unwrap();
        assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G']));
    }
}
