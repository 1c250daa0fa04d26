// Chart domain models handed to a renderer
use super::observation::Observation;
use super::trend::ProjectedPoint;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

impl ChartPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<&Observation> for ChartPoint {
    fn from(observation: &Observation) -> Self {
        Self::new(f64::from(observation.year), observation.value)
    }
}

impl From<&ProjectedPoint> for ChartPoint {
    fn from(point: &ProjectedPoint) -> Self {
        Self::new(f64::from(point.year), point.value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesKind {
    Scatter,
    Line,
}

/// RGB color of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesColor(pub u8, pub u8, pub u8);

impl SeriesColor {
    pub const BLUE: SeriesColor = SeriesColor(31, 119, 180);
    pub const RED: SeriesColor = SeriesColor(255, 0, 0);
    pub const GREEN: SeriesColor = SeriesColor(0, 128, 0);

    /// Parses a color name or a `#rrggbb` hex string.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "blue" => Some(Self::BLUE),
            "red" => Some(Self::RED),
            "green" => Some(Self::GREEN),
            "black" => Some(SeriesColor(0, 0, 0)),
            "orange" => Some(SeriesColor(255, 127, 14)),
            other => {
                let hex = other.strip_prefix('#')?;
                if hex.len() != 6 {
                    return None;
                }
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
                Some(SeriesColor(channel(0)?, channel(2)?, channel(4)?))
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct SeriesData {
    pub id: String,
    pub name: String,
    pub kind: SeriesKind,
    pub color: SeriesColor,
    pub points: Vec<ChartPoint>,
}

impl SeriesData {
    pub fn new(
        id: String,
        name: String,
        kind: SeriesKind,
        color: SeriesColor,
        points: Vec<ChartPoint>,
    ) -> Self {
        Self {
            id,
            name,
            kind,
            color,
            points,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChartData {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub x_range: (f64, f64),
    pub y_range: (f64, f64),
    pub width: u32,
    pub height: u32,
    pub series: Vec<SeriesData>,
}
