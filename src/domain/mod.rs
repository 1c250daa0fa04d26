// Domain layer - Observations, trend models and chart descriptions
pub mod chart;
pub mod error;
pub mod observation;
pub mod report;
pub mod trend;
