// Application layer - Use cases and the ports they depend on
pub mod chart_renderer;
pub mod observation_repository;
pub mod sea_level_service;
pub mod trend_projector;
