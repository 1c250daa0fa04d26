// Presentation layer - What the user sees after a run
pub mod summary;
