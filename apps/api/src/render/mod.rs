//! Presentation: progress tracking, radar chart data and HTML fragments.

pub mod chart;
pub mod fragments;
pub mod progress;

use thiserror::Error;

pub use chart::{radar_chart, RadarChart};
pub use fragments::{RenderedFragments, Renderer};

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Template error: {0}")]
    Template(#[from] minijinja::Error),
}
