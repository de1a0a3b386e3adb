//! Network visualization module
//!
//! Turns a styled graph into a self-contained HTML page driven by the
//! vis-network browser library (interactive pan, zoom and drag).

pub mod renderer;
pub mod types;

pub use renderer::{build_response, RenderOptions, VisualizationRenderer};
pub use types::*;
