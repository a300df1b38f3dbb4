//! chart-compose: chart composition and layout engine.
//!
//! Turns declarative scales, axes, legends and annotation layers into
//! pixel-accurate geometry for one chart frame. Nothing here draws; results
//! are handed to a [`render::RenderBackend`].

pub mod api;
pub mod composition;
pub mod core;
pub mod error;
pub mod layout;
pub mod legend;
pub mod measure;
pub mod render;
pub mod style;
pub mod telemetry;
pub mod ticks;

pub use api::{ChartLayoutFrame, ChartLayoutPass, LayoutPassConfig};
pub use error::{ChartError, ChartResult};
