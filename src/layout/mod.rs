//! DPI-aware axis layout: plot rectangle plus one bounding box per axis.

mod axis;
mod engine;
mod thickness;

pub use axis::{AxisLayout, AxisLayoutRequest, AxisOrientation};
pub use engine::{ChartLayout, ChartLayoutEngine, align_to_pixel};
pub use thickness::{axis_request_for_ticks, estimate_axis_thickness};
