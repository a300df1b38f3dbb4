//! One-shot layout pass tying scales, ticks, axes, legend and panes together.

mod axis_spec;
mod config;
mod frame;
mod json_contract;
mod pass;

pub use axis_spec::{AxisScale, AxisSpec};
pub use config::LayoutPassConfig;
pub use frame::{AxisFrame, ChartLayoutFrame};
pub use json_contract::{CHART_LAYOUT_FRAME_JSON_SCHEMA_V1, ChartLayoutFrameJsonContractV1};
pub use pass::ChartLayoutPass;
