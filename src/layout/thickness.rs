use crate::error::ChartResult;
use crate::measure::TextMeasurer;
use crate::style::AxisStyle;
use crate::ticks::AxisTick;

use super::{AxisLayoutRequest, AxisOrientation};

/// Thickness an axis needs to fit its tick marks and labels.
///
/// Vertical axes grow with the widest label; horizontal axes need one line.
pub fn estimate_axis_thickness<T>(
    orientation: AxisOrientation,
    ticks: &[AxisTick<T>],
    style: &AxisStyle,
    measurer: &dyn TextMeasurer,
) -> ChartResult<f64> {
    let style = style.clone().validate()?;
    let chrome = style.tick_length + style.label_padding * 2.0;
    if ticks.is_empty() {
        return Ok(chrome);
    }

    let label_extent = if orientation.is_vertical() {
        ticks
            .iter()
            .map(|tick| measurer.measure_width(&tick.label, &style.typography))
            .fold(0.0, f64::max)
    } else {
        style.typography.line_height
    };
    Ok(chrome + label_extent)
}

/// Builds a layout request sized for `ticks`, clamped into optional bounds.
pub fn axis_request_for_ticks<T>(
    orientation: AxisOrientation,
    ticks: &[AxisTick<T>],
    style: &AxisStyle,
    measurer: &dyn TextMeasurer,
    min_thickness: Option<f64>,
    max_thickness: Option<f64>,
) -> ChartResult<AxisLayoutRequest> {
    let thickness = estimate_axis_thickness(orientation, ticks, style, measurer)?;
    AxisLayoutRequest::with_bounds(orientation, thickness, min_thickness, max_thickness)
}
