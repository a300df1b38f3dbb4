use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::core::{Rect, Viewport};
use crate::error::{ChartError, ChartResult};

use super::{AxisLayout, AxisLayoutRequest, AxisOrientation};

/// Rounds `value` up to the next physical pixel boundary.
///
/// `ceil(value * dpr) / dpr`, so a thickness never renders thinner than requested.
#[must_use]
pub fn align_to_pixel(value: f64, device_pixel_ratio: f64) -> f64 {
    (value * device_pixel_ratio).ceil() / device_pixel_ratio
}

/// Result of one axis layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    pub viewport: Viewport,
    pub device_pixel_ratio: f64,
    pub plot_area: Rect,
    /// Requested axes only, ordered left, right, top, bottom.
    pub axes: SmallVec<[AxisLayout; 4]>,
}

impl ChartLayout {
    #[must_use]
    pub fn axis(&self, orientation: AxisOrientation) -> Option<&AxisLayout> {
        self.axes.iter().find(|axis| axis.orientation == orientation)
    }
}

/// Carves the plot rectangle and axis boxes out of a viewport.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChartLayoutEngine;

impl ChartLayoutEngine {
    /// Arranges up to one axis per orientation around the plot area.
    ///
    /// When several requests share an orientation the first one wins.
    pub fn arrange(
        viewport: Viewport,
        device_pixel_ratio: f64,
        requests: &[AxisLayoutRequest],
    ) -> ChartResult<ChartLayout> {
        let viewport = viewport.validate()?;
        if !device_pixel_ratio.is_finite() || device_pixel_ratio <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "device pixel ratio must be finite and > 0, got {device_pixel_ratio}"
            )));
        }

        let mut resolved: [Option<&AxisLayoutRequest>; 4] = [None; 4];
        for request in requests {
            let slot = &mut resolved[orientation_slot(request.orientation())];
            if slot.is_some() {
                warn!(
                    orientation = ?request.orientation(),
                    thickness = request.thickness(),
                    "ignoring duplicate axis layout request"
                );
                continue;
            }
            *slot = Some(request);
        }

        let thickness_of = |orientation: AxisOrientation| {
            resolved[orientation_slot(orientation)]
                .map(|request| resolve_thickness(request, device_pixel_ratio))
                .unwrap_or(0.0)
        };
        let left = thickness_of(AxisOrientation::Left);
        let right = thickness_of(AxisOrientation::Right);
        let top = thickness_of(AxisOrientation::Top);
        let bottom = thickness_of(AxisOrientation::Bottom);

        let plot_area = Rect::new(
            left,
            top,
            (viewport.width - left - right).max(0.0),
            (viewport.height - top - bottom).max(0.0),
        );

        let mut axes = SmallVec::new();
        for orientation in AxisOrientation::ALL {
            if resolved[orientation_slot(orientation)].is_none() {
                continue;
            }
            let thickness = thickness_of(orientation);
            let bounds = match orientation {
                AxisOrientation::Left => Rect::new(0.0, plot_area.y, thickness, plot_area.height),
                AxisOrientation::Right => {
                    Rect::new(plot_area.right(), plot_area.y, thickness, plot_area.height)
                }
                AxisOrientation::Top => Rect::new(plot_area.x, 0.0, plot_area.width, thickness),
                AxisOrientation::Bottom => {
                    Rect::new(plot_area.x, plot_area.bottom(), plot_area.width, thickness)
                }
            };
            axes.push(AxisLayout {
                orientation,
                bounds,
                actual_thickness: thickness,
            });
        }

        debug!(
            width = viewport.width,
            height = viewport.height,
            device_pixel_ratio,
            plot_x = plot_area.x,
            plot_y = plot_area.y,
            plot_width = plot_area.width,
            plot_height = plot_area.height,
            axis_count = axes.len(),
            "arranged chart layout"
        );

        Ok(ChartLayout {
            viewport,
            device_pixel_ratio,
            plot_area,
            axes,
        })
    }
}

fn orientation_slot(orientation: AxisOrientation) -> usize {
    match orientation {
        AxisOrientation::Left => 0,
        AxisOrientation::Right => 1,
        AxisOrientation::Top => 2,
        AxisOrientation::Bottom => 3,
    }
}

fn resolve_thickness(request: &AxisLayoutRequest, device_pixel_ratio: f64) -> f64 {
    let mut thickness = align_to_pixel(request.thickness(), device_pixel_ratio);
    if let Some(min) = request.min_thickness() {
        thickness = thickness.max(align_to_pixel(min, device_pixel_ratio));
    }
    if let Some(max) = request.max_thickness() {
        thickness = thickness.min(align_to_pixel(max, device_pixel_ratio));
    }
    thickness
}

#[cfg(test)]
mod tests {
    use super::{ChartLayoutEngine, align_to_pixel};
    use crate::core::{Rect, Viewport};
    use crate::layout::{AxisLayoutRequest, AxisOrientation};

    fn request(orientation: AxisOrientation, thickness: f64) -> AxisLayoutRequest {
        AxisLayoutRequest::new(orientation, thickness).expect("valid request")
    }

    #[test]
    fn left_and_bottom_axes_carve_plot_area() {
        let layout = ChartLayoutEngine::arrange(
            Viewport::new(800.0, 600.0),
            1.0,
            &[
                request(AxisOrientation::Left, 40.0),
                request(AxisOrientation::Bottom, 30.0),
            ],
        )
        .expect("layout");

        assert_eq!(layout.plot_area, Rect::new(40.0, 0.0, 760.0, 570.0));
        assert_eq!(layout.axes.len(), 2);
        assert_eq!(
            layout.axis(AxisOrientation::Left).map(|axis| axis.bounds),
            Some(Rect::new(0.0, 0.0, 40.0, 570.0))
        );
        assert_eq!(
            layout.axis(AxisOrientation::Bottom).map(|axis| axis.bounds),
            Some(Rect::new(40.0, 570.0, 760.0, 30.0))
        );
        assert!(layout.axis(AxisOrientation::Right).is_none());
    }

    #[test]
    fn thickness_aligns_up_to_device_pixels() {
        assert_eq!(align_to_pixel(39.0, 2.0), 39.0);
        assert_eq!(align_to_pixel(39.2, 2.0), 39.5);
        assert_eq!(align_to_pixel(10.1, 1.0), 11.0);

        let layout = ChartLayoutEngine::arrange(
            Viewport::new(400.0, 300.0),
            2.0,
            &[request(AxisOrientation::Right, 39.2)],
        )
        .expect("layout");
        assert_eq!(layout.plot_area.width, 360.5);
        assert_eq!(
            layout.axis(AxisOrientation::Right).map(|axis| axis.bounds.x),
            Some(360.5)
        );
    }

    #[test]
    fn first_request_per_orientation_wins() {
        let layout = ChartLayoutEngine::arrange(
            Viewport::new(200.0, 100.0),
            1.0,
            &[
                request(AxisOrientation::Top, 20.0),
                request(AxisOrientation::Top, 50.0),
            ],
        )
        .expect("layout");
        assert_eq!(layout.plot_area, Rect::new(0.0, 20.0, 200.0, 80.0));
        assert_eq!(layout.axes.len(), 1);
    }

    #[test]
    fn oversized_axes_collapse_plot_to_zero() {
        let layout = ChartLayoutEngine::arrange(
            Viewport::new(50.0, 50.0),
            1.0,
            &[
                request(AxisOrientation::Left, 40.0),
                request(AxisOrientation::Right, 40.0),
            ],
        )
        .expect("layout");
        assert_eq!(layout.plot_area.width, 0.0);
    }

    #[test]
    fn invalid_inputs_are_rejected() {
        assert!(ChartLayoutEngine::arrange(Viewport::new(-1.0, 10.0), 1.0, &[]).is_err());
        assert!(ChartLayoutEngine::arrange(Viewport::new(10.0, 10.0), 0.0, &[]).is_err());
        assert!(ChartLayoutEngine::arrange(Viewport::new(10.0, 10.0), f64::NAN, &[]).is_err());
    }
}
