use serde::{Deserialize, Serialize};

use crate::composition::PaneRegion;
use crate::core::{Rect, ScaleKind, Viewport};
use crate::error::ChartResult;
use crate::layout::{AxisLayout, AxisOrientation};
use crate::legend::LegendVisual;
use crate::measure::TextMeasurer;
use crate::render::{RenderBackend, paint_axis, paint_legend};
use crate::style::ChartTheme;
use crate::ticks::AxisTick;

/// Laid-out axis plus the ticks placed along it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisFrame {
    pub layout: AxisLayout,
    pub scale_kind: ScaleKind,
    pub ticks: Vec<AxisTick<f64>>,
}

/// Complete geometry produced by one layout pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLayoutFrame {
    pub viewport: Viewport,
    pub device_pixel_ratio: f64,
    pub plot_area: Rect,
    pub axes: Vec<AxisFrame>,
    #[serde(default)]
    pub legend: Option<LegendVisual>,
    #[serde(default)]
    pub panes: Vec<PaneRegion>,
}

impl ChartLayoutFrame {
    #[must_use]
    pub fn axis(&self, orientation: AxisOrientation) -> Option<&AxisFrame> {
        self.axes
            .iter()
            .find(|axis| axis.layout.orientation == orientation)
    }

    /// Issues axes first, then the legend, through `backend`.
    pub fn paint(
        &self,
        theme: &ChartTheme,
        measurer: &dyn TextMeasurer,
        backend: &mut dyn RenderBackend,
    ) -> ChartResult<()> {
        for axis in &self.axes {
            paint_axis(&axis.layout, &axis.ticks, &theme.axis, measurer, backend)?;
        }
        if let Some(legend) = &self.legend {
            paint_legend(legend, &theme.legend, backend)?;
        }
        Ok(())
    }
}
