use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::composition::ChartComposition;
use crate::core::Viewport;
use crate::error::ChartResult;
use crate::layout::{AxisLayoutRequest, ChartLayoutEngine, axis_request_for_ticks};
use crate::legend::{LegendDefinition, LegendLayoutEngine};
use crate::measure::{HeuristicTextMeasurer, TextMeasurer};
use crate::ticks::{AxisTick, TickGeneratorRegistry};

use super::{AxisFrame, AxisSpec, ChartLayoutFrame, LayoutPassConfig};

/// Runs scales through tick generation, axis layout, legend layout and pane
/// partitioning to produce one [`ChartLayoutFrame`].
///
/// A pass holds only immutable inputs; `run` may be called repeatedly, e.g.
/// once per resize.
#[derive(Clone)]
pub struct ChartLayoutPass {
    config: LayoutPassConfig,
    registry: Arc<TickGeneratorRegistry>,
    measurer: Arc<dyn TextMeasurer>,
    axes: Vec<AxisSpec>,
    legend: Option<LegendDefinition>,
    composition: Option<ChartComposition>,
}

impl fmt::Debug for ChartLayoutPass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChartLayoutPass")
            .field("config", &self.config)
            .field("registry", &self.registry)
            .field("axes", &self.axes)
            .field("legend", &self.legend)
            .field("composition", &self.composition)
            .finish_non_exhaustive()
    }
}

impl ChartLayoutPass {
    pub fn new(config: LayoutPassConfig) -> ChartResult<Self> {
        Ok(Self {
            config: config.validate()?,
            registry: Arc::new(TickGeneratorRegistry::with_defaults()),
            measurer: Arc::new(HeuristicTextMeasurer::default()),
            axes: Vec::new(),
            legend: None,
            composition: None,
        })
    }

    #[must_use]
    pub fn with_registry(mut self, registry: Arc<TickGeneratorRegistry>) -> Self {
        self.registry = registry;
        self
    }

    #[must_use]
    pub fn with_measurer(mut self, measurer: Arc<dyn TextMeasurer>) -> Self {
        self.measurer = measurer;
        self
    }

    #[must_use]
    pub fn with_axis(mut self, axis: AxisSpec) -> Self {
        self.axes.push(axis);
        self
    }

    #[must_use]
    pub fn with_legend(mut self, legend: LegendDefinition) -> Self {
        self.legend = Some(legend);
        self
    }

    #[must_use]
    pub fn with_composition(mut self, composition: ChartComposition) -> Self {
        self.composition = Some(composition);
        self
    }

    #[must_use]
    pub fn config(&self) -> &LayoutPassConfig {
        &self.config
    }

    #[must_use]
    pub fn measurer(&self) -> &dyn TextMeasurer {
        self.measurer.as_ref()
    }

    pub fn run(&self, viewport: Viewport) -> ChartResult<ChartLayoutFrame> {
        let viewport = viewport.validate()?;
        let theme = &self.config.theme;

        let mut axis_ticks: Vec<Option<Vec<AxisTick<f64>>>> = Vec::with_capacity(self.axes.len());
        let mut requests: Vec<AxisLayoutRequest> = self.config.axis_requests.clone();
        for spec in &self.axes {
            if axis_ticks
                .iter()
                .zip(&self.axes)
                .any(|(ticks, earlier)| ticks.is_some() && earlier.orientation == spec.orientation)
            {
                warn!(
                    orientation = ?spec.orientation,
                    "ignoring duplicate axis declaration"
                );
                axis_ticks.push(None);
                continue;
            }

            let ticks = spec
                .scale
                .numeric_ticks(&self.registry, self.config.tick_target_count)?;
            let explicit = self
                .config
                .axis_requests
                .iter()
                .any(|request| request.orientation() == spec.orientation);
            if !explicit {
                requests.push(axis_request_for_ticks(
                    spec.orientation,
                    &ticks,
                    &theme.axis,
                    self.measurer.as_ref(),
                    spec.min_thickness,
                    spec.max_thickness,
                )?);
            }
            axis_ticks.push(Some(ticks));
        }

        let layout =
            ChartLayoutEngine::arrange(viewport, self.config.device_pixel_ratio, &requests)?;

        let axes = self
            .axes
            .iter()
            .zip(axis_ticks)
            .filter_map(|(spec, ticks)| {
                let ticks = ticks?;
                let axis_layout = layout.axis(spec.orientation)?;
                Some(AxisFrame {
                    layout: *axis_layout,
                    scale_kind: spec.scale.kind(),
                    ticks,
                })
            })
            .collect::<Vec<_>>();

        let legend = self
            .legend
            .as_ref()
            .map(|definition| {
                LegendLayoutEngine::new(Arc::clone(&self.measurer)).layout(
                    definition,
                    &theme.legend,
                    layout.plot_area,
                )
            })
            .transpose()?;

        let panes = match &self.composition {
            Some(composition) => composition.pane_regions(layout.plot_area)?,
            None => Vec::new(),
        };

        debug!(
            width = viewport.width,
            height = viewport.height,
            plot_width = layout.plot_area.width,
            plot_height = layout.plot_area.height,
            axis_count = axes.len(),
            legend_width = legend.as_ref().map_or(0.0, |legend| legend.bounds.width),
            legend_height = legend.as_ref().map_or(0.0, |legend| legend.bounds.height),
            pane_count = panes.len(),
            "completed layout pass"
        );

        Ok(ChartLayoutFrame {
            viewport: layout.viewport,
            device_pixel_ratio: layout.device_pixel_ratio,
            plot_area: layout.plot_area,
            axes,
            legend,
            panes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::ChartLayoutPass;
    use crate::api::{AxisSpec, LayoutPassConfig};
    use crate::core::{LinearScale, Viewport};
    use crate::layout::{AxisLayoutRequest, AxisOrientation};

    fn value_axis() -> AxisSpec {
        AxisSpec::new(
            AxisOrientation::Left,
            LinearScale::new(0.0, 1000.0).expect("scale"),
        )
    }

    #[test]
    fn estimated_thickness_fits_widest_label() {
        let frame = ChartLayoutPass::new(LayoutPassConfig::default())
            .expect("pass")
            .with_axis(value_axis())
            .run(Viewport::new(800.0, 600.0))
            .expect("frame");

        // "1000" at 12px * 0.6 plus 4 tick + 2 * 4 padding = 40.8, pixel aligned.
        assert_eq!(frame.plot_area.x, 41.0);
        let axis = frame.axis(AxisOrientation::Left).expect("left axis");
        assert_eq!(axis.ticks.len(), 6);
    }

    #[test]
    fn explicit_request_overrides_estimate() {
        let config = LayoutPassConfig {
            axis_requests: vec![
                AxisLayoutRequest::new(AxisOrientation::Left, 70.0).expect("request"),
            ],
            ..LayoutPassConfig::default()
        };
        let frame = ChartLayoutPass::new(config)
            .expect("pass")
            .with_axis(value_axis())
            .run(Viewport::new(800.0, 600.0))
            .expect("frame");
        assert_eq!(frame.plot_area.x, 70.0);
        assert_eq!(frame.axes.len(), 1);
    }

    #[test]
    fn duplicate_axis_declarations_keep_the_first() {
        let frame = ChartLayoutPass::new(LayoutPassConfig::default())
            .expect("pass")
            .with_axis(value_axis())
            .with_axis(AxisSpec::new(
                AxisOrientation::Left,
                LinearScale::new(0.0, 1.0).expect("scale"),
            ))
            .run(Viewport::new(400.0, 300.0))
            .expect("frame");
        assert_eq!(frame.axes.len(), 1);
        assert_eq!(frame.axes[0].ticks.last().map(|tick| tick.value), Some(1000.0));
    }
}
