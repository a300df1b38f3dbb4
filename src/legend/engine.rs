use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::core::{Point, Rect};
use crate::error::{ChartError, ChartResult};
use crate::measure::{HeuristicTextMeasurer, TextMeasurer};
use crate::style::LegendStyle;

use super::{
    LegendDefinition, LegendItem, LegendItemVisual, LegendOrientation, LegendPosition,
    LegendVisual, SeriesKind,
};

/// Gap between the legend box and the plot edge it is anchored to.
pub const LEGEND_ANCHOR_MARGIN: f64 = 8.0;

const BAR_MARKER_RATIO: f64 = 0.8;

/// Arranges legend entries and anchors the box against the plot area.
#[derive(Clone)]
pub struct LegendLayoutEngine {
    measurer: Arc<dyn TextMeasurer>,
}

impl Default for LegendLayoutEngine {
    fn default() -> Self {
        Self::new(Arc::new(HeuristicTextMeasurer::default()))
    }
}

impl fmt::Debug for LegendLayoutEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LegendLayoutEngine").finish_non_exhaustive()
    }
}

struct LocalLayout {
    width: f64,
    height: f64,
    items: Vec<LegendItemVisual>,
}

impl LegendLayoutEngine {
    #[must_use]
    pub fn new(measurer: Arc<dyn TextMeasurer>) -> Self {
        Self { measurer }
    }

    #[must_use]
    pub fn measurer(&self) -> &dyn TextMeasurer {
        self.measurer.as_ref()
    }

    /// Lays out `definition` and anchors it relative to `plot_area`.
    ///
    /// Outside placements may extend past the viewport; callers reserve room.
    pub fn layout(
        &self,
        definition: &LegendDefinition,
        style: &LegendStyle,
        plot_area: Rect,
    ) -> ChartResult<LegendVisual> {
        let style = style.clone().validate()?;
        let plot_area = plot_area.validate()?;
        if definition.id.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "legend id must not be empty".to_owned(),
            ));
        }
        for item in &definition.items {
            item.validate()?;
        }

        let local = match definition.orientation {
            LegendOrientation::Vertical => self.layout_vertical(&definition.items, &style),
            LegendOrientation::Horizontal => self.layout_horizontal(&definition.items, &style),
        };
        let origin = anchor_origin(definition.position, plot_area, local.width, local.height);
        let bounds = Rect::new(origin.x, origin.y, local.width, local.height);

        let items = local
            .items
            .into_iter()
            .map(|visual| LegendItemVisual {
                marker_x: visual.marker_x + origin.x,
                marker_y: visual.marker_y + origin.y,
                text_x: visual.text_x + origin.x,
                text_y: visual.text_y + origin.y,
                ..visual
            })
            .collect::<Vec<_>>();

        debug!(
            legend_id = %definition.id,
            orientation = ?definition.orientation,
            position = ?definition.position,
            item_count = items.len(),
            x = bounds.x,
            y = bounds.y,
            width = bounds.width,
            height = bounds.height,
            "laid out legend"
        );

        Ok(LegendVisual {
            id: definition.id.clone(),
            orientation: definition.orientation,
            position: definition.position,
            bounds,
            items,
        })
    }

    fn layout_vertical(&self, items: &[LegendItem], style: &LegendStyle) -> LocalLayout {
        let padding = style.padding;
        if items.is_empty() {
            return empty_layout(padding);
        }

        let typography = &style.typography;
        let marker_sizes: Vec<f64> = items
            .iter()
            .map(|item| resolve_marker_size(item, style.marker_size))
            .collect();
        let max_marker = marker_sizes.iter().copied().fold(0.0, f64::max);
        let max_label = items
            .iter()
            .map(|item| self.measurer.measure_width(&item.label, typography))
            .fold(0.0, f64::max);
        let row_height = typography.line_height.max(max_marker);
        let count = items.len() as f64;

        let width = padding * 2.0 + max_marker + style.label_spacing + max_label;
        let height = padding * 2.0 + count * row_height + (count - 1.0) * style.item_spacing;

        let marker_x = padding + max_marker / 2.0;
        let text_x = padding + max_marker + style.label_spacing;
        let visuals = items
            .iter()
            .zip(marker_sizes)
            .enumerate()
            .map(|(index, (item, marker_size))| {
                let row_top = padding + index as f64 * (row_height + style.item_spacing);
                let center_y = row_top + row_height / 2.0;
                LegendItemVisual {
                    item: item.clone(),
                    marker_x,
                    marker_y: center_y,
                    marker_size,
                    text_x,
                    text_y: center_y,
                    typography: typography.clone(),
                }
            })
            .collect();

        LocalLayout {
            width,
            height,
            items: visuals,
        }
    }

    fn layout_horizontal(&self, items: &[LegendItem], style: &LegendStyle) -> LocalLayout {
        let padding = style.padding;
        if items.is_empty() {
            return empty_layout(padding);
        }

        let typography = &style.typography;
        let marker_sizes: Vec<f64> = items
            .iter()
            .map(|item| resolve_marker_size(item, style.marker_size))
            .collect();
        let max_marker = marker_sizes.iter().copied().fold(0.0, f64::max);
        let row_height = typography.line_height.max(max_marker);
        let center_y = padding + row_height / 2.0;

        let mut cursor = padding;
        let mut visuals = Vec::with_capacity(items.len());
        for (item, marker_size) in items.iter().zip(marker_sizes) {
            let label_width = self.measurer.measure_width(&item.label, typography);
            visuals.push(LegendItemVisual {
                item: item.clone(),
                marker_x: cursor + marker_size / 2.0,
                marker_y: center_y,
                marker_size,
                text_x: cursor + marker_size + style.label_spacing,
                text_y: center_y,
                typography: typography.clone(),
            });
            cursor += marker_size + style.label_spacing + label_width + style.item_spacing;
        }

        LocalLayout {
            width: cursor - style.item_spacing + padding,
            height: padding * 2.0 + row_height,
            items: visuals,
        }
    }
}

fn empty_layout(padding: f64) -> LocalLayout {
    LocalLayout {
        width: padding * 2.0,
        height: padding * 2.0,
        items: Vec::new(),
    }
}

/// Marker size for one item under the legend style.
///
/// Scatter markers keep their requested size; bars never shrink below the
/// style default; everything else takes the larger of style and request.
#[must_use]
pub fn resolve_marker_size(item: &LegendItem, style_marker_size: f64) -> f64 {
    match item.series_kind {
        SeriesKind::Scatter if item.marker_size > 0.0 => item.marker_size,
        SeriesKind::Scatter => style_marker_size,
        SeriesKind::Bar | SeriesKind::Histogram => (style_marker_size * BAR_MARKER_RATIO)
            .max(style_marker_size)
            .max(item.marker_size),
        SeriesKind::Line | SeriesKind::Area | SeriesKind::Candlestick => {
            style_marker_size.max(item.marker_size)
        }
    }
}

fn anchor_origin(position: LegendPosition, plot: Rect, width: f64, height: f64) -> Point {
    let margin = LEGEND_ANCHOR_MARGIN;
    let centered_x = plot.x + (plot.width - width) / 2.0;
    match position {
        LegendPosition::InsideTopLeft => Point::new(plot.x + margin, plot.y + margin),
        LegendPosition::InsideTopRight => Point::new(plot.right() - margin - width, plot.y + margin),
        LegendPosition::InsideBottomLeft => {
            Point::new(plot.x + margin, plot.bottom() - margin - height)
        }
        LegendPosition::InsideBottomRight => Point::new(
            plot.right() - margin - width,
            plot.bottom() - margin - height,
        ),
        LegendPosition::OutsideLeft => Point::new(plot.x - margin - width, plot.y),
        LegendPosition::OutsideRight => Point::new(plot.right() + margin, plot.y),
        LegendPosition::OutsideTop => Point::new(centered_x, plot.y - margin - height),
        LegendPosition::OutsideBottom => Point::new(centered_x, plot.bottom() + margin),
    }
}
