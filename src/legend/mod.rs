//! Legend micro-layout: item rows/columns plus anchoring against the plot area.

mod engine;

pub use engine::{LEGEND_ANCHOR_MARGIN, LegendLayoutEngine, resolve_marker_size};

use serde::{Deserialize, Serialize};

use crate::core::Rect;
use crate::error::{ChartError, ChartResult};
use crate::style::{ChartTypography, Color};

/// Series family an item represents; drives marker sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SeriesKind {
    #[default]
    Line,
    Area,
    Bar,
    Histogram,
    Scatter,
    Candlestick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LegendOrientation {
    #[default]
    Vertical,
    Horizontal,
}

/// Legend anchor relative to the plot rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LegendPosition {
    #[default]
    InsideTopLeft,
    InsideTopRight,
    InsideBottomLeft,
    InsideBottomRight,
    OutsideLeft,
    OutsideRight,
    OutsideTop,
    OutsideBottom,
}

impl LegendPosition {
    #[must_use]
    pub fn is_inside(self) -> bool {
        matches!(
            self,
            Self::InsideTopLeft
                | Self::InsideTopRight
                | Self::InsideBottomLeft
                | Self::InsideBottomRight
        )
    }
}

/// One legend entry: marker plus label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendItem {
    pub label: String,
    pub color: Color,
    #[serde(default)]
    pub series_kind: SeriesKind,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default = "default_fill_opacity")]
    pub fill_opacity: f64,
    /// Requested marker size; `0` defers to the legend style.
    #[serde(default)]
    pub marker_size: f64,
}

fn default_stroke_width() -> f64 {
    1.0
}

fn default_fill_opacity() -> f64 {
    1.0
}

impl LegendItem {
    #[must_use]
    pub fn new(label: impl Into<String>, color: Color, series_kind: SeriesKind) -> Self {
        Self {
            label: label.into(),
            color,
            series_kind,
            stroke_width: default_stroke_width(),
            fill_opacity: default_fill_opacity(),
            marker_size: 0.0,
        }
    }

    #[must_use]
    pub fn with_marker_size(mut self, marker_size: f64) -> Self {
        self.marker_size = marker_size;
        self
    }

    #[must_use]
    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    #[must_use]
    pub fn with_fill_opacity(mut self, fill_opacity: f64) -> Self {
        self.fill_opacity = fill_opacity;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        for (name, value) in [
            ("stroke_width", self.stroke_width),
            ("marker_size", self.marker_size),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ChartError::InvalidData(format!(
                    "legend item `{}` {name} must be finite and >= 0",
                    self.label
                )));
            }
        }
        if !self.fill_opacity.is_finite() || !(0.0..=1.0).contains(&self.fill_opacity) {
            return Err(ChartError::InvalidData(format!(
                "legend item `{}` fill opacity must be in [0, 1]",
                self.label
            )));
        }
        self.color.validate()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendDefinition {
    pub id: String,
    #[serde(default)]
    pub orientation: LegendOrientation,
    #[serde(default)]
    pub position: LegendPosition,
    #[serde(default)]
    pub items: Vec<LegendItem>,
}

impl LegendDefinition {
    #[must_use]
    pub fn new(id: impl Into<String>, orientation: LegendOrientation, position: LegendPosition) -> Self {
        Self {
            id: id.into(),
            orientation,
            position,
            items: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_item(mut self, item: LegendItem) -> Self {
        self.items.push(item);
        self
    }

    #[must_use]
    pub fn with_items(mut self, items: impl IntoIterator<Item = LegendItem>) -> Self {
        self.items.extend(items);
        self
    }
}

/// Legend item with resolved geometry, in the same coordinate space as the
/// plot rectangle.
///
/// `marker_x`/`marker_y` address the marker center; `text_y` is the label
/// baseline at the row's vertical center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendItemVisual {
    pub item: LegendItem,
    pub marker_x: f64,
    pub marker_y: f64,
    pub marker_size: f64,
    pub text_x: f64,
    pub text_y: f64,
    pub typography: ChartTypography,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendVisual {
    pub id: String,
    pub orientation: LegendOrientation,
    pub position: LegendPosition,
    pub bounds: Rect,
    pub items: Vec<LegendItemVisual>,
}

#[cfg(test)]
mod tests {
    use super::{LegendItem, LegendPosition, SeriesKind};
    use crate::style::Color;

    #[test]
    fn legend_item_validation_rejects_bad_metrics() {
        let item = LegendItem::new("price", Color::BLACK, SeriesKind::Line);
        assert!(item.validate().is_ok());
        assert!(item.clone().with_marker_size(-1.0).validate().is_err());
        assert!(item.clone().with_fill_opacity(1.5).validate().is_err());
        assert!(item.with_stroke_width(f64::NAN).validate().is_err());
    }

    #[test]
    fn inside_positions_are_classified() {
        assert!(LegendPosition::InsideBottomRight.is_inside());
        assert!(!LegendPosition::OutsideTop.is_inside());
    }
}
