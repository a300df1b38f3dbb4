use serde::{Deserialize, Serialize};

use crate::core::{Point, Rect};
use crate::error::{ChartError, ChartResult};
use crate::style::{ChartTypography, Color};

/// Stroke parameters for one line segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStroke {
    pub color: Color,
    pub width: f64,
}

impl LineStroke {
    #[must_use]
    pub const fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(ChartError::InvalidData(
                "line stroke width must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

/// Draw command for one line segment in pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinePrimitive {
    pub from: Point,
    pub to: Point,
    pub stroke: LineStroke,
}

impl LinePrimitive {
    #[must_use]
    pub const fn new(from: Point, to: Point, stroke: LineStroke) -> Self {
        Self { from, to, stroke }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.from.x.is_finite()
            || !self.from.y.is_finite()
            || !self.to.x.is_finite()
            || !self.to.y.is_finite()
        {
            return Err(ChartError::InvalidData(
                "line coordinates must be finite".to_owned(),
            ));
        }
        self.stroke.validate()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RectPrimitive {
    pub rect: Rect,
    pub color: Color,
}

impl RectPrimitive {
    #[must_use]
    pub const fn new(rect: Rect, color: Color) -> Self {
        Self { rect, color }
    }

    pub fn validate(self) -> ChartResult<()> {
        self.rect.validate()?;
        self.color.validate()
    }
}

/// Draw command for one label; `origin` is the left edge at the text's
/// vertical center.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPrimitive {
    pub text: String,
    pub origin: Point,
    pub typography: ChartTypography,
    pub color: Color,
}

impl TextPrimitive {
    #[must_use]
    pub fn new(
        text: impl Into<String>,
        origin: Point,
        typography: ChartTypography,
        color: Color,
    ) -> Self {
        Self {
            text: text.into(),
            origin,
            typography,
            color,
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.text.is_empty() {
            return Err(ChartError::InvalidData(
                "text primitive must not be empty".to_owned(),
            ));
        }
        if !self.origin.x.is_finite() || !self.origin.y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        if !self.typography.font_size.is_finite() || self.typography.font_size <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        self.color.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::{LinePrimitive, LineStroke, RectPrimitive, TextPrimitive};
    use crate::core::{Point, Rect};
    use crate::style::{ChartTypography, Color};

    #[test]
    fn primitives_reject_invalid_geometry() {
        let stroke = LineStroke::new(Color::BLACK, 1.0);
        assert!(
            LinePrimitive::new(Point::new(0.0, 0.0), Point::new(f64::NAN, 1.0), stroke)
                .validate()
                .is_err()
        );
        assert!(LineStroke::new(Color::BLACK, 0.0).validate().is_err());
        assert!(
            RectPrimitive::new(Rect::new(0.0, 0.0, -1.0, 1.0), Color::WHITE)
                .validate()
                .is_err()
        );
        assert!(
            TextPrimitive::new("", Point::default(), ChartTypography::default(), Color::BLACK)
                .validate()
                .is_err()
        );
    }
}
