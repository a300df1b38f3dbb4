use serde::{Deserialize, Serialize};

use crate::core::{Point, Rect, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{LinePrimitive, LineStroke, RectPrimitive, RenderBackend, TextPrimitive};
use crate::style::{ChartTypography, Color};

/// Backend-agnostic record of the primitives issued during one paint.
///
/// Doubles as a [`RenderBackend`] for headless use and tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            lines: Vec::new(),
            rects: Vec::new(),
            texts: Vec::new(),
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty() && self.rects.is_empty() && self.texts.is_empty()
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.lines.len() + self.rects.len() + self.texts.len()
    }
}

impl RenderBackend for RenderFrame {
    fn stroke_line(&mut self, from: Point, to: Point, stroke: LineStroke) -> ChartResult<()> {
        let line = LinePrimitive::new(from, to, stroke);
        line.validate()?;
        self.lines.push(line);
        Ok(())
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) -> ChartResult<()> {
        let primitive = RectPrimitive::new(rect, color);
        primitive.validate()?;
        self.rects.push(primitive);
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        origin: Point,
        typography: &ChartTypography,
        color: Color,
    ) -> ChartResult<()> {
        let primitive = TextPrimitive::new(text, origin, typography.clone(), color);
        primitive.validate()?;
        self.texts.push(primitive);
        Ok(())
    }
}
