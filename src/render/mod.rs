//! Backend seam: three drawing primitives plus painters that walk layout
//! results and issue them.

mod frame;
mod painter;
mod primitives;

pub use frame::RenderFrame;
pub use painter::{paint_axis, paint_legend};
pub use primitives::{LinePrimitive, LineStroke, RectPrimitive, TextPrimitive};

use crate::core::{Point, Rect};
use crate::error::ChartResult;
use crate::style::{ChartTypography, Color};

/// Contract implemented by any drawing backend.
///
/// These three primitives are enough to realize every axis, legend and
/// annotation visual this crate lays out.
pub trait RenderBackend {
    fn stroke_line(&mut self, from: Point, to: Point, stroke: LineStroke) -> ChartResult<()>;

    fn fill_rect(&mut self, rect: Rect, color: Color) -> ChartResult<()>;

    /// `origin` is the left edge of the text at its vertical center.
    fn draw_text(
        &mut self,
        text: &str,
        origin: Point,
        typography: &ChartTypography,
        color: Color,
    ) -> ChartResult<()>;
}
