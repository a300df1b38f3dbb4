use crate::core::{Point, Rect};
use crate::error::ChartResult;
use crate::layout::{AxisLayout, AxisOrientation};
use crate::legend::{LegendItemVisual, LegendVisual, SeriesKind};
use crate::measure::TextMeasurer;
use crate::render::{LineStroke, RenderBackend};
use crate::style::{AxisStyle, LegendStyle};
use crate::ticks::AxisTick;

/// Issues the axis line, tick marks and tick labels for one laid-out axis.
///
/// Unit 0 sits at the bottom of vertical axes and the left of horizontal
/// ones. Ticks with a non-finite unit are skipped.
pub fn paint_axis<T>(
    axis: &AxisLayout,
    ticks: &[AxisTick<T>],
    style: &AxisStyle,
    measurer: &dyn TextMeasurer,
    backend: &mut dyn RenderBackend,
) -> ChartResult<()> {
    let style = style.clone().validate()?;
    let bounds = axis.bounds;
    let typography = &style.typography;

    let (edge_from, edge_to) = plot_edge(axis.orientation, bounds);
    if style.line_thickness > 0.0 {
        backend.stroke_line(
            edge_from,
            edge_to,
            LineStroke::new(style.line_color, style.line_thickness),
        )?;
    }

    let tick_stroke = LineStroke::new(style.tick_color, style.line_thickness.max(1.0));
    let label_offset = style.tick_length + style.label_padding;
    for tick in ticks {
        if !tick.unit_position.is_finite() {
            continue;
        }
        let (mark_from, mark_to, label_anchor) = match axis.orientation {
            AxisOrientation::Left => {
                let y = bounds.bottom() - tick.unit_position * bounds.height;
                let edge = bounds.right();
                let width = measurer.measure_width(&tick.label, typography);
                (
                    Point::new(edge, y),
                    Point::new(edge - style.tick_length, y),
                    Point::new(edge - label_offset - width, y),
                )
            }
            AxisOrientation::Right => {
                let y = bounds.bottom() - tick.unit_position * bounds.height;
                let edge = bounds.x;
                (
                    Point::new(edge, y),
                    Point::new(edge + style.tick_length, y),
                    Point::new(edge + label_offset, y),
                )
            }
            AxisOrientation::Top => {
                let x = bounds.x + tick.unit_position * bounds.width;
                let edge = bounds.bottom();
                let width = measurer.measure_width(&tick.label, typography);
                (
                    Point::new(x, edge),
                    Point::new(x, edge - style.tick_length),
                    Point::new(
                        x - width / 2.0,
                        edge - label_offset - typography.line_height / 2.0,
                    ),
                )
            }
            AxisOrientation::Bottom => {
                let x = bounds.x + tick.unit_position * bounds.width;
                let edge = bounds.y;
                let width = measurer.measure_width(&tick.label, typography);
                (
                    Point::new(x, edge),
                    Point::new(x, edge + style.tick_length),
                    Point::new(
                        x - width / 2.0,
                        edge + label_offset + typography.line_height / 2.0,
                    ),
                )
            }
        };

        if style.tick_length > 0.0 {
            backend.stroke_line(mark_from, mark_to, tick_stroke)?;
        }
        if !tick.label.is_empty() {
            backend.draw_text(&tick.label, label_anchor, typography, style.label_color)?;
        }
    }
    Ok(())
}

/// Issues legend chrome, item markers and labels.
pub fn paint_legend(
    legend: &LegendVisual,
    style: &LegendStyle,
    backend: &mut dyn RenderBackend,
) -> ChartResult<()> {
    let style = style.clone().validate()?;
    let bounds = legend.bounds;

    if style.background.alpha > 0.0 {
        backend.fill_rect(bounds, style.background)?;
    }
    if style.border_thickness > 0.0 {
        let stroke = LineStroke::new(style.border_color, style.border_thickness);
        let corners = [
            Point::new(bounds.x, bounds.y),
            Point::new(bounds.right(), bounds.y),
            Point::new(bounds.right(), bounds.bottom()),
            Point::new(bounds.x, bounds.bottom()),
        ];
        for (index, from) in corners.iter().enumerate() {
            backend.stroke_line(*from, corners[(index + 1) % corners.len()], stroke)?;
        }
    }

    for visual in &legend.items {
        paint_marker(visual, backend)?;
        if !visual.item.label.is_empty() {
            backend.draw_text(
                &visual.item.label,
                Point::new(visual.text_x, visual.text_y),
                &visual.typography,
                style.text_color,
            )?;
        }
    }
    Ok(())
}

fn paint_marker(visual: &LegendItemVisual, backend: &mut dyn RenderBackend) -> ChartResult<()> {
    let half = visual.marker_size / 2.0;
    let item = &visual.item;
    match item.series_kind {
        SeriesKind::Line => {
            if item.stroke_width <= 0.0 || visual.marker_size <= 0.0 {
                return Ok(());
            }
            backend.stroke_line(
                Point::new(visual.marker_x - half, visual.marker_y),
                Point::new(visual.marker_x + half, visual.marker_y),
                LineStroke::new(item.color, item.stroke_width),
            )
        }
        SeriesKind::Area
        | SeriesKind::Bar
        | SeriesKind::Histogram
        | SeriesKind::Scatter
        | SeriesKind::Candlestick => {
            let color = item.color.with_alpha(item.color.alpha * item.fill_opacity);
            backend.fill_rect(
                Rect::new(
                    visual.marker_x - half,
                    visual.marker_y - half,
                    visual.marker_size,
                    visual.marker_size,
                ),
                color,
            )
        }
    }
}

/// Axis edge that touches the plot area.
fn plot_edge(orientation: AxisOrientation, bounds: Rect) -> (Point, Point) {
    match orientation {
        AxisOrientation::Left => (
            Point::new(bounds.right(), bounds.y),
            Point::new(bounds.right(), bounds.bottom()),
        ),
        AxisOrientation::Right => (
            Point::new(bounds.x, bounds.y),
            Point::new(bounds.x, bounds.bottom()),
        ),
        AxisOrientation::Top => (
            Point::new(bounds.x, bounds.bottom()),
            Point::new(bounds.right(), bounds.bottom()),
        ),
        AxisOrientation::Bottom => (
            Point::new(bounds.x, bounds.y),
            Point::new(bounds.right(), bounds.y),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::{paint_axis, paint_legend};
    use crate::core::{Point, Rect, Viewport};
    use crate::layout::{AxisLayout, AxisOrientation};
    use crate::legend::{
        LegendDefinition, LegendItem, LegendLayoutEngine, LegendOrientation, LegendPosition,
        SeriesKind,
    };
    use crate::measure::HeuristicTextMeasurer;
    use crate::render::RenderFrame;
    use crate::style::{AxisStyle, Color, LegendStyle};
    use crate::ticks::AxisTick;

    #[test]
    fn left_axis_labels_sit_outside_the_plot_edge() {
        let axis = AxisLayout {
            orientation: AxisOrientation::Left,
            bounds: Rect::new(0.0, 0.0, 40.0, 100.0),
            actual_thickness: 40.0,
        };
        let ticks = vec![AxisTick::new(0.0, 0.0, "0"), AxisTick::new(10.0, 1.0, "10")];
        let mut frame = RenderFrame::new(Viewport::new(200.0, 100.0));
        paint_axis(
            &axis,
            &ticks,
            &AxisStyle::default(),
            &HeuristicTextMeasurer::default(),
            &mut frame,
        )
        .expect("paint");

        assert_eq!(frame.lines.len(), 3);
        assert_eq!(frame.lines[0].from, Point::new(40.0, 0.0));
        assert_eq!(frame.lines[1].from.y, 100.0);
        assert_eq!(frame.lines[2].from.y, 0.0);
        assert_eq!(frame.texts.len(), 2);
        assert!(frame.texts.iter().all(|text| text.origin.x < 40.0 - 4.0));
        assert!(frame.validate().is_ok());
    }

    #[test]
    fn bottom_axis_centers_labels_under_ticks() {
        let axis = AxisLayout {
            orientation: AxisOrientation::Bottom,
            bounds: Rect::new(40.0, 80.0, 160.0, 20.0),
            actual_thickness: 20.0,
        };
        let ticks = vec![AxisTick::new(0.5, 0.5, "ab"), AxisTick::new(f64::NAN, f64::NAN, "x")];
        let mut frame = RenderFrame::new(Viewport::new(200.0, 100.0));
        paint_axis(
            &axis,
            &ticks,
            &AxisStyle::default(),
            &HeuristicTextMeasurer::default(),
            &mut frame,
        )
        .expect("paint");

        assert_eq!(frame.texts.len(), 1);
        let label_width = 2.0 * 12.0 * 0.6;
        assert!((frame.texts[0].origin.x - (120.0 - label_width / 2.0)).abs() <= 1e-9);
        assert!(frame.texts[0].origin.y > 80.0);
    }

    #[test]
    fn legend_paint_emits_chrome_markers_and_labels() {
        let definition = LegendDefinition::new(
            "main",
            LegendOrientation::Vertical,
            LegendPosition::InsideTopRight,
        )
        .with_items([
            LegendItem::new("close", Color::BLACK, SeriesKind::Line),
            LegendItem::new("volume", Color::WHITE, SeriesKind::Bar).with_fill_opacity(0.5),
        ]);
        let style = LegendStyle::default();
        let visual = LegendLayoutEngine::default()
            .layout(&definition, &style, Rect::new(0.0, 0.0, 400.0, 300.0))
            .expect("legend");

        let mut frame = RenderFrame::new(Viewport::new(400.0, 300.0));
        paint_legend(&visual, &style, &mut frame).expect("paint");

        assert_eq!(frame.texts.len(), 2);
        assert_eq!(frame.texts[1].text, "volume");
        let bar_marker = frame.rects.last().expect("bar marker");
        assert_eq!(bar_marker.color.alpha, 0.5);
        assert!(visual.bounds.contains(Point::new(
            bar_marker.rect.center().x,
            bar_marker.rect.center().y
        )));
    }
}
