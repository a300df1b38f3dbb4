use std::sync::Arc;

use approx::assert_relative_eq;
use chart_compose::core::{Point, Rect};
use chart_compose::legend::{
    LEGEND_ANCHOR_MARGIN, LegendDefinition, LegendItem, LegendLayoutEngine, LegendOrientation,
    LegendPosition, SeriesKind,
};
use chart_compose::style::{ChartTypography, Color, LegendStyle};

fn plot() -> Rect {
    Rect::new(60.0, 10.0, 600.0, 400.0)
}

fn series(label: &str, kind: SeriesKind) -> LegendItem {
    LegendItem::new(label, Color::from_hex("#2962FF").expect("color"), kind)
}

#[test]
fn vertical_rows_step_by_row_height_plus_spacing() {
    let style = LegendStyle::default();
    let definition = LegendDefinition::new(
        "main",
        LegendOrientation::Vertical,
        LegendPosition::InsideTopLeft,
    )
    .with_items([
        series("open", SeriesKind::Line),
        series("close", SeriesKind::Line),
        series("volume", SeriesKind::Bar),
    ]);

    let visual = LegendLayoutEngine::default()
        .layout(&definition, &style, plot())
        .expect("legend");

    let row_height = style.typography.line_height.max(style.marker_size);
    for pair in visual.items.windows(2) {
        assert_relative_eq!(
            pair[1].marker_y - pair[0].marker_y,
            row_height + style.item_spacing
        );
    }
    assert_eq!(visual.bounds.x, plot().x + LEGEND_ANCHOR_MARGIN);
    assert_eq!(visual.bounds.y, plot().y + LEGEND_ANCHOR_MARGIN);
    for item in &visual.items {
        assert!(visual.bounds.contains(Point::new(item.marker_x, item.marker_y)));
        assert!(item.text_x > item.marker_x);
    }
}

#[test]
fn layout_is_idempotent() {
    let definition = LegendDefinition::new(
        "repeat",
        LegendOrientation::Horizontal,
        LegendPosition::OutsideBottom,
    )
    .with_items([
        series("a", SeriesKind::Area),
        series("bb", SeriesKind::Scatter).with_marker_size(4.0),
    ]);
    let engine = LegendLayoutEngine::default();
    let style = LegendStyle::default();

    let first = engine.layout(&definition, &style, plot()).expect("first");
    let second = engine.layout(&definition, &style, plot()).expect("second");
    assert_eq!(first, second);
}

#[test]
fn horizontal_outside_bottom_centers_under_plot() {
    let definition = LegendDefinition::new(
        "strip",
        LegendOrientation::Horizontal,
        LegendPosition::OutsideBottom,
    )
    .with_items([series("alpha", SeriesKind::Line), series("beta", SeriesKind::Line)]);
    let visual = LegendLayoutEngine::default()
        .layout(&definition, &LegendStyle::default(), plot())
        .expect("legend");

    assert_relative_eq!(visual.bounds.center().x, plot().center().x);
    assert_eq!(visual.bounds.y, plot().bottom() + LEGEND_ANCHOR_MARGIN);
    assert_eq!(visual.items[0].marker_y, visual.items[1].marker_y);
}

#[test]
fn outside_left_may_extend_past_viewport() {
    let definition = LegendDefinition::new(
        "side",
        LegendOrientation::Vertical,
        LegendPosition::OutsideLeft,
    )
    .with_item(series("long series name", SeriesKind::Line));
    let visual = LegendLayoutEngine::default()
        .layout(&definition, &LegendStyle::default(), Rect::new(20.0, 0.0, 200.0, 100.0))
        .expect("legend");

    assert!(visual.bounds.x < 0.0);
    assert_relative_eq!(visual.bounds.right(), 20.0 - LEGEND_ANCHOR_MARGIN);
    assert_eq!(visual.bounds.y, 0.0);
}

#[test]
fn scatter_markers_keep_requested_size() {
    let style = LegendStyle::default();
    let definition = LegendDefinition::new(
        "markers",
        LegendOrientation::Vertical,
        LegendPosition::InsideTopRight,
    )
    .with_items([
        series("dots", SeriesKind::Scatter).with_marker_size(3.0),
        series("bars", SeriesKind::Bar).with_marker_size(2.0),
        series("line", SeriesKind::Line).with_marker_size(14.0),
    ]);
    let visual = LegendLayoutEngine::default()
        .layout(&definition, &style, plot())
        .expect("legend");

    let sizes: Vec<f64> = visual.items.iter().map(|item| item.marker_size).collect();
    assert_eq!(sizes, [3.0, style.marker_size, 14.0]);
    assert_relative_eq!(visual.bounds.right(), plot().right() - LEGEND_ANCHOR_MARGIN);
}

#[test]
fn custom_measurer_controls_box_width() {
    let engine = LegendLayoutEngine::new(Arc::new(|text: &str, typography: &ChartTypography| {
        text.len() as f64 * typography.font_size
    }));
    let style = LegendStyle::default();
    let definition = LegendDefinition::new(
        "measured",
        LegendOrientation::Vertical,
        LegendPosition::InsideBottomLeft,
    )
    .with_item(series("abcd", SeriesKind::Line));

    let visual = engine.layout(&definition, &style, plot()).expect("legend");
    let expected = style.padding * 2.0
        + style.marker_size
        + style.label_spacing
        + 4.0 * style.typography.font_size;
    assert_relative_eq!(visual.bounds.width, expected);
    assert_relative_eq!(visual.bounds.bottom(), plot().bottom() - LEGEND_ANCHOR_MARGIN);
}

#[test]
fn invalid_inputs_are_rejected() {
    let engine = LegendLayoutEngine::default();
    let definition = LegendDefinition::new(
        "bad",
        LegendOrientation::Vertical,
        LegendPosition::InsideTopLeft,
    )
    .with_item(series("x", SeriesKind::Line).with_marker_size(f64::NAN));
    assert!(engine.layout(&definition, &LegendStyle::default(), plot()).is_err());

    let style = LegendStyle {
        padding: -1.0,
        ..LegendStyle::default()
    };
    let definition = LegendDefinition::new(
        "ok",
        LegendOrientation::Vertical,
        LegendPosition::InsideTopLeft,
    );
    assert!(engine.layout(&definition, &style, plot()).is_err());
}
