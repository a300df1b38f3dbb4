use std::fmt;
use std::ops::BitOr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::style::Color;

/// Flag set telling a renderer which coordinates to align to generated ticks.
///
/// Stored coordinates are never rewritten; snapping happens downstream.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SnapMode(u8);

impl SnapMode {
    pub const NONE: Self = Self(0);
    pub const TIME_TO_TICKS: Self = Self(0b01);
    pub const VALUE_TO_TICKS: Self = Self(0b10);
    pub const BOTH: Self = Self(0b11);

    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub const fn snaps_time(self) -> bool {
        self.contains(Self::TIME_TO_TICKS)
    }

    #[must_use]
    pub const fn snaps_value(self) -> bool {
        self.contains(Self::VALUE_TO_TICKS)
    }
}

impl BitOr for SnapMode {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Debug for SnapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Self::NONE => "NONE",
            Self::TIME_TO_TICKS => "TIME_TO_TICKS",
            Self::VALUE_TO_TICKS => "VALUE_TO_TICKS",
            Self::BOTH => "BOTH",
            _ => return write!(f, "SnapMode({:#04b})", self.0),
        };
        write!(f, "SnapMode::{name}")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorizontalLineAnnotation {
    pub value: f64,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub target_pane: Option<String>,
    #[serde(default)]
    pub snap: SnapMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerticalLineAnnotation {
    pub timestamp_seconds: f64,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub color: Option<Color>,
    #[serde(default)]
    pub target_pane: Option<String>,
    #[serde(default)]
    pub snap: SnapMode,
}

/// Filled band between two values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueZoneAnnotation {
    pub min_value: f64,
    pub max_value: f64,
    #[serde(default)]
    pub fill: Option<Color>,
    #[serde(default)]
    pub target_pane: Option<String>,
    #[serde(default)]
    pub snap: SnapMode,
}

/// Value band shaded from `start_color` at `min_value` to `end_color` at
/// `max_value`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientZoneAnnotation {
    pub min_value: f64,
    pub max_value: f64,
    pub start_color: Color,
    pub end_color: Color,
    #[serde(default)]
    pub target_pane: Option<String>,
    #[serde(default)]
    pub snap: SnapMode,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeRangeAnnotation {
    pub start_seconds: f64,
    pub end_seconds: f64,
    #[serde(default)]
    pub fill: Option<Color>,
    #[serde(default)]
    pub target_pane: Option<String>,
    #[serde(default)]
    pub snap: SnapMode,
}

/// Text bubble anchored at a `(time, value)` point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalloutAnnotation {
    pub timestamp_seconds: f64,
    pub value: f64,
    pub text: String,
    #[serde(default)]
    pub target_pane: Option<String>,
    #[serde(default)]
    pub snap: SnapMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnnotationKind {
    HorizontalLine,
    VerticalLine,
    ValueZone,
    GradientZone,
    TimeRange,
    Callout,
}

/// Overlay drawn on top of, or beneath, a pane's series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartAnnotation {
    HorizontalLine(HorizontalLineAnnotation),
    VerticalLine(VerticalLineAnnotation),
    ValueZone(ValueZoneAnnotation),
    GradientZone(GradientZoneAnnotation),
    TimeRange(TimeRangeAnnotation),
    Callout(CalloutAnnotation),
}

impl ChartAnnotation {
    #[must_use]
    pub fn horizontal_line(value: f64) -> Self {
        Self::HorizontalLine(HorizontalLineAnnotation {
            value,
            label: None,
            color: None,
            target_pane: None,
            snap: SnapMode::NONE,
        })
    }

    #[must_use]
    pub fn vertical_line(timestamp_seconds: f64) -> Self {
        Self::VerticalLine(VerticalLineAnnotation {
            timestamp_seconds,
            label: None,
            color: None,
            target_pane: None,
            snap: SnapMode::NONE,
        })
    }

    #[must_use]
    pub fn value_zone(min_value: f64, max_value: f64) -> Self {
        Self::ValueZone(ValueZoneAnnotation {
            min_value,
            max_value,
            fill: None,
            target_pane: None,
            snap: SnapMode::NONE,
        })
    }

    #[must_use]
    pub fn gradient_zone(
        min_value: f64,
        max_value: f64,
        start_color: Color,
        end_color: Color,
    ) -> Self {
        Self::GradientZone(GradientZoneAnnotation {
            min_value,
            max_value,
            start_color,
            end_color,
            target_pane: None,
            snap: SnapMode::NONE,
        })
    }

    #[must_use]
    pub fn time_range(start_seconds: f64, end_seconds: f64) -> Self {
        Self::TimeRange(TimeRangeAnnotation {
            start_seconds,
            end_seconds,
            fill: None,
            target_pane: None,
            snap: SnapMode::NONE,
        })
    }

    #[must_use]
    pub fn callout(timestamp_seconds: f64, value: f64, text: impl Into<String>) -> Self {
        Self::Callout(CalloutAnnotation {
            timestamp_seconds,
            value,
            text: text.into(),
            target_pane: None,
            snap: SnapMode::NONE,
        })
    }

    #[must_use]
    pub fn with_target_pane(mut self, pane: impl Into<String>) -> Self {
        *self.target_pane_mut() = Some(pane.into());
        self
    }

    #[must_use]
    pub fn with_snap(mut self, snap: SnapMode) -> Self {
        *self.snap_mut() = snap;
        self
    }

    #[must_use]
    pub fn kind(&self) -> AnnotationKind {
        match self {
            Self::HorizontalLine(_) => AnnotationKind::HorizontalLine,
            Self::VerticalLine(_) => AnnotationKind::VerticalLine,
            Self::ValueZone(_) => AnnotationKind::ValueZone,
            Self::GradientZone(_) => AnnotationKind::GradientZone,
            Self::TimeRange(_) => AnnotationKind::TimeRange,
            Self::Callout(_) => AnnotationKind::Callout,
        }
    }

    #[must_use]
    pub fn target_pane(&self) -> Option<&str> {
        match self {
            Self::HorizontalLine(a) => a.target_pane.as_deref(),
            Self::VerticalLine(a) => a.target_pane.as_deref(),
            Self::ValueZone(a) => a.target_pane.as_deref(),
            Self::GradientZone(a) => a.target_pane.as_deref(),
            Self::TimeRange(a) => a.target_pane.as_deref(),
            Self::Callout(a) => a.target_pane.as_deref(),
        }
    }

    #[must_use]
    pub fn snap(&self) -> SnapMode {
        match self {
            Self::HorizontalLine(a) => a.snap,
            Self::VerticalLine(a) => a.snap,
            Self::ValueZone(a) => a.snap,
            Self::GradientZone(a) => a.snap,
            Self::TimeRange(a) => a.snap,
            Self::Callout(a) => a.snap,
        }
    }

    /// Whether this annotation should be drawn in `pane`.
    #[must_use]
    pub fn targets(&self, pane: &str) -> bool {
        self.target_pane().is_none_or(|target| target == pane)
    }

    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::HorizontalLine(a) => {
                finite("horizontal line", &[("value", a.value)])?;
                validate_color(a.color)
            }
            Self::VerticalLine(a) => {
                finite(
                    "vertical line",
                    &[("timestamp_seconds", a.timestamp_seconds)],
                )?;
                validate_color(a.color)
            }
            Self::ValueZone(a) => {
                finite(
                    "value zone",
                    &[("min_value", a.min_value), ("max_value", a.max_value)],
                )?;
                ordered("value zone", a.min_value, a.max_value)?;
                validate_color(a.fill)
            }
            Self::GradientZone(a) => {
                finite(
                    "gradient zone",
                    &[("min_value", a.min_value), ("max_value", a.max_value)],
                )?;
                if a.max_value <= a.min_value {
                    return Err(ChartError::InvalidData(
                        "gradient zone `max_value` must be > `min_value`".to_owned(),
                    ));
                }
                a.start_color.validate()?;
                a.end_color.validate()
            }
            Self::TimeRange(a) => {
                finite(
                    "time range",
                    &[
                        ("start_seconds", a.start_seconds),
                        ("end_seconds", a.end_seconds),
                    ],
                )?;
                ordered("time range", a.start_seconds, a.end_seconds)?;
                validate_color(a.fill)
            }
            Self::Callout(a) => {
                finite(
                    "callout",
                    &[("timestamp_seconds", a.timestamp_seconds), ("value", a.value)],
                )?;
                if a.text.trim().is_empty() {
                    return Err(ChartError::InvalidData(
                        "callout text must not be empty".to_owned(),
                    ));
                }
                Ok(())
            }
        }
    }

    fn target_pane_mut(&mut self) -> &mut Option<String> {
        match self {
            Self::HorizontalLine(a) => &mut a.target_pane,
            Self::VerticalLine(a) => &mut a.target_pane,
            Self::ValueZone(a) => &mut a.target_pane,
            Self::GradientZone(a) => &mut a.target_pane,
            Self::TimeRange(a) => &mut a.target_pane,
            Self::Callout(a) => &mut a.target_pane,
        }
    }

    fn snap_mut(&mut self) -> &mut SnapMode {
        match self {
            Self::HorizontalLine(a) => &mut a.snap,
            Self::VerticalLine(a) => &mut a.snap,
            Self::ValueZone(a) => &mut a.snap,
            Self::GradientZone(a) => &mut a.snap,
            Self::TimeRange(a) => &mut a.snap,
            Self::Callout(a) => &mut a.snap,
        }
    }
}

fn finite(context: &str, fields: &[(&str, f64)]) -> ChartResult<()> {
    for (name, value) in fields {
        if !value.is_finite() {
            return Err(ChartError::InvalidData(format!(
                "{context} `{name}` must be finite"
            )));
        }
    }
    Ok(())
}

fn ordered(context: &str, start: f64, end: f64) -> ChartResult<()> {
    if end < start {
        return Err(ChartError::InvalidData(format!(
            "{context} end must be >= start"
        )));
    }
    Ok(())
}

fn validate_color(color: Option<Color>) -> ChartResult<()> {
    color.map_or(Ok(()), |color| color.validate())
}
