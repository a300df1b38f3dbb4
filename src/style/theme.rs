use serde::{Deserialize, Serialize};

use crate::error::ChartResult;

use super::{ChartTypography, Color, ThemeTypography, validate_non_negative};

/// Axis line, tick and label styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisStyle {
    pub line_color: Color,
    pub line_thickness: f64,
    pub tick_color: Color,
    pub tick_length: f64,
    pub label_color: Color,
    pub label_padding: f64,
    pub grid_color: Color,
    pub grid_thickness: f64,
    pub typography: ChartTypography,
}

impl Default for AxisStyle {
    fn default() -> Self {
        Self {
            line_color: Color::rgb(0.55, 0.58, 0.62),
            line_thickness: 1.0,
            tick_color: Color::rgb(0.55, 0.58, 0.62),
            tick_length: 4.0,
            label_color: Color::rgb(0.25, 0.27, 0.30),
            label_padding: 4.0,
            grid_color: Color::rgba(0.55, 0.58, 0.62, 0.25),
            grid_thickness: 1.0,
            typography: ChartTypography::default(),
        }
    }
}

impl AxisStyle {
    pub fn validate(self) -> ChartResult<Self> {
        validate_non_negative(
            "axis style",
            &[
                ("line_thickness", self.line_thickness),
                ("tick_length", self.tick_length),
                ("label_padding", self.label_padding),
                ("grid_thickness", self.grid_thickness),
            ],
        )?;
        for color in [self.line_color, self.tick_color, self.label_color, self.grid_color] {
            color.validate()?;
        }
        Ok(Self {
            typography: self.typography.validate()?,
            ..self
        })
    }
}

/// Legend chrome and item spacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendStyle {
    pub background: Color,
    pub border_color: Color,
    pub border_thickness: f64,
    pub padding: f64,
    pub item_spacing: f64,
    pub label_spacing: f64,
    pub marker_size: f64,
    pub text_color: Color,
    pub typography: ChartTypography,
}

impl Default for LegendStyle {
    fn default() -> Self {
        Self {
            background: Color::rgba(1.0, 1.0, 1.0, 0.85),
            border_color: Color::rgba(0.55, 0.58, 0.62, 0.6),
            border_thickness: 1.0,
            padding: 8.0,
            item_spacing: 6.0,
            label_spacing: 6.0,
            marker_size: 10.0,
            text_color: Color::rgb(0.15, 0.16, 0.18),
            typography: ChartTypography::default(),
        }
    }
}

impl LegendStyle {
    pub fn validate(self) -> ChartResult<Self> {
        validate_non_negative(
            "legend style",
            &[
                ("border_thickness", self.border_thickness),
                ("padding", self.padding),
                ("item_spacing", self.item_spacing),
                ("label_spacing", self.label_spacing),
                ("marker_size", self.marker_size),
            ],
        )?;
        for color in [self.background, self.border_color, self.text_color] {
            color.validate()?;
        }
        Ok(Self {
            typography: self.typography.validate()?,
            ..self
        })
    }
}

/// Base colors plus the cycling series palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartPalette {
    pub background: Color,
    pub foreground: Color,
    pub grid: Color,
    pub series: Vec<Color>,
}

impl Default for ChartPalette {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            foreground: Color::rgb(0.15, 0.16, 0.18),
            grid: Color::rgba(0.55, 0.58, 0.62, 0.25),
            series: vec![
                Color::from_rgba8(0x1F, 0x77, 0xB4, 0xFF),
                Color::from_rgba8(0xFF, 0x7F, 0x0E, 0xFF),
                Color::from_rgba8(0x2C, 0xA0, 0x2C, 0xFF),
                Color::from_rgba8(0xD6, 0x27, 0x28, 0xFF),
                Color::from_rgba8(0x94, 0x67, 0xBD, 0xFF),
                Color::from_rgba8(0x8C, 0x56, 0x4B, 0xFF),
            ],
        }
    }
}

impl ChartPalette {
    /// Series color for `index`, cycling through the palette.
    #[must_use]
    pub fn series_color(&self, index: usize) -> Color {
        if self.series.is_empty() {
            return self.foreground;
        }
        self.series[index % self.series.len()]
    }

    pub fn validate(self) -> ChartResult<Self> {
        for color in [self.background, self.foreground, self.grid]
            .iter()
            .chain(self.series.iter())
        {
            color.validate()?;
        }
        Ok(self)
    }
}

/// Complete style input for one layout pass.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartTheme {
    pub name: String,
    pub palette: ChartPalette,
    pub axis: AxisStyle,
    pub legend: LegendStyle,
    pub typography: ThemeTypography,
}

impl ChartTheme {
    pub fn new(
        name: impl Into<String>,
        palette: ChartPalette,
        axis: AxisStyle,
        legend: LegendStyle,
        typography: ThemeTypography,
    ) -> ChartResult<Self> {
        Self {
            name: name.into(),
            palette,
            axis,
            legend,
            typography,
        }
        .validate()
    }

    /// Dark counterpart of the default theme.
    #[must_use]
    pub fn dark() -> Self {
        let foreground = Color::rgb(0.86, 0.87, 0.89);
        let muted = Color::rgb(0.45, 0.48, 0.52);
        Self {
            name: "dark".to_owned(),
            palette: ChartPalette {
                background: Color::rgb(0.08, 0.09, 0.11),
                foreground,
                grid: muted.with_alpha(0.3),
                ..ChartPalette::default()
            },
            axis: AxisStyle {
                line_color: muted,
                tick_color: muted,
                label_color: foreground,
                grid_color: muted.with_alpha(0.3),
                ..AxisStyle::default()
            },
            legend: LegendStyle {
                background: Color::rgba(0.08, 0.09, 0.11, 0.85),
                border_color: muted,
                text_color: foreground,
                ..LegendStyle::default()
            },
            typography: ThemeTypography::default(),
        }
    }

    pub fn validate(self) -> ChartResult<Self> {
        Ok(Self {
            palette: self.palette.validate()?,
            axis: self.axis.validate()?,
            legend: self.legend.validate()?,
            typography: self.typography.validate()?,
            name: self.name,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{AxisStyle, ChartPalette, ChartTheme, LegendStyle};
    use crate::style::{Color, ThemeTypography};

    #[test]
    fn default_theme_is_valid() {
        assert!(ChartTheme::default().validate().is_ok());
        assert!(ChartTheme::dark().validate().is_ok());
    }

    #[test]
    fn negative_spacing_is_rejected_at_construction() {
        let legend = LegendStyle {
            item_spacing: -2.0,
            ..LegendStyle::default()
        };
        let result = ChartTheme::new(
            "broken",
            ChartPalette::default(),
            AxisStyle::default(),
            legend,
            ThemeTypography::default(),
        );
        assert!(result.is_err());

        let axis = AxisStyle {
            tick_length: f64::NAN,
            ..AxisStyle::default()
        };
        assert!(axis.validate().is_err());
    }

    #[test]
    fn palette_cycles_series_colors() {
        let palette = ChartPalette {
            series: vec![Color::BLACK, Color::WHITE],
            ..ChartPalette::default()
        };
        assert_eq!(palette.series_color(3), Color::WHITE);

        let empty = ChartPalette {
            series: Vec::new(),
            ..ChartPalette::default()
        };
        assert_eq!(empty.series_color(0), empty.foreground);
    }

    #[test]
    fn theme_deserializes_with_defaults_and_hex_colors() {
        let theme: ChartTheme = serde_json::from_str(
            r##"{ "name": "custom", "palette": { "background": "#101010" }, "legend": { "padding": 4.0 } }"##,
        )
        .expect("theme json");
        assert_eq!(theme.palette.background.to_hex(), "#101010");
        assert_eq!(theme.legend.padding, 4.0);
        assert_eq!(theme.legend.item_spacing, LegendStyle::default().item_spacing);
        assert!(theme.validate().is_ok());
    }
}
