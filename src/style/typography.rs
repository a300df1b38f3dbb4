use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

use super::validate_non_negative;

/// Font metrics used for label placement and downstream text drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartTypography {
    pub font_family: String,
    pub font_size: f64,
    pub line_height: f64,
    pub font_weight: u16,
}

impl Default for ChartTypography {
    fn default() -> Self {
        Self {
            font_family: "sans-serif".to_owned(),
            font_size: 12.0,
            line_height: 16.0,
            font_weight: 400,
        }
    }
}

impl ChartTypography {
    pub fn new(font_family: impl Into<String>, font_size: f64, line_height: f64) -> ChartResult<Self> {
        Self {
            font_family: font_family.into(),
            font_size,
            line_height,
            ..Self::default()
        }
        .validate()
    }

    #[must_use]
    pub fn with_weight(mut self, font_weight: u16) -> Self {
        self.font_weight = font_weight;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        validate_non_negative(
            "typography",
            &[("font_size", self.font_size), ("line_height", self.line_height)],
        )?;
        if self.font_size == 0.0 {
            return Err(ChartError::InvalidData(
                "typography font_size must be > 0".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Typography variants carried by a theme.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeTypography {
    pub axis_label: ChartTypography,
    pub legend_label: ChartTypography,
    pub annotation: ChartTypography,
    pub title: ChartTypography,
}

impl ThemeTypography {
    pub fn validate(self) -> ChartResult<Self> {
        Ok(Self {
            axis_label: self.axis_label.validate()?,
            legend_label: self.legend_label.validate()?,
            annotation: self.annotation.validate()?,
            title: self.title.validate()?,
        })
    }
}
