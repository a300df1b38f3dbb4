//! Style value objects consumed, never computed, by the layout engines.
//!
//! Every numeric field must be finite and non-negative; each type exposes a
//! `validate` that the engines call before using it.

mod color;
mod theme;
mod typography;

pub use color::Color;
pub use theme::{AxisStyle, ChartPalette, ChartTheme, LegendStyle};
pub use typography::{ChartTypography, ThemeTypography};

use crate::error::{ChartError, ChartResult};

pub(crate) fn validate_non_negative(context: &str, fields: &[(&str, f64)]) -> ChartResult<()> {
    for (name, value) in fields {
        if !value.is_finite() || *value < 0.0 {
            return Err(ChartError::InvalidData(format!(
                "{context} `{name}` must be finite and >= 0"
            )));
        }
    }
    Ok(())
}
