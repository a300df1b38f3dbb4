//! Pluggable text measurement.
//!
//! Layout never shapes glyphs itself. Hosts with a real text backend inject a
//! [`TextMeasurer`]; everything else falls back to [`HeuristicTextMeasurer`].

use serde::{Deserialize, Serialize};

use crate::style::ChartTypography;

/// Estimates the rendered width of a label in logical units.
pub trait TextMeasurer: Send + Sync {
    fn measure_width(&self, text: &str, typography: &ChartTypography) -> f64;
}

impl<F> TextMeasurer for F
where
    F: Fn(&str, &ChartTypography) -> f64 + Send + Sync,
{
    fn measure_width(&self, text: &str, typography: &ChartTypography) -> f64 {
        self(text, typography)
    }
}

/// `font_size × char_width_ratio × character count`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeuristicTextMeasurer {
    pub char_width_ratio: f64,
}

impl HeuristicTextMeasurer {
    pub const DEFAULT_CHAR_WIDTH_RATIO: f64 = 0.6;
}

impl Default for HeuristicTextMeasurer {
    fn default() -> Self {
        Self {
            char_width_ratio: Self::DEFAULT_CHAR_WIDTH_RATIO,
        }
    }
}

impl TextMeasurer for HeuristicTextMeasurer {
    fn measure_width(&self, text: &str, typography: &ChartTypography) -> f64 {
        typography.font_size * self.char_width_ratio * text.chars().count() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::{HeuristicTextMeasurer, TextMeasurer};
    use crate::style::ChartTypography;

    #[test]
    fn heuristic_counts_characters_not_bytes() {
        let typography = ChartTypography {
            font_size: 10.0,
            ..ChartTypography::default()
        };
        let measurer = HeuristicTextMeasurer::default();
        assert_eq!(measurer.measure_width("abc", &typography), 18.0);
        assert_eq!(measurer.measure_width("äöü", &typography), 18.0);
        assert_eq!(measurer.measure_width("", &typography), 0.0);
    }

    #[test]
    fn closures_act_as_measurers() {
        let fixed = |text: &str, _: &ChartTypography| text.len() as f64 * 5.0;
        assert_eq!(fixed.measure_width("abcd", &ChartTypography::default()), 20.0);
    }
}
