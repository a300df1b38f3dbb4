use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::core::Rect;
use crate::error::{ChartError, ChartResult};

/// Horizontal band hosting a subset of series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaneDefinition {
    pub name: String,
    #[serde(default)]
    pub series: BTreeSet<usize>,
    #[serde(default = "default_height_ratio")]
    pub height_ratio: f64,
    /// Shares the primary pane's time axis instead of drawing its own.
    #[serde(default = "default_share_x_axis")]
    pub share_x_axis: bool,
}

fn default_height_ratio() -> f64 {
    1.0
}

fn default_share_x_axis() -> bool {
    true
}

impl PaneDefinition {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            series: BTreeSet::new(),
            height_ratio: default_height_ratio(),
            share_x_axis: default_share_x_axis(),
        }
    }

    #[must_use]
    pub fn with_series(mut self, series: impl IntoIterator<Item = usize>) -> Self {
        self.series.extend(series);
        self
    }

    #[must_use]
    pub fn with_height_ratio(mut self, height_ratio: f64) -> Self {
        self.height_ratio = height_ratio;
        self
    }

    #[must_use]
    pub fn with_shared_x_axis(mut self, share_x_axis: bool) -> Self {
        self.share_x_axis = share_x_axis;
        self
    }

    #[must_use]
    pub fn contains_series(&self, series_index: usize) -> bool {
        self.series.contains(&series_index)
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.name.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "pane name must not be empty".to_owned(),
            ));
        }
        if !self.height_ratio.is_finite() || self.height_ratio <= 0.0 {
            return Err(ChartError::InvalidData(format!(
                "pane `{}` height ratio must be finite and > 0",
                self.name
            )));
        }
        Ok(())
    }
}

/// Pixel band assigned to one pane.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaneRegion {
    pub name: String,
    pub bounds: Rect,
}

/// Splits `plot_area` top-to-bottom by normalized `ratios`.
///
/// The last band absorbs floating-point remainder so bands tile exactly.
pub(crate) fn partition_plot_height(plot_area: Rect, ratios: &[f64]) -> Vec<Rect> {
    if ratios.is_empty() {
        return Vec::new();
    }

    let top = plot_area.y;
    let bottom = plot_area.bottom();
    let total_height = plot_area.height.max(0.0);
    if total_height <= 0.0 {
        return ratios
            .iter()
            .map(|_| Rect::new(plot_area.x, top, plot_area.width, 0.0))
            .collect();
    }

    let weight_sum: f64 = ratios.iter().sum();
    let last_index = ratios.len() - 1;
    let mut cursor = top;
    let mut bands = Vec::with_capacity(ratios.len());
    for (index, ratio) in ratios.iter().enumerate() {
        let next_bottom = if index == last_index {
            bottom
        } else {
            (cursor + total_height * ratio / weight_sum).clamp(cursor, bottom)
        };
        bands.push(Rect::new(
            plot_area.x,
            cursor,
            plot_area.width,
            next_bottom - cursor,
        ));
        cursor = next_bottom;
    }
    bands
}
