//! Declarative pane and annotation graph handed to a renderer.
//!
//! Building a composition computes no geometry beyond the optional pane
//! band partition; snap flags and z-order are resolved downstream.

mod annotation;
mod layer;
mod pane;

pub use annotation::{
    AnnotationKind, CalloutAnnotation, ChartAnnotation, GradientZoneAnnotation,
    HorizontalLineAnnotation, SnapMode, TimeRangeAnnotation, ValueZoneAnnotation,
    VerticalLineAnnotation,
};
pub use layer::{AnnotationLayer, AnnotationZOrder};
pub use pane::{PaneDefinition, PaneRegion};

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::debug;

use crate::core::Rect;
use crate::error::{ChartError, ChartResult};

/// Immutable set of named panes plus annotation layers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartComposition {
    panes: IndexMap<String, PaneDefinition>,
    primary_pane: String,
    layers: Vec<AnnotationLayer>,
}

impl ChartComposition {
    #[must_use]
    pub fn builder() -> ChartCompositionBuilder {
        ChartCompositionBuilder::default()
    }

    /// Panes in declaration order.
    pub fn panes(&self) -> impl Iterator<Item = &PaneDefinition> {
        self.panes.values()
    }

    #[must_use]
    pub fn pane_count(&self) -> usize {
        self.panes.len()
    }

    #[must_use]
    pub fn pane(&self, name: &str) -> Option<&PaneDefinition> {
        self.panes.get(name)
    }

    #[must_use]
    pub fn primary_pane_name(&self) -> &str {
        &self.primary_pane
    }

    #[must_use]
    pub fn primary_pane(&self) -> Option<&PaneDefinition> {
        self.panes.get(&self.primary_pane)
    }

    #[must_use]
    pub fn layers(&self) -> &[AnnotationLayer] {
        &self.layers
    }

    #[must_use]
    pub fn layer(&self, name: &str) -> Option<&AnnotationLayer> {
        self.layers.iter().find(|layer| layer.name == name)
    }

    /// First pane hosting `series_index`.
    #[must_use]
    pub fn pane_for_series(&self, series_index: usize) -> Option<&PaneDefinition> {
        self.panes
            .values()
            .find(|pane| pane.contains_series(series_index))
    }

    /// Layers drawn in `pane`: below-series layers first, then above, each
    /// group in declaration order.
    #[must_use]
    pub fn layers_for_pane(&self, pane: &str) -> Vec<&AnnotationLayer> {
        if !self.panes.contains_key(pane) {
            return Vec::new();
        }
        let mut layers: Vec<&AnnotationLayer> = self
            .layers
            .iter()
            .filter(|layer| layer.applies_to(pane))
            .collect();
        // Stable sort keeps declaration order inside each z-order group.
        layers.sort_by_key(|layer| layer.z_order);
        layers
    }

    /// Splits `plot_area` into one horizontal band per pane.
    pub fn pane_regions(&self, plot_area: Rect) -> ChartResult<Vec<PaneRegion>> {
        let plot_area = plot_area.validate()?;
        let ratios: Vec<f64> = self.panes.values().map(|pane| pane.height_ratio).collect();
        let bands = pane::partition_plot_height(plot_area, &ratios);
        Ok(self
            .panes
            .keys()
            .zip(bands)
            .map(|(name, bounds)| PaneRegion {
                name: name.clone(),
                bounds,
            })
            .collect())
    }

    #[must_use]
    pub fn annotation_count(&self) -> usize {
        self.layers.iter().map(|layer| layer.annotations.len()).sum()
    }
}

/// Collects panes and layers, then validates them as a whole in [`build`].
///
/// [`build`]: ChartCompositionBuilder::build
#[derive(Debug, Clone, Default)]
pub struct ChartCompositionBuilder {
    panes: Vec<PaneDefinition>,
    primary_pane: Option<String>,
    layers: Vec<AnnotationLayer>,
}

impl ChartCompositionBuilder {
    #[must_use]
    pub fn pane(mut self, pane: PaneDefinition) -> Self {
        self.panes.push(pane);
        self
    }

    /// Overrides the primary pane; defaults to the first declared pane.
    #[must_use]
    pub fn primary_pane(mut self, name: impl Into<String>) -> Self {
        self.primary_pane = Some(name.into());
        self
    }

    #[must_use]
    pub fn layer(mut self, layer: AnnotationLayer) -> Self {
        self.layers.push(layer);
        self
    }

    pub fn build(self) -> ChartResult<ChartComposition> {
        if self.panes.is_empty() {
            return Err(ChartError::InvalidData(
                "composition requires at least one pane".to_owned(),
            ));
        }

        let mut panes = IndexMap::with_capacity(self.panes.len());
        let mut claimed_series = HashSet::new();
        for pane in self.panes {
            pane.validate()?;
            if let Some(series_index) = pane
                .series
                .iter()
                .find(|index| !claimed_series.insert(**index))
            {
                return Err(ChartError::InvalidData(format!(
                    "series {series_index} is assigned to more than one pane"
                )));
            }
            if panes.contains_key(&pane.name) {
                return Err(ChartError::InvalidData(format!(
                    "duplicate pane name `{}`",
                    pane.name
                )));
            }
            panes.insert(pane.name.clone(), pane);
        }

        let primary_pane = match self.primary_pane {
            Some(name) if panes.contains_key(&name) => name,
            Some(name) => {
                return Err(ChartError::InvalidData(format!(
                    "primary pane `{name}` is not declared"
                )));
            }
            None => panes
                .keys()
                .next()
                .cloned()
                .ok_or_else(|| ChartError::InvalidData("composition has no panes".to_owned()))?,
        };

        let mut layer_names = HashSet::with_capacity(self.layers.len());
        for layer in &self.layers {
            if layer.name.trim().is_empty() {
                return Err(ChartError::InvalidData(
                    "annotation layer name must not be empty".to_owned(),
                ));
            }
            if !layer_names.insert(layer.name.as_str()) {
                return Err(ChartError::InvalidData(format!(
                    "duplicate annotation layer name `{}`",
                    layer.name
                )));
            }
            for pane in &layer.panes {
                if !panes.contains_key(pane) {
                    return Err(ChartError::InvalidData(format!(
                        "layer `{}` filters on undeclared pane `{pane}`",
                        layer.name
                    )));
                }
            }
            for annotation in &layer.annotations {
                annotation.validate()?;
                if let Some(target) = annotation.target_pane() {
                    if !panes.contains_key(target) {
                        return Err(ChartError::InvalidData(format!(
                            "annotation in layer `{}` targets undeclared pane `{target}`",
                            layer.name
                        )));
                    }
                }
            }
        }

        let composition = ChartComposition {
            panes,
            primary_pane,
            layers: self.layers,
        };
        debug!(
            pane_count = composition.pane_count(),
            layer_count = composition.layers.len(),
            annotation_count = composition.annotation_count(),
            primary_pane = %composition.primary_pane,
            "built chart composition"
        );
        Ok(composition)
    }
}
