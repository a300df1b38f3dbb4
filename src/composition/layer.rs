use serde::{Deserialize, Serialize};

use super::ChartAnnotation;

/// Variants are ordered by paint order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum AnnotationZOrder {
    BelowSeries,
    #[default]
    AboveSeries,
}

/// Named group of annotations sharing a z-order and pane filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationLayer {
    pub name: String,
    #[serde(default)]
    pub z_order: AnnotationZOrder,
    /// Pane names this layer draws in; empty means every pane.
    #[serde(default)]
    pub panes: Vec<String>,
    #[serde(default)]
    pub annotations: Vec<ChartAnnotation>,
}

impl AnnotationLayer {
    #[must_use]
    pub fn new(name: impl Into<String>, z_order: AnnotationZOrder) -> Self {
        Self {
            name: name.into(),
            z_order,
            panes: Vec::new(),
            annotations: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_pane(mut self, pane: impl Into<String>) -> Self {
        self.panes.push(pane.into());
        self
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: ChartAnnotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    #[must_use]
    pub fn applies_to(&self, pane: &str) -> bool {
        self.panes.is_empty() || self.panes.iter().any(|name| name == pane)
    }

    /// Annotations of this layer that land in `pane`.
    pub fn annotations_for_pane<'a>(
        &'a self,
        pane: &'a str,
    ) -> impl Iterator<Item = &'a ChartAnnotation> + 'a {
        let applies = self.applies_to(pane);
        self.annotations
            .iter()
            .filter(move |annotation| applies && annotation.targets(pane))
    }
}
