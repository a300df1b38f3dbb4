use std::any::Any;
use std::fmt;
use std::sync::Arc;

use crate::core::scale::checked_unit;
use crate::core::{DomainRange, Scale, ScaleKind};
use crate::error::{ChartError, ChartResult};

/// Equality used to match values against ordinal categories.
pub type CategoryComparer<T> = Arc<dyn Fn(&T, &T) -> bool + Send + Sync>;

/// Discrete scale over a fixed, ordered list of unique categories.
///
/// Category `i` of `n` sits at `i / (n - 1)`; a single category sits at `0`.
#[derive(Clone)]
pub struct OrdinalScale<T> {
    categories: Vec<T>,
    domain: DomainRange<T>,
    comparer: CategoryComparer<T>,
}

impl<T> OrdinalScale<T>
where
    T: Clone + PartialEq + fmt::Debug + Send + Sync + 'static,
{
    pub fn new(categories: impl IntoIterator<Item = T>) -> ChartResult<Self> {
        Self::with_comparer(categories, Arc::new(|left: &T, right: &T| left == right))
    }
}

impl<T> OrdinalScale<T>
where
    T: Clone + fmt::Debug + Send + Sync + 'static,
{
    pub fn with_comparer(
        categories: impl IntoIterator<Item = T>,
        comparer: CategoryComparer<T>,
    ) -> ChartResult<Self> {
        let categories: Vec<T> = categories.into_iter().collect();
        let (Some(first), Some(last)) = (categories.first(), categories.last()) else {
            return Err(ChartError::InvalidData(
                "ordinal scale requires at least one category".to_owned(),
            ));
        };

        for (index, category) in categories.iter().enumerate() {
            if categories[..index]
                .iter()
                .any(|previous| comparer(previous, category))
            {
                return Err(ChartError::InvalidData(format!(
                    "ordinal category {category:?} is declared more than once"
                )));
            }
        }

        Ok(Self {
            domain: DomainRange::new(first.clone(), last.clone()),
            categories,
            comparer,
        })
    }

    #[must_use]
    pub fn categories(&self) -> &[T] {
        &self.categories
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    #[must_use]
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.categories
            .iter()
            .position(|category| (self.comparer)(category, value))
    }

    #[must_use]
    pub fn unit_for_index(&self, index: usize) -> f64 {
        if self.categories.len() <= 1 {
            return 0.0;
        }
        index as f64 / (self.categories.len() - 1) as f64
    }
}

impl<T> Scale for OrdinalScale<T>
where
    T: Clone + fmt::Debug + Send + Sync + 'static,
{
    type Domain = T;

    fn kind(&self) -> ScaleKind {
        ScaleKind::Ordinal
    }

    fn clamp_to_domain(&self) -> bool {
        true
    }

    fn domain(&self) -> &DomainRange<T> {
        &self.domain
    }

    fn project(&self, value: &T) -> ChartResult<f64> {
        self.index_of(value)
            .map(|index| self.unit_for_index(index))
            .ok_or_else(|| ChartError::CategoryNotFound(format!("{value:?}")))
    }

    fn try_project(&self, value: &T) -> Option<f64> {
        self.index_of(value).map(|index| self.unit_for_index(index))
    }

    fn unproject(&self, unit: f64) -> ChartResult<T> {
        let unit = checked_unit(unit, true)?;
        let last_index = self.categories.len().saturating_sub(1);
        let index = ((unit * last_index as f64).round() as usize).min(last_index);
        Ok(self.categories[index].clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl<T: fmt::Debug> fmt::Debug for OrdinalScale<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrdinalScale")
            .field("categories", &self.categories)
            .finish_non_exhaustive()
    }
}
