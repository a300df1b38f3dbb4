use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::trace;

use crate::core::{Scale, ScaleKind};
use crate::error::{ChartError, ChartResult};

use super::{AxisTick, LinearTickGenerator, OrdinalTickGenerator, TickGenerator, TimeTickGenerator};

struct RegisteredGenerator {
    domain_type: &'static str,
    // Holds an `Arc<dyn TickGenerator<T>>` for the keyed domain type.
    generator: Box<dyn Any + Send + Sync>,
}

/// Resolves tick generators by `(ScaleKind, domain type)`.
///
/// Lookups never fall back to another generator: an unregistered pair is an
/// error.
#[derive(Default)]
pub struct TickGeneratorRegistry {
    generators: HashMap<(ScaleKind, TypeId), RegisteredGenerator>,
}

impl TickGeneratorRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry wired for the built-in scales.
    ///
    /// Ordinal generators are registered for `String` and `&'static str`
    /// categories; other category types go through [`Self::register_ordinal`].
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register::<f64, _>(ScaleKind::Linear, LinearTickGenerator);
        registry.register::<f64, _>(ScaleKind::Logarithmic, LinearTickGenerator);
        registry.register::<DateTime<Utc>, _>(ScaleKind::Time, TimeTickGenerator);
        registry.register_ordinal::<String>();
        registry.register_ordinal::<&'static str>();
        registry
    }

    /// Registers (or replaces) the generator for `(kind, T)`.
    pub fn register<T, G>(&mut self, kind: ScaleKind, generator: G)
    where
        T: 'static,
        G: TickGenerator<T> + 'static,
    {
        let generator: Arc<dyn TickGenerator<T>> = Arc::new(generator);
        self.generators.insert(
            (kind, TypeId::of::<T>()),
            RegisteredGenerator {
                domain_type: type_name::<T>(),
                generator: Box::new(generator),
            },
        );
    }

    pub fn register_ordinal<T>(&mut self)
    where
        T: Clone + fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        self.register::<T, _>(ScaleKind::Ordinal, OrdinalTickGenerator::<T>::new());
    }

    #[must_use]
    pub fn contains<T: 'static>(&self, kind: ScaleKind) -> bool {
        self.generators.contains_key(&(kind, TypeId::of::<T>()))
    }

    pub fn resolve<T: 'static>(&self, kind: ScaleKind) -> ChartResult<Arc<dyn TickGenerator<T>>> {
        self.generators
            .get(&(kind, TypeId::of::<T>()))
            .and_then(|entry| {
                entry
                    .generator
                    .downcast_ref::<Arc<dyn TickGenerator<T>>>()
                    .cloned()
            })
            .ok_or(ChartError::MissingTickGenerator {
                kind,
                domain_type: type_name::<T>(),
            })
    }

    /// Resolves the generator for `scale` and runs it.
    pub fn generate<T: 'static>(
        &self,
        scale: &dyn Scale<Domain = T>,
        target_count: usize,
    ) -> ChartResult<Vec<AxisTick<T>>> {
        let generator = self.resolve::<T>(scale.kind())?;
        let ticks = generator.generate(scale, target_count)?;
        trace!(
            kind = ?scale.kind(),
            domain_type = scale.domain_type(),
            count = ticks.len(),
            "resolved tick generator"
        );
        Ok(ticks)
    }
}

impl fmt::Debug for TickGeneratorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<(ScaleKind, &'static str)> = self
            .generators
            .iter()
            .map(|((kind, _), entry)| (*kind, entry.domain_type))
            .collect();
        entries.sort_by(|left, right| {
            format!("{:?}", left.0)
                .cmp(&format!("{:?}", right.0))
                .then(left.1.cmp(right.1))
        });
        f.debug_struct("TickGeneratorRegistry")
            .field("generators", &entries)
            .finish()
    }
}
