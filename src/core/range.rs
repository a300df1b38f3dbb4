use serde::{Deserialize, Serialize};

/// Ordered `(start, end)` pair describing a scale domain.
///
/// `start` may be greater than `end`; scales keep the declared direction while
/// [`DomainRange::normalize`] always yields `(min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DomainRange<T> {
    pub start: T,
    pub end: T,
}

impl<T> DomainRange<T> {
    #[must_use]
    pub const fn new(start: T, end: T) -> Self {
        Self { start, end }
    }
}

impl<T: PartialOrd + Clone> DomainRange<T> {
    #[must_use]
    pub fn normalize(&self) -> (T, T) {
        if self.start <= self.end {
            (self.start.clone(), self.end.clone())
        } else {
            (self.end.clone(), self.start.clone())
        }
    }

    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        let (min, max) = self.normalize();
        *value >= min && *value <= max
    }
}

impl<T> From<(T, T)> for DomainRange<T> {
    fn from((start, end): (T, T)) -> Self {
        Self::new(start, end)
    }
}
