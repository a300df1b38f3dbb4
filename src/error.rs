use thiserror::Error;

use crate::core::ScaleKind;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("category `{0}` is not part of the ordinal domain")]
    CategoryNotFound(String),

    #[error("no tick generator registered for {kind:?} scale over `{domain_type}`")]
    MissingTickGenerator {
        kind: ScaleKind,
        domain_type: &'static str,
    },

    #[error("tick generator expects {expected}, got a {found:?} scale")]
    IncompatibleScale {
        expected: &'static str,
        found: ScaleKind,
    },
}
