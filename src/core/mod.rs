pub mod log_scale;
pub mod ordinal_scale;
pub mod primitives;
pub mod range;
pub mod scale;
pub mod time_scale;
pub mod types;

pub use log_scale::{DEFAULT_LOG_BASE, LogarithmicScale};
pub use ordinal_scale::{CategoryComparer, OrdinalScale};
pub use range::DomainRange;
pub use scale::{LinearScale, Scale, ScaleKind};
pub use time_scale::TimeScale;
pub use types::{Point, Rect, Viewport};
