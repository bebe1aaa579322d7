pub mod error;
pub mod geometry;
pub mod math;

pub use error::{GeometryError, PlanformError, Result};
pub use geometry::{Point, Rectangle, Size};
