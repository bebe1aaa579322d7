mod point;
mod rectangle;
mod size;

pub use point::Point;
pub use rectangle::Rectangle;
pub use size::Size;
