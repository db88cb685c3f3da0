pub use outline::Outline;
pub use point::Point;
pub use segment::Segment;
pub use spline::Spline;

mod outline;
mod point;
mod segment;
mod spline;
