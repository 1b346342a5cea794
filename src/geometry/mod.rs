pub mod curve;
pub mod polygon;
pub mod polyline;
pub mod segment;

pub use curve::{CubicBezier, Curve, EllipticalArc, Line, QuadraticBezier};
pub use polygon::Polygon;
pub use polyline::Polyline;
pub use segment::Segment;
