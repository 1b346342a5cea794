pub mod arc_2d;
pub mod vec2;

pub use vec2::PlanarVector;

/// 2D vector type, also used for points in the plane.
pub type Vec2 = nalgebra::Vector2<f64>;

/// Complex number type used by curve evaluators (`re` = x, `im` = y).
pub type Complex = nalgebra::Complex<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
