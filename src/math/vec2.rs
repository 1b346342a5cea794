//! Planar vector helpers layered on top of [`Vec2`].
//!
//! Addition, subtraction, scaling and `magnitude()` come from nalgebra
//! directly; this trait adds the degenerate-safe normalization and the
//! quarter-turn rotations the outline code relies on.

use super::{Complex, Vec2};

/// Direction returned by [`PlanarVector::normal`] for a zero-length vector.
pub const ZERO_NORMAL_FALLBACK: Vec2 = Vec2::new(0.5, 0.5);

/// Planar operations on [`Vec2`].
pub trait PlanarVector: Sized {
    /// Builds a vector from a complex number (`re` → x, `im` → y).
    fn from_complex(c: Complex) -> Self;

    /// Unit vector in the same direction.
    ///
    /// A vector of exactly zero length has no direction; it maps to
    /// [`ZERO_NORMAL_FALLBACK`] instead of dividing by zero.
    #[must_use]
    fn normal(&self) -> Self;

    /// Quarter turn `(x, y) → (-y, x)`.
    #[must_use]
    fn rotate_neg90(&self) -> Self;

    /// Quarter turn `(x, y) → (y, -x)`.
    #[must_use]
    fn rotate_pos90(&self) -> Self;
}

impl PlanarVector for Vec2 {
    fn from_complex(c: Complex) -> Self {
        Vec2::new(c.re, c.im)
    }

    #[allow(clippy::float_cmp)]
    fn normal(&self) -> Self {
        let m = self.magnitude();
        if m == 0.0 {
            ZERO_NORMAL_FALLBACK
        } else {
            Vec2::new(self.x / m, self.y / m)
        }
    }

    fn rotate_neg90(&self) -> Self {
        Vec2::new(-self.y, self.x)
    }

    fn rotate_pos90(&self) -> Self {
        Vec2::new(self.y, -self.x)
    }
}

/// Midpoint of two points.
#[must_use]
pub fn midpoint(a: &Vec2, b: &Vec2) -> Vec2 {
    (a + b) * 0.5
}
