use crate::math::{Complex, Vec2};

use super::{subdivided_length, to_complex, Curve};

/// A cubic Bézier curve defined by four control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    pub p0: Vec2,
    pub p1: Vec2,
    pub p2: Vec2,
    pub p3: Vec2,
}

impl CubicBezier {
    /// Creates a new cubic Bézier curve.
    #[must_use]
    pub fn new(p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Self {
        Self { p0, p1, p2, p3 }
    }
}

impl Curve for CubicBezier {
    fn point(&self, t: f64) -> Complex {
        let mt = 1.0 - t;
        let a = mt * mt * mt;
        let b = 3.0 * mt * mt * t;
        let c = 3.0 * mt * t * t;
        let d = t * t * t;
        to_complex(self.p0 * a + self.p1 * b + self.p2 * c + self.p3 * d)
    }

    fn length(&self) -> f64 {
        subdivided_length(self)
    }
}

/// A quadratic Bézier curve defined by three control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticBezier {
    pub p0: Vec2,
    pub p1: Vec2,
    pub p2: Vec2,
}

impl QuadraticBezier {
    /// Creates a new quadratic Bézier curve.
    #[must_use]
    pub fn new(p0: Vec2, p1: Vec2, p2: Vec2) -> Self {
        Self { p0, p1, p2 }
    }
}

impl Curve for QuadraticBezier {
    fn point(&self, t: f64) -> Complex {
        let mt = 1.0 - t;
        to_complex(self.p0 * (mt * mt) + self.p1 * (2.0 * mt * t) + self.p2 * (t * t))
    }

    fn length(&self) -> f64 {
        subdivided_length(self)
    }
}
