use crate::math::{Complex, Vec2};

use super::{to_complex, Curve};

/// A straight segment between two points.
///
/// The parametric form is: `P(t) = start + t * (end - start)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    start: Vec2,
    end: Vec2,
}

impl Line {
    /// Creates a new line segment.
    #[must_use]
    pub fn new(start: Vec2, end: Vec2) -> Self {
        Self { start, end }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Vec2 {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Vec2 {
        &self.end
    }
}

impl Curve for Line {
    fn point(&self, t: f64) -> Complex {
        to_complex(self.start + (self.end - self.start) * t)
    }

    fn length(&self) -> f64 {
        (self.end - self.start).magnitude()
    }
}
