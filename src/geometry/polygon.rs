use crate::math::Vec2;

use super::Polyline;

/// A closed outline ready for output.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    outline: Polyline,
}

impl Polygon {
    /// Wraps `points` into a closed polygon.
    #[must_use]
    pub fn new(points: Vec<Vec2>) -> Self {
        let mut outline = Polyline::new();
        outline.close_with(points);
        Self { outline }
    }

    /// Returns the vertices in order.
    #[must_use]
    pub fn points(&self) -> &[Vec2] {
        self.outline.points()
    }

    /// A polygon with fewer than 2 points has nothing to render.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.outline.len() < 2
    }
}
