use crate::math::Vec2;

/// An ordered sequence of connected points.
///
/// Insertion order defines connectivity; duplicates and near-duplicates are
/// allowed. Once closed, the polyline no longer accepts appended points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    points: Vec<Vec2>,
    closed: bool,
}

impl Polyline {
    /// Creates an empty, open polyline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an open polyline from existing points.
    #[must_use]
    pub fn from_points(points: Vec<Vec2>) -> Self {
        Self {
            points,
            closed: false,
        }
    }

    /// Appends a point. Silently ignored when the polyline is closed.
    pub fn push(&mut self, p: Vec2) {
        if self.closed {
            return;
        }
        self.points.push(p);
    }

    /// Replaces all points at once and marks the polyline closed.
    pub fn close_with(&mut self, points: Vec<Vec2>) {
        self.points = points;
        self.closed = true;
    }

    /// Replaces all points at once, keeping the closed flag as is.
    pub fn replace_points(&mut self, points: Vec<Vec2>) {
        self.points = points;
    }

    /// Returns the points in order.
    #[must_use]
    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Returns whether the polyline has been closed.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Returns the number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns whether the polyline has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
