use crate::math::Vec2;

use super::curve::{CubicBezier, EllipticalArc, Line, QuadraticBezier};

/// One drawing primitive of an SVG path.
///
/// Coordinates are absolute; relative and shorthand commands are resolved
/// while parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    /// Starts a new subpath at `to`.
    Move { to: Vec2 },
    Line(Line),
    CubicBezier(CubicBezier),
    QuadraticBezier(QuadraticBezier),
    Arc(EllipticalArc),
    /// Returns from `from` to the start of the subpath at `to`.
    Close { from: Vec2, to: Vec2 },
}

impl Segment {
    /// Short name of the segment kind, for logging.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Move { .. } => "move",
            Self::Line(_) => "line",
            Self::CubicBezier(_) => "cubic-bezier",
            Self::QuadraticBezier(_) => "quadratic-bezier",
            Self::Arc(_) => "arc",
            Self::Close { .. } => "close",
        }
    }
}
