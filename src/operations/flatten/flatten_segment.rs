use tracing::warn;

use crate::geometry::{Curve, Polyline, Segment};
use crate::math::{PlanarVector, Vec2};

/// Fewest samples taken from any drawable segment (its two endpoints).
const MIN_SAMPLES: usize = 2;

/// Number of samples for a curve of the given arc length: one per whole
/// unit of length plus both endpoints.
#[must_use]
pub fn sample_count(length: f64) -> usize {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = length.floor() as usize;
    whole.saturating_add(2).max(MIN_SAMPLES)
}

/// Samples one path segment into evenly spaced points.
///
/// Lines, cubic Béziers and arcs are sampled at `sample_count(length)`
/// parameters spread over `[0, 1]` inclusive. Moves and closes contribute no
/// points. Any other segment kind is logged and skipped.
#[derive(Debug)]
pub struct FlattenSegment<'a> {
    segment: &'a Segment,
}

impl<'a> FlattenSegment<'a> {
    /// Creates a new `FlattenSegment` operation.
    #[must_use]
    pub fn new(segment: &'a Segment) -> Self {
        Self { segment }
    }

    /// Appends the samples to `polyline`, returning how many were produced.
    pub fn execute(&self, polyline: &mut Polyline) -> usize {
        match self.segment {
            Segment::Move { .. } | Segment::Close { .. } => 0,
            Segment::Line(line) => sample_into(line, polyline),
            Segment::CubicBezier(cubic) => sample_into(cubic, polyline),
            Segment::Arc(arc) => sample_into(arc, polyline),
            other @ Segment::QuadraticBezier(_) => {
                warn!(kind = other.kind(), "unsupported segment type, skipping");
                0
            }
        }
    }
}

fn sample_into<C: Curve>(curve: &C, polyline: &mut Polyline) -> usize {
    let n = sample_count(curve.length());
    #[allow(clippy::cast_precision_loss)]
    let last = (n - 1) as f64;
    for i in 0..n {
        #[allow(clippy::cast_precision_loss)]
        let t = i as f64 / last;
        polyline.push(Vec2::from_complex(curve.point(t)));
    }
    n
}
