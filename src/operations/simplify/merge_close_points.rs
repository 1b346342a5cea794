use tracing::trace;

use crate::geometry::Polyline;
use crate::math::vec2::midpoint;
use crate::math::Vec2;

/// Merging only starts once the output of a pass holds more than this many
/// points.
const PROTECTED_POINTS: usize = 2;

/// Collapses consecutive points closer than a threshold until none are left.
///
/// # Algorithm
///
/// Each pass walks the current points. A point `c` whose distance to its
/// predecessor `last` *in the pass input* is at most `threshold` replaces the
/// most recent output point with the midpoint of `c` and `last`; every other
/// point is appended. Passes repeat until one makes no change.
///
/// The distance is always taken against the input predecessor, not against
/// the output point that may already have moved, so long runs of close points
/// can drift. The first [`PROTECTED_POINTS`] outputs of a pass are never
/// replaced.
///
/// Every merge removes exactly one point, so the iteration terminates after at
/// most `len + 1` passes.
#[derive(Debug, Clone, Copy)]
pub struct MergeClosePoints {
    threshold: f64,
}

impl MergeClosePoints {
    /// Creates a new `MergeClosePoints` operation.
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold }
    }

    /// Simplifies `polyline` in place, returning the number of passes run.
    pub fn execute(&self, polyline: &mut Polyline) -> usize {
        if polyline.is_empty() {
            return 0;
        }

        let mut passes = 0;
        loop {
            passes += 1;
            let (result, changed) = self.merge_pass(polyline.points());
            polyline.replace_points(result);
            if !changed {
                break;
            }
        }
        trace!(passes, points = polyline.len(), "merge converged");
        passes
    }

    /// Runs a single pass, returning the new points and whether any merged.
    fn merge_pass(&self, points: &[Vec2]) -> (Vec<Vec2>, bool) {
        let mut result = Vec::with_capacity(points.len());
        result.push(points[0]);
        let mut changed = false;

        for pair in points.windows(2) {
            let (last, c) = (&pair[0], &pair[1]);
            let close = (c - last).magnitude() <= self.threshold;
            if close && result.len() > PROTECTED_POINTS {
                if let Some(tail) = result.last_mut() {
                    *tail = midpoint(c, last);
                }
                changed = true;
            } else {
                result.push(*c);
            }
        }

        (result, changed)
    }
}
