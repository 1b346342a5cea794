mod arc;
mod bezier;
mod line;

pub use arc::EllipticalArc;
pub use bezier::{CubicBezier, QuadraticBezier};
pub use line::Line;

use crate::math::{Complex, PlanarVector, Vec2};

/// Refinement stops once splitting a span gains at most this much length.
const LENGTH_ERROR: f64 = 1e-9;

/// Spans are always split at least this many times.
const LENGTH_MIN_DEPTH: u32 = 5;

/// Hard cap on the subdivision depth.
const LENGTH_MAX_DEPTH: u32 = 20;

/// Trait for parametric path curves in the plane.
///
/// Points come back as complex numbers (`re` = x, `im` = y); convert with
/// [`PlanarVector::from_complex`].
pub trait Curve {
    /// Evaluates the curve at parameter `t` in `[0, 1]`.
    fn point(&self, t: f64) -> Complex;

    /// Returns the (possibly estimated) arc length of the curve.
    fn length(&self) -> f64;
}

/// Estimates the arc length of `curve` by recursive midpoint refinement.
///
/// Each span `[t0, t1]` is compared against the two chords through its
/// midpoint; spans keep splitting until the two-chord length exceeds the
/// single chord by at most [`LENGTH_ERROR`].
pub(crate) fn subdivided_length<C: Curve + ?Sized>(curve: &C) -> f64 {
    let p0 = Vec2::from_complex(curve.point(0.0));
    let p1 = Vec2::from_complex(curve.point(1.0));
    span_length(curve, 0.0, 1.0, p0, p1, 0)
}

fn span_length<C: Curve + ?Sized>(
    curve: &C,
    t0: f64,
    t1: f64,
    p0: Vec2,
    p1: Vec2,
    depth: u32,
) -> f64 {
    let t_mid = (t0 + t1) * 0.5;
    let p_mid = Vec2::from_complex(curve.point(t_mid));
    let chord = (p1 - p0).magnitude();
    let refined = (p_mid - p0).magnitude() + (p1 - p_mid).magnitude();

    let keep_going = depth < LENGTH_MIN_DEPTH || refined - chord > LENGTH_ERROR;
    if keep_going && depth < LENGTH_MAX_DEPTH {
        span_length(curve, t0, t_mid, p0, p_mid, depth + 1)
            + span_length(curve, t_mid, t1, p_mid, p1, depth + 1)
    } else {
        refined
    }
}

/// Converts a planar point into the complex form curves return.
pub(crate) fn to_complex(p: Vec2) -> Complex {
    Complex::new(p.x, p.y)
}
