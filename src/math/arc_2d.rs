/// 2D elliptical arc math utilities.
///
/// SVG describes arcs by their endpoints plus radii, x-axis rotation and the
/// large-arc / sweep flags. Evaluation is easier in center form, so
/// [`arc_center_from_endpoints`] performs the conversion from the SVG
/// implementation notes (F.6.5 / F.6.6).
use std::f64::consts::TAU;

use super::{Vec2, TOLERANCE};

/// An elliptical arc in center parameterization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CenterArc {
    pub center: Vec2,
    /// Semi-axes `(rx, ry)`, already scaled up if the endpoints required it.
    pub radii: Vec2,
    /// Rotation of the ellipse x-axis, in radians.
    pub rotation: f64,
    /// Start angle, in radians.
    pub start_angle: f64,
    /// Signed sweep, in radians. Positive sweeps run toward increasing angle.
    pub sweep: f64,
}

/// Converts an SVG endpoint-parameterized arc to center form.
///
/// `x_axis_rotation` is in degrees, as written in path data.
/// Returns `None` when the arc degenerates into a straight line: a zero
/// radius, or an end point exactly equal to the start point.
#[must_use]
pub fn arc_center_from_endpoints(
    start: Vec2,
    end: Vec2,
    rx: f64,
    ry: f64,
    x_axis_rotation: f64,
    large_arc: bool,
    sweep: bool,
) -> Option<CenterArc> {
    let mut rx = rx.abs();
    let mut ry = ry.abs();
    if rx < TOLERANCE || ry < TOLERANCE {
        return None;
    }
    if end == start {
        return None;
    }

    let phi = x_axis_rotation.to_radians();
    let (sin_phi, cos_phi) = phi.sin_cos();

    // Step 1: midpoint-relative start point in the ellipse frame.
    let half = (start - end) * 0.5;
    let x1p = cos_phi * half.x + sin_phi * half.y;
    let y1p = -sin_phi * half.x + cos_phi * half.y;

    // Radii too small to span the endpoints are scaled up uniformly.
    let lambda = (x1p * x1p) / (rx * rx) + (y1p * y1p) / (ry * ry);
    if lambda > 1.0 {
        let s = lambda.sqrt();
        rx *= s;
        ry *= s;
    }

    // Step 2: center in the ellipse frame.
    let rx2 = rx * rx;
    let ry2 = ry * ry;
    let num = rx2 * ry2 - rx2 * y1p * y1p - ry2 * x1p * x1p;
    let den = rx2 * y1p * y1p + ry2 * x1p * x1p;
    let mut coef = if den > 0.0 { (num / den).max(0.0).sqrt() } else { 0.0 };
    if large_arc == sweep {
        coef = -coef;
    }
    let cxp = coef * rx * y1p / ry;
    let cyp = -coef * ry * x1p / rx;

    // Step 3: back to user space.
    let mid = (start + end) * 0.5;
    let center = Vec2::new(
        cos_phi * cxp - sin_phi * cyp + mid.x,
        sin_phi * cxp + cos_phi * cyp + mid.y,
    );

    // Step 4: angles.
    let u = Vec2::new((x1p - cxp) / rx, (y1p - cyp) / ry);
    let v = Vec2::new((-x1p - cxp) / rx, (-y1p - cyp) / ry);
    let start_angle = u.y.atan2(u.x);
    let mut delta = (u.x * v.y - u.y * v.x).atan2(u.x * v.x + u.y * v.y);
    if sweep && delta < 0.0 {
        delta += TAU;
    } else if !sweep && delta > 0.0 {
        delta -= TAU;
    }

    Some(CenterArc {
        center,
        radii: Vec2::new(rx, ry),
        rotation: phi,
        start_angle,
        sweep: delta,
    })
}

/// Evaluates a point on a center-form arc at parameter `t` in `[0, 1]`.
#[must_use]
pub fn arc_point_at(arc: &CenterArc, t: f64) -> Vec2 {
    let angle = arc.start_angle + arc.sweep * t;
    let (sin_a, cos_a) = angle.sin_cos();
    let (sin_r, cos_r) = arc.rotation.sin_cos();
    let x = arc.radii.x * cos_a;
    let y = arc.radii.y * sin_a;
    Vec2::new(
        cos_r * x - sin_r * y + arc.center.x,
        sin_r * x + cos_r * y + arc.center.y,
    )
}
