use crate::math::arc_2d::{arc_point_at, CenterArc};
use crate::math::Complex;

use super::{subdivided_length, to_complex, Curve};

/// An elliptical arc in center parameterization.
///
/// `P(t)` sweeps from `start_angle` to `start_angle + sweep` around the
/// center, with the ellipse x-axis rotated by `rotation`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EllipticalArc {
    geometry: CenterArc,
}

impl EllipticalArc {
    /// Creates a new arc from its center-form description.
    #[must_use]
    pub fn new(geometry: CenterArc) -> Self {
        Self { geometry }
    }
}

impl Curve for EllipticalArc {
    fn point(&self, t: f64) -> Complex {
        to_complex(arc_point_at(&self.geometry, t))
    }

    fn length(&self) -> f64 {
        let g = &self.geometry;
        if (g.radii.x - g.radii.y).abs() < crate::math::TOLERANCE {
            // Circular: exact.
            g.radii.x * g.sweep.abs()
        } else {
            subdivided_length(self)
        }
    }
}
