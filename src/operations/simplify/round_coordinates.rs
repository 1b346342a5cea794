use crate::geometry::Polyline;
use crate::math::Vec2;

/// Rounds every coordinate of a polyline to a fixed number of decimals.
#[derive(Debug, Clone, Copy)]
pub struct RoundCoordinates {
    decimals: u32,
}

impl RoundCoordinates {
    /// Creates a new `RoundCoordinates` operation.
    #[must_use]
    pub fn new(decimals: u32) -> Self {
        Self { decimals }
    }

    /// Replaces the points of `polyline` with their rounded values.
    pub fn execute(&self, polyline: &mut Polyline) {
        #[allow(clippy::cast_possible_wrap)]
        let factor = 10f64.powi(self.decimals as i32);
        let rounded = polyline
            .points()
            .iter()
            .map(|p| Vec2::new(round_to(p.x, factor), round_to(p.y, factor)))
            .collect();
        polyline.replace_points(rounded);
    }
}

/// Exact halves go to the even neighbour, matching how `{:.2}` prints them.
fn round_to(v: f64, factor: f64) -> f64 {
    (v * factor).round_ties_even() / factor
}
