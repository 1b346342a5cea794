use crate::error::{OperationError, Result};
use crate::geometry::{Polygon, Polyline};
use crate::math::{PlanarVector, Vec2};

/// Builds a closed constant-width ribbon around an open polyline.
///
/// # Algorithm
///
/// - **2 points**: a rectangle around the segment, `2 * half_width` wide.
/// - **3+ points**: a forward pass along the polyline followed by the same
///   pass along the reversed polyline. Each pass offsets every point by
///   `half_width` along `rotate_neg90` of the direction of the segment that
///   reaches it, plus the segment's start point on the first step. Walking
///   backwards flips the direction, so the second pass lands on the other
///   side and closes the ribbon.
///
/// No miters or joins are inserted; sharp turns produce sharp and possibly
/// self-intersecting corners.
#[derive(Debug)]
pub struct OutlineRibbon<'a> {
    polyline: &'a Polyline,
    half_width: f64,
}

impl<'a> OutlineRibbon<'a> {
    /// Creates a new outline operation.
    #[must_use]
    pub fn new(polyline: &'a Polyline, half_width: f64) -> Self {
        Self {
            polyline,
            half_width,
        }
    }

    /// Executes the outline synthesis.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the polyline is already
    /// closed or has fewer than 2 points.
    pub fn execute(&self) -> Result<Polygon> {
        if self.polyline.is_closed() {
            return Err(OperationError::InvalidInput(
                "outline source polyline must be open".to_owned(),
            )
            .into());
        }
        let points = self.polyline.points();
        match points {
            [] | [_] => Err(OperationError::InvalidInput(
                "at least 2 points are required for an outline".to_owned(),
            )
            .into()),
            [start, finish] => Ok(Polygon::new(self.rectangle(start, finish))),
            _ => {
                let mut outline = Vec::with_capacity(points.len() * 2);
                self.offset_side(points.iter(), &mut outline);
                self.offset_side(points.iter().rev(), &mut outline);
                Ok(Polygon::new(outline))
            }
        }
    }

    /// Corners of the rectangle around a single segment.
    fn rectangle(&self, start: &Vec2, finish: &Vec2) -> Vec<Vec2> {
        let n = (finish - start).normal() * self.half_width;
        vec![
            start + n.rotate_neg90(),
            finish + n.rotate_neg90(),
            finish + n.rotate_pos90(),
            start + n.rotate_pos90(),
        ]
    }

    /// Appends one long side of the ribbon, walking `points` in the given order.
    fn offset_side<'p>(&self, mut points: impl Iterator<Item = &'p Vec2>, out: &mut Vec<Vec2>) {
        let Some(mut last) = points.next() else {
            return;
        };
        let mut first = true;
        for r in points {
            let dn = ((r - last).normal() * self.half_width).rotate_neg90();
            if first {
                out.push(last + dn);
                first = false;
            }
            out.push(r + dn);
            last = r;
        }
    }
}
