use tracing::debug;

use crate::geometry::{Polyline, Segment};

use super::FlattenSegment;

/// Flattens every segment of one path, in order, into a single open polyline.
///
/// Adjacent segments share their joint, so the joint point appears twice;
/// the merge pass removes such duplicates later.
#[derive(Debug)]
pub struct BuildPolyline {
    segments: Vec<Segment>,
}

impl BuildPolyline {
    /// Creates a new `BuildPolyline` operation.
    #[must_use]
    pub fn new(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    /// Executes the flattening, returning the open polyline.
    #[must_use]
    pub fn execute(&self) -> Polyline {
        let mut polyline = Polyline::new();
        for segment in &self.segments {
            FlattenSegment::new(segment).execute(&mut polyline);
        }
        debug!(
            segments = self.segments.len(),
            points = polyline.len(),
            "flattened path"
        );
        polyline
    }
}
