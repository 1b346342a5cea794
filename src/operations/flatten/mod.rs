mod build_polyline;
mod flatten_segment;

pub use build_polyline::BuildPolyline;
pub use flatten_segment::{sample_count, FlattenSegment};
