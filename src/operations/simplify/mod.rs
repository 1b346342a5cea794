mod merge_close_points;
mod round_coordinates;

pub use merge_close_points::MergeClosePoints;
pub use round_coordinates::RoundCoordinates;
