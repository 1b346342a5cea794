//! svg2scad - thickened OpenSCAD outlines from SVG paths.
//!
//! Every `<path>` of an SVG document is flattened into a polyline, cleaned up,
//! and turned into a closed ribbon of constant width that OpenSCAD can
//! extrude into a solid.

pub mod error;
pub mod geometry;
pub mod io;
pub mod math;
pub mod operations;
pub mod pipeline;

pub use error::{Result, Svg2ScadError};
pub use pipeline::{Convert, ConvertParams, ConvertSummary};
