//! OpenSCAD output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::geometry::Polygon;

/// Renders a polygon as a single OpenSCAD statement.
///
/// Coordinates are written with exactly two decimals, e.g.
/// `polygon([[1.00,2.00],[3.46,7.89]]);`. No trailing newline is added.
#[must_use]
pub fn polygon_statement(polygon: &Polygon) -> String {
    let pairs: Vec<String> = polygon
        .points()
        .iter()
        .map(|p| format!("[{:.2},{:.2}]", p.x, p.y))
        .collect();
    format!("polygon([{}]);", pairs.join(","))
}

/// Writes one statement per non-degenerate polygon, each on its own line.
///
/// Returns the number of statements written.
///
/// # Errors
///
/// Returns an error if writing fails.
pub fn write_scad<W: Write>(mut writer: W, polygons: &[Polygon]) -> Result<usize> {
    let mut written = 0;
    for polygon in polygons.iter().filter(|p| !p.is_degenerate()) {
        writeln!(writer, "{}", polygon_statement(polygon))?;
        written += 1;
    }
    writer.flush()?;
    Ok(written)
}

/// Creates (or truncates) `path` and writes the polygons to it.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn write_scad_file(path: &Path, polygons: &[Polygon]) -> Result<usize> {
    let file = File::create(path)?;
    let written = write_scad(BufWriter::new(file), polygons)?;
    info!(file = %path.display(), statements = written, "wrote scad output");
    Ok(written)
}
