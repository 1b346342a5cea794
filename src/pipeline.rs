//! End-to-end conversion from SVG path data to ribbon outlines.
//!
//! ```text
//! path data ──(worker pool)──▶ parse + flatten ──▶ round ──▶ merge ──▶ outline
//! ```
//!
//! Parsing and flattening run in parallel, one path per task, with results
//! gathered in input order. The remaining steps run sequentially.

use std::num::NonZeroUsize;
use std::path::Path;

use rayon::prelude::*;
use rayon::ThreadPoolBuilder;
use tracing::{debug, info};

use crate::error::{InputError, PipelineError, Result};
use crate::geometry::{Polygon, Polyline};
use crate::io::{load_path_data, parse_path_data, write_scad_file};
use crate::operations::flatten::BuildPolyline;
use crate::operations::offset::OutlineRibbon;
use crate::operations::simplify::{MergeClosePoints, RoundCoordinates};

/// Parameters controlling the conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvertParams {
    /// Distance from the path to each side of the ribbon.
    pub half_width: f64,
    /// Consecutive points at most this far apart are merged.
    pub merge_threshold: f64,
    /// Decimal digits kept when rounding flattened coordinates.
    pub decimals: u32,
    /// Number of worker threads used for flattening.
    pub workers: usize,
}

impl Default for ConvertParams {
    fn default() -> Self {
        Self {
            half_width: 0.8,
            merge_threshold: 0.3,
            decimals: 2,
            workers: std::thread::available_parallelism().map_or(1, NonZeroUsize::get),
        }
    }
}

impl ConvertParams {
    /// Checks that the parameters describe a usable conversion.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::InvalidParameters` for a non-positive half
    /// width, a negative merge threshold or zero workers.
    pub fn validate(&self) -> Result<()> {
        if self.half_width.is_nan() || self.half_width <= 0.0 {
            return Err(PipelineError::InvalidParameters(
                "half width must be positive".to_owned(),
            )
            .into());
        }
        if self.merge_threshold.is_nan() || self.merge_threshold < 0.0 {
            return Err(PipelineError::InvalidParameters(
                "merge threshold must not be negative".to_owned(),
            )
            .into());
        }
        if self.workers == 0 {
            return Err(PipelineError::InvalidParameters(
                "at least one worker is required".to_owned(),
            )
            .into());
        }
        Ok(())
    }
}

/// Counts reported after converting a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSummary {
    /// Paths found in the input document.
    pub paths: usize,
    /// Statements written to the output file.
    pub polygons: usize,
}

/// Converts SVG path data into ribbon outline polygons.
#[derive(Debug)]
pub struct Convert {
    params: ConvertParams,
}

impl Convert {
    /// Creates a new conversion with the given parameters.
    #[must_use]
    pub fn new(params: ConvertParams) -> Self {
        Self { params }
    }

    /// Parses and flattens every path on the worker pool.
    ///
    /// The returned polylines are in the same order as `paths`.
    ///
    /// # Errors
    ///
    /// Returns an error if the pool cannot be started or any path fails to
    /// parse; one failing path aborts the whole batch.
    pub fn flatten_paths(&self, paths: &[String]) -> Result<Vec<Polyline>> {
        self.params.validate()?;
        let pool = ThreadPoolBuilder::new()
            .num_threads(self.params.workers)
            .build()
            .map_err(|e| PipelineError::ThreadPool(e.to_string()))?;

        pool.install(|| {
            paths
                .par_iter()
                .enumerate()
                .map(|(index, d)| -> Result<Polyline> {
                    let segments = parse_path_data(d)
                        .map_err(|source| InputError::PathData { index, source })?;
                    Ok(BuildPolyline::new(segments).execute())
                })
                .collect()
        })
    }

    /// Rounds, simplifies and outlines one flattened path.
    ///
    /// Returns `Ok(None)` when fewer than 2 points survive, since such a path
    /// has no outline.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if the polyline is closed.
    pub fn outline(&self, mut polyline: Polyline) -> Result<Option<Polygon>> {
        RoundCoordinates::new(self.params.decimals).execute(&mut polyline);
        MergeClosePoints::new(self.params.merge_threshold).execute(&mut polyline);
        if polyline.len() < 2 {
            debug!(points = polyline.len(), "dropping degenerate path");
            return Ok(None);
        }
        let polygon = OutlineRibbon::new(&polyline, self.params.half_width).execute()?;
        Ok(Some(polygon))
    }

    /// Converts every path, returning one polygon per non-degenerate path in
    /// input order.
    ///
    /// # Errors
    ///
    /// Returns an error if flattening fails (see [`Convert::flatten_paths`])
    /// or an outline cannot be built.
    pub fn execute(&self, paths: &[String]) -> Result<Vec<Polygon>> {
        let polylines = self.flatten_paths(paths)?;
        info!(paths = polylines.len(), "finished flattening paths");

        let mut polygons = Vec::with_capacity(polylines.len());
        for polyline in polylines {
            if let Some(polygon) = self.outline(polyline)? {
                polygons.push(polygon);
            }
        }
        info!(polygons = polygons.len(), "built outlines");
        Ok(polygons)
    }

    /// Reads `input`, converts it, and writes the statements to `output`.
    ///
    /// The output file is only created once every path has been processed,
    /// so a failed run leaves no partial output behind.
    ///
    /// # Errors
    ///
    /// Returns an error if the input cannot be read or parsed, or if the
    /// output cannot be written.
    pub fn run_file(&self, input: &Path, output: &Path) -> Result<ConvertSummary> {
        let paths = load_path_data(input)?;
        let polygons = self.execute(&paths)?;
        let written = write_scad_file(output, &polygons)?;
        Ok(ConvertSummary {
            paths: paths.len(),
            polygons: written,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::error::{OperationError, Svg2ScadError};
    use crate::io::polygon_statement;
    use crate::math::Vec2;
    use approx::assert_relative_eq;

    fn params() -> ConvertParams {
        ConvertParams {
            workers: 2,
            ..ConvertParams::default()
        }
    }

    #[test]
    fn default_params() {
        let p = ConvertParams::default();
        assert_relative_eq!(p.half_width, 0.8);
        assert_relative_eq!(p.merge_threshold, 0.3);
        assert_eq!(p.decimals, 2);
        assert!(p.workers >= 1);
        assert!(p.validate().is_ok());
    }

    #[test]
    fn invalid_params_are_rejected() {
        let bad_width = ConvertParams {
            half_width: 0.0,
            ..params()
        };
        assert!(bad_width.validate().is_err());
        let bad_threshold = ConvertParams {
            merge_threshold: -1.0,
            ..params()
        };
        assert!(bad_threshold.validate().is_err());
        let no_workers = ConvertParams {
            workers: 0,
            ..params()
        };
        assert!(matches!(
            Convert::new(no_workers).execute(&[]),
            Err(Svg2ScadError::Pipeline(PipelineError::InvalidParameters(_)))
        ));
    }

    #[test]
    fn straight_line_end_to_end() {
        let paths = vec!["M 0 0 L 10 0".to_owned()];
        let convert = Convert::new(params());

        let polylines = convert.flatten_paths(&paths).unwrap();
        assert_eq!(polylines[0].len(), 12);

        let polygons = convert.execute(&paths).unwrap();
        assert_eq!(polygons.len(), 1);
        let pts = polygons[0].points();
        assert_eq!(pts.len(), 24);
        // Ribbon is 1.6 tall around the x axis.
        let max_y = pts.iter().map(|p| p.y).fold(f64::MIN, f64::max);
        let min_y = pts.iter().map(|p| p.y).fold(f64::MAX, f64::min);
        assert_relative_eq!(max_y, 0.8, epsilon = 1e-9);
        assert_relative_eq!(min_y, -0.8, epsilon = 1e-9);

        let statement = polygon_statement(&polygons[0]);
        assert!(statement.starts_with("polygon([[0.00,0.80],[0.91,0.80],"));
        assert!(statement.ends_with("]]);"));
        assert_eq!(statement.matches("],[").count(), 23);
    }

    #[test]
    fn degenerate_paths_are_dropped_in_order() {
        let paths = vec![
            "M 0 0 L 10 0".to_owned(),
            "M 5 5".to_owned(),
            "M 0 0 L 0 5".to_owned(),
        ];
        let polygons = Convert::new(params()).execute(&paths).unwrap();
        assert_eq!(polygons.len(), 2);
        // Second surviving polygon follows the vertical path.
        let first = polygons[1].points()[0];
        assert_relative_eq!(first.x, -0.8, epsilon = 1e-9);
        assert_relative_eq!(first.y, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn arc_back_to_start_yields_fallback_rectangle() {
        let paths = vec!["M 3 3 A 5 5 0 0 1 3 3".to_owned()];
        let polygons = Convert::new(params()).execute(&paths).unwrap();
        assert_eq!(polygons.len(), 1);
        assert_eq!(polygons[0].points().len(), 4);
        assert!(!polygons[0].is_degenerate());
    }

    #[test]
    fn outline_reports_dropped_and_invalid_paths() {
        let convert = Convert::new(params());
        let single = Polyline::from_points(vec![Vec2::new(1.0, 1.0)]);
        assert!(convert.outline(single).unwrap().is_none());

        let open = Polyline::from_points(vec![Vec2::new(0.0, 0.0), Vec2::new(5.0, 0.0)]);
        assert!(convert.outline(open).unwrap().is_some());

        let mut closed = Polyline::new();
        closed.close_with(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(5.0, 0.0),
            Vec2::new(5.0, 5.0),
        ]);
        assert!(matches!(
            convert.outline(closed),
            Err(Svg2ScadError::Operation(OperationError::InvalidInput(_)))
        ));
    }

    #[test]
    fn unsupported_segments_are_skipped() {
        // The quadratic contributes nothing; the line still produces a ribbon.
        let paths = vec!["M 0 0 Q 5 5 10 0 L 20 0".to_owned()];
        let polylines = Convert::new(params()).flatten_paths(&paths).unwrap();
        assert_eq!(polylines[0].len(), 12);
        assert_eq!(polylines[0].points()[0].x, 10.0);
    }

    #[test]
    fn bad_path_data_aborts_everything() {
        let paths = vec!["M 0 0 L 1 1".to_owned(), "M 0 0 L nope".to_owned()];
        let err = Convert::new(params()).execute(&paths).unwrap_err();
        assert!(matches!(
            err,
            Svg2ScadError::Input(InputError::PathData { index: 1, .. })
        ));
    }

    #[test]
    fn order_is_preserved_across_workers() {
        let paths: Vec<String> = (0..50).map(|i| format!("M {i} 0 L {i} 10")).collect();
        let polylines = Convert::new(ConvertParams {
            workers: 4,
            ..params()
        })
        .flatten_paths(&paths)
        .unwrap();
        for (i, pl) in polylines.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let x = i as f64;
            assert_relative_eq!(pl.points()[0].x, x);
        }
    }
}
