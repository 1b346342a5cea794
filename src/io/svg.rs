//! SVG document and path-data input.
//!
//! Only the `d` attribute of `<path>` elements is read. Transforms, groups,
//! `viewBox` and styling are ignored.

use std::path::Path;

use roxmltree::{Document, Node, ParsingOptions};
use svgtypes::{PathParser, PathSegment};
use tracing::info;

use crate::error::{InputError, Result};
use crate::geometry::{CubicBezier, EllipticalArc, Line, QuadraticBezier, Segment};
use crate::math::arc_2d::arc_center_from_endpoints;
use crate::math::Vec2;

/// Reads an SVG file and returns the path data of every `<path>` element.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read, or `InputError::Xml` if
/// it is not well-formed XML.
pub fn load_path_data(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)?;
    let paths = path_data_from_str(&text)?;
    info!(file = %path.display(), paths = paths.len(), "loaded svg");
    Ok(paths)
}

/// Returns the path data of every `<path>` element in an SVG document.
///
/// Elements are returned in document order. Elements without a (non-empty)
/// `d` attribute are skipped.
///
/// # Errors
///
/// Returns `InputError::Xml` if the text is not well-formed XML.
pub fn path_data_from_str(text: &str) -> Result<Vec<String>> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(text, options).map_err(InputError::from)?;
    Ok(find_all(doc.root_element(), "path")
        .into_iter()
        .filter_map(|node| node.attribute("d"))
        .filter(|d| !d.is_empty())
        .map(str::to_owned)
        .collect())
}

/// Finds the descendants of `root` whose local tag name is `tag`.
///
/// Namespaces are ignored, so `svg:path` and `path` both match `"path"`.
/// The search does not descend into matching elements.
#[must_use]
pub fn find_all<'a, 'input>(root: Node<'a, 'input>, tag: &str) -> Vec<Node<'a, 'input>> {
    let mut found = Vec::new();
    collect_matching(root, tag, &mut found);
    found
}

fn collect_matching<'a, 'input>(
    node: Node<'a, 'input>,
    tag: &str,
    found: &mut Vec<Node<'a, 'input>>,
) {
    for child in node.children().filter(Node::is_element) {
        if child.tag_name().name() == tag {
            found.push(child);
        } else {
            collect_matching(child, tag, found);
        }
    }
}

/// Parses SVG path data into absolute-coordinate segments.
///
/// Relative commands are resolved, `H`/`V` become lines, `S`/`T` get their
/// reflected control point, and `A` is converted to center form. A
/// zero-radius arc becomes a line, and an arc ending where it starts becomes
/// a zero-length line at that point.
///
/// # Errors
///
/// Returns the tokenizer error for malformed path data.
pub fn parse_path_data(d: &str) -> std::result::Result<Vec<Segment>, svgtypes::Error> {
    let mut state = PathState::default();
    let mut segments = Vec::new();
    for token in PathParser::from(d) {
        if let Some(segment) = state.resolve(token?) {
            segments.push(segment);
        }
    }
    Ok(segments)
}

/// Pen state carried between path commands.
#[derive(Debug)]
struct PathState {
    current: Vec2,
    subpath_start: Vec2,
    /// Second control point of the previous cubic, for `S`.
    last_cubic_ctrl: Option<Vec2>,
    /// Control point of the previous quadratic, for `T`.
    last_quad_ctrl: Option<Vec2>,
}

impl Default for PathState {
    fn default() -> Self {
        Self {
            current: Vec2::zeros(),
            subpath_start: Vec2::zeros(),
            last_cubic_ctrl: None,
            last_quad_ctrl: None,
        }
    }
}

impl PathState {
    fn point(&self, abs: bool, x: f64, y: f64) -> Vec2 {
        if abs {
            Vec2::new(x, y)
        } else {
            self.current + Vec2::new(x, y)
        }
    }

    fn reflect(&self, ctrl: Option<Vec2>) -> Vec2 {
        ctrl.map_or(self.current, |c| self.current * 2.0 - c)
    }

    #[allow(clippy::too_many_lines, clippy::needless_pass_by_value)]
    fn resolve(&mut self, token: PathSegment) -> Option<Segment> {
        let mut cubic_ctrl = None;
        let mut quad_ctrl = None;
        let start = self.current;

        let segment = match token {
            PathSegment::MoveTo { abs, x, y } => {
                let to = self.point(abs, x, y);
                self.subpath_start = to;
                self.current = to;
                Some(Segment::Move { to })
            }
            PathSegment::LineTo { abs, x, y } => {
                self.current = self.point(abs, x, y);
                Some(Segment::Line(Line::new(start, self.current)))
            }
            PathSegment::HorizontalLineTo { abs, x } => {
                let x = if abs { x } else { start.x + x };
                self.current = Vec2::new(x, start.y);
                Some(Segment::Line(Line::new(start, self.current)))
            }
            PathSegment::VerticalLineTo { abs, y } => {
                let y = if abs { y } else { start.y + y };
                self.current = Vec2::new(start.x, y);
                Some(Segment::Line(Line::new(start, self.current)))
            }
            PathSegment::CurveTo {
                abs,
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                let p1 = self.point(abs, x1, y1);
                let p2 = self.point(abs, x2, y2);
                self.current = self.point(abs, x, y);
                cubic_ctrl = Some(p2);
                Some(Segment::CubicBezier(CubicBezier::new(start, p1, p2, self.current)))
            }
            PathSegment::SmoothCurveTo { abs, x2, y2, x, y } => {
                let p1 = self.reflect(self.last_cubic_ctrl);
                let p2 = self.point(abs, x2, y2);
                self.current = self.point(abs, x, y);
                cubic_ctrl = Some(p2);
                Some(Segment::CubicBezier(CubicBezier::new(start, p1, p2, self.current)))
            }
            PathSegment::Quadratic { abs, x1, y1, x, y } => {
                let p1 = self.point(abs, x1, y1);
                self.current = self.point(abs, x, y);
                quad_ctrl = Some(p1);
                Some(Segment::QuadraticBezier(QuadraticBezier::new(start, p1, self.current)))
            }
            PathSegment::SmoothQuadratic { abs, x, y } => {
                let p1 = self.reflect(self.last_quad_ctrl);
                self.current = self.point(abs, x, y);
                quad_ctrl = Some(p1);
                Some(Segment::QuadraticBezier(QuadraticBezier::new(start, p1, self.current)))
            }
            PathSegment::EllipticalArc {
                abs,
                rx,
                ry,
                x_axis_rotation,
                large_arc,
                sweep,
                x,
                y,
            } => {
                let end = self.point(abs, x, y);
                self.current = end;
                match arc_center_from_endpoints(
                    start,
                    end,
                    rx,
                    ry,
                    x_axis_rotation,
                    large_arc,
                    sweep,
                ) {
                    Some(arc) => Some(Segment::Arc(EllipticalArc::new(arc))),
                    None => Some(Segment::Line(Line::new(start, end))),
                }
            }
            PathSegment::ClosePath { .. } => {
                self.current = self.subpath_start;
                Some(Segment::Close {
                    from: start,
                    to: self.subpath_start,
                })
            }
        };

        self.last_cubic_ctrl = cubic_ctrl;
        self.last_quad_ctrl = quad_ctrl;
        segment
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Curve;
    use approx::assert_relative_eq;

    #[test]
    fn finds_paths_in_nested_groups_and_namespaces() {
        let svg = r#"<?xml version="1.0"?>
<svg xmlns="http://www.w3.org/2000/svg" xmlns:svg="http://www.w3.org/2000/svg">
  <path d="M 0 0 L 1 1"/>
  <g>
    <g><svg:path d="M 2 2 L 3 3"/></g>
    <path id="no-data"/>
    <path d=""/>
  </g>
  <rect width="4" height="4"/>
  <path d="M 5 5 L 6 6"/>
</svg>"#;
        let paths = path_data_from_str(svg).unwrap();
        assert_eq!(paths, vec!["M 0 0 L 1 1", "M 2 2 L 3 3", "M 5 5 L 6 6"]);
    }

    #[test]
    fn doctype_is_accepted() {
        let svg = r#"<?xml version="1.0"?>
<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">
<svg xmlns="http://www.w3.org/2000/svg"><path d="M0 0L1 0"/></svg>"#;
        assert_eq!(path_data_from_str(svg).unwrap().len(), 1);
    }

    #[test]
    fn malformed_xml_is_an_error() {
        assert!(path_data_from_str("<svg><path d='M0 0'></svg>").is_err());
    }

    #[test]
    fn find_all_does_not_match_root() {
        let doc = Document::parse("<path><path d='x'/></path>").unwrap();
        let found = find_all(doc.root_element(), "path");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].attribute("d"), Some("x"));
    }

    #[test]
    fn parses_move_line_close() {
        let segs = parse_path_data("M 0 0 L 10 0 L 10 5 Z").unwrap();
        assert_eq!(segs.len(), 4);
        assert_eq!(segs[0], Segment::Move { to: Vec2::new(0.0, 0.0) });
        assert_eq!(
            segs[1],
            Segment::Line(Line::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)))
        );
        assert_eq!(
            segs[3],
            Segment::Close {
                from: Vec2::new(10.0, 5.0),
                to: Vec2::new(0.0, 0.0)
            }
        );
    }

    #[test]
    fn resolves_relative_and_shorthand_lines() {
        let segs = parse_path_data("m 1 1 l 2 0 h 3 v 4 H 0 V 0").unwrap();
        let ends: Vec<Vec2> = segs
            .iter()
            .filter_map(|s| match s {
                Segment::Line(l) => Some(*l.end()),
                _ => None,
            })
            .collect();
        assert_eq!(
            ends,
            vec![
                Vec2::new(3.0, 1.0),
                Vec2::new(6.0, 1.0),
                Vec2::new(6.0, 5.0),
                Vec2::new(0.0, 5.0),
                Vec2::new(0.0, 0.0),
            ]
        );
    }

    #[test]
    fn implicit_lineto_after_move() {
        let segs = parse_path_data("M0,0 5,0 5,5").unwrap();
        assert_eq!(segs.len(), 3);
        assert!(matches!(segs[1], Segment::Line(_)));
        assert!(matches!(segs[2], Segment::Line(_)));
    }

    #[test]
    fn relative_cubic_and_smooth_reflection() {
        let segs = parse_path_data("M 0 0 c 0 10 10 10 10 0 s 10 -10 10 0").unwrap();
        let Segment::CubicBezier(first) = segs[1] else {
            panic!("expected cubic, got {:?}", segs[1]);
        };
        assert_eq!(first.p2, Vec2::new(10.0, 10.0));
        assert_eq!(first.p3, Vec2::new(10.0, 0.0));
        let Segment::CubicBezier(second) = segs[2] else {
            panic!("expected cubic, got {:?}", segs[2]);
        };
        // Reflection of (10,10) about (10,0).
        assert_eq!(second.p1, Vec2::new(10.0, -10.0));
        assert_eq!(second.p2, Vec2::new(20.0, -10.0));
        assert_eq!(second.p3, Vec2::new(20.0, 0.0));
    }

    #[test]
    fn smooth_cubic_without_previous_cubic_uses_current_point() {
        let segs = parse_path_data("M 1 2 S 5 5 9 2").unwrap();
        let Segment::CubicBezier(c) = segs[1] else {
            panic!("expected cubic, got {:?}", segs[1]);
        };
        assert_eq!(c.p1, Vec2::new(1.0, 2.0));
    }

    #[test]
    fn quadratic_commands_are_kept_as_quadratics() {
        let segs = parse_path_data("M 0 0 Q 5 5 10 0 T 20 0").unwrap();
        let Segment::QuadraticBezier(t) = segs[2] else {
            panic!("expected quadratic, got {:?}", segs[2]);
        };
        assert_eq!(t.p1, Vec2::new(15.0, -5.0));
    }

    #[test]
    fn arc_command_becomes_center_form_arc() {
        let segs = parse_path_data("M 0 0 A 5 5 0 0 1 10 0").unwrap();
        let Segment::Arc(arc) = &segs[1] else {
            panic!("expected arc, got {:?}", segs[1]);
        };
        assert_relative_eq!(arc.length(), 5.0 * std::f64::consts::PI, epsilon = 1e-9);
        let end = arc.point(1.0);
        assert_relative_eq!(end.re, 10.0, epsilon = 1e-9);
        assert_relative_eq!(end.im, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn zero_radius_arc_becomes_line() {
        let segs = parse_path_data("M 0 0 A 0 5 0 0 1 10 0").unwrap();
        assert!(matches!(segs[1], Segment::Line(_)));
    }

    #[test]
    fn arc_to_same_point_becomes_zero_length_line() {
        let segs = parse_path_data("M 3 3 A 5 5 0 0 1 3 3 L 4 4").unwrap();
        assert_eq!(segs.len(), 3);
        let Segment::Line(stub) = segs[1] else {
            panic!("expected line, got {:?}", segs[1]);
        };
        assert_eq!(*stub.start(), Vec2::new(3.0, 3.0));
        assert_eq!(*stub.end(), Vec2::new(3.0, 3.0));
        assert!(matches!(segs[2], Segment::Line(_)));
    }

    #[test]
    fn close_returns_to_subpath_start_for_relative_moves() {
        let segs = parse_path_data("M 1 1 l 4 0 z l 0 3").unwrap();
        let Segment::Line(last) = segs[3] else {
            panic!("expected line, got {:?}", segs[3]);
        };
        assert_eq!(*last.start(), Vec2::new(1.0, 1.0));
        assert_eq!(*last.end(), Vec2::new(1.0, 4.0));
    }

    #[test]
    fn invalid_path_data_is_an_error() {
        assert!(parse_path_data("M 0 0 L foo").is_err());
    }
}
