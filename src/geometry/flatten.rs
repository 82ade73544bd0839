//! Curve flattening: outline commands to polyline contours
//!
//! Quadratic and cubic Beziers are sampled at a fixed segment count with the
//! standard Bernstein blend. The curve start is always the contour's current
//! last point, never a cached origin, so consecutive curves chain correctly.

use crate::font::PathCommand;
use crate::geometry::contour::{Contour, Point2};

/// Points closer than this are considered the same point when closing and
/// when counting distinct points.
const POINT_EPSILON: f64 = 1e-9;

/// Flatten a stream of outline commands into closed contours
///
/// Behavior per command:
/// - `MoveTo` starts a new contour; an already-open contour is implicitly
///   closed and pushed first.
/// - `LineTo` appends a point.
/// - `QuadTo`/`CubicTo` append `curve_segments` evenly-parameterized samples.
/// - `Close` closes and pushes the current contour.
///
/// A leftover open contour at end-of-input is closed and pushed. Contours
/// with fewer than 3 distinct points are dropped silently; single-point
/// artifacts occur in some fonts and are not an error.
pub fn flatten(commands: &[PathCommand], curve_segments: usize) -> Vec<Contour> {
    let segments = curve_segments.max(1);
    let mut contours = Vec::new();
    let mut current: Vec<Point2> = Vec::new();

    for command in commands {
        match *command {
            PathCommand::MoveTo { x, y } => {
                finish_contour(&mut contours, &mut current);
                current.push(Point2::new(x, y));
            }
            PathCommand::LineTo { x, y } => {
                current.push(Point2::new(x, y));
            }
            PathCommand::QuadTo { x1, y1, x, y } => {
                let Some(start) = current.last().copied() else {
                    // Curve without a preceding MoveTo; treat its end as a start.
                    current.push(Point2::new(x, y));
                    continue;
                };
                for i in 1..=segments {
                    let t = i as f64 / segments as f64;
                    let mt = 1.0 - t;
                    let bx = mt * mt * start.x + 2.0 * mt * t * x1 + t * t * x;
                    let by = mt * mt * start.y + 2.0 * mt * t * y1 + t * t * y;
                    current.push(Point2::new(bx, by));
                }
            }
            PathCommand::CubicTo {
                x1,
                y1,
                x2,
                y2,
                x,
                y,
            } => {
                let Some(start) = current.last().copied() else {
                    current.push(Point2::new(x, y));
                    continue;
                };
                for i in 1..=segments {
                    let t = i as f64 / segments as f64;
                    let mt = 1.0 - t;
                    let mt2 = mt * mt;
                    let t2 = t * t;
                    let bx = mt2 * mt * start.x
                        + 3.0 * mt2 * t * x1
                        + 3.0 * mt * t2 * x2
                        + t2 * t * x;
                    let by = mt2 * mt * start.y
                        + 3.0 * mt2 * t * y1
                        + 3.0 * mt * t2 * y2
                        + t2 * t * y;
                    current.push(Point2::new(bx, by));
                }
            }
            PathCommand::Close => {
                finish_contour(&mut contours, &mut current);
            }
        }
    }

    finish_contour(&mut contours, &mut current);
    contours
}

/// Close the open contour and push it if it has at least 3 distinct points
fn finish_contour(contours: &mut Vec<Contour>, current: &mut Vec<Point2>) {
    if current.is_empty() {
        return;
    }
    let mut points = std::mem::take(current);

    // Drop an explicit closing point that duplicates the start.
    if points.len() >= 2 {
        let first = points[0];
        let last = points[points.len() - 1];
        if (first.x - last.x).abs() < POINT_EPSILON && (first.y - last.y).abs() < POINT_EPSILON {
            points.pop();
        }
    }

    if distinct_points(&points) >= 3 {
        contours.push(Contour::new(points));
    }
}

fn distinct_points(points: &[Point2]) -> usize {
    let mut count = 0;
    for (i, p) in points.iter().enumerate() {
        let duplicate = points[..i].iter().any(|q| {
            (p.x - q.x).abs() < POINT_EPSILON && (p.y - q.y).abs() < POINT_EPSILON
        });
        if !duplicate {
            count += 1;
        }
    }
    count
}
