//! Outer/hole classification of flattened contours
//!
//! Fonts are inconsistent about winding direction across glyphs, so a fixed
//! clockwise-vs-counter-clockwise convention would misrender several
//! observed fonts. Classification instead ranks contours by absolute area
//! and claims smaller contours as holes of larger ones when both the
//! bounding-box and point-in-polygon containment tests agree.

use crate::error::{Error, Result};
use crate::geometry::contour::Contour;

/// Contours below this absolute area are treated as malformed-font artifacts
const MIN_CONTOUR_AREA: f64 = 1e-9;

/// One outer boundary with the holes it encloses
#[derive(Debug, Clone)]
pub struct GlyphShape {
    /// The outer boundary
    pub outer: Contour,
    /// Holes contained in the outer boundary
    pub holes: Vec<Contour>,
}

impl GlyphShape {
    /// A shape with no holes
    pub fn solid(outer: Contour) -> Self {
        Self {
            outer,
            holes: Vec::new(),
        }
    }
}

/// Group contours into outer shapes with assigned holes
///
/// Largest-area contours are preferred as outer boundaries; smaller unclaimed
/// contours become holes of the first (largest) contour that contains them by
/// both bounding box and representative-point test. A contour lying inside an
/// already-claimed hole is an island and becomes its own outer shape instead.
/// The sort is stable, so contours of equal area keep their original emission
/// order.
///
/// Near-zero-area contours are dropped with a warning before classification.
/// Holes whose cumulative area would reach the outer's own area are dropped
/// too: a hole cannot consume its entire shape.
///
/// # Errors
///
/// Returns [`Error::EmptyGeometry`] if non-empty input yields zero outer
/// shapes.
pub fn classify(contours: Vec<Contour>) -> Result<Vec<GlyphShape>> {
    let input_count = contours.len();

    let mut candidates: Vec<Contour> = contours
        .into_iter()
        .filter(|c| {
            let keep = c.area() > MIN_CONTOUR_AREA;
            if !keep {
                log::warn!("dropping near-zero-area contour ({} points)", c.points.len());
            }
            keep
        })
        .collect();

    // Stable sort keeps emission order for equal areas.
    candidates.sort_by(|a, b| {
        b.area()
            .partial_cmp(&a.area())
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut claimed = vec![false; candidates.len()];
    let mut shapes = Vec::new();

    for i in 0..candidates.len() {
        if claimed[i] {
            continue;
        }
        claimed[i] = true;

        let outer = candidates[i].clone();
        let outer_area = outer.area();
        let Some(outer_bbox) = outer.bounding_box() else {
            continue;
        };

        let mut holes = Vec::new();
        let mut holes_area = 0.0;

        for j in (i + 1)..candidates.len() {
            if claimed[j] {
                continue;
            }
            let candidate = &candidates[j];
            let Some(bbox) = candidate.bounding_box() else {
                continue;
            };
            let Some(rep) = candidate.representative_point() else {
                continue;
            };
            if outer_bbox.contains(&bbox) && outer.contains_point(rep) {
                // A contour inside an already-claimed hole is an island
                // (solid inside a counter), not a second hole. Leave it
                // unclaimed so it becomes its own outer shape later.
                if holes.iter().any(|h: &Contour| h.contains_point(rep)) {
                    continue;
                }
                let area = candidate.area();
                if holes_area + area >= outer_area {
                    log::warn!(
                        "dropping hole ({:.4} area) that would consume its outer shape ({:.4} area)",
                        area,
                        outer_area
                    );
                    claimed[j] = true;
                    continue;
                }
                holes_area += area;
                holes.push(candidate.clone());
                claimed[j] = true;
            }
        }

        shapes.push(GlyphShape { outer, holes });
    }

    if shapes.is_empty() && input_count > 0 {
        return Err(Error::EmptyGeometry(format!(
            "{} contour(s) yielded no outer shapes",
            input_count
        )));
    }

    Ok(shapes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::contour::Point2;

    fn ring(cx: f64, cy: f64, r: f64, n: usize, ccw: bool) -> Contour {
        let mut points = Vec::with_capacity(n);
        for i in 0..n {
            let t = i as f64 / n as f64 * std::f64::consts::TAU;
            let t = if ccw { t } else { -t };
            points.push(Point2::new(cx + r * t.cos(), cy + r * t.sin()));
        }
        Contour::new(points)
    }

    #[test]
    fn test_single_shape_with_hole() {
        // An "O": outer ring plus counter, windings deliberately equal to
        // prove classification does not rely on winding direction.
        let outer = ring(0.0, 0.0, 10.0, 32, true);
        let counter = ring(0.0, 0.0, 5.0, 32, true);
        let shapes = classify(vec![outer, counter]).unwrap();
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].holes.len(), 1);
    }

    #[test]
    fn test_mixed_windings() {
        let outer = ring(0.0, 0.0, 10.0, 32, false);
        let counter = ring(0.0, 0.0, 5.0, 32, true);
        let shapes = classify(vec![counter, outer]).unwrap();
        assert_eq!(shapes.len(), 1);
        assert_eq!(shapes[0].holes.len(), 1);
    }

    #[test]
    fn test_disjoint_shapes_stay_separate() {
        // Two glyphs side by side, no holes.
        let a = ring(0.0, 0.0, 5.0, 16, true);
        let b = ring(20.0, 0.0, 5.0, 16, true);
        let shapes = classify(vec![a, b]).unwrap();
        assert_eq!(shapes.len(), 2);
        assert!(shapes.iter().all(|s| s.holes.is_empty()));
    }

    #[test]
    fn test_two_glyphs_one_with_hole() {
        // "O" next to a dot: three contours, one hole claim.
        let o_outer = ring(0.0, 0.0, 8.0, 32, true);
        let o_counter = ring(0.0, 0.0, 4.0, 32, true);
        let dot = ring(20.0, 0.0, 2.0, 16, true);
        let shapes = classify(vec![o_outer, o_counter, dot]).unwrap();
        assert_eq!(shapes.len(), 2);
        let with_hole = shapes.iter().filter(|s| s.holes.len() == 1).count();
        assert_eq!(with_hole, 1);
    }

    #[test]
    fn test_zero_area_contour_dropped() {
        let sliver = Contour::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(5.0, 0.0),
            Point2::new(10.0, 0.0),
        ]);
        let solid = ring(0.0, 0.0, 5.0, 16, true);
        let shapes = classify(vec![sliver, solid]).unwrap();
        assert_eq!(shapes.len(), 1);
    }

    #[test]
    fn test_only_degenerate_input_errors() {
        let sliver = Contour::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(5.0, 0.0),
            Point2::new(10.0, 0.0),
        ]);
        let err = classify(vec![sliver]).unwrap_err();
        assert!(matches!(err, Error::EmptyGeometry(_)));
    }

    #[test]
    fn test_empty_input_is_ok() {
        // Zero contours from zero input is not an error; the caller decides.
        let shapes = classify(Vec::new()).unwrap();
        assert!(shapes.is_empty());
    }

    #[test]
    fn test_hole_invariant_containment() {
        let outer = ring(0.0, 0.0, 10.0, 64, true);
        let counter = ring(1.0, -1.0, 4.0, 64, false);
        let shapes = classify(vec![outer, counter]).unwrap();
        let shape = &shapes[0];
        for hole in &shape.holes {
            let inside = hole
                .points
                .iter()
                .filter(|p| shape.outer.contains_point(**p))
                .count();
            // All sampled hole boundary points inside the outer contour
            assert!(inside as f64 >= hole.points.len() as f64 * 0.95);
        }
    }

    #[test]
    fn test_island_inside_hole_becomes_own_shape() {
        // Concentric rings: the 2-radius ring sits inside the 5-radius hole,
        // so it is an island (solid within the counter), not a second hole.
        let shapes = classify(vec![
            ring(0.0, 0.0, 10.0, 32, true),
            ring(0.0, 0.0, 5.0, 32, true),
            ring(0.0, 0.0, 2.0, 32, true),
        ])
        .unwrap();
        assert_eq!(shapes.len(), 2);
        assert_eq!(shapes[0].holes.len(), 1);
        assert!(shapes[1].holes.is_empty());
        // The island is the smallest ring.
        assert!(shapes[1].outer.area() < shapes[0].holes[0].area());
    }

    #[test]
    fn test_area_conservation() {
        let shapes = classify(vec![
            ring(0.0, 0.0, 10.0, 32, true),
            ring(0.0, 0.0, 5.0, 32, true),
        ])
        .unwrap();
        let shape = &shapes[0];
        let holes_area: f64 = shape.holes.iter().map(Contour::area).sum();
        assert!(shape.outer.area() > holes_area);
    }
}
