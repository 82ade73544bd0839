//! Parallel contour offsetting
//!
//! Each vertex is pushed along the normalized sum of its two adjacent edge
//! normals (the angle bisector). This is an approximation, not a true
//! mitered/beveled offset: very sharp concave corners can self-intersect.
//! That is accepted for typographic outlines, which have limited curvature;
//! no self-intersection repair is performed. A robust polygon-offsetting
//! algorithm could replace this behind the same contract without touching
//! callers.

use crate::error::{Error, Result};
use crate::geometry::classify::GlyphShape;
use crate::geometry::contour::{Contour, Point2};

const EDGE_EPSILON: f64 = 1e-12;

/// Offset a contour by `distance`
///
/// `inward = false` grows the contour outward, `inward = true` shrinks it.
/// The outward direction is derived from the contour's winding (sign of the
/// shoelace area), so either winding offsets correctly.
///
/// # Errors
///
/// Returns [`Error::DegenerateGeometry`] if fewer than 3 points survive.
pub fn offset_contour(contour: &Contour, distance: f64, inward: bool) -> Result<Contour> {
    let points = &contour.points;
    let n = points.len();
    if n < 3 {
        return Err(Error::degenerate("contour to offset", n));
    }

    // For a CCW contour the edge normal (dy, -dx) points outward; for CW the
    // sign flips.
    let winding = if contour.is_ccw() { 1.0 } else { -1.0 };
    let sign = if inward { -1.0 } else { 1.0 };

    let mut result = Vec::with_capacity(n);
    for i in 0..n {
        let prev = points[(i + n - 1) % n];
        let curr = points[i];
        let next = points[(i + 1) % n];

        let Some(n_in) = edge_normal(prev, curr, winding) else {
            // Zero-length incoming edge; keep the vertex in place.
            result.push(curr);
            continue;
        };
        let Some(n_out) = edge_normal(curr, next, winding) else {
            result.push(curr);
            continue;
        };

        let bx = n_in.0 + n_out.0;
        let by = n_in.1 + n_out.1;
        let len = (bx * bx + by * by).sqrt();
        if len < EDGE_EPSILON {
            // Near-180° reversal; the bisector is undefined, keep the vertex.
            result.push(curr);
            continue;
        }

        result.push(Point2::new(
            curr.x + bx / len * distance * sign,
            curr.y + by / len * distance * sign,
        ));
    }

    if result.len() < 3 {
        return Err(Error::degenerate("offset contour", result.len()));
    }
    Ok(Contour::new(result))
}

/// Unit outward normal of the edge `a -> b`, or `None` for a zero-length edge
fn edge_normal(a: Point2, b: Point2, winding: f64) -> Option<(f64, f64)> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len = (dx * dx + dy * dy).sqrt();
    if len < EDGE_EPSILON {
        return None;
    }
    Some((dy / len * winding, -dx / len * winding))
}

/// Build a plaque shape from a glyph shape
///
/// The outer boundary grows outward by `outer_offset`; each hole shrinks
/// inward by `inner_offset`. Holes that collapse under the inner offset are
/// dropped with a warning rather than aborting the plaque.
///
/// # Errors
///
/// Returns [`Error::DegenerateGeometry`] if the grown outer boundary
/// degenerates.
pub fn offset_shape(
    shape: &GlyphShape,
    outer_offset: f64,
    inner_offset: f64,
) -> Result<GlyphShape> {
    let outer = offset_contour(&shape.outer, outer_offset, false)?;

    let mut holes = Vec::with_capacity(shape.holes.len());
    for hole in &shape.holes {
        match offset_contour(hole, inner_offset, true) {
            Ok(shrunk) => {
                // A shrink past the hole's half-width turns it inside out:
                // the winding flips. Such holes are gone, not small.
                let inverted = shrunk.signed_area() * hole.signed_area() <= 0.0;
                if !inverted && shrunk.area() > EDGE_EPSILON {
                    holes.push(shrunk);
                } else {
                    log::warn!("hole collapsed under inner offset {}, dropping", inner_offset);
                }
            }
            Err(_) => {
                log::warn!("hole degenerated under inner offset {}, dropping", inner_offset);
            }
        }
    }

    Ok(GlyphShape { outer, holes })
}
