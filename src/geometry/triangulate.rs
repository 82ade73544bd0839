//! Polygon triangulation
//!
//! Thin wrappers over the `earcutr` library (a Rust port of MapBox's
//! earcut.js) that turn a glyph shape into cap triangles with its holes
//! subtracted. Indices refer to the combined vertex list: outer boundary
//! first, then each hole's vertices in order.

use crate::error::{Error, Result};
use crate::geometry::contour::Point2;

/// Triangulate a simple polygon without holes
///
/// Returns triangle indices into `polygon`; each consecutive index triple is
/// one triangle.
///
/// # Errors
///
/// Returns [`Error::Triangulation`] if the polygon has fewer than 3 vertices
/// or earcut yields nothing.
pub fn triangulate_simple(polygon: &[Point2]) -> Result<Vec<usize>> {
    if polygon.len() < 3 {
        return Err(Error::Triangulation(format!(
            "polygon has only {} vertices (minimum 3 required)",
            polygon.len()
        )));
    }

    let mut coords = Vec::with_capacity(polygon.len() * 2);
    for p in polygon {
        coords.push(p.x);
        coords.push(p.y);
    }

    let result = earcutr::earcut(&coords, &[], 2)
        .map_err(|e| Error::Triangulation(format!("earcut error: {}", e)))?;

    if result.is_empty() {
        return Err(Error::Triangulation(
            "earcut returned no triangles".to_string(),
        ));
    }
    Ok(result)
}

/// Triangulate a polygon with holes
///
/// The combined vertex list is `outer` followed by each hole's vertices;
/// returned indices refer into that list.
///
/// # Errors
///
/// Returns [`Error::Triangulation`] if the outer boundary or any hole has
/// fewer than 3 vertices, or earcut yields nothing.
pub fn triangulate_with_holes(outer: &[Point2], holes: &[Vec<Point2>]) -> Result<Vec<usize>> {
    if outer.len() < 3 {
        return Err(Error::Triangulation(format!(
            "outer boundary has only {} vertices (minimum 3 required)",
            outer.len()
        )));
    }
    for (i, hole) in holes.iter().enumerate() {
        if hole.len() < 3 {
            return Err(Error::Triangulation(format!(
                "hole {} has only {} vertices (minimum 3 required)",
                i,
                hole.len()
            )));
        }
    }

    let total = outer.len() + holes.iter().map(Vec::len).sum::<usize>();
    let mut coords = Vec::with_capacity(total * 2);
    for p in outer {
        coords.push(p.x);
        coords.push(p.y);
    }

    let mut hole_indices = Vec::with_capacity(holes.len());
    let mut current_index = outer.len();
    for hole in holes {
        hole_indices.push(current_index);
        for p in hole {
            coords.push(p.x);
            coords.push(p.y);
        }
        current_index += hole.len();
    }

    let result = earcutr::earcut(&coords, &hole_indices, 2)
        .map_err(|e| Error::Triangulation(format!("earcut error: {}", e)))?;

    if result.is_empty() {
        return Err(Error::Triangulation(
            "earcut returned no triangles".to_string(),
        ));
    }
    Ok(result)
}
