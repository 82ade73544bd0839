//! Extrusion of classified shapes into printable solids
//!
//! Each glyph shape (outer contour plus holes) is triangulated with its
//! holes subtracted and swept along +Z, producing a top cap, a bottom cap,
//! and side walls for every ring. Hole rings generate inner walls facing
//! into the counter.
//!
//! The foreground (glyph body) and background (plaque) are stacked along Z
//! with a small interpenetration so slicers fuse them into one printed part
//! instead of leaving a zero-thickness seam.

use crate::config::RenderOptions;
use crate::error::{Error, Result};
use crate::geometry::classify::GlyphShape;
use crate::geometry::contour::Contour;
use crate::geometry::offset::offset_shape;
use crate::geometry::triangulate::triangulate_with_holes;
use crate::mesh::{Mesh, Triangle, Vertex};
use crate::threemf::Solid;

/// Bounding dimensions of a finished part, for display only
///
/// Pure derived data; nothing downstream consumes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dimensions {
    /// Bounding width (X) in model units
    pub width: f64,
    /// Bounding height (Y) in model units
    pub height: f64,
    /// Total depth: foreground depth plus background depth
    pub depth: f64,
}

/// Extrude the glyph body
///
/// All shapes are merged into one mesh spanning z ∈ [0, depth].
///
/// # Errors
///
/// Returns [`Error::EmptyGeometry`] for an empty shape set and propagates
/// triangulation failures.
pub fn build_foreground(shapes: &[GlyphShape], depth: f64) -> Result<Mesh> {
    if shapes.is_empty() {
        return Err(Error::EmptyGeometry(
            "no shapes to extrude for the glyph body".to_string(),
        ));
    }
    let mut mesh = Mesh::new();
    for shape in shapes {
        mesh.append(extrude_shape(shape, depth)?);
    }
    Ok(mesh)
}

/// Offset each shape into its plaque outline and extrude
///
/// The outer boundary grows by `outer_offset`, holes shrink by
/// `inner_offset`, and the result spans z ∈ [0, depth].
///
/// # Errors
///
/// Returns [`Error::EmptyGeometry`] for an empty shape set,
/// [`Error::DegenerateGeometry`] if an offset collapses a boundary, and
/// propagates triangulation failures.
pub fn build_background(
    shapes: &[GlyphShape],
    outer_offset: f64,
    inner_offset: f64,
    depth: f64,
) -> Result<Mesh> {
    if shapes.is_empty() {
        return Err(Error::EmptyGeometry(
            "no shapes to extrude for the plaque".to_string(),
        ));
    }
    let mut mesh = Mesh::new();
    for shape in shapes {
        let plaque = offset_shape(shape, outer_offset, inner_offset)?;
        mesh.append(extrude_shape(&plaque, depth)?);
    }
    Ok(mesh)
}

/// Extrude one shape-with-holes into a closed mesh spanning z ∈ [0, depth]
fn extrude_shape(shape: &GlyphShape, depth: f64) -> Result<Mesh> {
    if shape.outer.points.len() < 3 {
        return Err(Error::degenerate("extrusion outer boundary", shape.outer.points.len()));
    }

    // Normalize windings so caps and walls orient consistently: outer CCW,
    // holes CW. earcut preserves the outer ring's winding in its output.
    let mut outer = shape.outer.clone();
    if !outer.is_ccw() {
        outer.reverse();
    }
    let mut holes: Vec<Contour> = Vec::with_capacity(shape.holes.len());
    for hole in &shape.holes {
        let mut h = hole.clone();
        if h.is_ccw() {
            h.reverse();
        }
        holes.push(h);
    }

    let hole_points: Vec<Vec<crate::geometry::contour::Point2>> =
        holes.iter().map(|h| h.points.clone()).collect();
    let cap_indices = triangulate_with_holes(&outer.points, &hole_points)?;

    // Ring layout in the combined vertex list: outer first, then each hole.
    let ring_sizes: Vec<usize> = std::iter::once(outer.points.len())
        .chain(holes.iter().map(|h| h.points.len()))
        .collect();
    let ring_total: usize = ring_sizes.iter().sum();

    let mut mesh = Mesh::with_capacity(ring_total * 2, cap_indices.len() / 3 * 2 + ring_total * 2);

    // Bottom layer (z = 0), then top layer (z = depth).
    for p in outer.points.iter().chain(holes.iter().flat_map(|h| h.points.iter())) {
        mesh.vertices.push(Vertex::new(p.x, p.y, 0.0));
    }
    for p in outer.points.iter().chain(holes.iter().flat_map(|h| h.points.iter())) {
        mesh.vertices.push(Vertex::new(p.x, p.y, depth));
    }

    // Caps: earcut output is CCW in XY for the CCW outer ring, so the top
    // cap keeps its order (+Z outward) and the bottom cap reverses (-Z).
    for t in cap_indices.chunks(3) {
        mesh.triangles
            .push(Triangle::new(t[0], t[2], t[1]));
        mesh.triangles
            .push(Triangle::new(ring_total + t[0], ring_total + t[1], ring_total + t[2]));
    }

    // Side walls: one quad (two triangles) per ring edge. With the outer
    // ring CCW and holes CW, the same emission order faces outward from the
    // solid for both.
    let mut ring_offset = 0;
    for &size in &ring_sizes {
        for i in 0..size {
            let j = (i + 1) % size;
            let b_i = ring_offset + i;
            let b_j = ring_offset + j;
            let t_i = ring_total + ring_offset + i;
            let t_j = ring_total + ring_offset + j;
            mesh.triangles.push(Triangle::new(b_i, b_j, t_j));
            mesh.triangles.push(Triangle::new(b_i, t_j, t_i));
        }
        ring_offset += size;
    }

    Ok(mesh)
}

/// Scale both meshes uniformly in XY so the foreground's bounding width
/// matches `target_width`
///
/// Returns the applied factor. Z is never scaled. A non-positive target or
/// a zero-width foreground skips scaling with a warning.
pub fn scale_to_width(foreground: &mut Mesh, background: &mut Mesh, target_width: f64) -> f64 {
    if target_width <= 0.0 {
        log::warn!("ignoring non-positive target width {}", target_width);
        return 1.0;
    }
    let Some(bbox) = foreground.bounding_box() else {
        log::warn!("cannot scale an empty foreground mesh");
        return 1.0;
    };
    let width = bbox.width();
    if width <= f64::EPSILON {
        log::warn!("foreground has zero width, skipping scaling");
        return 1.0;
    }
    let factor = target_width / width;
    foreground.scale_xy(factor);
    background.scale_xy(factor);
    factor
}

/// Stack foreground and background along Z and wrap them into named solids
///
/// The background occupies z ∈ [0, background_depth]; the foreground starts
/// at `background_depth − overlap`, guaranteeing shared interpenetrating
/// volume for any positive overlap. X/Y offsets from the options move both
/// solids together.
pub fn position(foreground: Mesh, background: Mesh, options: &RenderOptions) -> (Solid, Solid) {
    let fg_z = options.background_depth - options.overlap;
    let fg = Solid::new(
        "foreground",
        foreground,
        options.foreground_color,
        (options.x_offset, options.y_offset, fg_z),
    );
    let bg = Solid::new(
        "background",
        background,
        options.background_color,
        (options.x_offset, options.y_offset, 0.0),
    );
    (fg, bg)
}

/// Bounding dimensions of the positioned pair, for UI display
pub fn dimensions(foreground: &Solid, background: &Solid, options: &RenderOptions) -> Dimensions {
    let mut width: f64 = 0.0;
    let mut height: f64 = 0.0;
    for solid in [foreground, background] {
        if let Some(bbox) = solid.mesh.bounding_box() {
            width = width.max(bbox.width());
            height = height.max(bbox.height());
        }
    }
    Dimensions {
        width,
        height,
        depth: options.foreground_depth + options.background_depth,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::contour::Point2;

    fn square_shape(size: f64) -> GlyphShape {
        GlyphShape::solid(Contour::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(size, 0.0),
            Point2::new(size, size),
            Point2::new(0.0, size),
        ]))
    }

    fn square_with_hole() -> GlyphShape {
        let mut shape = square_shape(10.0);
        shape.holes.push(Contour::new(vec![
            Point2::new(3.0, 3.0),
            Point2::new(7.0, 3.0),
            Point2::new(7.0, 7.0),
            Point2::new(3.0, 7.0),
        ]));
        shape
    }

    #[test]
    fn test_extrude_square_counts() {
        let mesh = extrude_shape(&square_shape(10.0), 2.0).unwrap();
        // 4 ring points in 2 layers; 2 cap triangles each side + 8 wall
        // triangles.
        assert_eq!(mesh.vertices.len(), 8);
        assert_eq!(mesh.triangles.len(), 12);
        let bbox = mesh.bounding_box().unwrap();
        assert_eq!(bbox.depth(), 2.0);
    }

    #[test]
    fn test_extrude_with_hole_counts() {
        let mesh = extrude_shape(&square_with_hole(), 3.0).unwrap();
        // 8 ring points per layer; walls for both rings.
        assert_eq!(mesh.vertices.len(), 16);
        let wall_triangles = 8 * 2;
        assert!(mesh.triangles.len() > wall_triangles);
        // Every triangle references valid vertices.
        for t in &mesh.triangles {
            assert!(t.v1 < 16 && t.v2 < 16 && t.v3 < 16);
            assert!(!t.is_degenerate());
        }
    }

    #[test]
    fn test_extrusion_is_watertight() {
        use std::collections::HashMap;
        let mesh = extrude_shape(&square_with_hole(), 3.0).unwrap();
        // Closed surface: every undirected edge shared by exactly 2 faces.
        let mut edge_count: HashMap<(usize, usize), usize> = HashMap::new();
        for t in &mesh.triangles {
            for (a, b) in [(t.v1, t.v2), (t.v2, t.v3), (t.v3, t.v1)] {
                *edge_count.entry((a.min(b), a.max(b))).or_insert(0) += 1;
            }
        }
        assert!(edge_count.values().all(|&c| c == 2));
    }

    #[test]
    fn test_extrusion_volume_sign() {
        // Signed volume via divergence theorem must be positive when faces
        // point outward, and must equal area * depth for a prism.
        let mesh = extrude_shape(&square_shape(10.0), 2.0).unwrap();
        let mut volume = 0.0;
        for t in &mesh.triangles {
            let a = mesh.vertices[t.v1];
            let b = mesh.vertices[t.v2];
            let c = mesh.vertices[t.v3];
            volume += (a.x * (b.y * c.z - c.y * b.z) - a.y * (b.x * c.z - c.x * b.z)
                + a.z * (b.x * c.y - c.x * b.y))
                / 6.0;
        }
        assert!((volume - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_hole_reduces_volume() {
        let solid = extrude_shape(&square_shape(10.0), 2.0).unwrap();
        let holed = extrude_shape(&square_with_hole(), 2.0).unwrap();
        let vol = |mesh: &Mesh| {
            mesh.triangles
                .iter()
                .map(|t| {
                    let a = mesh.vertices[t.v1];
                    let b = mesh.vertices[t.v2];
                    let c = mesh.vertices[t.v3];
                    (a.x * (b.y * c.z - c.y * b.z) - a.y * (b.x * c.z - c.x * b.z)
                        + a.z * (b.x * c.y - c.x * b.y))
                        / 6.0
                })
                .sum::<f64>()
        };
        // 10x10x2 minus the 4x4x2 counter
        assert!((vol(&solid) - 200.0).abs() < 1e-9);
        assert!((vol(&holed) - 168.0).abs() < 1e-9);
    }

    #[test]
    fn test_build_foreground_merges_shapes() {
        let shapes = vec![square_shape(5.0), {
            GlyphShape::solid(Contour::new(vec![
                Point2::new(10.0, 0.0),
                Point2::new(15.0, 0.0),
                Point2::new(15.0, 5.0),
                Point2::new(10.0, 5.0),
            ]))
        }];
        let mesh = build_foreground(&shapes, 1.0).unwrap();
        assert_eq!(mesh.vertices.len(), 16);
        for t in &mesh.triangles {
            assert!(t.v1 < 16 && t.v2 < 16 && t.v3 < 16);
        }
    }

    #[test]
    fn test_build_foreground_empty_errors() {
        assert!(matches!(
            build_foreground(&[], 1.0).unwrap_err(),
            Error::EmptyGeometry(_)
        ));
    }

    #[test]
    fn test_build_background_grows_outline() {
        let shapes = vec![square_shape(10.0)];
        let fg = build_foreground(&shapes, 2.0).unwrap();
        let bg = build_background(&shapes, 2.0, 0.5, 1.5).unwrap();
        let fg_bbox = fg.bounding_box().unwrap();
        let bg_bbox = bg.bounding_box().unwrap();
        assert!(bg_bbox.width() > fg_bbox.width());
        assert!(bg_bbox.height() > fg_bbox.height());
        assert_eq!(bg_bbox.depth(), 1.5);
    }

    #[test]
    fn test_joint_overlap() {
        let options = RenderOptions::new("X").with_depths(2.0, 1.5);
        let shapes = vec![square_shape(10.0)];
        let fg = build_foreground(&shapes, options.foreground_depth).unwrap();
        let bg = build_background(&shapes, 2.0, 0.5, options.background_depth).unwrap();
        let (fg, bg) = position(fg, bg, &options);

        let fg_start = fg.translation.2;
        let bg_top = bg.translation.2 + options.background_depth;
        // The foreground starts below the background's top surface by the
        // overlap, giving strictly positive shared z-range.
        assert!(fg_start < bg_top);
        assert!((bg_top - fg_start - options.overlap).abs() < 1e-12);
        assert!(fg_start >= options.background_depth - options.overlap - 1e-12);
    }

    #[test]
    fn test_scale_to_width() {
        let shapes = vec![square_shape(10.0)];
        let mut fg = build_foreground(&shapes, 2.0).unwrap();
        let mut bg = build_background(&shapes, 1.0, 0.5, 1.0).unwrap();
        let factor = scale_to_width(&mut fg, &mut bg, 40.0);
        assert!((factor - 4.0).abs() < 1e-12);
        assert!((fg.bounding_box().unwrap().width() - 40.0).abs() < 1e-9);
        // Z untouched on both meshes
        assert_eq!(fg.bounding_box().unwrap().depth(), 2.0);
        assert_eq!(bg.bounding_box().unwrap().depth(), 1.0);
    }

    #[test]
    fn test_scale_to_width_rejects_zero_target() {
        let shapes = vec![square_shape(10.0)];
        let mut fg = build_foreground(&shapes, 2.0).unwrap();
        let mut bg = fg.clone();
        assert_eq!(scale_to_width(&mut fg, &mut bg, 0.0), 1.0);
        assert_eq!(fg.bounding_box().unwrap().width(), 10.0);
    }

    #[test]
    fn test_dimensions_report() {
        let options = RenderOptions::new("X").with_depths(2.0, 1.0);
        let shapes = vec![square_shape(10.0)];
        let fg = build_foreground(&shapes, 2.0).unwrap();
        let bg = build_background(&shapes, 1.0, 0.5, 1.0).unwrap();
        let (fg, bg) = position(fg, bg, &options);
        let dims = dimensions(&fg, &bg, &options);
        assert!(dims.width > 10.0);
        assert_eq!(dims.depth, 3.0);
    }
}
