//! Advisory mesh validation
//!
//! Checks a mesh for conditions slicers reject, without attempting full
//! manifold repair. Degenerate triangles and out-of-bounds indices are
//! counted and can be stripped by [`repair`]; open or over-shared edges are
//! reported as warnings only, since a general half-edge repair pass is out
//! of scope. Warnings never block export: imperfect but printable geometry
//! beats blocking the caller entirely.

use std::collections::HashMap;

use crate::mesh::{face_normal, Mesh};

/// Findings from one validation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Triangles with two or more identical vertex indices
    pub degenerate_triangles: usize,
    /// Triangles referencing a vertex index past the vertex count
    pub out_of_bounds_triangles: usize,
    /// Triangles with distinct indices but zero geometric area
    pub zero_area_triangles: usize,
    /// Undirected edges used by exactly one triangle (holes in the surface)
    pub boundary_edges: usize,
    /// Undirected edges used by more than two triangles (non-manifold risk)
    pub overshared_edges: usize,
}

impl ValidationReport {
    /// Whether the mesh passed every check
    pub fn is_clean(&self) -> bool {
        self.degenerate_triangles == 0
            && self.out_of_bounds_triangles == 0
            && self.zero_area_triangles == 0
            && self.boundary_edges == 0
            && self.overshared_edges == 0
    }

    /// Whether the surface looks watertight (ignoring zero-area faces)
    pub fn is_watertight(&self) -> bool {
        self.boundary_edges == 0 && self.overshared_edges == 0
    }
}

/// Validate a mesh and report findings
///
/// Detection only; nothing is fixed here. Use [`repair`] to strip the
/// triangles this flags as degenerate or out of bounds.
pub fn validate(mesh: &Mesh) -> ValidationReport {
    let mut report = ValidationReport::default();
    let vertex_count = mesh.vertices.len();

    let mut edge_count: HashMap<(usize, usize), usize> =
        HashMap::with_capacity(mesh.triangles.len() * 2);

    for triangle in &mesh.triangles {
        if triangle.is_degenerate() {
            report.degenerate_triangles += 1;
            continue;
        }
        if triangle.v1 >= vertex_count || triangle.v2 >= vertex_count || triangle.v3 >= vertex_count
        {
            report.out_of_bounds_triangles += 1;
            continue;
        }

        let n = face_normal(
            &mesh.vertices[triangle.v1],
            &mesh.vertices[triangle.v2],
            &mesh.vertices[triangle.v3],
        );
        if n == (0.0, 0.0, 0.0) {
            report.zero_area_triangles += 1;
        }

        for (a, b) in [
            (triangle.v1, triangle.v2),
            (triangle.v2, triangle.v3),
            (triangle.v3, triangle.v1),
        ] {
            *edge_count.entry((a.min(b), a.max(b))).or_insert(0) += 1;
        }
    }

    for &count in edge_count.values() {
        if count == 1 {
            report.boundary_edges += 1;
        } else if count > 2 {
            report.overshared_edges += 1;
        }
    }

    if !report.is_clean() {
        log::warn!(
            "mesh validation: {} degenerate, {} out-of-bounds, {} zero-area triangle(s), \
             {} boundary, {} over-shared edge(s)",
            report.degenerate_triangles,
            report.out_of_bounds_triangles,
            report.zero_area_triangles,
            report.boundary_edges,
            report.overshared_edges
        );
    }

    report
}

/// Strip degenerate and out-of-bounds triangles
///
/// Conservative by design: zero-area-but-distinct triangles and edge
/// anomalies are left alone, since removing them can open a previously
/// closed surface.
pub fn repair(mesh: &Mesh) -> Mesh {
    let vertex_count = mesh.vertices.len();
    let triangles = mesh
        .triangles
        .iter()
        .copied()
        .filter(|t| {
            !t.is_degenerate() && t.v1 < vertex_count && t.v2 < vertex_count && t.v3 < vertex_count
        })
        .collect();
    Mesh {
        vertices: mesh.vertices.clone(),
        triangles,
    }
}
