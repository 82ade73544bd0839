//! Triangle meshes and their derived measures
//!
//! A [`Mesh`] is a set of unique 3D vertices plus index triples forming
//! triangles. Meshes built by the solid builder are expected (not statically
//! guaranteed) to be watertight; the validator reports deviations.

/// A 3D vertex with x, y, z coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Z coordinate
    pub z: f64,
}

impl Vertex {
    /// Create a new vertex
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// A triangle defined by three vertex indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Triangle {
    /// Index of first vertex
    pub v1: usize,
    /// Index of second vertex
    pub v2: usize,
    /// Index of third vertex
    pub v3: usize,
}

impl Triangle {
    /// Create a new triangle
    pub fn new(v1: usize, v2: usize, v3: usize) -> Self {
        Self { v1, v2, v3 }
    }

    /// Whether any two vertex indices coincide
    pub fn is_degenerate(&self) -> bool {
        self.v1 == self.v2 || self.v2 == self.v3 || self.v1 == self.v3
    }
}

/// A normal or direction vector as an (x, y, z) triple
pub type Vector3 = (f64, f64, f64);

/// Axis-aligned 3D bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox3D {
    /// Minimum corner
    pub min: Vertex,
    /// Maximum corner
    pub max: Vertex,
}

impl BoundingBox3D {
    /// Box extent along X
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Box extent along Y
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Box extent along Z
    pub fn depth(&self) -> f64 {
        self.max.z - self.min.z
    }
}

/// A triangulated solid
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    /// List of vertices
    pub vertices: Vec<Vertex>,
    /// List of triangles referencing vertex indices
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new mesh with pre-allocated capacity
    pub fn with_capacity(vertices: usize, triangles: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            triangles: Vec::with_capacity(triangles),
        }
    }

    /// Append another mesh, remapping its triangle indices
    pub fn append(&mut self, other: Mesh) {
        let base = self.vertices.len();
        self.vertices.extend(other.vertices);
        self.triangles.extend(
            other
                .triangles
                .into_iter()
                .map(|t| Triangle::new(t.v1 + base, t.v2 + base, t.v3 + base)),
        );
    }

    /// Axis-aligned bounding box, or `None` for an empty mesh
    pub fn bounding_box(&self) -> Option<BoundingBox3D> {
        let first = self.vertices.first()?;
        let mut min = *first;
        let mut max = *first;
        for v in &self.vertices[1..] {
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            min.z = min.z.min(v.z);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
            max.z = max.z.max(v.z);
        }
        Some(BoundingBox3D { min, max })
    }

    /// Scale X and Y uniformly, leaving Z untouched
    pub fn scale_xy(&mut self, factor: f64) {
        for v in &mut self.vertices {
            v.x *= factor;
            v.y *= factor;
        }
    }

    /// Translate every vertex
    pub fn translate(&mut self, dx: f64, dy: f64, dz: f64) {
        for v in &mut self.vertices {
            v.x += dx;
            v.y += dy;
            v.z += dz;
        }
    }
}

fn cross(a: Vector3, b: Vector3) -> Vector3 {
    (
        a.1 * b.2 - a.2 * b.1,
        a.2 * b.0 - a.0 * b.2,
        a.0 * b.1 - a.1 * b.0,
    )
}

/// Calculate the unit normal of a single triangle face
///
/// Uses the cross product of two edges. Returns the zero vector for a
/// degenerate (zero-area) triangle.
pub fn face_normal(v0: &Vertex, v1: &Vertex, v2: &Vertex) -> Vector3 {
    let edge1 = (v1.x - v0.x, v1.y - v0.y, v1.z - v0.z);
    let edge2 = (v2.x - v0.x, v2.y - v0.y, v2.z - v0.z);
    let c = cross(edge1, edge2);
    let magnitude = (c.0 * c.0 + c.1 * c.1 + c.2 * c.2).sqrt();
    if magnitude > 0.0 {
        (c.0 / magnitude, c.1 / magnitude, c.2 / magnitude)
    } else {
        (0.0, 0.0, 0.0)
    }
}

/// Calculate area-weighted vertex normals for a whole mesh
///
/// For each triangle the unnormalized cross product (whose magnitude is twice
/// the face area) is accumulated onto its three vertices, then the sums are
/// normalized. Degenerate triangles and out-of-bounds indices are skipped;
/// unreferenced vertices get a zero normal.
pub fn vertex_normals(mesh: &Mesh) -> Vec<Vector3> {
    let mut normals: Vec<Vector3> = vec![(0.0, 0.0, 0.0); mesh.vertices.len()];

    for triangle in &mesh.triangles {
        if triangle.v1 >= mesh.vertices.len()
            || triangle.v2 >= mesh.vertices.len()
            || triangle.v3 >= mesh.vertices.len()
        {
            continue;
        }
        let v0 = &mesh.vertices[triangle.v1];
        let v1 = &mesh.vertices[triangle.v2];
        let v2 = &mesh.vertices[triangle.v3];

        let edge1 = (v1.x - v0.x, v1.y - v0.y, v1.z - v0.z);
        let edge2 = (v2.x - v0.x, v2.y - v0.y, v2.z - v0.z);
        let weighted = cross(edge1, edge2);

        let magnitude =
            (weighted.0 * weighted.0 + weighted.1 * weighted.1 + weighted.2 * weighted.2).sqrt();
        if magnitude > 0.0 {
            for &idx in &[triangle.v1, triangle.v2, triangle.v3] {
                normals[idx].0 += weighted.0;
                normals[idx].1 += weighted.1;
                normals[idx].2 += weighted.2;
            }
        }
    }

    normals
        .into_iter()
        .map(|(x, y, z)| {
            let magnitude = (x * x + y * y + z * z).sqrt();
            if magnitude > 0.0 {
                (x / magnitude, y / magnitude, z / magnitude)
            } else {
                (0.0, 0.0, 0.0)
            }
        })
        .collect()
}
