//! Closed 2D contours and their derived measures

/// A 2D point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2 {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
}

impl Point2 {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned 2D bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox2D {
    /// Minimum X
    pub min_x: f64,
    /// Minimum Y
    pub min_y: f64,
    /// Maximum X
    pub max_x: f64,
    /// Maximum Y
    pub max_y: f64,
}

impl BoundingBox2D {
    /// Whether `other` lies entirely within this box
    pub fn contains(&self, other: &BoundingBox2D) -> bool {
        self.min_x <= other.min_x
            && self.min_y <= other.min_y
            && self.max_x >= other.max_x
            && self.max_y >= other.max_y
    }

    /// Box width
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Box height
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}

/// A closed polygon derived from one `MoveTo…Close` run of outline commands
///
/// Points are stored without the duplicate closing point; the last point
/// implicitly connects back to the first. The sign of [`Contour::signed_area`]
/// encodes winding direction, but font backends are inconsistent about
/// winding, so classification never relies on it directly.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    /// The polygon's points, in emission order
    pub points: Vec<Point2>,
}

impl Contour {
    /// Create a contour from points
    pub fn new(points: Vec<Point2>) -> Self {
        Self { points }
    }

    /// Signed area by the shoelace formula
    ///
    /// Positive for counter-clockwise winding, negative for clockwise.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        let mut sum = 0.0;
        for i in 0..n {
            let p = self.points[i];
            let q = self.points[(i + 1) % n];
            sum += p.x * q.y - q.x * p.y;
        }
        sum / 2.0
    }

    /// Absolute area
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    /// Whether the contour winds counter-clockwise
    pub fn is_ccw(&self) -> bool {
        self.signed_area() > 0.0
    }

    /// Reverse the point order, flipping the winding direction
    pub fn reverse(&mut self) {
        self.points.reverse();
    }

    /// Axis-aligned bounding box, or `None` for an empty contour
    pub fn bounding_box(&self) -> Option<BoundingBox2D> {
        let first = self.points.first()?;
        let mut bbox = BoundingBox2D {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        for p in &self.points[1..] {
            bbox.min_x = bbox.min_x.min(p.x);
            bbox.min_y = bbox.min_y.min(p.y);
            bbox.max_x = bbox.max_x.max(p.x);
            bbox.max_y = bbox.max_y.max(p.y);
        }
        Some(bbox)
    }

    /// Ray-casting point-in-polygon test
    ///
    /// Casts a ray in +X and counts edge crossings. Points exactly on an
    /// edge may land on either side; classification tolerates that because
    /// it pairs this test with a bounding-box check.
    pub fn contains_point(&self, point: Point2) -> bool {
        let n = self.points.len();
        if n < 3 {
            return false;
        }
        let mut inside = false;
        let mut j = n - 1;
        for i in 0..n {
            let pi = self.points[i];
            let pj = self.points[j];
            if (pi.y > point.y) != (pj.y > point.y) {
                let x_cross = (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x;
                if point.x < x_cross {
                    inside = !inside;
                }
            }
            j = i;
        }
        inside
    }

    /// A representative interior-ish point: the first vertex
    ///
    /// For claims against an enclosing contour a boundary vertex is enough,
    /// since a hole's boundary lies strictly inside its outer shape for
    /// well-formed glyphs.
    pub fn representative_point(&self) -> Option<Point2> {
        self.points.first().copied()
    }
}
