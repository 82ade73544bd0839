//! 2D geometry: contours, flattening, classification, offsetting,
//! triangulation
//!
//! Everything here is transient per render: contours and shapes are rebuilt
//! from scratch on every input change and never cached.

pub mod classify;
pub mod contour;
pub mod flatten;
pub mod offset;
pub mod triangulate;

pub use classify::{classify, GlyphShape};
pub use contour::{BoundingBox2D, Contour, Point2};
pub use flatten::flatten;
pub use offset::{offset_contour, offset_shape};
