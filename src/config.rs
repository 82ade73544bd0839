//! Render and package configuration
//!
//! All tunables consumed by the geometry pipeline and the packager live in
//! plain immutable structs that are passed down by value. There is no shared
//! global configuration; a caller that wants different settings builds a new
//! [`RenderOptions`].

/// Up-axis convention applied to every vertex written into a package
///
/// The remap is applied uniformly at emission time so a mesh is never
/// partially transformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpAxis {
    /// X is up: `(x, y, z)` becomes `(y, z, x)`
    XUp,
    /// Y is up: identity (the pipeline's native convention)
    #[default]
    YUp,
    /// Z is up: `(x, y, z)` becomes `(x, z, -y)`
    ZUp,
}

impl UpAxis {
    /// Remap a coordinate triple into this up-axis convention
    pub fn transform(&self, x: f64, y: f64, z: f64) -> (f64, f64, f64) {
        match self {
            UpAxis::YUp => (x, y, z),
            UpAxis::ZUp => (x, z, -y),
            UpAxis::XUp => (y, z, x),
        }
    }
}

/// Package object layout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackageLayout {
    /// One object per solid, meshes inline in the root model document
    #[default]
    Flat,
    /// One parent object whose components reference per-part object files,
    /// with per-part slicer metadata attached to the named parts
    Assembly,
}

/// An RGBA color attached to a solid's material
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel
    pub a: u8,
}

impl Color {
    /// Create an opaque color
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Format as `#RRGGBBAA` for 3MF display colors
    pub fn to_display(&self) -> String {
        format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
    }

    /// Format as `#RRGGBB` for slicer configuration documents
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// All inputs to one render of a text plaque
///
/// Distances are millimeters. The defaults produce a nameplate-sized part
/// that prints without support on a standard FDM machine.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// The text to render
    pub text: String,
    /// Font size passed to the outline backend, in model units
    pub font_size: f64,
    /// Extrusion depth of the glyph body
    pub foreground_depth: f64,
    /// Extrusion depth of the plaque under the glyphs
    pub background_depth: f64,
    /// How far the plaque outline grows outward from the glyph outline
    pub outer_offset: f64,
    /// How far plaque holes shrink inward from the glyph counters
    pub inner_offset: f64,
    /// Extra X translation applied to the finished part
    pub x_offset: f64,
    /// Extra Y translation applied to the finished part
    pub y_offset: f64,
    /// Interpenetration between foreground and background along Z, so a
    /// slicer fuses the two bodies instead of leaving a zero-thickness seam
    pub overlap: f64,
    /// Target bounding width of the glyph body after uniform XY scaling;
    /// `None` keeps the font-native size
    pub target_width: Option<f64>,
    /// Sample count per quadratic/cubic curve during flattening
    pub curve_segments: usize,
    /// Model unit written into the package
    pub unit: String,
    /// Up-axis convention for emitted coordinates
    pub up_axis: UpAxis,
    /// Material color of the glyph body
    pub foreground_color: Color,
    /// Material color of the plaque
    pub background_color: Color,
}

impl RenderOptions {
    /// Create options for the given text with default tunables
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            font_size: 50.0,
            foreground_depth: 2.0,
            background_depth: 2.0,
            outer_offset: 2.0,
            inner_offset: 0.5,
            x_offset: 0.0,
            y_offset: 0.0,
            overlap: 0.05,
            target_width: None,
            curve_segments: 16,
            unit: "millimeter".to_string(),
            up_axis: UpAxis::YUp,
            foreground_color: Color::rgb(0x20, 0x20, 0x20),
            background_color: Color::rgb(0xE0, 0xE0, 0xE0),
        }
    }

    /// Set the extrusion depths
    pub fn with_depths(mut self, foreground: f64, background: f64) -> Self {
        self.foreground_depth = foreground;
        self.background_depth = background;
        self
    }

    /// Set the plaque offsets
    pub fn with_offsets(mut self, outer: f64, inner: f64) -> Self {
        self.outer_offset = outer;
        self.inner_offset = inner;
        self
    }

    /// Set the target bounding width of the glyph body
    pub fn with_target_width(mut self, width: f64) -> Self {
        self.target_width = Some(width);
        self
    }

    /// Set the curve flattening quality
    pub fn with_curve_segments(mut self, segments: usize) -> Self {
        self.curve_segments = segments;
        self
    }

    /// Set the up-axis convention
    pub fn with_up_axis(mut self, up_axis: UpAxis) -> Self {
        self.up_axis = up_axis;
        self
    }

    /// Set the material colors
    pub fn with_colors(mut self, foreground: Color, background: Color) -> Self {
        self.foreground_color = foreground;
        self.background_color = background;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_up_axis_remap() {
        assert_eq!(UpAxis::YUp.transform(1.0, 2.0, 3.0), (1.0, 2.0, 3.0));
        assert_eq!(UpAxis::ZUp.transform(1.0, 2.0, 3.0), (1.0, 3.0, -2.0));
        assert_eq!(UpAxis::XUp.transform(1.0, 2.0, 3.0), (2.0, 3.0, 1.0));
    }

    #[test]
    fn test_color_formatting() {
        let c = Color::rgb(0x12, 0xAB, 0xFF);
        assert_eq!(c.to_display(), "#12ABFFFF");
        assert_eq!(c.to_hex(), "#12ABFF");
    }

    #[test]
    fn test_builder_methods() {
        let opts = RenderOptions::new("Hi")
            .with_depths(3.0, 1.5)
            .with_offsets(2.5, 0.25)
            .with_target_width(80.0)
            .with_up_axis(UpAxis::ZUp);
        assert_eq!(opts.text, "Hi");
        assert_eq!(opts.foreground_depth, 3.0);
        assert_eq!(opts.background_depth, 1.5);
        assert_eq!(opts.outer_offset, 2.5);
        assert_eq!(opts.target_width, Some(80.0));
        assert_eq!(opts.up_axis, UpAxis::ZUp);
    }
}
