//! # typeplate
//!
//! Turn a line of text, rendered in an outline font, into a pair of solid
//! 3D-printable bodies (a raised glyph body on a recessed plaque) and
//! serialize them as a 3MF package that slicers accept without repair.
//!
//! ## Pipeline
//!
//! Text and font bytes flow through a single synchronous pipeline:
//! outline extraction → curve flattening → outer/hole classification →
//! plaque offsetting → extrusion → validation → 3MF packaging. Every render
//! recomputes from scratch; nothing is cached or mutated in place, so a
//! failed render never disturbs a previously returned result.
//!
//! ## Example
//!
//! ```no_run
//! use typeplate::{render, FontFace, RenderOptions};
//!
//! # fn main() -> typeplate::Result<()> {
//! let font_data = std::fs::read("font.ttf")?;
//! let face = FontFace::parse(&font_data)?;
//!
//! let options = RenderOptions::new("Hello")
//!     .with_depths(2.0, 2.0)
//!     .with_target_width(100.0);
//!
//! let rendered = render(&face, &options)?;
//! println!(
//!     "{} x {} x {} mm",
//!     rendered.dimensions.width, rendered.dimensions.height, rendered.dimensions.depth
//! );
//! rendered.write_to_file("hello.3mf")?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod font;
pub mod geometry;
pub mod mesh;
pub mod solid;
pub mod threemf;
pub mod validate;

pub use config::{Color, PackageLayout, RenderOptions, UpAxis};
pub use error::{Error, Result};
pub use font::{FontFace, PathCommand, TextOutline};
pub use geometry::{classify, flatten, Contour, GlyphShape, Point2};
pub use mesh::{Mesh, Triangle, Vertex};
pub use solid::Dimensions;
pub use threemf::{suggested_filename, PackageModel, Solid};
pub use validate::ValidationReport;

/// The finished render of one text string: two positioned solids plus
/// display dimensions
#[derive(Debug, Clone)]
pub struct RenderedText {
    /// The raised glyph body
    pub foreground: Solid,
    /// The plaque underneath
    pub background: Solid,
    /// Bounding dimensions for display
    pub dimensions: Dimensions,
    /// Model unit for packaging
    pub unit: String,
    /// Up-axis convention for packaging
    pub up_axis: UpAxis,
}

impl RenderedText {
    /// Wrap the solids into an exportable package model
    pub fn into_package(self, layout: PackageLayout) -> PackageModel {
        PackageModel::new(vec![self.foreground, self.background], self.unit, self.up_axis)
            .with_layout(layout)
    }

    /// Serialize to a 3MF binary blob using the given layout
    pub fn export(&self, layout: PackageLayout) -> Result<Vec<u8>> {
        self.clone().into_package(layout).package()
    }

    /// Serialize to a 3MF file using the assembly layout
    ///
    /// The assembly layout is the default for files because slicers attach
    /// per-part extruder and material metadata to named parts.
    pub fn write_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let bytes = self.export(PackageLayout::Assembly)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}

/// Run the full geometry pipeline for one text string
///
/// # Errors
///
/// - [`Error::EmptyGeometry`] for text that produces no outer shapes
///   (empty or whitespace-only input, or glyphs without outlines)
/// - [`Error::DegenerateGeometry`] if plaque offsetting collapses a boundary
/// - [`Error::Triangulation`] if a shape cannot be triangulated
pub fn render(face: &FontFace<'_>, options: &RenderOptions) -> Result<RenderedText> {
    let outline = face.outline_text(&options.text, options.font_size);
    if outline.commands.is_empty() {
        return Err(Error::EmptyGeometry(format!(
            "text {:?} produced no outline commands",
            options.text
        )));
    }

    let contours = flatten(&outline.commands, options.curve_segments);
    let shapes = classify(contours)?;
    if shapes.is_empty() {
        return Err(Error::EmptyGeometry(format!(
            "text {:?} produced no outer shapes",
            options.text
        )));
    }

    let mut foreground = solid::build_foreground(&shapes, options.foreground_depth)?;
    let mut background = solid::build_background(
        &shapes,
        options.outer_offset,
        options.inner_offset,
        options.background_depth,
    )?;

    if let Some(target_width) = options.target_width {
        solid::scale_to_width(&mut foreground, &mut background, target_width);
    }

    let (foreground, background) = solid::position(foreground, background, options);
    let dimensions = solid::dimensions(&foreground, &background, options);

    Ok(RenderedText {
        foreground,
        background,
        dimensions,
        unit: options.unit.clone(),
        up_axis: options.up_axis,
    })
}
