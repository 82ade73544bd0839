//! Font outline backend
//!
//! Wraps `ttf-parser` behind a small command-stream contract so the rest of
//! the crate never touches font internals. The backend is authoritative: the
//! geometry pipeline consumes whatever outline it yields per character and
//! performs no font-format parsing of its own.
//!
//! Coordinates are pre-scaled from font design units to the requested size
//! and are Y-up, matching font conventions.

use crate::error::{Error, Result};

/// One outline drawing command, as produced by the font backend
///
/// A glyph outline is a run of commands starting with [`PathCommand::MoveTo`]
/// and usually ending with [`PathCommand::Close`]. Immutable once read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Start a new contour at the given point
    MoveTo {
        /// X coordinate
        x: f64,
        /// Y coordinate
        y: f64,
    },
    /// Straight line to the given point
    LineTo {
        /// X coordinate
        x: f64,
        /// Y coordinate
        y: f64,
    },
    /// Quadratic Bezier (TrueType-style) through one control point
    QuadTo {
        /// Control point X
        x1: f64,
        /// Control point Y
        y1: f64,
        /// End point X
        x: f64,
        /// End point Y
        y: f64,
    },
    /// Cubic Bezier (CFF-style) through two control points
    CubicTo {
        /// First control point X
        x1: f64,
        /// First control point Y
        y1: f64,
        /// Second control point X
        x2: f64,
        /// Second control point Y
        y2: f64,
        /// End point X
        x: f64,
        /// End point Y
        y: f64,
    },
    /// Close the current contour
    Close,
}

/// Outline of a whole text string, glyphs already laid out by advance width
#[derive(Debug, Clone)]
pub struct TextOutline {
    /// Total horizontal advance of the string, in scaled units
    pub advance_width: f64,
    /// Font ascender, in scaled units
    pub ascender: f64,
    /// Font descender (typically negative), in scaled units
    pub descender: f64,
    /// The concatenated outline commands of every glyph
    pub commands: Vec<PathCommand>,
}

/// A parsed font face
pub struct FontFace<'a> {
    face: ttf_parser::Face<'a>,
}

impl<'a> FontFace<'a> {
    /// Parse a font face from raw TTF/OTF bytes
    ///
    /// # Errors
    ///
    /// Returns [`Error::FontLoad`] if the bytes are not a parseable face.
    pub fn parse(data: &'a [u8]) -> Result<Self> {
        let face = ttf_parser::Face::parse(data, 0)
            .map_err(|e| Error::font_load(format!("failed to parse font face: {}", e)))?;
        Ok(Self { face })
    }

    /// Extract the outline of a text string at the given size
    ///
    /// Each glyph is positioned by the previous glyphs' advance widths
    /// (no kerning). Control characters are skipped; glyphs without an
    /// outline (e.g. space) advance the pen without emitting commands.
    ///
    /// The returned command stream may be empty for whitespace-only text;
    /// callers decide whether that is an error.
    pub fn outline_text(&self, text: &str, size: f64) -> TextOutline {
        let units_per_em = f64::from(self.face.units_per_em());
        let scale = size / units_per_em;

        let mut commands = Vec::new();
        let mut pen_x = 0.0;

        for ch in text.chars() {
            if ch.is_control() {
                continue;
            }
            let Some(glyph_id) = self.face.glyph_index(ch) else {
                log::warn!("font has no glyph for {:?}, skipping", ch);
                continue;
            };

            let mut collector = CommandCollector {
                commands: &mut commands,
                scale,
                pen_x,
            };
            // None for empty glyphs like space; the advance still applies.
            let _ = self.face.outline_glyph(glyph_id, &mut collector);

            let advance = self
                .face
                .glyph_hor_advance(glyph_id)
                .map(f64::from)
                .unwrap_or(units_per_em * 0.5);
            pen_x += advance * scale;
        }

        TextOutline {
            advance_width: pen_x,
            ascender: f64::from(self.face.ascender()) * scale,
            descender: f64::from(self.face.descender()) * scale,
            commands,
        }
    }
}

impl std::fmt::Debug for FontFace<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("units_per_em", &self.face.units_per_em())
            .field("glyph_count", &self.face.number_of_glyphs())
            .finish()
    }
}

/// Receives `ttf_parser` outline callbacks and records scaled [`PathCommand`]s
struct CommandCollector<'c> {
    commands: &'c mut Vec<PathCommand>,
    scale: f64,
    pen_x: f64,
}

impl CommandCollector<'_> {
    #[inline]
    fn tx(&self, x: f32, y: f32) -> (f64, f64) {
        (f64::from(x) * self.scale + self.pen_x, f64::from(y) * self.scale)
    }
}

impl ttf_parser::OutlineBuilder for CommandCollector<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.tx(x, y);
        self.commands.push(PathCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f32, y: f32) {
        let (x, y) = self.tx(x, y);
        self.commands.push(PathCommand::LineTo { x, y });
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        let (x1, y1) = self.tx(x1, y1);
        let (x, y) = self.tx(x, y);
        self.commands.push(PathCommand::QuadTo { x1, y1, x, y });
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        let (x1, y1) = self.tx(x1, y1);
        let (x2, y2) = self.tx(x2, y2);
        let (x, y) = self.tx(x, y);
        self.commands.push(PathCommand::CubicTo { x1, y1, x2, y2, x, y });
    }

    fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }
}
