//! Error types for the text-to-3MF pipeline
//!
//! This module provides error handling for every stage of the pipeline,
//! from font loading through geometry construction to package writing.
//! All errors carry error codes for categorization.
//!
//! # Error Codes
//!
//! Error codes follow the pattern: `E<category><number>`
//!
//! Categories:
//! - **E1xxx**: I/O and archive errors
//! - **E2xxx**: Font and XML writing errors
//! - **E3xxx**: Geometry construction errors
//! - **E4xxx**: Package assembly errors

use std::io;
use thiserror::Error;

/// Result type for typeplate operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while turning text into a 3MF package
#[derive(Error, Debug)]
pub enum Error {
    /// IO error occurred while reading or writing a file
    ///
    /// **Error Code**: E1001
    ///
    /// **Common Causes**:
    /// - Output file not writable
    /// - Font file not found
    /// - Disk error
    #[error("[E1001] I/O error: {0}")]
    Io(#[from] io::Error),

    /// ZIP archive error
    ///
    /// **Error Code**: E1002
    ///
    /// **Common Causes**:
    /// - Output stream rejected a write
    /// - Archive finalization failure
    #[error("[E1002] ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// The font backend could not parse the supplied font data
    ///
    /// **Error Code**: E2101
    ///
    /// **Common Causes**:
    /// - Truncated or corrupt font file
    /// - Unsupported font container (e.g. WOFF2 without decompression)
    ///
    /// **Suggestions**:
    /// - Verify the bytes are a raw TTF/OTF face
    /// - Re-download or re-export the font
    #[error("[E2101] Font load error: {0}")]
    FontLoad(String),

    /// XML writing error
    ///
    /// **Error Code**: E2005
    ///
    /// **Common Causes**:
    /// - Failed to serialize model XML
    /// - I/O error while writing a package part
    #[error("[E2005] XML writing error: {0}")]
    XmlWrite(String),

    /// Classification produced zero outer shapes from non-empty input
    ///
    /// **Error Code**: E3101
    ///
    /// **Common Causes**:
    /// - Empty or whitespace-only text
    /// - A font whose glyphs carry no outlines for the requested characters
    ///
    /// **Suggestions**:
    /// - Check that the text contains printable characters
    /// - Check that the font covers the requested characters
    #[error("[E3101] Empty geometry: {0}")]
    EmptyGeometry(String),

    /// A shape collapsed below 3 usable points
    ///
    /// **Error Code**: E3102
    ///
    /// **Common Causes**:
    /// - An inward offset larger than the shape itself
    /// - Degenerate contours surviving flattening
    ///
    /// **Suggestions**:
    /// - Reduce the inner offset distance
    /// - Increase the curve segment count
    #[error("[E3102] Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    /// Polygon triangulation failed
    ///
    /// **Error Code**: E3103
    ///
    /// **Common Causes**:
    /// - Severely self-intersecting contour
    /// - Holes lying outside their outer boundary
    #[error("[E3103] Triangulation failed: {0}")]
    Triangulation(String),

    /// The packager was given zero solids
    ///
    /// **Error Code**: E4101
    ///
    /// A package with no build content would still be a "valid" 3MF, but
    /// emitting one silently hides the upstream failure, so this is surfaced
    /// at export time instead.
    #[error("[E4101] Empty model: {0}")]
    EmptyModel(String),
}

impl Error {
    /// Create a FontLoad error with context about which face failed
    pub fn font_load(message: impl Into<String>) -> Self {
        Error::FontLoad(message.into())
    }

    /// Create an XmlWrite error
    pub fn xml_write(message: impl Into<String>) -> Self {
        Error::XmlWrite(message.into())
    }

    /// Create a DegenerateGeometry error naming the shape and its point count
    ///
    /// # Arguments
    /// * `what` - The shape being built (e.g. "offset outer contour")
    /// * `points` - How many usable points remained
    pub fn degenerate(what: &str, points: usize) -> Self {
        Error::DegenerateGeometry(format!(
            "{} has only {} usable point(s) (minimum 3 required)",
            what, points
        ))
    }
}
