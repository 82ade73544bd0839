//! OPC container assembly
//!
//! Writes the ZIP package: `[Content_Types].xml`, `_rels/.rels`, the root
//! model document, and any additional parts (per-object models, their
//! relationships, slicer configuration documents).

use std::io::Write;

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::error::Result;
use crate::threemf::MODEL_RELATIONSHIP_TYPE;

/// Package path of the root model document
pub const MODEL_PATH: &str = "3D/3dmodel.model";
/// Package path of the content types declaration
pub const CONTENT_TYPES_PATH: &str = "[Content_Types].xml";
/// Package path of the package-level relationships
pub const RELS_PATH: &str = "_rels/.rels";

/// One file inside the package
#[derive(Debug, Clone)]
pub struct PackagePart {
    /// Path within the archive, forward slashes, no leading slash
    pub path: String,
    /// UTF-8 content
    pub content: String,
}

impl PackagePart {
    /// The root model part
    pub fn root_model(content: String) -> Self {
        Self {
            path: MODEL_PATH.to_string(),
            content,
        }
    }
}

/// Create a 3MF package (ZIP archive) from the given parts
///
/// Always writes `[Content_Types].xml` and `_rels/.rels` first, then every
/// supplied part. The content types declare the `rels`, `model` and `config`
/// extensions so slicer metadata parts validate.
///
/// # Returns
///
/// The writer after finishing the archive.
pub fn create_package<W: Write + std::io::Seek>(writer: W, parts: &[PackagePart]) -> Result<W> {
    let mut zip = ZipWriter::new(writer);
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let content_types = r#"<?xml version="1.0" encoding="UTF-8"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="model" ContentType="application/vnd.ms-package.3dmanufacturing-3dmodel+xml"/>
  <Default Extension="config" ContentType="application/xml"/>
</Types>"#;

    zip.start_file(CONTENT_TYPES_PATH, options)?;
    zip.write_all(content_types.as_bytes())?;

    let rels = format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Target="/{}" Id="rel0" Type="{}"/>
</Relationships>"#,
        MODEL_PATH, MODEL_RELATIONSHIP_TYPE
    );

    zip.start_file(RELS_PATH, options)?;
    zip.write_all(rels.as_bytes())?;

    for part in parts {
        zip.start_file(&part.path, options)?;
        zip.write_all(part.content.as_bytes())?;
    }

    let writer = zip.finish()?;
    Ok(writer)
}
