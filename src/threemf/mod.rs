//! 3MF package assembly
//!
//! Turns a set of positioned solids into a single ZIP/OPC binary blob that
//! slicers accept without repair. Packaging is a linear pipeline: collect
//! meshes, validate geometry, generate resource XML, generate build XML,
//! generate metadata XML, then zip. There is no branching back; the outcome
//! is either the finished byte vector or an error before any bytes are
//! produced.

pub mod metadata;
pub mod opc;
pub mod xml;

use std::io::Cursor;

use crate::config::{Color, PackageLayout, UpAxis};
use crate::error::{Error, Result};
use crate::mesh::Mesh;
use crate::validate;

/// XML namespace of the 3MF core model schema
pub const CORE_NAMESPACE: &str = "http://schemas.microsoft.com/3dmanufacturing/core/2015/02";
/// XML namespace of the 3MF production extension (`p:` prefix, UUIDs)
pub const PRODUCTION_NAMESPACE: &str =
    "http://schemas.microsoft.com/3dmanufacturing/production/2015/06";
/// Relationship type of the root model part
pub const MODEL_RELATIONSHIP_TYPE: &str =
    "http://schemas.microsoft.com/3dmanufacturing/2013/01/3dmodel";

/// MIME type of an exported package
pub const PACKAGE_MIME_TYPE: &str = "application/3mf";

/// A named mesh with a material color and a translation-only transform
#[derive(Debug, Clone)]
pub struct Solid {
    /// Part name, shown by slicers in the object list
    pub name: String,
    /// The triangulated body
    pub mesh: Mesh,
    /// Material color, read at export time so the package matches the
    /// caller's live state
    pub color: Color,
    /// Rigid translation (x, y, z); rotation never occurs in this domain
    pub translation: (f64, f64, f64),
}

impl Solid {
    /// Create a solid
    pub fn new(
        name: impl Into<String>,
        mesh: Mesh,
        color: Color,
        translation: (f64, f64, f64),
    ) -> Self {
        Self {
            name: name.into(),
            mesh,
            color,
            translation,
        }
    }

    /// Number of triangles in the body
    pub fn face_count(&self) -> usize {
        self.mesh.triangles.len()
    }
}

/// The complete exportable unit: an ordered set of solids plus package-level
/// options
///
/// Object ids are assigned by position (1-based); solids are serialized
/// immediately after assembly and never mutated afterward.
#[derive(Debug, Clone)]
pub struct PackageModel {
    /// The solids to export, in object-id order
    pub solids: Vec<Solid>,
    /// Model unit written into every model document
    pub unit: String,
    /// Up-axis remap applied to every emitted coordinate
    pub up_axis: UpAxis,
    /// Object layout of the package
    pub layout: PackageLayout,
}

impl PackageModel {
    /// Create a package model
    pub fn new(solids: Vec<Solid>, unit: impl Into<String>, up_axis: UpAxis) -> Self {
        Self {
            solids,
            unit: unit.into(),
            up_axis,
            layout: PackageLayout::default(),
        }
    }

    /// Select the object layout
    pub fn with_layout(mut self, layout: PackageLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Serialize to a 3MF binary blob
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyModel`] when no solids were supplied, and
    /// propagates XML/ZIP failures.
    pub fn package(&self) -> Result<Vec<u8>> {
        if self.solids.is_empty() {
            return Err(Error::EmptyModel(
                "package model contains no solids".to_string(),
            ));
        }

        // Advisory geometry pass; warnings never block export.
        for solid in &self.solids {
            let report = validate::validate(&solid.mesh);
            if !report.is_clean() {
                log::warn!("solid '{}' has validation warnings: {:?}", solid.name, report);
            }
        }

        let parts = match self.layout {
            PackageLayout::Flat => self.flat_parts()?,
            PackageLayout::Assembly => self.assembly_parts()?,
        };

        let cursor = opc::create_package(Cursor::new(Vec::new()), &parts)?;
        Ok(cursor.into_inner())
    }

    /// Serialize to a file at `path`
    pub fn write_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let bytes = self.package()?;
        std::fs::write(path, bytes)?;
        Ok(())
    }

    fn flat_parts(&self) -> Result<Vec<opc::PackagePart>> {
        let model_xml = xml::write_flat_model(self)?;
        Ok(vec![opc::PackagePart::root_model(model_xml)])
    }

    fn assembly_parts(&self) -> Result<Vec<opc::PackagePart>> {
        let mut parts = Vec::new();

        let object_uuids: Vec<String> = self
            .solids
            .iter()
            .map(|_| uuid::Uuid::new_v4().to_string())
            .collect();
        let parent_uuid = uuid::Uuid::new_v4().to_string();
        let build_uuid = uuid::Uuid::new_v4().to_string();

        for (index, solid) in self.solids.iter().enumerate() {
            let object_id = index + 1;
            let content =
                xml::write_object_model(solid, object_id, &object_uuids[index], self)?;
            parts.push(opc::PackagePart {
                path: xml::object_part_path(object_id),
                content,
            });
        }

        let root =
            xml::write_assembly_root_model(self, &object_uuids, &parent_uuid, &build_uuid)?;
        parts.push(opc::PackagePart::root_model(root));

        parts.push(opc::PackagePart {
            path: "3D/_rels/3dmodel.model.rels".to_string(),
            content: xml::write_model_relationships(self.solids.len()),
        });

        parts.push(opc::PackagePart {
            path: "Metadata/model_settings.config".to_string(),
            content: metadata::model_settings(self, &object_uuids),
        });

        Ok(parts)
    }
}

/// Derive a download filename from the input text
///
/// Non-alphanumeric characters are replaced by underscores, runs collapsed,
/// with a fixed fallback for text that leaves nothing usable.
pub fn suggested_filename(text: &str) -> String {
    let mut stem = String::with_capacity(text.len());
    let mut last_was_sep = true;
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() {
            stem.push(ch);
            last_was_sep = false;
        } else if !last_was_sep {
            stem.push('_');
            last_was_sep = true;
        }
    }
    let stem = stem.trim_matches('_');
    if stem.is_empty() {
        "text.3mf".to_string()
    } else {
        format!("{}.3mf", stem)
    }
}
