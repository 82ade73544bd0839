//! Model XML generation
//!
//! All documents are built by hand with string pushes; the vocabulary is
//! small and fixed, and hand-building keeps the output byte-stable. Every
//! vertex passes through the configured up-axis remap exactly once, on
//! emission, so a mesh is never partially transformed.

use crate::error::Result;
use crate::mesh::Mesh;
use crate::threemf::{PackageModel, Solid, CORE_NAMESPACE, PRODUCTION_NAMESPACE};

/// Package path of the per-object model file for `object_id`
pub fn object_part_path(object_id: usize) -> String {
    format!("3D/Objects/object_{}.model", object_id)
}

/// Escape special XML characters
pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Fixed-decimal coordinate formatting, 6 places
fn fmt_coord(v: f64) -> String {
    format!("{:.6}", v)
}

/// A translation-only 4x3 transform attribute, axis-remapped
fn translation_transform(model: &PackageModel, t: (f64, f64, f64)) -> String {
    let (tx, ty, tz) = model.up_axis.transform(t.0, t.1, t.2);
    format!(
        "1 0 0 0 1 0 0 0 1 {} {} {}",
        fmt_coord(tx),
        fmt_coord(ty),
        fmt_coord(tz)
    )
}

/// Emit `<vertices>` and `<triangles>` blocks for a mesh
fn push_mesh(xml: &mut String, mesh: &Mesh, model: &PackageModel, indent: &str) {
    xml.push_str(indent);
    xml.push_str("<mesh>\n");

    xml.push_str(indent);
    xml.push_str("  <vertices>\n");
    for vertex in &mesh.vertices {
        let (x, y, z) = model.up_axis.transform(vertex.x, vertex.y, vertex.z);
        xml.push_str(indent);
        xml.push_str("    <vertex x=\"");
        xml.push_str(&fmt_coord(x));
        xml.push_str("\" y=\"");
        xml.push_str(&fmt_coord(y));
        xml.push_str("\" z=\"");
        xml.push_str(&fmt_coord(z));
        xml.push_str("\"/>\n");
    }
    xml.push_str(indent);
    xml.push_str("  </vertices>\n");

    xml.push_str(indent);
    xml.push_str("  <triangles>\n");
    for triangle in &mesh.triangles {
        xml.push_str(indent);
        xml.push_str("    <triangle v1=\"");
        xml.push_str(&triangle.v1.to_string());
        xml.push_str("\" v2=\"");
        xml.push_str(&triangle.v2.to_string());
        xml.push_str("\" v3=\"");
        xml.push_str(&triangle.v3.to_string());
        xml.push_str("\"/>\n");
    }
    xml.push_str(indent);
    xml.push_str("  </triangles>\n");

    xml.push_str(indent);
    xml.push_str("</mesh>\n");
}

/// Write the single-document flat model: one object per solid, meshes
/// inline, material colors in a `<basematerials>` group
pub fn write_flat_model(model: &PackageModel) -> Result<String> {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str("<model unit=\"");
    xml.push_str(&escape_xml(&model.unit));
    xml.push_str("\" xml:lang=\"en-US\" xmlns=\"");
    xml.push_str(CORE_NAMESPACE);
    xml.push_str("\">\n");

    xml.push_str("  <metadata name=\"Application\">typeplate</metadata>\n");

    xml.push_str("  <resources>\n");

    // Colors read from each solid's material state at export time.
    xml.push_str("    <basematerials id=\"1\">\n");
    for solid in &model.solids {
        xml.push_str("      <base name=\"");
        xml.push_str(&escape_xml(&solid.name));
        xml.push_str("\" displaycolor=\"");
        xml.push_str(&solid.color.to_display());
        xml.push_str("\"/>\n");
    }
    xml.push_str("    </basematerials>\n");

    for (index, solid) in model.solids.iter().enumerate() {
        xml.push_str("    <object id=\"");
        xml.push_str(&(index + 2).to_string());
        xml.push_str("\" name=\"");
        xml.push_str(&escape_xml(&solid.name));
        xml.push_str("\" type=\"model\" pid=\"1\" pindex=\"");
        xml.push_str(&index.to_string());
        xml.push_str("\">\n");
        push_mesh(&mut xml, &solid.mesh, model, "      ");
        xml.push_str("    </object>\n");
    }

    xml.push_str("  </resources>\n");

    xml.push_str("  <build>\n");
    for (index, solid) in model.solids.iter().enumerate() {
        xml.push_str("    <item objectid=\"");
        xml.push_str(&(index + 2).to_string());
        xml.push_str("\" transform=\"");
        xml.push_str(&translation_transform(model, solid.translation));
        xml.push_str("\"/>\n");
    }
    xml.push_str("  </build>\n");

    xml.push_str("</model>\n");
    Ok(xml)
}

/// Write one per-part object document for the assembly layout
pub fn write_object_model(
    solid: &Solid,
    object_id: usize,
    object_uuid: &str,
    model: &PackageModel,
) -> Result<String> {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str("<model unit=\"");
    xml.push_str(&escape_xml(&model.unit));
    xml.push_str("\" xml:lang=\"en-US\" xmlns=\"");
    xml.push_str(CORE_NAMESPACE);
    xml.push_str("\" xmlns:p=\"");
    xml.push_str(PRODUCTION_NAMESPACE);
    xml.push_str("\" requiredextensions=\"p\">\n");

    xml.push_str("  <resources>\n");
    xml.push_str("    <object id=\"");
    xml.push_str(&object_id.to_string());
    xml.push_str("\" name=\"");
    xml.push_str(&escape_xml(&solid.name));
    xml.push_str("\" type=\"model\" p:UUID=\"");
    xml.push_str(object_uuid);
    xml.push_str("\">\n");
    push_mesh(&mut xml, &solid.mesh, model, "      ");
    xml.push_str("    </object>\n");
    xml.push_str("  </resources>\n");

    // Object documents carry no build items; the root model builds the
    // assembly.
    xml.push_str("  <build/>\n");
    xml.push_str("</model>\n");
    Ok(xml)
}

/// Write the assembly root model: one parent object whose components
/// reference the per-part object files with translation-only transforms
pub fn write_assembly_root_model(
    model: &PackageModel,
    object_uuids: &[String],
    parent_uuid: &str,
    build_uuid: &str,
) -> Result<String> {
    let parent_id = model.solids.len() + 1;

    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str("<model unit=\"");
    xml.push_str(&escape_xml(&model.unit));
    xml.push_str("\" xml:lang=\"en-US\" xmlns=\"");
    xml.push_str(CORE_NAMESPACE);
    xml.push_str("\" xmlns:p=\"");
    xml.push_str(PRODUCTION_NAMESPACE);
    xml.push_str("\" requiredextensions=\"p\">\n");

    xml.push_str("  <metadata name=\"Application\">typeplate</metadata>\n");

    xml.push_str("  <resources>\n");
    xml.push_str("    <object id=\"");
    xml.push_str(&parent_id.to_string());
    xml.push_str("\" type=\"model\" p:UUID=\"");
    xml.push_str(parent_uuid);
    xml.push_str("\">\n");
    xml.push_str("      <components>\n");
    for (index, solid) in model.solids.iter().enumerate() {
        let object_id = index + 1;
        xml.push_str("        <component objectid=\"");
        xml.push_str(&object_id.to_string());
        xml.push_str("\" p:path=\"/");
        xml.push_str(&object_part_path(object_id));
        xml.push_str("\" p:UUID=\"");
        xml.push_str(&object_uuids[index]);
        xml.push_str("\" transform=\"");
        xml.push_str(&translation_transform(model, solid.translation));
        xml.push_str("\"/>\n");
    }
    xml.push_str("      </components>\n");
    xml.push_str("    </object>\n");
    xml.push_str("  </resources>\n");

    xml.push_str("  <build p:UUID=\"");
    xml.push_str(build_uuid);
    xml.push_str("\">\n");
    xml.push_str("    <item objectid=\"");
    xml.push_str(&parent_id.to_string());
    xml.push_str("\"/>\n");
    xml.push_str("  </build>\n");

    xml.push_str("</model>\n");
    Ok(xml)
}

/// Relationships from the root model to the per-part object files
pub fn write_model_relationships(part_count: usize) -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str(
        "<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\n",
    );
    for object_id in 1..=part_count {
        xml.push_str("  <Relationship Target=\"/");
        xml.push_str(&object_part_path(object_id));
        xml.push_str("\" Id=\"rel-obj-");
        xml.push_str(&object_id.to_string());
        xml.push_str("\" Type=\"");
        xml.push_str(crate::threemf::MODEL_RELATIONSHIP_TYPE);
        xml.push_str("\"/>\n");
    }
    xml.push_str("</Relationships>");
    xml
}
