//! Slicer configuration documents
//!
//! Emits the vendor metadata slicers read alongside the model: per-part
//! name, extruder and color assignments, face counts, and the build-plate
//! placement. Colors come from each solid's material state at export time,
//! never from a theme default, so the exported package matches the caller's
//! live preview.

use crate::threemf::xml::escape_xml;
use crate::threemf::PackageModel;

/// Build `Metadata/model_settings.config`
///
/// One `<object>`/`<part>` entry per solid (extruders assigned 1-based by
/// part order), followed by a single plate that places the whole assembly.
pub fn model_settings(model: &PackageModel, object_uuids: &[String]) -> String {
    let mut xml = String::new();
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    xml.push('\n');
    xml.push_str("<config>\n");

    for (index, solid) in model.solids.iter().enumerate() {
        let object_id = index + 1;
        let extruder = index + 1;
        xml.push_str("  <object id=\"");
        xml.push_str(&object_id.to_string());
        xml.push_str("\">\n");
        xml.push_str("    <metadata key=\"name\" value=\"");
        xml.push_str(&escape_xml(&solid.name));
        xml.push_str("\"/>\n");
        xml.push_str("    <metadata key=\"extruder\" value=\"");
        xml.push_str(&extruder.to_string());
        xml.push_str("\"/>\n");
        xml.push_str("    <part id=\"");
        xml.push_str(&object_id.to_string());
        xml.push_str("\" subtype=\"normal_part\">\n");
        xml.push_str("      <metadata key=\"name\" value=\"");
        xml.push_str(&escape_xml(&solid.name));
        xml.push_str("\"/>\n");
        xml.push_str("      <metadata key=\"extruder_colour\" value=\"");
        xml.push_str(&solid.color.to_hex());
        xml.push_str("\"/>\n");
        xml.push_str("      <metadata key=\"face_count\" value=\"");
        xml.push_str(&solid.face_count().to_string());
        xml.push_str("\"/>\n");
        xml.push_str("      <metadata key=\"source_object_uuid\" value=\"");
        xml.push_str(&object_uuids[index]);
        xml.push_str("\"/>\n");
        xml.push_str("    </part>\n");
        xml.push_str("  </object>\n");
    }

    xml.push_str("  <plate>\n");
    xml.push_str("    <metadata key=\"plater_id\" value=\"1\"/>\n");
    xml.push_str("    <metadata key=\"plater_name\" value=\"\"/>\n");
    xml.push_str("    <metadata key=\"locked\" value=\"false\"/>\n");
    for index in 0..model.solids.len() {
        let object_id = index + 1;
        xml.push_str("    <model_instance>\n");
        xml.push_str("      <metadata key=\"object_id\" value=\"");
        xml.push_str(&object_id.to_string());
        xml.push_str("\"/>\n");
        xml.push_str("      <metadata key=\"instance_id\" value=\"0\"/>\n");
        xml.push_str("    </model_instance>\n");
    }
    xml.push_str("  </plate>\n");

    xml.push_str("</config>\n");
    xml
}
