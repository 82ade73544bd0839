//! Tests of the full 2D-to-solid path: synthetic outlines through
//! classification, extrusion, scaling, positioning and validation.

use std::collections::HashMap;

use typeplate::config::RenderOptions;
use typeplate::font::PathCommand;
use typeplate::geometry::{classify, flatten};
use typeplate::mesh::Mesh;
use typeplate::solid;
use typeplate::validate;

fn ring_commands() -> Vec<PathCommand> {
    vec![
        PathCommand::MoveTo { x: 0.0, y: 0.0 },
        PathCommand::LineTo { x: 10.0, y: 0.0 },
        PathCommand::LineTo { x: 10.0, y: 10.0 },
        PathCommand::LineTo { x: 0.0, y: 10.0 },
        PathCommand::Close,
        PathCommand::MoveTo { x: 3.0, y: 3.0 },
        PathCommand::LineTo { x: 7.0, y: 3.0 },
        PathCommand::LineTo { x: 7.0, y: 7.0 },
        PathCommand::LineTo { x: 3.0, y: 7.0 },
        PathCommand::Close,
    ]
}

fn edge_census(mesh: &Mesh) -> HashMap<(usize, usize), usize> {
    let mut edges = HashMap::new();
    for t in &mesh.triangles {
        for (a, b) in [(t.v1, t.v2), (t.v2, t.v3), (t.v3, t.v1)] {
            *edges.entry((a.min(b), a.max(b))).or_insert(0) += 1;
        }
    }
    edges
}

#[test]
fn test_foreground_and_background_are_watertight() {
    let shapes = classify(flatten(&ring_commands(), 8)).unwrap();
    let fg = solid::build_foreground(&shapes, 2.0).unwrap();
    let bg = solid::build_background(&shapes, 2.0, 0.5, 1.5).unwrap();

    for mesh in [&fg, &bg] {
        assert!(!mesh.triangles.is_empty());
        assert!(edge_census(mesh).values().all(|&c| c == 2));
        for t in &mesh.triangles {
            assert!(t.v1 < mesh.vertices.len());
            assert!(t.v2 < mesh.vertices.len());
            assert!(t.v3 < mesh.vertices.len());
        }
    }
}

#[test]
fn test_validation_reports_clean_extrusions() {
    let shapes = classify(flatten(&ring_commands(), 8)).unwrap();
    let fg = solid::build_foreground(&shapes, 2.0).unwrap();
    let report = validate::validate(&fg);
    assert!(report.is_clean());
    assert!(report.is_watertight());
}

#[test]
fn test_multi_glyph_layout_keeps_bodies_disjoint_in_x() {
    // Two glyph boxes side by side, like letters placed by the pen cursor.
    let mut commands = ring_commands();
    commands.extend([
        PathCommand::MoveTo { x: 14.0, y: 0.0 },
        PathCommand::LineTo { x: 20.0, y: 0.0 },
        PathCommand::LineTo { x: 20.0, y: 10.0 },
        PathCommand::LineTo { x: 14.0, y: 10.0 },
        PathCommand::Close,
    ]);
    let shapes = classify(flatten(&commands, 8)).unwrap();
    assert_eq!(shapes.len(), 2);

    let fg = solid::build_foreground(&shapes, 2.0).unwrap();
    let bbox = fg.bounding_box().unwrap();
    assert_eq!(bbox.width(), 20.0);
    // The merged mesh is still a closed surface.
    assert!(edge_census(&fg).values().all(|&c| c == 2));
}

#[test]
fn test_scaling_applies_to_both_bodies_equally() {
    let shapes = classify(flatten(&ring_commands(), 8)).unwrap();
    let mut fg = solid::build_foreground(&shapes, 2.0).unwrap();
    let mut bg = solid::build_background(&shapes, 2.0, 0.5, 1.5).unwrap();

    let bg_width_before = bg.bounding_box().unwrap().width();
    let factor = solid::scale_to_width(&mut fg, &mut bg, 50.0);

    assert!((fg.bounding_box().unwrap().width() - 50.0).abs() < 1e-9);
    assert!(
        (bg.bounding_box().unwrap().width() - bg_width_before * factor).abs() < 1e-9
    );
    // Depths are preserved: scaling is XY only.
    assert!((fg.bounding_box().unwrap().depth() - 2.0).abs() < 1e-12);
    assert!((bg.bounding_box().unwrap().depth() - 1.5).abs() < 1e-12);
}

#[test]
fn test_positioned_pair_shares_z_range() {
    let options = RenderOptions::new("O").with_depths(2.0, 2.0);
    let shapes = classify(flatten(&ring_commands(), 8)).unwrap();
    let fg = solid::build_foreground(&shapes, options.foreground_depth).unwrap();
    let bg = solid::build_background(
        &shapes,
        options.outer_offset,
        options.inner_offset,
        options.background_depth,
    )
    .unwrap();
    let (fg, bg) = solid::position(fg, bg, &options);

    let fg_z_start = fg.translation.2;
    let bg_z_end = bg.translation.2 + options.background_depth;
    assert!(fg_z_start < bg_z_end);
    assert!((bg_z_end - fg_z_start - options.overlap).abs() < 1e-12);

    let dims = solid::dimensions(&fg, &bg, &options);
    assert!(dims.width >= 10.0);
    assert_eq!(dims.depth, 4.0);
}

#[test]
fn test_nested_rings_extrude_watertight() {
    // Three concentric squares (20/12/4): ring glyph with a solid island
    // inside its counter, the copyright-symbol family of shapes. The island
    // must extrude as its own closed body, not as a capless second hole.
    let square = |lo: f64, hi: f64| {
        [
            PathCommand::MoveTo { x: lo, y: lo },
            PathCommand::LineTo { x: hi, y: lo },
            PathCommand::LineTo { x: hi, y: hi },
            PathCommand::LineTo { x: lo, y: hi },
            PathCommand::Close,
        ]
    };
    let mut commands = Vec::new();
    commands.extend(square(0.0, 20.0));
    commands.extend(square(4.0, 16.0));
    commands.extend(square(8.0, 12.0));

    let shapes = classify(flatten(&commands, 8)).unwrap();
    assert_eq!(shapes.len(), 2);

    let fg = solid::build_foreground(&shapes, 2.0).unwrap();
    assert!(edge_census(&fg).values().all(|&c| c == 2));
    assert!(validate::validate(&fg).is_watertight());
}

#[test]
fn test_pipeline_is_deterministic() {
    let build = || {
        let shapes = classify(flatten(&ring_commands(), 8)).unwrap();
        solid::build_foreground(&shapes, 2.0).unwrap()
    };
    let a = build();
    let b = build();
    assert_eq!(a.vertices.len(), b.vertices.len());
    assert_eq!(a.triangles.len(), b.triangles.len());
    for (va, vb) in a.vertices.iter().zip(&b.vertices) {
        assert_eq!((va.x, va.y, va.z), (vb.x, vb.y, vb.z));
    }
}
