//! Render a text string to a 3MF file.
//!
//! Usage: export_text <font.ttf> <text> [output.3mf]

use typeplate::{render, suggested_filename, FontFace, RenderOptions};

fn main() -> typeplate::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: {} <font.ttf> <text> [output.3mf]", args[0]);
        std::process::exit(1);
    }

    let font_path = &args[1];
    let text = &args[2];
    let output = args
        .get(3)
        .cloned()
        .unwrap_or_else(|| suggested_filename(text));

    let font_data = std::fs::read(font_path)?;
    let face = FontFace::parse(&font_data)?;

    let options = RenderOptions::new(text).with_target_width(100.0);
    let rendered = render(&face, &options)?;

    println!(
        "Rendered {:?}: {:.2} x {:.2} x {:.2} mm, {} + {} triangles",
        text,
        rendered.dimensions.width,
        rendered.dimensions.height,
        rendered.dimensions.depth,
        rendered.foreground.face_count(),
        rendered.background.face_count(),
    );

    rendered.write_to_file(&output)?;
    println!("Wrote {}", output);
    Ok(())
}
