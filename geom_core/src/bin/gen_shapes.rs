//! Generate SHAPES.md from the geometry registry.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-shapes
//! ```
//!
//! The generated file is written to `geom_core/SHAPES.md`.

use std::fs;
use std::path::Path;

use geom_core::registry::generate_shapes_markdown;

fn main() {
    println!("Generating SHAPES.md...");

    let markdown = generate_shapes_markdown();

    // Relative to workspace root
    let output_path = Path::new("geom_core/SHAPES.md");

    match fs::write(output_path, &markdown) {
        Ok(()) => {
            println!("Successfully wrote {} bytes to {}", markdown.len(), output_path.display());
        }
        Err(e) => {
            eprintln!("Error writing file: {}", e);
            std::process::exit(1);
        }
    }
}
