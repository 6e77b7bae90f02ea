use std::fs;
use svg_transformer::{transform, TransformOptions};

fn main() {
    let path = std::env::args()
        .nth(1)
        .expect("Usage: emit_component <file.svg> [destination.tsx]");
    let destination = std::env::args()
        .nth(2)
        .unwrap_or_else(|| path.replace(".svg", ".tsx"));
    let source = fs::read_to_string(&path).expect("Failed to read file");
    let result = transform(
        &source,
        TransformOptions {
            destination: Some(destination),
            ..Default::default()
        },
    );
    println!("{}", result.code);
}
