use std::path::PathBuf;

use pixel_palette::{Hsv, HsvRange, PixelPalette};

/// Empty palette on the (360, 100, 100) scale used by Aseprite
pub fn degrees_palette() -> PixelPalette {
    PixelPalette::new(HsvRange::DEGREES)
}

/// Creates a temp directory and a path inside it.
/// Returns both the path and the directory (which must be kept alive).
pub fn temp_output(file_name: &str) -> (PathBuf, tempfile::TempDir) {
    let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
    let path = dir.path().join(file_name);
    (path, dir)
}

pub fn hues(row: &[Hsv]) -> Vec<i32> {
    row.iter().map(|c| c.h).collect()
}

/// Palette with rows of 2, 5 and 3 colors
pub fn ragged_palette() -> PixelPalette {
    let mut palette = PixelPalette::new(HsvRange::BYTE);
    palette
        .add_gradient((0, 255, 255), (85, 255, 255), 0, true)
        .expect("Failed to add gradient row");
    palette
        .add_gradient((0, 255, 255), (200, 255, 255), 3, true)
        .expect("Failed to add gradient row");
    palette
        .add_shades((170, 255, 200), (0, 0, 20), 1, 1)
        .expect("Failed to add shade row");
    palette
}
