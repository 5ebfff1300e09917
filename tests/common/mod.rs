mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from pixel_palette for tests
pub use pixel_palette::{
    ExportFailure, Hsv, HsvRange, PaletteDescription, PaletteError, PixelGrid, PixelPalette,
    RowDescription, ScaledHsv,
};
