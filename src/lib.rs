pub mod color;
pub mod description;
pub mod error;
pub mod export;
pub mod palette;

pub use color::{Hsv, HsvRange, ScaledHsv};
pub use description::{PaletteDescription, RowDescription};
pub use error::{ExportFailure, PaletteError};
pub use export::PixelGrid;
pub use palette::PixelPalette;
