use std::io::{BufWriter, Write};
use std::path::Path;

use image::imageops::{self, FilterType};
use image::{ImageFormat, RgbImage};
use tempfile::NamedTempFile;

use crate::color::Hsv;
use crate::error::{ExportFailure, PaletteError, Result};

/// Rectangular snapshot of a palette, one grid row per palette row.
///
/// Rows shorter than the widest one are padded with [`Hsv::BLACK`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    /// Row-major cells
    pixels: Vec<Hsv>,
}

impl PixelGrid {
    /// Flatten rows into a padded grid
    pub fn from_rows(rows: &[Vec<Hsv>]) -> Result<Self> {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let width_px = u32::try_from(width).map_err(|_| {
            PaletteError::invalid_argument("export", "rows", format!("row length {width} exceeds image limits"))
        })?;
        let height_px = u32::try_from(rows.len()).map_err(|_| {
            PaletteError::invalid_argument("export", "rows", format!("{} rows exceed image limits", rows.len()))
        })?;

        let mut pixels = Vec::with_capacity(width * rows.len());
        for row in rows {
            pixels.extend_from_slice(row);
            pixels.extend(std::iter::repeat_n(Hsv::BLACK, width - row.len()));
        }

        Ok(Self {
            width: width_px,
            height: height_px,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Hsv] {
        &self.pixels
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Hsv> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get((y as usize) * (self.width as usize) + x as usize).copied()
    }

    /// Convert every cell from HSV to RGB
    pub fn to_rgb_image(&self) -> RgbImage {
        RgbImage::from_fn(self.width, self.height, |x, y| {
            self.get(x, y).unwrap_or(Hsv::BLACK).to_rgb()
        })
    }
}

/// Enlarge every cell to `scale`x`scale` pixels
pub fn upscale(image: &RgbImage, scale: u32) -> RgbImage {
    if scale <= 1 || image.width() == 0 || image.height() == 0 {
        return image.clone();
    }
    imageops::resize(
        image,
        image.width().saturating_mul(scale),
        image.height().saturating_mul(scale),
        FilterType::Nearest,
    )
}

/// Encode `image` into `path`, format picked from the extension.
///
/// The data goes to a temporary file next to the target which is then
/// renamed over it, so the target is either the old file or the complete new one.
pub fn save_atomic(image: &RgbImage, path: &Path) -> Result<()> {
    let format = ImageFormat::from_path(path).map_err(|e| PaletteError::export(path, e))?;
    if !format.writing_enabled() {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned());
        return Err(PaletteError::export(
            path,
            ExportFailure::UnsupportedFormat(extension),
        ));
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let temp = NamedTempFile::new_in(dir).map_err(|e| PaletteError::export(path, e))?;

    {
        let mut writer = BufWriter::new(temp.as_file());
        image
            .write_to(&mut writer, format)
            .map_err(|e| PaletteError::export(path, e))?;
        writer.flush().map_err(|e| PaletteError::export(path, e))?;
    }

    // NamedTempFile is created 0600
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        temp.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o644))
            .map_err(|e| PaletteError::export(path, e))?;
    }

    temp.persist(path)
        .map_err(|e| PaletteError::export(path, e.error))?;
    Ok(())
}
