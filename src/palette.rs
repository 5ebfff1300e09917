use std::path::Path;

use crate::color::{CANONICAL_MAX, Hsv, HsvRange, ScaledHsv};
use crate::error::{PaletteError, Result};
use crate::export::{self, PixelGrid};

/// Builds a palette image row by row from HSV colors.
///
/// Rows are appended with [`add_gradient`](Self::add_gradient) or
/// [`add_shades`](Self::add_shades) and never change afterwards.
/// [`export`](Self::export) lays them out top to bottom in append order.
#[derive(Debug, Clone)]
pub struct PixelPalette {
    range: HsvRange,
    rows: Vec<Vec<Hsv>>,
    verbose: bool,
}

impl PixelPalette {
    /// Create an empty palette whose colors are expressed on `range`
    pub fn new(range: HsvRange) -> Self {
        Self {
            range,
            rows: Vec::new(),
            verbose: false,
        }
    }

    /// Enable verbose output
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn range(&self) -> HsvRange {
        self.range
    }

    pub fn rows(&self) -> &[Vec<Hsv>] {
        &self.rows
    }

    /// Length of the longest row
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Append a gradient from `color1` to `color2` with `steps` colors in between.
    ///
    /// `hue_ascending` picks which arc of the hue wheel the gradient takes.
    /// Orange -> Purple with `true` gives Orange->Yellow->Green->Blue->Purple,
    /// with `false` it gives Orange->Red->Pink->Purple.
    pub fn add_gradient(
        &mut self,
        color1: impl Into<ScaledHsv>,
        color2: impl Into<ScaledHsv>,
        steps: usize,
        hue_ascending: bool,
    ) -> Result<&[Hsv]> {
        const OP: &str = "add_gradient";
        let start = self.range.canonicalize(color1.into(), OP, "color1")?;
        let end = self.range.canonicalize(color2.into(), OP, "color2")?;
        let len = checked_row_len(OP, "steps", steps.checked_add(2))?;

        let (mut from, mut to) = (start, end);
        if !hue_ascending {
            // Lift the lower hue by a full turn so the mix runs over the other arc
            if from.h <= to.h {
                from.h = from.h.saturating_add(CANONICAL_MAX);
            } else {
                to.h = to.h.saturating_add(CANONICAL_MAX);
            }
        }

        let mut row = Vec::with_capacity(len);
        row.push(start);
        for i in 0..steps {
            let ratio = (i + 1) as f64 / (steps + 1) as f64;
            row.push(from.mix(to, ratio).wrap_hue());
        }
        row.push(end);

        if self.verbose {
            println!(
                "Row {}: gradient {:?} -> {:?} ({} colors, hue {})",
                self.rows.len() + 1,
                start,
                end,
                row.len(),
                if hue_ascending { "ascending" } else { "descending" },
            );
        }

        self.rows.push(row);
        Ok(self.last_row())
    }

    /// Append shades of `base_color`, `number_down` below and `number_up` above it.
    ///
    /// Each step moves every channel by `shift`, which is rescaled like a color.
    /// The result runs from the most shifted-down shade to the most shifted-up one,
    /// with the base at index `number_down`. Channels are not clamped or wrapped.
    pub fn add_shades(
        &mut self,
        base_color: impl Into<ScaledHsv>,
        shift: impl Into<ScaledHsv>,
        number_down: usize,
        number_up: usize,
    ) -> Result<&[Hsv]> {
        const OP: &str = "add_shades";
        let base = self.range.canonicalize(base_color.into(), OP, "base_color")?;
        let shift = self.range.canonicalize(shift.into(), OP, "shift")?;

        let down = i32::try_from(number_down)
            .map_err(|_| PaletteError::invalid_argument(OP, "number_down", format!("{number_down} is too large")))?;
        let up = i32::try_from(number_up)
            .map_err(|_| PaletteError::invalid_argument(OP, "number_up", format!("{number_up} is too large")))?;
        checked_row_len(OP, "number_up", number_down.checked_add(number_up).and_then(|n| n.checked_add(1)))?;

        let row = (-down..=up)
            .map(|i| {
                base.offset(shift, i).ok_or_else(|| {
                    PaletteError::invalid_argument(OP, "shift", format!("channel overflow at shade {i}"))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        if self.verbose {
            println!(
                "Row {}: shades of {:?} by {:?} ({} down, {} up)",
                self.rows.len() + 1,
                base,
                shift,
                number_down,
                number_up,
            );
        }

        self.rows.push(row);
        Ok(self.last_row())
    }

    /// Lay the rows out as a padded grid
    pub fn to_grid(&self) -> Result<PixelGrid> {
        PixelGrid::from_rows(&self.rows)
    }

    /// Write the palette as an RGB image, format picked from the extension of `path`
    pub fn export(&self, path: impl AsRef<Path>) -> Result<()> {
        self.export_scaled(path, 1)
    }

    /// Like [`export`](Self::export), with every cell enlarged to `scale`x`scale` pixels
    pub fn export_scaled(&self, path: impl AsRef<Path>, scale: u32) -> Result<()> {
        let path = path.as_ref();
        let grid = self.to_grid()?;

        if self.verbose {
            println!(
                "Exporting {}x{} palette to {}",
                grid.width(),
                grid.height(),
                path.display()
            );
        }

        let image = export::upscale(&grid.to_rgb_image(), scale);
        export::save_atomic(&image, path)?;

        if self.verbose {
            println!("Saved {} ({}x{} px)", path.display(), image.width(), image.height());
        }
        Ok(())
    }

    fn last_row(&self) -> &[Hsv] {
        self.rows.last().map(Vec::as_slice).unwrap_or_default()
    }
}

impl Default for PixelPalette {
    fn default() -> Self {
        Self::new(HsvRange::default())
    }
}

fn checked_row_len(operation: &'static str, argument: &'static str, len: Option<usize>) -> Result<usize> {
    len.filter(|&n| u32::try_from(n).is_ok())
        .ok_or_else(|| PaletteError::invalid_argument(operation, argument, "row would exceed image limits"))
}
