//! JSON description of a palette: the range and the rows to build, in order.
//!
//! ```json
//! {
//!   "range": [360, 100, 100],
//!   "rows": [
//!     { "kind": "gradient", "from": [48, 19, 99], "to": [16, 60, 99], "steps": 2 },
//!     { "kind": "shades", "base": [138, 32, 77], "shift": [-10, -10, 25], "down": 2, "up": 1 }
//!   ]
//! }
//! ```

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::color::{HsvRange, ScaledHsv};
use crate::error::{PaletteError, Result};
use crate::palette::PixelPalette;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteDescription {
    #[serde(default = "default_range")]
    pub range: Vec<f64>,
    #[serde(default)]
    pub rows: Vec<RowDescription>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RowDescription {
    Gradient {
        from: Vec<f64>,
        to: Vec<f64>,
        steps: i64,
        #[serde(default = "default_hue_ascending")]
        hue_ascending: bool,
    },
    Shades {
        base: Vec<f64>,
        shift: Vec<f64>,
        down: i64,
        up: i64,
    },
}

fn default_range() -> Vec<f64> {
    vec![100.0, 100.0, 100.0]
}

fn default_hue_ascending() -> bool {
    true
}

impl PaletteDescription {
    /// Read a description from a JSON file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read palette description {}", path.display()))?;
        Self::from_json_str(&text)
            .with_context(|| format!("Failed to parse palette description {}", path.display()))
    }

    pub fn from_json_str(text: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Build the palette; stops at the first invalid row
    pub fn build(&self) -> Result<PixelPalette> {
        self.build_verbose(false)
    }

    pub fn build_verbose(&self, verbose: bool) -> Result<PixelPalette> {
        let [h, s, v] = triple("new", "range", &self.range)?;
        let mut palette = PixelPalette::new(HsvRange::new(h, s, v)?).with_verbose(verbose);

        for row in &self.rows {
            match row {
                RowDescription::Gradient {
                    from,
                    to,
                    steps,
                    hue_ascending,
                } => {
                    const OP: &str = "add_gradient";
                    palette.add_gradient(
                        color(OP, "color1", from)?,
                        color(OP, "color2", to)?,
                        count(OP, "steps", *steps)?,
                        *hue_ascending,
                    )?;
                }
                RowDescription::Shades {
                    base,
                    shift,
                    down,
                    up,
                } => {
                    const OP: &str = "add_shades";
                    palette.add_shades(
                        color(OP, "base_color", base)?,
                        color(OP, "shift", shift)?,
                        count(OP, "number_down", *down)?,
                        count(OP, "number_up", *up)?,
                    )?;
                }
            }
        }

        Ok(palette)
    }
}

impl Default for PaletteDescription {
    /// A warm gradient into deep blue, then a green and a brown shade ramp
    fn default() -> Self {
        Self {
            range: vec![360.0, 100.0, 100.0],
            rows: vec![
                RowDescription::Gradient {
                    from: vec![48.0, 19.0, 99.0],
                    to: vec![16.0, 60.0, 99.0],
                    steps: 2,
                    hue_ascending: true,
                },
                RowDescription::Gradient {
                    from: vec![16.0, 60.0, 99.0],
                    to: vec![217.0, 25.0, 12.0],
                    steps: 5,
                    hue_ascending: false,
                },
                RowDescription::Shades {
                    base: vec![138.0, 32.0, 77.0],
                    shift: vec![-10.0, -10.0, 25.0],
                    down: 2,
                    up: 1,
                },
                RowDescription::Shades {
                    base: vec![25.0, 56.0, 77.0],
                    shift: vec![10.0, -10.0, 25.0],
                    down: 3,
                    up: 3,
                },
            ],
        }
    }
}

fn triple(operation: &'static str, argument: &'static str, channels: &[f64]) -> Result<[f64; 3]> {
    <[f64; 3]>::try_from(channels).map_err(|_| {
        PaletteError::invalid_argument(
            operation,
            argument,
            format!("expected 3 channels, got {}", channels.len()),
        )
    })
}

fn color(operation: &'static str, argument: &'static str, channels: &[f64]) -> Result<ScaledHsv> {
    triple(operation, argument, channels).map(ScaledHsv::from)
}

fn count(operation: &'static str, argument: &'static str, n: i64) -> Result<usize> {
    usize::try_from(n).map_err(|_| {
        PaletteError::invalid_argument(operation, argument, format!("must not be negative, got {n}"))
    })
}
