use image::Rgb;

use crate::error::{PaletteError, Result};

/// Size of the canonical channel space; also the length of one full turn of the hue wheel.
pub const CANONICAL_MAX: i32 = 255;

/// Per-channel scale in which callers express colors.
///
/// Aseprite uses (360, 100, 100), GIMP lets you choose between
/// (100, 100, 100) and (255, 255, 255).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HsvRange {
    hue: f64,
    saturation: f64,
    value: f64,
}

impl HsvRange {
    pub const PERCENT: HsvRange = HsvRange::unchecked(100.0, 100.0, 100.0);
    pub const DEGREES: HsvRange = HsvRange::unchecked(360.0, 100.0, 100.0);
    pub const BYTE: HsvRange = HsvRange::unchecked(255.0, 255.0, 255.0);

    const fn unchecked(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }

    /// Create a range; every channel must be positive and finite
    pub fn new(hue: f64, saturation: f64, value: f64) -> Result<Self> {
        for (channel, max) in [("hue", hue), ("saturation", saturation), ("value", value)] {
            if !max.is_finite() || max <= 0.0 {
                return Err(PaletteError::InvalidRange {
                    channel,
                    value: max,
                });
            }
        }
        Ok(Self::unchecked(hue, saturation, value))
    }

    pub fn hue(&self) -> f64 {
        self.hue
    }

    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Rescale a caller-supplied triple into canonical 0-255 space.
    ///
    /// `operation` and `argument` only label the error when a channel is not finite.
    pub fn canonicalize(
        &self,
        color: ScaledHsv,
        operation: &'static str,
        argument: &'static str,
    ) -> Result<Hsv> {
        if ![color.h, color.s, color.v].iter().all(|c| c.is_finite()) {
            return Err(PaletteError::invalid_argument(
                operation,
                argument,
                format!("channels must be finite numbers, got {color:?}"),
            ));
        }

        Ok(Hsv {
            h: rescale(color.h, self.hue),
            s: rescale(color.s, self.saturation),
            v: rescale(color.v, self.value),
        })
    }
}

impl Default for HsvRange {
    fn default() -> Self {
        Self::PERCENT
    }
}

fn rescale(channel: f64, max: f64) -> i32 {
    round_channel(f64::from(CANONICAL_MAX) * channel / max)
}

// Ties go to the even neighbour: 127.5 -> 128, 76.5 -> 76
fn round_channel(x: f64) -> i32 {
    x.round_ties_even() as i32
}

/// Linear mix of `a` and `b`, `ratio_b` being the weight of `b`
pub fn mix(a: f64, b: f64, ratio_b: f64) -> f64 {
    a * (1.0 - ratio_b) + b * ratio_b
}

/// A color on the caller's scale (see [`HsvRange`]).
///
/// Also used for shade shifts, which go through the same rescaling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledHsv {
    pub h: f64,
    pub s: f64,
    pub v: f64,
}

impl ScaledHsv {
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h, s, v }
    }
}

impl From<(f64, f64, f64)> for ScaledHsv {
    fn from((h, s, v): (f64, f64, f64)) -> Self {
        Self { h, s, v }
    }
}

impl From<(i32, i32, i32)> for ScaledHsv {
    fn from((h, s, v): (i32, i32, i32)) -> Self {
        Self {
            h: f64::from(h),
            s: f64::from(s),
            v: f64::from(v),
        }
    }
}

impl From<[f64; 3]> for ScaledHsv {
    fn from([h, s, v]: [f64; 3]) -> Self {
        Self { h, s, v }
    }
}

/// A color in canonical space.
///
/// Channels nominally live in 0..=255 but are signed: shade ramps and
/// gradients keep whatever they compute, clamping only happens on export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hsv {
    pub h: i32,
    pub s: i32,
    pub v: i32,
}

impl Hsv {
    pub const BLACK: Hsv = Hsv { h: 0, s: 0, v: 0 };

    pub const fn new(h: i32, s: i32, v: i32) -> Self {
        Self { h, s, v }
    }

    /// Channel-wise mix towards `other`, rounded back to integers
    pub fn mix(self, other: Hsv, ratio_other: f64) -> Hsv {
        let channel = |a: i32, b: i32| round_channel(mix(f64::from(a), f64::from(b), ratio_other));
        Hsv {
            h: channel(self.h, other.h),
            s: channel(self.s, other.s),
            v: channel(self.v, other.v),
        }
    }

    /// Bring the hue back onto the wheel. Saturation and value are not cyclic and stay as they are.
    pub fn wrap_hue(self) -> Hsv {
        Hsv {
            h: self.h.rem_euclid(CANONICAL_MAX),
            ..self
        }
    }

    /// `self + shift * times`, or `None` on overflow
    pub fn offset(self, shift: Hsv, times: i32) -> Option<Hsv> {
        let channel =
            |base: i32, step: i32| -> Option<i32> { step.checked_mul(times)?.checked_add(base) };
        Some(Hsv {
            h: channel(self.h, shift.h)?,
            s: channel(self.s, shift.s)?,
            v: channel(self.v, shift.v)?,
        })
    }

    /// Channels clamped into the byte range the encoder works with
    pub fn clamped(self) -> [u8; 3] {
        let clamp = |c: i32| c.clamp(0, CANONICAL_MAX) as u8;
        [clamp(self.h), clamp(self.s), clamp(self.v)]
    }

    /// Convert to RGB, working in byte space on the clamped channels
    pub fn to_rgb(self) -> Rgb<u8> {
        let [h, s, v] = self.clamped();
        if s == 0 {
            return Rgb([v, v, v]);
        }

        let (h, s, v) = (f64::from(h), f64::from(s), f64::from(v));
        let scaled = h * 6.0 / 255.0;
        let sextant = scaled.floor();
        let fraction = scaled - sextant;
        let fs = fraction * s;

        let p = to_byte(v * (1.0 - s / 255.0));
        let q = to_byte(v * (1.0 - fs / 255.0));
        let t = to_byte(v * (1.0 - (s - fs) / 255.0));
        let v = to_byte(v);

        match sextant as u8 % 6 {
            0 => Rgb([v, t, p]),
            1 => Rgb([q, v, p]),
            2 => Rgb([p, v, t]),
            3 => Rgb([p, q, v]),
            4 => Rgb([t, p, v]),
            _ => Rgb([v, p, q]),
        }
    }
}

fn to_byte(x: f64) -> u8 {
    x.round().clamp(0.0, 255.0) as u8
}

impl From<Hsv> for Rgb<u8> {
    fn from(color: Hsv) -> Self {
        color.to_rgb()
    }
}
