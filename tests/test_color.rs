//! Tests for channel rescaling, mixing and HSV to RGB conversion.

mod common;

use common::*;
use image::Rgb;
use pretty_assertions::assert_eq;

#[test]
fn test_range_rejects_non_positive_channels() {
    let err = HsvRange::new(0.0, 100.0, 100.0).unwrap_err();
    assert!(matches!(err, PaletteError::InvalidRange { channel: "hue", .. }));

    let err = HsvRange::new(360.0, -1.0, 100.0).unwrap_err();
    assert!(matches!(err, PaletteError::InvalidRange { channel: "saturation", .. }));

    let err = HsvRange::new(360.0, 100.0, f64::NAN).unwrap_err();
    assert!(matches!(err, PaletteError::InvalidRange { channel: "value", .. }));

    assert!(HsvRange::new(360.0, 100.0, 100.0).is_ok());
    assert_eq!(HsvRange::default(), HsvRange::PERCENT);
}

#[test]
fn test_canonicalize_degrees() -> anyhow::Result<()> {
    let color = HsvRange::DEGREES.canonicalize(ScaledHsv::new(48.0, 19.0, 99.0), "test", "color")?;
    assert_eq!(color, Hsv::new(34, 48, 252));
    Ok(())
}

#[test]
fn test_canonicalize_rounds_half_to_even() -> anyhow::Result<()> {
    // 255 * 50 / 100 = 127.5 and 255 * 30 / 100 = 76.5
    let color = HsvRange::PERCENT.canonicalize((50, 30, 100).into(), "test", "color")?;
    assert_eq!(color, Hsv::new(128, 76, 255));
    Ok(())
}

#[test]
fn test_canonicalize_stays_in_byte_range() -> anyhow::Result<()> {
    for range in [HsvRange::PERCENT, HsvRange::DEGREES, HsvRange::BYTE] {
        let maxima = [range.hue(), range.saturation(), range.value()];
        for step in 0..=20 {
            let fraction = f64::from(step) / 20.0;
            let [h, s, v] = maxima.map(|max| max * fraction);
            let color = range.canonicalize(ScaledHsv::new(h, s, v), "test", "color")?;
            for channel in [color.h, color.s, color.v] {
                assert!((0..=255).contains(&channel), "{color:?} out of range for {range:?}");
            }
        }
    }
    Ok(())
}

#[test]
fn test_canonicalize_rejects_non_finite_channels() {
    let err = HsvRange::PERCENT
        .canonicalize(ScaledHsv::new(10.0, f64::INFINITY, 10.0), "add_gradient", "color1")
        .unwrap_err();
    assert!(matches!(
        err,
        PaletteError::InvalidArgument { operation: "add_gradient", argument: "color1", .. }
    ));
    assert!(err.to_string().contains("add_gradient"));
}

#[test]
fn test_mix_and_wrap() {
    let a = Hsv::new(0, 0, 255);
    let b = Hsv::new(100, 200, 55);
    assert_eq!(a.mix(b, 0.0), a);
    assert_eq!(a.mix(b, 1.0), b);
    assert_eq!(a.mix(b, 0.5), Hsv::new(50, 100, 155));

    // Only the hue is cyclic
    assert_eq!(Hsv::new(300, 300, -5).wrap_hue(), Hsv::new(45, 300, -5));
    assert_eq!(Hsv::new(-5, 10, 10).wrap_hue(), Hsv::new(250, 10, 10));
    assert_eq!(Hsv::new(255, 10, 10).wrap_hue(), Hsv::new(0, 10, 10));
}

#[test]
fn test_offset_detects_overflow() {
    let base = Hsv::new(10, 20, 30);
    assert_eq!(base.offset(Hsv::new(1, -2, 3), -2), Some(Hsv::new(8, 24, 24)));
    assert_eq!(base.offset(Hsv::new(i32::MAX, 0, 0), 2), None);
}

#[test]
fn test_primary_colors_to_rgb() {
    assert_eq!(Hsv::new(0, 255, 255).to_rgb(), Rgb([255, 0, 0]));
    assert_eq!(Hsv::new(85, 255, 255).to_rgb(), Rgb([0, 255, 0]));
    assert_eq!(Hsv::new(170, 255, 255).to_rgb(), Rgb([0, 0, 255]));
    assert_eq!(Hsv::new(43, 255, 255).to_rgb(), Rgb([252, 255, 0]));
}

#[test]
fn test_greys_and_black_to_rgb() {
    assert_eq!(Hsv::BLACK.to_rgb(), Rgb([0, 0, 0]));
    assert_eq!(Hsv::new(123, 0, 200).to_rgb(), Rgb([200, 200, 200]));
}

#[test]
fn test_out_of_range_channels_are_clamped_for_rgb() {
    let color = Hsv::new(300, -20, 400);
    assert_eq!(color.clamped(), [255, 0, 255]);
    assert_eq!(color.to_rgb(), Rgb([255, 255, 255]));

    // Hue 255 is a full turn, same as red
    assert_eq!(Hsv::new(255, 255, 255).to_rgb(), Rgb([255, 0, 0]));
}
