use pixel_palette::{HsvRange, PixelPalette};

fn main() -> anyhow::Result<()> {
    println!("Building a terrain palette...\n");

    let mut palette = PixelPalette::new(HsvRange::DEGREES).with_verbose(true);

    // Sky: light cyan into a dusk purple, going the long way round through red
    palette.add_gradient((190, 30, 95), (270, 60, 40), 6, false)?;
    // Grass, dirt and stone ramps
    palette.add_shades((110, 55, 60), (-6, 5, 12), 3, 3)?;
    palette.add_shades((28, 50, 55), (4, -4, 10), 3, 3)?;
    palette.add_shades((220, 10, 50), (0, 0, 12), 3, 3)?;

    for (i, row) in palette.rows().iter().enumerate() {
        println!("  Row {}: {} colors", i + 1, row.len());
    }

    palette.export_scaled("terrain_palette.png", 16)?;
    println!("\n✓ Created terrain_palette.png");

    Ok(())
}
