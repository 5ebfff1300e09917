use clap::Parser;
use std::path::PathBuf;

use pixel_palette::PaletteDescription;

#[derive(Parser)]
#[command(name = "pixel-palette")]
#[command(about = "Generate pixel-art palette images from HSV gradients and shade ramps")]
struct Cli {
    /// Output image; the format follows the extension
    #[arg(value_name = "OUTPUT", default_value = "palette.png")]
    output: PathBuf,

    /// JSON palette description (defaults to the built-in sample palette)
    #[arg(short, long, value_name = "FILE")]
    description: Option<PathBuf>,

    /// Size in pixels of each palette cell in the output
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=256))]
    scale: u32,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    let description = match &args.description {
        Some(path) => {
            if args.verbose {
                println!("Loading palette description: {:?}", path);
            }
            PaletteDescription::load(path)?
        }
        None => {
            if args.verbose {
                println!("Using built-in sample palette");
            }
            PaletteDescription::default()
        }
    };

    let palette = description.build_verbose(args.verbose)?;

    if args.verbose {
        println!("Built {} rows, widest has {} colors\n", palette.height(), palette.width());
    }

    palette.export_scaled(&args.output, args.scale)?;

    println!("Palette written to {}", args.output.display());

    Ok(())
}
