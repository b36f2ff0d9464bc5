use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

#[derive(Debug, Parser)]
#[command(
    name = "resize-image",
    version,
    about = "Resize an image to a fixed size",
    after_help = "Examples:\n  resize-image photo.jpg out/photo.png\n  resize-image photo.jpg out/photo.png --width 800 --height 600"
)]
struct Cli {
    /// Path to the input image.
    input: PathBuf,

    /// Path to save the resized image.
    output: PathBuf,

    /// Width of the resized image.
    #[arg(long, default_value_t = 512)]
    width: u32,

    /// Height of the resized image.
    #[arg(long, default_value_t = 768)]
    height: u32,
}

fn main() {
    let cli = Cli::parse();

    match vidtools::resize_image(&cli.input, &cli.output, cli.width, cli.height) {
        Ok(()) => {
            println!(
                "{} {}",
                format!("Image resized to ({}, {}) and saved to", cli.width, cli.height)
                    .green()
                    .bold(),
                cli.output.display(),
            );
        }
        Err(error) => {
            println!("{} {error}", "error:".red().bold());
            std::process::exit(1);
        }
    }
}
