use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use vidtools::{FfmpegLogLevel, ImageVideoEncoder, ImageVideoOptions};

#[derive(Debug, Parser)]
#[command(
    name = "image-to-video",
    version,
    about = "Convert an image into a video by repeating frames",
    after_help = "Examples:\n  image-to-video portrait.png portrait.mp4\n  image-to-video portrait.png portrait.mp4 --resolution 1024 1024 --frame_count 24 --fps 12"
)]
struct Cli {
    /// Path to the input image file.
    image_path: PathBuf,

    /// Path to save the output video file.
    output_video_path: PathBuf,

    /// Video resolution as width height.
    #[arg(long, num_args = 2, value_names = ["W", "H"], default_values_t = [512, 512])]
    resolution: Vec<u32>,

    /// Number of frames in the video.
    #[arg(long = "frame_count", default_value_t = 16)]
    frame_count: u32,

    /// Frames per second.
    #[arg(long, default_value_t = 8.0)]
    fps: f64,
}

fn main() {
    let cli = Cli::parse();

    // Keep FFmpeg's own stderr chatter down to real errors.
    vidtools::set_ffmpeg_log_level(FfmpegLogLevel::Error);

    let options = ImageVideoOptions::default()
        .resolution(cli.resolution[0], cli.resolution[1])
        .frame_count(cli.frame_count)
        .fps(cli.fps);

    match ImageVideoEncoder::new(options).write(&cli.image_path, &cli.output_video_path) {
        Ok(()) => {
            println!(
                "{} {}",
                "Video created successfully:".green().bold(),
                cli.output_video_path.display(),
            );
        }
        Err(error) => {
            println!("{} {error}", "error:".red().bold());
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Cli;

    #[test]
    fn defaults_match_documented_values() {
        let cli = Cli::parse_from(["image-to-video", "in.png", "out.mp4"]);
        assert_eq!(cli.resolution, vec![512, 512]);
        assert_eq!(cli.frame_count, 16);
        assert_eq!(cli.fps, 8.0);
    }

    #[test]
    fn resolution_takes_two_values() {
        let cli = Cli::parse_from([
            "image-to-video",
            "in.png",
            "out.mp4",
            "--resolution",
            "1024",
            "768",
            "--frame_count",
            "24",
            "--fps",
            "12.5",
        ]);
        assert_eq!(cli.resolution, vec![1024, 768]);
        assert_eq!(cli.frame_count, 24);
        assert_eq!(cli.fps, 12.5);
    }
}
