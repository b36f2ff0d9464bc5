use std::path::{Path, PathBuf};

use clap::Parser;
use colored::Colorize;
use vidtools::{FfmpegLogLevel, VideoProbe};

#[derive(Debug, Parser)]
#[command(
    name = "video-info",
    version,
    about = "Print diagnostic metadata for video files",
    after_help = "Examples:\n  video-info clip.mp4\n  video-info a.mp4 b.mkv c.avi"
)]
struct Cli {
    /// Path(s) to video file(s).
    #[arg(required = true, num_args = 1..)]
    video_paths: Vec<PathBuf>,
}

/// Inspect one file and print its information block.
///
/// Every failure is reported as a printed message; one file's failure never
/// aborts the remaining paths.
fn print_video_info(path: &Path) {
    if !path.exists() {
        println!(
            "{} File not found: {}",
            "error:".red().bold(),
            path.display(),
        );
        return;
    }

    let mut info = match VideoProbe::probe(path) {
        Ok(info) => info,
        Err(error) => {
            println!("{} Could not open video: {error}", "error:".red().bold());
            return;
        }
    };

    // Second pass for an accurate duration; keep the frame-count estimate
    // when it fails.
    match VideoProbe::refine_duration(path) {
        Ok(duration) => info.duration = duration,
        Err(error) => {
            println!(
                "{} Using frame-count duration estimate: {error}",
                "note:".yellow().bold(),
            );
        }
    }

    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    println!();
    println!("{} {file_name}", "Video Information:".cyan().bold());
    println!("Resolution: {}x{}", info.width, info.height);
    println!("Frame Count: {}", info.frame_count);
    println!("FPS: {:.2}", info.frames_per_second);
    println!(
        "Duration: {} ({:.2} seconds)",
        info.duration_formatted(),
        info.duration.as_secs_f64(),
    );
    println!("Codec: {}", info.codec_tag);
    println!("File Size: {:.2} MB", info.file_size_megabytes());
}

fn main() {
    let cli = Cli::parse();

    vidtools::set_ffmpeg_log_level(FfmpegLogLevel::Error);

    for path in &cli.video_paths {
        print_video_info(path);
    }
}
