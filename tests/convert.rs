//! Image-to-video integration tests.
//!
//! Tests that need the MPEG-4 encoder skip when it is unavailable on the
//! build platform.

use std::path::Path;

use image::{Rgb, RgbImage};
use vidtools::{ImageVideoEncoder, ImageVideoOptions, VidToolsError, VideoProbe};

fn write_red_png(path: &Path, width: u32, height: u32) {
    let mut image = RgbImage::new(width, height);
    for pixel in image.pixels_mut() {
        *pixel = Rgb([255, 0, 0]);
    }
    image.save(path).expect("write test image");
}

fn encoder_unavailable(error: &VidToolsError) -> bool {
    let message = format!("{error}");
    message.contains("encoder") || message.contains("codec")
}

#[test]
fn three_frame_red_clip() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let image_path = dir.path().join("red.png");
    let video_path = dir.path().join("red.mp4");
    write_red_png(&image_path, 2, 2);

    let options = ImageVideoOptions::default()
        .resolution(4, 4)
        .frame_count(3)
        .fps(1.0);
    let result = ImageVideoEncoder::new(options).write(&image_path, &video_path);

    if let Err(ref error) = result {
        if encoder_unavailable(error) {
            eprintln!("Skipping: MPEG-4 encoder not available ({error})");
            return;
        }
    }
    result.expect("write video");

    let info = VideoProbe::probe(&video_path).expect("probe generated video");
    assert_eq!(info.width, 4);
    assert_eq!(info.height, 4);
    assert_eq!(info.frame_count, 3);
    assert!(
        (info.frames_per_second - 1.0).abs() < 0.05,
        "fps should be ~1.0, got {}",
        info.frames_per_second,
    );
    assert!(
        (info.duration.as_secs_f64() - 3.0).abs() < 0.05,
        "coarse duration should be ~3s, got {:?}",
        info.duration,
    );
    assert_eq!(info.codec_tag, "mp4v");
    assert!(info.file_size_bytes > 0);

    let refined = VideoProbe::refine_duration(&video_path).expect("refine duration");
    assert!(
        (refined.as_secs_f64() - 3.0).abs() < 0.05,
        "refined duration should be ~3s, got {refined:?}",
    );
}

#[test]
fn frame_count_and_resolution_are_exact() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let image_path = dir.path().join("input.png");
    let video_path = dir.path().join("output.mp4");
    // Non-square input, non-square output: dimensions must come from the
    // requested resolution, not the source image.
    write_red_png(&image_path, 30, 20);

    let options = ImageVideoOptions::default()
        .resolution(64, 48)
        .frame_count(10)
        .fps(5.0);
    let result = ImageVideoEncoder::new(options).write(&image_path, &video_path);

    if let Err(ref error) = result {
        if encoder_unavailable(error) {
            eprintln!("Skipping: MPEG-4 encoder not available ({error})");
            return;
        }
    }
    result.expect("write video");

    let info = VideoProbe::probe(&video_path).expect("probe generated video");
    assert_eq!((info.width, info.height), (64, 48));
    assert_eq!(info.frame_count, 10);
    assert!(
        (info.duration.as_secs_f64() - 2.0).abs() < 0.05,
        "10 frames at 5 fps should last ~2s, got {:?}",
        info.duration,
    );
}

#[test]
fn overwrites_existing_output() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let image_path = dir.path().join("input.png");
    let video_path = dir.path().join("output.mp4");
    write_red_png(&image_path, 8, 8);
    std::fs::write(&video_path, b"stale content").expect("write stale file");

    let options = ImageVideoOptions::default().frame_count(2).fps(4.0);
    let result = ImageVideoEncoder::new(options).write(&image_path, &video_path);

    if let Err(ref error) = result {
        if encoder_unavailable(error) {
            eprintln!("Skipping: MPEG-4 encoder not available ({error})");
            return;
        }
    }
    result.expect("write video");

    let info = VideoProbe::probe(&video_path).expect("probe overwritten file");
    assert_eq!(info.frame_count, 2);
}

#[test]
fn options_builder_defaults() {
    let options = ImageVideoOptions::default();
    assert_eq!(options.resolution, (512, 512));
    assert_eq!(options.frame_count, 16);
    assert_eq!(options.fps, 8.0);

    let options = options.resolution(1024, 768).frame_count(24).fps(12.0);
    assert_eq!(options.resolution, (1024, 768));
    assert_eq!(options.frame_count, 24);
    assert_eq!(options.fps, 12.0);
}
