//! Benchmarks for image resizing and image-to-video conversion.
//!
//! Run with: cargo bench

use std::path::Path;

use criterion::Criterion;
use image::{Rgb, RgbImage};
use vidtools::{ImageVideoEncoder, ImageVideoOptions, resize_image};

fn write_gradient_png(path: &Path, width: u32, height: u32) {
    let image = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    image.save(path).expect("write benchmark image");
}

fn benchmark_resize(criterion: &mut Criterion) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = dir.path().join("input.png");
    write_gradient_png(&input, 1024, 1024);

    criterion.bench_function("resize 1024x1024 -> 512x768 (Lanczos3)", |bencher| {
        let mut iteration = 0_u64;
        bencher.iter(|| {
            let output = dir.path().join(format!("out_{iteration}.png"));
            iteration += 1;
            resize_image(&input, &output, 512, 768).expect("resize");
        });
    });
}

fn benchmark_image_to_video(criterion: &mut Criterion) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let input = dir.path().join("input.png");
    write_gradient_png(&input, 256, 256);

    // Skip when the MPEG-4 encoder is not available on this platform.
    let probe_output = dir.path().join("probe.mp4");
    let options = ImageVideoOptions::default()
        .resolution(128, 128)
        .frame_count(2)
        .fps(8.0);
    if let Err(error) = ImageVideoEncoder::new(options).write(&input, &probe_output) {
        eprintln!("Skipping benchmark: {error}");
        return;
    }

    criterion.bench_function("encode 16-frame 128x128 clip", |bencher| {
        let mut iteration = 0_u64;
        bencher.iter(|| {
            let output = dir.path().join(format!("clip_{iteration}.mp4"));
            iteration += 1;
            let options = ImageVideoOptions::default()
                .resolution(128, 128)
                .frame_count(16)
                .fps(8.0);
            ImageVideoEncoder::new(options)
                .write(&input, &output)
                .expect("encode clip");
        });
    });
}

criterion::criterion_group!(benches, benchmark_resize, benchmark_image_to_video);
criterion::criterion_main!(benches);
