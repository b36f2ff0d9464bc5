//! Image-to-video conversion — repeat a still image into a fixed-length video.
//!
//! This module provides [`ImageVideoEncoder`], which decodes one image,
//! resizes it to the target resolution, and writes it into a video container
//! once per frame at the requested frame rate using FFmpeg.
//!
//! # Example
//!
//! ```no_run
//! use vidtools::{ImageVideoEncoder, ImageVideoOptions, VidToolsError};
//!
//! let options = ImageVideoOptions::default()
//!     .resolution(1024, 1024)
//!     .frame_count(24)
//!     .fps(12.0);
//! ImageVideoEncoder::new(options).write("portrait.png", "portrait.mp4")?;
//! # Ok::<(), VidToolsError>(())
//! ```

use std::path::Path;

use ffmpeg_next::codec::Id;
use ffmpeg_next::codec::context::Context as CodecContext;
use ffmpeg_next::format::{Flags as FormatFlags, Pixel};
use ffmpeg_next::frame::Video as VideoFrame;
use ffmpeg_next::software::scaling::{Context as ScalingContext, Flags as ScalingFlags};
use ffmpeg_next::Packet;
use image::imageops::FilterType;

use crate::error::VidToolsError;
use crate::utilities::fps_to_rational;

/// Options for turning a still image into a video.
///
/// Controls the output resolution, the number of repeated frames, and the
/// frame rate. The defaults match the classic 16-frame, 8 fps, 512x512 clip.
#[derive(Debug, Clone)]
pub struct ImageVideoOptions {
    /// Output resolution as `(width, height)` (default: 512x512).
    pub resolution: (u32, u32),
    /// Number of times the image is written into the container (default: 16).
    pub frame_count: u32,
    /// Target frames per second (default: 8.0).
    pub fps: f64,
}

impl Default for ImageVideoOptions {
    fn default() -> Self {
        Self {
            resolution: (512, 512),
            frame_count: 16,
            fps: 8.0,
        }
    }
}

impl ImageVideoOptions {
    /// Set the output resolution.
    pub fn resolution(mut self, width: u32, height: u32) -> Self {
        self.resolution = (width, height);
        self
    }

    /// Set the number of frames.
    pub fn frame_count(mut self, frame_count: u32) -> Self {
        self.frame_count = frame_count;
        self
    }

    /// Set the frame rate.
    pub fn fps(mut self, fps: f64) -> Self {
        self.fps = fps;
        self
    }
}

/// Encodes a still image into a repeated-frame video file.
///
/// Create via [`ImageVideoEncoder::new`], then call
/// [`write`](ImageVideoEncoder::write). The output container format is
/// inferred from the file extension; frames are encoded with MPEG-4 Part 2
/// (fourcc `mp4v`).
pub struct ImageVideoEncoder {
    options: ImageVideoOptions,
}

impl ImageVideoEncoder {
    /// Create a new encoder with the given options.
    pub fn new(options: ImageVideoOptions) -> Self {
        Self { options }
    }

    /// Decode `image_path`, resize it, and write it `frame_count` times to
    /// `video_path`.
    ///
    /// The image is decoded before the output container is opened, so a
    /// broken input never leaves a partial output file behind. An existing
    /// file at `video_path` is overwritten.
    ///
    /// # Errors
    ///
    /// - [`VidToolsError::InvalidFrameRate`] if `fps` is zero or negative.
    /// - [`VidToolsError::EmptyVideo`] if `frame_count` is zero.
    /// - [`VidToolsError::ImageOpen`] if the image cannot be decoded.
    /// - [`VidToolsError::VideoEncodeError`] if the encoder cannot be opened.
    /// - [`VidToolsError::VideoWriteError`] on container or I/O failure.
    pub fn write<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        image_path: P,
        video_path: Q,
    ) -> Result<(), VidToolsError> {
        let image_path = image_path.as_ref();
        let video_path = video_path.as_ref();
        let (width, height) = self.options.resolution;

        if self.options.fps <= 0.0 {
            return Err(VidToolsError::InvalidFrameRate(self.options.fps));
        }
        if self.options.frame_count == 0 {
            return Err(VidToolsError::EmptyVideo);
        }

        log::info!(
            "Writing {} frames of {} to {} ({}x{} @ {} fps)",
            self.options.frame_count,
            image_path.display(),
            video_path.display(),
            width,
            height,
            self.options.fps,
        );

        // Decode and resize before touching the output path.
        let rgb = image::open(image_path)
            .map_err(|error| VidToolsError::ImageOpen {
                path: image_path.to_path_buf(),
                reason: error.to_string(),
            })?
            .resize_exact(width, height, FilterType::Lanczos3)
            .to_rgb8();

        ffmpeg_next::init()?;

        let frame_rate = fps_to_rational(self.options.fps);
        let time_base = frame_rate.invert();

        let mut output = ffmpeg_next::format::output(video_path)
            .map_err(|e| VidToolsError::VideoWriteError(format!("cannot open output: {e}")))?;

        // Check before adding the stream (avoids a borrow conflict below).
        let needs_global_header = output.format().flags().contains(FormatFlags::GLOBAL_HEADER);

        let encoder_codec = ffmpeg_next::encoder::find(Id::MPEG4).ok_or_else(|| {
            VidToolsError::VideoEncodeError("MPEG-4 encoder not available".to_string())
        })?;

        let mut stream = output
            .add_stream(encoder_codec)
            .map_err(|e| VidToolsError::VideoWriteError(format!("cannot add stream: {e}")))?;
        let stream_index = stream.index();

        let mut encoder = {
            let ctx = CodecContext::from_parameters(stream.parameters()).map_err(|e| {
                VidToolsError::VideoEncodeError(format!("cannot create codec context: {e}"))
            })?;
            ctx.encoder().video().map_err(|e| {
                VidToolsError::VideoEncodeError(format!("cannot open video encoder: {e}"))
            })?
        };

        encoder.set_width(width);
        encoder.set_height(height);
        encoder.set_format(Pixel::YUV420P);
        encoder.set_time_base(time_base);
        encoder.set_frame_rate(Some(frame_rate));

        if needs_global_header {
            unsafe {
                (*encoder.as_mut_ptr()).flags |=
                    ffmpeg_sys_next::AV_CODEC_FLAG_GLOBAL_HEADER as i32;
            }
        }

        let mut opened_encoder = encoder
            .open_as(encoder_codec)
            .map_err(|e| VidToolsError::VideoEncodeError(format!("cannot open encoder: {e}")))?;

        stream.set_parameters(&opened_encoder);

        output
            .write_header()
            .map_err(|e| VidToolsError::VideoWriteError(format!("cannot write header: {e}")))?;

        let mut scaler = ScalingContext::get(
            Pixel::RGB24,
            width,
            height,
            Pixel::YUV420P,
            width,
            height,
            ScalingFlags::BILINEAR,
        )
        .map_err(|e| VidToolsError::VideoWriteError(format!("cannot create scaler: {e}")))?;

        // Build the RGB source frame once; every output frame is the same
        // picture, only the PTS changes.
        let mut src_frame = VideoFrame::new(Pixel::RGB24, width, height);
        let stride = src_frame.stride(0);
        let src_data = src_frame.data_mut(0);
        let rgb_bytes = rgb.as_raw();
        let row_len = (width as usize) * 3;
        for y in 0..height as usize {
            let src_start = y * row_len;
            let dst_start = y * stride;
            src_data[dst_start..dst_start + row_len]
                .copy_from_slice(&rgb_bytes[src_start..src_start + row_len]);
        }

        let mut yuv_frame = VideoFrame::empty();
        scaler
            .run(&src_frame, &mut yuv_frame)
            .map_err(|e| VidToolsError::VideoWriteError(format!("scaling failed: {e}")))?;

        let stream_time_base = output
            .stream(stream_index)
            .map(|s| s.time_base())
            .unwrap_or(time_base);

        for frame_index in 0..self.options.frame_count {
            yuv_frame.set_pts(Some(i64::from(frame_index)));

            opened_encoder
                .send_frame(&yuv_frame)
                .map_err(|e| VidToolsError::VideoEncodeError(format!("send_frame failed: {e}")))?;

            let mut packet = Packet::empty();
            while opened_encoder.receive_packet(&mut packet).is_ok() {
                packet.set_stream(stream_index);
                packet.rescale_ts(time_base, stream_time_base);
                packet.write_interleaved(&mut output).map_err(|e| {
                    VidToolsError::VideoWriteError(format!("write packet failed: {e}"))
                })?;
            }
        }

        opened_encoder
            .send_eof()
            .map_err(|e| VidToolsError::VideoEncodeError(format!("send_eof failed: {e}")))?;

        let mut packet = Packet::empty();
        while opened_encoder.receive_packet(&mut packet).is_ok() {
            packet.set_stream(stream_index);
            packet.rescale_ts(time_base, stream_time_base);
            packet.write_interleaved(&mut output).map_err(|e| {
                VidToolsError::VideoWriteError(format!("write flush packet failed: {e}"))
            })?;
        }

        output
            .write_trailer()
            .map_err(|e| VidToolsError::VideoWriteError(format!("cannot write trailer: {e}")))?;

        log::debug!(
            "Finished {}: {} frames, {:.3}s",
            video_path.display(),
            self.options.frame_count,
            f64::from(self.options.frame_count) / self.options.fps,
        );

        Ok(())
    }
}