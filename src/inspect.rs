//! Video inspection — lightweight metadata probing.
//!
//! [`VideoProbe`] opens a video container, extracts the fields of a
//! [`VideoInfo`] record, and closes the demuxer before returning. A second,
//! more accurate pass ([`VideoProbe::refine_duration`]) demuxes every packet
//! of the video stream to measure the real duration; callers fall back to
//! the frame-count estimate when that pass fails.
//!
//! # Example
//!
//! ```no_run
//! use vidtools::VideoProbe;
//!
//! let info = VideoProbe::probe("clip.mp4")?;
//! println!(
//!     "{}x{} @ {:.2} fps, {} frames, codec {}",
//!     info.width, info.height, info.frames_per_second, info.frame_count, info.codec_tag,
//! );
//! # Ok::<(), vidtools::VidToolsError>(())
//! ```

use std::{fs, path::Path, time::Duration};

use ffmpeg_next::{codec::context::Context as CodecContext, media::Type};

use crate::error::VidToolsError;
use crate::utilities::{format_duration, fourcc_to_string, pts_to_seconds};

/// Diagnostic metadata for a single video file.
///
/// Produced by [`VideoProbe::probe`]; fully owned, no file handle is kept.
#[derive(Debug, Clone)]
#[must_use]
pub struct VideoInfo {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Frames per second (may be approximate for variable-frame-rate content).
    pub frames_per_second: f64,
    /// Total number of frames, taken from the container when recorded there,
    /// otherwise estimated from duration and frame rate.
    pub frame_count: u64,
    /// Four-character codec tag (e.g. `"mp4v"`, `"avc1"`).
    pub codec_tag: String,
    /// Duration computed as `frame_count / fps`, zero when the frame rate is
    /// unknown. Replace with [`VideoProbe::refine_duration`] for accuracy.
    pub duration: Duration,
    /// File size in bytes.
    pub file_size_bytes: u64,
}

impl VideoInfo {
    /// File size in megabytes (1 MB = 1024 * 1024 bytes).
    pub fn file_size_megabytes(&self) -> f64 {
        self.file_size_bytes as f64 / (1024.0 * 1024.0)
    }

    /// Duration formatted as `HH:MM:SS`.
    pub fn duration_formatted(&self) -> String {
        format_duration(self.duration)
    }
}

/// Lightweight video file probe.
///
/// Opens the file, extracts metadata, and immediately closes the demuxer,
/// so inspecting many files does not retain an FFmpeg input context per
/// file.
pub struct VideoProbe;

impl VideoProbe {
    /// Probe a video file and return its metadata.
    ///
    /// # Errors
    ///
    /// - [`VidToolsError::FileNotFound`] if the path does not exist.
    /// - [`VidToolsError::FileOpen`] if the container cannot be opened.
    /// - [`VidToolsError::NoVideoStream`] if no video stream is present.
    pub fn probe<P: AsRef<Path>>(path: P) -> Result<VideoInfo, VidToolsError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(VidToolsError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let file_size_bytes = fs::metadata(path)?.len();

        ffmpeg_next::init().map_err(|error| VidToolsError::FileOpen {
            path: path.to_path_buf(),
            reason: format!("FFmpeg initialisation failed: {error}"),
        })?;

        let input_context =
            ffmpeg_next::format::input(&path).map_err(|error| VidToolsError::FileOpen {
                path: path.to_path_buf(),
                reason: error.to_string(),
            })?;

        let stream = input_context
            .streams()
            .best(Type::Video)
            .ok_or(VidToolsError::NoVideoStream)?;

        let decoder_context = CodecContext::from_parameters(stream.parameters()).map_err(
            |error| VidToolsError::FileOpen {
                path: path.to_path_buf(),
                reason: format!("Failed to read video codec parameters: {error}"),
            },
        )?;
        let video_decoder =
            decoder_context
                .decoder()
                .video()
                .map_err(|error| VidToolsError::FileOpen {
                    path: path.to_path_buf(),
                    reason: format!("Failed to create video decoder: {error}"),
                })?;

        let width = video_decoder.width();
        let height = video_decoder.height();

        // Average frame rate first, real base frame rate as fallback.
        let frame_rate = stream.avg_frame_rate();
        let frames_per_second = if frame_rate.denominator() != 0 {
            frame_rate.numerator() as f64 / frame_rate.denominator() as f64
        } else {
            let rate = stream.rate();
            if rate.denominator() != 0 {
                rate.numerator() as f64 / rate.denominator() as f64
            } else {
                0.0
            }
        };

        // Prefer the container's frame counter; estimate when absent.
        let frame_count = if stream.frames() > 0 {
            stream.frames() as u64
        } else {
            let container_duration_microseconds = input_context.duration();
            if container_duration_microseconds > 0 && frames_per_second > 0.0 {
                let seconds = container_duration_microseconds as f64 / 1_000_000.0;
                (seconds * frames_per_second) as u64
            } else {
                0
            }
        };

        let codec_tag = fourcc_to_string(unsafe { (*stream.parameters().as_ptr()).codec_tag });

        // Frame-count estimate, guarded against a zero frame rate.
        let duration = if frames_per_second > 0.0 {
            Duration::from_secs_f64(frame_count as f64 / frames_per_second)
        } else {
            Duration::ZERO
        };

        log::debug!(
            "Probed {}: {}x{}, {:.2} fps, {} frames, codec {}",
            path.display(),
            width,
            height,
            frames_per_second,
            frame_count,
            codec_tag,
        );

        Ok(VideoInfo {
            width,
            height,
            frames_per_second,
            frame_count,
            codec_tag,
            duration,
            file_size_bytes,
        })
    }

    /// Measure the duration with a full demuxing pass.
    ///
    /// Reads every packet of the best video stream and converts the largest
    /// end timestamp (`pts + packet duration`) to seconds. Slower than
    /// [`probe`](VideoProbe::probe) but immune to missing or wrong
    /// container-level frame counts.
    ///
    /// # Errors
    ///
    /// Returns [`VidToolsError::DurationRefinement`] when the file cannot be
    /// opened, has no video stream, or carries no timestamped packets.
    pub fn refine_duration<P: AsRef<Path>>(path: P) -> Result<Duration, VidToolsError> {
        let path = path.as_ref();

        ffmpeg_next::init()
            .map_err(|error| VidToolsError::DurationRefinement(error.to_string()))?;

        let mut input_context = ffmpeg_next::format::input(&path)
            .map_err(|error| VidToolsError::DurationRefinement(error.to_string()))?;

        let (stream_index, time_base) = {
            let stream = input_context
                .streams()
                .best(Type::Video)
                .ok_or_else(|| {
                    VidToolsError::DurationRefinement("no video stream found".to_string())
                })?;
            (stream.index(), stream.time_base())
        };

        let mut end_pts: Option<i64> = None;
        for (stream, packet) in input_context.packets() {
            if stream.index() != stream_index {
                continue;
            }
            if let Some(pts) = packet.pts() {
                let end = pts + packet.duration().max(0);
                end_pts = Some(end_pts.map_or(end, |current| current.max(end)));
            }
        }

        let end_pts = end_pts.ok_or_else(|| {
            VidToolsError::DurationRefinement("no timestamped packets in video stream".to_string())
        })?;

        let seconds = pts_to_seconds(end_pts, time_base);
        Ok(Duration::from_secs_f64(seconds.max(0.0)))
    }

    /// Probe multiple video files and return their metadata.
    ///
    /// Files that cannot be probed produce an `Err` entry in the result
    /// vector rather than aborting the entire batch. Processing is strictly
    /// sequential.
    pub fn probe_many<P: AsRef<Path>>(paths: &[P]) -> Vec<Result<VideoInfo, VidToolsError>> {
        paths.iter().map(|path| Self::probe(path)).collect()
    }
}
