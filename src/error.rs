//! Error types for the `vidtools` crate.
//!
//! This module defines [`VidToolsError`], the unified error type returned by
//! all fallible operations in the crate. Variants carry the file path and the
//! upstream reason where it helps diagnose the problem at the call site.

use std::{io::Error as IoError, path::PathBuf};

use ffmpeg_next::Error as FfmpegError;
use image::ImageError;
use thiserror::Error;

/// The unified error type for all `vidtools` operations.
///
/// Every public function that can fail returns `Result<T, VidToolsError>`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VidToolsError {
    /// The input file does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path that was checked.
        path: PathBuf,
    },

    /// The video container could not be opened.
    #[error("Failed to open video file at {path}: {reason}")]
    FileOpen {
        /// Path that was passed to the demuxer.
        path: PathBuf,
        /// Underlying reason the open failed.
        reason: String,
    },

    /// The image could not be opened or decoded.
    #[error("Could not load image at {path}: {reason}")]
    ImageOpen {
        /// Path to the image file.
        path: PathBuf,
        /// Underlying decode error.
        reason: String,
    },

    /// The container does not contain a video stream.
    #[error("No video stream found in file")]
    NoVideoStream,

    /// A non-positive frame rate was requested.
    #[error("Frame rate must be positive, got {0}")]
    InvalidFrameRate(f64),

    /// A frame count of zero was requested.
    #[error("Frame count must be greater than zero")]
    EmptyVideo,

    /// The video encoder could not be created or refused a frame.
    #[error("Video encoding error: {0}")]
    VideoEncodeError(String),

    /// Writing the output container failed.
    #[error("Video write error: {0}")]
    VideoWriteError(String),

    /// The refined duration pass failed; callers fall back to the
    /// frame-count estimate.
    #[error("Duration refinement failed: {0}")]
    DurationRefinement(String),

    /// An error originating from the FFmpeg libraries.
    #[error("FFmpeg error: {0}")]
    FfmpegError(String),

    /// An I/O error occurred while reading or writing files.
    #[error("I/O error: {0}")]
    IoError(#[from] IoError),

    /// An error from the `image` crate while resizing or saving.
    #[error("Image processing error: {0}")]
    ImageError(#[from] ImageError),
}

impl From<FfmpegError> for VidToolsError {
    fn from(error: FfmpegError) -> Self {
        VidToolsError::FfmpegError(error.to_string())
    }
}
