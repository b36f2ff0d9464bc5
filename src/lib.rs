//! # vidtools
//!
//! Small media tools — turn a still image into a fixed-length video, resize
//! images with a high-quality filter, and inspect video metadata, powered by
//! FFmpeg via the [`ffmpeg-next`](https://crates.io/crates/ffmpeg-next)
//! crate and the [`image`](https://crates.io/crates/image) crate.
//!
//! Three command-line binaries ship with the crate (`image-to-video`,
//! `resize-image`, `video-info`), each a thin wrapper over one of the
//! library calls below.
//!
//! ## Quick Start
//!
//! ### Turn an Image into a Video
//!
//! ```no_run
//! use vidtools::{ImageVideoEncoder, ImageVideoOptions};
//!
//! let options = ImageVideoOptions::default().frame_count(24).fps(12.0);
//! ImageVideoEncoder::new(options)
//!     .write("input.png", "output.mp4")
//!     .unwrap();
//! ```
//!
//! ### Resize an Image
//!
//! ```no_run
//! vidtools::resize_image("input.jpg", "resized/output.png", 512, 768).unwrap();
//! ```
//!
//! ### Inspect a Video
//!
//! ```no_run
//! use vidtools::VideoProbe;
//!
//! let info = VideoProbe::probe("input.mp4").unwrap();
//! println!("{}x{}, {} frames", info.width, info.height, info.frame_count);
//! ```
//!
//! ## Requirements
//!
//! FFmpeg development libraries must be installed on your system.

pub mod convert;
pub mod error;
pub mod ffmpeg;
pub mod inspect;
pub mod resize;
mod utilities;

pub use convert::{ImageVideoEncoder, ImageVideoOptions};
pub use error::VidToolsError;
pub use ffmpeg::{FfmpegLogLevel, get_ffmpeg_log_level, set_ffmpeg_log_level};
pub use inspect::{VideoInfo, VideoProbe};
pub use resize::resize_image;
