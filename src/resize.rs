//! Image resizing with a high-quality resampling filter.
//!
//! [`resize_image`] decodes an image, resamples it to exact target
//! dimensions with a Lanczos3 filter, creates the output directory if it
//! does not exist, and saves the result in the format implied by the output
//! path's extension.

use std::{fs, path::Path};

use image::imageops::FilterType;

use crate::error::VidToolsError;

/// Resize an image to exactly `width` x `height` and save it.
///
/// The aspect ratio is **not** preserved; the output always has the
/// requested dimensions. Missing parent directories of `output` are created
/// recursively, and an existing file at `output` is overwritten. The output
/// format is chosen from the file extension (`.png`, `.jpg`, ...).
///
/// # Errors
///
/// - [`VidToolsError::ImageOpen`] if the input cannot be opened or decoded.
/// - [`VidToolsError::IoError`] if the output directory cannot be created.
/// - [`VidToolsError::ImageError`] if encoding or saving fails.
///
/// # Example
///
/// ```no_run
/// use vidtools::{VidToolsError, resize_image};
///
/// resize_image("photo.jpg", "thumbs/photo.png", 512, 768)?;
/// # Ok::<(), VidToolsError>(())
/// ```
pub fn resize_image<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    width: u32,
    height: u32,
) -> Result<(), VidToolsError> {
    let input = input.as_ref();
    let output = output.as_ref();

    let image = image::open(input).map_err(|error| VidToolsError::ImageOpen {
        path: input.to_path_buf(),
        reason: error.to_string(),
    })?;

    log::debug!(
        "Resizing {} from {}x{} to {width}x{height}",
        input.display(),
        image.width(),
        image.height(),
    );

    let resized = image.resize_exact(width, height, FilterType::Lanczos3);

    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    resized.save(output)?;

    log::info!(
        "Resized {} to {width}x{height} and saved to {}",
        input.display(),
        output.display(),
    );

    Ok(())
}
