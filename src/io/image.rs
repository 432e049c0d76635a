//! PNG loading and export for images held as `[height, width, channels]` arrays
//!
//! Pixel channels are normalised to [0, 1] on load and quantised back to
//! 8 bits on export. Loading goes through a 32-bit float buffer, so 16-bit
//! inputs keep their precision in memory.

use crate::io::error::{CurriculumError, Result, dimension_error};
use image::{ImageBuffer, Rgba, Rgba32FImage};
use ndarray::{Array3, ArrayView3};
use std::path::Path;

/// Channels produced by [`load_png`]
pub const LOADED_CHANNELS: usize = 4;

/// Load an image as RGBA with channels normalised to [0, 1]
///
/// # Errors
///
/// Returns an error if the file cannot be opened or decoded
pub fn load_png<P: AsRef<Path>>(path: P) -> Result<Array3<f64>> {
    let path_buf = path.as_ref().to_path_buf();
    let img = image::open(&path_buf).map_err(|e| CurriculumError::ImageLoad {
        path: path_buf,
        source: e,
    })?;

    Ok(normalised_array(&img.to_rgba32f()))
}

/// Convert a float RGBA buffer into a `[height, width, 4]` array
///
/// Channel values are carried over unchanged, so a buffer produced by
/// `to_rgba32f` yields values in [0, 1].
pub fn normalised_array(buffer: &Rgba32FImage) -> Array3<f64> {
    let (width, height) = buffer.dimensions();

    Array3::from_shape_fn(
        (height as usize, width as usize, LOADED_CHANNELS),
        |(y, x, c)| {
            buffer
                .get_pixel_checked(x as u32, y as u32)
                .and_then(|pixel| pixel.0.get(c).copied())
                .map_or(0.0, f64::from)
        },
    )
}

/// Export a `[height, width, channels]` array in [0, 1] as an 8-bit RGBA PNG
///
/// One channel is written as grey, three as opaque RGB, four as RGBA.
/// Values outside [0, 1] are clamped.
///
/// # Errors
///
/// Returns an error if:
/// - The array has a channel count other than 1, 3 or 4
/// - The image is too large for PNG dimensions
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_png<P: AsRef<Path>>(image: ArrayView3<'_, f64>, output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();
    let (height, width, channels) = image.dim();

    if !matches!(channels, 1 | 3 | 4) {
        return Err(dimension_error(&format!(
            "cannot export an image with {channels} channels"
        )));
    }
    let (Ok(width_px), Ok(height_px)) = (u32::try_from(width), u32::try_from(height)) else {
        return Err(dimension_error(&format!(
            "image of {height}x{width} pixels exceeds PNG dimensions"
        )));
    };

    let channel = |y: u32, x: u32, c: usize| {
        image
            .get((y as usize, x as usize, c))
            .copied()
            .map_or(0, to_byte)
    };

    let img = ImageBuffer::from_fn(width_px, height_px, |x, y| match channels {
        1 => {
            let grey = channel(y, x, 0);
            Rgba([grey, grey, grey, u8::MAX])
        }
        3 => Rgba([channel(y, x, 0), channel(y, x, 1), channel(y, x, 2), u8::MAX]),
        _ => Rgba([
            channel(y, x, 0),
            channel(y, x, 1),
            channel(y, x, 2),
            channel(y, x, 3),
        ]),
    });

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CurriculumError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| CurriculumError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

fn to_byte(value: f64) -> u8 {
    (value.clamp(0.0, 1.0) * f64::from(u8::MAX)).round() as u8
}
