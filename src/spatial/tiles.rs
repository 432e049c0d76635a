//! Patch extraction from source images
//!
//! Cuts an image into non-overlapping patches in row-major grid order, the
//! exact inverse of [`crate::spatial::rebuild`].

use crate::io::error::Result;
use crate::spatial::{Patch, PatchGrid};
use ndarray::{ArrayView3, Axis, Slice};

/// Cut an image into row-major `patch_h` x `patch_w` patches
///
/// # Errors
///
/// Returns a dimension error if a patch dimension is zero or the image is
/// not an exact multiple of the patch size
pub fn extract_patches(
    image: ArrayView3<'_, f64>,
    patch_h: usize,
    patch_w: usize,
) -> Result<Vec<Patch>> {
    let (image_h, image_w, channels) = image.dim();
    let grid = PatchGrid::for_image(image_h, image_w, channels, patch_h, patch_w)?;

    let patches = (0..grid.patch_count())
        .filter_map(|index| grid.patch_origin(index))
        .map(|(row, col)| {
            image
                .slice_axis(Axis(0), Slice::from(row..row + patch_h))
                .slice_axis(Axis(1), Slice::from(col..col + patch_w))
                .to_owned()
        })
        .collect();

    Ok(patches)
}

/// Largest top-left region of the image whose sides are multiples of the patch size
///
/// Zero patch dimensions leave the image unchanged.
pub fn crop_to_patch_multiple(
    image: ArrayView3<'_, f64>,
    patch_h: usize,
    patch_w: usize,
) -> ArrayView3<'_, f64> {
    let (image_h, image_w, _) = image.dim();
    if patch_h == 0 || patch_w == 0 {
        return image;
    }
    let height = image_h - image_h % patch_h;
    let width = image_w - image_w % patch_w;
    image
        .slice_axis_move(Axis(0), Slice::from(..height))
        .slice_axis_move(Axis(1), Slice::from(..width))
}
