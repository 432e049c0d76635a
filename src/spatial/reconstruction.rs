//! Reassembles an ordered patch sequence into a single image
//!
//! The patch order decides pixel placement: patch `k` lands in grid cell
//! `(k / w_ratio, k % w_ratio)`, so rebuilding a curriculum-ordered
//! sequence shows what that ordering looks like as one tiled image.

use crate::io::error::{CurriculumError, Result, dimension_error};
use crate::spatial::{Patch, PatchGrid};
use ndarray::{Array3, ArrayView3, ArrayView4, Axis};
use tracing::debug;

/// Rebuild an `image_h` x `image_w` image from patches in row-major grid order
///
/// The patches are viewed as a `[h_ratio, w_ratio, patch_h * patch_w, channels]`
/// grid, the flattened pixel axis is moved to the front to form one block per
/// pixel offset, and [`block_to_space`] interleaves the blocks into the image.
///
/// # Errors
///
/// Returns an error if:
/// - `patches` is empty
/// - The patches do not all share one shape
/// - The image dimensions are not multiples of the patch dimensions
/// - The grid implied by the dimensions does not hold exactly `patches.len()` patches
pub fn rebuild(patches: &[Patch], image_h: usize, image_w: usize) -> Result<Array3<f64>> {
    let first = patches
        .first()
        .ok_or_else(|| dimension_error(&"cannot rebuild an image from zero patches"))?;
    let grid = PatchGrid::new(first.dim(), patches.len(), image_h, image_w)?;

    if let Some((index, patch)) = patches
        .iter()
        .enumerate()
        .find(|(_, patch)| patch.dim() != first.dim())
    {
        return Err(CurriculumError::ShapeMismatch {
            first: 0,
            second: index,
            expected: first.dim(),
            found: patch.dim(),
        });
    }

    let views: Vec<ArrayView3<'_, f64>> = patches.iter().map(Patch::view).collect();
    let stacked = ndarray::stack(Axis(0), &views).map_err(|err| dimension_error(&err))?;

    let cells = stacked
        .into_shape_with_order((grid.h_ratio, grid.w_ratio, grid.patch_area(), grid.channels))
        .map_err(|err| dimension_error(&err))?;

    // One block per pixel offset inside a patch: [patch_area, h_ratio, w_ratio, channels]
    let blocks = cells.permuted_axes([2, 0, 1, 3]);

    let image = block_to_space(blocks.view(), grid.patch_h, grid.patch_w)?;

    debug!(
        patches = patches.len(),
        image_h, image_w, "rebuilt image from ordered patches"
    );

    Ok(image)
}

/// Interleave `block_h * block_w` blocks of shape `[rows, cols, channels]`
/// into one `[rows * block_h, cols * block_w, channels]` image
///
/// Block `by * block_w + bx` supplies pixel `(r * block_h + by, c * block_w + bx)`
/// for every grid position `(r, c)`. No padding or cropping is applied.
///
/// # Errors
///
/// Returns a dimension error if a block dimension is zero or the leading
/// axis does not hold exactly `block_h * block_w` blocks
pub fn block_to_space(
    blocks: ArrayView4<'_, f64>,
    block_h: usize,
    block_w: usize,
) -> Result<Array3<f64>> {
    let (count, rows, cols, channels) = blocks.dim();

    if block_h == 0 || block_w == 0 {
        return Err(dimension_error(&format!(
            "block size must be non-zero, got {block_h}x{block_w}"
        )));
    }
    if count != block_h * block_w {
        return Err(dimension_error(&format!(
            "expected {} blocks for a {block_h}x{block_w} block size, got {count}",
            block_h * block_w
        )));
    }

    let split = blocks
        .as_standard_layout()
        .into_owned()
        .into_shape_with_order((block_h, block_w, rows, cols, channels))
        .map_err(|err| dimension_error(&err))?;

    split
        .permuted_axes([2, 0, 3, 1, 4])
        .as_standard_layout()
        .into_owned()
        .into_shape_with_order((rows * block_h, cols * block_w, channels))
        .map_err(|err| dimension_error(&err))
}
