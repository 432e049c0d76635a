//! Tiling metadata relating an image to the grid of patches covering it
//!
//! A grid is valid when the image height and width are exact multiples of
//! the patch height and width. Patches are laid out row-major: patch `k`
//! covers grid cell `(k / w_ratio, k % w_ratio)`.

use crate::io::error::{Result, dimension_error};
use crate::spatial::PatchShape;

/// Image and patch dimensions of a validated tiling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatchGrid {
    /// Image height in pixels
    pub image_h: usize,
    /// Image width in pixels
    pub image_w: usize,
    /// Patch height in pixels
    pub patch_h: usize,
    /// Patch width in pixels
    pub patch_w: usize,
    /// Channels per pixel
    pub channels: usize,
    /// Patches per grid column (`image_h / patch_h`)
    pub h_ratio: usize,
    /// Patches per grid row (`image_w / patch_w`)
    pub w_ratio: usize,
}

impl PatchGrid {
    /// Validate that `patch_count` patches of `patch_shape` tile an
    /// `image_h` x `image_w` image exactly
    ///
    /// # Errors
    ///
    /// Returns a dimension error if:
    /// - A patch dimension is zero
    /// - The image height or width is not a multiple of the patch size
    /// - The grid cell count differs from `patch_count`
    pub fn new(
        patch_shape: PatchShape,
        patch_count: usize,
        image_h: usize,
        image_w: usize,
    ) -> Result<Self> {
        let (patch_h, patch_w, channels) = patch_shape;
        let grid = Self::for_image(image_h, image_w, channels, patch_h, patch_w)?;

        if grid.patch_count() != patch_count {
            return Err(dimension_error(&format!(
                "a {}x{} grid of {patch_h}x{patch_w} patches holds {} patches, got {patch_count}",
                grid.h_ratio,
                grid.w_ratio,
                grid.patch_count()
            )));
        }

        Ok(grid)
    }

    /// Grid obtained by cutting an image into `patch_h` x `patch_w` patches
    ///
    /// # Errors
    ///
    /// Returns a dimension error if a patch dimension is zero or the image
    /// is not an exact multiple of the patch size
    pub fn for_image(
        image_h: usize,
        image_w: usize,
        channels: usize,
        patch_h: usize,
        patch_w: usize,
    ) -> Result<Self> {
        if patch_h == 0 || patch_w == 0 {
            return Err(dimension_error(&format!(
                "patch dimensions must be non-zero, got {patch_h}x{patch_w}"
            )));
        }
        if image_h % patch_h != 0 {
            return Err(dimension_error(&format!(
                "image height {image_h} is not a multiple of patch height {patch_h}"
            )));
        }
        if image_w % patch_w != 0 {
            return Err(dimension_error(&format!(
                "image width {image_w} is not a multiple of patch width {patch_w}"
            )));
        }

        Ok(Self {
            image_h,
            image_w,
            patch_h,
            patch_w,
            channels,
            h_ratio: image_h / patch_h,
            w_ratio: image_w / patch_w,
        })
    }

    /// Number of patches in the grid
    pub const fn patch_count(&self) -> usize {
        self.h_ratio * self.w_ratio
    }

    /// Number of pixels in one patch
    pub const fn patch_area(&self) -> usize {
        self.patch_h * self.patch_w
    }

    /// Top-left pixel (row, col) of the patch at row-major `index`
    pub const fn patch_origin(&self, index: usize) -> Option<(usize, usize)> {
        if index >= self.patch_count() {
            return None;
        }
        let row = index / self.w_ratio;
        let col = index % self.w_ratio;
        Some((row * self.patch_h, col * self.patch_w))
    }
}
