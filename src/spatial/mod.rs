//! Patch data and the spatial transforms between images and patch grids
//!
//! This module contains:
//! - The patch type shared by measures and sequencing
//! - Grid validation for tiling an image into equally sized patches
//! - Block rearrangement from ordered patches back into one image
//! - Patch extraction, the inverse of reconstruction

use ndarray::Array3;

/// Image/patch tiling metadata and validation
pub mod grid;
/// Block-to-space reconstruction of an image from ordered patches
pub mod reconstruction;
/// Row-major patch extraction from an image
pub mod tiles;

pub use grid::PatchGrid;
pub use reconstruction::{block_to_space, rebuild};
pub use tiles::extract_patches;

/// Image patch with shape (height, width, channels)
pub type Patch = Array3<f64>;

/// Patch shape as (height, width, channels)
pub type PatchShape = (usize, usize, usize);
