//! Constants and runtime configuration defaults

use crate::sequencing::Ordering;

/// Default edge length of square patches cut by the CLI
pub const DEFAULT_PATCH_SIZE: usize = 8;

/// Measure used when none is requested
pub const DEFAULT_MEASURE: &str = "entropy";

/// Direction used when none is requested
pub const DEFAULT_ORDERING: Ordering = Ordering::Ascending;

/// Decimal places kept by entropy-based measures before scores are compared
pub const INFORMATION_DECIMALS: i32 = 4;

/// Peak signal value for PSNR on patches normalised to [0, 1]
pub const PSNR_PEAK: f64 = 1.0;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_curriculum";
/// Only files with this extension are processed
pub const INPUT_EXTENSION: &str = "png";
