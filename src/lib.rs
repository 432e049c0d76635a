//! Curriculum ordering of image patches by information measures
//!
//! Patches are scored by a standalone measure and sorted, or chained greedily
//! by a pairwise distance measure. Labels are permuted in lockstep with their
//! patches, and an ordered patch sequence can be re-tiled into one image to
//! inspect what a curriculum looks like.

#![forbid(unsafe_code)]

/// Input/output operations, configuration, and error handling
pub mod io;
/// Entropy helpers used by the built-in measures
pub mod math;
/// Measure definitions and the measure registry
pub mod measures;
/// Standalone score sorting and distance chaining
pub mod sequencing;
/// Patch types, tiling, and image reconstruction
pub mod spatial;

pub use io::error::{CurriculumError, Result};
pub use measures::{Measure, MeasureKind, MeasureRegistry, default_registry};
pub use sequencing::{Ordering, SequenceOutput, Sequencer, SequencerConfig, sequence};
pub use spatial::{Patch, rebuild};
