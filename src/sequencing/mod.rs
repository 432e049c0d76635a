//! Curriculum ordering of patch sets
//!
//! Standalone measures order patches by a stable score sort; distance
//! measures order them by a greedy pairwise chain. Labels travel with their
//! patches through every permutation.

/// Greedy pairwise chaining for distance measures
pub mod distance;
/// Pairwise distance matrices for precomputed evaluation
pub mod matrix;
/// Progress hooks for long sequencing runs
pub mod observer;
/// Ordering direction and sequencer configuration
pub mod options;
/// Lockstep permutation of patches, labels, and origin indices
pub mod permutation;
/// Sequencer entry points
pub mod sequencer;
/// Stable score sort for standalone measures
pub mod standalone;

pub use observer::SequenceObserver;
pub use options::{ChainStrategy, DistanceEvaluation, Ordering, SequencerConfig};
pub use permutation::CoPermuter;
pub use sequencer::{SequenceOutput, Sequencer, sequence};
