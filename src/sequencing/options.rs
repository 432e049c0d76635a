//! Ordering direction and algorithm selection

use clap::ValueEnum;
use std::cmp;

/// Direction of the resulting score or selection order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Ordering {
    /// Non-decreasing scores; closest neighbour first in distance mode
    #[default]
    Ascending,
    /// Non-increasing scores; farthest neighbour first in distance mode
    Descending,
}

impl Ordering {
    /// Compare two scores in this direction
    ///
    /// Uses IEEE total ordering, so positive NaN sorts after every number when
    /// ascending and before every number when descending.
    pub fn compare_scores(self, a: f64, b: f64) -> cmp::Ordering {
        match self {
            Self::Ascending => a.total_cmp(&b),
            Self::Descending => b.total_cmp(&a),
        }
    }

    /// Whether `candidate` is strictly better than `current`
    ///
    /// Smaller wins when ascending, larger when descending. Equal values and
    /// NaN never win.
    pub fn prefers(self, candidate: f64, current: f64) -> bool {
        match self {
            Self::Ascending => candidate < current,
            Self::Descending => candidate > current,
        }
    }
}

/// Greedy chaining variant for distance measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum ChainStrategy {
    /// Single pass per step; every new best candidate is swapped into the
    /// slot after the reference as soon as it is found
    #[default]
    LiveSwap,
    /// Full scan per step; only the best candidate of the whole remaining
    /// set is moved next to the reference
    NearestRemaining,
}

/// How pairwise distances are obtained during chaining
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum DistanceEvaluation {
    /// Call the measure while scanning; exactly N(N-1)/2 calls
    #[default]
    Streaming,
    /// Fill the full N x N matrix up front, in parallel when available
    Precomputed,
}

/// Sequencer algorithm settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SequencerConfig {
    /// Chaining variant for distance measures
    pub chain: ChainStrategy,
    /// Distance evaluation mode
    pub evaluation: DistanceEvaluation,
}
