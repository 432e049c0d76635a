//! Sequencer entry points
//!
//! A run validates the patch set, hands ownership of the buffers to a
//! [`CoPermuter`], dispatches on the measure kind and returns the ordered
//! view together with the permutation that produced it.

use crate::io::error::{CurriculumError, Result};
use crate::measures::{Measure, MeasureFunction};
use crate::sequencing::distance::{StreamingDistance, chain};
use crate::sequencing::matrix::DistanceMatrix;
use crate::sequencing::standalone::score_sort;
use crate::sequencing::{
    CoPermuter, DistanceEvaluation, Ordering, SequenceObserver, SequencerConfig,
};
use crate::spatial::Patch;
use tracing::info;

/// Ordered patch set produced by a sequencing run
#[derive(Debug, Clone)]
pub struct SequenceOutput<L> {
    /// Patches in curriculum order
    pub patches: Vec<Patch>,
    /// Labels in the same order as `patches`, if labels were supplied
    pub labels: Option<Vec<L>>,
    /// Input index of each output position
    pub permutation: Vec<usize>,
    /// Score of each output patch, for standalone measures
    pub scores: Option<Vec<f64>>,
}

/// Orders patch sets by a measure
#[derive(Debug, Clone, Copy, Default)]
pub struct Sequencer {
    config: SequencerConfig,
}

impl Sequencer {
    /// Create a sequencer with the given algorithm settings
    pub const fn new(config: SequencerConfig) -> Self {
        Self { config }
    }

    /// Algorithm settings in use
    pub const fn config(&self) -> SequencerConfig {
        self.config
    }

    /// Order `patches` (and `labels`) by `measure`
    ///
    /// # Errors
    ///
    /// See [`Sequencer::run_observed`]
    pub fn run<L>(
        &self,
        patches: Vec<Patch>,
        labels: Option<Vec<L>>,
        measure: &Measure,
        ordering: Ordering,
    ) -> Result<SequenceOutput<L>> {
        self.run_observed(patches, labels, measure, ordering, &mut ())
    }

    /// Order `patches` (and `labels`) by `measure`, reporting progress
    ///
    /// Standalone measures sort by score; distance measures chain greedily
    /// with the configured strategy and evaluation mode.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Labels are supplied with a different count than the patches
    /// - The patches do not all share one shape
    /// - A distance measure meets two identical patches
    /// - The output length differs from the input length
    pub fn run_observed<L, O>(
        &self,
        patches: Vec<Patch>,
        labels: Option<Vec<L>>,
        measure: &Measure,
        ordering: Ordering,
        observer: &mut O,
    ) -> Result<SequenceOutput<L>>
    where
        O: SequenceObserver + ?Sized,
    {
        let count = patches.len();
        validate_uniform_shapes(&patches)?;
        let mut permuter = CoPermuter::new(patches, labels)?;

        info!(
            measure = measure.id(),
            kind = %measure.kind(),
            ?ordering,
            patches = count,
            "sequencing patch set"
        );

        let scores = match measure.function() {
            MeasureFunction::Standalone(function) => {
                observer.on_start(1);
                let scores = score_sort(&mut permuter, function.as_ref(), ordering)?;
                observer.on_step(1, 1);
                Some(scores)
            }
            MeasureFunction::Distance(function) => {
                match self.config.evaluation {
                    DistanceEvaluation::Streaming => chain(
                        &mut permuter,
                        &StreamingDistance::new(function.as_ref()),
                        ordering,
                        self.config.chain,
                        &mut *observer,
                    )?,
                    DistanceEvaluation::Precomputed => {
                        let matrix = DistanceMatrix::compute(permuter.patches(), function.as_ref())?;
                        chain(
                            &mut permuter,
                            &matrix,
                            ordering,
                            self.config.chain,
                            &mut *observer,
                        )?;
                    }
                }
                None
            }
        };
        observer.on_finish();

        let (patches, labels, permutation) = permuter.into_parts();
        ensure_length("ordered patches", count, patches.len())?;
        ensure_length("permutation", count, permutation.len())?;
        if let Some(labels) = &labels {
            ensure_length("ordered labels", count, labels.len())?;
        }

        info!(measure = measure.id(), patches = count, "sequenced patch set");

        Ok(SequenceOutput {
            patches,
            labels,
            permutation,
            scores,
        })
    }
}

/// Order `patches` with the default sequencer settings
///
/// # Errors
///
/// See [`Sequencer::run_observed`]
pub fn sequence<L>(
    patches: Vec<Patch>,
    labels: Option<Vec<L>>,
    measure: &Measure,
    ordering: Ordering,
) -> Result<SequenceOutput<L>> {
    Sequencer::default().run(patches, labels, measure, ordering)
}

fn validate_uniform_shapes(patches: &[Patch]) -> Result<()> {
    let Some(first) = patches.first() else {
        return Ok(());
    };

    match patches
        .iter()
        .enumerate()
        .find(|(_, patch)| patch.dim() != first.dim())
    {
        Some((index, patch)) => Err(CurriculumError::ShapeMismatch {
            first: 0,
            second: index,
            expected: first.dim(),
            found: patch.dim(),
        }),
        None => Ok(()),
    }
}

fn ensure_length(what: &'static str, expected: usize, found: usize) -> Result<()> {
    if expected == found {
        Ok(())
    } else {
        Err(CurriculumError::LengthMismatch {
            what,
            expected,
            found,
        })
    }
}
