//! Greedy pairwise chaining for distance measures
//!
//! Step `i` takes the patch at working position `i` as reference and scans
//! every later position. With [`ChainStrategy::LiveSwap`] each strictly
//! better candidate is swapped into position `i + 1` the moment it is found.
//! Each displaced former best lands at the position just scanned, so the
//! remaining patches are reshuffled along the way. That reshuffling decides
//! which of several equally distant candidates a later step picks first.
//! [`ChainStrategy::NearestRemaining`] moves only the best of the scan into
//! `i + 1`, with a single swap once the scan completes.

use crate::io::error::{CurriculumError, Result};
use crate::measures::DistanceFn;
use crate::sequencing::permutation::Slot;
use crate::sequencing::{ChainStrategy, CoPermuter, Ordering, SequenceObserver};
use crate::spatial::Patch;
use ndarray::Zip;
use tracing::debug;

/// Supplies the distance between two working slots
pub trait DistanceSource {
    /// Distance from `reference` to `candidate`
    ///
    /// # Errors
    ///
    /// Returns an error if the pair cannot be compared
    fn distance(&self, reference: Slot<'_>, candidate: Slot<'_>) -> Result<f64>;
}

/// Evaluates the measure on demand during the scan
pub struct StreamingDistance<'f> {
    function: &'f DistanceFn,
}

impl<'f> StreamingDistance<'f> {
    /// Wrap a distance function
    pub const fn new(function: &'f DistanceFn) -> Self {
        Self { function }
    }
}

impl DistanceSource for StreamingDistance<'_> {
    fn distance(&self, reference: Slot<'_>, candidate: Slot<'_>) -> Result<f64> {
        ensure_comparable(
            reference.origin,
            reference.patch,
            candidate.origin,
            candidate.patch,
        )?;
        Ok((self.function)(reference.patch.view(), candidate.patch.view()))
    }
}

/// Check that two patches may be passed to a distance measure
///
/// # Errors
///
/// Returns an error if:
/// - The patches differ in shape ([`CurriculumError::ShapeMismatch`])
/// - The patches are bit-identical ([`CurriculumError::IdenticalPatches`]).
///   NaN matches NaN with the same bits, while `0.0` and `-0.0` differ.
pub fn ensure_comparable(
    first_index: usize,
    first: &Patch,
    second_index: usize,
    second: &Patch,
) -> Result<()> {
    if first.dim() != second.dim() {
        return Err(CurriculumError::ShapeMismatch {
            first: first_index,
            second: second_index,
            expected: first.dim(),
            found: second.dim(),
        });
    }
    if Zip::from(first)
        .and(second)
        .all(|a, b| a.to_bits() == b.to_bits())
    {
        return Err(CurriculumError::IdenticalPatches {
            first: first_index,
            second: second_index,
        });
    }
    Ok(())
}

/// Reorder the permuter's patches by greedy chaining
///
/// Fewer than two patches are left untouched without any distance call;
/// the observer then sees a start with zero steps.
///
/// # Errors
///
/// Propagates comparison failures from the distance source
pub fn chain<L, D, O>(
    permuter: &mut CoPermuter<L>,
    source: &D,
    ordering: Ordering,
    strategy: ChainStrategy,
    observer: &mut O,
) -> Result<()>
where
    D: DistanceSource + ?Sized,
    O: SequenceObserver + ?Sized,
{
    let count = permuter.len();
    if count < 2 {
        observer.on_start(0);
        return Ok(());
    }

    observer.on_start(count);
    for step in 0..count {
        let swaps = match strategy {
            ChainStrategy::LiveSwap => live_swap_step(permuter, source, ordering, step)?,
            ChainStrategy::NearestRemaining => {
                nearest_remaining_step(permuter, source, ordering, step)?
            }
        };
        debug!(step, swaps, "chain step");
        observer.on_step(step + 1, count);
    }

    Ok(())
}

fn live_swap_step<L, D>(
    permuter: &mut CoPermuter<L>,
    source: &D,
    ordering: Ordering,
    step: usize,
) -> Result<usize>
where
    D: DistanceSource + ?Sized,
{
    let mut best: Option<f64> = None;
    let mut swaps = 0;

    for candidate in (step + 1)..permuter.len() {
        let distance = source.distance(permuter.slot(step)?, permuter.slot(candidate)?)?;

        match best {
            None => best = Some(distance),
            Some(current) if ordering.prefers(distance, current) => {
                best = Some(distance);
                permuter.swap(step + 1, candidate)?;
                swaps += 1;
            }
            Some(_) => {}
        }
    }

    Ok(swaps)
}

fn nearest_remaining_step<L, D>(
    permuter: &mut CoPermuter<L>,
    source: &D,
    ordering: Ordering,
    step: usize,
) -> Result<usize>
where
    D: DistanceSource + ?Sized,
{
    let mut best: Option<(usize, f64)> = None;

    for candidate in (step + 1)..permuter.len() {
        let distance = source.distance(permuter.slot(step)?, permuter.slot(candidate)?)?;

        match best {
            Some((_, current)) if !ordering.prefers(distance, current) => {}
            _ => best = Some((candidate, distance)),
        }
    }

    match best {
        Some((position, _)) if position != step + 1 => {
            permuter.swap(step + 1, position)?;
            Ok(1)
        }
        _ => Ok(0),
    }
}
