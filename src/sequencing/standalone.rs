//! Stable score sort for standalone measures

use crate::io::error::Result;
use crate::measures::StandaloneFn;
use crate::sequencing::{CoPermuter, Ordering};
use crate::spatial::Patch;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Score every patch, in input order
///
/// Each score is independent; with the `parallel` feature they are computed
/// across the rayon pool and collected back in index order.
#[cfg(feature = "parallel")]
pub fn score_all(patches: &[Patch], function: &StandaloneFn) -> Vec<f64> {
    patches.par_iter().map(|patch| function(patch.view())).collect()
}

/// Score every patch, in input order
#[cfg(not(feature = "parallel"))]
pub fn score_all(patches: &[Patch], function: &StandaloneFn) -> Vec<f64> {
    patches.iter().map(|patch| function(patch.view())).collect()
}

/// Indices of `scores` in sorted order
///
/// The sort is stable: equal scores keep their original relative order.
pub fn sorted_order(scores: &[f64], ordering: Ordering) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| {
        let score_a = scores.get(a).copied().unwrap_or(f64::NAN);
        let score_b = scores.get(b).copied().unwrap_or(f64::NAN);
        ordering.compare_scores(score_a, score_b)
    });
    order
}

/// Sort the permuter's patches (and labels) by score
///
/// Returns the scores in the new order. The measure is called exactly once
/// per patch.
///
/// # Errors
///
/// Propagates permutation failures from the permuter
pub fn score_sort<L>(
    permuter: &mut CoPermuter<L>,
    function: &StandaloneFn,
    ordering: Ordering,
) -> Result<Vec<f64>> {
    let scores = score_all(permuter.patches(), function);
    let order = sorted_order(&scores, ordering);
    permuter.apply(&order)?;

    Ok(order
        .iter()
        .filter_map(|&index| scores.get(index).copied())
        .collect())
}
