//! Lockstep permutation of patches and their labels
//!
//! The permuter owns the working buffers of one sequencing run. Every swap
//! or permutation touches the patch buffer, the label buffer (if any) and
//! the origin-index buffer in the same call, so `labels[k]` and
//! `patches[k]` always come from input position `origins[k]`.

use crate::io::error::{CurriculumError, Result, invalid_parameter};
use crate::spatial::Patch;

/// Patch at a working position together with its input index
#[derive(Debug, Clone, Copy)]
pub struct Slot<'a> {
    /// Index of the patch in the caller's input
    pub origin: usize,
    /// The patch itself
    pub patch: &'a Patch,
}

/// Owned patch, label and origin buffers permuted together
#[derive(Debug, Clone)]
pub struct CoPermuter<L> {
    patches: Vec<Patch>,
    labels: Option<Vec<L>>,
    origins: Vec<usize>,
}

impl<L> CoPermuter<L> {
    /// Take ownership of a patch set and its optional labels
    ///
    /// # Errors
    ///
    /// Returns [`CurriculumError::LengthMismatch`] if labels are present and
    /// their count differs from the patch count
    pub fn new(patches: Vec<Patch>, labels: Option<Vec<L>>) -> Result<Self> {
        if let Some(labels) = &labels {
            if labels.len() != patches.len() {
                return Err(CurriculumError::LengthMismatch {
                    what: "labels",
                    expected: patches.len(),
                    found: labels.len(),
                });
            }
        }

        let origins = (0..patches.len()).collect();
        Ok(Self {
            patches,
            labels,
            origins,
        })
    }

    /// Number of patches
    pub fn len(&self) -> usize {
        self.patches.len()
    }

    /// Check whether the patch set is empty
    pub fn is_empty(&self) -> bool {
        self.patches.is_empty()
    }

    /// Patches in working order
    pub fn patches(&self) -> &[Patch] {
        &self.patches
    }

    /// Labels in working order
    pub fn labels(&self) -> Option<&[L]> {
        self.labels.as_deref()
    }

    /// Input index of each working position
    pub fn origins(&self) -> &[usize] {
        &self.origins
    }

    /// Patch and origin at a working position
    ///
    /// # Errors
    ///
    /// Returns [`CurriculumError::LengthMismatch`] if `position` is out of range
    pub fn slot(&self, position: usize) -> Result<Slot<'_>> {
        match (self.patches.get(position), self.origins.get(position)) {
            (Some(patch), Some(&origin)) => Ok(Slot { origin, patch }),
            _ => Err(self.out_of_range(position)),
        }
    }

    /// Exchange two working positions in every buffer
    ///
    /// # Errors
    ///
    /// Returns [`CurriculumError::LengthMismatch`] if either position is out of range
    pub fn swap(&mut self, a: usize, b: usize) -> Result<()> {
        let len = self.len();
        if a >= len || b >= len {
            return Err(self.out_of_range(a.max(b)));
        }

        self.patches.swap(a, b);
        self.origins.swap(a, b);
        if let Some(labels) = &mut self.labels {
            labels.swap(a, b);
        }
        Ok(())
    }

    /// Reorder every buffer so that new position `k` holds old position `order[k]`
    ///
    /// # Errors
    ///
    /// Returns an error if `order` is not a permutation of `0..len()`; the
    /// buffers are left untouched in that case
    pub fn apply(&mut self, order: &[usize]) -> Result<()> {
        if order.len() != self.len() {
            return Err(CurriculumError::LengthMismatch {
                what: "permutation",
                expected: self.len(),
                found: order.len(),
            });
        }
        let mut seen = vec![false; order.len()];
        for &position in order {
            match seen.get_mut(position) {
                Some(flag) if !*flag => *flag = true,
                _ => {
                    return Err(invalid_parameter(
                        "order",
                        &position,
                        &"not a permutation of the working positions",
                    ));
                }
            }
        }

        self.patches = reorder(std::mem::take(&mut self.patches), order);
        self.origins = reorder(std::mem::take(&mut self.origins), order);
        if let Some(labels) = self.labels.take() {
            self.labels = Some(reorder(labels, order));
        }
        Ok(())
    }

    /// Release the buffers as (patches, labels, origins)
    pub fn into_parts(self) -> (Vec<Patch>, Option<Vec<L>>, Vec<usize>) {
        (self.patches, self.labels, self.origins)
    }

    fn out_of_range(&self, position: usize) -> CurriculumError {
        CurriculumError::LengthMismatch {
            what: "working sequence",
            expected: position + 1,
            found: self.patches.len(),
        }
    }
}

// `order` must already be validated as a permutation of `0..items.len()`
fn reorder<T>(items: Vec<T>, order: &[usize]) -> Vec<T> {
    let mut taken: Vec<Option<T>> = items.into_iter().map(Some).collect();
    order
        .iter()
        .filter_map(|&position| taken.get_mut(position).and_then(Option::take))
        .collect()
}
