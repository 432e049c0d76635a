//! Precomputed pairwise distance matrices
//!
//! Cell `(i, j)` holds `distance(patches[i], patches[j])` for input indices
//! `i != j`; the diagonal is zero and never evaluated. Rows are independent,
//! so with the `parallel` feature each rayon worker fills whole rows.

use crate::io::error::{Result, dimension_error};
use crate::measures::DistanceFn;
use crate::sequencing::distance::{DistanceSource, ensure_comparable};
use crate::sequencing::permutation::Slot;
use crate::spatial::Patch;
use ndarray::Array2;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Dense N x N matrix of directed patch distances
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    distances: Array2<f64>,
}

impl DistanceMatrix {
    /// Evaluate the measure on every ordered pair of distinct input indices
    ///
    /// Every pair passes the same shape and identity checks as streaming
    /// evaluation. When several pairs fail, which error is reported is
    /// unspecified under the `parallel` feature.
    ///
    /// # Errors
    ///
    /// Returns an error if any two patches differ in shape or are identical
    pub fn compute(patches: &[Patch], function: &DistanceFn) -> Result<Self> {
        let count = patches.len();
        let rows = compute_rows(patches, function)?;
        let distances = Array2::from_shape_vec((count, count), rows.concat())
            .map_err(|err| dimension_error(&err))?;
        Ok(Self { distances })
    }

    /// Wrap an existing matrix of distances indexed by input position
    ///
    /// # Errors
    ///
    /// Returns a dimension error if the matrix is not square
    pub fn from_array(distances: Array2<f64>) -> Result<Self> {
        let (rows, cols) = distances.dim();
        if rows != cols {
            return Err(dimension_error(&format!(
                "distance matrix must be square, got {rows}x{cols}"
            )));
        }
        Ok(Self { distances })
    }

    /// Number of patches covered
    pub fn len(&self) -> usize {
        self.distances.nrows()
    }

    /// Check whether the matrix covers no patches
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Distance from input `reference` to input `candidate`
    pub fn get(&self, reference: usize, candidate: usize) -> Option<f64> {
        self.distances.get([reference, candidate]).copied()
    }

    /// The underlying matrix
    pub const fn as_array(&self) -> &Array2<f64> {
        &self.distances
    }
}

impl DistanceSource for DistanceMatrix {
    fn distance(&self, reference: Slot<'_>, candidate: Slot<'_>) -> Result<f64> {
        self.get(reference.origin, candidate.origin).ok_or_else(|| {
            dimension_error(&format!(
                "distance matrix of size {} has no entry ({}, {})",
                self.len(),
                reference.origin,
                candidate.origin
            ))
        })
    }
}

fn compute_row(patches: &[Patch], function: &DistanceFn, row: usize) -> Result<Vec<f64>> {
    let Some(reference) = patches.get(row) else {
        return Ok(Vec::new());
    };

    patches
        .iter()
        .enumerate()
        .map(|(col, candidate)| {
            if col == row {
                return Ok(0.0);
            }
            ensure_comparable(row, reference, col, candidate)?;
            Ok(function(reference.view(), candidate.view()))
        })
        .collect()
}

#[cfg(feature = "parallel")]
fn compute_rows(patches: &[Patch], function: &DistanceFn) -> Result<Vec<Vec<f64>>> {
    (0..patches.len())
        .into_par_iter()
        .map(|row| compute_row(patches, function, row))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn compute_rows(patches: &[Patch], function: &DistanceFn) -> Result<Vec<Vec<f64>>> {
    (0..patches.len())
        .map(|row| compute_row(patches, function, row))
        .collect()
}
