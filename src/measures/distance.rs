//! Two-patch distance measures
//!
//! Information measures pair elements by position (`reference[k]` with
//! `candidate[k]`) and report bits rounded to
//! [`INFORMATION_DECIMALS`](crate::io::configuration::INFORMATION_DECIMALS).
//! Norms are computed over the element-wise difference and are NaN for
//! patches of different shapes; the sequencer rejects such pairs before
//! any call.

use crate::io::configuration::PSNR_PEAK;
use crate::math::information::{entropy, joint_entropy as pair_entropy, round_information};
use crate::measures::MeasureRegistry;
use ndarray::{ArrayView3, Zip};

/// Identifier of [`joint_entropy`]
pub const JOINT_ENTROPY: &str = "joint-entropy";
/// Identifier of [`mutual_information`]
pub const MUTUAL_INFORMATION: &str = "mutual-information";
/// Identifier of [`conditional_entropy`]
pub const CONDITIONAL_ENTROPY: &str = "conditional-entropy";
/// Identifier of [`l1`]
pub const L1: &str = "L1";
/// Identifier of [`l2`]
pub const L2: &str = "L2";
/// Identifier of [`max_norm`]
pub const MAX_NORM: &str = "max-norm";
/// Identifier of [`psnr`]
pub const PSNR: &str = "psnr";

fn paired<'a>(
    reference: &'a ArrayView3<'_, f64>,
    candidate: &'a ArrayView3<'_, f64>,
) -> impl Iterator<Item = (f64, f64)> + 'a {
    reference.iter().copied().zip(candidate.iter().copied())
}

/// Joint entropy H(X, Y) of position-paired elements
pub fn joint_entropy(reference: ArrayView3<'_, f64>, candidate: ArrayView3<'_, f64>) -> f64 {
    round_information(pair_entropy(paired(&reference, &candidate)))
}

/// Mutual information I(X; Y) = H(X) + H(Y) - H(X, Y)
pub fn mutual_information(reference: ArrayView3<'_, f64>, candidate: ArrayView3<'_, f64>) -> f64 {
    let h_x = entropy(reference.iter().copied());
    let h_y = entropy(candidate.iter().copied());
    let h_xy = pair_entropy(paired(&reference, &candidate));
    round_information(h_x + h_y - h_xy)
}

/// Conditional entropy H(X | Y) = H(X, Y) - H(Y) of the reference given the candidate
pub fn conditional_entropy(
    reference: ArrayView3<'_, f64>,
    candidate: ArrayView3<'_, f64>,
) -> f64 {
    let h_xy = pair_entropy(paired(&reference, &candidate));
    let h_y = entropy(candidate.iter().copied());
    round_information(h_xy - h_y)
}

/// Sum of absolute element differences
pub fn l1(reference: ArrayView3<'_, f64>, candidate: ArrayView3<'_, f64>) -> f64 {
    if reference.dim() != candidate.dim() {
        return f64::NAN;
    }
    Zip::from(&reference)
        .and(&candidate)
        .fold(0.0, |acc, &x, &y| acc + (x - y).abs())
}

/// Euclidean norm of the element difference
pub fn l2(reference: ArrayView3<'_, f64>, candidate: ArrayView3<'_, f64>) -> f64 {
    squared_error(&reference, &candidate).sqrt()
}

/// Largest absolute element difference
pub fn max_norm(reference: ArrayView3<'_, f64>, candidate: ArrayView3<'_, f64>) -> f64 {
    if reference.dim() != candidate.dim() {
        return f64::NAN;
    }
    Zip::from(&reference)
        .and(&candidate)
        .fold(0.0, |acc: f64, &x, &y| acc.max((x - y).abs()))
}

/// Peak signal-to-noise ratio in decibels for data normalised to [0, 1]
///
/// Returns infinity when the mean squared error is zero.
pub fn psnr(reference: ArrayView3<'_, f64>, candidate: ArrayView3<'_, f64>) -> f64 {
    let count = reference.len();
    if count == 0 {
        return f64::INFINITY;
    }
    let mse = squared_error(&reference, &candidate) / count as f64;
    if mse <= 0.0 {
        return f64::INFINITY;
    }
    10.0 * (PSNR_PEAK * PSNR_PEAK / mse).log10()
}

fn squared_error(reference: &ArrayView3<'_, f64>, candidate: &ArrayView3<'_, f64>) -> f64 {
    if reference.dim() != candidate.dim() {
        return f64::NAN;
    }
    Zip::from(reference)
        .and(candidate)
        .fold(0.0, |acc, &x, &y| (x - y).mul_add(x - y, acc))
}

/// Register every built-in distance measure
pub fn register_builtins(registry: &mut MeasureRegistry) {
    registry.register_distance(JOINT_ENTROPY, joint_entropy);
    registry.register_distance(MUTUAL_INFORMATION, mutual_information);
    registry.register_distance(CONDITIONAL_ENTROPY, conditional_entropy);
    registry.register_distance(L1, l1);
    registry.register_distance(L2, l2);
    registry.register_distance(MAX_NORM, max_norm);
    registry.register_distance(PSNR, psnr);
}
