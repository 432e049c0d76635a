//! Single-patch measures
//!
//! Both measures read every element of the patch regardless of layout.

use crate::math::information;
use crate::measures::MeasureRegistry;
use ndarray::ArrayView3;

/// Identifier of [`entropy`]
pub const ENTROPY: &str = "entropy";
/// Identifier of [`sum`]
pub const SUM: &str = "sum";

/// Shannon entropy in bits of the patch's value histogram
pub fn entropy(patch: ArrayView3<'_, f64>) -> f64 {
    information::round_information(information::entropy(patch.iter().copied()))
}

/// Sum of all patch elements
pub fn sum(patch: ArrayView3<'_, f64>) -> f64 {
    patch.sum()
}

/// Register every built-in standalone measure
pub fn register_builtins(registry: &mut MeasureRegistry) {
    registry.register_standalone(ENTROPY, entropy);
    registry.register_standalone(SUM, sum);
}
