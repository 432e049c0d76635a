//! Shannon entropy over exact sample values
//!
//! Patch elements are treated as discrete symbols: two elements belong to
//! the same histogram bin only when their values are equal. This suits
//! quantised image data (e.g. 8-bit channels scaled to [0, 1]).

use crate::io::configuration::INFORMATION_DECIMALS;
use std::collections::BTreeMap;

/// Histogram key for a sample value, with `-0.0` folded onto `0.0`
pub const fn symbol(value: f64) -> u64 {
    if value == 0.0 { 0 } else { value.to_bits() }
}

/// Shannon entropy in bits of a frequency table with `total` observations
///
/// Terms are summed in key order, so the result does not depend on the
/// order the symbols were observed in.
pub fn entropy_from_counts<K>(counts: &BTreeMap<K, usize>, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;

    counts
        .values()
        .filter(|&&count| count > 0)
        .map(|&count| {
            let count = count as f64;
            (count / total) * (total / count).log2()
        })
        .sum()
}

/// Entropy in bits of a stream of values
pub fn entropy(values: impl IntoIterator<Item = f64>) -> f64 {
    let (counts, total) = histogram(values.into_iter().map(symbol));
    entropy_from_counts(&counts, total)
}

/// Joint entropy in bits of a stream of paired values
pub fn joint_entropy(pairs: impl IntoIterator<Item = (f64, f64)>) -> f64 {
    let (counts, total) = histogram(pairs.into_iter().map(|(x, y)| (symbol(x), symbol(y))));
    entropy_from_counts(&counts, total)
}

/// Frequency table and observation count of a symbol stream
pub fn histogram<K: Ord>(symbols: impl Iterator<Item = K>) -> (BTreeMap<K, usize>, usize) {
    let mut counts = BTreeMap::new();
    let mut total = 0;
    for key in symbols {
        *counts.entry(key).or_insert(0) += 1;
        total += 1;
    }
    (counts, total)
}

/// Round to a fixed number of decimal places
pub fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let scale = 10.0_f64.powi(decimals);
    (value * scale).round() / scale
}

/// Round an information quantity to the precision used for comparisons
pub fn round_information(value: f64) -> f64 {
    round_to_decimals(value, INFORMATION_DECIMALS)
}
