//! Tests for entropy over exact sample values

#[cfg(test)]
mod tests {
    use patch_curriculum::math::information::{
        entropy, entropy_from_counts, histogram, joint_entropy, round_information,
        round_to_decimals, symbol,
    };
    use std::collections::BTreeMap;

    // Tests entropy of uniform distributions
    // Verified by using natural logarithms
    #[test]
    fn test_entropy_uniform() {
        assert!((entropy([0.0, 0.0, 1.0, 1.0]) - 1.0).abs() < 1e-12);
        assert!((entropy([0.0, 0.25, 0.5, 0.75]) - 2.0).abs() < 1e-12);
    }

    // Tests degenerate inputs carry no information
    // Verified by returning NaN for empty input
    #[test]
    fn test_entropy_degenerate() {
        assert!(entropy([0.3; 9]).abs() < f64::EPSILON);
        assert!(entropy(std::iter::empty::<f64>()).abs() < f64::EPSILON);
        assert!(entropy_from_counts(&BTreeMap::<u64, usize>::new(), 0).abs() < f64::EPSILON);
    }

    // Tests a skewed distribution
    // Verified by swapping probability and surprisal
    #[test]
    fn test_entropy_skewed() {
        // p = (3/4, 1/4)
        let expected = 0.75 * (4.0_f64 / 3.0).log2() + 0.25 * 4.0_f64.log2();

        assert!((entropy([1.0, 1.0, 1.0, 0.0]) - expected).abs() < 1e-12);
    }

    // Tests joint entropy distinguishes aligned and independent pairs
    // Verified by keying on only the first element of each pair
    #[test]
    fn test_joint_entropy() {
        let aligned = [(0.0, 0.0), (1.0, 1.0), (0.0, 0.0), (1.0, 1.0)];
        let independent = [(0.0, 0.0), (0.0, 1.0), (1.0, 0.0), (1.0, 1.0)];

        assert!((joint_entropy(aligned) - 1.0).abs() < 1e-12);
        assert!((joint_entropy(independent) - 2.0).abs() < 1e-12);
    }

    // Tests both zero signs share one symbol
    // Verified by keying on raw bits for every value
    #[test]
    fn test_symbol_folds_signed_zero() {
        assert_eq!(symbol(-0.0), symbol(0.0));
        assert_ne!(symbol(0.5), symbol(-0.5));
        assert!((entropy([0.0, -0.0]) - 0.0).abs() < f64::EPSILON);
    }

    // Tests entropy is bit-for-bit independent of sample order
    // Verified by summing terms in observation order
    #[test]
    fn test_entropy_order_independent() {
        let values: Vec<f64> = (0..200_u32)
            .flat_map(|v| std::iter::repeat_n(f64::from(v) / 7.0, (v % 13 + 1) as usize))
            .collect();
        let reversed: Vec<f64> = values.iter().rev().copied().collect();
        let interleaved: Vec<f64> = values
            .iter()
            .step_by(2)
            .chain(values.iter().skip(1).step_by(2))
            .copied()
            .collect();

        let expected = entropy(values.iter().copied()).to_bits();

        assert_eq!(entropy(reversed).to_bits(), expected);
        assert_eq!(entropy(interleaved).to_bits(), expected);
        assert_eq!(
            joint_entropy(values.iter().map(|&v| (v, -v))).to_bits(),
            joint_entropy(values.iter().rev().map(|&v| (v, -v))).to_bits()
        );
    }

    // Tests histogram counts
    // Verified by counting distinct keys as total
    #[test]
    fn test_histogram() {
        let (counts, total) = histogram(["a", "b", "a", "c", "a"].into_iter());

        assert_eq!(total, 5);
        assert_eq!(counts.get("a"), Some(&3));
        assert_eq!(counts.get("c"), Some(&1));
        assert_eq!(counts.len(), 3);
    }

    // Tests decimal rounding
    // Verified by truncating instead of rounding
    #[test]
    fn test_rounding() {
        assert!((round_to_decimals(1.234_567, 4) - 1.2346).abs() < 1e-12);
        assert!((round_to_decimals(2.5, 0) - 3.0).abs() < f64::EPSILON);
        assert!((round_information(0.811_278_124_459) - 0.8113).abs() < 1e-12);
    }
}
