//! Tests for ordering direction and sequencer settings

#[cfg(test)]
mod tests {
    use patch_curriculum::sequencing::{
        ChainStrategy, DistanceEvaluation, Ordering, SequencerConfig,
    };
    use std::cmp;

    // Tests score comparison in both directions
    // Verified by ignoring the direction
    #[test]
    fn test_compare_scores() {
        assert_eq!(Ordering::Ascending.compare_scores(1.0, 2.0), cmp::Ordering::Less);
        assert_eq!(Ordering::Descending.compare_scores(1.0, 2.0), cmp::Ordering::Greater);
        assert_eq!(Ordering::Ascending.compare_scores(3.0, 3.0), cmp::Ordering::Equal);
    }

    // Tests NaN sorts last ascending and first descending
    // Verified by using partial_cmp with an Equal fallback
    #[test]
    fn test_compare_scores_nan() {
        assert_eq!(
            Ordering::Ascending.compare_scores(f64::NAN, f64::INFINITY),
            cmp::Ordering::Greater
        );
        assert_eq!(
            Ordering::Descending.compare_scores(f64::NAN, f64::INFINITY),
            cmp::Ordering::Less
        );
    }

    // Tests strict preference
    // Verified by accepting equal values
    #[test]
    fn test_prefers_is_strict() {
        assert!(Ordering::Ascending.prefers(1.0, 2.0));
        assert!(!Ordering::Ascending.prefers(2.0, 2.0));
        assert!(Ordering::Descending.prefers(3.0, 2.0));
        assert!(!Ordering::Descending.prefers(2.0, 2.0));
        assert!(!Ordering::Ascending.prefers(f64::NAN, 2.0));
        assert!(!Ordering::Descending.prefers(2.0, f64::NAN));
    }

    // Tests defaults
    // Verified by defaulting to the precomputed matrix
    #[test]
    fn test_defaults() {
        let config = SequencerConfig::default();

        assert_eq!(Ordering::default(), Ordering::Ascending);
        assert_eq!(config.chain, ChainStrategy::LiveSwap);
        assert_eq!(config.evaluation, DistanceEvaluation::Streaming);
    }
}
