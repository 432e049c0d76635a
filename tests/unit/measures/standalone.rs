//! Tests for built-in single-patch measures

#[cfg(test)]
mod tests {
    use ndarray::Array3;
    use patch_curriculum::MeasureKind;
    use patch_curriculum::measures::MeasureRegistry;
    use patch_curriculum::measures::standalone::{ENTROPY, SUM, entropy, register_builtins, sum};

    // Tests patch entropy over all elements
    // Verified by computing entropy of the first channel only
    #[test]
    fn test_entropy() {
        let patch = Array3::from_shape_vec((2, 2, 1), vec![0.0, 0.0, 1.0, 1.0]).unwrap();
        let flat = Array3::from_elem((3, 3, 3), 0.5);

        assert!((entropy(patch.view()) - 1.0).abs() < f64::EPSILON);
        assert!(entropy(flat.view()).abs() < f64::EPSILON);
    }

    // Tests entropy results are rounded to four decimals
    // Verified by removing the rounding
    #[test]
    fn test_entropy_is_rounded() {
        let patch = Array3::from_shape_vec((1, 4, 1), vec![1.0, 1.0, 1.0, 0.0]).unwrap();

        assert!((entropy(patch.view()) - 0.8113).abs() < 1e-12);
    }

    // Tests element sum
    // Verified by averaging instead of summing
    #[test]
    fn test_sum() {
        let patch = Array3::from_shape_vec((1, 2, 2), vec![1.0, 2.5, -0.5, 4.0]).unwrap();

        assert!((sum(patch.view()) - 7.0).abs() < f64::EPSILON);
    }

    // Tests registration of the standalone built-ins
    // Verified by registering entropy as a distance measure
    #[test]
    fn test_register_builtins() {
        let mut registry = MeasureRegistry::new();
        register_builtins(&mut registry);

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.resolve(ENTROPY).unwrap().kind(), MeasureKind::Standalone);
        assert_eq!(registry.resolve(SUM).unwrap().kind(), MeasureKind::Standalone);
    }
}
