//! Tests for image/patch tiling validation

#[cfg(test)]
mod tests {
    use patch_curriculum::CurriculumError;
    use patch_curriculum::spatial::PatchGrid;

    // Tests grid ratios and derived sizes
    // Verified by swapping height and width ratios
    #[test]
    fn test_grid_from_patch_count() {
        let grid = PatchGrid::new((2, 2, 3), 6, 4, 6).unwrap();

        assert_eq!(grid.h_ratio, 2);
        assert_eq!(grid.w_ratio, 3);
        assert_eq!(grid.channels, 3);
        assert_eq!(grid.patch_count(), 6);
        assert_eq!(grid.patch_area(), 4);
    }

    // Tests row-major patch origins
    // Verified by laying patches out column-major
    #[test]
    fn test_patch_origin() {
        let grid = PatchGrid::for_image(4, 6, 1, 2, 2).unwrap();

        assert_eq!(grid.patch_origin(0), Some((0, 0)));
        assert_eq!(grid.patch_origin(2), Some((0, 4)));
        assert_eq!(grid.patch_origin(4), Some((2, 2)));
        assert_eq!(grid.patch_origin(6), None);
    }

    // Tests non-divisible images are rejected
    // Verified by flooring the ratios
    #[test]
    fn test_non_divisible_image() {
        let height = PatchGrid::for_image(5, 4, 1, 2, 2);
        let width = PatchGrid::for_image(4, 5, 1, 2, 2);

        match height {
            Err(CurriculumError::Dimension { reason }) => assert!(reason.contains("height 5")),
            other => panic!("Expected Dimension error, got {other:?}"),
        }
        match width {
            Err(CurriculumError::Dimension { reason }) => assert!(reason.contains("width 5")),
            other => panic!("Expected Dimension error, got {other:?}"),
        }
    }

    // Tests zero patch dimensions are rejected
    // Verified by dividing by zero
    #[test]
    fn test_zero_patch_dimension() {
        assert!(PatchGrid::for_image(4, 4, 1, 0, 2).is_err());
        assert!(PatchGrid::for_image(4, 4, 1, 2, 0).is_err());
    }

    // Tests patch counts that do not fill the grid are rejected
    // Verified by accepting any divisible image size
    #[test]
    fn test_patch_count_mismatch() {
        let result = PatchGrid::new((1, 1, 1), 3, 2, 2);

        match result {
            Err(CurriculumError::Dimension { reason }) => assert!(reason.contains("got 3")),
            other => panic!("Expected Dimension error, got {other:?}"),
        }
    }
}
