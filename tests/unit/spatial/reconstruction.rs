//! Tests for rebuilding images from ordered patches

#[cfg(test)]
mod tests {
    use ndarray::{Array3, Array4, Axis, array};
    use patch_curriculum::CurriculumError;
    use patch_curriculum::spatial::tiles::extract_patches;
    use patch_curriculum::spatial::{Patch, block_to_space, rebuild};

    fn scalar(value: f64) -> Patch {
        Array3::from_elem((1, 1, 1), value)
    }

    // Tests single-pixel patches fill the image row-major
    // Verified by filling column-major
    #[test]
    fn test_rebuild_single_pixel_patches() {
        let patches: Vec<Patch> = [1.0, 2.0, 3.0, 4.0].into_iter().map(scalar).collect();

        let image = rebuild(&patches, 2, 2).unwrap();

        assert_eq!(image.index_axis(Axis(2), 0), array![[1.0, 2.0], [3.0, 4.0]]);
    }

    // Tests multi-pixel patches keep their internal layout
    // Verified by transposing each patch
    #[test]
    fn test_rebuild_multi_pixel_patches() {
        let first = array![[1.0, 2.0], [3.0, 4.0]].insert_axis(Axis(2));
        let second = array![[5.0, 6.0], [7.0, 8.0]].insert_axis(Axis(2));

        let image = rebuild(&[first, second], 2, 4).unwrap();

        assert_eq!(
            image.index_axis(Axis(2), 0),
            array![[1.0, 2.0, 5.0, 6.0], [3.0, 4.0, 7.0, 8.0]]
        );
    }

    // Tests rebuilding undoes extraction on a multi-channel image
    // Verified by permuting patch and pixel axes
    #[test]
    fn test_rebuild_inverts_extraction() {
        let image = Array3::from_shape_fn((4, 6, 3), |(y, x, c)| (100 * y + 10 * x + c) as f64);

        let patches = extract_patches(image.view(), 2, 3).unwrap();
        let rebuilt = rebuild(&patches, 4, 6).unwrap();

        assert_eq!(rebuilt, image);
    }

    // Tests patch order decides placement
    // Verified by sorting patches before rebuilding
    #[test]
    fn test_rebuild_follows_order() {
        let patches: Vec<Patch> = [4.0, 3.0, 2.0, 1.0].into_iter().map(scalar).collect();

        let image = rebuild(&patches, 1, 4).unwrap();

        assert_eq!(image.index_axis(Axis(2), 0), array![[4.0, 3.0, 2.0, 1.0]]);
    }

    // Tests invalid tilings are reported as dimension errors
    // Verified by padding the missing cells
    #[test]
    fn test_rebuild_dimension_errors() {
        let three: Vec<Patch> = [1.0, 2.0, 3.0].into_iter().map(scalar).collect();
        let square = vec![Array3::zeros((2, 2, 1)); 4];

        assert!(matches!(
            rebuild(&three, 2, 2),
            Err(CurriculumError::Dimension { .. })
        ));
        assert!(matches!(
            rebuild(&square, 3, 4),
            Err(CurriculumError::Dimension { .. })
        ));
        assert!(matches!(
            rebuild(&[], 1, 1),
            Err(CurriculumError::Dimension { .. })
        ));
    }

    // Tests mixed patch shapes are rejected with the offending index
    // Verified by only comparing patch counts
    #[test]
    fn test_rebuild_shape_mismatch() {
        let patches = vec![
            Array3::zeros((1, 1, 1)),
            Array3::zeros((1, 1, 1)),
            Array3::zeros((1, 1, 3)),
            Array3::zeros((1, 1, 1)),
        ];

        match rebuild(&patches, 2, 2) {
            Err(CurriculumError::ShapeMismatch { second, found, .. }) => {
                assert_eq!(second, 2);
                assert_eq!(found, (1, 1, 3));
            }
            other => panic!("Expected ShapeMismatch, got {other:?}"),
        }
    }

    // Tests block interleaving
    // Verified by stacking blocks instead of interleaving
    #[test]
    fn test_block_to_space() {
        // Four 1x2 blocks, each holding one pixel offset of a 2x2 block grid
        let blocks = Array4::from_shape_fn((4, 1, 2, 1), |(k, _, c, _)| (10 * k + c) as f64);

        let image = block_to_space(blocks.view(), 2, 2).unwrap();

        assert_eq!(
            image.index_axis(Axis(2), 0),
            array![[0.0, 10.0, 1.0, 11.0], [20.0, 30.0, 21.0, 31.0]]
        );
    }

    // Tests block counts must match the block size
    // Verified by truncating extra blocks
    #[test]
    fn test_block_to_space_errors() {
        let blocks = Array4::<f64>::zeros((3, 1, 1, 1));

        assert!(block_to_space(blocks.view(), 2, 2).is_err());
        assert!(block_to_space(blocks.view(), 0, 3).is_err());
    }
}
