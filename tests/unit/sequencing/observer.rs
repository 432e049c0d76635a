//! Tests for sequencing progress notifications

#[cfg(test)]
mod tests {
    use ndarray::Array3;
    use patch_curriculum::sequencing::SequenceObserver;
    use patch_curriculum::spatial::Patch;
    use patch_curriculum::{Ordering, Sequencer, default_registry};

    #[derive(Default)]
    struct Recorder {
        events: Vec<(&'static str, usize, usize)>,
    }

    impl SequenceObserver for Recorder {
        fn on_start(&mut self, total_steps: usize) {
            self.events.push(("start", 0, total_steps));
        }

        fn on_step(&mut self, completed: usize, total_steps: usize) {
            self.events.push(("step", completed, total_steps));
        }

        fn on_finish(&mut self) {
            self.events.push(("finish", 0, 0));
        }
    }

    fn scalars(values: &[f64]) -> Vec<Patch> {
        values.iter().map(|&v| Array3::from_elem((1, 1, 1), v)).collect()
    }

    // Tests distance chaining reports one step per reference position
    // Verified by reporting only swaps
    #[test]
    fn test_distance_run_events() {
        let measure = default_registry().resolve("L1").unwrap();
        let mut recorder = Recorder::default();

        Sequencer::default()
            .run_observed(
                scalars(&[0.0, 3.0, 1.0]),
                None::<Vec<u8>>,
                &measure,
                Ordering::Ascending,
                &mut recorder,
            )
            .unwrap();

        assert_eq!(
            recorder.events,
            vec![
                ("start", 0, 3),
                ("step", 1, 3),
                ("step", 2, 3),
                ("step", 3, 3),
                ("finish", 0, 0),
            ]
        );
    }

    // Tests standalone sorting reports a single step
    // Verified by reporting one step per patch
    #[test]
    fn test_standalone_run_events() {
        let measure = default_registry().resolve("sum").unwrap();
        let mut recorder = Recorder::default();

        Sequencer::default()
            .run_observed(
                scalars(&[2.0, 1.0]),
                None::<Vec<u8>>,
                &measure,
                Ordering::Descending,
                &mut recorder,
            )
            .unwrap();

        assert_eq!(
            recorder.events,
            vec![("start", 0, 1), ("step", 1, 1), ("finish", 0, 0)]
        );
    }

    // Tests runs too small to chain still pair their start with a finish
    // Verified by returning before the start notification
    #[test]
    fn test_small_distance_run_events() {
        let measure = default_registry().resolve("L1").unwrap();

        for values in [&[][..], &[4.0][..]] {
            let mut recorder = Recorder::default();

            Sequencer::default()
                .run_observed(
                    scalars(values),
                    None::<Vec<u8>>,
                    &measure,
                    Ordering::Ascending,
                    &mut recorder,
                )
                .unwrap();

            assert_eq!(recorder.events, vec![("start", 0, 0), ("finish", 0, 0)]);
        }
    }

    // Tests failed runs never report completion
    // Verified by finishing before propagating errors
    #[test]
    fn test_failed_run_does_not_finish() {
        let measure = default_registry().resolve("L2").unwrap();
        let mut recorder = Recorder::default();

        let result = Sequencer::default().run_observed(
            scalars(&[1.0, 1.0]),
            None::<Vec<u8>>,
            &measure,
            Ordering::Ascending,
            &mut recorder,
        );

        assert!(result.is_err());
        assert!(!recorder.events.iter().any(|(name, _, _)| *name == "finish"));
    }

    // Tests the unit observer ignores every notification
    // Verified by requiring every method to be implemented
    #[test]
    fn test_unit_observer() {
        let observer: &mut dyn SequenceObserver = &mut ();
        observer.on_start(4);
        observer.on_step(1, 4);
        observer.on_finish();
    }
}
