//! Progress reporting hook for sequencing runs

/// Receives progress notifications while a patch set is sequenced
///
/// Distance chaining reports one step per reference position; standalone
/// sorting reports a single step once all scores are computed.
pub trait SequenceObserver {
    /// Sequencing is about to perform `total_steps` steps
    fn on_start(&mut self, _total_steps: usize) {}

    /// `completed` of `total_steps` steps are done
    fn on_step(&mut self, _completed: usize, _total_steps: usize) {}

    /// Sequencing finished successfully
    fn on_finish(&mut self) {}
}

impl SequenceObserver for () {}
