// src/progress.rs
/// Lightweight progress reporting for the simulated ranking run.
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called once at the start with the number of ideas in the batch.
    fn begin(&mut self, _ideas: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when the run has been handed off to the worker.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
