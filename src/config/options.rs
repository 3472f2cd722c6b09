// src/config/options.rs
use std::time::Duration;

use super::consts::{DEFAULT_IDEAS, DEFAULT_RESPONSE_DELAY_MS};

/// How a simulated ranking run ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The backend answers with the success markup after the delay.
    Success,
    /// The backend never answers; only the deadline fallback frees the page.
    Silent,
}

#[derive(Clone, Debug)]
pub struct RunOptions {
    pub outcome: Outcome,
    pub response_delay: Duration,
    pub ideas: usize,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            outcome: Outcome::Success,
            response_delay: Duration::from_millis(DEFAULT_RESPONSE_DELAY_MS),
            ideas: DEFAULT_IDEAS,
        }
    }
}
