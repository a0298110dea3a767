use serde::{Deserialize, Serialize};

/// What a completed training run reports back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingSummary {
    /// Mean per-example cost on the final pass.
    pub final_error: f64,
    /// Passes actually run; less than `max_iterations` when the target
    /// error was reached early.
    pub iterations_run: usize,
    /// Wall-clock duration of the run in milliseconds.
    pub elapsed_ms: u64,
}

impl TrainingSummary {
    /// True when the run stopped because it hit the configured target error.
    pub fn converged(&self, target_error: f64) -> bool {
        self.final_error <= target_error
    }
}
