use crate::loss::cost::CostFunction;
use serde::{Deserialize, Serialize};

/// Configuration for a `train_network` run.
///
/// # Fields
/// - `learning_rate`  — SGD step size
/// - `max_iterations` — upper bound on full passes over the examples
/// - `target_error`   — training stops early once the mean per-example cost
///                      drops to this value or below
/// - `shuffle`        — reshuffle the example order before each pass
/// - `cost`           — which cost function drives the gradients
/// - `log_every`      — print a progress line every N passes; `0` disables
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainConfig {
    pub learning_rate: f64,
    pub max_iterations: usize,
    pub target_error: f64,
    pub shuffle: bool,
    pub cost: CostFunction,
    pub log_every: usize,
}

impl Default for TrainConfig {
    /// Defaults tuned for the letter demo: rate 0.3, up to 5000 passes,
    /// stop at error 0.005, shuffled order, cross-entropy cost, a progress
    /// line every 1000 passes.
    fn default() -> Self {
        TrainConfig {
            learning_rate: 0.3,
            max_iterations: 5000,
            target_error: 0.005,
            shuffle: true,
            cost: CostFunction::CrossEntropy,
            log_every: 1000,
        }
    }
}
