use crate::dataset::example_set::TrainingExample;
use crate::error::{Error, Result};
use crate::network::network::Network;
use crate::train::summary::TrainingSummary;
use crate::train::train_config::TrainConfig;
use crate::train::trainer::train_network;

/// Anything that can learn from labeled examples and score new inputs.
///
/// `activate` returns one confidence per class, in the same order the
/// classes were registered.
pub trait Classifier {
    fn train(
        &mut self,
        examples: &[TrainingExample],
        config: &TrainConfig,
    ) -> Result<TrainingSummary>;

    fn activate(&self, input: &[f64]) -> Result<Vec<f64>>;
}

impl Classifier for Network {
    fn train(
        &mut self,
        examples: &[TrainingExample],
        config: &TrainConfig,
    ) -> Result<TrainingSummary> {
        train_network(self, examples, config)
    }

    fn activate(&self, input: &[f64]) -> Result<Vec<f64>> {
        if input.len() != self.input_size() {
            return Err(Error::DimensionMismatch {
                expected: self.input_size(),
                actual: input.len(),
            });
        }
        Ok(self.infer(input))
    }
}
