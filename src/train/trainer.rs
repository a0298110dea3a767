use rand::seq::SliceRandom;
use rand::thread_rng;
use std::time::Instant;

use crate::{
    dataset::example_set::TrainingExample,
    error::{Error, Result},
    math::matrix::Matrix,
    network::network::Network,
    optim::sgd::Sgd,
    train::summary::TrainingSummary,
    train::train_config::TrainConfig,
};

/// Trains `network` on `examples` with online SGD until the mean
/// per-example cost reaches `config.target_error` or `config.max_iterations`
/// passes have run.
///
/// Examples are visited one at a time; the weights move after every
/// example, not once per pass. With `config.shuffle` set the visiting
/// order is reshuffled before each pass.
pub fn train_network(
    network: &mut Network,
    examples: &[TrainingExample],
    config: &TrainConfig,
) -> Result<TrainingSummary> {
    if examples.is_empty() {
        return Err(Error::EmptyTrainingSet);
    }
    validate_config(config)?;
    for example in examples {
        if example.input.len() != network.input_size() {
            return Err(Error::DimensionMismatch {
                expected: network.input_size(),
                actual: example.input.len(),
            });
        }
        if example.target.len() != network.output_size() {
            return Err(Error::DimensionMismatch {
                expected: network.output_size(),
                actual: example.target.len(),
            });
        }
    }

    let optimizer = Sgd::new(config.learning_rate);
    let mut order: Vec<usize> = (0..examples.len()).collect();
    let mut rng = thread_rng();
    let started = Instant::now();

    let mut error = f64::INFINITY;
    let mut iterations_run = 0;

    for iteration in 1..=config.max_iterations {
        if config.shuffle {
            order.shuffle(&mut rng);
        }

        let mut total_cost = 0.0;
        for &index in &order {
            total_cost += train_on_example(network, &examples[index], config, &optimizer);
        }

        error = total_cost / examples.len() as f64;
        iterations_run = iteration;

        if !error.is_finite() {
            return Err(Error::TrainingFailure(format!(
                "cost diverged at iteration {iteration}"
            )));
        }
        if config.log_every != 0 && iteration % config.log_every == 0 {
            println!("Iteration {iteration}: error = {error:.6}");
        }
        if error <= config.target_error {
            break;
        }
    }

    Ok(TrainingSummary {
        final_error: error,
        iterations_run,
        elapsed_ms: started.elapsed().as_millis() as u64,
    })
}

/// One forward/backward pass over a single example. Returns the cost
/// before the weight update.
fn train_on_example(
    network: &mut Network,
    example: &TrainingExample,
    config: &TrainConfig,
    optimizer: &Sgd,
) -> f64 {
    let output = network.forward(example.input.clone());
    let sample_cost = config.cost.loss(&output, &example.target);

    // Initial delta: ∂L/∂a_output (error in output activation space)
    let error = config.cost.derivative(&output, &example.target);
    let mut delta = Matrix::from_data(vec![error]);

    for i in (0..network.layers.len()).rev() {
        let input_for_layer = if i == 0 {
            Matrix::from_data(vec![example.input.clone()])
        } else {
            network.layers[i - 1].neurons.clone()
        };

        // Borrow-checker ordering: compute gradients → compute next delta → apply step
        let (w_grad, b_grad) = network.layers[i].compute_gradients(delta.clone(), &input_for_layer);

        if i > 0 {
            // Propagate δ_i through weights to get ∂L/∂a_{i-1}
            delta = b_grad.clone() * network.layers[i].weights.transpose();
        }

        optimizer.step(&mut network.layers[i], w_grad, b_grad);
    }

    sample_cost
}

fn validate_config(config: &TrainConfig) -> Result<()> {
    if !config.learning_rate.is_finite() || config.learning_rate <= 0.0 {
        return Err(Error::TrainingFailure(format!(
            "learning rate must be positive and finite, got {}",
            config.learning_rate
        )));
    }
    if config.max_iterations == 0 {
        return Err(Error::TrainingFailure(
            "max_iterations must be at least 1".to_string(),
        ));
    }
    if !config.target_error.is_finite() || config.target_error < 0.0 {
        return Err(Error::TrainingFailure(format!(
            "target error must be non-negative and finite, got {}",
            config.target_error
        )));
    }
    Ok(())
}
