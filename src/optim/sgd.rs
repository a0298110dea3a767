use crate::{layers::dense::Layer, math::matrix::Matrix};

/// Plain stochastic gradient descent. Carries the step size; the trainer
/// hands it one layer's gradients at a time.
#[derive(Debug, Clone)]
pub struct Sgd {
    pub learning_rate: f64,
}

impl Sgd {
    pub fn new(learning_rate: f64) -> Sgd {
        Sgd { learning_rate }
    }

    /// Applies one SGD weight update to a layer given its pre-computed gradients.
    pub fn step(&self, layer: &mut Layer, weights_grad: Matrix, biases_grad: Matrix) {
        layer.apply_gradients(weights_grad, biases_grad, self.learning_rate);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::activation::ActivationFunction;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_step_scales_by_learning_rate() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut layer = Layer::new(1, 1, ActivationFunction::Identity, &mut rng);
        layer.weights = Matrix::from_data(vec![vec![1.0]]);
        layer.biases = Matrix::from_data(vec![vec![0.0]]);

        let optimizer = Sgd::new(0.5);
        optimizer.step(
            &mut layer,
            Matrix::from_data(vec![vec![2.0]]),
            Matrix::from_data(vec![vec![-2.0]]),
        );

        assert_relative_eq!(layer.weights.data[0][0], 0.0);
        assert_relative_eq!(layer.biases.data[0][0], 1.0);
    }
}
