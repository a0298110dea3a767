use crate::{activation::activation::ActivationFunction, math::matrix::Matrix};
use rand::Rng;

/// A fully connected layer.
///
/// Weights have shape (input_size, size) so a 1xN input row vector multiplies
/// straight through. The layer caches its last pre-activation and activation
/// during `feed_from` for the backward pass; `infer` is the side-effect-free
/// path used at prediction time.
#[derive(Debug)]
pub struct Layer {
    pub size: usize,
    pub neurons: Matrix,
    pre_neurons: Matrix, // pre-activation values (z = Wx + b) needed for correct derivative
    pub weights: Matrix,
    pub biases: Matrix,
    pub activator: ActivationFunction,
}

impl Layer {
    pub fn new<R: Rng>(
        size: usize,
        input_size: usize,
        activation: ActivationFunction,
        rng: &mut R,
    ) -> Layer {
        Layer {
            size,
            neurons: Matrix::zeros(1, size),
            pre_neurons: Matrix::zeros(1, size),
            weights: Matrix::random(input_size, size, rng),
            biases: Matrix::random(1, size, rng),
            activator: activation,
        }
    }

    /// Number of inputs this layer expects.
    pub fn input_size(&self) -> usize {
        self.weights.rows
    }

    /// Forward pass for training; caches z and a for `compute_gradients`.
    pub fn feed_from(&mut self, input: Vec<f64>) -> Vec<f64> {
        let z = Matrix::from_data(vec![input]) * self.weights.clone() + self.biases.clone();
        let a = z.map(|x| self.activator.function(x));
        self.pre_neurons = z;
        self.neurons = a.clone();
        a.data[0].clone()
    }

    /// Forward pass without caching. Pure; used by `Classifier::activate`.
    pub fn infer(&self, input: &[f64]) -> Vec<f64> {
        let z = Matrix::from_data(vec![input.to_vec()]) * self.weights.clone()
            + self.biases.clone();
        z.map(|x| self.activator.function(x)).data[0].clone()
    }

    /// Computes gradient adjustments. Returns (weights_grad, biases_grad).
    /// `next_layer_delta` is dL/da for this layer (error in activation space).
    pub fn compute_gradients(
        &self,
        next_layer_delta: Matrix,
        inputs: &Matrix,
    ) -> (Matrix, Matrix) {
        // Use pre-activation z so that derivative(z) is computed correctly
        let act_derivative = self.pre_neurons.map(|x| self.activator.derivative(x));
        let layer_delta = hadamard(&next_layer_delta, &act_derivative);

        let weights_adjustment = inputs.transpose() * layer_delta.clone();
        let biases_adjustment = layer_delta;

        (weights_adjustment, biases_adjustment)
    }

    /// Applies pre-computed gradients scaled by lr.
    pub fn apply_gradients(&mut self, weights_grad: Matrix, biases_grad: Matrix, lr: f64) {
        self.weights = self.weights.clone() - weights_grad.map(|x| x * lr);
        self.biases = self.biases.clone() - biases_grad.map(|x| x * lr);
    }
}

/// Element-wise (Hadamard) product of two same-shape matrices.
fn hadamard(a: &Matrix, b: &Matrix) -> Matrix {
    assert_eq!(a.rows, b.rows);
    assert_eq!(a.cols, b.cols);
    let data = a
        .data
        .iter()
        .zip(b.data.iter())
        .map(|(row_a, row_b)| row_a.iter().zip(row_b.iter()).map(|(x, y)| x * y).collect())
        .collect();
    Matrix::from_data(data)
}
