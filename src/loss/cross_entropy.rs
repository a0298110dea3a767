/// Per-output (Bernoulli) cross-entropy for sigmoid outputs.
///
/// Each output neuron is treated as an independent class confidence in
/// [0, 1]; the outputs are not normalized to sum to 1, so the categorical
/// (softmax) form does not apply here.
pub struct CrossEntropyLoss;

/// Small epsilon added inside log() to prevent log(0) = -inf.
const EPS: f64 = 1e-12;

impl CrossEntropyLoss {
    /// Scalar cross-entropy, summed over outputs:
    ///   L = -sum(y * ln(p + eps) + (1 - y) * ln(1 - p + eps))
    pub fn loss(predicted: &[f64], expected: &[f64]) -> f64 {
        predicted
            .iter()
            .zip(expected.iter())
            .map(|(p, y)| -(y * (p + EPS).ln() + (1.0 - y) * (1.0 - p + EPS).ln()))
            .sum()
    }

    /// Per-output gradient dL/dp: (p - y) / ((p + eps) * (1 - p + eps)).
    ///
    /// The denominator divides out the sigmoid slope, so once the backward
    /// pass multiplies by sigma'(z) = p * (1 - p) the effective delta at the
    /// output layer reduces to `predicted - expected`.
    pub fn derivative(predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        predicted
            .iter()
            .zip(expected.iter())
            .map(|(p, y)| (p - y) / ((p + EPS) * (1.0 - p + EPS)))
            .collect()
    }
}
