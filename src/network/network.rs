use crate::{activation::activation::ActivationFunction, layers::dense::Layer};
use rand::Rng;

/// A feed-forward network: dense layers applied in order.
///
/// Weights live here for the whole run; nothing is persisted. The demo
/// talks to this type through the [`Classifier`](crate::network::Classifier)
/// trait so another implementation could be swapped in without touching the
/// encoding or reporting code.
#[derive(Debug)]
pub struct Network {
    pub layers: Vec<Layer>,
}

impl Network {
    /// Builds a network from (size, input_size, activation) tuples.
    ///
    /// # Panics
    ///
    /// Panics if `layer_specs` is empty.
    pub fn new<R: Rng>(
        layer_specs: Vec<(usize, usize, ActivationFunction)>,
        rng: &mut R,
    ) -> Network {
        assert!(!layer_specs.is_empty(), "network needs at least one layer");
        let layers = layer_specs
            .into_iter()
            .map(|(size, input_size, activation)| Layer::new(size, input_size, activation, rng))
            .collect();
        Network { layers }
    }

    /// All-sigmoid multi-layer perceptron: `sizes` lists the input width
    /// followed by each layer's neuron count, e.g. `[49, 20, 3]` for the
    /// letter demo.
    ///
    /// # Panics
    ///
    /// Panics if `sizes` has fewer than two entries.
    pub fn perceptron<R: Rng>(sizes: &[usize], rng: &mut R) -> Network {
        assert!(
            sizes.len() >= 2,
            "perceptron needs an input size and at least one layer size"
        );
        let specs = sizes
            .windows(2)
            .map(|pair| (pair[1], pair[0], ActivationFunction::Sigmoid))
            .collect();
        Network::new(specs, rng)
    }

    /// Width of the input vector the first layer expects.
    pub fn input_size(&self) -> usize {
        self.layers[0].input_size()
    }

    /// Number of values the final layer produces (one confidence per class).
    pub fn output_size(&self) -> usize {
        self.layers[self.layers.len() - 1].size
    }

    /// Forward pass for training; each layer caches its activations for backprop.
    pub fn forward(&mut self, input: Vec<f64>) -> Vec<f64> {
        let mut current = input;
        for layer in &mut self.layers {
            current = layer.feed_from(current);
        }
        current
    }

    /// Forward pass without caching; pure in the trained weights.
    pub(crate) fn infer(&self, input: &[f64]) -> Vec<f64> {
        let mut current = input.to_vec();
        for layer in &self.layers {
            current = layer.infer(&current);
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_perceptron_shapes() {
        let mut rng = StdRng::seed_from_u64(42);
        let net = Network::perceptron(&[49, 20, 3], &mut rng);

        assert_eq!(net.layers.len(), 2);
        assert_eq!(net.input_size(), 49);
        assert_eq!(net.output_size(), 3);
        assert_eq!(net.layers[0].size, 20);
        assert_eq!(net.layers[0].activator, ActivationFunction::Sigmoid);
        assert_eq!(net.layers[1].activator, ActivationFunction::Sigmoid);
    }

    #[test]
    fn test_forward_output_length() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut net = Network::perceptron(&[4, 6, 2], &mut rng);
        let out = net.forward(vec![1.0, 0.0, 1.0, 0.0]);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_infer_matches_forward() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut net = Network::perceptron(&[3, 5, 2], &mut rng);
        let input = vec![0.0, 1.0, 1.0];
        let pure = net.infer(&input);
        let cached = net.forward(input);
        assert_eq!(pure, cached);
    }

    #[test]
    fn test_mixed_activations() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut net = Network::new(
            vec![
                (4, 2, ActivationFunction::Tanh),
                (1, 4, ActivationFunction::Sigmoid),
            ],
            &mut rng,
        );
        let out = net.forward(vec![0.5, -0.5]);
        assert_eq!(out.len(), 1);
        assert!((0.0..=1.0).contains(&out[0]));
    }

    #[test]
    #[should_panic(expected = "at least one layer size")]
    fn test_perceptron_rejects_single_size() {
        let mut rng = StdRng::seed_from_u64(0);
        let _ = Network::perceptron(&[49], &mut rng);
    }
}
