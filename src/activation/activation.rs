use std::f64::consts::E;

/// Element-wise activation applied after a layer's linear transform.
///
/// The letter demo uses `Sigmoid` everywhere (outputs are per-class
/// confidences in [0, 1], deliberately not normalized to sum to 1);
/// `Tanh` and `Identity` exist for alternative hidden layers and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActivationFunction {
    Sigmoid,
    Tanh,
    Identity,
}

impl ActivationFunction {
    pub fn function(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => 1.0 / (1.0 + E.powf(-x)),
            ActivationFunction::Tanh => x.tanh(),
            ActivationFunction::Identity => x,
        }
    }

    pub fn derivative(&self, x: f64) -> f64 {
        match self {
            ActivationFunction::Sigmoid => {
                let fx = self.function(x);
                fx * (1.0 - fx)
            }
            ActivationFunction::Tanh => {
                let t = x.tanh();
                1.0 - t * t
            }
            ActivationFunction::Identity => 1.0,
        }
    }
}
