use serde::{Deserialize, Serialize};

use crate::loss::cross_entropy::CrossEntropyLoss;
use crate::loss::mse::MseLoss;

/// Selects which cost function the training loop minimizes.
///
/// `MeanSquaredError` pairs with any output activation. `CrossEntropy` is
/// the per-output Bernoulli form for sigmoid outputs; its derivative divides
/// out the sigmoid slope, so the effective output delta reduces to
/// `predicted - expected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostFunction {
    MeanSquaredError,
    CrossEntropy,
}

impl CostFunction {
    /// Scalar cost for one example.
    pub fn loss(&self, predicted: &[f64], expected: &[f64]) -> f64 {
        match self {
            CostFunction::MeanSquaredError => MseLoss::loss(predicted, expected),
            CostFunction::CrossEntropy => CrossEntropyLoss::loss(predicted, expected),
        }
    }

    /// Per-output gradient dL/da for one example.
    pub fn derivative(&self, predicted: &[f64], expected: &[f64]) -> Vec<f64> {
        match self {
            CostFunction::MeanSquaredError => MseLoss::derivative(predicted, expected),
            CostFunction::CrossEntropy => CrossEntropyLoss::derivative(predicted, expected),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dispatch_matches_implementations() {
        let predicted = [0.8, 0.2, 0.1];
        let expected = [1.0, 0.0, 0.0];

        assert_relative_eq!(
            CostFunction::MeanSquaredError.loss(&predicted, &expected),
            MseLoss::loss(&predicted, &expected)
        );
        assert_relative_eq!(
            CostFunction::CrossEntropy.loss(&predicted, &expected),
            CrossEntropyLoss::loss(&predicted, &expected)
        );
        assert_eq!(
            CostFunction::CrossEntropy.derivative(&predicted, &expected),
            CrossEntropyLoss::derivative(&predicted, &expected)
        );
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&CostFunction::CrossEntropy).unwrap();
        assert_eq!(json, "\"cross_entropy\"");

        let parsed: CostFunction = serde_json::from_str("\"mean_squared_error\"").unwrap();
        assert_eq!(parsed, CostFunction::MeanSquaredError);
    }
}
