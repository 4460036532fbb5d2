//! Training objectives and evaluation metrics.

use burn::nn::loss::{MseLoss, Reduction};
use burn::prelude::*;
use serde::{Deserialize, Serialize};

/// Clamp bound keeping log() finite in the cross-entropy
const EPSILON: f32 = 1e-7;

/// Training objective variant.
///
/// The synthetic configuration regresses continuous activity labels with
/// mean squared error; the real configuration classifies 0/1 promoter
/// labels with binary cross-entropy. Both operate on the probabilities
/// the model already produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Objective {
    /// Mean squared error against continuous labels
    Regression,
    /// Binary cross-entropy against 0/1 labels
    Classification,
}

impl Objective {
    /// Compute the batch loss as a single-element tensor
    pub fn loss<B: Backend>(&self, predictions: Tensor<B, 1>, targets: Tensor<B, 1>) -> Tensor<B, 1> {
        match self {
            Objective::Regression => MseLoss::new().forward(predictions, targets, Reduction::Mean),
            Objective::Classification => binary_cross_entropy(predictions, targets),
        }
    }
}

/// Binary cross-entropy over probabilities:
/// `-mean(y * ln(p) + (1 - y) * ln(1 - p))`
fn binary_cross_entropy<B: Backend>(
    probabilities: Tensor<B, 1>,
    targets: Tensor<B, 1>,
) -> Tensor<B, 1> {
    let probabilities = probabilities.clamp(EPSILON, 1.0 - EPSILON);
    let positive = targets.clone().mul(probabilities.clone().log());
    let negative = targets
        .neg()
        .add_scalar(1.0)
        .mul(probabilities.neg().add_scalar(1.0).log());
    positive.add(negative).mean().neg()
}

/// Metrics for evaluation
pub mod metrics {
    use burn::prelude::*;
    use burn::tensor::ElementConversion;

    /// Fraction of probabilities on the correct side of 0.5
    pub fn accuracy<B: Backend>(probabilities: Tensor<B, 1>, targets: Tensor<B, 1>) -> f32 {
        let total = probabilities.dims()[0] as f32;
        let predictions = probabilities.greater_elem(0.5).int();
        let targets = targets.greater_elem(0.5).int();
        let correct: f32 = predictions
            .equal(targets)
            .int()
            .sum()
            .into_scalar()
            .elem::<f32>();
        correct / total
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;
    use burn::tensor::ElementConversion;

    type TestBackend = NdArray<f32>;

    fn scalar(t: Tensor<TestBackend, 1>) -> f32 {
        t.into_scalar().elem::<f32>()
    }

    #[test]
    fn test_mse_of_perfect_prediction_is_zero() {
        let device = Default::default();
        let preds = Tensor::<TestBackend, 1>::from_floats([0.2, 0.8, 0.5], &device);
        let loss = Objective::Regression.loss(preds.clone(), preds);
        assert!(scalar(loss).abs() < 1e-6);
    }

    #[test]
    fn test_mse_penalizes_distance() {
        let device = Default::default();
        let targets = Tensor::<TestBackend, 1>::from_floats([0.0, 1.0], &device);
        let near = Tensor::<TestBackend, 1>::from_floats([0.1, 0.9], &device);
        let far = Tensor::<TestBackend, 1>::from_floats([0.9, 0.1], &device);

        let near_loss = scalar(Objective::Regression.loss(near, targets.clone()));
        let far_loss = scalar(Objective::Regression.loss(far, targets));
        assert!(near_loss < far_loss);
    }

    #[test]
    fn test_bce_prefers_confident_correct_predictions() {
        let device = Default::default();
        let targets = Tensor::<TestBackend, 1>::from_floats([1.0, 0.0], &device);
        let good = Tensor::<TestBackend, 1>::from_floats([0.95, 0.05], &device);
        let bad = Tensor::<TestBackend, 1>::from_floats([0.05, 0.95], &device);

        let good_loss = scalar(Objective::Classification.loss(good, targets.clone()));
        let bad_loss = scalar(Objective::Classification.loss(bad, targets));

        assert!(good_loss < bad_loss);
        assert!(good_loss > 0.0);
    }

    #[test]
    fn test_bce_is_finite_at_the_extremes() {
        let device = Default::default();
        let targets = Tensor::<TestBackend, 1>::from_floats([1.0, 0.0], &device);
        let preds = Tensor::<TestBackend, 1>::from_floats([0.0, 1.0], &device);

        let loss = scalar(Objective::Classification.loss(preds, targets));
        assert!(loss.is_finite());
    }

    #[test]
    fn test_accuracy() {
        let device = Default::default();
        let probs = Tensor::<TestBackend, 1>::from_floats([0.9, 0.2, 0.7, 0.4], &device);
        let targets = Tensor::<TestBackend, 1>::from_floats([1.0, 0.0, 0.0, 0.0], &device);

        let acc = metrics::accuracy(probs, targets);
        assert_eq!(acc, 0.75);
    }
}
