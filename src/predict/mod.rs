use crate::data::{encoding, NUM_CHANNELS};
use crate::model::SequenceScorer;
use anyhow::{bail, Result};
use burn::prelude::*;
use burn::tensor::ElementConversion;
use serde::{Deserialize, Serialize};

/// Prediction result for a single sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    /// The scored sequence
    pub sequence: String,
    /// Probability of being an active promoter
    pub probability: f64,
    /// Binary prediction (0 or 1, threshold 0.5)
    pub prediction: u8,
    /// Confidence score (distance from decision boundary, scaled to [0, 1])
    pub confidence: f64,
}

impl Prediction {
    /// Create a prediction from a probability
    pub fn new(sequence: String, probability: f64) -> Self {
        let prediction = u8::from(probability >= 0.5);
        let confidence = (probability - 0.5).abs() * 2.0;

        Self {
            sequence,
            probability,
            prediction,
            confidence,
        }
    }

    /// Check if prediction is positive
    pub fn is_positive(&self) -> bool {
        self.prediction == 1
    }

    /// Get prediction as string
    pub fn label(&self) -> &'static str {
        if self.is_positive() {
            "promoter"
        } else {
            "non_promoter"
        }
    }
}

/// Inference-only wrapper around a trained scorer.
///
/// The scorer lives on a plain (non-autodiff) backend, so no gradient
/// machinery runs at prediction time, and repeated calls with the same
/// parameters and sequence return identical probabilities. The model is
/// owned by the caller and passed in explicitly; there is no shared
/// global instance.
pub struct Predictor<B: Backend, M: SequenceScorer<B>> {
    model: M,
    seq_len: usize,
    device: B::Device,
}

impl<B: Backend, M: SequenceScorer<B>> Predictor<B, M> {
    /// Create a predictor for sequences of exactly `seq_len` bases
    pub fn new(model: M, seq_len: usize, device: B::Device) -> Self {
        Self {
            model,
            seq_len,
            device,
        }
    }

    /// Configured sequence length
    pub fn seq_len(&self) -> usize {
        self.seq_len
    }

    /// Predict the activity probability of one sequence.
    ///
    /// Errors when the sequence length differs from the configured
    /// length or when it contains a base outside {A, T, C, G}; the
    /// input is never truncated or padded.
    pub fn predict(&self, sequence: &str) -> Result<Prediction> {
        let len = sequence.chars().count();
        if len != self.seq_len {
            bail!(
                "sequence must be exactly {} bases, got {} (\"{}\")",
                self.seq_len,
                len,
                sequence
            );
        }

        let encoded = encoding::encode_channel_first(sequence)?;
        let input = Tensor::<B, 3>::from_data(
            TensorData::new(encoded, [1, NUM_CHANNELS, self.seq_len]),
            &self.device,
        );

        let probability = self.model.score(input).into_scalar().elem::<f64>();
        Ok(Prediction::new(sequence.to_uppercase(), probability))
    }

    /// Predict activity probabilities for several sequences
    pub fn predict_all<S: AsRef<str>>(&self, sequences: &[S]) -> Result<Vec<Prediction>> {
        sequences
            .iter()
            .map(|sequence| self.predict(sequence.as_ref()))
            .collect()
    }
}

/// Export predictions to CSV format
pub fn predictions_to_csv(predictions: &[Prediction]) -> String {
    let mut csv = String::from("sequence,probability,prediction,confidence\n");
    for pred in predictions {
        csv.push_str(&format!(
            "{},{:.6},{},{:.6}\n",
            pred.sequence, pred.probability, pred.prediction, pred.confidence
        ));
    }
    csv
}
