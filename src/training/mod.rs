pub mod callbacks;
pub mod trainer;

use crate::model::architecture::ActivityModel;
use crate::model::objective::Objective;
use anyhow::{Context, Result};
use burn::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Training configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of training epochs
    pub epochs: usize,
    /// Mini-batch size; `None` trains on the whole dataset as one batch
    pub batch_size: Option<usize>,
    /// Learning rate
    pub learning_rate: f64,
    /// Training objective
    pub objective: Objective,
    /// Random seed for parameter initialization
    pub seed: u64,
    /// Progress is reported every this many epochs
    pub log_every: usize,
}

impl TrainingConfig {
    /// Configuration for the synthetic regression task
    pub fn synthetic_default() -> Self {
        Self {
            epochs: 50,
            batch_size: Some(32),
            learning_rate: 0.001,
            objective: Objective::Regression,
            seed: 42,
            log_every: 10,
        }
    }

    /// Full-batch configuration for real promoter classification
    pub fn real_default() -> Self {
        Self {
            epochs: 100,
            batch_size: None,
            learning_rate: 0.01,
            objective: Objective::Classification,
            seed: 42,
            log_every: 10,
        }
    }

    /// Configuration for quick testing
    pub fn quick_test() -> Self {
        Self {
            epochs: 3,
            ..Self::synthetic_default()
        }
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self::synthetic_default()
    }
}

/// Training state, mutated once per epoch
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrainingState {
    /// Number of completed epochs
    pub epoch: usize,
    /// Per-epoch average loss, in epoch order
    pub loss_history: Vec<f64>,
}

impl TrainingState {
    /// Create new training state
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed epoch
    pub fn update_epoch(&mut self, avg_loss: f64) {
        self.epoch += 1;
        self.loss_history.push(avg_loss);
    }

    /// Average loss of the last completed epoch
    pub fn final_loss(&self) -> Option<f64> {
        self.loss_history.last().copied()
    }
}

/// Training result
#[derive(Debug)]
pub struct TrainingResult<B: Backend> {
    /// The trained model
    pub model: ActivityModel<B>,
    /// Final training state, including the loss trajectory
    pub state: TrainingState,
    /// Training duration in seconds
    pub duration_secs: f64,
}

/// Write a loss trajectory as a two-column CSV (epoch, loss).
///
/// Rendering the trajectory as a chart is left to external tooling; this
/// file is the interchange artifact.
pub fn save_loss_history<P: AsRef<Path>>(path: P, history: &[f64]) -> Result<()> {
    let path = path.as_ref();
    let mut out = String::from("epoch,loss\n");
    for (epoch, loss) in history.iter().enumerate() {
        out.push_str(&format!("{},{:.6}\n", epoch + 1, loss));
    }
    std::fs::write(path, out).with_context(|| format!("Failed to write loss history to {:?}", path))
}
