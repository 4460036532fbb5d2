use crate::data::PromoterDataset;
use crate::model::architecture::init_model;
use crate::model::ModelConfig;
use crate::training::callbacks::{ProgressLogger, TrainingCallback};
use crate::training::{TrainingConfig, TrainingResult, TrainingState};
use anyhow::{bail, Result};
use burn::optim::{AdamConfig, GradientsParams, Optimizer};
use burn::prelude::*;
use burn::tensor::backend::AutodiffBackend;
use burn::tensor::ElementConversion;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Instant;
use tracing::{debug, info};

/// Trainer for the promoter activity model.
///
/// Runs a fixed number of epochs of Adam over contiguous mini-batches
/// (or the whole dataset when no batch size is configured) and records
/// the per-epoch average loss. There is no convergence check and no
/// checkpointing; a failed step propagates immediately.
pub struct Trainer<B: AutodiffBackend> {
    /// Training configuration
    config: TrainingConfig,
    /// Model configuration
    model_config: ModelConfig,
    /// Device
    device: B::Device,
    /// Epoch observers, including the default progress logger
    callbacks: Vec<Box<dyn TrainingCallback>>,
}

impl<B: AutodiffBackend> Trainer<B> {
    /// Create new trainer
    pub fn new(config: TrainingConfig, model_config: ModelConfig, device: B::Device) -> Self {
        let progress = ProgressLogger::new(config.log_every, config.epochs);
        Self {
            config,
            model_config,
            device,
            callbacks: vec![Box::new(progress)],
        }
    }

    /// Register an additional training callback
    pub fn with_callback<C: TrainingCallback + 'static>(mut self, callback: C) -> Self {
        self.callbacks.push(Box::new(callback));
        self
    }

    /// Train a freshly initialized model on the dataset
    pub fn train(&mut self, dataset: &PromoterDataset) -> Result<TrainingResult<B>> {
        if dataset.is_empty() {
            bail!("cannot train on an empty dataset");
        }
        if dataset.seq_len() != self.model_config.seq_len {
            bail!(
                "dataset sequence length {} does not match model sequence length {}",
                dataset.seq_len(),
                self.model_config.seq_len
            );
        }

        B::seed(self.config.seed);

        let start_time = Instant::now();
        let mut state = TrainingState::new();
        let mut model = init_model::<B>(&self.model_config, &self.device)?;
        let mut optim = AdamConfig::new().init();

        let n = dataset.len();
        let batch_size = self.config.batch_size.unwrap_or(n).max(1);
        info!(
            "Training for {} epochs on {} records (batch size {}, lr {})",
            self.config.epochs, n, batch_size, self.config.learning_rate
        );

        let bar = ProgressBar::new(self.config.epochs as u64);
        bar.set_style(ProgressStyle::with_template(
            "{bar:40.cyan/blue} {pos}/{len} epochs {msg}",
        )?);

        for epoch in 0..self.config.epochs {
            let mut total_loss = 0.0;
            let mut batches = 0usize;

            for batch_start in (0..n).step_by(batch_size) {
                let batch_end = usize::min(batch_start + batch_size, n);
                let (inputs, targets) = dataset.batch::<B>(batch_start..batch_end, &self.device)?;

                let predictions = model.forward(inputs);
                let loss = self.config.objective.loss(predictions, targets);
                total_loss += loss.clone().into_scalar().elem::<f64>();

                let grads = GradientsParams::from_grads(loss.backward(), &model);
                model = optim.step(self.config.learning_rate, model, grads);
                batches += 1;
            }

            let avg_loss = total_loss / batches as f64;
            state.update_epoch(avg_loss);
            for callback in &mut self.callbacks {
                callback.on_epoch_end(epoch, avg_loss);
            }

            bar.set_message(format!("loss {:.4}", avg_loss));
            bar.inc(1);
            debug!("Epoch {} complete, avg loss {:.6}", epoch + 1, avg_loss);
        }

        bar.finish_and_clear();
        for callback in &mut self.callbacks {
            callback.on_train_end(&state);
        }

        Ok(TrainingResult {
            model,
            state,
            duration_secs: start_time.elapsed().as_secs_f64(),
        })
    }
}

/// Train with a default device, for quick library use
pub fn train_model<B: AutodiffBackend>(
    dataset: &PromoterDataset,
    model_config: ModelConfig,
    training_config: TrainingConfig,
) -> Result<TrainingResult<B>> {
    let device = B::Device::default();
    Trainer::new(training_config, model_config, device).train(dataset)
}
