use crate::training::TrainingState;

/// Training callback trait.
///
/// Callbacks observe the training loop without owning any of its state;
/// the progress signal other tooling consumes is emitted through this
/// seam.
pub trait TrainingCallback {
    /// Called at the end of each epoch with its average loss
    fn on_epoch_end(&mut self, _epoch: usize, _avg_loss: f64) {}

    /// Called once after the final epoch
    fn on_train_end(&mut self, _state: &TrainingState) {}
}

/// Logs (epoch index, average loss) every `log_every` epochs
pub struct ProgressLogger {
    log_every: usize,
    epochs: usize,
}

impl ProgressLogger {
    /// Create a progress logger for a run of `epochs` epochs
    pub fn new(log_every: usize, epochs: usize) -> Self {
        Self {
            log_every: log_every.max(1),
            epochs,
        }
    }
}

impl TrainingCallback for ProgressLogger {
    fn on_epoch_end(&mut self, epoch: usize, avg_loss: f64) {
        if (epoch + 1) % self.log_every == 0 {
            tracing::info!(
                "Epoch [{}/{}], Loss: {:.4}",
                epoch + 1,
                self.epochs,
                avg_loss
            );
        }
    }

    fn on_train_end(&mut self, state: &TrainingState) {
        if let Some(loss) = state.final_loss() {
            tracing::info!(
                "Training finished after {} epochs, final loss {:.4}",
                state.epoch,
                loss
            );
        }
    }
}

/// Collects every per-epoch loss it observes; useful in tests
#[derive(Default)]
pub struct LossRecorder {
    /// Observed (epoch, average loss) pairs
    pub observed: Vec<(usize, f64)>,
}

impl TrainingCallback for LossRecorder {
    fn on_epoch_end(&mut self, epoch: usize, avg_loss: f64) {
        self.observed.push((epoch, avg_loss));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loss_recorder_sees_every_epoch() {
        let mut recorder = LossRecorder::default();
        recorder.on_epoch_end(0, 0.9);
        recorder.on_epoch_end(1, 0.7);

        assert_eq!(recorder.observed, vec![(0, 0.9), (1, 0.7)]);
    }

    #[test]
    fn test_progress_logger_handles_zero_frequency() {
        // Must not divide by zero
        let mut logger = ProgressLogger::new(0, 10);
        logger.on_epoch_end(0, 1.0);
    }
}
