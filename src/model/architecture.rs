use crate::data::NUM_CHANNELS;
use crate::model::{ModelConfig, SequenceScorer};
use anyhow::Result;
use burn::nn::conv::{Conv1d, Conv1dConfig};
use burn::nn::pool::{MaxPool1d, MaxPool1dConfig};
use burn::nn::{Linear, LinearConfig};
use burn::prelude::*;
use burn::tensor::activation::{relu, sigmoid};

/// Promoter activity prediction model.
///
/// A 1-D convolution over the sequence axis followed by max pooling and
/// two linear layers, ending in a sigmoid. Forward evaluation is batched
/// only: input `(N, 4, L)`, output `(N,)` probabilities, also for N = 1.
#[derive(Module, Debug)]
pub struct ActivityModel<B: Backend> {
    /// Motif-detecting convolution (4 channels in, stride 1, no padding)
    conv1: Conv1d<B>,
    /// Max pooling with window 2, stride 2
    pool: MaxPool1d,
    /// First fully connected layer
    fc1: Linear<B>,
    /// Output layer
    fc2: Linear<B>,
}

impl<B: Backend> ActivityModel<B> {
    /// Forward pass.
    ///
    /// Deterministic given fixed parameters and input; no state beyond
    /// the learned parameters.
    pub fn forward(&self, input: Tensor<B, 3>) -> Tensor<B, 1> {
        let x = relu(self.conv1.forward(input));
        let x = self.pool.forward(x);
        let x: Tensor<B, 2> = x.flatten(1, 2);
        let x = relu(self.fc1.forward(x));
        let x = sigmoid(self.fc2.forward(x));
        x.squeeze(1)
    }
}

impl<B: Backend> SequenceScorer<B> for ActivityModel<B> {
    fn score(&self, batch: Tensor<B, 3>) -> Tensor<B, 1> {
        self.forward(batch)
    }
}

/// Initialize an activity model from configuration.
///
/// The first linear layer width is derived from the configuration, so it
/// always matches the flattened convolution output.
pub fn init_model<B: Backend>(config: &ModelConfig, device: &B::Device) -> Result<ActivityModel<B>> {
    config.validate()?;

    let conv1 = Conv1dConfig::new(NUM_CHANNELS, config.conv_channels, config.kernel_size)
        .init(device);
    let pool = MaxPool1dConfig::new(2).with_stride(2).init();
    let fc1 = LinearConfig::new(config.flattened_size(), config.hidden_size).init(device);
    let fc2 = LinearConfig::new(config.hidden_size, 1).init(device);

    Ok(ActivityModel {
        conv1,
        pool,
        fc1,
        fc2,
    })
}
