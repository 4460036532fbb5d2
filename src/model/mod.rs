pub mod architecture;
pub mod objective;

use anyhow::{bail, Result};
use burn::prelude::*;

/// Model configuration.
///
/// One parametric definition covers both operating points: the synthetic
/// configuration (50 bp sequences, kernel 5) and the real promoter
/// configuration (20 bp sequences, kernel 4). The width of the first
/// linear layer is always derived from `flattened_size`, so changing the
/// sequence length or kernel size can never leave a stale layer width.
#[derive(Config, Debug)]
pub struct ModelConfig {
    /// Fixed input sequence length in bases
    pub seq_len: usize,

    /// Convolution kernel size
    pub kernel_size: usize,

    /// Number of convolution output channels
    #[config(default = "16")]
    pub conv_channels: usize,

    /// Number of hidden units in the first linear layer
    #[config(default = "32")]
    pub hidden_size: usize,
}

impl ModelConfig {
    /// Configuration for the synthetic TATA-motif task
    pub fn synthetic_default() -> Self {
        Self::new(crate::data::SYNTHETIC_SEQ_LEN, 5)
    }

    /// Configuration for real 20 bp promoter data
    pub fn real_default() -> Self {
        Self::new(crate::data::PROMOTER_SEQ_LEN, 4)
    }

    /// Convolution output length: `L - K + 1` (stride 1, no padding)
    pub fn conv_output_len(&self) -> usize {
        self.seq_len - self.kernel_size + 1
    }

    /// Length after max pooling with window 2 and stride 2
    pub fn pooled_len(&self) -> usize {
        self.conv_output_len() / 2
    }

    /// Input width of the first linear layer
    pub fn flattened_size(&self) -> usize {
        self.conv_channels * self.pooled_len()
    }

    /// Reject configurations with a degenerate feature pipeline
    pub fn validate(&self) -> Result<()> {
        if self.kernel_size == 0 {
            bail!("kernel size must be positive");
        }
        if self.kernel_size > self.seq_len {
            bail!(
                "kernel size {} exceeds sequence length {}",
                self.kernel_size,
                self.seq_len
            );
        }
        if self.pooled_len() == 0 {
            bail!(
                "sequence length {} with kernel size {} leaves no features after pooling",
                self.seq_len,
                self.kernel_size
            );
        }
        Ok(())
    }
}

/// Capability of scoring encoded sequence batches.
///
/// Input is a channel-first batch `(N, 4, L)`, output one probability in
/// (0, 1) per batch element. The trainer and predictor only depend on
/// this seam, so alternative architectures can be swapped in.
pub trait SequenceScorer<B: Backend> {
    /// Score a batch of encoded sequences
    fn score(&self, batch: Tensor<B, 3>) -> Tensor<B, 1>;
}
