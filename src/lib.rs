//! # promact: Promoter Activity Prediction
//!
//! promact is a deep learning-based tool for predicting the transcriptional
//! activity of short DNA promoter sequences from their nucleotide composition.
//!
//! ## Features
//!
//! - One-hot sequence encoding with a fixed A/T/C/G channel order
//! - Synthetic training data generation with a TATA-box activity signal
//! - Real labeled data loading from CSV/TSV (optionally gzipped)
//! - A small 1-D convolutional activity model trained with Adam
//! - Single-sequence prediction with strict input validation
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use promact::data::synthetic::{self, SyntheticConfig};
//! use promact::model::ModelConfig;
//! use promact::training::{trainer::Trainer, TrainingConfig};
//! use promact::predict::Predictor;
//! use burn::module::AutodiffModule;
//!
//! // Generate a seeded synthetic dataset
//! let dataset = synthetic::generate(&SyntheticConfig::default()).unwrap();
//!
//! // Train the activity model
//! let model_config = ModelConfig::synthetic_default();
//! let training_config = TrainingConfig::synthetic_default();
//! let device = burn::backend::ndarray::NdArrayDevice::default();
//! let mut trainer = Trainer::<promact::TrainingBackend>::new(
//!     training_config,
//!     model_config,
//!     device.clone(),
//! );
//! let result = trainer.train(&dataset).unwrap();
//!
//! // Predict activity of a new 50 bp sequence
//! let predictor = Predictor::new(result.model.valid(), dataset.seq_len(), device);
//! let prediction = predictor.predict(&"ATCGTATAAT".repeat(5));
//! ```

pub mod cli;
pub mod data;
pub mod model;
pub mod predict;
pub mod training;
pub mod utils;

use burn::backend::Autodiff;
use burn_ndarray::NdArray;

/// Default inference backend type
pub type DefaultBackend = NdArray<f32>;

/// Backend used for gradient-based training
pub type TrainingBackend = Autodiff<NdArray<f32>>;

/// Re-export commonly used types
pub use data::loader::DataLoader;
pub use data::{PromoterDataset, SequenceRecord};
pub use model::{architecture::ActivityModel, ModelConfig, SequenceScorer};
pub use predict::{Prediction, Predictor};
pub use training::{TrainingConfig, TrainingResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!(
        "{} v{} - promoter activity prediction using deep learning",
        NAME, VERSION
    )
}
