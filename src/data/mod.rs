pub mod encoding;
pub mod fasta;
pub mod loader;
pub mod synthetic;

use anyhow::{bail, Result};
use burn::prelude::*;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Nucleotide alphabet in channel order
pub const BASES: [char; 4] = ['A', 'T', 'C', 'G'];

/// Number of input channels (one per base)
pub const NUM_CHANNELS: usize = 4;

/// Sequence length used by the synthetic configuration
pub const SYNTHETIC_SEQ_LEN: usize = 50;

/// Sequence length used by the real promoter configuration
pub const PROMOTER_SEQ_LEN: usize = 20;

/// Motif that marks high-activity synthetic sequences
pub const TATA_MOTIF: &str = "TATA";

/// A labeled promoter sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceRecord {
    /// Nucleotide sequence over {A, T, C, G}
    pub sequence: String,
    /// Activity label in [0, 1]
    pub label: f32,
}

impl SequenceRecord {
    /// Create a new labeled record
    pub fn new(sequence: impl Into<String>, label: f32) -> Self {
        Self {
            sequence: sequence.into(),
            label,
        }
    }
}

/// An ordered collection of labeled sequences of one fixed length
#[derive(Debug, Clone)]
pub struct PromoterDataset {
    records: Vec<SequenceRecord>,
    seq_len: usize,
}

impl PromoterDataset {
    /// Create an empty dataset for sequences of `seq_len` bases
    pub fn new(seq_len: usize) -> Self {
        Self {
            records: Vec::new(),
            seq_len,
        }
    }

    /// Build a dataset from records, rejecting any length mismatch
    pub fn from_records(records: Vec<SequenceRecord>, seq_len: usize) -> Result<Self> {
        let mut dataset = Self::new(seq_len);
        for record in records {
            dataset.push(record)?;
        }
        Ok(dataset)
    }

    /// Append a record, rejecting sequences of the wrong length
    pub fn push(&mut self, record: SequenceRecord) -> Result<()> {
        let len = record.sequence.chars().count();
        if len != self.seq_len {
            bail!(
                "sequence \"{}\" has length {}, expected {}",
                record.sequence,
                len,
                self.seq_len
            );
        }
        self.records.push(record);
        Ok(())
    }

    /// Configured sequence length
    pub fn seq_len(&self) -> usize {
        self.seq_len
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Access the underlying records
    pub fn records(&self) -> &[SequenceRecord] {
        &self.records
    }

    /// Labels in record order
    pub fn labels(&self) -> Vec<f32> {
        self.records.iter().map(|r| r.label).collect()
    }

    /// Encode a contiguous range of records into channel-first tensors.
    ///
    /// Returns inputs of shape `(N, 4, L)` and labels of shape `(N,)`.
    pub fn batch<B: Backend>(
        &self,
        range: Range<usize>,
        device: &B::Device,
    ) -> Result<(Tensor<B, 3>, Tensor<B, 1>)> {
        if range.is_empty() || range.end > self.records.len() {
            bail!(
                "invalid batch range {}..{} for dataset of {} records",
                range.start,
                range.end,
                self.records.len()
            );
        }

        let n = range.len();
        let mut inputs = Vec::with_capacity(n * NUM_CHANNELS * self.seq_len);
        let mut labels = Vec::with_capacity(n);

        for record in &self.records[range] {
            inputs.extend(encoding::encode_channel_first(&record.sequence)?);
            labels.push(record.label);
        }

        let inputs = Tensor::from_data(
            TensorData::new(inputs, [n, NUM_CHANNELS, self.seq_len]),
            device,
        );
        let labels = Tensor::from_data(TensorData::new(labels, [n]), device);
        Ok((inputs, labels))
    }

    /// Encode the whole dataset into channel-first tensors
    pub fn to_tensors<B: Backend>(
        &self,
        device: &B::Device,
    ) -> Result<(Tensor<B, 3>, Tensor<B, 1>)> {
        if self.is_empty() {
            bail!("cannot build tensors from an empty dataset");
        }
        self.batch::<B>(0..self.records.len(), device)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray<f32>;

    #[test]
    fn test_push_rejects_wrong_length() {
        let mut dataset = PromoterDataset::new(4);
        assert!(dataset.push(SequenceRecord::new("ATCG", 0.5)).is_ok());

        let err = dataset
            .push(SequenceRecord::new("ATCGA", 0.5))
            .unwrap_err()
            .to_string();
        assert!(err.contains("length 5"));
        assert!(err.contains("expected 4"));
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn test_batch_shapes() {
        let records = vec![
            SequenceRecord::new("ATCG", 0.1),
            SequenceRecord::new("GGGG", 0.9),
            SequenceRecord::new("TTAA", 0.4),
        ];
        let dataset = PromoterDataset::from_records(records, 4).unwrap();
        let device = Default::default();

        let (inputs, labels) = dataset.to_tensors::<TestBackend>(&device).unwrap();
        assert_eq!(inputs.dims(), [3, 4, 4]);
        assert_eq!(labels.dims(), [3]);

        let (inputs, labels) = dataset.batch::<TestBackend>(1..3, &device).unwrap();
        assert_eq!(inputs.dims(), [2, 4, 4]);
        assert_eq!(labels.dims(), [2]);
    }

    #[test]
    fn test_batch_channel_first_layout() {
        let dataset =
            PromoterDataset::from_records(vec![SequenceRecord::new("AATT", 1.0)], 4).unwrap();
        let device = Default::default();

        let (inputs, _) = dataset.to_tensors::<TestBackend>(&device).unwrap();
        let values: Vec<f32> = inputs.into_data().to_vec().unwrap();

        // A channel: first two positions set, T channel: last two
        assert_eq!(
            values,
            vec![
                1.0, 1.0, 0.0, 0.0, // A
                0.0, 0.0, 1.0, 1.0, // T
                0.0, 0.0, 0.0, 0.0, // C
                0.0, 0.0, 0.0, 0.0, // G
            ]
        );
    }

    #[test]
    fn test_empty_dataset_has_no_tensors() {
        let dataset = PromoterDataset::new(4);
        let device = Default::default();
        assert!(dataset.to_tensors::<TestBackend>(&device).is_err());
    }
}
