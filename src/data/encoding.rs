//! One-hot encoding of nucleotide sequences.
//!
//! Bases map to channels in the fixed order A, T, C, G. Lookup is
//! case-insensitive; any other character is an error rather than a
//! silent all-zero row, so malformed input never reaches the model.

use crate::data::NUM_CHANNELS;
use anyhow::{bail, Result};

/// Channel index of a base, uppercase-normalized before lookup
fn base_index(base: char, position: usize) -> Result<usize> {
    match base.to_ascii_uppercase() {
        'A' => Ok(0),
        'T' => Ok(1),
        'C' => Ok(2),
        'G' => Ok(3),
        other => bail!("unrecognized base '{}' at position {}", other, position),
    }
}

/// Encode a sequence as one one-hot row per position, shape `(L, 4)`
pub fn encode(sequence: &str) -> Result<Vec<[f32; NUM_CHANNELS]>> {
    sequence
        .chars()
        .enumerate()
        .map(|(position, base)| {
            let mut row = [0.0; NUM_CHANNELS];
            row[base_index(base, position)?] = 1.0;
            Ok(row)
        })
        .collect()
}

/// Encode a sequence as a flat channel-first buffer, shape `(4, L)`.
///
/// This is the layout the convolution consumes; `buffer[c * L + i]` is 1.0
/// exactly when position `i` holds the base of channel `c`.
pub fn encode_channel_first(sequence: &str) -> Result<Vec<f32>> {
    let len = sequence.chars().count();
    let mut buffer = vec![0.0; NUM_CHANNELS * len];
    for (position, base) in sequence.chars().enumerate() {
        buffer[base_index(base, position)? * len + position] = 1.0;
    }
    Ok(buffer)
}
