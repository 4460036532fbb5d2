//! Minimal FASTA reader for sequence summaries.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, warn};

/// A single FASTA record
#[derive(Debug, Clone, PartialEq)]
pub struct FastaRecord {
    /// First whitespace-delimited token of the header line
    pub id: String,
    /// Concatenated sequence body
    pub sequence: String,
}

/// Read FASTA records from a file
pub fn read_fasta<P: AsRef<Path>>(path: P) -> Result<Vec<FastaRecord>> {
    let path = path.as_ref();
    let file = File::open(path).with_context(|| format!("Failed to open FASTA file {:?}", path))?;
    let records = parse_fasta(BufReader::new(file))?;
    info!("Read {} FASTA records from {:?}", records.len(), path);
    Ok(records)
}

/// Parse FASTA records from any buffered reader
pub fn parse_fasta<R: BufRead>(reader: R) -> Result<Vec<FastaRecord>> {
    let mut records = Vec::new();
    let mut id: Option<String> = None;
    let mut sequence = String::new();

    for line in reader.lines() {
        let line = line.context("Failed to read FASTA line")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(header) = line.strip_prefix('>') {
            if let Some(id) = id.take() {
                records.push(FastaRecord { id, sequence });
                sequence = String::new();
            }
            id = Some(
                header
                    .split_whitespace()
                    .next()
                    .unwrap_or_default()
                    .to_string(),
            );
        } else if id.is_some() {
            sequence.push_str(line);
        } else {
            warn!("Ignoring sequence data before first FASTA header");
        }
    }

    if let Some(id) = id {
        records.push(FastaRecord { id, sequence });
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_multiple_records() {
        let data = ">seq1 description here\nATCG\nGGTT\n>seq2\nTTTT\n";
        let records = parse_fasta(Cursor::new(data)).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "seq1");
        assert_eq!(records[0].sequence, "ATCGGGTT");
        assert_eq!(records[1].id, "seq2");
        assert_eq!(records[1].sequence, "TTTT");
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let data = ">a\n\nAT\n\nCG\n";
        let records = parse_fasta(Cursor::new(data)).unwrap();
        assert_eq!(records[0].sequence, "ATCG");
    }

    #[test]
    fn test_leading_junk_is_ignored() {
        let data = "ATCG\n>a\nGG\n";
        let records = parse_fasta(Cursor::new(data)).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sequence, "GG");
    }

    #[test]
    fn test_empty_input() {
        let records = parse_fasta(Cursor::new("")).unwrap();
        assert!(records.is_empty());
    }
}
