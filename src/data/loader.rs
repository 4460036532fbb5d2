use crate::data::{PromoterDataset, SequenceRecord};
use anyhow::{bail, Context, Result};
use csv::ReaderBuilder;
use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info, warn};

/// Supported file formats
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FileFormat {
    Csv,
    Tsv,
    GzippedCsv,
    GzippedTsv,
}

impl FileFormat {
    /// Detect file format from path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let ext = path.extension().and_then(|e| e.to_str());
        let stem = path.file_stem().and_then(|s| s.to_str());

        match (ext, stem) {
            (Some("gz"), Some(stem)) => {
                if stem.ends_with(".csv") {
                    Ok(FileFormat::GzippedCsv)
                } else if stem.ends_with(".tsv") || stem.ends_with(".txt") {
                    Ok(FileFormat::GzippedTsv)
                } else {
                    Err(anyhow::anyhow!("Cannot determine format of gzipped file"))
                }
            }
            (Some("csv"), _) => Ok(FileFormat::Csv),
            (Some("tsv"), _) | (Some("txt"), _) => Ok(FileFormat::Tsv),
            _ => Err(anyhow::anyhow!("Unsupported file format")),
        }
    }

    /// Get delimiter character
    pub fn delimiter(&self) -> u8 {
        match self {
            FileFormat::Csv | FileFormat::GzippedCsv => b',',
            FileFormat::Tsv | FileFormat::GzippedTsv => b'\t',
        }
    }

    /// Check if format is gzipped
    pub fn is_gzipped(&self) -> bool {
        matches!(self, FileFormat::GzippedCsv | FileFormat::GzippedTsv)
    }
}

/// Loader for labeled promoter sequences.
///
/// Expects tabular input with exact columns `sequence` and `label`. Rows
/// whose sequence length differs from the configured length are dropped,
/// with a single warning naming the count; malformed rows are errors.
pub struct DataLoader {
    seq_len: usize,
}

impl DataLoader {
    /// Create a loader for sequences of `seq_len` bases
    pub fn new(seq_len: usize) -> Self {
        Self { seq_len }
    }

    /// Load labeled records from file
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Vec<SequenceRecord>> {
        let path = path.as_ref();
        info!("Loading data from {:?}", path);

        let format = FileFormat::from_path(path)?;
        debug!("Detected file format: {:?}", format);

        let records = if format.is_gzipped() {
            self.load_gzipped(path, format)?
        } else {
            self.load_plain(path, format)?
        };

        info!("Loaded {} records", records.len());
        Ok(records)
    }

    /// Load a complete dataset from file
    pub fn load_dataset<P: AsRef<Path>>(&self, path: P) -> Result<PromoterDataset> {
        let records = self.load(path)?;
        PromoterDataset::from_records(records, self.seq_len)
    }

    /// Load from plain file
    fn load_plain<P: AsRef<Path>>(
        &self,
        path: P,
        format: FileFormat,
    ) -> Result<Vec<SequenceRecord>> {
        let file = File::open(path).context("Failed to open file")?;
        let reader = BufReader::new(file);
        self.parse_records(reader, format)
    }

    /// Load from gzipped file
    fn load_gzipped<P: AsRef<Path>>(
        &self,
        path: P,
        format: FileFormat,
    ) -> Result<Vec<SequenceRecord>> {
        let file = File::open(path).context("Failed to open gzipped file")?;
        let gz = GzDecoder::new(file);
        let reader = BufReader::new(gz);
        self.parse_records(reader, format)
    }

    /// Parse records from reader
    fn parse_records<R: Read>(&self, reader: R, format: FileFormat) -> Result<Vec<SequenceRecord>> {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(format.delimiter())
            .has_headers(true)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .context("Failed to read header row")?
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>();
        debug!("Headers: {:?}", headers);

        let sequence_col = Self::column(&headers, "sequence")?;
        let label_col = Self::column(&headers, "label")?;

        let mut records = Vec::new();
        let mut dropped = 0usize;

        for (row, result) in csv_reader.records().enumerate() {
            let record = result.context("Failed to parse record")?;

            let sequence = record
                .get(sequence_col)
                .with_context(|| format!("Row {} has no sequence field", row + 2))?
                .trim()
                .to_uppercase();
            let label: f32 = record
                .get(label_col)
                .with_context(|| format!("Row {} has no label field", row + 2))?
                .trim()
                .parse()
                .with_context(|| format!("Row {} has an unparsable label", row + 2))?;

            if sequence.chars().count() != self.seq_len {
                dropped += 1;
                continue;
            }

            records.push(SequenceRecord::new(sequence, label));
        }

        if dropped > 0 {
            warn!(
                "Dropped {} records whose sequence length != {}",
                dropped, self.seq_len
            );
        }

        Ok(records)
    }

    fn column(headers: &[String], name: &str) -> Result<usize> {
        match headers.iter().position(|h| h == name) {
            Some(idx) => Ok(idx),
            None => bail!(
                "Missing required column \"{}\" (found: {})",
                name,
                headers.join(", ")
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_file_format_detection() {
        assert_eq!(FileFormat::from_path("data.csv").unwrap(), FileFormat::Csv);
        assert_eq!(FileFormat::from_path("data.tsv").unwrap(), FileFormat::Tsv);
        assert_eq!(
            FileFormat::from_path("data.csv.gz").unwrap(),
            FileFormat::GzippedCsv
        );
        assert_eq!(
            FileFormat::from_path("data.tsv.gz").unwrap(),
            FileFormat::GzippedTsv
        );
        assert!(FileFormat::from_path("data.bin").is_err());
    }

    #[test]
    fn test_parse_simple_csv() {
        let csv_data = "sequence,label\nTTGACAATATAATGTATTTC,1\nATGCATGCATGCATGCATGC,0";
        let cursor = Cursor::new(csv_data);

        let loader = DataLoader::new(20);
        let records = loader.parse_records(cursor, FileFormat::Csv).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sequence, "TTGACAATATAATGTATTTC");
        assert_eq!(records[0].label, 1.0);
        assert_eq!(records[1].label, 0.0);
    }

    #[test]
    fn test_wrong_length_rows_are_dropped() {
        let csv_data = "sequence,label\nTTGACAATATAATGTATTTC,1\nATGC,0\nATGCATGCATGCATGCATGC,0";
        let cursor = Cursor::new(csv_data);

        let loader = DataLoader::new(20);
        let records = loader.parse_records(cursor, FileFormat::Csv).unwrap();

        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.sequence.len() == 20));
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let csv_data = "sequence,score\nATGC,1";
        let cursor = Cursor::new(csv_data);

        let loader = DataLoader::new(4);
        let err = loader
            .parse_records(cursor, FileFormat::Csv)
            .unwrap_err()
            .to_string();
        assert!(err.contains("label"));
    }

    #[test]
    fn test_bad_label_is_an_error() {
        let csv_data = "sequence,label\nATGC,strong";
        let cursor = Cursor::new(csv_data);

        let loader = DataLoader::new(4);
        assert!(loader.parse_records(cursor, FileFormat::Csv).is_err());
    }

    #[test]
    fn test_tsv_parsing() {
        let tsv_data = "sequence\tlabel\nATGC\t0.5";
        let cursor = Cursor::new(tsv_data);

        let loader = DataLoader::new(4);
        let records = loader.parse_records(cursor, FileFormat::Tsv).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].label, 0.5);
    }
}
