use anyhow::{Context, Result};
use std::path::Path;

/// Ensure directory exists
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if !path.exists() {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create directory: {:?}", path))?;
    }
    Ok(())
}

/// Format duration as human-readable string
pub fn format_duration(secs: f64) -> String {
    if secs < 60.0 {
        format!("{:.1}s", secs)
    } else if secs < 3600.0 {
        format!("{:.1}m", secs / 60.0)
    } else {
        format!("{:.1}h", secs / 3600.0)
    }
}

/// Random number utilities
pub mod random {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Create RNG with fixed seed
    pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(seed)
    }
}

/// Basic nucleotide sequence utilities
pub mod seq {
    use anyhow::{bail, Result};

    /// Reverse complement of a DNA sequence (output uppercased)
    pub fn reverse_complement(dna: &str) -> Result<String> {
        dna.chars()
            .rev()
            .map(|base| match base.to_ascii_uppercase() {
                'A' => Ok('T'),
                'T' => Ok('A'),
                'C' => Ok('G'),
                'G' => Ok('C'),
                other => bail!("cannot complement unrecognized base '{}'", other),
            })
            .collect()
    }

    /// GC content as a percentage; 0.0 for an empty sequence
    pub fn gc_content(dna: &str) -> f64 {
        if dna.is_empty() {
            return 0.0;
        }
        let gc = dna
            .chars()
            .filter(|c| matches!(c.to_ascii_uppercase(), 'G' | 'C'))
            .count();
        gc as f64 / dna.chars().count() as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(30.0), "30.0s");
        assert_eq!(format_duration(90.0), "1.5m");
        assert_eq!(format_duration(3600.0), "1.0h");
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut a = random::seeded_rng(42);
        let mut b = random::seeded_rng(42);

        let va: Vec<f32> = (0..10).map(|_| a.gen()).collect();
        let vb: Vec<f32> = (0..10).map(|_| b.gen()).collect();
        assert_eq!(va, vb);
    }

    #[test]
    fn test_reverse_complement() {
        assert_eq!(seq::reverse_complement("ATGCGTA").unwrap(), "TACGCAT");
        assert_eq!(seq::reverse_complement("atgc").unwrap(), "GCAT");
        assert!(seq::reverse_complement("ATXG").is_err());
    }

    #[test]
    fn test_gc_content() {
        assert_eq!(seq::gc_content("GGCC"), 100.0);
        assert_eq!(seq::gc_content("ATAT"), 0.0);
        assert_eq!(seq::gc_content("ATGC"), 50.0);
        assert_eq!(seq::gc_content(""), 0.0);
    }
}
