use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// promact: promoter activity prediction using deep learning
#[derive(Parser, Debug)]
#[command(name = "promact")]
#[command(about = "Promoter activity prediction using deep learning")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Train on synthetic TATA-motif data
    Train(TrainArgs),

    /// Train on real labeled promoter data, then predict new sequences
    Real(RealArgs),

    /// Summarize sequences in a FASTA file
    Stats(StatsArgs),
}

/// Synthetic training arguments
#[derive(Parser, Debug)]
pub struct TrainArgs {
    /// Number of synthetic sequences to generate
    #[arg(short = 'n', long, default_value = "1000")]
    pub samples: usize,

    /// Sequence length in bases
    #[arg(long, default_value = "50")]
    pub seq_len: usize,

    /// Convolution kernel size
    #[arg(long, default_value = "5")]
    pub kernel_size: usize,

    /// Number of training epochs
    #[arg(short, long, default_value = "50")]
    pub epochs: usize,

    /// Mini-batch size
    #[arg(short, long, default_value = "32")]
    pub batch_size: usize,

    /// Learning rate
    #[arg(long, default_value = "0.001")]
    pub learning_rate: f64,

    /// Random seed
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Output CSV file for the loss trajectory
    #[arg(short, long, default_value = "training_loss.csv")]
    pub loss_out: PathBuf,
}

/// Real-data training and prediction arguments
#[derive(Parser, Debug)]
pub struct RealArgs {
    /// Input data file with `sequence` and `label` columns (CSV/TSV, optionally gzipped)
    #[arg(short, long, required = true)]
    pub input: PathBuf,

    /// Sequence length in bases
    #[arg(long, default_value = "20")]
    pub seq_len: usize,

    /// Convolution kernel size
    #[arg(long, default_value = "4")]
    pub kernel_size: usize,

    /// Number of training epochs
    #[arg(short, long, default_value = "100")]
    pub epochs: usize,

    /// Learning rate
    #[arg(long, default_value = "0.01")]
    pub learning_rate: f64,

    /// Random seed
    #[arg(long, default_value = "42")]
    pub seed: u64,

    /// Output CSV file for the loss trajectory
    #[arg(short, long, default_value = "real_training_loss.csv")]
    pub loss_out: PathBuf,

    /// Sequences to predict with the freshly trained model
    #[arg(short, long = "predict")]
    pub predict: Vec<String>,

    /// Optional JSON report (config, loss history, predictions)
    #[arg(short, long)]
    pub report: Option<PathBuf>,
}

/// FASTA summary arguments
#[derive(Parser, Debug)]
pub struct StatsArgs {
    /// Input FASTA file
    #[arg(short, long, required = true)]
    pub input: PathBuf,

    /// Maximum number of records to list (0 = all)
    #[arg(short, long, default_value = "0")]
    pub limit: usize,
}

/// Parse CLI arguments
pub fn parse_args() -> Cli {
    Cli::parse()
}

/// Setup logging based on verbosity
pub fn setup_logging(verbose: bool) {
    let filter = if verbose { "debug" } else { "info" };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_train_defaults() {
        let cli = Cli::parse_from(["promact", "train"]);

        match cli.command {
            Commands::Train(args) => {
                assert_eq!(args.samples, 1000);
                assert_eq!(args.seq_len, 50);
                assert_eq!(args.kernel_size, 5);
                assert_eq!(args.epochs, 50);
                assert_eq!(args.batch_size, 32);
                assert_eq!(args.learning_rate, 0.001);
            }
            _ => panic!("Expected Train command"),
        }
    }

    #[test]
    fn test_real_args() {
        let cli = Cli::parse_from([
            "promact",
            "real",
            "-i",
            "ecoli_promoters.csv",
            "--predict",
            "TTGACAATATAATGTATTTC",
            "--predict",
            "ATGCATGCATGCATGCATGC",
        ]);

        match cli.command {
            Commands::Real(args) => {
                assert_eq!(args.input, PathBuf::from("ecoli_promoters.csv"));
                assert_eq!(args.seq_len, 20);
                assert_eq!(args.kernel_size, 4);
                assert_eq!(args.epochs, 100);
                assert_eq!(args.learning_rate, 0.01);
                assert_eq!(args.predict.len(), 2);
            }
            _ => panic!("Expected Real command"),
        }
    }

    #[test]
    fn test_stats_args() {
        let cli = Cli::parse_from(["promact", "stats", "-i", "seqs.fasta"]);

        match cli.command {
            Commands::Stats(args) => {
                assert_eq!(args.input, PathBuf::from("seqs.fasta"));
                assert_eq!(args.limit, 0);
            }
            _ => panic!("Expected Stats command"),
        }
    }
}
