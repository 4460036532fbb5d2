use anyhow::{bail, Context, Result};
use burn::backend::ndarray::NdArrayDevice;
use burn::module::AutodiffModule;
use promact::cli::{parse_args, setup_logging, Commands, RealArgs, StatsArgs, TrainArgs};
use promact::data::synthetic::{self, SyntheticConfig};
use promact::data::{fasta, loader::DataLoader};
use promact::model::ModelConfig;
use promact::predict::Predictor;
use promact::training::{save_loss_history, trainer::Trainer, TrainingConfig};
use promact::utils::{ensure_dir, format_duration, seq};
use promact::TrainingBackend;
use tracing::{error, info};

fn main() {
    let cli = parse_args();

    setup_logging(cli.verbose);

    info!("{}", promact::info());

    let result = match cli.command {
        Commands::Train(args) => run_train(args),
        Commands::Real(args) => run_real(args),
        Commands::Stats(args) => run_stats(args),
    };

    if let Err(e) = result {
        error!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn prepare_output<P: AsRef<std::path::Path>>(path: P) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            ensure_dir(parent)?;
        }
    }
    Ok(())
}

fn run_train(args: TrainArgs) -> Result<()> {
    let model_config = ModelConfig::new(args.seq_len, args.kernel_size);
    model_config.validate()?;

    info!(
        "Generating {} synthetic sequences of {} bp",
        args.samples, args.seq_len
    );
    let dataset = synthetic::generate(&SyntheticConfig {
        n_samples: args.samples,
        seq_len: args.seq_len,
        seed: args.seed,
    })?;

    let training_config = TrainingConfig {
        epochs: args.epochs,
        batch_size: Some(args.batch_size),
        learning_rate: args.learning_rate,
        seed: args.seed,
        ..TrainingConfig::synthetic_default()
    };

    let device = NdArrayDevice::default();
    let mut trainer = Trainer::<TrainingBackend>::new(training_config, model_config, device);
    let result = trainer.train(&dataset).context("Training failed")?;

    prepare_output(&args.loss_out)?;
    save_loss_history(&args.loss_out, &result.state.loss_history)?;

    info!("Loss trajectory saved to {:?}", args.loss_out);
    info!("Training time: {}", format_duration(result.duration_secs));
    Ok(())
}

fn run_real(args: RealArgs) -> Result<()> {
    let model_config = ModelConfig::new(args.seq_len, args.kernel_size);
    model_config.validate()?;

    let loader = DataLoader::new(args.seq_len);
    let dataset = loader
        .load_dataset(&args.input)
        .with_context(|| format!("Failed to load data from {:?}", args.input))?;
    if dataset.is_empty() {
        bail!(
            "No usable records of length {} in {:?}",
            args.seq_len,
            args.input
        );
    }
    info!("Loaded {} labeled promoter records", dataset.len());

    let training_config = TrainingConfig {
        epochs: args.epochs,
        learning_rate: args.learning_rate,
        seed: args.seed,
        ..TrainingConfig::real_default()
    };

    let device = NdArrayDevice::default();
    let mut trainer = Trainer::<TrainingBackend>::new(
        training_config.clone(),
        model_config,
        device.clone(),
    );
    let result = trainer.train(&dataset).context("Training failed")?;

    prepare_output(&args.loss_out)?;
    save_loss_history(&args.loss_out, &result.state.loss_history)?;
    info!("Loss trajectory saved to {:?}", args.loss_out);

    let predictor = Predictor::new(result.model.valid(), args.seq_len, device);
    let predictions = predictor.predict_all(&args.predict)?;

    for prediction in &predictions {
        info!("Predicted sequence: {}", prediction.sequence);
        info!(
            "  Promoter probability: {:.2}% ({})",
            prediction.probability * 100.0,
            prediction.label()
        );
    }

    if let Some(report_path) = &args.report {
        let report = serde_json::json!({
            "training": training_config,
            "loss_history": result.state.loss_history,
            "predictions": predictions,
        });
        prepare_output(report_path)?;
        std::fs::write(report_path, serde_json::to_string_pretty(&report)?)
            .with_context(|| format!("Failed to write report to {:?}", report_path))?;
        info!("Report saved to {:?}", report_path);
    }

    info!("Training time: {}", format_duration(result.duration_secs));
    Ok(())
}

fn run_stats(args: StatsArgs) -> Result<()> {
    let records = fasta::read_fasta(&args.input)?;
    info!("Read {} sequences", records.len());

    let shown = if args.limit > 0 {
        records.len().min(args.limit)
    } else {
        records.len()
    };

    for record in &records[..shown] {
        info!(
            "{}: {} nt, GC content {:.2}%",
            record.id,
            record.sequence.len(),
            seq::gc_content(&record.sequence)
        );
    }

    Ok(())
}
