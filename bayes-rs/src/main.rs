use bayes_rs::config::Config;
use bayes_rs::eval::run_dataset;
use clap::Parser;
use std::str::FromStr;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Command-line options; flags override values from the config file.
#[derive(Parser)]
#[command(name = "bayes-rs")]
#[command(
    about = "Naive Bayes spam classifier with information-gain feature selection",
    long_about = None
)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Training corpus directory
    #[arg(long)]
    train_dir: Option<String>,

    /// Held-out test corpus directory
    #[arg(long)]
    test_dir: Option<String>,

    /// Dataset display name
    #[arg(long)]
    dataset: Option<String>,

    /// Fraction of the vocabulary kept by feature selection, in (0, 1]
    #[arg(short, long)]
    k: Option<f64>,

    /// Write the full run report as JSON to this path
    #[arg(long)]
    report: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = if std::path::Path::new(&cli.config).exists() {
        Config::from_file(&cli.config)?
    } else {
        Config::default()
    };
    if let Some(train_dir) = cli.train_dir {
        config.data.train_dir = train_dir;
    }
    if let Some(test_dir) = cli.test_dir {
        config.data.test_dir = test_dir;
    }
    if let Some(dataset) = cli.dataset {
        config.data.dataset = dataset;
    }
    if let Some(k) = cli.k {
        config.features.k_best_fraction = k;
    }

    // Initialize logging
    let level = Level::from_str(&config.logging.level).unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    config.validate()?;

    info!("Dataset: {}", config.data.dataset);
    info!("  Train dir: {}", config.data.train_dir);
    info!("  Test dir: {}", config.data.test_dir);
    info!("  k-best fraction: {}", config.features.k_best_fraction);

    let report = run_dataset(&config)?;
    report.log_summary();

    if let Some(path) = cli.report {
        report.write_json(&path)?;
        info!("Report written to {}", path);
    }

    Ok(())
}
