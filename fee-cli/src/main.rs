use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use fee_cli::commands::{self, RawFees};
use fee_cli::config::AppConfig;
use fee_cli::logging;
use fee_core::FeeCalculator;

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Tuition fee comparison across payment methods.
///
/// Projects next year's education fee and prints what it costs when paid in
/// cash, by a single card payment, or in eight card installments.
///
/// Fee values are taken as typed: `1,234.50` is accepted, and an empty or
/// unreadable meal fee counts as zero.
#[derive(Debug, Parser)]
#[command(name = "tuition-fees", version, about)]
struct Cli {
    /// Last year's education fee.
    #[arg(long, default_value = "", conflicts_with = "batch")]
    previous_education_fee: String,

    /// Last year's meal fee (informational).
    #[arg(long, default_value = "", conflicts_with = "batch")]
    previous_meal_fee: String,

    /// Next year's meal fee.
    #[arg(long, default_value = "", conflicts_with = "batch")]
    new_meal_fee: String,

    /// CSV file with one input per row; prints a summary line per row.
    #[arg(long)]
    batch: Option<PathBuf>,

    /// TOML file with the rate schedule and display settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Currency code shown after every amount (overrides the config file).
    #[arg(long)]
    currency: Option<String>,

    /// Log filter, e.g. `debug` or `fee_core=trace`.
    #[arg(long)]
    log_level: Option<String>,

    /// Also append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    logging::init_default_logging();

    let cli = Cli::parse();

    if let Some(level) = &cli.log_level {
        logging::set_log_level(level)?;
    }
    if let Some(path) = &cli.log_file {
        logging::enable_file_logging(path)?;
    }

    let config = AppConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let currency = cli.currency.unwrap_or(config.display.currency);
    let calculator = FeeCalculator::new(config.rates);

    let report = match &cli.batch {
        Some(path) => commands::run_batch(&calculator, path, &currency)?,
        None => commands::run_single(
            &calculator,
            RawFees {
                previous_education_fee: &cli.previous_education_fee,
                previous_meal_fee: &cli.previous_meal_fee,
                new_meal_fee: &cli.new_meal_fee,
            },
            &currency,
        )?,
    };
    print!("{report}");

    Ok(())
}
