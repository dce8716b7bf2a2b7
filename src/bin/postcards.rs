//! Batch generator for curbside violation postcards.
//!
//! Writes a LaTeX document with two pages per address (message side and
//! address side) for every address with more violations than the threshold.
//!
//! # Usage
//!
//! ```bash
//! # From a CSV export of the violation log
//! postcards from-csv --in-file violations.csv --out-file postcards.tex --threshold 3
//!
//! # From the violations table
//! postcards from-db --out-file postcards.tex
//!
//! # Printer alignment card
//! postcards sample --out-file sample.tex
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_*` components (for `from-db`)
//! - `RUST_LOG`, `LOG_FORMAT`
//!
//! # Exit Status
//!
//! - `0` - document written
//! - `66` - the CSV input file does not exist; nothing was written
//! - `1` - any other failure

use curbside_postcards::application::services::{PostcardBatch, PostcardService};
use curbside_postcards::config;
use curbside_postcards::domain::DEFAULT_THRESHOLD;
use curbside_postcards::infrastructure::csv_source::read_csv_file;
use curbside_postcards::infrastructure::persistence::PgViolationRepository;
use curbside_postcards::rendering::DocumentWriter;
use curbside_postcards::rendering::card::CALIBRATION_CARD;
use curbside_postcards::telemetry;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Exit status when the CSV input is missing (sysexits `EX_NOINPUT`).
const EXIT_NO_INPUT: i32 = 66;

/// Generate a postcard LaTeX file.
#[derive(Parser)]
#[command(name = "postcards")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate postcards from a CSV file of curbside violations
    FromCsv {
        /// CSV file of curbside violations
        #[arg(short, long)]
        in_file: PathBuf,

        /// Where to write the LaTeX
        #[arg(short, long)]
        out_file: PathBuf,

        /// Number of violations an address must exceed to merit a postcard
        #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: usize,
    },

    /// Generate postcards from the violations table
    FromDb {
        /// Where to write the LaTeX
        #[arg(short, long)]
        out_file: PathBuf,

        /// Number of violations an address must exceed to merit a postcard
        #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
        threshold: usize,
    },

    /// Write a single calibration card for checking printer alignment
    Sample {
        /// Where to write the LaTeX
        #[arg(short, long)]
        out_file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    telemetry::init_tracing("info", &log_format);

    match cli.command {
        Commands::FromCsv {
            in_file,
            out_file,
            threshold,
        } => from_csv(&in_file, &out_file, threshold)?,
        Commands::FromDb {
            out_file,
            threshold,
        } => from_db(&out_file, threshold).await?,
        Commands::Sample { out_file } => sample(&out_file)?,
    }

    Ok(())
}

/// Checks the input exists before anything else happens, so a typo never
/// leaves an empty document behind.
fn from_csv(in_file: &Path, out_file: &Path, threshold: usize) -> Result<()> {
    if !in_file.exists() {
        eprintln!(
            "{}",
            format!("{} does not exist ... exiting", in_file.display()).red()
        );
        std::process::exit(EXIT_NO_INPUT);
    }

    tracing::info!(input = %in_file.display(), "Reading violations CSV");

    let records = read_csv_file(in_file)
        .with_context(|| format!("Failed to read {}", in_file.display()))?;

    let batch = PostcardBatch::from_records(records, threshold);
    write_batch(&batch, out_file)
}

/// Reads the violations table through a pool that lives only for this run.
async fn from_db(out_file: &Path, threshold: usize) -> Result<()> {
    let database_url = config::load_database_url()?;
    config::validate_database_url(&database_url)?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let repository = Arc::new(PgViolationRepository::new(Arc::new(pool.clone())));
    let batch = PostcardService::new(repository)
        .build_batch(threshold)
        .await;

    pool.close().await;

    write_batch(&batch?, out_file)
}

fn sample(out_file: &Path) -> Result<()> {
    let file = create_output(out_file)?;

    let mut writer = DocumentWriter::begin(BufWriter::new(file))?;
    writer.write_raw(CALIBRATION_CARD)?;
    writer.finish()?;

    println!(
        "{} {}",
        "✔ Wrote calibration card to".green(),
        out_file.display().to_string().bold()
    );
    Ok(())
}

fn write_batch(batch: &PostcardBatch, out_file: &Path) -> Result<()> {
    let file = create_output(out_file)?;

    batch
        .write_to(BufWriter::new(file))
        .with_context(|| format!("Failed to write {}", out_file.display()))?;

    tracing::info!(output = %out_file.display(), cards = batch.card_count(), "Postcards written");

    println!(
        "{} {} postcards ({} addresses, threshold {}) to {}",
        "✔ Wrote".green(),
        batch.card_count().to_string().bold(),
        batch.total_addresses(),
        batch.threshold(),
        out_file.display().to_string().bold()
    );

    Ok(())
}

fn create_output(out_file: &Path) -> Result<File> {
    File::create(out_file).with_context(|| format!("Failed to create {}", out_file.display()))
}
