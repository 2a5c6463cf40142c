/*
cargo run --bin generate_mock_data -- \
    --input data/cities.json > public/flowers.json

reproducible run, written straight to a file
cargo run --bin generate_mock_data -- \
    -i data/cities.json \
    -o public/flowers.json \
    --seed 42 --normalize
*/

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};
use std::fs::{create_dir_all, File};
use std::path::{Path, PathBuf};

use flower_mock::labeler::{DEFAULT_QUOTA_FLOWER1, DEFAULT_QUOTA_FLOWER2, DEFAULT_SAMPLE_SIZE};
use flower_mock::{generate, load_source, output, LabelerConfig};

// Sample cities and label them as flower1/flower2 mock data
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    // City list: JSON array of {name, lat, lng}
    #[arg(short, long, default_value = "cities.json")]
    input: PathBuf,

    // Write here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(short = 'n', long, default_value_t = DEFAULT_SAMPLE_SIZE)]
    sample_size: usize,

    #[arg(long, default_value_t = DEFAULT_QUOTA_FLOWER1)]
    quota_flower1: usize,

    #[arg(long, default_value_t = DEFAULT_QUOTA_FLOWER2)]
    quota_flower2: usize,

    // Fixed RNG seed; OS entropy when omitted
    #[arg(long)]
    seed: Option<u64>,

    // Clamp latitude and wrap longitude into globe range
    #[arg(long)]
    normalize: bool,

    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // best effort, stdout stays JSON-only either way
    if let Err(e) = init_logging(&cli.log_dir) {
        eprintln!("warning: file logging disabled: {e:#}");
    }
    info!("Starting mock flower generation");
    info!("Input file: {:?}", cli.input);

    let config = LabelerConfig {
        sample_size: cli.sample_size,
        quota_flower1: cli.quota_flower1,
        quota_flower2: cli.quota_flower2,
        normalize: cli.normalize,
    };
    info!("Config: {config:?}");

    let mut rng = match cli.seed {
        Some(seed) => {
            info!("Using seed {seed}");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };

    let rows = load_source(&cli.input)
        .with_context(|| format!("Failed to load cities from {:?}", cli.input))?;
    let flowers = generate(&rows, &config, &mut rng)?;

    output::write_output(&flowers, cli.output.as_deref())?;
    match &cli.output {
        Some(path) => info!("Wrote {} flowers to {:?}", flowers.len(), path),
        None => info!("Wrote {} flowers to stdout", flowers.len()),
    }

    info!("All done successfully.");
    Ok(())
}

// File only, stdout carries the JSON
fn init_logging(log_dir: &Path) -> Result<()> {
    create_dir_all(log_dir).with_context(|| format!("Cannot create log dir {log_dir:?}"))?;
    let ts = Local::now().format("%Y%m%d_%H%M%S");
    let log_path = log_dir.join(format!("generate_mock_data_{ts}.log"));
    let file = File::create(&log_path).with_context(|| format!("Cannot create {log_path:?}"))?;
    WriteLogger::init(LevelFilter::Info, LogConfig::default(), file)?;
    Ok(())
}
