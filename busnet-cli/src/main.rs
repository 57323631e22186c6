use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod config;

use config::CliConfig;

/// Answers route statistics and itinerary queries for a bus network
/// described by a JSON request document.
#[derive(Debug, Parser)]
#[command(name = "busnet", version)]
struct Args {
    /// Request document, read from stdin when omitted
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Response file, written to stdout when omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Pretty-print the response array
    #[arg(long)]
    pretty: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Request(#[from] busnet::RequestError),
    #[error("Invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
    #[error("Cannot write responses: {0}")]
    Output(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args.log_level);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(args: &Args) -> Result<(), CliError> {
    let config = match &args.config {
        Some(path) => CliConfig::load(path)?,
        None => CliConfig::default(),
    };

    let responses = match &args.input {
        Some(path) => {
            info!("Reading request document {}", path.display());
            busnet::process_json(BufReader::new(File::open(path)?), config.routing)?
        }
        None => busnet::process_json(io::stdin().lock(), config.routing)?,
    };

    let pretty = args.pretty || config.pretty;
    match &args.output {
        Some(path) => {
            write_responses(BufWriter::new(File::create(path)?), &responses, pretty)?;
            info!("Responses written to {}", path.display());
        }
        None => write_responses(io::stdout().lock(), &responses, pretty)?,
    }
    Ok(())
}

fn write_responses<W: Write>(
    mut writer: W,
    responses: &serde_json::Value,
    pretty: bool,
) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, responses)?;
    } else {
        serde_json::to_writer(&mut writer, responses)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
