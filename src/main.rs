//! milenage-av CLI
//!
//! Generates a 3G/UMTS authentication vector from a subscriber key K
//! and operator value OP, printed as JSON.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use milenage_av::generate_auth_vector;

#[derive(Parser, Debug)]
#[command(name = "milenage-av")]
#[command(author, version, about = "Generate a 3G/UMTS authentication vector", long_about = None)]
struct Args {
    /// Subscriber secret key K (32 hex characters)
    #[arg(short, long, value_name = "HEX")]
    key: String,

    /// Operator variant configuration field OP (32 hex characters)
    #[arg(short, long, value_name = "HEX")]
    op: String,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let vector = generate_auth_vector(&args.key, &args.op)
        .context("Failed to generate authentication vector")?;

    println!("{}", serde_json::to_string_pretty(&vector)?);
    Ok(())
}
