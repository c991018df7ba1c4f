// dqlint/src/main.rs

use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

use dqlint_core::application::run_validation;

#[derive(Parser)]
#[command(name = "dqlint")]
#[command(about = "Validates DQ check configurations before deployment", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the DQ check configuration file (JSON or YAML)
    config_file: PathBuf,

    /// Show detailed validation information
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG=debug dqlint ... overrides the --verbose default
    init_tracing(cli.verbose);
    debug!(file = %cli.config_file.display(), "CLI options parsed");

    let bar = "=".repeat(80);
    println!("{}", bar);
    println!("DQ CONFIGURATION VALIDATOR");
    println!("{}", bar);
    println!("File: {}", cli.config_file.display());
    println!();

    match run_validation(&cli.config_file) {
        Ok(report) => {
            print!("{}", report);
            if !report.passed() {
                // Exit with error code for CI/CD
                std::process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("💥 CRITICAL VALIDATION ERROR: {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
