use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use ci_build_status::config::EXIT_ERROR;
use ci_build_status::prelude::*;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ci-build-status")]
#[command(about = "Print the overall verdict of a CI build status report", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the build report JSON file
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "ci_build_status=debug"
    } else {
        "ci_build_status=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            init_tracing(false);
            tracing::error!(error = %e, "Invalid configuration");
            return ExitCode::from(EXIT_ERROR);
        }
    };

    init_tracing(config.verbose);

    match run(&cli, &config) {
        Ok(verdict) => {
            println!("{}", verdict);
            ExitCode::from(config.exit_mode.exit_code(verdict))
        }
        Err(e) => {
            let message = format!("{:#}", e);
            tracing::error!(error = %message, "Failed to resolve build status");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

#[tracing::instrument(skip_all, fields(file = %cli.file.display(), exit_mode = %config.exit_mode))]
fn run(cli: &Cli, config: &Config) -> anyhow::Result<Verdict> {
    let report = ReportLoader::load_file(&cli.file)?;
    let resolution = StatusResolver::resolve(&report)
        .with_context(|| format!("Invalid build report: {}", cli.file.display()))?;

    Ok(resolution.verdict)
}
