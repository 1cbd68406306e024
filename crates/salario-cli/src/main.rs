//! Salario CLI - Command-line interface for the salary classification engine.

use anyhow::Context;
use clap::Parser;
use salario_cli::commands;
use salario_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config_path = Config::resolve_path(cli.config.as_deref())?;
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;

    // Determine output format
    let format = cli
        .format
        .map(Into::into)
        .unwrap_or(config.settings.format);

    // Determine color setting
    let color_enabled = !cli.no_color && config.settings.color;

    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Analyze(args) => commands::execute_analyze(args, &config, &formatter)?,
        Command::Classify(args) => commands::execute_classify(args, &config, &formatter)?,
        Command::Stats(args) => commands::execute_stats(args, &config, &formatter)?,
        Command::Config(args) => {
            commands::execute_config(args, &config, &config_path, &formatter)?
        }
    }

    Ok(())
}

/// Log to stderr so stdout stays machine-readable.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
