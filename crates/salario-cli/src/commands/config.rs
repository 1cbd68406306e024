//! Config command implementation.

use crate::cli::{ConfigAction, ConfigArgs};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use std::path::Path;

/// Execute the config command.
pub fn execute_config(
    args: ConfigArgs,
    config: &Config,
    path: &Path,
    formatter: &Formatter,
) -> Result<()> {
    match args.action {
        ConfigAction::Show => print!("{}", config.to_toml()?),
        ConfigAction::Path => println!("{}", path.display()),
        ConfigAction::Init { force } => init_config(path, force, formatter)?,
    }
    Ok(())
}

/// Write a default configuration file.
fn init_config(path: &Path, force: bool, formatter: &Formatter) -> Result<()> {
    if path.exists() && !force {
        return Err(CliError::InvalidInput(format!(
            "'{}' already exists, use --force to overwrite",
            path.display()
        )));
    }

    Config::default().save(path)?;
    println!(
        "{}",
        formatter.success(&format!("Wrote default configuration to {}", path.display()))
    );
    println!(
        "{}",
        formatter.info("Set [rates] usd and eur to convert foreign amounts in `stats`")
    );
    Ok(())
}
