//! Stats command implementation.

use crate::cli::StatsArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use salario_extractor::{load_records, SalaryStats};

/// Execute the stats command.
pub fn execute_stats(args: StatsArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let records = load_records(&args.input)?;
    let stats = SalaryStats::compute(&records, args.salary_type.into(), &config.rates);

    println!("{}", formatter.format_stats(&stats)?);
    Ok(())
}
