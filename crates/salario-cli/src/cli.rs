//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use salario_domain::SalaryType;
use std::path::PathBuf;

/// Salario CLI - Classify salary mentions in forum posts.
#[derive(Debug, Parser)]
#[command(name = "salario")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "SALARIO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log every classification decision
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (bare values only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Annotate a posts document with salary records
    Analyze(AnalyzeArgs),

    /// Classify a single salary snippet
    Classify(ClassifyArgs),

    /// Aggregate statistics over a results document
    Stats(StatsArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// JSON array of posts to analyze
    #[arg(short, long)]
    pub input: PathBuf,

    /// Where to write the annotated posts
    #[arg(short, long, default_value = "resultados.json")]
    pub output: PathBuf,

    /// Where to write the run summary
    #[arg(short, long, default_value = "db.json")]
    pub summary: PathBuf,

    /// Also print the posts that carried a salary mention
    #[arg(long)]
    pub show: bool,
}

/// Arguments for the classify command.
#[derive(Debug, Parser)]
pub struct ClassifyArgs {
    /// Snippet text, e.g. `neto $ 80000 ars`
    #[arg(required = true, num_args = 1..)]
    pub snippet: Vec<String>,
}

/// Arguments for the stats command.
#[derive(Debug, Parser)]
pub struct StatsArgs {
    /// Results document written by `analyze`
    #[arg(short, long, default_value = "resultados.json")]
    pub input: PathBuf,

    /// Salary type the mean is computed over
    #[arg(short = 't', long = "type", value_enum, default_value = "gross")]
    pub salary_type: TypeArg,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration management actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file location
    Path,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Salary type argument.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum TypeArg {
    /// Before deductions
    Gross,
    /// After deductions
    Net,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<TypeArg> for SalaryType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Gross => SalaryType::Gross,
            TypeArg::Net => SalaryType::Net,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_command() {
        let cli = Cli::parse_from(["salario", "analyze", "--input", "posts.json"]);
        match cli.command {
            Command::Analyze(args) => {
                assert_eq!(args.input, PathBuf::from("posts.json"));
                assert_eq!(args.output, PathBuf::from("resultados.json"));
                assert_eq!(args.summary, PathBuf::from("db.json"));
                assert!(!args.show);
            }
            _ => panic!("Expected Analyze command"),
        }
    }

    #[test]
    fn test_classify_joins_words() {
        let cli = Cli::parse_from(["salario", "classify", "neto", "$", "80000", "ars"]);
        match cli.command {
            Command::Classify(args) => assert_eq!(args.snippet.join(" "), "neto $ 80000 ars"),
            _ => panic!("Expected Classify command"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from([
            "salario",
            "stats",
            "--type",
            "net",
            "--format",
            "json",
            "--no-color",
            "-v",
        ]);
        assert!(cli.no_color);
        assert!(cli.verbose);
        assert!(matches!(cli.format, Some(CliFormat::Json)));
        match cli.command {
            Command::Stats(args) => {
                assert_eq!(SalaryType::from(args.salary_type), SalaryType::Net)
            }
            _ => panic!("Expected Stats command"),
        }
    }

    #[test]
    fn test_config_init_force() {
        let cli = Cli::parse_from(["salario", "config", "init", "--force"]);
        assert!(matches!(
            cli.command,
            Command::Config(ConfigArgs {
                action: ConfigAction::Init { force: true }
            })
        ));
    }

    #[test]
    fn test_classify_requires_text() {
        assert!(Cli::try_parse_from(["salario", "classify"]).is_err());
    }
}
