//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use salario_domain::{AnnotatedPost, Currency, SalaryTriple, Token};
use salario_extractor::{RunSummary, SalaryStats};
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the annotated posts that carry a salary mention.
    pub fn format_records(&self, records: &[AnnotatedPost]) -> Result<String> {
        let mentions: Vec<&AnnotatedPost> =
            records.iter().filter(|r| r.record.has_mention()).collect();

        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&mentions)?),
            OutputFormat::Quiet => Ok(mentions
                .iter()
                .map(|r| r.post.post_number.to_string())
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if mentions.is_empty() {
                    return Ok(self.colorize("No salary mentions found.", "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["#", "User", "Snippet", "Type", "Currency", "Amount"]);
                for annotated in mentions {
                    let record = &annotated.record;
                    builder.push_record([
                        annotated.post.post_number.to_string(),
                        annotated.post.username.clone(),
                        record.selected_text.clone().unwrap_or_default(),
                        or_dash(record.salary_type),
                        or_dash(record.currency),
                        record.amount.map(format_amount).unwrap_or_else(|| "-".to_string()),
                    ]);
                }
                Ok(self.table(builder))
            }
        }
    }

    /// Format the tokens of a snippet and the triple they classify to.
    pub fn format_classification(&self, tokens: &[Token], triple: &SalaryTriple) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "tokens": tokens,
                "type": triple.salary_type,
                "currency": triple.currency,
                "amount": triple.amount,
            }))?),
            OutputFormat::Quiet => Ok(format!(
                "{} {} {}",
                or_dash(triple.salary_type),
                or_dash(triple.currency),
                triple.amount.map(|a| a.to_string()).unwrap_or_else(|| "-".to_string())
            )),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Text", "Lemma", "POS", "Kept"]);
                for token in tokens {
                    builder.push_record([
                        token.surface_text.clone(),
                        token.lemma.clone(),
                        token.part_of_speech.to_string(),
                        if token.is_discarded() { "no" } else { "yes" }.to_string(),
                    ]);
                }

                let verdict = format!(
                    "Type: {}  Currency: {}  Amount: {}",
                    or_dash(triple.salary_type),
                    or_dash(triple.currency),
                    triple.amount.map(format_amount).unwrap_or_else(|| "-".to_string())
                );
                let verdict = if triple.is_complete() {
                    self.success(&verdict)
                } else {
                    self.warning(&verdict)
                };
                Ok(format!("{}\n{}", self.table(builder), verdict))
            }
        }
    }

    /// Format aggregate statistics.
    pub fn format_stats(&self, stats: &SalaryStats) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "type": stats.salary_type,
                "with_amount": stats.with_amount,
                "by_currency": Currency::ALL
                    .iter()
                    .map(|c| (c.code(), stats.count_in(*c)))
                    .collect::<std::collections::BTreeMap<_, _>>(),
                "sample_size": stats.sample_size,
                "unconverted": stats.unconverted,
                "mean_local": stats.mean_local,
                "mean_usd": stats.mean_usd,
            }))?),
            OutputFormat::Quiet => Ok(stats
                .mean_local
                .map(|m| format!("{:.2}", m))
                .unwrap_or_else(|| "-".to_string())),
            OutputFormat::Table => {
                let mut builder = Builder::default();
                builder.push_record(["Metric", "Value"]);
                builder.push_record(["Posts with amount".to_string(), stats.with_amount.to_string()]);
                for currency in Currency::ALL {
                    builder.push_record([
                        format!("  in {}", currency),
                        stats.count_in(currency).to_string(),
                    ]);
                }
                builder.push_record([
                    format!("{} sample", stats.salary_type),
                    stats.sample_size.to_string(),
                ]);
                builder.push_record(["Left out (no rate)".to_string(), stats.unconverted.to_string()]);
                builder.push_record([
                    format!("Mean {} ({})", stats.salary_type, Currency::LOCAL),
                    stats.mean_local.map(format_amount).unwrap_or_else(|| "-".to_string()),
                ]);
                builder.push_record([
                    format!("Mean {} (USD)", stats.salary_type),
                    stats.mean_usd.map(format_amount).unwrap_or_else(|| "-".to_string()),
                ]);

                let mut output = self.table(builder);
                if stats.unconverted > 0 {
                    output.push('\n');
                    output.push_str(&self.warning(&format!(
                        "{} post(s) left out: set [rates] in the config file",
                        stats.unconverted
                    )));
                }
                Ok(output)
            }
        }
    }

    /// Format a run summary.
    pub fn format_summary(&self, summary: &RunSummary) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(summary)?),
            OutputFormat::Quiet => Ok(summary.salaries_posts.to_string()),
            OutputFormat::Table => Ok(self.success(&summary.report())),
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn table(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            _ => text.to_string(),
        }
    }
}

fn or_dash<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Format an amount with two decimals and thousands separators.
pub fn format_amount(amount: f64) -> String {
    let fixed = format!("{:.2}", amount);
    let (whole, decimals) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, c) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("{}.{}", grouped, decimals)
}
