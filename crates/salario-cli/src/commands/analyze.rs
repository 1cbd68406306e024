//! Analyze command implementation.

use crate::cli::AnalyzeArgs;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use salario_extractor::{
    load_posts, load_summary_or_default, save_records, save_summary, RecordAssembler, RunSummary,
};
use std::path::Path;
use tracing::info;

/// Execute the analyze command.
pub fn execute_analyze(args: AnalyzeArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let posts = load_posts(&args.input)?;
    if posts.is_empty() {
        return Err(CliError::InvalidInput(format!(
            "No posts in '{}'",
            args.input.display()
        )));
    }

    previous_run(&args.summary);

    let tagger = config.build_tagger()?;
    info!("Using the {} tagger", tagger.name());
    let assembler = RecordAssembler::new(tagger, config.extractor.clone())?;

    let context = assembler.annotate_all(posts);
    let summary = context.summary();

    save_records(&args.output, context.records())?;
    save_summary(&args.summary, &summary)?;

    if args.show {
        println!("{}", formatter.format_records(context.records())?);
    }
    println!("{}", formatter.format_summary(&summary)?);

    Ok(())
}

/// Report the run recorded in the summary document, if there was one.
fn previous_run(path: &Path) -> Option<RunSummary> {
    let summary = load_summary_or_default(path);
    summary.last_timestamp?;
    info!("Previous run: {}", summary.report());
    Some(summary)
}
