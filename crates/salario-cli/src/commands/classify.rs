//! Classify command implementation.

use crate::cli::ClassifyArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use salario_domain::Tagger;
use salario_extractor::Classifier;

/// Execute the classify command.
///
/// The snippet is classified as the extractor would see it: upper-cased and
/// trimmed, without looking for the trigger phrase.
pub fn execute_classify(args: ClassifyArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let snippet = args.snippet.join(" ").trim().to_uppercase();

    let classifier = Classifier::new(config.build_tagger()?, &config.extractor);
    let tokens = classifier.tagger().tag(&snippet)?;
    let triple = classifier.classify(&tokens);

    println!("{}", formatter.format_classification(&tokens, &triple)?);
    Ok(())
}
