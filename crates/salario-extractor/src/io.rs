//! Reading posts and writing results as JSON documents

use crate::error::ExtractorError;
use crate::summary::RunSummary;
use salario_domain::{AnnotatedPost, RawPost};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

/// Load the posts handed over by the scraping collaborator
pub fn load_posts(path: impl AsRef<Path>) -> Result<Vec<RawPost>, ExtractorError> {
    read_json(path.as_ref())
}

/// Load a previously written results document
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<AnnotatedPost>, ExtractorError> {
    read_json(path.as_ref())
}

/// Write the results document
pub fn save_records(path: impl AsRef<Path>, records: &[AnnotatedPost]) -> Result<(), ExtractorError> {
    write_json(path.as_ref(), records)
}

/// Write the run summary document
pub fn save_summary(path: impl AsRef<Path>, summary: &RunSummary) -> Result<(), ExtractorError> {
    write_json(path.as_ref(), summary)
}

/// Load the run summary, falling back to an empty one when the file is
/// missing or unreadable
pub fn load_summary_or_default(path: impl AsRef<Path>) -> RunSummary {
    let path = path.as_ref();
    match read_json(path) {
        Ok(summary) => summary,
        Err(e) => {
            info!("No previous summary at '{}' ({}), starting fresh", path.display(), e);
            RunSummary::default()
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ExtractorError> {
    info!("Reading '{}'", path.display());
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), ExtractorError> {
    info!("Saving '{}'", path.display());
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer)?;

    fs::write(path, buffer)?;
    Ok(())
}
