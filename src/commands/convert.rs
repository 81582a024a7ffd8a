//! Word list conversion command
//!
//! Turns a CSV file or any importable JSON document into a `words.json`
//! base list in the interchange format.

use crate::persistence::write_json_atomic;
use crate::wordlists::{ImportDocument, parse_csv, validate};
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::{Path, PathBuf};

/// Default output file name
pub const DEFAULT_OUTPUT: &str = "words.json";

/// Input to convert
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConvertSource {
    Csv(PathBuf),
    Json(PathBuf),
}

impl ConvertSource {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::Csv(path) | Self::Json(path) => path,
        }
    }
}

/// Result of a conversion
pub struct ConvertResult {
    pub found: usize,
    pub written: usize,
    pub warnings: Vec<String>,
    pub output: PathBuf,
}

/// Convert `source` and write the valid entries to `output`
///
/// # Errors
///
/// Returns an error if:
/// - The input cannot be read or is not a supported document
/// - No valid entries remain after validation
/// - The output cannot be written
pub fn run_convert(source: &ConvertSource, output: &Path) -> Result<ConvertResult> {
    let path = source.path();
    let content =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

    let candidates = match source {
        ConvertSource::Csv(_) => parse_csv(&content),
        ConvertSource::Json(_) => ImportDocument::parse(&content)
            .with_context(|| format!("parsing {}", path.display()))?
            .into_entries(),
    };

    let found = candidates.len();
    let validation = validate(candidates);

    if validation.valid.is_empty() {
        bail!("no valid words found in {}", path.display());
    }

    write_json_atomic(output, &validation.valid)
        .with_context(|| format!("writing {}", output.display()))?;

    Ok(ConvertResult {
        found,
        written: validation.valid.len(),
        warnings: validation.warnings,
        output: output.to_path_buf(),
    })
}
