//! GitHub Actions step output emitter

use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::ci::error::CiError;
use crate::ci::revision::RevisionSource;
use crate::config::{COMMIT_OUTPUT_KEY, GITHUB_OUTPUT_ENV};

/// Returns the step output file named by `GITHUB_OUTPUT`.
pub fn github_output_path() -> Result<PathBuf, CiError> {
    github_output_path_with_env(std::env::var_os(GITHUB_OUTPUT_ENV).map(PathBuf::from))
}

fn github_output_path_with_env(value: Option<PathBuf>) -> Result<PathBuf, CiError> {
    value
        .filter(|path| !path.as_os_str().is_empty())
        .ok_or(CiError::MissingEnv(GITHUB_OUTPUT_ENV))
}

/// Look up the current revision, print it to `console` and append
/// `commit=<revision>` to the step output file.
///
/// Nothing is printed or written when the revision lookup fails.
pub fn emit_commit_hash<S, W>(
    source: &S,
    output_path: &Path,
    console: &mut W,
) -> Result<String, CiError>
where
    S: RevisionSource + ?Sized,
    W: Write,
{
    let commit = source.current_revision()?;
    writeln!(console, "Commit: {}", commit)?;

    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(output_path)?;
    writeln!(file, "{}={}", COMMIT_OUTPUT_KEY, commit)?;

    info!("Appended {}={} to {:?}", COMMIT_OUTPUT_KEY, commit, output_path);
    Ok(commit)
}
