//! Subcommand handlers
//!
//! Each handler performs one linear pass: read the inputs, extract the
//! version record, write the output. Any failure aborts the command.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use tracing::info;

use crate::ci::{RevisionSource, emit_commit_hash, github_output_path};
use crate::config::{ResourceMetadata, VERSION_SOURCE_READ_LIMIT};
use crate::output::{PropertiesPatcher, write_resource_script};
use crate::version::{VersionExtractor, VersionRecord, read_version_source};

/// Read `main_lua` (optionally truncated) and extract its version record
pub fn load_version(main_lua: &Path, read_limit: Option<usize>) -> anyhow::Result<VersionRecord> {
    let content = read_version_source(main_lua, read_limit)
        .with_context(|| format!("failed to read {}", main_lua.display()))?;
    let record = VersionExtractor::new()
        .extract(&content)
        .with_context(|| format!("failed to extract version from {}", main_lua.display()))?;
    info!(
        "Version {} ({}) from {}",
        record.textual(),
        record.version_integer(),
        main_lua.display()
    );
    Ok(record)
}

/// Generate the Windows resource script from the first 4096 characters of main.lua
pub fn create_rc(
    main_lua: &Path,
    output: &Path,
    metadata_path: Option<&Path>,
) -> anyhow::Result<()> {
    let record = load_version(main_lua, Some(VERSION_SOURCE_READ_LIMIT))?;
    let metadata = match metadata_path {
        Some(path) => ResourceMetadata::from_json_file(path)
            .with_context(|| format!("failed to load metadata from {}", path.display()))?,
        None => ResourceMetadata::default(),
    };

    write_resource_script(output, &record, &metadata)
        .with_context(|| format!("failed to write {}", output.display()))
}

/// Patch gradle.properties; the result goes to `output` or, without one, to `stdout`.
///
/// Both destinations receive ISO-8859-1 bytes, so non-ASCII characters of the
/// properties file are written to stdout as single Latin-1 bytes rather than
/// in the terminal's locale encoding.
pub fn replace_gradle_properties<W: Write>(
    main_lua: &Path,
    gradle_properties: &Path,
    output: Option<&Path>,
    stdout: &mut W,
) -> anyhow::Result<()> {
    let record = load_version(main_lua, None)?;
    let input = std::fs::read(gradle_properties)
        .with_context(|| format!("failed to read {}", gradle_properties.display()))?;

    let patcher = PropertiesPatcher::new();
    match output {
        Some(path) => {
            let mut file = std::fs::File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            patcher
                .patch_to(&input, &record, &mut file)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("Wrote patched properties to {}", path.display());
        }
        None => patcher
            .patch_to(&input, &record, stdout)
            .with_context(|| format!("failed to patch {}", gradle_properties.display()))?,
    }
    Ok(())
}

/// Publish the current revision to the GitHub Actions step output
pub fn gha_commit_hash<S, W>(source: &S, console: &mut W) -> anyhow::Result<()>
where
    S: RevisionSource + ?Sized,
    W: Write,
{
    let output_path = github_output_path()?;
    emit_commit_hash(source, &output_path, console)
        .with_context(|| format!("failed to emit commit to {}", output_path.display()))?;
    Ok(())
}

/// Print the version record as `key=value` lines or pretty JSON
pub fn extract_version<W: Write>(
    main_lua: &Path,
    read_limit: Option<usize>,
    json: bool,
    stdout: &mut W,
) -> anyhow::Result<()> {
    let record = load_version(main_lua, read_limit)?;
    if json {
        serde_json::to_writer_pretty(&mut *stdout, &record)?;
        writeln!(stdout)?;
    } else {
        writeln!(stdout, "{}", record)?;
    }
    Ok(())
}
