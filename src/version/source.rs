//! Reading the version source file

use std::path::Path;

use tracing::debug;

use crate::version::error::ExtractError;

/// Read main.lua as UTF-8 with `\r\n` and lone `\r` turned into `\n`.
///
/// With `read_limit` set, only the first `read_limit` characters (counted
/// after line ending conversion) are kept, so tags placed after that point
/// are treated as missing.
pub fn read_version_source(path: &Path, read_limit: Option<usize>) -> Result<String, ExtractError> {
    let raw = std::fs::read_to_string(path)?;
    debug!("Read {} bytes from {:?}", raw.len(), path);
    let content = normalize_newlines(&raw);

    Ok(match read_limit {
        Some(limit) => truncate_chars(content, limit),
        None => content,
    })
}

fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

fn truncate_chars(mut content: String, limit: usize) -> String {
    if let Some((index, _)) = content.char_indices().nth(limit) {
        content.truncate(index);
    }
    content
}
