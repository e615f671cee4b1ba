//! gradle.properties patcher
//!
//! Rewrites the Android version lines of a key=value file:
//! - `app.version_code=<digits>` becomes `app.version_code=<version integer>`
//! - `app.version_name=<anything>` becomes `app.version_name=<textual version>`
//!
//! Every other line is kept as is. The file is ISO-8859-1 encoded, so each byte
//! maps to exactly one character and untouched lines survive byte-for-byte.

use std::io::Write;

use regex::Regex;
use tracing::debug;

use crate::config::{VERSION_CODE_KEY, VERSION_NAME_KEY};
use crate::output::error::PatchError;
use crate::version::VersionRecord;

/// Patcher for the version lines of a properties file
pub struct PropertiesPatcher {
    version_code_key: String,
    version_name_key: String,
    /// Regex for `<code key>=<digits>`
    version_code_re: Regex,
    /// Regex for `<name key>=<non-empty value>`
    version_name_re: Regex,
}

impl PropertiesPatcher {
    pub fn new() -> Self {
        Self::with_keys(VERSION_CODE_KEY, VERSION_NAME_KEY)
    }

    /// Patcher for custom version code and version name keys
    pub fn with_keys(version_code_key: &str, version_name_key: &str) -> Self {
        Self {
            version_code_key: version_code_key.to_string(),
            version_name_key: version_name_key.to_string(),
            version_code_re: Regex::new(&format!("^{}=[0-9]+$", regex::escape(version_code_key)))
                .unwrap(),
            version_name_re: Regex::new(&format!("^{}=.+$", regex::escape(version_name_key)))
                .unwrap(),
        }
    }

    /// Patch `content` with the values of `record`.
    ///
    /// Lines are rejoined with `\n` regardless of their original terminator,
    /// and the result has no trailing newline.
    pub fn patch(&self, content: &str, record: &VersionRecord) -> String {
        let mut replaced = 0;
        let lines: Vec<String> = split_lines(content)
            .into_iter()
            .map(|line| {
                if self.version_code_re.is_match(line) {
                    replaced += 1;
                    format!("{}={}", self.version_code_key, record.version_integer())
                } else if self.version_name_re.is_match(line) {
                    replaced += 1;
                    format!("{}={}", self.version_name_key, record.textual())
                } else {
                    line.to_string()
                }
            })
            .collect();

        debug!("Patched {} of {} lines", replaced, lines.len());
        lines.join("\n")
    }

    /// Patch ISO-8859-1 encoded `input` and return the encoded result.
    pub fn patch_bytes(&self, input: &[u8], record: &VersionRecord) -> Result<Vec<u8>, PatchError> {
        let patched = self.patch(&decode_latin1(input), record);
        encode_latin1(&patched)
    }

    /// Patch `input` and write the encoded result to `writer`.
    pub fn patch_to<W: Write>(
        &self,
        input: &[u8],
        record: &VersionRecord,
        writer: &mut W,
    ) -> Result<(), PatchError> {
        let patched = self.patch_bytes(input, record)?;
        writer.write_all(&patched)?;
        writer.flush()?;
        Ok(())
    }
}

impl Default for PropertiesPatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Split on `\n`, `\r\n` or a lone `\r`, dropping the terminators.
/// A terminator at the very end does not produce an extra empty line.
fn split_lines(content: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let bytes = content.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&content[start..i]);
                start = i + 1;
            }
            b'\r' => {
                lines.push(&content[start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }

    if start < content.len() {
        lines.push(&content[start..]);
    }
    lines
}

fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

fn encode_latin1(text: &str) -> Result<Vec<u8>, PatchError> {
    let mut line = 1;
    text.chars()
        .map(|c| {
            if c == '\n' {
                line += 1;
            }
            u8::try_from(c).map_err(|_| PatchError::Unencodable { character: c, line })
        })
        .collect()
}
