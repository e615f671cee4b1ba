//! Version record extracted from main.lua

use std::fmt;

use serde::Serialize;

const MAJOR_WEIGHT: u64 = 1_000_000;
const MINOR_WEIGHT: u64 = 10_000;
const PATCH_WEIGHT: u64 = 100;

/// Version information of a single build.
///
/// `major`, `minor` and `patch` are always derived from `version_integer`,
/// which is packed as `MAJOR*1_000_000 + MINOR*10_000 + PATCH*100 + reserved`.
/// Each component keeps a single decimal digit, so larger values wrap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionRecord {
    version_integer: u64,
    major: u64,
    minor: u64,
    patch: u64,
    textual: String,
    codename: String,
}

impl VersionRecord {
    pub fn new(
        version_integer: u64,
        textual: impl Into<String>,
        codename: impl Into<String>,
    ) -> Self {
        Self {
            version_integer,
            major: version_integer / MAJOR_WEIGHT % 10,
            minor: version_integer / MINOR_WEIGHT % 10,
            patch: version_integer / PATCH_WEIGHT % 10,
            textual: textual.into(),
            codename: codename.into(),
        }
    }

    pub fn version_integer(&self) -> u64 {
        self.version_integer
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> u64 {
        self.patch
    }

    /// Human-readable version, e.g. "4.0.0-beta2"
    pub fn textual(&self) -> &str {
        &self.textual
    }

    /// Release codename, empty when main.lua has none
    pub fn codename(&self) -> &str {
        &self.codename
    }

    /// Comma separated `major,minor,patch,0` as used by VERSIONINFO
    pub fn file_version(&self) -> String {
        format!("{},{},{},0", self.major, self.minor, self.patch)
    }
}

impl fmt::Display for VersionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "version_integer={}", self.version_integer)?;
        writeln!(f, "major={}", self.major)?;
        writeln!(f, "minor={}", self.minor)?;
        writeln!(f, "patch={}", self.patch)?;
        writeln!(f, "textual={}", self.textual)?;
        write!(f, "codename={}", self.codename)
    }
}
