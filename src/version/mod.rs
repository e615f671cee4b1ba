//! Version extraction layer
//!
//! Reads main.lua and turns its version tags into a [`VersionRecord`].
//!
//! # Modules
//!
//! - [`error`]: Error type for extraction failures
//! - [`extract`]: Regex-based tag extractor
//! - [`record`]: The version record and its digit decomposition
//! - [`source`]: Reading the (optionally truncated) source file

pub mod error;
pub mod extract;
pub mod record;
pub mod source;

pub use error::ExtractError;
pub use extract::VersionExtractor;
pub use record::VersionRecord;
pub use source::read_version_source;
