//! CI metadata layer
//!
//! Publishes the current git revision as a GitHub Actions step output.
//!
//! # Modules
//!
//! - [`emitter`]: Prints the revision and appends it to `GITHUB_OUTPUT`
//! - [`error`]: Error type for CI metadata emission
//! - [`revision`]: `RevisionSource` trait and the git-backed implementation

pub mod emitter;
pub mod error;
pub mod revision;

pub use emitter::{emit_commit_hash, github_output_path};
pub use error::CiError;
pub use revision::{GitRevision, RevisionSource};
