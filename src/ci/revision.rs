//! Revision source trait and its git implementation

#[cfg(test)]
use mockall::automock;

use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::ci::error::CiError;

/// Trait for looking up the revision identifier of the checked out source
#[cfg_attr(test, automock)]
pub trait RevisionSource {
    /// Returns the identifier of the current revision (e.g. a commit hash)
    fn current_revision(&self) -> Result<String, CiError>;
}

/// Revision source backed by `git rev-parse HEAD`
pub struct GitRevision {
    program: String,
    working_dir: Option<PathBuf>,
}

impl GitRevision {
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Use a specific git executable
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            working_dir: None,
        }
    }

    /// Run git inside `dir` instead of the current directory
    pub fn in_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }
}

impl Default for GitRevision {
    fn default() -> Self {
        Self::new()
    }
}

impl RevisionSource for GitRevision {
    fn current_revision(&self) -> Result<String, CiError> {
        debug!("Running {} rev-parse HEAD", self.program);
        let mut command = Command::new(&self.program);
        command.args(["rev-parse", "HEAD"]);
        if let Some(dir) = &self.working_dir {
            command.current_dir(dir);
        }
        let output = command
            .output()
            .map_err(|e| CiError::Tool(format!("failed to run {}: {}", self.program, e)))?;

        if !output.status.success() {
            return Err(CiError::Tool(format!(
                "{} rev-parse HEAD exited with {}: {}",
                self.program,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let stdout = String::from_utf8(output.stdout)
            .map_err(|e| CiError::Tool(format!("non UTF-8 output: {}", e)))?;
        let revision = stdout.trim();
        if revision.is_empty() {
            return Err(CiError::Tool("empty revision".to_string()));
        }

        Ok(revision.to_string())
    }
}
