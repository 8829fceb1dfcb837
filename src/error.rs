use std::io;

use thiserror::Error;

/// Prefix for every diagnostic written to the error stream.
pub const DIAGNOSTIC_PREFIX: &str = "mlsh";

#[derive(Error, Debug)]
pub enum ShellError {
    #[error("allocation error")]
    Allocation,

    #[error("expected argument to \"cd\"")]
    MissingArgument,

    #[error("{0}")]
    DirectoryChange(io::Error),

    #[error("{0}")]
    Spawn(io::Error),

    #[error("{program}: {source}")]
    Exec { program: String, source: io::Error },

    #[error("{0}")]
    Io(#[from] io::Error),
}

impl ShellError {
    /// Only storage exhaustion brings the whole program down.
    pub fn is_fatal(&self) -> bool {
        return matches!(self, ShellError::Allocation);
    }

    pub fn diagnostic(&self) -> String {
        return format!("{}: {}", DIAGNOSTIC_PREFIX, self);
    }
}
