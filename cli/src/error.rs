//! Typed error taxonomy carrying the stable exit codes of the CLI surface.
//!
//! All variants implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator; `main` downcasts back to select the exit code.

use std::path::PathBuf;

use thiserror::Error;

/// Terminal failures of a playpen run. None are retried; each is reported
/// once to stderr and maps to a stable exit code via [`Error::exit_code`].
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed or stray flag usage, or an unknown flag.
    #[error("{0}")]
    BadArgument(String),

    /// No playbook directory was supplied, or a required directory is
    /// absent on disk.
    #[error("{0}")]
    MissingDirectory(String),

    /// A staging copy operation failed. The path names the offending
    /// source or destination.
    #[error("failed to copy {path}: {source}")]
    Copy {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The harness home directory is gone or inaccessible.
    #[error("cannot enter {path}: {source}")]
    Directory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Stable exit code for this failure.
    ///
    /// `0` success, `2` bad argument, `3` missing directory (including a
    /// harness home that vanished), `4` copy failure. Orchestration
    /// failures have no variant here and exit `1`.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::BadArgument(_) => 2,
            Error::MissingDirectory(_) | Error::Directory { .. } => 3,
            Error::Copy { .. } => 4,
        }
    }
}
