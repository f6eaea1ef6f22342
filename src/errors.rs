//! Typed error definitions for artibatch.
//! Provides a small set of well-known failure modes for better logs and tests.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors recovered entirely inside the driver layer: the usage line is
/// printed and the process exits with status 1. Never propagated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("missing required <artifacts-path> argument")]
    MissingArtifactsPath,
}

/// Failures surfaced by the batch processor. The driver reports the detail
/// and terminates; it never retries or partially handles these.
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error("artifacts path unavailable: {path}: {source}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("artifacts path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("failed to read artifact under {path}: {source}")]
    ReadArtifact {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteArtifact {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
