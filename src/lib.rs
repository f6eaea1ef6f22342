//! Core library for `artibatch`.
//!
//! Contains the driver core: argument resolution with output-path
//! defaulting, the batch-processor seam, and the console reporting around
//! a single awaited batch run. The CLI binary is a thin wrapper; embedders
//! should call [`driver::drive`] with their own
//! [`processor::ArtifactProcessor`] implementation.

pub mod driver;
pub mod errors;
pub mod output;
pub mod processor;

pub use driver::{ResolvedPaths, USAGE, drive};
pub use errors::{ProcessError, UsageError};
pub use processor::{ArtifactProcessor, FsArtifactProcessor};
