//! Driver core: argument resolution and the single batch invocation.
//!
//! Resolution is a pure function of the two positional values captured at
//! startup, so the defaulting rule is testable without touching process
//! globals. `drive` owns the console contract around the batch call: the
//! progress line before, the completion or failure line after.

use std::path::PathBuf;

use tracing::{error, info};

use crate::errors::{ProcessError, UsageError};
use crate::output as out;
use crate::processor::ArtifactProcessor;

/// Usage line printed when no artifacts path was supplied.
pub const USAGE: &str = "Usage: <artifacts-path> <output-path>?";

/// The two locations a batch run operates on, fixed at startup.
///
/// Invariant: once constructed, `output_path` is always set; it is either
/// the explicit second positional or a copy of `artifacts_path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub artifacts_path: PathBuf,
    pub output_path: PathBuf,
}

impl ResolvedPaths {
    /// Validate and default the positional arguments.
    ///
    /// A missing artifacts path is a [`UsageError`]; a missing output path
    /// defaults to the artifacts path.
    pub fn from_args(
        artifacts: Option<PathBuf>,
        output: Option<PathBuf>,
    ) -> Result<Self, UsageError> {
        let artifacts_path = artifacts.ok_or(UsageError::MissingArtifactsPath)?;
        let output_path = output.unwrap_or_else(|| artifacts_path.clone());
        Ok(Self {
            artifacts_path,
            output_path,
        })
    }
}

/// Run one batch over `paths` and report the outcome on the console.
///
/// Invokes the processor exactly once and awaits it to settlement; no
/// retries, no timeout. Success prints `Complete!` to stdout; failure
/// prints the detail to stderr and returns the error so the caller can map
/// it to a non-zero exit status.
pub async fn drive<P>(paths: &ResolvedPaths, processor: &P) -> Result<(), ProcessError>
where
    P: ArtifactProcessor + ?Sized,
{
    out::print_user(&format!(
        "Processing artifacts in {}...",
        paths.artifacts_path.display()
    ));
    info!(
        artifacts = %paths.artifacts_path.display(),
        output = %paths.output_path.display(),
        "starting batch run"
    );

    match processor
        .process_all(&paths.artifacts_path, &paths.output_path)
        .await
    {
        Ok(()) => {
            out::print_user("Complete!");
            Ok(())
        }
        Err(e) => {
            out::print_error(&failure_report(&e));
            error!(error = %e, "batch run failed");
            Err(e)
        }
    }
}

/// Failure line printed to stderr when the batch run fails.
/// The double space after the colon is intentional.
fn failure_report(detail: &ProcessError) -> String {
    format!("Unable to process:  {detail}")
}
