//! Application orchestrator.
//! Initializes logging, resolves the artifact/output paths, runs the batch
//! processor once, and maps the outcome to the process exit status.

use std::process::ExitCode;

use artibatch::output as out;
use artibatch::{FsArtifactProcessor, ResolvedPaths, USAGE, UsageError, drive};
use tracing::debug;

use crate::cli::Args;
use crate::logging::init_tracing;

/// Run the CLI application.
///
/// Exit status: 1 when the artifacts path is missing or the batch run
/// fails, 0 when it completes.
pub async fn run(args: Args) -> ExitCode {
    if let Err(e) = init_tracing() {
        out::print_error(&format!("Failed to initialize logging: {e}"));
        return ExitCode::FAILURE;
    }

    let paths = match ResolvedPaths::from_args(args.artifacts_path, args.output_path) {
        Ok(paths) => paths,
        Err(UsageError::MissingArtifactsPath) => {
            out::print_user(USAGE);
            return ExitCode::from(1);
        }
    };

    debug!(?paths, "starting artibatch");

    let processor = FsArtifactProcessor::new();
    match drive(&paths, &processor).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}
