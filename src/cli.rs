//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - Both positionals are optional at the clap level; the missing
//!   artifacts-path case is handled by the driver so it can print the
//!   exact usage line and exit with status 1 (clap would exit 2).

use clap::{Parser, ValueHint};
use std::path::PathBuf;

/// CLI wrapper for the artibatch library.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Batch-process artifacts from a directory tree"
)]
pub struct Args {
    /// Directory to read artifacts from.
    #[arg(value_name = "ARTIFACTS_PATH", value_hint = ValueHint::DirPath)]
    pub artifacts_path: Option<PathBuf>,

    /// Directory to write processed results to. Defaults to ARTIFACTS_PATH.
    #[arg(value_name = "OUTPUT_PATH", value_hint = ValueHint::DirPath)]
    pub output_path: Option<PathBuf>,
}

pub fn parse() -> Args {
    Args::parse()
}
