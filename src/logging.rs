//! Tracing initialization.
//! Builds a compact stderr subscriber with EnvFilter.
//!
//! Behavior:
//! - Log level comes from RUST_LOG, defaulting to `warn` so the stdout
//!   progress/completion lines stay clean for scripting.
//! - Diagnostics go to stderr; stdout is reserved for user-facing output.

use anyhow::{Result, anyhow};
use chrono::Local;
use std::fmt as stdfmt;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

/// Human-friendly timestamp formatter (DD/MM/YY HH:MM:SS)
struct LocalHumanTime;
impl FormatTime for LocalHumanTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> stdfmt::Result {
        let now = Local::now();
        write!(w, "{}", now.format("%d/%m/%y %H:%M:%S"))
    }
}

/// Initialize the global tracing subscriber.
pub fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalHumanTime)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("tracing init failed: {e}"))
}
