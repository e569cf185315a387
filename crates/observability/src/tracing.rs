//! Tracing/logging initialization.

use std::io::Write;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Initialize tracing/logging for the process, writing to stderr.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// Initialize tracing with an explicit writer.
///
/// The terminal shell owns the screen, so it routes diagnostics to a log
/// file instead of stderr. Safe to call multiple times.
pub fn init_with_writer<W>(writer: W)
where
    W: Write + Send + 'static,
{
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(Mutex::new(writer))
        .try_init();
}
