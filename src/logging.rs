use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter (e.g. `debug`, `beacon_server=trace`).
pub const LOG_ENV: &str = "BEACON_LOG";

/// Build the filter from `BEACON_LOG`, defaulting to `info`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the process-wide subscriber.
///
/// Only `main` calls this; library code just emits events. Output goes to
/// stderr so help text on stdout stays clean.
pub fn init_tracing() {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(env_filter())
        .with(stderr_layer)
        .init();
}
