// src/log.rs
//
// stderr subscriber for the `logf!` / `logd!` / `loge!` macros.
// Timestamps are elapsed time since start, like a stopwatch.

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::consts::DEFAULT_LOG_FILTER;

/// Install the global subscriber. Safe to call more than once;
/// only the first call wins.
pub fn init() {
    let env = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_timer(fmt::time::uptime())
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
