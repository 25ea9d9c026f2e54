//! Tracing setup
//!
//! Events go to stderr so command output on stdout stays clean for piping
//! (`balance --json`).

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::settings::Settings;

/// Environment variable holding a tracing filter directive
pub const LOG_ENV: &str = "ALLOWANCE_LOG";

/// Build the filter: `ALLOWANCE_LOG`, then the configured level, then `warn`
pub fn build_filter(settings: &Settings) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(&settings.log_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing(settings: &Settings) {
    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .with(build_filter(settings))
        .try_init();
}
