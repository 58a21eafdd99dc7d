// SPDX-License-Identifier: MPL-2.0
//! Logging setup.
//!
//! Logs go to stderr through a `tracing-subscriber` fmt layer. The filter is
//! read from `ICED_OVERLAYS_LOG` using `EnvFilter` directive syntax, e.g.
//! `ICED_OVERLAYS_LOG=iced_overlays=debug`. Without it, `info` and above are
//! shown.

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

/// Environment variable holding the log filter directives.
pub const ENV_LOG_FILTER: &str = "ICED_OVERLAYS_LOG";

const DEFAULT_FILTER: &str = "info";

/// Builds the filter from `ICED_OVERLAYS_LOG`, falling back to `info` when it
/// is unset or unparsable.
#[must_use]
pub fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_env(ENV_LOG_FILTER).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global subscriber.
///
/// Does nothing if a subscriber is already installed (e.g. by an embedding
/// host).
pub fn init() {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_span_events(FmtSpan::NONE);

    let installed = tracing_subscriber::registry()
        .with(stderr_layer)
        .with(filter_from_env())
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(filter_env = ENV_LOG_FILTER, "logging initialized");
    }
}
