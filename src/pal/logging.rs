//! Logging bootstrap.
//!
//! Diagnostics go through `tracing` and are written to stderr so they never
//! mix with the prompt on stdout.
//!
//! # Environment Variables
//!
//! - `PAL_LOG`: filter directive (like `RUST_LOG`), e.g. `pal=debug`. When
//!   unset, the level from [`crate::config::PalConfig::log_level`] applies.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const LOG_ENV: &str = "PAL_LOG";

/// Builds the filter: `PAL_LOG` wins over `fallback`, and an unparsable
/// fallback degrades to `warn`.
pub fn build_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(fallback))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Installs the global subscriber. Later calls are no-ops.
pub fn init_logging(fallback: &str) {
    let _ = tracing_subscriber::registry()
        .with(build_filter(fallback))
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_logging("debug");
        init_logging("warn");
        tracing::debug!("still alive after a second init");
    }
}
