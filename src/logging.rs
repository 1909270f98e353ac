//! `tracing` setup for the binaries.
//!
//! Events go to stderr so that stdout stays free for command output.
//! `RUST_LOG` overrides the default filter.

use std::sync::OnceLock;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INITIALISED: OnceLock<()> = OnceLock::new();

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logging(default_filter: &str) {
    INITIALISED.get_or_init(|| {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

        // Another subscriber may already be installed (e.g. by a test harness).
        let _ = tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init();
    });
}
