//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Cortex tracing/logging system.
///
/// Reads the `CORTEX_LOG` environment variable for per-subsystem log
/// levels, e.g. `CORTEX_LOG=cortex=debug,cortex_decision=info`.
/// Falls back to `cortex=info` if `CORTEX_LOG` is not set or is invalid.
///
/// Idempotent; calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("CORTEX_LOG")
            .unwrap_or_else(|_| EnvFilter::new("cortex=info"));

        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true))
            .with(filter)
            .init();
    });
}
