//! Tracing setup for the binary and tests.
//!
//! The client itself only emits through the `tracing` macros; wiring a
//! subscriber is the embedding program's job, and this is the default wiring.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize a compact stderr subscriber. Defaults to `info` when RUST_LOG
/// is unset. Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
