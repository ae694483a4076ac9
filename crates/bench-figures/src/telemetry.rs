// File: crates/bench-figures/src/telemetry.rs
// Summary: tracing subscriber setup for the figure binaries.

use anyhow::Context;
use tracing::{subscriber::set_global_default, Subscriber};
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter, Registry};

/// Compose an env-filtered, human-readable subscriber.
///
/// `RUST_LOG` wins over `default_filter` when set.
pub fn get_subscriber(default_filter: impl AsRef<str>) -> impl Subscriber + Send + Sync {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    Registry::default()
        .with(env_filter)
        .with(fmt::layer().with_target(false))
}

/// Register a subscriber as global default. Call once per process.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) -> anyhow::Result<()> {
    set_global_default(subscriber).context("failed to set tracing subscriber")
}
