//! Logging setup
//!
//! `tracing` events go to stderr so stdout stays clean for the dashboard.
//! `RUST_LOG` overrides the default level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_LEVEL: &str = "info";

pub fn init() {
  init_with_level(DEFAULT_LEVEL);
}

/// Install the global subscriber. Does nothing if one is already set.
pub fn init_with_level(level: &str) {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

  let _ = tracing_subscriber::registry()
    .with(filter)
    .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
    .try_init();
}
