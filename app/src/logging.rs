use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::LoggingConfig;

/// Installs the global `tracing` subscriber. Call once, before any event is emitted.
///
/// `RUST_LOG` wins over the `[logging] filter` value from the config file.
pub fn init(config: &LoggingConfig) -> Result<()> {
  let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
  let directives = select_directives(&config.filter, env.as_deref());
  let filter = EnvFilter::try_new(directives).with_context(|| format!("invalid log filter: {directives}"))?;

  // Logs go to stderr so stdout only carries the catalog listing.
  tracing_subscriber::registry()
    .with(filter)
    .with(fmt::layer().with_target(config.display_target).with_writer(std::io::stderr))
    .try_init()
    .context("failed to initialize logging")
}

fn select_directives<'a>(configured: &'a str, env: Option<&'a str>) -> &'a str {
  match env.map(str::trim) {
    Some(v) if !v.is_empty() => v,
    _ => configured,
  }
}
