use melodex_config::{ConfigBackend, ConfigError, TomlConfigBackend};
use melodex_core::DisplayStyle;
use serde::{Deserialize, Serialize};

/// `[logging]` section of `melodex.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
  /// `EnvFilter` directives, e.g. `"info,melodex_core=debug"`.
  pub filter: String,
  pub display_target: bool,
}

impl Default for LoggingConfig {
  fn default() -> Self {
    Self { filter: "info".to_string(), display_target: false }
  }
}

/// Everything the runner reads from the config file.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
  pub display: DisplayStyle,
  pub logging: LoggingConfig,
  /// The file did not exist and was written with defaults during this load.
  pub wrote_defaults: bool,
}

impl Settings {
  pub fn load() -> Result<Self, ConfigError> {
    Self::load_from(melodex_config::config_backend()?)
  }

  /// Reads both sections, falling back to defaults.
  ///
  /// An existing file is never rewritten; a missing one is created with the
  /// defaults so users can see every available key.
  pub fn load_from(backend: &TomlConfigBackend) -> Result<Self, ConfigError> {
    let display: DisplayStyle = backend.load_section_with_default("display")?;
    let logging: LoggingConfig = backend.load_section_with_default("logging")?;

    let wrote_defaults = !backend.file_exists();
    if wrote_defaults {
      backend.save_section("display", &display)?;
      backend.save_section("logging", &logging)?;
    }

    Ok(Self { display, logging, wrote_defaults })
  }
}
