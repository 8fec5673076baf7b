mod backend;
mod error;
mod io;
mod paths;

pub use backend::{ConfigBackend, TomlConfigBackend};
pub use error::ConfigError;
pub use paths::{BASE_DIR_ENV, MelodexPaths};

use once_cell::sync::OnceCell;

static PATHS: OnceCell<MelodexPaths> = OnceCell::new();
static CONFIG_BACKEND: OnceCell<TomlConfigBackend> = OnceCell::new();

/// Rutas del proceso (portable vía `MELODEX_BASE_DIR` o las del sistema).
///
/// Se resuelven una sola vez; si falla, el siguiente intento vuelve a probar.
pub fn paths() -> Result<&'static MelodexPaths, ConfigError> {
  PATHS.get_or_try_init(MelodexPaths::detect)
}

/// Backend TOML compartido sobre [`paths`].
pub fn config_backend() -> Result<&'static TomlConfigBackend, ConfigError> {
  CONFIG_BACKEND.get_or_try_init(|| Ok(TomlConfigBackend::new(paths()?.clone())))
}
