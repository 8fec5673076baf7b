use directories::ProjectDirs;
use std::path::PathBuf;

use crate::error::ConfigError;

/// Variable de entorno que fuerza un directorio base (modo portable, tests).
pub const BASE_DIR_ENV: &str = "MELODEX_BASE_DIR";

#[derive(Debug, Clone)]
pub struct MelodexPaths {
  pub base_dir: PathBuf,
  pub config_dir: PathBuf,
}

impl MelodexPaths {
  /// Usa `base` como raíz y crea `base/config` si no existe.
  pub fn at(base: impl Into<PathBuf>) -> Result<Self, ConfigError> {
    let base_dir = base.into();
    let config_dir = base_dir.join("config");
    std::fs::create_dir_all(&config_dir)?;
    Ok(Self { base_dir, config_dir })
  }

  /// Resuelve las rutas: `MELODEX_BASE_DIR` si está definida, si no las del sistema.
  pub fn detect() -> Result<Self, ConfigError> {
    if let Some(base) = std::env::var_os(BASE_DIR_ENV) {
      return Self::at(base);
    }

    let proj_dirs = ProjectDirs::from("com", "melodex", "melodex").ok_or(ConfigError::NoHome)?;
    let config_dir = proj_dirs.config_dir().to_path_buf();
    std::fs::create_dir_all(&config_dir)?;

    Ok(Self { base_dir: config_dir.clone(), config_dir })
  }

  pub fn config_file(&self) -> PathBuf {
    self.config_dir.join("melodex.toml")
  }
}
