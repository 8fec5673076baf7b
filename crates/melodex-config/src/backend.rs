use crate::error::ConfigError;
use crate::io::atomic_write_str;
use crate::paths::MelodexPaths;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use toml_edit::{DocumentMut, Item};
use tracing::debug;

/// Acceso por secciones (`[display]`, `[logging]`, ...) al fichero de configuración.
pub trait ConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError>;
  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError>;
}

pub struct TomlConfigBackend {
  paths: MelodexPaths,
}

impl TomlConfigBackend {
  pub fn new(paths: MelodexPaths) -> Self {
    Self { paths }
  }

  pub fn paths(&self) -> &MelodexPaths {
    &self.paths
  }

  /// `true` si el fichero de configuración ya existe en disco.
  pub fn file_exists(&self) -> bool {
    self.paths.config_file().is_file()
  }

  /// Como [`ConfigBackend::load_section`], pero devuelve `T::default()` si
  /// falta el fichero o la sección.
  pub fn load_section_with_default<T>(&self, section: &str) -> Result<T, ConfigError>
  where
    T: DeserializeOwned + Default,
  {
    match self.load_section(section) {
      Err(ConfigError::Io(e)) if e.kind() == ErrorKind::NotFound => {
        debug!(section, "no config file, using defaults");
        Ok(T::default())
      }
      Err(ConfigError::MissingSection { .. }) => {
        debug!(section, "config section absent, using defaults");
        Ok(T::default())
      }
      other => other,
    }
  }
}

fn read_document(path: &Path) -> Result<Option<String>, ConfigError> {
  match fs::read_to_string(path) {
    Ok(content) => Ok(Some(content)),
    Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
    Err(e) => Err(e.into()),
  }
}

/// Serializa `value` como tabla suelta lista para colgar de `doc[section]`.
fn section_item<T: Serialize>(section: &str, value: &T) -> Result<Item, ConfigError> {
  let body = toml::to_string(value).map_err(|e| ConfigError::section(section, e))?;
  Ok(body.parse::<DocumentMut>()?.into_item())
}

impl ConfigBackend for TomlConfigBackend {
  fn load_section<T: DeserializeOwned>(&self, section: &str) -> Result<T, ConfigError> {
    let content = fs::read_to_string(self.paths.config_file())?;
    let root: toml::Table = toml::from_str(&content)?;

    let table = root
      .get(section)
      .cloned()
      .ok_or_else(|| ConfigError::MissingSection { section: section.to_string() })?;

    table.try_into().map_err(|e| ConfigError::section(section, e))
  }

  /// Reemplaza solo `[section]`; el resto del documento, comentarios incluidos, se conserva.
  fn save_section<T: Serialize>(&self, section: &str, value: &T) -> Result<(), ConfigError> {
    let path = self.paths.config_file();

    let mut doc = match read_document(&path)? {
      Some(content) => content.parse::<DocumentMut>()?,
      None => DocumentMut::new(),
    };
    doc[section] = section_item(section, value)?;

    atomic_write_str(&path, &doc.to_string())?;
    debug!(path = %path.display(), section, "config section saved");
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde::Deserialize;
  use tempfile::tempdir;

  #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
  struct Sample {
    name: String,
    level: u8,
  }

  fn backend(dir: &std::path::Path) -> TomlConfigBackend {
    TomlConfigBackend::new(MelodexPaths::at(dir).unwrap())
  }

  #[test]
  fn missing_file_yields_default() {
    let dir = tempdir().unwrap();
    let cfg: Sample = backend(dir.path()).load_section_with_default("sample").unwrap();
    assert_eq!(cfg, Sample::default());
  }

  #[test]
  fn missing_section_yields_default_but_strict_load_fails() {
    let dir = tempdir().unwrap();
    let be = backend(dir.path());
    fs::write(be.paths().config_file(), "[other]\nx = 1\n").unwrap();

    let cfg: Sample = be.load_section_with_default("sample").unwrap();
    assert_eq!(cfg, Sample::default());
    assert!(matches!(
      be.load_section::<Sample>("sample"),
      Err(ConfigError::MissingSection { section }) if section == "sample"
    ));
  }

  #[test]
  fn save_then_load() {
    let dir = tempdir().unwrap();
    let be = backend(dir.path());
    let value = Sample { name: "melodex".into(), level: 3 };

    be.save_section("sample", &value).unwrap();

    let loaded: Sample = be.load_section("sample").unwrap();
    assert_eq!(loaded, value);
  }

  #[test]
  fn save_preserves_other_sections_and_comments() {
    let dir = tempdir().unwrap();
    let be = backend(dir.path());
    fs::write(be.paths().config_file(), "# mantener\n[other]\nx = 1 # inline\n").unwrap();

    be.save_section("sample", &Sample { name: "n".into(), level: 1 }).unwrap();

    let written = fs::read_to_string(be.paths().config_file()).unwrap();
    assert!(written.contains("# mantener"));
    assert!(written.contains("x = 1 # inline"));
    assert!(written.contains("[sample]"));

    let other: toml::Value = be.load_section("other").unwrap();
    assert_eq!(other.get("x").and_then(toml::Value::as_integer), Some(1));
  }

  #[test]
  fn invalid_section_reports_decode_error() {
    let dir = tempdir().unwrap();
    let be = backend(dir.path());
    fs::write(be.paths().config_file(), "[sample]\nname = 1\n").unwrap();

    let err = be.load_section_with_default::<Sample>("sample").unwrap_err();
    assert!(matches!(err, ConfigError::Section { ref section, .. } if section == "sample"));
    assert!(err.to_string().starts_with("section [sample] is malformed"));
  }
}
