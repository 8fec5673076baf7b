use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("cannot access config file: {0}")]
  Io(#[from] std::io::Error),

  #[error("invalid config file: {0}")]
  Syntax(#[from] toml::de::Error),

  #[error("cannot edit config file: {0}")]
  Document(#[from] toml_edit::TomlError),

  #[error("section [{section}] is missing")]
  MissingSection { section: String },

  #[error("section [{section}] is malformed: {reason}")]
  Section { section: String, reason: String },

  #[error("no home directory to place the config in")]
  NoHome,
}

impl ConfigError {
  pub(crate) fn section(section: &str, reason: impl ToString) -> Self {
    ConfigError::Section { section: section.to_string(), reason: reason.to_string() }
  }
}
