use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::SongError;

/// Identificador de una canción dentro del proceso.
///
/// Los valores empiezan en `1` y los reparte un [`IdSource`](crate::ports::IdSource);
/// `0` nunca es un id válido.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct SongId(u64);

impl SongId {
  pub(crate) const fn from_raw(raw: u64) -> Self {
    SongId(raw)
  }

  /// Devuelve el valor numérico.
  pub fn as_u64(&self) -> u64 {
    self.0
  }
}

impl TryFrom<u64> for SongId {
  type Error = SongError;

  fn try_from(raw: u64) -> Result<Self, Self::Error> {
    if raw == 0 {
      return Err(SongError::InvalidId);
    }
    Ok(SongId(raw))
  }
}

impl From<SongId> for u64 {
  fn from(id: SongId) -> Self {
    id.0
  }
}

impl fmt::Display for SongId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    self.0.fmt(f)
  }
}
