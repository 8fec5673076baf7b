use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::SongError;

/// Valoración entera de una canción en la escala `1..=5`.
///
/// Solo se puede construir a través de [`Rating::new`], así que una `Rating`
/// existente siempre está dentro de rango.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Rating(u8);

impl Rating {
  /// Valor mínimo permitido.
  pub const MIN: u8 = 1;
  /// Valor máximo permitido.
  pub const MAX: u8 = 5;

  /// Crea una `Rating`, o [`SongError::InvalidRating`] si `value` está fuera de `1..=5`.
  pub fn new(value: u8) -> Result<Self, SongError> {
    if !(Self::MIN..=Self::MAX).contains(&value) {
      return Err(SongError::InvalidRating(value));
    }
    Ok(Self(value))
  }

  pub fn get(&self) -> u8 {
    self.0
  }

  /// Repite `glyph` tantas veces como indica la valoración.
  pub fn stars(&self, glyph: char) -> String {
    std::iter::repeat_n(glyph, usize::from(self.0)).collect()
  }
}

impl TryFrom<u8> for Rating {
  type Error = SongError;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    Rating::new(value)
  }
}

impl From<Rating> for u8 {
  fn from(rating: Rating) -> Self {
    rating.0
  }
}

impl fmt::Display for Rating {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.stars('*'))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accepts_one_through_five() {
    for v in 1..=5 {
      assert_eq!(Rating::new(v).map(|r| r.get()), Ok(v));
    }
  }

  #[test]
  fn rejects_out_of_range() {
    assert_eq!(Rating::new(0), Err(SongError::InvalidRating(0)));
    assert_eq!(Rating::new(6), Err(SongError::InvalidRating(6)));
  }

  #[test]
  fn stars_match_value() {
    let r = Rating::new(3).unwrap();
    assert_eq!(r.to_string(), "***");
    assert_eq!(r.stars('★'), "★★★");
  }
}
