use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::text;
use crate::errors::SongError;

/// Conjunto ordenado de etiquetas de una canción.
///
/// - Conserva el orden de inserción y la capitalización con la que llegó
///   cada etiqueta por primera vez.
/// - No admite dos etiquetas iguales ignorando mayúsculas (`"Rock"` y `"rock"`).
///
/// Junto a las etiquetas visibles se guarda su forma normalizada, en el mismo
/// orden, para no recalcularla en cada comparación.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Tags {
  labels: Vec<String>,
  folded: Vec<String>,
}

impl Tags {
  pub fn new() -> Self {
    Self::default()
  }

  /// Añade una etiqueta recortada al final.
  ///
  /// Falla con [`SongError::EmptyTag`] si queda vacía tras recortar y con
  /// [`SongError::DuplicateTag`] si ya existe ignorando mayúsculas.
  pub fn insert(&mut self, tag: &str) -> Result<(), SongError> {
    let label = text::trim(tag);
    if label.is_empty() {
      return Err(SongError::EmptyTag);
    }

    let key = text::fold(label);
    if self.folded.contains(&key) {
      return Err(SongError::DuplicateTag(label.to_string()));
    }

    self.labels.push(label.to_string());
    self.folded.push(key);
    Ok(())
  }

  /// Quita la primera etiqueta que coincide ignorando mayúsculas y la devuelve
  /// con su capitalización original.
  pub fn remove(&mut self, tag: &str) -> Result<String, SongError> {
    let label = text::trim(tag);
    let key = text::fold(label);

    let Some(pos) = self.folded.iter().position(|k| *k == key) else {
      return Err(SongError::TagNotFound(label.to_string()));
    };

    self.folded.remove(pos);
    Ok(self.labels.remove(pos))
  }

  /// `true` si existe una etiqueta igual a `tag` ignorando mayúsculas.
  pub fn contains(&self, tag: &str) -> bool {
    let key = text::fold(text::trim(tag));
    self.folded.contains(&key)
  }

  /// `true` si alguna etiqueta contiene `folded_key`, que ya debe venir en minúsculas.
  pub(crate) fn any_contains(&self, folded_key: &str) -> bool {
    self.folded.iter().any(|k| k.contains(folded_key))
  }

  pub fn as_slice(&self) -> &[String] {
    &self.labels
  }

  pub fn iter(&self) -> impl Iterator<Item = &str> {
    self.labels.iter().map(String::as_str)
  }

  pub fn len(&self) -> usize {
    self.labels.len()
  }

  pub fn is_empty(&self) -> bool {
    self.labels.is_empty()
  }
}

impl TryFrom<Vec<String>> for Tags {
  type Error = SongError;

  fn try_from(raw: Vec<String>) -> Result<Self, Self::Error> {
    let mut tags = Tags::new();
    for tag in &raw {
      tags.insert(tag)?;
    }
    Ok(tags)
  }
}

impl From<Tags> for Vec<String> {
  fn from(tags: Tags) -> Self {
    tags.labels
  }
}

/// Lista separada por `", "`, en orden de inserción.
impl fmt::Display for Tags {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for (i, label) in self.labels.iter().enumerate() {
      if i != 0 {
        f.write_str(", ")?;
      }
      f.write_str(label)?;
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn insert_trims_and_keeps_first_casing() {
    let mut tags = Tags::new();
    tags.insert("  Rock ").unwrap();
    assert_eq!(tags.as_slice(), ["Rock"]);
  }

  #[test]
  fn duplicate_is_case_insensitive() {
    let mut tags = Tags::new();
    tags.insert("Rock").unwrap();
    assert_eq!(tags.insert("rock"), Err(SongError::DuplicateTag("rock".into())));
    assert_eq!(tags.insert(" ROCK\t"), Err(SongError::DuplicateTag("ROCK".into())));
    assert_eq!(tags.len(), 1);
    assert_eq!(tags.as_slice(), ["Rock"]);
  }

  #[test]
  fn blank_tag_is_rejected() {
    let mut tags = Tags::new();
    assert_eq!(tags.insert(" \t\r\n"), Err(SongError::EmptyTag));
    assert!(tags.is_empty());
  }

  #[test]
  fn remove_is_case_insensitive_and_returns_stored_label() {
    let mut tags = Tags::new();
    tags.insert("Rock").unwrap();
    tags.insert("Jazz").unwrap();

    assert_eq!(tags.remove(" ROCK "), Ok("Rock".to_string()));
    assert_eq!(tags.as_slice(), ["Jazz"]);
    assert!(!tags.contains("rock"));
  }

  #[test]
  fn remove_missing_reports_not_found() {
    let mut tags = Tags::new();
    tags.insert("Jazz").unwrap();
    assert_eq!(tags.remove("blues"), Err(SongError::TagNotFound("blues".into())));
    assert_eq!(tags.len(), 1);
  }

  #[test]
  fn removed_tag_can_be_added_again() {
    let mut tags = Tags::new();
    tags.insert("Rock").unwrap();
    tags.remove("rock").unwrap();
    tags.insert("ROCK").unwrap();
    assert_eq!(tags.as_slice(), ["ROCK"]);
  }

  #[test]
  fn display_joins_in_insertion_order() {
    let mut tags = Tags::new();
    assert_eq!(tags.to_string(), "");
    tags.insert("b").unwrap();
    tags.insert("a").unwrap();
    assert_eq!(tags.to_string(), "b, a");
  }

  #[test]
  fn any_contains_uses_substrings() {
    let mut tags = Tags::new();
    tags.insert("Synthwave").unwrap();
    assert!(tags.any_contains("wave"));
    assert!(!tags.any_contains("rock"));
  }

  #[test]
  fn try_from_rejects_duplicates() {
    let raw = vec!["Pop".to_string(), "POP".to_string()];
    assert_eq!(Tags::try_from(raw), Err(SongError::DuplicateTag("POP".into())));
  }
}
