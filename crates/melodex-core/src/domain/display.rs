use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::song::Song;

/// Opciones de presentación de una canción en una línea de texto.
///
/// `DisplayStyle::default()` produce exactamente lo mismo que el `Display`
/// de [`Song`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayStyle {
  /// Carácter repetido una vez por cada punto de valoración.
  pub star: char,
}

impl Default for DisplayStyle {
  fn default() -> Self {
    Self { star: '*' }
  }
}

/// Vista formateable de una canción con un estilo concreto.
///
/// Formato:
/// `[#<id>] <artista> - <título> (<segundos>s) <estrellas>[ [tags: a, b]]`
pub struct SongLine<'a> {
  pub(crate) song: &'a Song,
  pub(crate) style: &'a DisplayStyle,
}

impl fmt::Display for SongLine<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let song = self.song;
    write!(
      f,
      "[#{}] {} - {} ({}s) {}",
      song.id(),
      song.artist(),
      song.title(),
      song.duration_sec(),
      song.rating().stars(self.style.star),
    )?;

    // sin etiquetas no hay sufijo
    if !song.tag_set().is_empty() {
      write!(f, " [tags: {}]", song.tag_set())?;
    }

    Ok(())
  }
}
