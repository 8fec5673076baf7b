use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use tracing::debug;

use crate::domain::display::{DisplayStyle, SongLine};
use crate::domain::ids::SongId;
use crate::domain::rating::Rating;
use crate::domain::tags::Tags;
use crate::domain::text;
use crate::errors::SongError;
use crate::ports::{IdSource, PROCESS_IDS};

/// Una entrada del catálogo musical.
///
/// Una `Song` siempre es válida: título y artista no vacíos (ya recortados),
/// duración positiva y valoración en `1..=5`. Cualquier cambio pasa por los
/// métodos `set_*` / `add_tag` / `remove_tag`, que rechazan el valor sin tocar
/// nada si no cumple las reglas.
///
/// El orden total ([`Ord`]) pone primero la valoración más alta, luego el
/// título menor y por último el id menor (orden de creación).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "SongRecord")]
pub struct Song {
  id: SongId,
  title: String,
  artist: String,
  duration_sec: u32,
  rating: Rating,
  tags: Tags,
}

/// Forma serializada sin validar; pasa por las mismas reglas que [`Song::new`].
#[derive(Deserialize)]
struct SongRecord {
  id: SongId,
  title: String,
  artist: String,
  duration_sec: u32,
  rating: u8,
  #[serde(default)]
  tags: Vec<String>,
}

impl TryFrom<SongRecord> for Song {
  type Error = SongError;

  fn try_from(raw: SongRecord) -> Result<Self, Self::Error> {
    let fields = Fields::validate(&raw.title, &raw.artist, raw.duration_sec, raw.rating)?;
    let tags = Tags::try_from(raw.tags)?;
    // el contador del proceso no debe volver a repartir este id
    PROCESS_IDS.observe(raw.id);
    Ok(fields.into_song(raw.id, tags))
  }
}

/// Campos ya validados, a la espera de un id.
struct Fields {
  title: String,
  artist: String,
  duration_sec: u32,
  rating: Rating,
}

impl Fields {
  /// Valida en orden título, artista, duración y valoración; gana el primer error.
  fn validate(title: &str, artist: &str, duration_sec: u32, rating: u8) -> Result<Self, SongError> {
    Ok(Self {
      title: checked_title(title)?,
      artist: checked_artist(artist)?,
      duration_sec: checked_duration(duration_sec)?,
      rating: Rating::new(rating)?,
    })
  }

  fn into_song(self, id: SongId, tags: Tags) -> Song {
    Song {
      id,
      title: self.title,
      artist: self.artist,
      duration_sec: self.duration_sec,
      rating: self.rating,
      tags,
    }
  }
}

fn checked_title(raw: &str) -> Result<String, SongError> {
  match text::trim(raw) {
    "" => Err(SongError::EmptyTitle),
    t => Ok(t.to_string()),
  }
}

fn checked_artist(raw: &str) -> Result<String, SongError> {
  match text::trim(raw) {
    "" => Err(SongError::EmptyArtist),
    a => Ok(a.to_string()),
  }
}

fn checked_duration(sec: u32) -> Result<u32, SongError> {
  if sec == 0 {
    return Err(SongError::InvalidDuration);
  }
  Ok(sec)
}

impl Song {
  /// Crea una canción usando el contador compartido del proceso.
  ///
  /// El id solo se asigna si todas las validaciones pasan.
  pub fn new(title: &str, artist: &str, duration_sec: u32, rating: u8) -> Result<Self, SongError> {
    Self::with_id_source(&PROCESS_IDS, title, artist, duration_sec, rating)
  }

  /// Igual que [`Song::new`] pero tomando los ids de `ids`.
  pub fn with_id_source<I>(
    ids: &I,
    title: &str,
    artist: &str,
    duration_sec: u32,
    rating: u8,
  ) -> Result<Self, SongError>
  where
    I: IdSource + ?Sized,
  {
    let fields = Fields::validate(title, artist, duration_sec, rating).map_err(|e| {
      debug!(error = %e, "song rejected");
      e
    })?;

    let song = fields.into_song(ids.next_id(), Tags::new());
    debug!(id = %song.id, title = %song.title, artist = %song.artist, "song created");
    Ok(song)
  }

  pub fn id(&self) -> SongId {
    self.id
  }

  pub fn title(&self) -> &str {
    &self.title
  }

  pub fn artist(&self) -> &str {
    &self.artist
  }

  pub fn duration_sec(&self) -> u32 {
    self.duration_sec
  }

  pub fn rating(&self) -> Rating {
    self.rating
  }

  /// Etiquetas en orden de inserción.
  pub fn tags(&self) -> &[String] {
    self.tags.as_slice()
  }

  pub fn tag_set(&self) -> &Tags {
    &self.tags
  }

  pub fn has_tag(&self, tag: &str) -> bool {
    self.tags.contains(tag)
  }

  // -------- mutadores --------

  pub fn set_title(&mut self, title: &str) -> Result<(), SongError> {
    let title = checked_title(title).map_err(|e| self.rejected("set_title", e))?;
    self.title = title;
    Ok(())
  }

  pub fn set_artist(&mut self, artist: &str) -> Result<(), SongError> {
    let artist = checked_artist(artist).map_err(|e| self.rejected("set_artist", e))?;
    self.artist = artist;
    Ok(())
  }

  pub fn set_duration(&mut self, duration_sec: u32) -> Result<(), SongError> {
    let duration_sec = checked_duration(duration_sec).map_err(|e| self.rejected("set_duration", e))?;
    self.duration_sec = duration_sec;
    Ok(())
  }

  pub fn set_rating(&mut self, rating: u8) -> Result<(), SongError> {
    let rating = Rating::new(rating).map_err(|e| self.rejected("set_rating", e))?;
    self.rating = rating;
    Ok(())
  }

  // -------- etiquetas --------

  /// Añade una etiqueta (recortada) conservando su capitalización.
  ///
  /// Se rechaza si queda vacía o si ya existe otra igual ignorando mayúsculas.
  pub fn add_tag(&mut self, tag: &str) -> Result<(), SongError> {
    match self.tags.insert(tag) {
      Ok(()) => Ok(()),
      Err(e) => Err(self.rejected("add_tag", e)),
    }
  }

  /// Quita la primera etiqueta igual a `tag` ignorando mayúsculas.
  pub fn remove_tag(&mut self, tag: &str) -> Result<(), SongError> {
    match self.tags.remove(tag) {
      Ok(_) => Ok(()),
      Err(e) => Err(self.rejected("remove_tag", e)),
    }
  }

  fn rejected(&self, op: &'static str, err: SongError) -> SongError {
    debug!(id = %self.id, op, error = %err, "song change rejected");
    err
  }

  // -------- búsqueda y presentación --------

  /// `true` si la palabra clave (recortada, sin distinguir mayúsculas) aparece
  /// como subcadena en el título, el artista o alguna etiqueta.
  ///
  /// Una palabra clave vacía nunca coincide.
  pub fn matches_keyword(&self, keyword: &str) -> bool {
    let key = text::fold(text::trim(keyword));
    if key.is_empty() {
      return false;
    }

    text::fold(&self.title).contains(&key)
      || text::fold(&self.artist).contains(&key)
      || self.tags.any_contains(&key)
  }

  /// Vista formateable con un estilo distinto al predeterminado.
  pub fn display_with<'a>(&'a self, style: &'a DisplayStyle) -> SongLine<'a> {
    SongLine { song: self, style }
  }

  pub fn render(&self, style: &DisplayStyle) -> String {
    self.display_with(style).to_string()
  }
}

impl fmt::Display for Song {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let style = DisplayStyle::default();
    fmt::Display::fmt(&self.display_with(&style), f)
  }
}

impl Ord for Song {
  fn cmp(&self, other: &Self) -> Ordering {
    other
      .rating
      .cmp(&self.rating)
      .then_with(|| self.title.cmp(&other.title))
      .then_with(|| self.id.cmp(&other.id))
  }
}

impl PartialOrd for Song {
  fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
    Some(self.cmp(other))
  }
}

/// Dos canciones son iguales cuando comparten valoración, título e id,
/// es decir, cuando el orden no las distingue.
impl PartialEq for Song {
  fn eq(&self, other: &Self) -> bool {
    self.cmp(other) == Ordering::Equal
  }
}

impl Eq for Song {}
