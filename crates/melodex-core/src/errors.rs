// crates/melodex-core/src/errors.rs
use thiserror::Error;

/// Motivos por los que una canción rechaza un valor.
///
/// Ninguno es fatal: la canción queda exactamente como estaba y las capas
/// superiores (CLI, catálogo, etc.) deciden cómo mostrar el mensaje.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SongError {
  #[error("title must not be empty")]
  EmptyTitle,

  #[error("artist must not be empty")]
  EmptyArtist,

  #[error("duration must be a positive number of seconds")]
  InvalidDuration,

  #[error("rating must be between 1 and 5, got {0}")]
  InvalidRating(u8),

  #[error("tag must not be empty")]
  EmptyTag,

  #[error("tag already present (case-insensitive): {0}")]
  DuplicateTag(String),

  #[error("tag not found: {0}")]
  TagNotFound(String),

  /// Solo aparece al reconstruir canciones serializadas.
  #[error("song id must be at least 1")]
  InvalidId,
}
