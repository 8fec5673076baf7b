use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::SongId;

/// Fuente de identificadores para canciones nuevas.
///
/// Solo se consulta cuando la canción ya pasó todas las validaciones, así que
/// una construcción fallida nunca gasta un id.
pub trait IdSource {
  fn next_id(&self) -> SongId;
}

/// Contador secuencial que empieza en `1`.
///
/// Leer e incrementar es una única operación atómica, por lo que puede
/// compartirse entre hilos.
#[derive(Debug)]
pub struct SequentialIds {
  next: AtomicU64,
}

impl SequentialIds {
  pub const fn new() -> Self {
    Self { next: AtomicU64::new(1) }
  }

  /// Id que se entregará en la próxima llamada, sin consumirlo.
  pub fn peek(&self) -> u64 {
    self.next.load(Ordering::Relaxed)
  }

  /// Registra un id emitido fuera de este contador (p. ej. uno deserializado)
  /// para que los siguientes queden siempre por encima.
  pub fn observe(&self, id: SongId) {
    self.next.fetch_max(id.as_u64().saturating_add(1), Ordering::Relaxed);
  }
}

impl Default for SequentialIds {
  fn default() -> Self {
    Self::new()
  }
}

impl IdSource for SequentialIds {
  fn next_id(&self) -> SongId {
    SongId::from_raw(self.next.fetch_add(1, Ordering::Relaxed))
  }
}

/// Contador compartido por todo el proceso; lo usa [`Song::new`](crate::Song::new).
pub(crate) static PROCESS_IDS: SequentialIds = SequentialIds::new();
