/// Caracteres que se eliminan al recortar: espacio, tabulador, salto de línea y retorno de carro.
const TRIM_CHARS: [char; 4] = [' ', '\t', '\n', '\r'];

/// Quita los espacios en blanco iniciales y finales.
///
/// A diferencia de [`str::trim`], no toca otros espacios Unicode
/// (por ejemplo `\u{00A0}`).
pub(crate) fn trim(s: &str) -> &str {
  s.trim_matches(&TRIM_CHARS[..])
}

/// Forma normalizada usada para comparar sin distinguir mayúsculas.
pub(crate) fn fold(s: &str) -> String {
  s.to_lowercase()
}
