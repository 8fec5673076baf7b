use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Escribe `contents` en un fichero temporal hermano y lo renombra encima de `path`.
pub(crate) fn atomic_write_str(path: &Path, contents: &str) -> io::Result<()> {
  let tmp_path = path.with_extension("toml.tmp");

  {
    let mut tmp_file = fs::File::create(&tmp_path)?;
    tmp_file.write_all(contents.as_bytes())?;
    tmp_file.sync_all()?;
  }

  fs::rename(&tmp_path, path)
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::tempdir;

  #[test]
  fn replaces_existing_file_and_leaves_no_temp() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("melodex.toml");
    fs::write(&path, "old").unwrap();

    atomic_write_str(&path, "new").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "new");
    assert!(!path.with_extension("toml.tmp").exists());
  }
}
