mod config;
mod logging;

use anyhow::Result;
use melodex_core::{Song, SongError};
use tracing::{info, warn};

use crate::config::Settings;

/// Builds a small catalog, sorts it and prints it.
///
/// Usage: `melodex [keyword]`. With a keyword only matching songs are listed.
fn main() -> Result<()> {
  // [logging] is read before a subscriber exists; config events from this load are not recorded.
  let settings = Settings::load()?;
  logging::init(&settings.logging)?;
  info!(wrote_defaults = settings.wrote_defaults, filter = %settings.logging.filter, "settings loaded");

  let keyword = std::env::args().nth(1);

  let mut songs = sample_catalog();
  songs.sort();
  info!(count = songs.len(), keyword = keyword.as_deref().unwrap_or(""), "catalog ready");

  for song in songs.iter().filter(|s| keyword.as_deref().is_none_or(|kw| s.matches_keyword(kw))) {
    println!("{}", song.display_with(&settings.display));
  }

  Ok(())
}

fn sample_catalog() -> Vec<Song> {
  let entries = [
    ("Rocket Man", "Elton John", 281, 5, &["Rock", "classic"][..]),
    ("Blue", "Joni Mitchell", 183, 4, &["Folk"][..]),
    ("  Hurt ", "Johnny Cash", 218, 5, &["country", "Cover"][..]),
    ("", "Nobody", 10, 3, &[][..]),
    ("So What", "Miles Davis", 562, 6, &["jazz"][..]),
  ];

  let mut songs = Vec::new();
  for (title, artist, duration, rating, tags) in entries {
    match build(title, artist, duration, rating, tags) {
      Ok(song) => songs.push(song),
      Err(e) => warn!(title, artist, error = %e, "skipping song"),
    }
  }
  songs
}

fn build(title: &str, artist: &str, duration: u32, rating: u8, tags: &[&str]) -> Result<Song, SongError> {
  let mut song = Song::new(title, artist, duration, rating)?;
  for tag in tags {
    // a rejected tag is reported but does not drop the song
    if let Err(e) = song.add_tag(tag) {
      warn!(id = %song.id(), tag, error = %e, "tag ignored");
    }
  }
  Ok(song)
}
