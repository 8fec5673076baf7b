pub mod domain;
pub mod errors;
pub mod ports;

pub use domain::{DisplayStyle, Rating, Song, SongId, SongLine};
pub use errors::SongError;
pub use ports::{IdSource, SequentialIds};
