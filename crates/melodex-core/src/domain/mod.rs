pub mod display;
pub mod ids;
pub mod rating;
pub mod song;
pub mod tags;
mod text;

pub use display::{DisplayStyle, SongLine};
pub use ids::SongId;
pub use rating::Rating;
pub use song::Song;
pub use tags::Tags;
