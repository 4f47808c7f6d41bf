mod player;
mod selection;

pub use player::{format_duration, NowPlaying, PlayerPanel};
pub use selection::{CurrentSelection, PlaybackSelection};
