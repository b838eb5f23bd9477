//! Driver: wall-clock pacing and the playback loop.
//!
//! - [`Ticker`]: background thread sending a [`Tick`] per frame interval
//! - [`Player`]: pulls one frame per tick, paints it, restores the terminal

mod player;
mod ticker;

pub use player::{PlayStats, Player, PlayerConfig};
pub use ticker::{Tick, Ticker};
