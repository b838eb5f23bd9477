//! # termanim
//!
//! Animated, colored ASCII graphics in the terminal, drawn with nothing but
//! cursor-positioning and color escape sequences.
//!
//! ## Core Concepts
//!
//! - **Screen buffer**: a persistent grid of cells that layers and blends
//!   draws, and repaints only what changed since the previous frame
//! - **Drawables**: lazy iterators of positioned, styled cells, with a small
//!   algebra of recolors, translations, gradients and intersections
//! - **Effects**: time-indexed transformations turning a shape into a stream
//!   of frames, chained so each continues from where the last one stopped
//! - **Driver**: a ticker thread for pacing and a player that restores the
//!   terminal however playback ends
//!
//! ## Example
//!
//! ```rust,no_run
//! use termanim::drawable::{text, Drawable, Style};
//! use termanim::effect::{AlphaFade, Chain, Forever, Scene};
//! use termanim::{Player, PlayerConfig, Rgb, RgbScreen};
//!
//! let fps = 30.0;
//! let hello = text("Hello", 0, 0, Style::new().fg(Rgb::WHITE)).materialize();
//! let fade_in = Chain::new().then(AlphaFade::new(fps, 1.0)).then(Forever);
//!
//! let screen = RgbScreen::new(2, 8);
//! let config = PlayerConfig { frame_rate: fps, ..PlayerConfig::default() };
//! let mut player = Player::stdout(screen, config)?;
//! player.play(Scene::new().animate(&fade_in, hello))?;
//! # Ok::<(), termanim::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod buffer;
pub mod drawable;
pub mod driver;
pub mod effect;
mod error;
pub mod terminal;

// Re-exports for convenience
pub use buffer::{Cell, CellFlags, Color, Modifiers, Named, NamedScreen, Rgb, RgbScreen, Screen};
pub use drawable::{Drawable, DrawableCell, Shape, Style};
pub use driver::{PlayStats, Player, PlayerConfig};
pub use effect::{Effect, Scene};
pub use error::{Error, Result};
