//! Effects: time-indexed transformations from a shape to a stream of frames.
//!
//! An effect never looks at the clock. It is handed a [`Shape`] and returns
//! a lazy iterator of frames; the driver pulls one frame per tick and paints
//! it. Timing only enters through [`Timing`], which turns a frame rate and a
//! duration into a frame count.
//!
//! Effects compose:
//!
//! - [`Chain`] runs effects back to back, each continuing from the last frame
//!   of the previous one.
//! - [`Repeat`] restarts a finite effect from its input forever.
//! - [`Drift`] moves every frame of an effect at a constant velocity.
//! - [`Scene`] plays several animations side by side, one shape per layer per
//!   frame.
//!
//! ```
//! use termanim::drawable::{text, Drawable, Style};
//! use termanim::effect::{AlphaFade, Chain, Effect, Forever, Static};
//! use termanim::Rgb;
//!
//! let fps = 30.0;
//! let world = text("World", 1, 2, Style::new().fg(Rgb::WHITE).alpha(0.0)).materialize();
//! let fade_in = Chain::new()
//!     .then(Static::new(fps, 0.5))
//!     .then(AlphaFade::new(fps, 1.0))
//!     .then(Forever);
//!
//! // 15 hidden frames, then 30 frames of fading in, then held forever.
//! let frame = fade_in.animate(world).nth(100).unwrap();
//! assert!(frame.iter().all(|cell| cell.alpha == 29.0 / 30.0));
//! ```

mod basic;
mod chain;
mod scene;

pub use basic::{AlphaFade, Channel, ColorFade, Forever, Static};
pub use chain::{Chain, Drift, Repeat};
pub use scene::Scene;

use crate::buffer::Color;
use crate::drawable::Shape;

/// A lazy, possibly infinite stream of frames.
pub type Frames<'a, C> = Box<dyn Iterator<Item = Shape<C>> + 'a>;

/// Frame rate and duration of a finite effect.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    /// Frames per second.
    pub frame_rate: f64,
    /// Length in seconds.
    pub duration: f64,
}

impl Timing {
    /// Create a timing.
    pub const fn new(frame_rate: f64, duration: f64) -> Self {
        Self {
            frame_rate,
            duration,
        }
    }

    /// Number of frames the effect lasts.
    ///
    /// `frame_rate * duration` truncated toward zero. The product is taken in
    /// `f64`, so rates and durations written as decimals land on the integer
    /// they denote (25 fps for 4.2 s is 105 frames). Zero when the product
    /// is below one or not finite.
    pub fn frame_count(&self) -> usize {
        let frames = self.frame_rate * self.duration;
        if frames.is_finite() && frames >= 1.0 {
            frames as usize
        } else {
            0
        }
    }

    /// Fraction of the effect elapsed at frame `index`, in `[0, 1)`.
    pub fn progress(&self, index: usize) -> f32 {
        match self.frame_count() {
            0 => 0.0,
            count => index as f32 / count as f32,
        }
    }
}

/// A transformation from a shape to a stream of frames.
///
/// Any `Fn(Shape<C>) -> Frames<'static, C>` closure is an effect, so one-off
/// effects need no type of their own.
pub trait Effect<C: Color> {
    /// Start the animation of `shape`.
    fn animate<'a>(&'a self, shape: Shape<C>) -> Frames<'a, C>;
}

impl<C, F> Effect<C> for F
where
    C: Color,
    F: Fn(Shape<C>) -> Frames<'static, C>,
{
    fn animate<'a>(&'a self, shape: Shape<C>) -> Frames<'a, C> {
        self(shape)
    }
}
