//! The elementary effects: holds and fades.

use super::{Effect, Frames, Timing};
use crate::buffer::Color;
use crate::drawable::Shape;
use std::iter;

/// Hold the shape unchanged for a fixed number of frames.
///
/// Mostly used as padding inside a [`Chain`](super::Chain).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Static {
    timing: Timing,
}

impl Static {
    /// Hold for `duration` seconds at `frame_rate`.
    pub const fn new(frame_rate: f64, duration: f64) -> Self {
        Self {
            timing: Timing::new(frame_rate, duration),
        }
    }

    /// The timing.
    pub const fn timing(&self) -> Timing {
        self.timing
    }
}

impl<C: Color> Effect<C> for Static {
    fn animate<'a>(&'a self, shape: Shape<C>) -> Frames<'a, C> {
        Box::new(iter::repeat(shape).take(self.timing.frame_count()))
    }
}

/// Hold the shape unchanged forever.
///
/// The stream never ends; the driver has to stop pulling from it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Forever;

impl<C: Color> Effect<C> for Forever {
    fn animate<'a>(&'a self, shape: Shape<C>) -> Frames<'a, C> {
        Box::new(iter::repeat(shape))
    }
}

type Curve<T> = Box<dyn Fn(f32) -> T>;

/// Fade the opacity of every cell.
///
/// Frame `i` of `n` has alpha `curve(i / n)`. The default curve is the
/// straight line from [`from`](Self::from) to [`to`](Self::to), 0 to 1
/// unless changed, so the last frame falls just short of the target.
pub struct AlphaFade {
    timing: Timing,
    from: f32,
    to: f32,
    curve: Option<Curve<f32>>,
}

impl AlphaFade {
    /// Fade in over `duration` seconds at `frame_rate`.
    pub const fn new(frame_rate: f64, duration: f64) -> Self {
        Self {
            timing: Timing::new(frame_rate, duration),
            from: 0.0,
            to: 1.0,
            curve: None,
        }
    }

    /// Starting opacity.
    #[must_use]
    pub const fn from(mut self, alpha: f32) -> Self {
        self.from = alpha;
        self
    }

    /// Target opacity.
    #[must_use]
    pub const fn to(mut self, alpha: f32) -> Self {
        self.to = alpha;
        self
    }

    /// Replace the linear fade with `curve`, mapping elapsed fraction to
    /// opacity. `from` and `to` are ignored afterwards.
    #[must_use]
    pub fn with_curve(mut self, curve: impl Fn(f32) -> f32 + 'static) -> Self {
        self.curve = Some(Box::new(curve));
        self
    }

    /// The timing.
    pub const fn timing(&self) -> Timing {
        self.timing
    }

    /// Opacity after a fraction `t` of the fade.
    pub fn alpha_at(&self, t: f32) -> f32 {
        match &self.curve {
            Some(curve) => curve(t),
            None => (self.to - self.from).mul_add(t, self.from),
        }
    }

    /// Frame `index` of the fade applied to `shape`.
    pub fn frame<C: Color>(&self, shape: &Shape<C>, index: usize) -> Shape<C> {
        shape.with_alpha(self.alpha_at(self.timing.progress(index)))
    }
}

impl<C: Color> Effect<C> for AlphaFade {
    fn animate<'a>(&'a self, shape: Shape<C>) -> Frames<'a, C> {
        let frames = self.timing.frame_count();
        Box::new((0..frames).map(move |i| self.frame(&shape, i)))
    }
}

impl std::fmt::Debug for AlphaFade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlphaFade")
            .field("timing", &self.timing)
            .field("from", &self.from)
            .field("to", &self.to)
            .field("curve", &self.curve.is_some())
            .finish()
    }
}

/// Which color a [`ColorFade`] replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    /// Foreground.
    Fg,
    /// Background.
    Bg,
}

/// Fade the foreground or background color of every cell.
///
/// Frame `i` of `n` is recolored with `curve(i / n)`. The default curve is
/// [`Color::mix`] from the start color to the end color, which is a linear
/// blend in RGB mode and a hard switch at the first frame in named mode.
pub struct ColorFade<C> {
    timing: Timing,
    channel: Channel,
    from: Option<C>,
    to: Option<C>,
    curve: Option<Curve<Option<C>>>,
}

impl<C: Color> ColorFade<C> {
    /// Fade the foreground from `from` to `to`.
    pub fn fg(
        frame_rate: f64,
        duration: f64,
        from: impl Into<Option<C>>,
        to: impl Into<Option<C>>,
    ) -> Self {
        Self::new(Channel::Fg, Timing::new(frame_rate, duration), from.into(), to.into())
    }

    /// Fade the background from `from` to `to`.
    pub fn bg(
        frame_rate: f64,
        duration: f64,
        from: impl Into<Option<C>>,
        to: impl Into<Option<C>>,
    ) -> Self {
        Self::new(Channel::Bg, Timing::new(frame_rate, duration), from.into(), to.into())
    }

    const fn new(channel: Channel, timing: Timing, from: Option<C>, to: Option<C>) -> Self {
        Self {
            timing,
            channel,
            from,
            to,
            curve: None,
        }
    }

    /// Replace the linear fade with `curve`, mapping elapsed fraction to a
    /// color.
    #[must_use]
    pub fn with_curve(mut self, curve: impl Fn(f32) -> Option<C> + 'static) -> Self {
        self.curve = Some(Box::new(curve));
        self
    }

    /// The timing.
    pub const fn timing(&self) -> Timing {
        self.timing
    }

    /// The channel being faded.
    pub const fn channel(&self) -> Channel {
        self.channel
    }

    /// Color after a fraction `t` of the fade.
    pub fn color_at(&self, t: f32) -> Option<C> {
        match &self.curve {
            Some(curve) => curve(t),
            None => C::mix(self.from, self.to, t),
        }
    }

    /// Frame `index` of the fade applied to `shape`.
    pub fn frame(&self, shape: &Shape<C>, index: usize) -> Shape<C> {
        let color = self.color_at(self.timing.progress(index));
        match self.channel {
            Channel::Fg => shape.with_fg(color),
            Channel::Bg => shape.with_bg(color),
        }
    }
}

impl<C: Color> Effect<C> for ColorFade<C> {
    fn animate<'a>(&'a self, shape: Shape<C>) -> Frames<'a, C> {
        let frames = self.timing.frame_count();
        Box::new((0..frames).map(move |i| self.frame(&shape, i)))
    }
}

impl<C: Color> std::fmt::Debug for ColorFade<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ColorFade")
            .field("timing", &self.timing)
            .field("channel", &self.channel)
            .field("from", &self.from)
            .field("to", &self.to)
            .field("curve", &self.curve.is_some())
            .finish()
    }
}
