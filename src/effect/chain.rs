//! Effect combinators: sequencing, looping and motion.

use super::{Effect, Frames};
use crate::buffer::Color;
use crate::drawable::Shape;
use std::slice;

/// Effects played one after another as a single stream.
///
/// The first effect animates the input. Every later effect animates the
/// last frame of the one before it, so a recolor followed by a fade fades
/// the recolored shape. An effect that yields no frames passes along the
/// frame it was given.
pub struct Chain<'e, C> {
    effects: Vec<Box<dyn Effect<C> + 'e>>,
}

impl<'e, C: Color> Chain<'e, C> {
    /// An empty chain. It yields no frames.
    pub fn new() -> Self {
        Self {
            effects: Vec::new(),
        }
    }

    /// Append an effect.
    #[must_use]
    pub fn then(mut self, effect: impl Effect<C> + 'e) -> Self {
        self.effects.push(Box::new(effect));
        self
    }

    /// Number of effects in the chain.
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// Whether the chain has no effects.
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }
}

impl<C: Color> Default for Chain<'_, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Color> Effect<C> for Chain<'_, C> {
    fn animate<'a>(&'a self, shape: Shape<C>) -> Frames<'a, C> {
        Box::new(ChainFrames {
            pending: self.effects.iter(),
            current: None,
            last: shape,
        })
    }
}

impl<C> std::fmt::Debug for Chain<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Chain")
            .field("effects", &self.effects.len())
            .finish()
    }
}

/// Running state of a [`Chain`]: the effects not yet started, the stream of
/// the effect in progress, and the most recent frame.
struct ChainFrames<'a, 'e, C> {
    pending: slice::Iter<'a, Box<dyn Effect<C> + 'e>>,
    current: Option<Frames<'a, C>>,
    last: Shape<C>,
}

impl<C: Color> Iterator for ChainFrames<'_, '_, C> {
    type Item = Shape<C>;

    fn next(&mut self) -> Option<Shape<C>> {
        loop {
            if let Some(frames) = &mut self.current {
                if let Some(frame) = frames.next() {
                    self.last.clone_from(&frame);
                    return Some(frame);
                }
                self.current = None;
            }
            let effect = self.pending.next()?;
            self.current = Some(effect.animate(self.last.clone()));
        }
    }
}

/// A finite effect restarted from its original input whenever it ends.
///
/// If the effect yields nothing the stream ends instead of spinning.
#[derive(Debug, Clone, Copy)]
pub struct Repeat<E> {
    effect: E,
}

impl<E> Repeat<E> {
    /// Loop `effect`.
    pub const fn new(effect: E) -> Self {
        Self { effect }
    }
}

impl<C: Color, E: Effect<C>> Effect<C> for Repeat<E> {
    fn animate<'a>(&'a self, shape: Shape<C>) -> Frames<'a, C> {
        let mut frames = self.effect.animate(shape.clone());
        let mut produced = false;
        Box::new(std::iter::from_fn(move || loop {
            if let Some(frame) = frames.next() {
                produced = true;
                return Some(frame);
            }
            if !produced {
                return None;
            }
            produced = false;
            frames = self.effect.animate(shape.clone());
        }))
    }
}

/// An effect whose frames move at a constant velocity.
///
/// The offset accumulates `velocity / frame_rate` per frame, starting with
/// the first, and is truncated toward zero before translating.
#[derive(Debug, Clone, Copy)]
pub struct Drift<E> {
    effect: E,
    frame_rate: f64,
    velocity: (f64, f64),
}

impl<E> Drift<E> {
    /// Move `effect` at `velocity` rows and columns per second.
    pub const fn new(effect: E, frame_rate: f64, velocity: (f64, f64)) -> Self {
        Self {
            effect,
            frame_rate,
            velocity,
        }
    }
}

impl<C: Color, E: Effect<C>> Effect<C> for Drift<E> {
    fn animate<'a>(&'a self, shape: Shape<C>) -> Frames<'a, C> {
        let step = (
            self.velocity.0 / self.frame_rate,
            self.velocity.1 / self.frame_rate,
        );
        let mut offset = (0.0_f64, 0.0_f64);
        Box::new(self.effect.animate(shape).map(move |frame| {
            offset.0 += step.0;
            offset.1 += step.1;
            frame.translate(offset.0 as i32, offset.1 as i32)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Rgb;
    use crate::drawable::{text, Drawable, Style};
    use crate::effect::{AlphaFade, ColorFade, Forever, Static};

    fn hello() -> Shape<Rgb> {
        text("Hello", 0, 0, Style::new().fg(Rgb::WHITE)).materialize()
    }

    #[test]
    fn test_empty_chain_yields_nothing() {
        let chain = Chain::new();
        assert!(chain.is_empty());
        assert_eq!(chain.animate(hello()).count(), 0);
    }

    #[test]
    fn test_chain_lengths_add_up() {
        let chain = Chain::new()
            .then(Static::new(30.0, 0.5))
            .then(AlphaFade::new(30.0, 1.0))
            .then(Static::new(30.0, 1.0));
        assert_eq!(chain.len(), 3);
        assert_eq!(chain.animate(hello()).count(), 15 + 30 + 30);
    }

    #[test]
    fn test_chain_static_then_forever() {
        let shape = hello();
        let chain = Chain::new().then(Static::new(30.0, 1.0)).then(Forever);
        let mut frames = chain.animate(shape.clone());
        assert_eq!(frames.nth(1000), Some(shape));
    }

    #[test]
    fn test_chain_continues_from_last_frame() {
        let orange = Rgb::new(255.0, 128.0, 0.0);
        let chain = Chain::new()
            .then(ColorFade::<Rgb>::fg(2.0, 1.0, Rgb::WHITE, orange))
            .then(AlphaFade::new(2.0, 1.0).from(1.0).to(0.0))
            .then(Static::new(2.0, 1.0));
        let frames: Vec<_> = chain.animate(hello()).collect();
        assert_eq!(frames.len(), 6);

        // The fade acts on the recolored shape, not on the white original.
        let mid = Rgb::new(255.0, 191.5, 127.5);
        assert!(frames[2].iter().all(|c| c.fg == Some(mid) && c.alpha == 1.0));
        assert!(frames[3].iter().all(|c| c.fg == Some(mid) && c.alpha == 0.5));
        // The hold keeps the faded state.
        assert_eq!(frames[4], frames[3]);
        assert_eq!(frames[5], frames[3]);
    }

    #[test]
    fn test_chain_skips_empty_effects() {
        let chain = Chain::new()
            .then(AlphaFade::new(2.0, 1.0).from(0.25).to(0.25))
            .then(Static::new(30.0, 0.01))
            .then(Static::new(1.0, 1.0));
        let frames: Vec<_> = chain.animate(hello()).collect();
        assert_eq!(frames.len(), 3);
        assert!(frames[2].iter().all(|c| c.alpha == 0.25));
    }

    #[test]
    fn test_chain_empty_first_effect_uses_input() {
        let shape = hello();
        let chain = Chain::new().then(Static::new(0.0, 1.0)).then(Static::new(1.0, 2.0));
        let frames: Vec<_> = chain.animate(shape.clone()).collect();
        assert_eq!(frames, vec![shape.clone(), shape]);
    }

    #[test]
    fn test_nested_chain() {
        let inner = Chain::new().then(Static::new(1.0, 2.0));
        let outer = Chain::new().then(inner).then(Static::new(1.0, 1.0));
        assert_eq!(outer.animate(hello()).count(), 3);
    }

    #[test]
    fn test_repeat_restarts_from_input() {
        let pulse = Repeat::new(AlphaFade::new(2.0, 1.0));
        let alphas: Vec<f32> = pulse
            .animate(hello())
            .take(5)
            .map(|frame| frame.cells()[0].alpha)
            .collect();
        assert_eq!(alphas, vec![0.0, 0.5, 0.0, 0.5, 0.0]);
    }

    #[test]
    fn test_repeat_of_nothing_ends() {
        let empty = Repeat::new(Static::new(0.0, 0.0));
        assert_eq!(empty.animate(hello()).count(), 0);
    }

    #[test]
    fn test_drift_truncates_offsets() {
        // Half a column per frame to the right, a quarter row per frame up.
        let drift = Drift::new(Static::new(4.0, 1.0), 4.0, (-1.0, 2.0));
        let origins: Vec<_> = drift
            .animate(hello())
            .map(|frame| frame.cells()[0].coords())
            .collect();
        assert_eq!(origins, vec![(0, 0), (0, 1), (0, 1), (-1, 2)]);
    }

    #[test]
    fn test_drift_infinite_inner() {
        let drift = Drift::new(Forever, 10.0, (0.0, 10.0));
        let frame = drift.animate(hello()).nth(99).unwrap();
        assert_eq!(frame.cells()[0].coords(), (0, 100));
    }
}
