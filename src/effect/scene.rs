//! Scene: several animations played side by side.

use super::{Effect, Frames};
use crate::buffer::Color;
use crate::drawable::{DrawableCell, Shape};
use std::iter::Fuse;

/// Layers of frame streams advanced in lockstep.
///
/// Each item is one shape per layer, in the order the layers were added, so
/// later layers are drawn on top. A layer that has run out contributes an
/// empty shape. The scene ends once every layer has run out, so a single
/// infinite layer makes the whole scene infinite.
pub struct Scene<'a, C> {
    layers: Vec<Fuse<Frames<'a, C>>>,
}

impl<'a, C: Color> Scene<'a, C> {
    /// A scene with no layers. It yields no frames.
    pub fn new() -> Self {
        Self { layers: Vec::new() }
    }

    /// Add a layer from a ready-made frame stream.
    #[must_use]
    pub fn layer(mut self, frames: Frames<'a, C>) -> Self {
        self.push(frames);
        self
    }

    /// Add a layer animating `drawable` with `effect`.
    #[must_use]
    pub fn animate<E, D>(self, effect: &'a E, drawable: D) -> Self
    where
        E: Effect<C>,
        D: IntoIterator<Item = DrawableCell<C>>,
    {
        self.layer(effect.animate(drawable.into_iter().collect()))
    }

    /// Add a layer in place.
    pub fn push(&mut self, frames: Frames<'a, C>) {
        self.layers.push(frames.fuse());
    }

    /// Number of layers.
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    /// Whether the scene has no layers.
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl<C: Color> Default for Scene<'_, C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Color> Iterator for Scene<'_, C> {
    type Item = Vec<Shape<C>>;

    fn next(&mut self) -> Option<Vec<Shape<C>>> {
        let mut live = false;
        let frame = self
            .layers
            .iter_mut()
            .map(|layer| {
                layer.next().map_or_else(Shape::empty, |shape| {
                    live = true;
                    shape
                })
            })
            .collect();
        live.then_some(frame)
    }
}

impl<C> std::fmt::Debug for Scene<'_, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("layers", &self.layers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Named;
    use crate::drawable::{text, Drawable, Style};
    use crate::effect::{Chain, Forever, Static};

    #[test]
    fn test_empty_scene() {
        let mut scene = Scene::<Named>::new();
        assert!(scene.is_empty());
        assert_eq!(scene.next(), None);
    }

    #[test]
    fn test_zip_longest_pads_with_empty() {
        let short = Static::new(1.0, 1.0);
        let long = Static::new(1.0, 3.0);
        let frames: Vec<_> = Scene::new()
            .animate(&short, text::<Named>("a", 0, 0, Style::new()))
            .animate(&long, text::<Named>("b", 1, 0, Style::new()))
            .collect();

        assert_eq!(frames.len(), 3);
        assert!(frames.iter().all(|frame| frame.len() == 2));
        assert_eq!(frames[0][0].len(), 1);
        assert!(frames[1][0].is_empty());
        assert!(frames[2][0].is_empty());
        assert_eq!(frames[2][1].cells()[0].ch, 'b');
    }

    #[test]
    fn test_infinite_layer_keeps_scene_alive() {
        let hold = Chain::new().then(Static::new(1.0, 1.0)).then(Forever);
        let once = Static::new(1.0, 1.0);
        let word = text::<Named>("hi", 0, 0, Style::new()).materialize();

        let mut scene = Scene::new()
            .animate(&hold, word.clone())
            .animate(&once, word.clone());
        assert_eq!(scene.len(), 2);
        let frame = scene.nth(500).unwrap();
        assert_eq!(frame, vec![word, Shape::empty()]);
    }
}
