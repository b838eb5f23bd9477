//! Shape: a materialized drawable.
//!
//! Gradients need the bounding box before they can emit a single cell and
//! intersections compare whole coordinate sets, so both live here and never
//! on the lazy side.

use super::DrawableCell;
use crate::buffer::Color;
use std::collections::BTreeSet;

/// Inclusive bounding box of a shape's coordinates.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Bounds {
    /// Smallest row.
    pub top: i32,
    /// Largest row.
    pub bottom: i32,
    /// Smallest column.
    pub left: i32,
    /// Largest column.
    pub right: i32,
}

impl Bounds {
    /// Rows spanned minus one (0 for a single row).
    #[inline]
    pub const fn height(&self) -> u32 {
        self.bottom.abs_diff(self.top)
    }

    /// Columns spanned minus one (0 for a single column).
    #[inline]
    pub const fn width(&self) -> u32 {
        self.right.abs_diff(self.left)
    }

    /// Check if a point is inside the box.
    #[inline]
    pub const fn contains(&self, row: i32, col: i32) -> bool {
        row >= self.top && row <= self.bottom && col >= self.left && col <= self.right
    }

    /// Fractional position `(y, x)` of a point, each in `[0, 1]` inside the box.
    ///
    /// A zero-height or zero-width box maps that axis to 0.
    #[inline]
    pub fn fraction(&self, row: i32, col: i32) -> (f32, f32) {
        (
            ratio(row.abs_diff(self.top), self.height()),
            ratio(col.abs_diff(self.left), self.width()),
        )
    }
}

#[inline]
fn ratio(offset: u32, span: u32) -> f32 {
    if span == 0 {
        0.0
    } else {
        offset as f32 / span as f32
    }
}

/// An ordered, re-iterable sequence of drawable cells.
#[derive(Clone, PartialEq, Debug)]
pub struct Shape<C> {
    cells: Vec<DrawableCell<C>>,
}

impl<C> Default for Shape<C> {
    fn default() -> Self {
        Self { cells: Vec::new() }
    }
}

impl<C: Color> Shape<C> {
    /// Wrap already-buffered cells.
    pub const fn new(cells: Vec<DrawableCell<C>>) -> Self {
        Self { cells }
    }

    /// An empty shape.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the shape has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The cells in order.
    #[inline]
    pub fn cells(&self) -> &[DrawableCell<C>] {
        &self.cells
    }

    /// Iterate over the cells by reference.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, DrawableCell<C>> {
        self.cells.iter()
    }

    /// Unwrap into the cell vector.
    pub fn into_cells(self) -> Vec<DrawableCell<C>> {
        self.cells
    }

    /// Bounding box, or `None` for an empty shape.
    pub fn bounds(&self) -> Option<Bounds> {
        let first = self.cells.first()?;
        let init = Bounds {
            top: first.row,
            bottom: first.row,
            left: first.col,
            right: first.col,
        };
        Some(self.cells.iter().fold(init, |b, cell| Bounds {
            top: b.top.min(cell.row),
            bottom: b.bottom.max(cell.row),
            left: b.left.min(cell.col),
            right: b.right.max(cell.col),
        }))
    }

    /// The set of `(row, col)` pairs covered, ignoring style.
    pub fn coordinates(&self) -> BTreeSet<(i32, i32)> {
        self.cells.iter().map(DrawableCell::coords).collect()
    }

    /// Apply `f` to a copy of every cell.
    #[must_use]
    pub fn map_cells(&self, f: impl FnMut(DrawableCell<C>) -> DrawableCell<C>) -> Self {
        self.cells.iter().copied().map(f).collect()
    }

    /// Copy with every cell's opacity replaced.
    #[must_use]
    pub fn with_alpha(&self, alpha: f32) -> Self {
        self.map_cells(|mut cell| {
            cell.alpha = alpha;
            cell
        })
    }

    /// Copy with every cell's foreground replaced.
    #[must_use]
    pub fn with_fg(&self, fg: Option<C>) -> Self {
        self.map_cells(|mut cell| {
            cell.fg = fg;
            cell
        })
    }

    /// Copy with every cell's background replaced.
    #[must_use]
    pub fn with_bg(&self, bg: Option<C>) -> Self {
        self.map_cells(|mut cell| {
            cell.bg = bg;
            cell
        })
    }

    /// Copy shifted by `(rows, cols)`.
    #[must_use]
    pub fn translate(&self, rows: i32, cols: i32) -> Self {
        self.map_cells(|mut cell| {
            cell.row = cell.row.saturating_add(rows);
            cell.col = cell.col.saturating_add(cols);
            cell
        })
    }

    /// Left-to-right gradient.
    ///
    /// The leftmost column keeps its colors; towards the right `fg` and `bg`
    /// are mixed in, reaching strength `mix` at the rightmost column.
    #[must_use]
    pub fn gradient_right(&self, fg: Option<C>, bg: Option<C>, mix: f32) -> Self {
        self.gradient(fg, bg, |_, x| x * mix)
    }

    /// Top-to-bottom gradient, the vertical counterpart of
    /// [`gradient_right`](Self::gradient_right).
    #[must_use]
    pub fn gradient_down(&self, fg: Option<C>, bg: Option<C>, mix: f32) -> Self {
        self.gradient(fg, bg, |y, _| y * mix)
    }

    /// Two-dimensional gradient.
    ///
    /// `mix_fn(y, x)` gives the strength of the new colors at fractional
    /// position `(y, x)` in the bounding box, with `(0, 0)` top left and
    /// `(1, 1)` bottom right. A radial glow centered on the box is
    /// `|y, x| a / ((0.5 - x).powi(2) + (0.5 - y).powi(2) + a)`.
    #[must_use]
    pub fn gradient(
        &self,
        fg: Option<C>,
        bg: Option<C>,
        mix_fn: impl Fn(f32, f32) -> f32,
    ) -> Self {
        let Some(bounds) = self.bounds() else {
            return Self::empty();
        };
        self.map_cells(|mut cell| {
            let (y, x) = bounds.fraction(cell.row, cell.col);
            let strength = mix_fn(y, x);
            cell.fg = C::mix(cell.fg, fg, strength);
            cell.bg = C::mix(cell.bg, bg, strength);
            cell
        })
    }
}

impl<C> FromIterator<DrawableCell<C>> for Shape<C> {
    fn from_iter<I: IntoIterator<Item = DrawableCell<C>>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

impl<C> Extend<DrawableCell<C>> for Shape<C> {
    fn extend<I: IntoIterator<Item = DrawableCell<C>>>(&mut self, iter: I) {
        self.cells.extend(iter);
    }
}

impl<C> IntoIterator for Shape<C> {
    type Item = DrawableCell<C>;
    type IntoIter = std::vec::IntoIter<DrawableCell<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a, C> IntoIterator for &'a Shape<C> {
    type Item = &'a DrawableCell<C>;
    type IntoIter = std::slice::Iter<'a, DrawableCell<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Coordinates present in every one of `shapes`.
///
/// Used for collision checks between drawn objects. No shapes at all gives
/// an empty set.
pub fn intersection<'a, C, I>(shapes: I) -> BTreeSet<(i32, i32)>
where
    C: Color + 'a,
    I: IntoIterator<Item = &'a Shape<C>>,
{
    let mut shapes = shapes.into_iter();
    let Some(first) = shapes.next() else {
        return BTreeSet::new();
    };
    shapes.fold(first.coordinates(), |mut common, shape| {
        let other = shape.coordinates();
        common.retain(|coord| other.contains(coord));
        common
    })
}
