//! Drawables: positioned, styled cells and the algebra over them.
//!
//! A drawable is any iterator of [`DrawableCell`]s. Generators ([`text`],
//! [`block`]) and the adapters on [`Drawable`] are lazy and single-pass:
//! once consumed, a drawable is gone. Anything that needs to look at a whole
//! shape (gradients, bounding boxes, intersections, effects) works on a
//! [`Shape`], the materialized form, which can be iterated any number of
//! times.
//!
//! Coordinates are signed and unclipped. Clipping and wrapping are the
//! screen buffer's job. Arithmetic on them saturates at the ends of the
//! `i32` range, which lie far off any screen.
//!
//! ```
//! use termanim::drawable::{text, Drawable, Style};
//! use termanim::Rgb;
//!
//! let hello = text("Hello", 0, 0, Style::new().fg(Rgb::WHITE))
//!     .translate(2, 4)
//!     .set_alpha(0.5)
//!     .materialize();
//! assert_eq!(hello.len(), 5);
//! ```

mod shape;

pub use shape::{intersection, Bounds, Shape};

use crate::buffer::{Color, Modifiers};

/// One positioned cell of a drawable.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct DrawableCell<C> {
    /// Glyph.
    pub ch: char,
    /// Row, possibly outside the screen.
    pub row: i32,
    /// Column, possibly outside the screen.
    pub col: i32,
    /// Foreground color; `None` leaves the backdrop.
    pub fg: Option<C>,
    /// Background color; `None` inherits the cell's current background.
    pub bg: Option<C>,
    /// Text modifiers.
    pub modifiers: Modifiers,
    /// Opacity in `[0, 1]`. Only RGB screens blend with it.
    pub alpha: f32,
}

impl<C: Color> DrawableCell<C> {
    /// A cell at `(row, col)` carrying `style`.
    #[inline]
    pub fn new(ch: char, row: i32, col: i32, style: Style<C>) -> Self {
        Self {
            ch,
            row,
            col,
            fg: style.fg,
            bg: style.bg,
            modifiers: style.modifiers,
            alpha: style.alpha,
        }
    }

    /// The `(row, col)` pair.
    #[inline]
    pub const fn coords(&self) -> (i32, i32) {
        (self.row, self.col)
    }
}

/// Colors, modifiers and opacity shared by every cell a generator emits.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Style<C> {
    /// Foreground color.
    pub fg: Option<C>,
    /// Background color.
    pub bg: Option<C>,
    /// Text modifiers.
    pub modifiers: Modifiers,
    /// Opacity.
    pub alpha: f32,
}

impl<C> Default for Style<C> {
    fn default() -> Self {
        Self {
            fg: None,
            bg: None,
            modifiers: Modifiers::empty(),
            alpha: 1.0,
        }
    }
}

impl<C: Color> Style<C> {
    /// No colors, no modifiers, fully opaque.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the foreground color.
    #[must_use]
    pub fn fg(mut self, fg: impl Into<Option<C>>) -> Self {
        self.fg = fg.into();
        self
    }

    /// Set the background color.
    #[must_use]
    pub fn bg(mut self, bg: impl Into<Option<C>>) -> Self {
        self.bg = bg.into();
        self
    }

    /// Turn on bold.
    #[must_use]
    pub fn bold(mut self) -> Self {
        self.modifiers |= Modifiers::BOLD;
        self
    }

    /// Replace the modifiers.
    #[must_use]
    pub const fn modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Set the opacity.
    #[must_use]
    pub const fn alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }
}

/// One cell per character of `value`, left to right from `(row, col)`.
///
/// No wrapping happens here; characters past the screen edge are clipped or
/// wrapped by the screen. Characters that would land past `i32::MAX` are
/// dropped.
pub fn text<C: Color>(
    value: &str,
    row: i32,
    col: i32,
    style: Style<C>,
) -> impl Iterator<Item = DrawableCell<C>> + '_ {
    value
        .chars()
        .zip(col..=i32::MAX)
        .map(move |(ch, col)| DrawableCell::new(ch, row, col, style))
}

/// The cartesian product `rows × cols`, every cell filled with `fill`.
///
/// Rows and columns need not be contiguous: strided or sparse sequences give
/// grids and hollow outlines.
pub fn block<C, R, K>(
    fill: char,
    rows: R,
    cols: K,
    style: Style<C>,
) -> impl Iterator<Item = DrawableCell<C>>
where
    C: Color,
    R: IntoIterator<Item = i32>,
    K: IntoIterator<Item = i32>,
    K::IntoIter: Clone,
{
    let cols = cols.into_iter();
    rows.into_iter().flat_map(move |row| {
        cols.clone()
            .map(move |col| DrawableCell::new(fill, row, col, style))
    })
}

/// Lazy adapters available on every drawable.
///
/// Each adapter replaces one field and passes everything else through,
/// preserving order.
pub trait Drawable<C: Color>: Iterator<Item = DrawableCell<C>> + Sized {
    /// Replace the foreground color of every cell.
    fn recolor_fg(self, fg: impl Into<Option<C>>) -> impl Iterator<Item = DrawableCell<C>> {
        let fg = fg.into();
        self.map(move |mut cell| {
            cell.fg = fg;
            cell
        })
    }

    /// Replace the background color of every cell.
    fn recolor_bg(self, bg: impl Into<Option<C>>) -> impl Iterator<Item = DrawableCell<C>> {
        let bg = bg.into();
        self.map(move |mut cell| {
            cell.bg = bg;
            cell
        })
    }

    /// Replace the opacity of every cell.
    fn set_alpha(self, alpha: f32) -> impl Iterator<Item = DrawableCell<C>> {
        self.map(move |mut cell| {
            cell.alpha = alpha;
            cell
        })
    }

    /// Replace the modifiers of every cell.
    fn set_modifiers(self, modifiers: Modifiers) -> impl Iterator<Item = DrawableCell<C>> {
        self.map(move |mut cell| {
            cell.modifiers = modifiers;
            cell
        })
    }

    /// Shift every cell by `(rows, cols)`. Nothing is clipped.
    fn translate(self, rows: i32, cols: i32) -> impl Iterator<Item = DrawableCell<C>> {
        self.map(move |mut cell| {
            cell.row = cell.row.saturating_add(rows);
            cell.col = cell.col.saturating_add(cols);
            cell
        })
    }

    /// Buffer the cells into a re-iterable [`Shape`].
    fn materialize(self) -> Shape<C> {
        self.collect()
    }
}

impl<C: Color, I: Iterator<Item = DrawableCell<C>>> Drawable<C> for I {}
