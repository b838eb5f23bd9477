//! Screen: the persistent cell grid that drawables are painted onto.
//!
//! Cells are stored in row-major order in one contiguous `Vec`, beside a
//! parallel `Vec` of [`CellFlags`] recording which coordinates were drawn in
//! the current and the previous frame. A paint emits exactly the union of
//! the two, so a cell that was drawn last frame but not this one is erased
//! back to the background.

use super::cell::{Cell, CellFlags};
use super::color::{Color, Named, Rgb};
use super::diff::{render_dirty, DiffResult};
use crate::drawable::{DrawableCell, Shape};
use crate::error::{Error, Result};
use crate::terminal::OutputBuffer;
use std::borrow::Borrow;
use std::io::Write;

/// A double-buffered drawing surface.
///
/// Every [`paint`](Self::paint) writes the changed cells, then wipes the
/// grid back to the background so the next frame starts clean. The grid is
/// allocated once and never resized.
#[derive(Clone)]
pub struct Screen<C: Color> {
    /// Contiguous cell storage (row-major order).
    cells: Vec<Cell<C>>,
    /// Redraw flags, one per cell.
    flags: Vec<CellFlags>,
    /// Number of rows.
    lines: usize,
    /// Number of columns.
    columns: usize,
    /// Terminal position of the top-left cell, `(row, col)`.
    offset: (u16, u16),
    /// Wrap out-of-range coordinates instead of clipping them.
    wrap: bool,
    /// Background every cell is reset to.
    background: Option<C>,
    /// Reused escape-sequence buffer.
    output: OutputBuffer,
}

/// Screen in true-color mode.
pub type RgbScreen = Screen<Rgb>;

/// Screen in 16-color mode.
pub type NamedScreen = Screen<Named>;

impl<C: Color> Screen<C> {
    /// Create a screen of `lines × columns` cells.
    ///
    /// Every cell starts out dirty so the first paint covers the whole area.
    ///
    /// # Panics
    /// Panics if `lines` or `columns` is 0. Use [`try_new`](Self::try_new)
    /// for sizes that come from outside the program.
    pub fn new(lines: usize, columns: usize) -> Self {
        assert!(lines > 0 && columns > 0, "Screen dimensions must be non-zero");
        let size = lines * columns;
        Self {
            cells: vec![Cell::blank(None); size],
            flags: vec![CellFlags::DIRTY; size],
            lines,
            columns,
            offset: (0, 0),
            wrap: false,
            background: None,
            output: OutputBuffer::with_capacity(65536),
        }
    }

    /// Create a screen of `lines × columns` cells, or fail on a zero size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyScreen`] if `lines` or `columns` is 0.
    pub fn try_new(lines: usize, columns: usize) -> Result<Self> {
        if lines == 0 || columns == 0 {
            return Err(Error::EmptyScreen { lines, columns });
        }
        Ok(Self::new(lines, columns))
    }

    /// Create a screen covering the whole terminal.
    ///
    /// # Errors
    ///
    /// Fails if the terminal cannot be queried, or reports a zero size as
    /// unsized ptys do.
    pub fn fit_terminal() -> Result<Self> {
        let (lines, columns) = crate::terminal::size()?;
        Self::try_new(lines, columns)
    }

    /// Place the top-left cell at terminal position `(row, col)`.
    #[must_use]
    pub const fn with_offset(mut self, offset: (u16, u16)) -> Self {
        self.offset = offset;
        self
    }

    /// Wrap coordinates around the edges instead of clipping them.
    #[must_use]
    pub const fn with_wrap(mut self, wrap: bool) -> Self {
        self.wrap = wrap;
        self
    }

    /// Set the background every cell is reset to between frames.
    #[must_use]
    pub fn with_background(mut self, background: impl Into<Option<C>>) -> Self {
        self.background = background.into();
        self.cells.fill(Cell::blank(self.background));
        self
    }

    /// Number of rows.
    #[inline]
    pub const fn lines(&self) -> usize {
        self.lines
    }

    /// Number of columns.
    #[inline]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Terminal position of the top-left cell.
    #[inline]
    pub const fn offset(&self) -> (u16, u16) {
        self.offset
    }

    /// Whether coordinates wrap.
    #[inline]
    pub const fn wrap(&self) -> bool {
        self.wrap
    }

    /// The reset background.
    #[inline]
    pub const fn background(&self) -> Option<C> {
        self.background
    }

    /// Get a reference to the underlying cell slice.
    #[inline]
    pub fn cells(&self) -> &[Cell<C>] {
        &self.cells
    }

    /// Get the redraw flags, parallel to [`cells`](Self::cells).
    #[inline]
    pub fn flags(&self) -> &[CellFlags] {
        &self.flags
    }

    /// Escape sequences written by the most recent paint.
    #[inline]
    pub fn last_output(&self) -> &[u8] {
        self.output.as_bytes()
    }

    /// Resolve a drawable coordinate to a linear index.
    ///
    /// Returns `None` if the coordinate is off screen and wrapping is off.
    #[inline]
    pub fn index_of(&self, row: i32, col: i32) -> Option<usize> {
        let (row, col) = (i64::from(row), i64::from(col));
        let (lines, columns) = (self.lines as i64, self.columns as i64);
        let (row, col) = if self.wrap {
            (row.rem_euclid(lines), col.rem_euclid(columns))
        } else if (0..lines).contains(&row) && (0..columns).contains(&col) {
            (row, col)
        } else {
            return None;
        };
        Some(row as usize * self.columns + col as usize)
    }

    /// Get the cell at `(row, col)`, resolving wrap the same way draws do.
    #[inline]
    pub fn cell(&self, row: i32, col: i32) -> Option<&Cell<C>> {
        self.index_of(row, col).map(|i| &self.cells[i])
    }

    /// Whether `(row, col)` has been drawn during the current frame.
    #[inline]
    pub fn is_dirty(&self, row: i32, col: i32) -> bool {
        self.index_of(row, col)
            .is_some_and(|i| self.flags[i].contains(CellFlags::DIRTY))
    }

    /// Draw one cell.
    ///
    /// The glyph and modifiers always replace what was there. Colors are
    /// composed onto the cell's current background by the color mode (see
    /// [`Color::layer`]): an absent background is inherited, and RGB colors
    /// are blended with the cell's alpha.
    ///
    /// Returns `false` if the cell was clipped. Clipping is silent.
    pub fn draw(&mut self, cell: &DrawableCell<C>) -> bool {
        let Some(idx) = self.index_of(cell.row, cell.col) else {
            return false;
        };

        let backdrop = self.cells[idx].bg();
        let (fg, bg) = C::layer(backdrop, cell.fg, cell.bg, cell.alpha);
        self.cells[idx] = Cell::new(cell.ch)
            .with_fg(fg)
            .with_bg(bg)
            .with_modifiers(cell.modifiers);
        self.flags[idx].insert(CellFlags::DIRTY);
        true
    }

    /// Draw every cell of every drawable, in order.
    ///
    /// Later drawables land on top of earlier ones. Anything drawn stays on
    /// the grid until the next paint.
    pub fn draw_many<I>(&mut self, drawables: I)
    where
        I: IntoIterator,
        I::Item: IntoIterator,
        <I::Item as IntoIterator>::Item: Borrow<DrawableCell<C>>,
    {
        for drawable in drawables {
            for cell in drawable {
                self.draw(cell.borrow());
            }
        }
    }

    /// Draw a materialized shape.
    pub fn draw_shape(&mut self, shape: &Shape<C>) {
        for cell in shape {
            self.draw(cell);
        }
    }

    /// Emit escape sequences for every coordinate to be redrawn, without
    /// advancing the frame.
    pub fn render(&self, output: &mut OutputBuffer) -> DiffResult {
        render_dirty(self, output)
    }

    /// Flush the frame to `out` in a single write and start the next one.
    ///
    /// The grid is reset to background and this frame's dirty set becomes
    /// the previous frame's, even when the write fails.
    pub fn paint<W: Write>(&mut self, out: &mut W) -> Result<DiffResult> {
        let mut output = std::mem::take(&mut self.output);
        output.clear();
        let result = render_dirty(self, &mut output);

        let written = output.flush_to(out);
        tracing::trace!(
            cells = result.cells_changed,
            bytes = output.len(),
            "painted frame"
        );

        self.output = output;
        self.next_frame();
        written?;
        Ok(result)
    }

    /// Paint to the process's standard output.
    pub fn paint_stdout(&mut self) -> Result<DiffResult> {
        let stdout = std::io::stdout();
        let mut lock = stdout.lock();
        self.paint(&mut lock)
    }

    /// Reset the grid to background and age the dirty flags by one frame.
    fn next_frame(&mut self) {
        self.cells.fill(Cell::blank(self.background));
        for flags in &mut self.flags {
            *flags = flags.advance();
        }
    }
}

impl<C: Color> std::fmt::Debug for Screen<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Screen")
            .field("lines", &self.lines)
            .field("columns", &self.columns)
            .field("offset", &self.offset)
            .field("wrap", &self.wrap)
            .field("background", &self.background)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Modifiers;
    use crate::drawable::{block, text, Drawable, Style};

    /// Paint twice so the initial full-screen flush is out of the way.
    fn settled<C: Color>(mut screen: Screen<C>) -> Screen<C> {
        let mut sink = Vec::new();
        screen.paint(&mut sink).unwrap();
        screen.paint(&mut sink).unwrap();
        screen
    }

    #[test]
    fn test_try_new_rejects_empty_sizes() {
        for (lines, columns) in [(0, 0), (0, 80), (24, 0)] {
            let result = RgbScreen::try_new(lines, columns);
            assert!(matches!(
                result,
                Err(Error::EmptyScreen { lines: l, columns: c }) if l == lines && c == columns
            ));
        }
        let screen = NamedScreen::try_new(1, 1).unwrap();
        assert_eq!((screen.lines(), screen.columns()), (1, 1));
    }

    #[test]
    fn test_screen_new() {
        let screen = RgbScreen::new(24, 80);
        assert_eq!(screen.lines(), 24);
        assert_eq!(screen.columns(), 80);
        assert_eq!(screen.cells().len(), 24 * 80);
        assert!(screen.flags().iter().all(|f| *f == CellFlags::DIRTY));
        assert_eq!(screen.cell(0, 0), Some(&Cell::blank(None)));
    }

    #[test]
    #[should_panic]
    fn test_screen_zero_lines() {
        NamedScreen::new(0, 10);
    }

    #[test]
    fn test_background_initializes_cells() {
        let screen = RgbScreen::new(2, 2).with_background(Rgb::BLUE);
        assert!(screen.cells().iter().all(|c| c.bg() == Some(Rgb::BLUE) && c.ch() == ' '));
    }

    #[test]
    fn test_draw_clips_without_wrap() {
        let mut screen = NamedScreen::new(5, 10);
        let style = Style::new();
        assert!(!screen.draw(&DrawableCell::new('x', -1, 0, style)));
        assert!(!screen.draw(&DrawableCell::new('x', 0, 10, style)));
        assert!(!screen.draw(&DrawableCell::new('x', 5, 0, style)));
        assert!(screen.draw(&DrawableCell::new('x', 4, 9, style)));
        assert_eq!(screen.cell(4, 9).unwrap().ch(), 'x');
    }

    #[test]
    fn test_draw_wraps_euclidean() {
        let mut screen = NamedScreen::new(5, 10).with_wrap(true);
        assert!(screen.draw(&DrawableCell::new('w', -1, -3, Style::new())));
        assert_eq!(screen.cell(4, 7).unwrap().ch(), 'w');
        assert!(screen.draw(&DrawableCell::new('v', 12, 25, Style::new())));
        assert_eq!(screen.cell(2, 5).unwrap().ch(), 'v');
        assert!(screen.is_dirty(4, 7));
    }

    #[test]
    fn test_named_draw_inherits_background() {
        let mut screen = NamedScreen::new(3, 3);
        screen.draw_many([block(' ', 0..3, 0..3, Style::new().bg(Named::White))]);
        screen.draw_many([text("hi", 1, 0, Style::new().fg(Named::Red).bold())]);

        let cell = screen.cell(1, 0).unwrap();
        assert_eq!(cell.ch(), 'h');
        assert_eq!(cell.fg(), Some(Named::Red));
        assert_eq!(cell.bg(), Some(Named::White));
        assert!(cell.is_bold());

        // Overwrite without a foreground: the foreground goes away.
        screen.draw(&DrawableCell::new('-', 1, 0, Style::new()));
        let cell = screen.cell(1, 0).unwrap();
        assert_eq!(cell.fg(), None);
        assert_eq!(cell.bg(), Some(Named::White));
        assert_eq!(cell.modifiers(), Modifiers::empty());
    }

    #[test]
    fn test_rgb_draw_blends_with_backdrop() {
        let mut screen = RgbScreen::new(1, 4).with_background(Rgb::BLACK);
        let style = Style::new().fg(Rgb::WHITE).bg(Rgb::RED).alpha(0.5);
        screen.draw(&DrawableCell::new('a', 0, 0, style));

        let cell = screen.cell(0, 0).unwrap();
        assert_eq!(cell.fg(), Some(Rgb::new(127.5, 127.5, 127.5)));
        assert_eq!(cell.bg(), Some(Rgb::new(127.5, 0.0, 0.0)));
    }

    #[test]
    fn test_rgb_opaque_fg_lands_on_old_background() {
        let mut screen = RgbScreen::new(1, 1);
        screen.draw(&DrawableCell::new(' ', 0, 0, Style::new().bg(Rgb::BLUE)));
        screen.draw(&DrawableCell::new('x', 0, 0, Style::new().fg(Rgb::WHITE)));
        screen.draw(&DrawableCell::new('y', 0, 0, Style::new().fg(Rgb::GREEN)));

        let cell = screen.cell(0, 0).unwrap();
        assert_eq!(cell.ch(), 'y');
        assert_eq!(cell.fg(), Some(Rgb::GREEN));
        // Background untouched by both foreground-only draws.
        assert_eq!(cell.bg(), Some(Rgb::BLUE));
    }

    #[test]
    fn test_transparent_draw_keeps_colors() {
        let mut screen = RgbScreen::new(1, 1).with_background(Rgb::BLUE);
        let faded = text("x", 0, 0, Style::new().fg(Rgb::WHITE).bg(Rgb::RED)).set_alpha(0.0);
        screen.draw_many([faded]);
        let cell = screen.cell(0, 0).unwrap();
        assert_eq!(cell.ch(), 'x');
        assert_eq!(cell.fg(), Some(Rgb::BLUE));
        assert_eq!(cell.bg(), Some(Rgb::BLUE));
    }

    #[test]
    fn test_draw_many_layers_in_order() {
        let mut screen = NamedScreen::new(1, 5);
        let under = text("aaaaa", 0, 0, Style::new()).materialize();
        let over = text("bb", 0, 1, Style::new()).materialize();
        screen.draw_many([&under, &over]);

        let row: String = (0..5).map(|c| screen.cell(0, c).unwrap().ch()).collect();
        assert_eq!(row, "abbaa");
    }

    #[test]
    fn test_paint_resets_to_background() {
        let mut screen = RgbScreen::new(2, 2).with_background(Rgb::BLUE);
        screen.draw_shape(&text("ab", 0, 0, Style::new().fg(Rgb::WHITE)).materialize());
        screen.paint(&mut Vec::new()).unwrap();

        assert!(screen.cells().iter().all(|c| *c == Cell::blank(Some(Rgb::BLUE))));
        assert!(!screen.is_dirty(0, 0));
        assert_eq!(screen.cell(0, 0).map(Cell::ch), Some(' '));
    }

    #[test]
    fn test_first_paint_covers_everything() {
        let mut screen = NamedScreen::new(3, 4);
        let result = screen.paint(&mut Vec::new()).unwrap();
        assert_eq!(result.cells_changed, 12);

        // Second frame still erases everything that was painted before.
        let result = screen.paint(&mut Vec::new()).unwrap();
        assert_eq!(result.cells_changed, 12);

        // Nothing drawn in two frames: nothing to emit.
        let mut out = Vec::new();
        let result = screen.paint(&mut out).unwrap();
        assert_eq!(result.cells_changed, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_clipped_text_paints_visible_cells_only() {
        let mut screen = settled(NamedScreen::new(5, 10));
        screen.draw_many([text("HELLO", 0, 8, Style::new())]);
        assert!(screen.is_dirty(0, 8) && screen.is_dirty(0, 9));

        let mut out = Vec::new();
        let result = screen.paint(&mut out).unwrap();
        assert_eq!(result.cells_changed, 2);
        assert_eq!(out, b"\x1b[1;9HH\x1b[0m\x1b[1;10HE\x1b[0m");
        assert_eq!(screen.last_output(), out.as_slice());

        // Next frame draws nothing, so the same two cells are erased.
        let mut out = Vec::new();
        let result = screen.paint(&mut out).unwrap();
        assert_eq!(result.cells_changed, 2);
        assert_eq!(out, b"\x1b[1;9H \x1b[0m\x1b[1;10H \x1b[0m");
    }

    #[test]
    fn test_paint_writes_rendered_frame() {
        let mut screen = settled(RgbScreen::new(2, 6).with_background(Rgb::BLACK));
        screen.draw_many([text("ok", 1, 2, Style::new().fg(Rgb::WHITE).bold())]);

        let mut rendered = OutputBuffer::new();
        let expected = screen.render(&mut rendered);
        let mut out = Vec::new();
        let result = screen.paint(&mut out).unwrap();

        assert_eq!(result, expected);
        assert_eq!(out, rendered.as_bytes());
        assert_eq!(screen.last_output(), rendered.as_bytes());
        assert!(out.starts_with(b"\x1b[2;3H\x1b[38;2;255;255;255m\x1b[48;2;0;0;0m\x1b[1mo\x1b[0m"));
    }

    #[test]
    fn test_previous_and_current_dirty_union() {
        let mut screen = settled(NamedScreen::new(2, 4));
        screen.draw(&DrawableCell::new('a', 0, 0, Style::new()));
        screen.paint(&mut Vec::new()).unwrap();

        screen.draw(&DrawableCell::new('b', 1, 3, Style::new()));
        let result = screen.paint(&mut Vec::new()).unwrap();
        // (0, 0) erased plus (1, 3) drawn.
        assert_eq!(result.cells_changed, 2);
    }

    #[test]
    fn test_paint_reports_write_errors() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut screen = NamedScreen::new(1, 1);
        assert!(screen.paint(&mut Broken).is_err());
        // The frame still advanced.
        assert_eq!(screen.flags()[0], CellFlags::WAS_DIRTY);
    }
}
