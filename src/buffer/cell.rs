//! Cell: The atomic unit of terminal display.
//!
//! A cell holds one glyph with optional colors and style modifiers. An
//! absent color means "nothing set here"; the renderer emits no color code
//! for it and the terminal's own default shows through.

use super::color::Color;
use bitflags::bitflags;

bitflags! {
    /// Text style modifiers.
    ///
    /// These can be combined using bitwise OR.
    ///
    /// # Example
    /// ```
    /// use termanim::Modifiers;
    /// let style = Modifiers::BOLD | Modifiers::ITALIC;
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Bold text
        const BOLD = 0b0000_0001;
        /// Dim/faint text
        const DIM = 0b0000_0010;
        /// Italic text
        const ITALIC = 0b0000_0100;
        /// Underlined text
        const UNDERLINE = 0b0000_1000;
        /// Blinking text
        const BLINK = 0b0001_0000;
        /// Reversed colors (fg/bg swapped)
        const REVERSED = 0b0010_0000;
        /// Hidden/invisible text
        const HIDDEN = 0b0100_0000;
        /// Strikethrough text
        const STRIKETHROUGH = 0b1000_0000;
    }
}

impl std::fmt::Debug for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

bitflags! {
    /// Per-coordinate redraw tracking.
    ///
    /// Kept beside the cell grid rather than inside it, because the grid is
    /// wiped back to background after every paint while these must survive.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CellFlags: u8 {
        /// Cell was drawn during the current frame
        const DIRTY = 0b0000_0001;
        /// Cell was drawn during the previous frame
        const WAS_DIRTY = 0b0000_0010;
    }
}

impl std::fmt::Debug for CellFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

impl CellFlags {
    /// Whether the coordinate must be emitted on the next paint.
    #[inline]
    pub const fn needs_redraw(self) -> bool {
        self.intersects(Self::DIRTY.union(Self::WAS_DIRTY))
    }

    /// Age the flags by one frame: this frame's writes become last frame's.
    #[inline]
    #[must_use]
    pub const fn advance(self) -> Self {
        if self.contains(Self::DIRTY) {
            Self::WAS_DIRTY
        } else {
            Self::empty()
        }
    }
}

/// A single screen cell.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Cell<C> {
    /// Glyph to display.
    ch: char,
    /// Foreground color.
    fg: Option<C>,
    /// Background color.
    bg: Option<C>,
    /// Text modifiers (bold, italic, etc.).
    modifiers: Modifiers,
}

impl<C: Color> Default for Cell<C> {
    fn default() -> Self {
        Self::blank(None)
    }
}

impl<C: Color> Cell<C> {
    /// A space with no foreground over the given background.
    #[inline]
    pub const fn blank(bg: Option<C>) -> Self {
        Self {
            ch: ' ',
            fg: None,
            bg,
            modifiers: Modifiers::empty(),
        }
    }

    /// Create a new cell with no colors or modifiers.
    #[inline]
    pub const fn new(ch: char) -> Self {
        Self {
            ch,
            fg: None,
            bg: None,
            modifiers: Modifiers::empty(),
        }
    }

    /// Get the glyph.
    #[inline]
    pub const fn ch(&self) -> char {
        self.ch
    }

    /// Get the foreground color.
    #[inline]
    pub const fn fg(&self) -> Option<C> {
        self.fg
    }

    /// Get the background color.
    #[inline]
    pub const fn bg(&self) -> Option<C> {
        self.bg
    }

    /// Get the modifiers.
    #[inline]
    pub const fn modifiers(&self) -> Modifiers {
        self.modifiers
    }

    /// Whether the cell is bold.
    #[inline]
    pub const fn is_bold(&self) -> bool {
        self.modifiers.contains(Modifiers::BOLD)
    }

    /// Set the foreground color (builder pattern).
    #[inline]
    #[must_use]
    pub fn with_fg(mut self, fg: impl Into<Option<C>>) -> Self {
        self.fg = fg.into();
        self
    }

    /// Set the background color (builder pattern).
    #[inline]
    #[must_use]
    pub fn with_bg(mut self, bg: impl Into<Option<C>>) -> Self {
        self.bg = bg.into();
        self
    }

    /// Set the modifiers (builder pattern).
    #[inline]
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}
