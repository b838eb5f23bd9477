//! `OutputBuffer`: the one place escape sequences are spelled out.
//!
//! The renderer writes every frame through it and the terminal session
//! writes its setup and restore sequences through it, so the byte format
//! lives here alone.

use crate::buffer::{Color, Modifiers};
use std::io::Write;

/// SGR parameter for each modifier, in emission order.
const MODIFIER_CODES: [(Modifiers, &[u8]); 8] = [
    (Modifiers::BOLD, b"\x1b[1m"),
    (Modifiers::DIM, b"\x1b[2m"),
    (Modifiers::ITALIC, b"\x1b[3m"),
    (Modifiers::UNDERLINE, b"\x1b[4m"),
    (Modifiers::BLINK, b"\x1b[5m"),
    (Modifiers::REVERSED, b"\x1b[7m"),
    (Modifiers::HIDDEN, b"\x1b[8m"),
    (Modifiers::STRIKETHROUGH, b"\x1b[9m"),
];

/// Pre-allocated buffer for building ANSI escape sequences.
///
/// All output is accumulated here, then flushed in a single `write()` syscall
/// to prevent terminal flickering.
#[derive(Debug, Clone)]
pub struct OutputBuffer {
    data: Vec<u8>,
}

impl OutputBuffer {
    /// Create a new output buffer with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Create a buffer sized for control sequences (256 bytes).
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    /// Empty the buffer, keeping its allocation.
    #[inline]
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Everything written so far.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Bytes written so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether nothing has been written.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Write one glyph, UTF-8 encoded.
    #[inline]
    pub fn write_char(&mut self, ch: char) {
        let mut utf8 = [0u8; 4];
        self.data.extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
    }

    /// Move the cursor to the 0-indexed `(row, col)`.
    ///
    /// Always the full `ESC[r;cH` form, even for the home position.
    #[inline]
    pub fn cursor_goto(&mut self, row: usize, col: usize) {
        // CSI row ; col H, 1-indexed
        let _ = write!(self.data, "\x1b[{};{}H", row + 1, col + 1);
    }

    /// Move the cursor to the top-left corner.
    #[inline]
    pub fn cursor_home(&mut self) {
        self.data.extend_from_slice(b"\x1b[H");
    }

    /// Hide the cursor.
    #[inline]
    pub fn cursor_hide(&mut self) {
        self.data.extend_from_slice(b"\x1b[?25l");
    }

    /// Show the cursor.
    #[inline]
    pub fn cursor_show(&mut self) {
        self.data.extend_from_slice(b"\x1b[?25h");
    }

    /// Set the foreground color.
    #[inline]
    pub fn set_fg<C: Color>(&mut self, color: C) {
        color.write_fg(&mut self.data);
    }

    /// Set the background color.
    #[inline]
    pub fn set_bg<C: Color>(&mut self, color: C) {
        color.write_bg(&mut self.data);
    }

    /// Turn on every modifier in `modifiers`, one SGR sequence each.
    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        for (flag, code) in MODIFIER_CODES {
            if modifiers.contains(flag) {
                self.data.extend_from_slice(code);
            }
        }
    }

    /// Reset all attributes.
    #[inline]
    pub fn reset_attrs(&mut self) {
        self.data.extend_from_slice(b"\x1b[0m");
    }

    /// Clear the entire screen.
    #[inline]
    pub fn clear_screen(&mut self) {
        self.data.extend_from_slice(b"\x1b[2J");
    }

    /// Flush to a writer in a single syscall.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn flush_to<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        writer.write_all(&self.data)?;
        writer.flush()
    }
}

impl Default for OutputBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::{Named, Rgb};

    #[test]
    fn test_control_sequences() {
        let mut out = OutputBuffer::new();
        out.cursor_hide();
        out.clear_screen();
        out.cursor_home();
        out.cursor_goto(4, 9);
        out.cursor_show();
        assert_eq!(out.as_bytes(), b"\x1b[?25l\x1b[2J\x1b[H\x1b[5;10H\x1b[?25h");
    }

    #[test]
    fn test_goto_origin_is_not_shortened() {
        let mut out = OutputBuffer::new();
        out.cursor_goto(0, 0);
        assert_eq!(out.as_bytes(), b"\x1b[1;1H");
    }

    #[test]
    fn test_style_sequences() {
        let mut out = OutputBuffer::new();
        out.set_fg(Rgb::new(1.0, 2.0, 3.0));
        out.set_bg(Named::Red);
        out.set_modifiers(Modifiers::BOLD);
        out.write_char('x');
        out.reset_attrs();
        assert_eq!(out.as_bytes(), b"\x1b[38;2;1;2;3m\x1b[41m\x1b[1mx\x1b[0m");
    }

    #[test]
    fn test_modifier_codes() {
        let mut out = OutputBuffer::new();
        out.set_modifiers(Modifiers::UNDERLINE | Modifiers::BOLD);
        assert_eq!(out.as_bytes(), b"\x1b[1m\x1b[4m");

        out.clear();
        out.set_modifiers(Modifiers::all());
        assert_eq!(
            out.as_bytes(),
            b"\x1b[1m\x1b[2m\x1b[3m\x1b[4m\x1b[5m\x1b[7m\x1b[8m\x1b[9m".as_slice()
        );

        out.clear();
        out.set_modifiers(Modifiers::empty());
        assert!(out.is_empty());
    }

    #[test]
    fn test_multibyte_glyph() {
        let mut out = OutputBuffer::new();
        out.write_char('█');
        assert_eq!(out.as_bytes(), "█".as_bytes());
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_flush_and_clear() {
        let mut out = OutputBuffer::new();
        out.cursor_home();
        let mut sink = Vec::new();
        out.flush_to(&mut sink).unwrap();
        assert_eq!(sink, b"\x1b[H");

        out.clear();
        assert!(out.is_empty());
        assert_eq!(out.len(), 0);
    }
}
