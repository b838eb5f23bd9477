//! Renderer: turn the dirty part of a screen into ANSI escape sequences.
//!
//! Every coordinate drawn in the current or the previous frame is emitted as
//! a self-contained sequence: cursor move, colors, modifiers, glyph, reset.
//! No terminal state is carried from one cell to the next, so the output of
//! a frame is correct regardless of what the terminal did before it.
//!
//! All output is accumulated in a single buffer and flushed with one syscall.

use super::{Color, Screen};
use crate::terminal::OutputBuffer;

/// Result of a render pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffResult {
    /// Number of cells emitted.
    pub cells_changed: usize,
    /// Number of color sequences emitted.
    pub color_changes: usize,
    /// Number of cells that carried at least one modifier.
    pub modifier_changes: usize,
}

/// Render every coordinate flagged for redraw, in row-major order.
///
/// Cells drawn this frame are emitted with their content. Cells drawn only
/// in the previous frame hold the background by now, so they are emitted as
/// background and the terminal erases them.
pub fn render_dirty<C: Color>(screen: &Screen<C>, output: &mut OutputBuffer) -> DiffResult {
    let mut result = DiffResult::default();
    let columns = screen.columns();
    let (off_row, off_col) = screen.offset();

    let dirty = screen
        .flags()
        .iter()
        .zip(screen.cells())
        .enumerate()
        .filter(|(_, (flags, _))| flags.needs_redraw());

    for (idx, (_, cell)) in dirty {
        result.cells_changed += 1;

        let row = idx / columns + usize::from(off_row);
        let col = idx % columns + usize::from(off_col);
        output.cursor_goto(row, col);

        if let Some(fg) = cell.fg() {
            output.set_fg(fg);
            result.color_changes += 1;
        }
        if let Some(bg) = cell.bg() {
            output.set_bg(bg);
            result.color_changes += 1;
        }
        if !cell.modifiers().is_empty() {
            output.set_modifiers(cell.modifiers());
            result.modifier_changes += 1;
        }

        output.write_char(cell.ch());
        output.reset_attrs();
    }

    result
}
