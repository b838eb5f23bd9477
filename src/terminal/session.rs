//! `TerminalSession`: scoped ownership of the terminal's visible state.

use super::OutputBuffer;
use crate::error::Result;
use std::io::Write;

/// Hides the cursor for as long as it lives.
///
/// Dropping the session clears the screen (if asked to), homes the cursor
/// and shows it again. The restore runs on every exit path, including
/// unwinding; a failure there is logged and otherwise ignored.
pub struct TerminalSession<W: Write> {
    out: W,
    clear_on_exit: bool,
    restored: bool,
}

impl<W: Write> TerminalSession<W> {
    /// Take over `out`: optionally clear it, then hide the cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if the setup sequence cannot be written.
    pub fn enter(mut out: W, clear_on_enter: bool, clear_on_exit: bool) -> Result<Self> {
        let mut seq = OutputBuffer::new();
        if clear_on_enter {
            seq.clear_screen();
            seq.cursor_home();
        }
        seq.cursor_hide();
        seq.flush_to(&mut out)?;

        tracing::info!(clear_on_enter, clear_on_exit, "terminal session started");
        Ok(Self {
            out,
            clear_on_exit,
            restored: false,
        })
    }

    /// The underlying writer.
    pub const fn writer(&self) -> &W {
        &self.out
    }

    /// The underlying writer, for painting frames.
    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Restore the terminal now rather than on drop.
    ///
    /// Later calls, and the drop, do nothing.
    ///
    /// # Errors
    ///
    /// Returns an error if the restore sequence cannot be written.
    pub fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;

        let mut seq = OutputBuffer::new();
        if self.clear_on_exit {
            seq.clear_screen();
            seq.cursor_home();
        }
        seq.cursor_show();
        seq.flush_to(&mut self.out)?;
        tracing::info!("terminal session restored");
        Ok(())
    }
}

impl<W: Write> Drop for TerminalSession<W> {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            tracing::warn!(error = %err, "failed to restore terminal");
        }
    }
}

impl<W: Write> std::fmt::Debug for TerminalSession<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalSession")
            .field("clear_on_exit", &self.clear_on_exit)
            .field("restored", &self.restored)
            .finish_non_exhaustive()
    }
}
