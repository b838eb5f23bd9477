//! Terminal glue: control sequences, the scoped session and size detection.

mod output;
mod session;

pub use output::OutputBuffer;
pub use session::TerminalSession;

use crate::error::Result;

/// Size of the controlling terminal as `(lines, columns)`.
///
/// # Errors
///
/// Returns an error if there is no terminal to query.
pub fn size() -> Result<(usize, usize)> {
    let (columns, lines) = crossterm::terminal::size()?;
    Ok((usize::from(lines), usize::from(columns)))
}
