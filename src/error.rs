//! Error types.
//!
//! The drawable algebra and the effect engine are total: they never fail,
//! an empty result is their only degenerate outcome. Errors come from the
//! edges of the crate: terminal I/O, screen sizing, color parsing and driver
//! configuration.

use thiserror::Error;

/// Errors surfaced by termanim.
#[derive(Error, Debug)]
pub enum Error {
    /// Writing to or querying the terminal failed.
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    /// A palette color name that is not one of the 16 named colors.
    #[error("unknown color name: {0:?}")]
    UnknownColor(String),
    /// A hex color string that is not six hex digits.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
    /// A screen needs at least one line and one column.
    #[error("screen of {lines}x{columns} cells has no area")]
    EmptyScreen {
        /// Requested rows.
        lines: usize,
        /// Requested columns.
        columns: usize,
    },
    /// Frame rates must be finite and positive.
    #[error("invalid frame rate {0}: must be finite and greater than zero")]
    InvalidFrameRate(f64),
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
