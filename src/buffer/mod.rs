//! Buffer module: the screen grid and everything needed to put it on a terminal.
//!
//! This module contains:
//! - [`Color`]: The color-mode trait, with [`Rgb`] and [`Named`] implementations
//! - [`Cell`]: One glyph with its colors and modifiers
//! - [`Screen`]: The persistent grid drawables are painted onto
//! - [`diff`]: Renderer turning dirty cells into ANSI sequences

mod cell;
mod color;
pub mod diff;
mod screen;

pub use cell::{Cell, CellFlags, Modifiers};
pub use color::{mix, Color, Named, Rgb};
pub use diff::DiffResult;
pub use screen::{NamedScreen, RgbScreen, Screen};
