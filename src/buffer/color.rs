//! Color: the two color modes a screen can run in.
//!
//! A [`Screen`](super::Screen) is generic over its color type. Both modes
//! treat an absent color (`None`) as "leave whatever is underneath":
//!
//! - [`Rgb`] is true color. Draws are alpha-blended onto the backdrop with a
//!   linear channel-wise [`mix`].
//! - [`Named`] is the 16-color palette. Alpha is ignored and draws overwrite.

use crate::error::Error;
use std::fmt::Debug;
use std::io::Write;
use std::str::FromStr;

/// Behavior a color type needs to live in a screen buffer.
pub trait Color: Copy + PartialEq + Debug + 'static {
    /// Blend `top` over `base` with opacity `alpha`.
    ///
    /// Absent colors never blend: if one side is `None` the other is
    /// returned unchanged, and two absent colors stay absent.
    fn mix(base: Option<Self>, top: Option<Self>, alpha: f32) -> Option<Self>;

    /// Compose a draw onto a cell whose current background is `backdrop`.
    ///
    /// Returns the `(foreground, background)` pair to store.
    fn layer(
        backdrop: Option<Self>,
        fg: Option<Self>,
        bg: Option<Self>,
        alpha: f32,
    ) -> (Option<Self>, Option<Self>);

    /// Append the escape sequence selecting this foreground color.
    fn write_fg(self, out: &mut Vec<u8>);

    /// Append the escape sequence selecting this background color.
    fn write_bg(self, out: &mut Vec<u8>);
}

/// True-color RGB.
///
/// Channels are kept as floats so repeated blending does not accumulate
/// rounding error. They are clamped to `0..=255` only when emitted.
#[derive(Clone, Copy, PartialEq, Default, Debug)]
pub struct Rgb {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
}

impl Rgb {
    /// Create a new RGB color.
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Black (0, 0, 0)
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    /// White (255, 255, 255)
    pub const WHITE: Self = Self::new(255.0, 255.0, 255.0);
    /// Red (255, 0, 0)
    pub const RED: Self = Self::new(255.0, 0.0, 0.0);
    /// Green (0, 255, 0)
    pub const GREEN: Self = Self::new(0.0, 255.0, 0.0);
    /// Blue (0, 0, 255)
    pub const BLUE: Self = Self::new(0.0, 0.0, 255.0);

    /// Create from a 24-bit hex color (e.g., 0xFF5500).
    #[inline]
    pub fn from_u32(hex: u32) -> Self {
        Self::new(
            ((hex >> 16) & 0xFF) as f32,
            ((hex >> 8) & 0xFF) as f32,
            (hex & 0xFF) as f32,
        )
    }

    /// Linear interpolation towards `other`; `t = 0` is `self`, `t = 1` is `other`.
    #[inline]
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
        )
    }

    /// Channels as bytes, clamped and truncated toward zero.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        [channel_byte(self.r), channel_byte(self.g), channel_byte(self.b)]
    }
}

#[inline]
fn channel_byte(value: f32) -> u8 {
    // `as` saturates and maps NaN to 0.
    value.clamp(0.0, 255.0) as u8
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(f32::from(r), f32::from(g), f32::from(b))
    }
}

impl From<u32> for Rgb {
    /// Convert from a 24-bit hex color (e.g., 0xFF5500)
    #[inline]
    fn from(hex: u32) -> Self {
        Self::from_u32(hex)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    /// Parse `"ff8000"` or `"#ff8000"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(Error::InvalidHex(s.to_string()));
        }
        u32::from_str_radix(digits, 16)
            .map(Self::from_u32)
            .map_err(|_| Error::InvalidHex(s.to_string()))
    }
}

/// Blend two optional RGB colors.
///
/// `mix(base, top, 0.0) == base` and `mix(base, top, 1.0) == top` whenever
/// both are present.
#[inline]
pub fn mix(base: Option<Rgb>, top: Option<Rgb>, alpha: f32) -> Option<Rgb> {
    match (base, top) {
        (None, None) => None,
        (None, top) => top,
        (base, None) => base,
        (Some(base), Some(top)) => Some(base.lerp(top, alpha)),
    }
}

impl Color for Rgb {
    #[inline]
    fn mix(base: Option<Self>, top: Option<Self>, alpha: f32) -> Option<Self> {
        mix(base, top, alpha)
    }

    /// Both layers are mixed into the backdrop. A fully opaque foreground
    /// still lands on the old background when the cell had none before.
    #[inline]
    fn layer(
        backdrop: Option<Self>,
        fg: Option<Self>,
        bg: Option<Self>,
        alpha: f32,
    ) -> (Option<Self>, Option<Self>) {
        (mix(backdrop, fg, alpha), mix(backdrop, bg, alpha))
    }

    fn write_fg(self, out: &mut Vec<u8>) {
        let [r, g, b] = self.to_bytes();
        let _ = write!(out, "\x1b[38;2;{r};{g};{b}m");
    }

    fn write_bg(self, out: &mut Vec<u8>) {
        let [r, g, b] = self.to_bytes();
        let _ = write!(out, "\x1b[48;2;{r};{g};{b}m");
    }
}

/// The 16-color terminal palette.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Named {
    /// Black
    Black,
    /// Red
    Red,
    /// Green
    Green,
    /// Yellow
    Yellow,
    /// Blue
    Blue,
    /// Magenta
    Magenta,
    /// Cyan
    Cyan,
    /// White
    White,
    /// Bright black (grey)
    BrightBlack,
    /// Bright red
    BrightRed,
    /// Bright green
    BrightGreen,
    /// Bright yellow
    BrightYellow,
    /// Bright blue
    BrightBlue,
    /// Bright magenta
    BrightMagenta,
    /// Bright cyan
    BrightCyan,
    /// Bright white
    BrightWhite,
}

impl Named {
    const BASE: [Self; 8] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
    ];

    const BRIGHT: [Self; 8] = [
        Self::BrightBlack,
        Self::BrightRed,
        Self::BrightGreen,
        Self::BrightYellow,
        Self::BrightBlue,
        Self::BrightMagenta,
        Self::BrightCyan,
        Self::BrightWhite,
    ];

    const NAMES: [&'static str; 8] = [
        "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
    ];

    /// Position in the 8-color cycle (0 = black, 7 = white).
    const fn hue(self) -> u8 {
        match self {
            Self::Black | Self::BrightBlack => 0,
            Self::Red | Self::BrightRed => 1,
            Self::Green | Self::BrightGreen => 2,
            Self::Yellow | Self::BrightYellow => 3,
            Self::Blue | Self::BrightBlue => 4,
            Self::Magenta | Self::BrightMagenta => 5,
            Self::Cyan | Self::BrightCyan => 6,
            Self::White | Self::BrightWhite => 7,
        }
    }

    /// Whether this is one of the bright variants.
    pub const fn is_bright(self) -> bool {
        matches!(
            self,
            Self::BrightBlack
                | Self::BrightRed
                | Self::BrightGreen
                | Self::BrightYellow
                | Self::BrightBlue
                | Self::BrightMagenta
                | Self::BrightCyan
                | Self::BrightWhite
        )
    }

    /// SGR parameter for this color as a foreground.
    pub const fn fg_code(self) -> u8 {
        if self.is_bright() {
            90 + self.hue()
        } else {
            30 + self.hue()
        }
    }

    /// SGR parameter for this color as a background.
    pub const fn bg_code(self) -> u8 {
        self.fg_code() + 10
    }
}

impl FromStr for Named {
    type Err = Error;

    /// Lowercase names are the normal palette, all-caps names the bright one:
    /// `"red"` is [`Named::Red`], `"RED"` is [`Named::BrightRed`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_ascii_lowercase();
        let index = Self::NAMES
            .iter()
            .position(|name| *name == lower)
            .ok_or_else(|| Error::UnknownColor(s.to_string()))?;

        if s == lower {
            Ok(Self::BASE[index])
        } else if s == s.to_ascii_uppercase() {
            Ok(Self::BRIGHT[index])
        } else {
            Err(Error::UnknownColor(s.to_string()))
        }
    }
}

impl Color for Named {
    /// Palette colors cannot be blended: `top` wins when present.
    #[inline]
    fn mix(base: Option<Self>, top: Option<Self>, _alpha: f32) -> Option<Self> {
        top.or(base)
    }

    /// The foreground is replaced outright, the background only when given.
    #[inline]
    fn layer(
        backdrop: Option<Self>,
        fg: Option<Self>,
        bg: Option<Self>,
        _alpha: f32,
    ) -> (Option<Self>, Option<Self>) {
        (fg, bg.or(backdrop))
    }

    fn write_fg(self, out: &mut Vec<u8>) {
        let _ = write!(out, "\x1b[{}m", self.fg_code());
    }

    fn write_bg(self, out: &mut Vec<u8>) {
        let _ = write!(out, "\x1b[{}m", self.bg_code());
    }
}
