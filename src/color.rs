//! A [`Color`] is a fully resolved CSS color: four 8-bit channels in the
//! sRGB color space.

use std::fmt;
use std::str::FromStr;

/// A color with 8-bit red, green, blue and alpha channels. An alpha of 255
/// is fully opaque.
///
/// This is a plain value type. Two colors are equal exactly when all four
/// channel bytes are equal; a transparent black parsed from `"transparent"`
/// is a real color, distinct from a parse failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    /// The red channel of the color.
    pub r: u8,
    /// The green channel of the color.
    pub g: u8,
    /// The blue channel of the color.
    pub b: u8,
    /// The alpha channel of the color, 0 = transparent, 255 = opaque.
    pub a: u8,
}

impl Color {
    /// Create a new [`Color`] from the four channel bytes.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Pack the channels into a single `u32`, red in the most significant
    /// byte down to alpha in the least significant byte.
    pub fn to_u32(&self) -> u32 {
        (self.r as u32) << 24 | (self.g as u32) << 16 | (self.b as u32) << 8 | self.a as u32
    }

    /// Format the color in CSS `rgba()` notation. Red, green and blue are
    /// the raw byte values; alpha is converted back to a fraction of 1 with
    /// two decimal places, e.g. `rgba(245, 227, 66, 1.00)`.
    pub fn to_rgba_string(&self) -> String {
        format!(
            "rgba({}, {}, {}, {:.2})",
            self.r,
            self.g,
            self.b,
            self.a as f32 / 255.0
        )
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rgba_string())
    }
}

/// The error returned when [`Color::from_str`] is given a string that is
/// not a valid CSS color. Carries no detail: every malformed input fails
/// the same way.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseColorError;

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid CSS color")
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s).ok_or(ParseColorError)
    }
}
