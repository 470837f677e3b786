//! csscolor parses CSS color strings (named colors, `#rgb`/`#rrggbb`/
//! `#rrggbbaa` hex notation, `rgb()`/`rgba()` and `hsl()`/`hsla()`
//! functional notation) into normalized 8-bit RGBA values.
//!
//! The whole crate is one operation: [`parse`] takes a string and returns
//! `Some(Color)` on success or `None` for anything malformed. Invalid input
//! is an expected, common case, so failure is a value, never a panic.

#![deny(missing_docs)]

mod color;
mod math;
mod named;
mod parse;

#[cfg(test)]
mod test;

pub use color::{Color, ParseColorError};
pub use parse::parse;
