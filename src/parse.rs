//! The color string parser: normalization, dispatch and the hex and
//! functional notations.

use crate::math::{clamp_css_byte, hue_to_rgb, lenient_float, parse_channel, parse_unit};
use crate::named::NAMED_COLORS;
use crate::Color;

/// Parse a CSS color string into a [`Color`].
///
/// Accepts the CSS3 color keywords, `#rgb`/`#rrggbb`/`#rrggbbaa` hex
/// notation and the `rgb()`/`rgba()`/`hsl()`/`hsla()` functional notations.
/// ASCII spaces are stripped anywhere in the input and ASCII letters are
/// lowercased before matching, so `"Corn Flower Blue"` and
/// `"rgb( 1 , 2, 3 )"` both parse.
///
/// Returns `None` for anything malformed. Never panics; parsing is a pure
/// function over the input and is safe to call from any number of threads.
///
/// ```rust
/// use csscolor::{parse, Color};
/// assert_eq!(parse("#f5e342ff"), Some(Color::new(0xf5, 0xe3, 0x42, 0xff)));
/// assert_eq!(parse("not a color"), None);
/// ```
pub fn parse(input: &str) -> Option<Color> {
    // Strip every ASCII space, not just the edges. Not spec compliant, but
    // more accepting, and it keeps the parameter splitting trivial.
    let css: String = input
        .chars()
        .filter(|&c| c != ' ')
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if let Some(color) = NAMED_COLORS.get(css.as_str()) {
        return Some(*color);
    }

    if css.starts_with('#') {
        return parse_hex(&css);
    }

    if let (Some(open), Some(close)) = (css.find('('), css.find(')')) {
        if open < close && close + 1 == css.len() {
            return parse_functional(&css[..open], &css[open + 1..close]);
        }
    }

    None
}

/// `#rgb`, `#rrggbb` and `#rrggbbaa`. Any other length, or any non-hex
/// digit in the body, is rejected.
fn parse_hex(css: &str) -> Option<Color> {
    let body = &css[1..];
    // from_str_radix tolerates a leading '+'; the body must be hex digits
    // only.
    if !body.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let iv = u32::from_str_radix(body, 16).ok()?;
    match css.len() {
        // Expand each nibble by duplication: 0xf -> 0xff.
        4 => Some(Color::new(
            (((iv & 0xf00) >> 4) | ((iv & 0xf00) >> 8)) as u8,
            ((iv & 0x0f0) | ((iv & 0x0f0) >> 4)) as u8,
            ((iv & 0x00f) | ((iv & 0x00f) << 4)) as u8,
            255,
        )),
        7 => Some(Color::new(
            (iv >> 16) as u8,
            (iv >> 8) as u8,
            iv as u8,
            255,
        )),
        9 => Some(Color::new(
            (iv >> 24) as u8,
            (iv >> 16) as u8,
            (iv >> 8) as u8,
            iv as u8,
        )),
        _ => None,
    }
}

/// `rgb(...)`, `rgba(...)`, `hsl(...)` and `hsla(...)`. `name` is the text
/// before the opening parenthesis, `body` the text between the parentheses.
fn parse_functional(name: &str, body: &str) -> Option<Color> {
    let mut params: Vec<&str> = body.split(',').collect();
    // A single trailing comma does not open a parameter: "rgb(1,2,3,)" has
    // three parameters. Interior empties still count (and read as zero).
    if params.last() == Some(&"") {
        params.pop();
    }

    match name {
        "rgb" | "rgba" => {
            let alpha = match (name, params.len()) {
                ("rgb", 3) => 255,
                ("rgba", 4) => parse_channel(params[3]),
                _ => return None,
            };
            Some(Color::new(
                parse_channel(params[0]),
                parse_channel(params[1]),
                parse_channel(params[2]),
                alpha,
            ))
        }
        "hsl" | "hsla" => {
            let alpha = match (name, params.len()) {
                ("hsl", 3) => 255,
                ("hsla", 4) => parse_channel(params[3]),
                _ => return None,
            };

            // Hue is a fraction of a full turn, wrapped into [0, 1).
            let h = (lenient_float(params[0]) / 360.0).rem_euclid(1.0);
            // Saturation and lightness should only be percentages per the
            // spec, but a bare float is accepted too.
            let s = parse_unit(params[1]);
            let l = parse_unit(params[2]);

            let m2 = if l <= 0.5 {
                l * (s + 1.0)
            } else {
                l + s - l * s
            };
            let m1 = l * 2.0 - m2;

            Some(Color::new(
                clamp_css_byte(hue_to_rgb(m1, m2, h + 1.0 / 3.0) * 255.0),
                clamp_css_byte(hue_to_rgb(m1, m2, h) * 255.0),
                clamp_css_byte(hue_to_rgb(m1, m2, h - 1.0 / 3.0) * 255.0),
                alpha,
            ))
        }
        _ => None,
    }
}
