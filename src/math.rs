//! Numeric helpers for the lenient CSS number grammar.
//!
//! CSS legacy color syntax never rejects a bad number. Numbers are read as
//! the longest leading numeric prefix (the `strtof`/`strtoll` convention),
//! with an empty or unusable prefix counting as zero, and the result is
//! clamped into range afterwards.

/// Parse the longest leading float prefix of `s`: an optional sign, digits
/// with at most one decimal point, and an optional exponent. Anything else
/// yields `0.0`.
pub(crate) fn lenient_float(s: &str) -> f32 {
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i = 1;
    }
    let mut end = 0;
    let mut seen_dot = false;
    while i < bytes.len() {
        match bytes[i] {
            b'0'..=b'9' => {
                i += 1;
                end = i;
            }
            b'.' if !seen_dot => {
                seen_dot = true;
                i += 1;
            }
            _ => break,
        }
    }
    // An exponent needs a digit in the mantissa and at least one digit of
    // its own.
    if end > 0 && i < bytes.len() && matches!(bytes[i], b'e' | b'E') {
        let mut j = i + 1;
        if j < bytes.len() && matches!(bytes[j], b'+' | b'-') {
            j += 1;
        }
        let digits = j;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > digits {
            end = j;
        }
    }
    s[..end].parse().unwrap_or(0.0)
}

/// Parse the longest leading integer prefix of `s`, saturating on overflow
/// as `strtoll` does. Anything else yields `0`.
pub(crate) fn lenient_int(s: &str) -> i64 {
    let bytes = s.as_bytes();
    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i = 1;
    }
    let mut end = 0;
    while i < bytes.len() && bytes[i].is_ascii_digit() {
        i += 1;
        end = i;
    }
    let prefix = &s[..end];
    match prefix.parse() {
        Ok(v) => v,
        // Only overflow gets here; the scanner already rejected bad digits.
        Err(_) if prefix.starts_with('-') => i64::MIN,
        Err(_) => {
            if prefix.is_empty() {
                0
            } else {
                i64::MAX
            }
        }
    }
}

/// Round to the nearest integer (ties away from zero) and clamp to a
/// channel byte.
pub(crate) fn clamp_css_byte(v: f32) -> u8 {
    let v = v.round();
    if v < 0.0 {
        0
    } else if v > 255.0 {
        255
    } else {
        v as u8
    }
}

/// Parse an rgb/rgba channel or alpha parameter into a byte.
///
/// Three forms, checked in this order:
/// - `"42%"` — percentage of full scale;
/// - `"0.5"` — a bare decimal is a *fraction* of full scale, not a raw byte
///   value. Deliberately more lenient than the CSS spec: it matches how
///   alpha is written and the original parser applied it to every channel;
/// - `"128"` — a raw integer byte value.
pub(crate) fn parse_channel(s: &str) -> u8 {
    if let Some(pct) = s.strip_suffix('%') {
        clamp_css_byte(lenient_float(pct) / 100.0 * 255.0)
    } else if s.contains('.') {
        clamp_css_byte(lenient_float(s) * 255.0)
    } else {
        clamp_css_byte(lenient_int(s) as f32)
    }
}

/// Parse a saturation or lightness parameter: percentage or bare float,
/// clamped to `[0.0, 1.0]`.
pub(crate) fn parse_unit(s: &str) -> f32 {
    let v = if let Some(pct) = s.strip_suffix('%') {
        lenient_float(pct) / 100.0
    } else {
        lenient_float(s)
    };
    v.clamp(0.0, 1.0)
}

/// The CSS2 hue-to-channel function. `m1` and `m2` are the lightness
/// derived mixing bounds; `h` is the hue fraction offset for the channel
/// and may be up to 1/3 outside `[0, 1]`.
pub(crate) fn hue_to_rgb(m1: f32, m2: f32, h: f32) -> f32 {
    let h = if h < 0.0 {
        h + 1.0
    } else if h > 1.0 {
        h - 1.0
    } else {
        h
    };

    if h * 6.0 < 1.0 {
        m1 + (m2 - m1) * h * 6.0
    } else if h * 2.0 < 1.0 {
        m2
    } else if h * 3.0 < 2.0 {
        m1 + (m2 - m1) * (2.0 / 3.0 - h) * 6.0
    } else {
        m1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn lenient_float_takes_longest_numeric_prefix() {
        assert_eq!(lenient_float("1.5"), 1.5);
        assert_eq!(lenient_float("-.25"), -0.25);
        assert_eq!(lenient_float("+2"), 2.0);
        assert_eq!(lenient_float("12px"), 12.0);
        assert_eq!(lenient_float("1.2.3"), 1.2);
        assert_eq!(lenient_float(""), 0.0);
        assert_eq!(lenient_float("abc"), 0.0);
        assert_eq!(lenient_float("-"), 0.0);
        assert_eq!(lenient_float("."), 0.0);
    }

    // strtof semantics include exponent notation.
    #[test]
    fn lenient_float_accepts_exponents() {
        assert_eq!(lenient_float("1e2"), 100.0);
        assert_eq!(lenient_float("1.5e1"), 15.0);
        assert_eq!(lenient_float("2E-1"), 0.2);
        assert_eq!(lenient_float("5e+1px"), 50.0);
        // No exponent digits: the mantissa alone is the prefix.
        assert_eq!(lenient_float("5e"), 5.0);
        assert_eq!(lenient_float("5e+"), 5.0);
        // No mantissa digits: nothing to scale.
        assert_eq!(lenient_float("e5"), 0.0);
        assert_eq!(lenient_float("-e5"), 0.0);
    }

    #[test]
    fn lenient_int_takes_longest_digit_prefix() {
        assert_eq!(lenient_int("128"), 128);
        assert_eq!(lenient_int("-10"), -10);
        assert_eq!(lenient_int("42abc"), 42);
        assert_eq!(lenient_int("3.9"), 3);
        assert_eq!(lenient_int(""), 0);
        assert_eq!(lenient_int("x"), 0);
        assert_eq!(lenient_int("99999999999999999999999"), i64::MAX);
        assert_eq!(lenient_int("-99999999999999999999999"), i64::MIN);
    }

    #[test]
    fn clamp_rounds_half_away_from_zero() {
        assert_eq!(clamp_css_byte(127.5), 128);
        assert_eq!(clamp_css_byte(127.4), 127);
        assert_eq!(clamp_css_byte(-0.4), 0);
        assert_eq!(clamp_css_byte(-1.0), 0);
        assert_eq!(clamp_css_byte(255.5), 255);
        assert_eq!(clamp_css_byte(300.0), 255);
    }

    #[test]
    fn channel_percentage_scales_to_byte() {
        assert_eq!(parse_channel("100%"), 255);
        assert_eq!(parse_channel("50%"), 128);
        assert_eq!(parse_channel("0%"), 0);
        assert_eq!(parse_channel("-5%"), 0);
        assert_eq!(parse_channel("120%"), 255);
    }

    // A bare decimal channel is a fraction of 255, never a raw byte value.
    // Documented legacy behavior; do not "fix" to the stricter reading.
    #[test]
    fn channel_decimal_is_fraction_of_full_scale() {
        assert_eq!(parse_channel("0.5"), 128);
        assert_eq!(parse_channel("1.0"), 255);
        assert_eq!(parse_channel("1.00"), 255);
        assert_eq!(parse_channel("0.0"), 0);
        assert_eq!(parse_channel("2.0"), 255);
        assert_eq!(parse_channel("-0.5"), 0);
    }

    #[test]
    fn channel_integer_is_raw_byte_value() {
        assert_eq!(parse_channel("128"), 128);
        assert_eq!(parse_channel("300"), 255);
        assert_eq!(parse_channel("-10"), 0);
        assert_eq!(parse_channel("garbage"), 0);
    }

    #[test]
    fn unit_clamps_to_zero_one() {
        assert_component_eq!(parse_unit("50%"), 0.5);
        assert_component_eq!(parse_unit("0.25"), 0.25);
        assert_component_eq!(parse_unit("150%"), 1.0);
        assert_component_eq!(parse_unit("-1"), 0.0);
        assert_component_eq!(parse_unit("2"), 1.0);
        assert_component_eq!(parse_unit("junk"), 0.0);
    }

    #[test]
    fn hue_to_rgb_covers_all_segments() {
        // Full saturation, half lightness: m1 = 0, m2 = 1.
        let (m1, m2) = (0.0, 1.0);
        assert_component_eq!(hue_to_rgb(m1, m2, 0.0), 0.0);
        assert_component_eq!(hue_to_rgb(m1, m2, 1.0 / 12.0), 0.5);
        assert_component_eq!(hue_to_rgb(m1, m2, 1.0 / 3.0), 1.0);
        assert_component_eq!(hue_to_rgb(m1, m2, 0.5), 1.0);
        assert_component_eq!(hue_to_rgb(m1, m2, 7.0 / 12.0), 0.5);
        assert_component_eq!(hue_to_rgb(m1, m2, 0.75), 0.0);
    }

    #[test]
    fn hue_to_rgb_normalizes_out_of_range_hue() {
        let (m1, m2) = (0.2, 0.8);
        assert_component_eq!(hue_to_rgb(m1, m2, -1.0 / 3.0), hue_to_rgb(m1, m2, 2.0 / 3.0));
        assert_component_eq!(hue_to_rgb(m1, m2, 4.0 / 3.0), hue_to_rgb(m1, m2, 1.0 / 3.0));
    }
}
