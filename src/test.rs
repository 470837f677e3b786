/// Check for equality between two floating point values allowing for small
/// rounding errors, well below what can move a channel byte.
#[macro_export]
macro_rules! assert_component_eq {
    ($actual:expr,$expected:expr) => {{
        approx::assert_abs_diff_eq!($actual, $expected, epsilon = 1.0 / i16::MAX as f32);
    }};
}
