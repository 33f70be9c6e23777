//! # Display Precision
//!
//! Rounding and number formatting used by the step narration and by the
//! API response. Rounding is cosmetic only: [`crate::calculations::area::calculate`]
//! always computes the area at full `f64` precision.
//!
//! Two precisions are in use. The HTTP API reports 15 decimal places while the
//! interactive page shows 4. Both are kept as-is; see DESIGN.md.

/// Decimal places reported by the HTTP API
pub const API_PRECISION: u32 = 15;

/// Decimal places shown by the interactive page
pub const INTERACTIVE_PRECISION: u32 = 4;

/// Smallest input advertised in the published API documents.
///
/// Advisory only; the calculator accepts any positive finite value.
pub const MIN_INPUT_VALUE: f64 = 0.0001;

/// Magnitudes in `[PLAIN_MIN, PLAIN_MAX)` print in positional notation;
/// anything outside switches to exponent form (`1e+21`, `1e-7`).
const PLAIN_MIN: f64 = 1e-6;
const PLAIN_MAX: f64 = 1e21;

/// Upper limit on requested precision.
///
/// Beyond 17 significant digits an `f64` carries no further information.
pub const MAX_PRECISION: u32 = 20;

/// Format `value` with exactly `decimals` digits after the decimal point.
///
/// ```rust
/// use circle_core::precision::format_fixed;
///
/// assert_eq!(format_fixed(314.159265358979, 4), "314.1593");
/// assert_eq!(format_fixed(2.0, 3), "2.000");
/// assert_eq!(format_fixed(3.14e200, 4), "3.14e+200");
/// ```
///
/// Magnitudes of `1e21` and above fall back to [`format_number`].
pub fn format_fixed(value: f64, decimals: u32) -> String {
    if value.abs() >= PLAIN_MAX {
        return format_number(value);
    }
    format!("{:.*}", decimals as usize, value)
}

/// Round `value` to `decimals` places.
///
/// Defined as "format with fixed decimals, then parse back", so the number
/// reported always matches the fixed-point text shown to the user.
///
/// ```rust
/// use circle_core::precision::round_to;
///
/// assert_eq!(round_to(78.53981633974483, 4), 78.5398);
/// ```
pub fn round_to(value: f64, decimals: u32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    format_fixed(value, decimals).parse().unwrap_or(value)
}

/// Shortest decimal text that round-trips to `value`.
///
/// Used for intermediate values in the narration (`r² = 10² = 100`).
/// Whole numbers print without a trailing `.0`. Very large or very small
/// magnitudes use exponent form with an explicit sign: `1e+200`, `2.5e-7`.
pub fn format_number(value: f64) -> String {
    let magnitude = value.abs();
    if value == 0.0 || !value.is_finite() || (PLAIN_MIN..PLAIN_MAX).contains(&magnitude) {
        return format!("{}", value);
    }

    let text = format!("{:e}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => text,
    }
}

/// Clamp a requested precision into the supported range
pub fn clamp_precision(decimals: u32) -> u32 {
    decimals.min(MAX_PRECISION)
}
