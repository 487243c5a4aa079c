//! Normalization of `rgb()` triplets

use std::num::IntErrorKind;

use crate::ColorError;

/// Red, green and blue channels, each meant to be within `0..=255`
pub type RgbTriplet = [i32; 3];

/// Red, green and blue channels as percentages, like `"50%"`
pub type PercentTriplet = [String; 3];

/// Clamp a single integer channel to `0..=255`
#[must_use]
pub const fn normalize_integer_rgb(value: i32) -> i32 {
    if value < 0 {
        0
    } else if value > 255 {
        255
    } else {
        value
    }
}

/// Clamp every channel of an integer triplet to `0..=255`
///
/// # Examples
///
/// ```
/// # use webcolors::normalize_integer_triplet;
/// assert_eq!(normalize_integer_triplet([270, -20, 128]), [255, 0, 128]);
/// ```
#[must_use]
pub fn normalize_integer_triplet(triplet: RgbTriplet) -> RgbTriplet {
    triplet.map(normalize_integer_rgb)
}

/// Normalize a single percentage channel.
///
/// The trailing `%` is optional. Integers are kept as they are, decimals are rounded
/// to 4 significant digits. The result is clamped to `0%..=100%`.
pub fn normalize_percent_rgb(value: &str) -> Result<String, ColorError> {
    let invalid = || ColorError::InvalidPercentValue(value.to_string());

    let number = value.strip_suffix('%').unwrap_or(value);

    let normalized = if number.contains('.') {
        // Numbers too large for an f64 parse to infinity and are clamped like any other
        let percent: f64 = number.parse().map_err(|_| invalid())?;
        if percent.is_nan() {
            return Err(invalid());
        }

        format_significant(percent.clamp(0., 100.), 4)
    } else {
        let percent = parse_saturating(number).ok_or_else(invalid)?;
        percent.clamp(0, 100).to_string()
    };

    Ok(format!("{normalized}%"))
}

/// Parses an integer, saturating at the bounds of `i64` instead of overflowing.
///
/// Returns `None` if `number` is not an integer at all.
pub(crate) fn parse_saturating(number: &str) -> Option<i64> {
    match number.parse::<i64>() {
        Ok(value) => Some(value),
        Err(error) => match error.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// Normalize every channel of a percentage triplet, see [normalize_percent_rgb].
///
/// # Examples
///
/// ```
/// # use webcolors::normalize_percent_triplet;
/// assert_eq!(
///     normalize_percent_triplet(&["-10%", "250%", "500%"]).unwrap(),
///     ["0%", "100%", "100%"]
/// );
/// ```
pub fn normalize_percent_triplet<S: AsRef<str>>(
    triplet: &[S; 3],
) -> Result<PercentTriplet, ColorError> {
    let [red, green, blue] = triplet;

    Ok([
        normalize_percent_rgb(red.as_ref())?,
        normalize_percent_rgb(green.as_ref())?,
        normalize_percent_rgb(blue.as_ref())?,
    ])
}

/// Formats `value` rounded to `digits` significant digits, without trailing zeros.
///
/// Never uses scientific notation.
pub(crate) fn format_significant(value: f64, digits: i32) -> String {
    if value == 0. {
        return "0".to_string();
    }

    let exponent = value.abs().log10().floor() as i32;
    let decimals = (digits - 1 - exponent).max(0) as usize;
    let formatted = format!("{value:.decimals$}");

    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}
