//! Conversions between color names, hex values and `rgb()` triplets
//!
//! Name lookups go through [HexColor]. Every numeric conversion goes through an
//! integer [RgbTriplet].

use crate::{
    normalize::{format_significant, normalize_integer_triplet, normalize_percent_triplet},
    normalize_hex,
    registry::REGISTRY,
    AsSpecification, ColorError, HexColor, PercentTriplet, RgbTriplet, Specification,
};

/// Look up the color of a (case-insensitive) name
///
/// # Examples
///
/// ```
/// # use webcolors::name_to_hex;
/// assert_eq!(name_to_hex("white", "css3").unwrap(), "#ffffff");
/// assert_eq!(name_to_hex("Navy", "html4").unwrap(), "#000080");
/// assert!(name_to_hex("white", "css5").is_err());
/// ```
pub fn name_to_hex(name: &str, spec: impl AsSpecification) -> Result<HexColor, ColorError> {
    let spec = spec.as_specification()?;
    lookup_hex(name, spec)
}

/// Convert a color name to an integer triplet
pub fn name_to_rgb(name: &str, spec: impl AsSpecification) -> Result<RgbTriplet, ColorError> {
    name_to_hex(name, spec).map(hex_color_to_rgb)
}

/// Convert a color name to a percentage triplet
pub fn name_to_rgb_percent(
    name: &str,
    spec: impl AsSpecification,
) -> Result<PercentTriplet, ColorError> {
    name_to_rgb(name, spec).map(rgb_to_rgb_percent)
}

/// Look up the name of a hex color.
///
/// Fails with [ColorError::UnknownColorName] if the color has no name in `spec`.
///
/// # Examples
///
/// ```
/// # use webcolors::hex_to_name;
/// assert_eq!(hex_to_name("#daa520", "css3").unwrap(), "goldenrod");
/// assert_eq!(hex_to_name("#0FF", "css3").unwrap(), "aqua");
/// assert!(hex_to_name("#123456", "css3").is_err());
/// ```
pub fn hex_to_name(hex: &str, spec: impl AsSpecification) -> Result<&'static str, ColorError> {
    let spec = spec.as_specification()?;
    lookup_name(normalize_hex(hex)?, spec)
}

/// Decode a hex color into an integer triplet
pub fn hex_to_rgb(hex: &str) -> Result<RgbTriplet, ColorError> {
    normalize_hex(hex).map(hex_color_to_rgb)
}

/// Convert a hex color to a percentage triplet
pub fn hex_to_rgb_percent(hex: &str) -> Result<PercentTriplet, ColorError> {
    hex_to_rgb(hex).map(rgb_to_rgb_percent)
}

/// Look up the name of an integer triplet, after clamping it
pub fn rgb_to_name(
    rgb: RgbTriplet,
    spec: impl AsSpecification,
) -> Result<&'static str, ColorError> {
    let spec = spec.as_specification()?;
    lookup_name(rgb_to_hex(rgb), spec)
}

/// Encode an integer triplet as a hex color, after clamping it
///
/// # Examples
///
/// ```
/// # use webcolors::rgb_to_hex;
/// assert_eq!(rgb_to_hex([0, 0, 128]), "#000080");
/// assert_eq!(rgb_to_hex([300, -5, 17]), "#ff0011");
/// ```
#[must_use]
pub fn rgb_to_hex(rgb: RgbTriplet) -> HexColor {
    // Clamped channels always fit into a byte
    HexColor::from_channels(normalize_integer_triplet(rgb).map(|channel| channel as u8))
}

/// Convert an integer triplet to percentages, after clamping it.
///
/// Channels that are common fractions of 255 map to exact percentages, everything else
/// is rounded to 4 significant digits.
///
/// # Examples
///
/// ```
/// # use webcolors::rgb_to_rgb_percent;
/// assert_eq!(rgb_to_rgb_percent([218, 165, 32]), ["85.49%", "64.71%", "12.50%"]);
/// ```
#[must_use]
pub fn rgb_to_rgb_percent(rgb: RgbTriplet) -> PercentTriplet {
    normalize_integer_triplet(rgb).map(|channel| match channel {
        0 => "0%".to_string(),
        16 => "6.25%".to_string(),
        32 => "12.50%".to_string(),
        64 => "25%".to_string(),
        128 => "50%".to_string(),
        255 => "100%".to_string(),
        _ => format!("{}%", format_significant(f64::from(channel) / 255. * 100., 4)),
    })
}

/// Look up the name of a percentage triplet
pub fn rgb_percent_to_name<S: AsRef<str>>(
    percentages: &[S; 3],
    spec: impl AsSpecification,
) -> Result<&'static str, ColorError> {
    let spec = spec.as_specification()?;
    lookup_name(rgb_percent_to_hex(percentages)?, spec)
}

/// Convert a percentage triplet to a hex color
///
/// # Examples
///
/// ```
/// # use webcolors::rgb_percent_to_hex;
/// assert_eq!(rgb_percent_to_hex(&["100%", "100%", "0%"]).unwrap(), "#ffff00");
/// ```
pub fn rgb_percent_to_hex<S: AsRef<str>>(percentages: &[S; 3]) -> Result<HexColor, ColorError> {
    rgb_percent_to_rgb(percentages).map(rgb_to_hex)
}

/// Convert a percentage triplet to integers, after clamping it.
///
/// Halfway values are rounded up, so `50%` becomes `128`.
///
/// # Examples
///
/// ```
/// # use webcolors::rgb_percent_to_rgb;
/// assert_eq!(rgb_percent_to_rgb(&["0%", "0%", "50%"]).unwrap(), [0, 0, 128]);
/// ```
pub fn rgb_percent_to_rgb<S: AsRef<str>>(percentages: &[S; 3]) -> Result<RgbTriplet, ColorError> {
    let [red, green, blue] = normalize_percent_triplet(percentages)?;

    Ok([
        percent_to_integer(&red)?,
        percent_to_integer(&green)?,
        percent_to_integer(&blue)?,
    ])
}

/// Scales a normalized percentage to `0..=255`
fn percent_to_integer(percent: &str) -> Result<i32, ColorError> {
    let number: f64 = percent
        .trim_end_matches('%')
        .parse()
        .map_err(|_| ColorError::InvalidPercentValue(percent.to_string()))?;

    let scaled = 255. * (number / 100.);
    let rounded = if scaled - scaled.floor() < 0.5 {
        scaled.floor()
    } else {
        scaled.ceil()
    };

    Ok(rounded as i32)
}

pub(crate) fn lookup_hex(name: &str, spec: Specification) -> Result<HexColor, ColorError> {
    let normalized = name.to_lowercase();
    log::trace!("Looking up {normalized:?} in {spec}");

    REGISTRY
        .names_to_hex(spec)
        .get(normalized.as_str())
        .copied()
        .ok_or_else(|| ColorError::UnknownColorName(name.to_string()))
}

pub(crate) fn lookup_name(hex: HexColor, spec: Specification) -> Result<&'static str, ColorError> {
    log::trace!("Looking up the name of {hex} in {spec}");

    REGISTRY
        .hex_to_names(spec)
        .get(&hex)
        .copied()
        .ok_or_else(|| ColorError::UnknownColorName(hex.to_string()))
}

pub(crate) fn hex_color_to_rgb(hex: HexColor) -> RgbTriplet {
    hex.channels().map(i32::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(name_to_hex("NAVY", "css3").unwrap(), "#000080");
        assert_eq!(name_to_hex("GoldenRod", "css3").unwrap(), "#daa520");
    }

    #[test]
    fn unknown_names() {
        assert_eq!(
            name_to_hex("not-a-color", "css3"),
            Err(ColorError::UnknownColorName("not-a-color".to_string()))
        );

        // Only defined from CSS 3 onwards
        assert!(name_to_hex("goldenrod", "html4").is_err());
        assert!(name_to_hex("goldenrod", Specification::Css21).is_err());
    }

    #[test]
    fn specification_is_checked_first() {
        assert_eq!(
            name_to_hex("not-a-color", "css5"),
            Err(ColorError::UnsupportedSpecification("css5".to_string()))
        );
        assert_eq!(
            hex_to_name("#12", "css5"),
            Err(ColorError::UnsupportedSpecification("css5".to_string()))
        );
        assert_eq!(
            rgb_percent_to_name(&["bogus", "0%", "0%"], "css5"),
            Err(ColorError::UnsupportedSpecification("css5".to_string()))
        );
    }

    #[test]
    fn name_to_triplets() {
        assert_eq!(name_to_rgb("navy", "css3").unwrap(), [0, 0, 128]);
        assert_eq!(
            name_to_rgb_percent("navy", "css3").unwrap(),
            ["0%", "0%", "50%"]
        );
    }

    #[test]
    fn hex_to_triplets() {
        assert_eq!(hex_to_rgb("#000080").unwrap(), [0, 0, 128]);
        assert_eq!(hex_to_rgb("#FFF").unwrap(), [255, 255, 255]);
        assert_eq!(
            hex_to_rgb_percent("#ffffff").unwrap(),
            ["100%", "100%", "100%"]
        );
        assert_eq!(
            hex_to_rgb_percent("#daa520").unwrap(),
            ["85.49%", "64.71%", "12.50%"]
        );
        assert_eq!(
            hex_to_rgb("#12"),
            Err(ColorError::InvalidHexFormat("#12".to_string()))
        );
    }

    #[test]
    fn well_formed_hex_without_name() {
        assert_eq!(
            hex_to_name("#123456", "css3"),
            Err(ColorError::UnknownColorName("#123456".to_string()))
        );
        assert_eq!(
            hex_to_name("#1234", "css3"),
            Err(ColorError::InvalidHexFormat("#1234".to_string()))
        );
    }

    #[test]
    fn rgb_conversions_clamp() {
        assert_eq!(rgb_to_name([0, 0, 128], "css3").unwrap(), "navy");
        assert_eq!(rgb_to_name([300, 300, -1], "css3").unwrap(), "yellow");
        assert_eq!(rgb_to_hex([0, 0, 128]), "#000080");
        assert_eq!(rgb_to_hex([-20, 256, 15]), "#00ff0f");
        assert_eq!(rgb_to_rgb_percent([-1, 1000, 128]), ["0%", "100%", "50%"]);
    }

    #[test]
    fn exact_percentages() {
        assert_eq!(rgb_to_rgb_percent([0, 16, 32]), ["0%", "6.25%", "12.50%"]);
        assert_eq!(rgb_to_rgb_percent([64, 128, 255]), ["25%", "50%", "100%"]);
        assert_eq!(rgb_to_rgb_percent([1, 17, 254]), ["0.3922%", "6.667%", "99.61%"]);
    }

    #[test]
    fn percentages_round_half_up() {
        assert_eq!(rgb_percent_to_rgb(&["0%", "0%", "50%"]).unwrap(), [0, 0, 128]);
        assert_eq!(rgb_percent_to_rgb(&["100%", "25%", "12.5%"]).unwrap(), [255, 64, 32]);
        assert_eq!(rgb_percent_to_rgb(&["-10%", "250%", "0.1%"]).unwrap(), [0, 255, 0]);
        assert_eq!(rgb_percent_to_rgb(&["0.2%", "0.4%", "6.25%"]).unwrap(), [1, 1, 16]);
    }

    #[test]
    fn percentages_beyond_parse_range_clamp() {
        assert_eq!(
            rgb_percent_to_rgb(&["100000000000000000000%", "0%", "0%"]).unwrap(),
            [255, 0, 0]
        );
        assert_eq!(
            rgb_percent_to_rgb(&["-100000000000000000000%", "100%", "0%"]).unwrap(),
            [0, 255, 0]
        );
    }

    #[test]
    fn percent_conversions() {
        assert_eq!(
            rgb_percent_to_hex(&["100%", "100%", "0%"]).unwrap(),
            "#ffff00"
        );
        assert_eq!(
            rgb_percent_to_name(&["0%", "0%", "50%"], "css3").unwrap(),
            "navy"
        );
        assert_eq!(
            rgb_percent_to_hex(&["100%", "x", "0%"]),
            Err(ColorError::InvalidPercentValue("x".to_string()))
        );
    }

    #[test]
    fn percent_round_trip_of_exact_values() {
        for channel in [0, 16, 32, 64, 128, 255] {
            let percentages = rgb_to_rgb_percent([channel; 3]);
            assert_eq!(rgb_percent_to_rgb(&percentages).unwrap(), [channel; 3]);
        }
    }
}
