//! Colors in any of the supported representations

use std::{fmt, str::FromStr};

use crate::{
    convert::{hex_color_to_rgb, lookup_hex, lookup_name},
    normalize::{normalize_percent_rgb, parse_saturating},
    normalize_hex, normalize_integer_triplet, normalize_percent_triplet, rgb_percent_to_rgb,
    rgb_to_hex, rgb_to_rgb_percent, AsSpecification, ColorError, HexColor, PercentTriplet,
    RgbTriplet,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Representation {
    /// A color name, like `navy`
    Name,

    /// A hex value, like `#000080`
    Hex,

    /// An integer triplet, like `rgb(0, 0, 128)`
    Rgb,

    /// A percentage triplet, like `rgb(0%, 0%, 50%)`
    RgbPercent,
}

impl Representation {
    pub const ALL: [Self; 4] = [Self::Name, Self::Hex, Self::Rgb, Self::RgbPercent];
}

/// A color, as written by a user.
///
/// Parsing only checks the syntax. Names are not looked up and triplets are not
/// clamped until the value is [converted](ColorValue::convert).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorValue {
    Name(String),
    Hex(HexColor),
    Rgb(RgbTriplet),
    RgbPercent(PercentTriplet),
}

impl ColorValue {
    #[must_use]
    pub fn representation(&self) -> Representation {
        match self {
            Self::Name(_) => Representation::Name,
            Self::Hex(_) => Representation::Hex,
            Self::Rgb(_) => Representation::Rgb,
            Self::RgbPercent(_) => Representation::RgbPercent,
        }
    }

    /// Convert the color into another representation.
    ///
    /// Converting into the same representation normalizes the value. Names are
    /// still checked against `spec` in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// # use webcolors::{ColorValue, Representation};
    /// let navy: ColorValue = "rgb(0%, 0%, 50%)".parse().unwrap();
    /// let name = navy.convert(Representation::Name, "css3").unwrap();
    /// assert_eq!(name, ColorValue::Name("navy".to_string()));
    /// ```
    pub fn convert(
        &self,
        target: Representation,
        spec: impl AsSpecification,
    ) -> Result<Self, ColorError> {
        let spec = spec.as_specification()?;

        if let (Self::Name(name), Representation::Name) = (self, target) {
            lookup_hex(name, spec)?;
            return Ok(Self::Name(name.to_lowercase()));
        }

        // Everything else goes through one of the two pivots
        let hex = match self {
            Self::Name(name) => lookup_hex(name, spec)?,
            Self::Hex(hex) => *hex,
            Self::Rgb(rgb) => rgb_to_hex(*rgb),
            Self::RgbPercent(percentages) => {
                if target == Representation::RgbPercent {
                    return Ok(Self::RgbPercent(normalize_percent_triplet(percentages)?));
                }
                rgb_to_hex(rgb_percent_to_rgb(percentages)?)
            },
        };

        let converted = match target {
            Representation::Name => Self::Name(lookup_name(hex, spec)?.to_string()),
            Representation::Hex => Self::Hex(hex),
            Representation::Rgb => Self::Rgb(hex_color_to_rgb(hex)),
            Representation::RgbPercent => {
                Self::RgbPercent(rgb_to_rgb_percent(hex_color_to_rgb(hex)))
            },
        };

        Ok(converted)
    }
}

impl FromStr for ColorValue {
    type Err = ColorError;

    /// Recognizes `#rgb`/`#rrggbb`, `rgb(r, g, b)`, `rgb(r%, g%, b%)` and bare,
    /// comma separated triplets. Anything else is taken to be a name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.starts_with('#') {
            return normalize_hex(s).map(Self::Hex);
        }

        let lowercase = s.to_ascii_lowercase();
        let arguments = lowercase
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'));

        match arguments {
            Some(arguments) => parse_triplet(arguments, s),
            None if s.contains(',') => parse_triplet(&lowercase, s),
            None if s.is_empty() => Err(ColorError::UnknownColorName(s.to_string())),
            None => Ok(Self::Name(s.to_string())),
        }
    }
}

fn parse_triplet(arguments: &str, original: &str) -> Result<ColorValue, ColorError> {
    let invalid = || ColorError::InvalidTriplet(original.to_string());

    let channels: Vec<&str> = arguments.split(',').map(str::trim).collect();
    let [red, green, blue] = channels.as_slice() else {
        return Err(invalid());
    };

    let channels = [*red, *green, *blue];
    let percentages = channels.iter().filter(|c| c.ends_with('%')).count();

    match percentages {
        0 => {
            let mut rgb = [0; 3];
            for (parsed, channel) in rgb.iter_mut().zip(channels) {
                let value = parse_saturating(channel).ok_or_else(invalid)?;
                *parsed = value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32;
            }
            Ok(ColorValue::Rgb(rgb))
        },
        3 => {
            // Validate now, so that malformed percentages are reported while parsing
            for channel in channels {
                normalize_percent_rgb(channel)?;
            }
            Ok(ColorValue::RgbPercent(channels.map(str::to_string)))
        },
        _ => Err(invalid()),
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => f.write_str(name),
            Self::Hex(hex) => write!(f, "{hex}"),
            Self::Rgb([red, green, blue]) => write!(f, "rgb({red}, {green}, {blue})"),
            Self::RgbPercent([red, green, blue]) => write!(f, "rgb({red}, {green}, {blue})"),
        }
    }
}

impl From<HexColor> for ColorValue {
    fn from(value: HexColor) -> Self {
        Self::Hex(value)
    }
}

impl From<RgbTriplet> for ColorValue {
    fn from(value: RgbTriplet) -> Self {
        Self::Rgb(normalize_integer_triplet(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> ColorValue {
        s.parse().unwrap()
    }

    #[test]
    fn parse_representations() {
        assert_eq!(parse("navy"), ColorValue::Name("navy".to_string()));
        assert_eq!(parse("  Navy "), ColorValue::Name("Navy".to_string()));
        assert_eq!(parse("#ABC"), ColorValue::Hex(normalize_hex("#aabbcc").unwrap()));
        assert_eq!(parse("rgb(0, 0, 128)"), ColorValue::Rgb([0, 0, 128]));
        assert_eq!(parse("RGB(300,-5,1)"), ColorValue::Rgb([300, -5, 1]));
        assert_eq!(parse("0,0,128"), ColorValue::Rgb([0, 0, 128]));
        assert_eq!(
            parse("rgb(0%, 0%, 50%)"),
            ColorValue::RgbPercent(["0%".to_string(), "0%".to_string(), "50%".to_string()])
        );
    }

    #[test]
    fn parse_channels_beyond_integer_range() {
        assert_eq!(
            parse("rgb(3000000000, -3000000000, 0)"),
            ColorValue::Rgb([i32::MAX, i32::MIN, 0])
        );
        assert_eq!(
            parse("rgb(99999999999999999999, 0, 0)")
                .convert(Representation::Hex, "css3")
                .unwrap()
                .to_string(),
            "#ff0000"
        );
    }

    #[test]
    fn parse_failures() {
        assert_eq!(
            "#12".parse::<ColorValue>(),
            Err(ColorError::InvalidHexFormat("#12".to_string()))
        );
        assert_eq!(
            "rgb(1, 2)".parse::<ColorValue>(),
            Err(ColorError::InvalidTriplet("rgb(1, 2)".to_string()))
        );
        assert_eq!(
            "1, 2%, 3".parse::<ColorValue>(),
            Err(ColorError::InvalidTriplet("1, 2%, 3".to_string()))
        );
        assert_eq!(
            "rgb(a, b, c)".parse::<ColorValue>(),
            Err(ColorError::InvalidTriplet("rgb(a, b, c)".to_string()))
        );
        assert_eq!(
            "rgb(x%, 0%, 0%)".parse::<ColorValue>(),
            Err(ColorError::InvalidPercentValue("x%".to_string()))
        );
        assert!("".parse::<ColorValue>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for input in ["navy", "#000080", "rgb(0, 0, 128)", "rgb(0%, 0%, 50%)"] {
            assert_eq!(parse(input).to_string(), input);
        }
    }

    #[test]
    fn convert_between_all_representations() {
        let forms = [
            ColorValue::Name("navy".to_string()),
            ColorValue::Hex(normalize_hex("#000080").unwrap()),
            ColorValue::Rgb([0, 0, 128]),
            ColorValue::RgbPercent(["0%".to_string(), "0%".to_string(), "50%".to_string()]),
        ];

        for from in &forms {
            for to in &forms {
                let converted = from.convert(to.representation(), "css3").unwrap();
                assert_eq!(&converted, to, "converting {from} into {to}");
            }
        }
    }

    #[test]
    fn identity_conversions_normalize() {
        assert_eq!(
            parse("NAVY").convert(Representation::Name, "css3").unwrap(),
            ColorValue::Name("navy".to_string())
        );
        assert_eq!(
            parse("rgb(300, -1, 5)").convert(Representation::Rgb, "css3").unwrap(),
            ColorValue::Rgb([255, 0, 5])
        );
        assert_eq!(
            parse("rgb(12.50%, 200%, 1%)")
                .convert(Representation::RgbPercent, "css3")
                .unwrap()
                .to_string(),
            "rgb(12.5%, 100%, 1%)"
        );
        assert_eq!(
            parse("bogus").convert(Representation::Name, "css3"),
            Err(ColorError::UnknownColorName("bogus".to_string()))
        );
    }

    #[test]
    fn convert_checks_specification() {
        assert_eq!(
            parse("#000080").convert(Representation::Rgb, "css5"),
            Err(ColorError::UnsupportedSpecification("css5".to_string()))
        );
    }

    #[test]
    fn every_representation_is_reachable() {
        let value = parse("goldenrod");
        for target in Representation::ALL {
            assert_eq!(value.convert(target, "css3").unwrap().representation(), target);
        }
    }
}
