//! Hexadecimal color values
//!
//! Accepted input is `#` followed by either 3 or 6 hex digits, in any case.

use std::{fmt, str::FromStr};

use crate::ColorError;

/// A color in canonical hexadecimal form.
///
/// Always displayed as `#rrggbb` with lowercase digits. The only way to obtain a
/// [HexColor] from text is through [normalize_hex], so every value is canonical.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HexColor(u32);

impl HexColor {
    /// Build a color from its `0xRRGGBB` packed representation
    pub(crate) const fn from_packed(packed: u32) -> Self {
        Self(packed & 0xFF_FF_FF)
    }

    #[must_use]
    pub const fn from_channels(channels: [u8; 3]) -> Self {
        let [red, green, blue] = channels;
        Self((red as u32) << 16 | (green as u32) << 8 | blue as u32)
    }

    #[must_use]
    pub const fn channels(self) -> [u8; 3] {
        [(self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8]
    }
}

/// Normalize a hexadecimal color value.
///
/// Three digit shorthands are expanded by doubling each digit, so `#abc` becomes
/// `#aabbcc`.
///
/// # Examples
///
/// ```
/// # use webcolors::normalize_hex;
/// assert_eq!(normalize_hex("#0099CC").unwrap(), "#0099cc");
/// assert_eq!(normalize_hex("#fff").unwrap(), "#ffffff");
/// assert!(normalize_hex("#12").is_err());
/// ```
pub fn normalize_hex(value: &str) -> Result<HexColor, ColorError> {
    let invalid = || ColorError::InvalidHexFormat(value.to_string());

    let digits = value.strip_prefix('#').ok_or_else(invalid)?.as_bytes();

    let nibbles = digits
        .iter()
        .map(|&digit| nibble(digit).ok_or_else(invalid))
        .collect::<Result<Vec<u32>, _>>()?;

    let packed = match nibbles.as_slice() {
        &[r, g, b] => (r * 0x11) << 16 | (g * 0x11) << 8 | b * 0x11,
        six_digits @ &[_, _, _, _, _, _] => six_digits
            .iter()
            .fold(0, |packed, &digit| packed << 4 | digit),
        _ => return Err(invalid()),
    };

    Ok(HexColor(packed))
}

fn nibble(digit: u8) -> Option<u32> {
    match digit {
        b'0'..=b'9' => Some(u32::from(digit - b'0')),
        b'a'..=b'f' => Some(u32::from(digit - b'a' + 10)),
        b'A'..=b'F' => Some(u32::from(digit - b'A' + 10)),
        _ => None,
    }
}

impl FromStr for HexColor {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        normalize_hex(s)
    }
}

impl TryFrom<&str> for HexColor {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        normalize_hex(value)
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

impl fmt::Debug for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HexColor(#{:06x})", self.0)
    }
}

impl PartialEq<str> for HexColor {
    fn eq(&self, other: &str) -> bool {
        self.to_string() == other
    }
}

impl PartialEq<&str> for HexColor {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<HexColor> for &str {
    fn eq(&self, other: &HexColor) -> bool {
        other == *self
    }
}
