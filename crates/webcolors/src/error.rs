use error_derive::Error;

/// Everything that can go wrong while normalizing or converting a color.
///
/// Each variant carries the input that caused it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ColorError {
    #[msg = "invalid hex color"]
    InvalidHexFormat(String),

    #[msg = "unsupported color specification"]
    UnsupportedSpecification(String),

    #[msg = "unknown color name"]
    UnknownColorName(String),

    #[msg = "invalid percentage"]
    InvalidPercentValue(String),

    #[msg = "invalid rgb triplet"]
    InvalidTriplet(String),
}
