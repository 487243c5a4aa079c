//! Converts between the ways a color can be written on the web.
//!
//! A color can be given as
//! * a name, like `navy`, which is only meaningful within a [Specification]
//! * a hex value, like `#000080` or `#008`
//! * an integer triplet, like `rgb(0, 0, 128)`
//! * a percentage triplet, like `rgb(0%, 0%, 50%)`
//!
//! Every conversion normalizes its input first: hex values are lowercased and
//! expanded, triplets are clamped to their valid range. Malformed input is reported
//! as a [ColorError].
//!
//! # Examples
//!
//! ```
//! assert_eq!(webcolors::name_to_hex("white", "css3").unwrap(), "#ffffff");
//! assert_eq!(webcolors::rgb_to_name([0, 0, 128], "css3").unwrap(), "navy");
//! assert_eq!(
//!     webcolors::rgb_to_rgb_percent([218, 165, 32]),
//!     ["85.49%", "64.71%", "12.50%"]
//! );
//! ```

mod convert;
mod error;
mod hex;
mod normalize;
mod registry;
mod reverse;
mod specification;
mod tables;
mod value;

pub use convert::{
    hex_to_name, hex_to_rgb, hex_to_rgb_percent, name_to_hex, name_to_rgb, name_to_rgb_percent,
    rgb_percent_to_hex, rgb_percent_to_name, rgb_percent_to_rgb, rgb_to_hex, rgb_to_name,
    rgb_to_rgb_percent,
};
pub use error::ColorError;
pub use hex::{normalize_hex, HexColor};
pub use normalize::{
    normalize_integer_rgb, normalize_integer_triplet, normalize_percent_rgb,
    normalize_percent_triplet, PercentTriplet, RgbTriplet,
};
pub use registry::{forward_table, reverse_table, HexToNames, NamesToHex};
pub use specification::{supported_specifications, AsSpecification, Specification};
pub use value::{ColorValue, Representation};

/// Build every color table up front.
///
/// The tables are built in one step, forward tables before reverse tables, inside a
/// [LazyLock](std::sync::LazyLock), so no caller ever sees a partially built registry.
/// This forces that step eagerly; programs call it once at startup.
pub fn init() {
    std::sync::LazyLock::force(&registry::REGISTRY);
}
