use std::{fmt, str::FromStr};

use crate::{tables, ColorError};

/// A color specification, defining which color names exist and what they mean.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Specification {
    /// <https://www.w3.org/TR/html401/types.html#h-6.5>
    Html4,

    /// <https://www.w3.org/TR/2008/REC-CSS2-20080411/syndata.html#color-units>
    Css2,

    /// <https://www.w3.org/TR/CSS21/syndata.html#color-units>
    Css21,

    /// <https://www.w3.org/TR/css-color-3/#colorunits>
    Css3,
}

impl Specification {
    pub const ALL: [Self; 4] = [Self::Html4, Self::Css2, Self::Css21, Self::Css3];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Html4 => "html4",
            Self::Css2 => "css2",
            Self::Css21 => "css21",
            Self::Css3 => "css3",
        }
    }

    /// The static name to hex data this specification is built from
    pub(crate) const fn source_table(self) -> &'static [(&'static str, u32)] {
        match self {
            // CSS 2 and CSS 2.1 did not change the vocabulary of HTML 4
            Self::Html4 | Self::Css2 | Self::Css21 => tables::HTML4_NAMES_TO_HEX,
            Self::Css3 => tables::CSS3_NAMES_TO_HEX,
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// All the specifications that colors can be looked up in
#[must_use]
pub fn supported_specifications() -> &'static [Specification] {
    &Specification::ALL
}

impl FromStr for Specification {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|spec| spec.as_str() == s)
            .ok_or_else(|| ColorError::UnsupportedSpecification(s.to_string()))
    }
}

impl TryFrom<&str> for Specification {
    type Error = ColorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Specification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything that names a [Specification].
///
/// Conversions that depend on a specification accept either a [Specification]
/// or its identifier (`"html4"`, `"css2"`, `"css21"` or `"css3"`). Identifiers
/// are case-sensitive.
pub trait AsSpecification {
    fn as_specification(&self) -> Result<Specification, ColorError>;
}

impl AsSpecification for Specification {
    fn as_specification(&self) -> Result<Specification, ColorError> {
        Ok(*self)
    }
}

impl AsSpecification for str {
    fn as_specification(&self) -> Result<Specification, ColorError> {
        self.parse()
    }
}

impl AsSpecification for String {
    fn as_specification(&self) -> Result<Specification, ColorError> {
        self.parse()
    }
}

impl<T: AsSpecification + ?Sized> AsSpecification for &T {
    fn as_specification(&self) -> Result<Specification, ColorError> {
        (**self).as_specification()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_identifiers() {
        for spec in Specification::ALL {
            assert_eq!(spec.as_str().parse::<Specification>(), Ok(spec));
        }

        assert_eq!("css21".parse::<Specification>(), Ok(Specification::Css21));
    }

    #[test]
    fn identifiers_are_case_sensitive() {
        assert_eq!(
            "CSS3".parse::<Specification>(),
            Err(ColorError::UnsupportedSpecification("CSS3".to_string()))
        );
        assert!("css5".as_specification().is_err());
        assert!("".as_specification().is_err());
    }

    #[test]
    fn supported_in_declaration_order() {
        let identifiers: Vec<_> = supported_specifications()
            .iter()
            .map(|spec| spec.to_string())
            .collect();
        assert_eq!(identifiers, ["html4", "css2", "css21", "css3"]);
    }

    #[test]
    fn css2_shares_html4_vocabulary() {
        assert_eq!(
            Specification::Css2.source_table(),
            Specification::Html4.source_table()
        );
        assert_eq!(
            Specification::Css21.source_table(),
            Specification::Html4.source_table()
        );
        assert_eq!(Specification::Html4.source_table().len(), 17);
    }
}
