//! The process wide color tables
//!
//! All tables are built atomically inside a single [LazyLock]: every forward table
//! first, then every reverse table. [init](crate::init) forces this at startup, before
//! any lookup happens. The tables are never modified afterwards.

use std::{collections::BTreeMap, sync::LazyLock};

use crate::{reverse::reverse_index, AsSpecification, ColorError, HexColor, Specification};

/// Maps lowercase color names to their color
pub type NamesToHex = BTreeMap<&'static str, HexColor>;

/// Maps colors to their canonical name
pub type HexToNames = BTreeMap<HexColor, &'static str>;

/// Every table of every specification, built in one step by [init](crate::init)
pub(crate) static REGISTRY: LazyLock<Registry> = LazyLock::new(|| {
    log::info!(
        "Building color tables for {} specifications",
        Specification::ALL.len()
    );
    Registry::build()
});

#[derive(Debug)]
pub(crate) struct Registry {
    tables: [Tables; Specification::ALL.len()],
}

#[derive(Debug)]
struct Tables {
    names_to_hex: NamesToHex,
    hex_to_names: HexToNames,
}

impl Registry {
    fn build() -> Self {
        // Every forward table must exist before any reverse table is derived from it
        let forward = Specification::ALL.map(|spec| {
            spec.source_table()
                .iter()
                .map(|&(name, packed)| (name, HexColor::from_packed(packed)))
                .collect::<NamesToHex>()
        });

        let tables = forward.map(|names_to_hex| {
            let hex_to_names = reverse_index(&names_to_hex);
            Tables {
                names_to_hex,
                hex_to_names,
            }
        });

        Self { tables }
    }

    pub(crate) fn names_to_hex(&self, spec: Specification) -> &NamesToHex {
        &self.tables[spec.index()].names_to_hex
    }

    pub(crate) fn hex_to_names(&self, spec: Specification) -> &HexToNames {
        &self.tables[spec.index()].hex_to_names
    }
}

/// The name to hex table of a specification
///
/// # Examples
///
/// ```
/// # use webcolors::forward_table;
/// let css3 = forward_table("css3").unwrap();
/// assert_eq!(css3["navy"], "#000080");
/// ```
pub fn forward_table(spec: impl AsSpecification) -> Result<&'static NamesToHex, ColorError> {
    let spec = spec.as_specification()?;
    Ok(REGISTRY.names_to_hex(spec))
}

/// The hex to name table of a specification
///
/// Colors with more than one name map to the lexicographically smallest one.
pub fn reverse_table(spec: impl AsSpecification) -> Result<&'static HexToNames, ColorError> {
    let spec = spec.as_specification()?;
    Ok(REGISTRY.hex_to_names(spec))
}
