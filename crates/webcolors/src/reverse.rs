//! Derives hex to name lookups from name to hex tables

use std::collections::BTreeMap;

use crate::{
    registry::{HexToNames, NamesToHex},
    HexColor,
};

/// Invert a name to hex table.
///
/// When several names share a hex value, the lexicographically smallest of them
/// becomes the name of that value. `#00ffff` is `aqua` rather than `cyan`, and
/// `#808080` is `gray` rather than `grey`.
pub(crate) fn reverse_index(names_to_hex: &NamesToHex) -> HexToNames {
    let mut candidates: BTreeMap<HexColor, Vec<&'static str>> = BTreeMap::new();
    for (&name, &hex) in names_to_hex {
        candidates.entry(hex).or_default().push(name);
    }

    candidates
        .into_iter()
        .filter_map(|(hex, mut names)| {
            names.sort_unstable();

            let (&canonical, aliases) = names.split_first()?;
            if !aliases.is_empty() {
                log::debug!("{hex} is named {canonical:?}, not {aliases:?}");
            }

            Some((hex, canonical))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&'static str, u32)]) -> NamesToHex {
        entries
            .iter()
            .map(|&(name, packed)| (name, HexColor::from_packed(packed)))
            .collect()
    }

    #[test]
    fn without_collisions() {
        let names_to_hex = table(&[("black", 0x000000), ("white", 0xffffff)]);
        let hex_to_names = reverse_index(&names_to_hex);

        assert_eq!(hex_to_names.len(), 2);
        assert_eq!(hex_to_names[&HexColor::from_packed(0x000000)], "black");
        assert_eq!(hex_to_names[&HexColor::from_packed(0xffffff)], "white");
    }

    #[test]
    fn smallest_name_wins_collisions() {
        let names_to_hex = table(&[
            ("magenta", 0xff00ff),
            ("fuchsia", 0xff00ff),
            ("grey", 0x808080),
            ("gray", 0x808080),
            ("zzz", 0x123456),
            ("aaa", 0x123456),
            ("mmm", 0x123456),
        ]);
        let hex_to_names = reverse_index(&names_to_hex);

        assert_eq!(hex_to_names.len(), 3);
        assert_eq!(hex_to_names[&HexColor::from_packed(0xff00ff)], "fuchsia");
        assert_eq!(hex_to_names[&HexColor::from_packed(0x808080)], "gray");
        assert_eq!(hex_to_names[&HexColor::from_packed(0x123456)], "aaa");
    }

    #[test]
    fn empty_table() {
        assert!(reverse_index(&NamesToHex::new()).is_empty());
    }
}
