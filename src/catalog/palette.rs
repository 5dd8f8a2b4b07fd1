//! Brand color palette shipped with every sprite's metadata.
//!
//! Groups overlap on purpose: "Quick Colors: Primary" repeats the base tone
//! of each family so pickers can show a short list first.

use serde::{Serialize, Serializer, ser::SerializeMap};

/// A named group of `token → hex` pairs.
#[derive(Debug, Clone, Copy)]
pub struct ColorGroup {
    pub name: &'static str,
    pub colors: &'static [(&'static str, &'static str)],
}

pub const GROUPS: &[ColorGroup] = &[
    ColorGroup {
        name: "Quick Colors: Primary",
        colors: &[
            ("icon-blue", "#0072BC"),
            ("icon-dark-blue", "#002F6E"),
            ("icon-light-blue", "#3DB5E6"),
            ("icon-green", "#008996"),
            ("icon-red", "#ED1C24"),
            ("icon-orange", "#F28B00"),
            ("icon-violet", "#831A5B"),
        ],
    },
    ColorGroup {
        name: "Primary Blues",
        colors: &[
            ("icon-blue", "#0072BC"),
            ("icon-blue-t4", "#80B9DE"),
            ("icon-blue-t3", "#B3D5EB"),
            ("icon-blue-t2", "#E6F1F9"),
            ("icon-blue-t1", "#F5F9FC"),
            ("icon-dark-blue", "#002F6E"),
            ("icon-dark-blue-t4", "#8098B7"),
            ("icon-dark-blue-t3", "#B3C1D4"),
            ("icon-dark-blue-t2", "#E6EBF1"),
            ("icon-dark-blue-t1", "#F5F7F9"),
            ("icon-light-blue", "#3DB5E6"),
            ("icon-light-blue-t4", "#9FDBF3"),
            ("icon-light-blue-t3", "#C5E9F8"),
            ("icon-light-blue-t2", "#ECF8FD"),
            ("icon-light-blue-t1", "#F7FCFE"),
        ],
    },
    ColorGroup {
        name: "Brand Accents",
        colors: &[
            ("icon-green", "#008996"),
            ("icon-green-t4", "#80C5CB"),
            ("icon-green-t3", "#B3DCE0"),
            ("icon-green-t2", "#E6F4F5"),
            ("icon-green-t1", "#F5FAFB"),
            ("icon-red", "#ED1C24"),
            ("icon-red-t4", "#F78E92"),
            ("icon-red-t3", "#FABBB0"),
            ("icon-red-t2", "#FEE9EA"),
            ("icon-red-t1", "#FFF6F6"),
            ("icon-orange", "#F28B00"),
            ("icon-orange-t1", "#FFFAF5"),
            ("icon-orange-t2", "#FEF4E6"),
            ("icon-orange-t3", "#FBDCB3"),
            ("icon-orange-t4", "#F9C680"),
            ("icon-violet", "#831A5B"),
            ("icon-violet-t4", "#C28DAE"),
            ("icon-violet-t3", "#DABACE"),
            ("icon-violet-t2", "#F3E9EF"),
            ("icon-violet-t1", "#FAF6F8"),
        ],
    },
    ColorGroup {
        name: "Neutrals",
        colors: &[
            ("icon-dark-gray", "#474F50"),
            ("icon-gray", "#6B6F70"),
            ("icon-light-gray-1", "#F7F7F6"),
            ("icon-light-gray-2", "#E6E6E6"),
            ("icon-black", "#000000"),
            ("icon-white", "#FFFFFF"),
        ],
    },
];

/// Look up a token's hex value, searching groups in order.
pub fn lookup(token: &str) -> Option<&'static str> {
    GROUPS
        .iter()
        .flat_map(|group| group.colors.iter())
        .find(|(name, _)| *name == token)
        .map(|(_, hex)| *hex)
}

/// The whole palette, serialized as `{ group: { token: hex } }` in table order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Palette;

impl Serialize for Palette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(GROUPS.len()))?;
        for group in GROUPS {
            map.serialize_entry(group.name, group)?;
        }
        map.end()
    }
}

impl Serialize for ColorGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.colors.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        assert_eq!(lookup("icon-blue"), Some("#0072BC"));
        assert_eq!(lookup("icon-violet-t1"), Some("#FAF6F8"));
        assert_eq!(lookup("icon-purple"), None);
    }

    #[test]
    fn test_hex_values_are_well_formed() {
        for group in GROUPS {
            for (token, hex) in group.colors {
                assert!(token.starts_with("icon-"), "{token}");
                assert_eq!(hex.len(), 7, "{token}");
                assert!(hex[1..].chars().all(|c| c.is_ascii_hexdigit()), "{token}");
            }
        }
    }

    #[test]
    fn test_serializes_in_table_order() {
        let json = serde_json::to_string(&Palette).unwrap();
        assert!(json.starts_with(r##"{"Quick Colors: Primary":{"icon-blue":"#0072BC","##));
        let names: Vec<_> = GROUPS.iter().map(|g| json.find(g.name).unwrap()).collect();
        assert!(names.windows(2).all(|w| w[0] < w[1]));
        // tints keep their authored order
        assert!(json.find("icon-orange-t1").unwrap() < json.find("icon-orange-t4").unwrap());
    }
}
