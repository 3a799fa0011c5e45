//! Rarity codes as written in edition files.

use std::fmt;

/// Single-letter print-frequency class. `Land` is never reported by a source;
/// it replaces `Common` on basic lands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Mythic,
    Land,
}

/// Source rarity strings and the codes they map to. Shared by every source.
pub const RARITY_TABLE: [(&str, Rarity); 4] = [
    ("common", Rarity::Common),
    ("uncommon", Rarity::Uncommon),
    ("rare", Rarity::Rare),
    ("mythic", Rarity::Mythic),
];

const BASIC_LAND: &str = "Basic Land";

impl Rarity {
    /// Look up a source rarity string. Unmapped strings yield `None`.
    pub fn from_source(rarity: &str) -> Option<Self> {
        RARITY_TABLE
            .iter()
            .find(|(name, _)| *name == rarity)
            .map(|(_, code)| *code)
    }

    /// Apply the basic-land override: common cards whose type line contains
    /// "Basic Land" become `Land`.
    pub fn with_type_line(self, type_line: &str) -> Self {
        if self == Rarity::Common && type_line.contains(BASIC_LAND) {
            Rarity::Land
        } else {
            self
        }
    }

    pub fn code(self) -> char {
        match self {
            Rarity::Common => 'C',
            Rarity::Uncommon => 'U',
            Rarity::Rare => 'R',
            Rarity::Mythic => 'M',
            Rarity::Land => 'L',
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
