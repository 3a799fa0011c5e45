//! Scryfall search result pages.

use std::fmt;

use editioner_core::SearchCard;
use serde::Deserialize;

/// One page of a Scryfall list response.
#[derive(Debug, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub data: Vec<SearchCard>,
    #[serde(default)]
    pub has_more: bool,
    pub next_page: Option<String>,
    pub total_cards: Option<u64>,
}

/// Scryfall `unique` strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueMode {
    /// Every printing.
    Prints,
    /// One object per card name.
    Cards,
}

impl UniqueMode {
    pub fn as_str(self) -> &'static str {
        match self {
            UniqueMode::Prints => "prints",
            UniqueMode::Cards => "cards",
        }
    }
}

impl fmt::Display for UniqueMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Search query for every card of a set. `include:extras` adds tokens,
/// showcase frames and other extras.
pub fn set_query(set_code: &str, include_extras: bool) -> String {
    let mut query = format!("set:{}", set_code.to_lowercase());
    if include_extras {
        query.push_str(" include:extras");
    }
    query
}
