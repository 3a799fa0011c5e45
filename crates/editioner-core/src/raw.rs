//! Card objects as the two sources deliver them.
//!
//! Every field is optional at the decoding layer: a missing key surfaces as a
//! [`CardError::MissingKey`](crate::CardError::MissingKey) during
//! normalization rather than as an opaque JSON error.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::card::Color;

/// Which source a raw record came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    SearchApi,
    Snapshot,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::SearchApi => f.write_str("search API"),
            Origin::Snapshot => f.write_str("snapshot"),
        }
    }
}

/// A Scryfall card object (only the fields used here).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchCard {
    pub collector_number: Option<String>,
    pub name: Option<String>,
    pub artist: Option<String>,
    pub rarity: Option<String>,
    pub type_line: Option<String>,
    pub colors: Option<Vec<Color>>,
    pub power: Option<String>,
    pub toughness: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub promo_types: Vec<String>,
    #[serde(default)]
    pub frame_effects: Vec<String>,
    pub set: Option<String>,
    pub set_name: Option<String>,
    pub set_type: Option<String>,
    pub released_at: Option<NaiveDate>,
}

/// An MTGJSON card object (only the fields used here).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotCard {
    pub number: Option<String>,
    pub name: Option<String>,
    pub artist: Option<String>,
    pub rarity: Option<String>,
    #[serde(rename = "type")]
    pub type_line: Option<String>,
    pub colors: Option<Vec<Color>>,
    pub power: Option<String>,
    pub toughness: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub promo_types: Vec<String>,
    #[serde(default)]
    pub frame_effects: Vec<String>,
    pub set_code: Option<String>,
    /// Face letter ("a", "b", ...) for multi-face cards.
    pub side: Option<String>,
}

/// A raw record tagged with its source shape.
#[derive(Debug, Clone)]
pub enum RawCard {
    Search(SearchCard),
    Snapshot(SnapshotCard),
}

impl RawCard {
    pub fn origin(&self) -> Origin {
        match self {
            RawCard::Search(_) => Origin::SearchApi,
            RawCard::Snapshot(_) => Origin::Snapshot,
        }
    }
}

impl From<SearchCard> for RawCard {
    fn from(card: SearchCard) -> Self {
        RawCard::Search(card)
    }
}

impl From<SnapshotCard> for RawCard {
    fn from(card: SnapshotCard) -> Self {
        RawCard::Snapshot(card)
    }
}
