//! The canonical per-card record and the ordered set that holds them.

use std::collections::{BTreeSet, HashMap};

use serde::{Deserialize, Serialize};

use crate::error::CardError;
use crate::rarity::Rarity;
use crate::sort_key::collector_key;

/// One of the five colors, as reported by both sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "W")]
    White,
    #[serde(rename = "U")]
    Blue,
    #[serde(rename = "B")]
    Black,
    #[serde(rename = "R")]
    Red,
    #[serde(rename = "G")]
    Green,
}

impl Color {
    pub fn letter(self) -> char {
        match self {
            Color::White => 'w',
            Color::Blue => 'u',
            Color::Black => 'b',
            Color::Red => 'r',
            Color::Green => 'g',
        }
    }
}

/// A source-independent card printing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalCard {
    pub collector_number: String,
    pub name: String,
    pub artist: String,
    pub rarity: Rarity,
    pub type_line: String,
    /// Empty means colorless.
    pub colors: BTreeSet<Color>,
    pub power: Option<String>,
    pub toughness: Option<String>,
    /// Source order is kept; token names depend on it.
    pub keywords: Vec<String>,
    /// Sorted.
    pub promo_types: Vec<String>,
    /// Sorted.
    pub frame_effects: Vec<String>,
}

impl CanonicalCard {
    /// Bring unordered attributes and the rarity code into canonical form.
    /// Applying this twice is the same as applying it once.
    fn canonicalize(&mut self) {
        self.promo_types.sort();
        self.frame_effects.sort();
        self.rarity = self.rarity.with_type_line(&self.type_line);
    }
}

/// Canonical records of one set, in natural collector-number order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardSet {
    cards: Vec<CanonicalCard>,
    by_number: HashMap<String, usize>,
}

impl CardSet {
    /// Canonicalize, order and index records.
    ///
    /// Fails on the first duplicate collector number; nothing is returned in
    /// that case. Equal keys ("7" and "007") keep their input order.
    pub fn from_canonical(mut cards: Vec<CanonicalCard>) -> Result<Self, CardError> {
        for card in &mut cards {
            card.canonicalize();
        }

        let mut by_number: HashMap<String, usize> = HashMap::with_capacity(cards.len());
        for (i, card) in cards.iter().enumerate() {
            if let Some(&prev) = by_number.get(&card.collector_number) {
                return Err(CardError::DuplicateCollectorNumber {
                    collector_number: card.collector_number.clone(),
                    first: cards[prev].name.clone(),
                    second: card.name.clone(),
                });
            }
            by_number.insert(card.collector_number.clone(), i);
        }

        cards.sort_by_cached_key(|card| collector_key(&card.collector_number));

        let by_number = cards
            .iter()
            .enumerate()
            .map(|(i, card)| (card.collector_number.clone(), i))
            .collect();

        Ok(Self { cards, by_number })
    }

    pub fn cards(&self) -> &[CanonicalCard] {
        &self.cards
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CanonicalCard> {
        self.cards.iter()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Look up a card by its exact collector number.
    pub fn get(&self, collector_number: &str) -> Option<&CanonicalCard> {
        self.by_number
            .get(collector_number)
            .map(|&i| &self.cards[i])
    }

    /// Whether any printing in the set has exactly this name (case-sensitive).
    pub fn contains_name(&self, name: &str) -> bool {
        self.cards.iter().any(|card| card.name == name)
    }

    pub fn into_cards(self) -> Vec<CanonicalCard> {
        self.cards
    }
}

impl<'a> IntoIterator for &'a CardSet {
    type Item = &'a CanonicalCard;
    type IntoIter = std::slice::Iter<'a, CanonicalCard>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}
