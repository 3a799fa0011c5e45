//! Raw records → canonical card set.

use std::collections::BTreeSet;

use tracing::debug;

use crate::card::{CanonicalCard, CardSet};
use crate::error::CardError;
use crate::rarity::Rarity;
use crate::raw::{Origin, RawCard, SearchCard, SnapshotCard};

/// Fields common to both source shapes, still unchecked.
struct Fields {
    collector_number: Option<String>,
    name: Option<String>,
    artist: Option<String>,
    rarity: Option<String>,
    type_line: Option<String>,
    colors: Option<Vec<crate::card::Color>>,
    power: Option<String>,
    toughness: Option<String>,
    keywords: Vec<String>,
    promo_types: Vec<String>,
    frame_effects: Vec<String>,
}

impl From<SearchCard> for Fields {
    fn from(card: SearchCard) -> Self {
        Self {
            collector_number: card.collector_number,
            name: card.name,
            artist: card.artist,
            rarity: card.rarity,
            type_line: card.type_line,
            colors: card.colors,
            power: card.power,
            toughness: card.toughness,
            keywords: card.keywords,
            promo_types: card.promo_types,
            frame_effects: card.frame_effects,
        }
    }
}

impl From<SnapshotCard> for Fields {
    fn from(card: SnapshotCard) -> Self {
        Self {
            collector_number: card.number,
            name: card.name,
            artist: card.artist,
            rarity: card.rarity,
            type_line: card.type_line,
            colors: card.colors,
            power: card.power,
            toughness: card.toughness,
            keywords: card.keywords,
            promo_types: card.promo_types,
            frame_effects: card.frame_effects,
        }
    }
}

/// Normalize raw records from either source into one ordered, indexed set.
///
/// Multi-face snapshot records share a collector number; only the front
/// face (`side` absent or `"a"`) is kept.
pub fn normalize<I>(records: I) -> Result<CardSet, CardError>
where
    I: IntoIterator<Item = RawCard>,
{
    let mut cards = Vec::new();
    let mut skipped_faces = 0usize;

    for (index, record) in records.into_iter().enumerate() {
        let origin = record.origin();
        let fields = match record {
            RawCard::Search(card) => Fields::from(card),
            RawCard::Snapshot(card) => {
                if card.side.as_deref().is_some_and(|side| side != "a") {
                    skipped_faces += 1;
                    continue;
                }
                Fields::from(card)
            }
        };
        cards.push(canonical_card(fields, origin, index)?);
    }

    if skipped_faces > 0 {
        debug!(skipped_faces, "folded back faces of multi-face snapshot cards");
    }

    CardSet::from_canonical(cards)
}

fn canonical_card(fields: Fields, origin: Origin, index: usize) -> Result<CanonicalCard, CardError> {
    let missing = |field: &'static str, name: Option<&str>| CardError::MissingKey {
        origin,
        field,
        index,
        name: name.unwrap_or("unnamed").to_string(),
    };

    let collector_number = fields
        .collector_number
        .ok_or_else(|| missing("collector_number", fields.name.as_deref()))?;
    let name = fields.name.ok_or_else(|| missing("name", None))?;
    let source_rarity = fields
        .rarity
        .ok_or_else(|| missing("rarity", Some(name.as_str())))?;
    let rarity = Rarity::from_source(&source_rarity).ok_or_else(|| CardError::UnknownRarity {
        rarity: source_rarity.clone(),
        collector_number: collector_number.clone(),
        name: name.clone(),
    })?;

    Ok(CanonicalCard {
        collector_number,
        name,
        artist: fields.artist.unwrap_or_default(),
        rarity,
        type_line: fields.type_line.unwrap_or_default(),
        colors: fields.colors.unwrap_or_default().into_iter().collect::<BTreeSet<_>>(),
        power: fields.power,
        toughness: fields.toughness,
        keywords: fields.keywords,
        promo_types: fields.promo_types,
        frame_effects: fields.frame_effects,
    })
}
