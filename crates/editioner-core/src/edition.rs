//! Edition definition files.
//!
//! ```text
//! [metadata]
//! Code=EOE
//! Date=2025-08-01
//! Name=Edge of Eternities
//! Type=Expansion
//! ScryfallCode=EOE
//! TokensCode=TEOE
//! BoosterSlots=
//! Booster=
//! Prerelease=
//! BoosterBox=
//!
//! [cards]
//! 1 R Singularity Rupture @Some Artist
//!
//! [tokens]
//! 1 r_x_1_goblin_token_haste @Another Artist
//! ```
//!
//! `TokensCode`, the booster keys and the `[tokens]` section only appear for
//! expansions. A set without a token set gets an empty `TokensCode=`.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::card::CardSet;
use crate::error::CardError;
use crate::raw::{Origin, SearchCard};
use crate::token::token_name;

/// Published set types. Unlisted types decode as `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetType {
    Expansion,
    Core,
    Masters,
    DraftInnovation,
    Commander,
    Alchemy,
    Masterpiece,
    Funny,
    Promo,
    Token,
    Memorabilia,
    DuelDeck,
    FromTheVault,
    Spellbook,
    PremiumDeck,
    Starter,
    Box,
    Eternal,
    #[serde(other)]
    Other,
}

impl SetType {
    /// Capitalized form of the source value, e.g. `Draft_innovation`.
    pub fn label(self) -> &'static str {
        match self {
            SetType::Expansion => "Expansion",
            SetType::Core => "Core",
            SetType::Masters => "Masters",
            SetType::DraftInnovation => "Draft_innovation",
            SetType::Commander => "Commander",
            SetType::Alchemy => "Alchemy",
            SetType::Masterpiece => "Masterpiece",
            SetType::Funny => "Funny",
            SetType::Promo => "Promo",
            SetType::Token => "Token",
            SetType::Memorabilia => "Memorabilia",
            SetType::DuelDeck => "Duel_deck",
            SetType::FromTheVault => "From_the_vault",
            SetType::Spellbook => "Spellbook",
            SetType::PremiumDeck => "Premium_deck",
            SetType::Starter => "Starter",
            SetType::Box => "Box",
            SetType::Eternal => "Eternal",
            SetType::Other => "Other",
        }
    }
}

impl fmt::Display for SetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-set facts attached once per fetched set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetMetadata {
    pub code: String,
    pub name: String,
    pub release_date: NaiveDate,
    pub set_type: SetType,
    /// Set holding this set's tokens, when the source names one.
    pub token_set_code: Option<String>,
}

impl SetMetadata {
    /// Derive metadata from the first search result. Search results carry no
    /// token set.
    pub fn from_search(code: &str, cards: &[SearchCard]) -> Result<Self, CardError> {
        let missing = |field: &'static str, name: Option<&String>| CardError::MissingKey {
            origin: Origin::SearchApi,
            field,
            index: 0,
            name: name.map_or_else(|| "unnamed".to_string(), Clone::clone),
        };

        let first = cards.first().ok_or_else(|| missing("released_at", None))?;
        let release_date = first
            .released_at
            .ok_or_else(|| missing("released_at", first.name.as_ref()))?;
        let set_type = match first.set_type.as_deref() {
            Some(raw) => serde_json::from_value(raw.into()).unwrap_or(SetType::Other),
            None => SetType::Other,
        };

        Ok(Self {
            code: code.to_uppercase(),
            name: first.set_name.clone().unwrap_or_else(|| code.to_uppercase()),
            release_date,
            set_type,
            token_set_code: None,
        })
    }
}

/// Kind of edition file to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditionType {
    Expansion,
    CollectorEdition,
}

impl EditionType {
    pub const ALL: [EditionType; 2] = [EditionType::Expansion, EditionType::CollectorEdition];

    pub fn label(self) -> &'static str {
        match self {
            EditionType::Expansion => "Expansion",
            EditionType::CollectorEdition => "Collector_Edition",
        }
    }
}

impl fmt::Display for EditionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EditionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EditionType::ALL
            .into_iter()
            .find(|t| t.label() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = EditionType::ALL.iter().map(|t| t.label()).collect();
                format!("invalid edition type '{s}', valid types are: {}", valid.join(", "))
            })
    }
}

/// Everything needed to write one edition file.
pub struct Edition<'a> {
    pub metadata: &'a SetMetadata,
    /// Human name written to `Name=`.
    pub name: &'a str,
    pub edition_type: EditionType,
    pub cards: &'a CardSet,
    /// Written only for expansions.
    pub tokens: Option<&'a CardSet>,
}

impl fmt::Display for Edition<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = &self.metadata.code;

        writeln!(f, "[metadata]")?;
        writeln!(f, "Code={code}")?;
        writeln!(f, "Date={}", self.metadata.release_date.format("%Y-%m-%d"))?;
        writeln!(f, "Name={}", self.name)?;
        writeln!(f, "Type={}", self.edition_type)?;
        writeln!(f, "ScryfallCode={code}")?;
        if self.edition_type == EditionType::Expansion {
            writeln!(
                f,
                "TokensCode={}",
                self.metadata.token_set_code.as_deref().unwrap_or_default()
            )?;
            for key in ["BoosterSlots", "Booster", "Prerelease", "BoosterBox"] {
                writeln!(f, "{key}=")?;
            }
        }

        writeln!(f)?;
        writeln!(f, "[cards]")?;
        for card in self.cards {
            writeln!(
                f,
                "{} {} {} @{}",
                card.collector_number, card.rarity, card.name, card.artist
            )?;
        }

        if self.edition_type == EditionType::Expansion
            && let Some(tokens) = self.tokens
        {
            writeln!(f)?;
            writeln!(f, "[tokens]")?;
            for token in tokens {
                writeln!(
                    f,
                    "{} {} @{}",
                    token.collector_number,
                    token_name(token),
                    token.artist
                )?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Color;
    use crate::card::tests::card;
    use crate::rarity::Rarity;

    fn metadata() -> SetMetadata {
        SetMetadata {
            code: "EOE".into(),
            name: "Edge of Eternities".into(),
            release_date: NaiveDate::from_ymd_opt(2025, 8, 1).unwrap(),
            set_type: SetType::Expansion,
            token_set_code: Some("TEOE".into()),
        }
    }

    fn cards() -> CardSet {
        let mut rupture = card("10", "Singularity Rupture");
        rupture.rarity = Rarity::Rare;
        rupture.artist = "Jane Doe".into();
        let mut forest = card("2", "Forest");
        forest.type_line = "Basic Land — Forest".into();
        forest.artist = "John Roe".into();
        CardSet::from_canonical(vec![rupture, forest]).unwrap()
    }

    fn tokens() -> CardSet {
        let mut goblin = card("1", "Goblin Token");
        goblin.colors = [Color::Red].into_iter().collect();
        goblin.power = Some("*".into());
        goblin.toughness = Some("1".into());
        goblin.keywords = vec!["Haste".into()];
        goblin.artist = "Ann Poe".into();
        CardSet::from_canonical(vec![goblin]).unwrap()
    }

    #[test]
    fn expansion_file() {
        let meta = metadata();
        let cards = cards();
        let tokens = tokens();
        let edition = Edition {
            metadata: &meta,
            name: "Edge of Eternities",
            edition_type: EditionType::Expansion,
            cards: &cards,
            tokens: Some(&tokens),
        };
        let expected = "\
[metadata]
Code=EOE
Date=2025-08-01
Name=Edge of Eternities
Type=Expansion
ScryfallCode=EOE
TokensCode=TEOE
BoosterSlots=
Booster=
Prerelease=
BoosterBox=

[cards]
2 L Forest @John Roe
10 R Singularity Rupture @Jane Doe

[tokens]
1 r_x_1_goblin_token_haste @Ann Poe
";
        assert_eq!(edition.to_string(), expected);
    }

    #[test]
    fn collector_edition_has_no_tokens_or_boosters() {
        let meta = metadata();
        let cards = cards();
        let tokens = tokens();
        let edition = Edition {
            metadata: &meta,
            name: "Custom Name",
            edition_type: EditionType::CollectorEdition,
            cards: &cards,
            tokens: Some(&tokens),
        };
        let expected = "\
[metadata]
Code=EOE
Date=2025-08-01
Name=Custom Name
Type=Collector_Edition
ScryfallCode=EOE

[cards]
2 L Forest @John Roe
10 R Singularity Rupture @Jane Doe
";
        assert_eq!(edition.to_string(), expected);
    }

    #[test]
    fn expansion_without_token_set() {
        let meta = SetMetadata {
            token_set_code: None,
            ..metadata()
        };
        let cards = cards();
        let no_tokens = CardSet::default();
        let edition = Edition {
            metadata: &meta,
            name: "Edge of Eternities",
            edition_type: EditionType::Expansion,
            cards: &cards,
            tokens: Some(&no_tokens),
        };
        let expected = "\
[metadata]
Code=EOE
Date=2025-08-01
Name=Edge of Eternities
Type=Expansion
ScryfallCode=EOE
TokensCode=
BoosterSlots=
Booster=
Prerelease=
BoosterBox=

[cards]
2 L Forest @John Roe
10 R Singularity Rupture @Jane Doe

[tokens]
";
        assert_eq!(edition.to_string(), expected);
    }

    #[test]
    fn edition_type_parses_exact_labels() {
        assert_eq!("Expansion".parse::<EditionType>(), Ok(EditionType::Expansion));
        assert_eq!("Collector_Edition".parse::<EditionType>(), Ok(EditionType::CollectorEdition));
        let err = "Duel_Decks".parse::<EditionType>().unwrap_err();
        assert!(err.contains("Duel_Decks"));
        assert!(err.contains("Collector_Edition"));
    }

    #[test]
    fn set_type_decodes_with_fallback() {
        let t: SetType = serde_json::from_str("\"draft_innovation\"").unwrap();
        assert_eq!(t.label(), "Draft_innovation");
        let t: SetType = serde_json::from_str("\"something_new\"").unwrap();
        assert_eq!(t, SetType::Other);
    }

    #[test]
    fn metadata_from_first_search_card() {
        let cards = vec![SearchCard {
            name: Some("Card".into()),
            set_name: Some("Edge of Eternities".into()),
            set_type: Some("expansion".into()),
            released_at: NaiveDate::from_ymd_opt(2025, 8, 1),
            ..Default::default()
        }];
        let meta = SetMetadata::from_search("eoe", &cards).unwrap();
        assert_eq!(meta.code, "EOE");
        assert_eq!(meta.name, "Edge of Eternities");
        assert_eq!(meta.set_type, SetType::Expansion);
        assert_eq!(meta.token_set_code, None);
    }

    #[test]
    fn metadata_with_unlisted_set_type() {
        let cards = vec![SearchCard {
            name: Some("Card".into()),
            set_type: Some("minigame".into()),
            released_at: NaiveDate::from_ymd_opt(2025, 8, 1),
            ..Default::default()
        }];
        let meta = SetMetadata::from_search("eoe", &cards).unwrap();
        assert_eq!(meta.set_type, SetType::Other);
        assert_eq!(meta.name, "EOE");
    }

    #[test]
    fn metadata_needs_a_release_date() {
        let cards = vec![SearchCard {
            name: Some("Undated".into()),
            ..Default::default()
        }];
        let err = SetMetadata::from_search("eoe", &cards).unwrap_err();
        assert!(matches!(err, CardError::MissingKey { field: "released_at", .. }));
        assert!(SetMetadata::from_search("eoe", &[]).is_err());
    }
}
