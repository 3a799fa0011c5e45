//! Compare the search-API and snapshot views of the same set.

use std::fmt;

use crate::card::{CanonicalCard, CardSet};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discrepancy {
    OnlyInSearch { collector_number: String, name: String },
    OnlyInSnapshot { collector_number: String, name: String },
    Field {
        collector_number: String,
        field: &'static str,
        search: String,
        snapshot: String,
    },
}

impl fmt::Display for Discrepancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Discrepancy::OnlyInSearch { collector_number, name } => {
                write!(f, "{collector_number} {name}: only in search results")
            }
            Discrepancy::OnlyInSnapshot { collector_number, name } => {
                write!(f, "{collector_number} {name}: only in snapshot")
            }
            Discrepancy::Field {
                collector_number,
                field,
                search,
                snapshot,
            } => write!(
                f,
                "{collector_number}: {field} differs (search {search:?}, snapshot {snapshot:?})"
            ),
        }
    }
}

/// List every difference between the two sources, in collector-number order
/// of the search set followed by snapshot-only cards.
pub fn crosscheck(search: &CardSet, snapshot: &CardSet) -> Vec<Discrepancy> {
    let mut found = Vec::new();

    for card in search {
        match snapshot.get(&card.collector_number) {
            Some(other) => compare(card, other, &mut found),
            None => found.push(Discrepancy::OnlyInSearch {
                collector_number: card.collector_number.clone(),
                name: card.name.clone(),
            }),
        }
    }

    for card in snapshot {
        if search.get(&card.collector_number).is_none() {
            found.push(Discrepancy::OnlyInSnapshot {
                collector_number: card.collector_number.clone(),
                name: card.name.clone(),
            });
        }
    }

    found
}

fn compare(search: &CanonicalCard, snapshot: &CanonicalCard, found: &mut Vec<Discrepancy>) {
    let mut check = |field: &'static str, a: String, b: String| {
        if a != b {
            found.push(Discrepancy::Field {
                collector_number: search.collector_number.clone(),
                field,
                search: a,
                snapshot: b,
            });
        }
    };

    check("name", search.name.clone(), snapshot.name.clone());
    check("rarity", search.rarity.to_string(), snapshot.rarity.to_string());
    check(
        "promo_types",
        search.promo_types.join(","),
        snapshot.promo_types.join(","),
    );
    check(
        "frame_effects",
        search.frame_effects.join(","),
        snapshot.frame_effects.join(","),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::tests::card;
    use crate::rarity::Rarity;

    #[test]
    fn identical_sets_agree() {
        let a = CardSet::from_canonical(vec![card("1", "A"), card("2", "B")]).unwrap();
        assert!(crosscheck(&a, &a.clone()).is_empty());
    }

    #[test]
    fn attribute_order_does_not_matter() {
        let mut s = card("1", "Showcase");
        s.frame_effects = vec!["showcase".into(), "inverted".into()];
        let mut m = card("1", "Showcase");
        m.frame_effects = vec!["inverted".into(), "showcase".into()];
        let search = CardSet::from_canonical(vec![s]).unwrap();
        let snapshot = CardSet::from_canonical(vec![m]).unwrap();
        assert!(crosscheck(&search, &snapshot).is_empty());
    }

    #[test]
    fn reports_missing_and_differing_cards() {
        let mut rare = card("2", "B");
        rare.rarity = Rarity::Rare;
        let search = CardSet::from_canonical(vec![card("1", "A"), card("2", "B")]).unwrap();
        let snapshot = CardSet::from_canonical(vec![rare, card("3", "C")]).unwrap();

        let found = crosscheck(&search, &snapshot);
        assert_eq!(
            found,
            vec![
                Discrepancy::OnlyInSearch {
                    collector_number: "1".into(),
                    name: "A".into(),
                },
                Discrepancy::Field {
                    collector_number: "2".into(),
                    field: "rarity",
                    search: "C".into(),
                    snapshot: "R".into(),
                },
                Discrepancy::OnlyInSnapshot {
                    collector_number: "3".into(),
                    name: "C".into(),
                },
            ]
        );
        assert_eq!(found[1].to_string(), "2: rarity differs (search \"C\", snapshot \"R\")");
    }
}
