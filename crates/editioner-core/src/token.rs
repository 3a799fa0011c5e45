//! Display names for token cards.
//!
//! Token names are built from color, power/toughness, base name and keywords,
//! e.g. a red `*/1` "Goblin Token" with haste becomes `r_x_1_goblin_token_haste`.
//! The result is line-safe: no spaces, all lower case.

use crate::card::CanonicalCard;

/// Stands in for a variable power or toughness (`*`).
const VARIABLE_PLACEHOLDER: &str = "x";

/// Build the display name for a token record.
///
/// Multicolored tokens get the bare lowercase name with no other descriptors.
pub fn token_name(card: &CanonicalCard) -> String {
    let base = snake(&card.name);

    let Some(color) = color_token(card) else {
        return base;
    };

    let mut parts = vec![color.to_string()];
    if let (Some(power), Some(toughness)) = (&card.power, &card.toughness) {
        parts.push(format!(
            "{}_{}",
            power.replace('*', VARIABLE_PLACEHOLDER),
            toughness.replace('*', VARIABLE_PLACEHOLDER)
        ));
    }
    parts.push(base);
    if !card.keywords.is_empty() {
        let keywords: Vec<String> = card.keywords.iter().map(|k| snake(k)).collect();
        parts.push(keywords.join("_"));
    }

    parts.join("_")
}

/// `c` for colorless, the color letter for monocolored, `None` otherwise.
fn color_token(card: &CanonicalCard) -> Option<char> {
    let mut colors = card.colors.iter();
    match (colors.next(), colors.next()) {
        (None, _) => Some('c'),
        (Some(color), None) => Some(color.letter()),
        (Some(_), Some(_)) => None,
    }
}

fn snake(s: &str) -> String {
    s.replace(' ', "_").to_lowercase()
}
