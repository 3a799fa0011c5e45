use thiserror::Error;

use crate::raw::Origin;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CardError {
    #[error("{origin} record #{index} ({name}) has no `{field}`")]
    MissingKey {
        origin: Origin,
        field: &'static str,
        /// Position of the record in the raw input.
        index: usize,
        /// Card name when known, otherwise "unnamed".
        name: String,
    },

    #[error("unknown rarity {rarity:?} for card {collector_number} ({name})")]
    UnknownRarity {
        rarity: String,
        collector_number: String,
        name: String,
    },

    #[error("duplicate collector number {collector_number}: {first:?} and {second:?}")]
    DuplicateCollectorNumber {
        collector_number: String,
        first: String,
        second: String,
    },

    #[error("malformed ranking entry on line {line}: expected 4 fields, found {fields}: {content:?}")]
    MalformedEntry {
        line: usize,
        fields: usize,
        content: String,
    },
}
