//! MTGJSON per-set files.

use chrono::NaiveDate;
use editioner_core::{SetMetadata, SetType, SnapshotCard};
use serde::Deserialize;

use crate::FetchError;

/// A decoded MTGJSON set file: its metadata and raw card records.
#[derive(Debug, Clone)]
pub struct SetSnapshot {
    pub metadata: SetMetadata,
    pub cards: Vec<SnapshotCard>,
}

#[derive(Deserialize)]
struct SnapshotFile {
    data: SnapshotSet,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotSet {
    code: String,
    name: String,
    release_date: NaiveDate,
    #[serde(rename = "type")]
    set_type: SetType,
    token_set_code: Option<String>,
    #[serde(default)]
    cards: Vec<SnapshotCard>,
}

/// Decode a set file and check that it describes `expected_code`.
///
/// Codes compare case-insensitively. A missing `tokenSetCode` stays `None`.
pub fn parse_snapshot(text: &str, expected_code: &str) -> Result<SetSnapshot, FetchError> {
    let file: SnapshotFile = serde_json::from_str(text)?;
    let set = file.data;

    if !set.code.eq_ignore_ascii_case(expected_code) {
        return Err(FetchError::SetCodeMismatch {
            expected: expected_code.to_uppercase(),
            found: set.code,
        });
    }

    Ok(SetSnapshot {
        metadata: SetMetadata {
            code: set.code,
            name: set.name,
            release_date: set.release_date,
            set_type: set.set_type,
            token_set_code: set.token_set_code,
        },
        cards: set.cards,
    })
}
