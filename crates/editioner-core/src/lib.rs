pub mod card;
pub mod crosscheck;
pub mod edition;
pub mod error;
pub mod normalize;
pub mod ranking;
pub mod rarity;
pub mod raw;
pub mod sort_key;
pub mod token;

pub use card::{CanonicalCard, CardSet, Color};
pub use crosscheck::{Discrepancy, crosscheck};
pub use edition::{Edition, EditionType, SetMetadata, SetType};
pub use error::CardError;
pub use normalize::normalize;
pub use ranking::{
    Candidate, NotFound, RankingEntry, RankingLine, Reconciliation, parse_rankings, reconcile,
    render_rankings,
};
pub use rarity::{RARITY_TABLE, Rarity};
pub use raw::{Origin, RawCard, SearchCard, SnapshotCard};
pub use sort_key::{CollectorKey, collector_key};
pub use token::token_name;
