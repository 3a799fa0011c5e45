//! Fetch layer: Scryfall card search with pagination, MTGJSON set snapshots with an on-disk cache.

mod error;
pub mod page;
pub mod snapshot;

pub use error::FetchError;
pub use page::{SearchPage, UniqueMode};
pub use snapshot::{SetSnapshot, parse_snapshot};

#[cfg(feature = "http")]
pub mod mtgjson;
#[cfg(feature = "http")]
pub mod scryfall;
#[cfg(all(test, feature = "http"))]
mod stub_server;

#[cfg(feature = "http")]
pub use mtgjson::SnapshotClient;
#[cfg(feature = "http")]
pub use scryfall::SearchClient;
