//! `editioner edition`: fetch a set and write its edition definition file.

use std::path::PathBuf;

use anyhow::Context;
use editioner_core::{CardSet, Edition, EditionType, RawCard, SetMetadata, crosscheck, normalize};
use editioner_sync::{SearchClient, SnapshotClient, UniqueMode};
use tracing::{info, warn};

use crate::output::write_atomic;
use crate::{EditionArgs, Global};

/// What an expansion adds on top of the search results.
struct ExpansionData {
    tokens: CardSet,
    snapshot_cards: CardSet,
}

pub async fn run(args: EditionArgs, global: &Global) -> anyhow::Result<()> {
    let set_code = args.set_code.to_uppercase();
    let search = SearchClient::new(&global.scryfall_url)?;

    let search_cards = search
        .fetch_search(&set_code, true, UniqueMode::Prints)
        .await
        .with_context(|| format!("fetching {set_code} from Scryfall"))?;

    let (metadata, expansion) = match args.edition_type {
        EditionType::CollectorEdition => {
            let metadata = SetMetadata::from_search(&set_code, &search_cards)
                .with_context(|| format!("reading {set_code} set details"))?;
            (metadata, None)
        }
        EditionType::Expansion => {
            let cache_dir = args.cache.then(|| args.cache_dir.clone());
            let snapshots = SnapshotClient::new(&global.mtgjson_url, cache_dir)?;
            let snapshot = snapshots
                .fetch_snapshot(&set_code)
                .await
                .with_context(|| format!("fetching {set_code} snapshot from MTGJSON"))?;
            let snapshot_cards = normalize(snapshot.cards.into_iter().map(RawCard::from))
                .with_context(|| format!("normalizing {set_code} snapshot cards"))?;

            let tokens = match snapshot.metadata.token_set_code.as_deref() {
                Some(token_code) => fetch_tokens(&search, token_code).await?,
                None => {
                    warn!(set_code = %set_code, "snapshot names no token set, writing no tokens");
                    CardSet::default()
                }
            };

            (
                snapshot.metadata,
                Some(ExpansionData {
                    tokens,
                    snapshot_cards,
                }),
            )
        }
    };

    let cards = normalize(search_cards.into_iter().map(RawCard::from))
        .with_context(|| format!("normalizing {set_code} cards"))?;
    info!(set_code = %set_code, cards = cards.len(), "normalized cards");

    if let Some(expansion) = &expansion {
        report_discrepancies(&set_code, &cards, &expansion.snapshot_cards);
    }

    let name = args.name.as_deref().unwrap_or(&metadata.name);
    let edition = Edition {
        metadata: &metadata,
        name,
        edition_type: args.edition_type,
        cards: &cards,
        tokens: expansion.as_ref().map(|e| &e.tokens),
    };

    let output = args
        .output
        .unwrap_or_else(|| PathBuf::from(format!("{set_code}.txt")));
    write_atomic(&output, &edition.to_string())
        .with_context(|| format!("writing edition file {}", output.display()))?;
    Ok(())
}

async fn fetch_tokens(search: &SearchClient, token_code: &str) -> anyhow::Result<CardSet> {
    let token_cards = search
        .fetch_search(token_code, true, UniqueMode::Prints)
        .await
        .with_context(|| format!("fetching tokens {token_code} from Scryfall"))?;
    normalize(token_cards.into_iter().map(RawCard::from))
        .with_context(|| format!("normalizing {token_code} tokens"))
}

fn report_discrepancies(set_code: &str, search: &CardSet, snapshot: &CardSet) {
    let found = crosscheck(search, snapshot);
    for discrepancy in &found {
        warn!(set_code, "{discrepancy}");
    }
    if found.is_empty() {
        info!(set_code, "search results and snapshot agree");
    } else {
        warn!(set_code, count = found.len(), "search results and snapshot disagree");
    }
}
