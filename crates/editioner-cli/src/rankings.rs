//! `editioner fix-rankings`: point each ranking entry at the set its card is printed in.

use anyhow::{Context, bail};
use editioner_core::{Candidate, CardSet, RawCard, normalize, parse_rankings, reconcile, render_rankings};
use editioner_sync::{SearchClient, UniqueMode};
use tracing::info;

use crate::output::write_atomic;
use crate::{Global, RankingArgs};

pub async fn run(args: RankingArgs, global: &Global) -> anyhow::Result<()> {
    if !args.original.exists() {
        bail!("original file '{}' does not exist", args.original.display());
    }
    let text = std::fs::read_to_string(&args.original)
        .with_context(|| format!("reading {}", args.original.display()))?;
    let lines = parse_rankings(&text)
        .with_context(|| format!("parsing {}", args.original.display()))?;

    let search = SearchClient::new(&global.scryfall_url)?;
    let main = fetch_set(&search, &args.main_set).await?;
    let bonus = fetch_set(&search, &args.bonus_set).await?;
    let special = fetch_set(&search, &args.special).await?;

    let candidates = [
        Candidate {
            set_code: &args.bonus_set,
            cards: &bonus,
        },
        Candidate {
            set_code: &args.special,
            cards: &special,
        },
    ];
    let result = reconcile(lines, &main, &candidates);
    info!(
        entries = result.entries(),
        rewritten = result.rewritten,
        not_found = result.not_found.len(),
        "reconciled rankings"
    );

    write_atomic(&args.output, &render_rankings(&result.lines))
        .with_context(|| format!("writing {}", args.output.display()))?;
    Ok(())
}

async fn fetch_set(search: &SearchClient, set_code: &str) -> anyhow::Result<CardSet> {
    let records = search
        .fetch_search(set_code, true, UniqueMode::Prints)
        .await
        .with_context(|| format!("fetching {set_code} from Scryfall"))?;
    normalize(records.into_iter().map(RawCard::from))
        .with_context(|| format!("normalizing {set_code} cards"))
}
