use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use editioner_core::EditionType;
use tracing::Level;

mod edition;
mod output;
mod rankings;

#[derive(Debug, Parser)]
#[command(author, version, about = "Build edition definition files from Scryfall and MTGJSON")]
struct App {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    global: Global,
}

#[derive(Debug, Clone, Args)]
pub struct Global {
    /// Scryfall API base URL
    #[arg(long, env = "EDITIONER_SCRYFALL_URL", global = true, default_value = editioner_sync::scryfall::DEFAULT_BASE_URL)]
    scryfall_url: String,

    /// MTGJSON API base URL
    #[arg(long, env = "EDITIONER_MTGJSON_URL", global = true, default_value = editioner_sync::mtgjson::DEFAULT_BASE_URL)]
    mtgjson_url: String,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate an edition definition file for a set
    Edition(EditionArgs),

    /// Rewrite draft-ranking set codes to the set each card is printed in
    FixRankings(RankingArgs),
}

#[derive(Debug, Args)]
pub struct EditionArgs {
    /// Set code, e.g. EOE
    #[arg(short = 'c', long = "code")]
    set_code: String,

    /// Name of the edition (defaults to the source's set name)
    #[arg(short, long)]
    name: Option<String>,

    /// Type of edition: Expansion or Collector_Edition
    #[arg(short = 't', long = "type", default_value = "Expansion")]
    edition_type: EditionType,

    /// Use the local cached snapshot if available, downloading it otherwise
    #[arg(long)]
    cache: bool,

    /// Directory for cached snapshots
    #[arg(long, env = "EDITIONER_CACHE_DIR", default_value = ".")]
    cache_dir: PathBuf,

    /// Output file (defaults to <SET>.txt)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct RankingArgs {
    /// Original draft rankings
    original: PathBuf,

    /// Code of the main set
    main_set: String,

    /// Code of the bonus set
    bonus_set: String,

    /// Output file
    output: PathBuf,

    /// Special guests set checked after the bonus set
    #[arg(long, default_value = "SPG")]
    special: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = App::parse();

    let level = if app.global.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!("editioner v{}", env!("CARGO_PKG_VERSION"));

    match app.command {
        Command::Edition(args) => edition::run(args, &app.global).await,
        Command::FixRankings(args) => rankings::run(args, &app.global).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edition_defaults() {
        let app = App::try_parse_from(["editioner", "edition", "-c", "EOE"]).unwrap();
        let Command::Edition(args) = app.command else {
            panic!("expected edition command");
        };
        assert_eq!(args.set_code, "EOE");
        assert_eq!(args.edition_type, EditionType::Expansion);
        assert!(!args.cache);
        assert!(args.name.is_none());
    }

    #[test]
    fn collector_edition_type() {
        let app = App::try_parse_from([
            "editioner", "edition", "-c", "EOE", "-n", "Edge", "-t", "Collector_Edition", "--cache",
        ])
        .unwrap();
        let Command::Edition(args) = app.command else {
            panic!("expected edition command");
        };
        assert_eq!(args.edition_type, EditionType::CollectorEdition);
        assert_eq!(args.name.as_deref(), Some("Edge"));
        assert!(args.cache);
    }

    #[test]
    fn invalid_edition_type_is_an_argument_error() {
        let err = App::try_parse_from(["editioner", "edition", "-c", "EOE", "-t", "Duel_Decks"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn fix_rankings_positionals() {
        let app = App::try_parse_from([
            "editioner", "fix-rankings", "in.txt", "EOE", "EOB", "out.txt",
        ])
        .unwrap();
        let Command::FixRankings(args) = app.command else {
            panic!("expected fix-rankings command");
        };
        assert_eq!(args.original, PathBuf::from("in.txt"));
        assert_eq!(args.bonus_set, "EOB");
        assert_eq!(args.special, "SPG");
    }
}
