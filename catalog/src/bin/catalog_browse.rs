//! Terminal front end: builds the catalog stores, applies the requested
//! filters and prints the resulting snapshot as JSON.

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use ortho_config::OrthoConfig;
use serde::Serialize;
use thiserror::Error;
use tracing::{error, warn};
use tracing_subscriber::{EnvFilter, fmt};

use catalog::domain::{FactionId, LeadersGroupBy, RatingMode, RatingSortField, Selection, SetId};
use catalog::pipeline::SearchParams;
use catalog::{ArticleNotFound, Catalog, CatalogLoadError, CatalogSettings, CatalogStores};

#[derive(Debug, Parser)]
#[command(name = "catalog-browse", version, about = "Browse the card-game catalog")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Filtered card list.
    Cards {
        /// Card filter query string, e.g. `sets=imperium&sortField=cost`.
        #[arg(long)]
        query: Option<String>,
    },
    /// Leaders, optionally grouped by faction.
    Leaders {
        #[arg(long, default_value = "all")]
        faction: Selection<FactionId>,
        #[arg(long, default_value = "all")]
        set: Selection<SetId>,
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        group_by_faction: bool,
    },
    /// Season leaderboard.
    Rating {
        #[arg(long, default_value = "all")]
        season: Selection<String>,
        #[arg(long, default_value = "ladder")]
        mode: RatingMode,
        /// Sort column; repeat to toggle like a header click.
        #[arg(long = "sort")]
        sort: Vec<RatingSortField>,
    },
    /// News list.
    News {
        #[arg(long, default_value = "all")]
        tag: Selection<String>,
        #[arg(long)]
        search: Option<String>,
    },
    /// One article with its related articles.
    Article { slug: String },
    /// Factions with card counts.
    Factions {
        #[arg(long, default_value = "all")]
        select: Selection<FactionId>,
    },
    /// Game sets with card counts.
    Sets {
        #[arg(long, default_value = "all")]
        select: Selection<SetId>,
    },
}

#[derive(Debug, Error)]
enum BrowseError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error(transparent)]
    Load(#[from] CatalogLoadError),
    #[error(transparent)]
    NotFound(#[from] ArticleNotFound),
    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match CatalogSettings::load_from_iter([OsString::from("catalog-browse")]) {
        Ok(settings) => settings,
        Err(err) => {
            init_tracing(false);
            return report(&BrowseError::Config(err.to_string()));
        }
    };
    init_tracing(settings.log_json);

    match run(cli.command, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err),
    }
}

fn init_tracing(json: bool) {
    let builder = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr);
    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

fn report(err: &BrowseError) -> ExitCode {
    error!(error = %err, "catalog-browse failed");
    let _ = writeln!(io::stderr().lock(), "error: {err}");
    ExitCode::FAILURE
}

fn run(command: Command, settings: &CatalogSettings) -> Result<(), BrowseError> {
    let catalog = Catalog::load(&settings.dataset_source())?;
    let mut stores = CatalogStores::new(&catalog);

    match command {
        Command::Cards { query } => {
            if let Some(query) = query {
                stores
                    .cards
                    .sync_filters_from_search_params(&SearchParams::parse(&query));
            }
            emit(stores.cards.snapshot())
        }
        Command::Leaders {
            faction,
            set,
            search,
            group_by_faction,
        } => {
            let leaders = &mut stores.leaders;
            leaders.set_faction(faction);
            leaders.set_set(set);
            if let Some(search) = search {
                leaders.set_search_query(search);
            }
            if group_by_faction {
                leaders.set_group_by(LeadersGroupBy::Faction);
            }
            emit(leaders.snapshot())
        }
        Command::Rating { season, mode, sort } => {
            let rating = &mut stores.rating;
            rating.set_season(season);
            rating.set_mode(mode);
            for field in sort {
                rating.toggle_sort(field);
            }
            emit(rating.snapshot())
        }
        Command::News { tag, search } => {
            let news = &mut stores.news;
            news.set_tag(tag);
            if let Some(search) = search {
                news.set_search_query(search);
            }
            emit(news.snapshot())
        }
        Command::Article { slug } => emit(&stores.news.article_page(&slug)?),
        Command::Factions { select } => {
            stores.factions.set_selected_faction(select);
            emit(stores.factions.snapshot())
        }
        Command::Sets { select } => {
            stores.sets.set_active_set(select);
            emit(stores.sets.snapshot())
        }
    }
}

fn emit<T: Serialize>(value: &T) -> Result<(), BrowseError> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[rstest]
    fn repeated_sort_flags_are_collected() {
        let cli = Cli::try_parse_from([
            "catalog-browse",
            "rating",
            "--season",
            "2025-S2",
            "--sort",
            "wins",
            "--sort",
            "wins",
        ])
        .expect("valid arguments");

        let Command::Rating { season, mode, sort } = cli.command else {
            panic!("expected the rating command");
        };
        assert_eq!(season, Selection::Only("2025-S2".to_owned()));
        assert_eq!(mode, RatingMode::Ladder);
        assert_eq!(sort, vec![RatingSortField::Wins, RatingSortField::Wins]);
    }

    #[rstest]
    fn unknown_faction_is_rejected() {
        let result = Cli::try_parse_from(["catalog-browse", "leaders", "--faction", "harkonnen"]);

        assert!(result.is_err());
    }
}
