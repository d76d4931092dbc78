//! Game listing and filtering

use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;

use crate::cli::Session;
use crate::cli::output::{OutputFormat, PageOutput, format_size, print_formatted, status_marker};
use crate::filter::GameFilter;
use crate::model::{Game, Sizes, Sorting};
use crate::query;

#[derive(Args, Debug)]
pub struct GamesArgs {
    /// System to load games for (reuses the loaded games if omitted)
    system_id: Option<i64>,

    /// Page to show
    #[arg(long)]
    page: Option<usize>,

    /// Show complete games
    #[arg(long)]
    complete: Option<bool>,

    /// Show incomplete games
    #[arg(long)]
    incomplete: Option<bool>,

    /// Show games ignored by the one-region set
    #[arg(long)]
    ignored: Option<bool>,

    /// Show only games kept by the one-region set
    #[arg(long)]
    one_region: Option<bool>,

    /// Only show games whose name contains this text ("" clears it)
    #[arg(long)]
    name: Option<String>,

    /// Also fetch the size totals of the system
    #[arg(long)]
    sizes: bool,
}

impl GamesArgs {
    /// Overlay the flags that were given on `filter`
    fn merge_filter(&self, mut filter: GameFilter) -> GameFilter {
        if let Some(complete) = self.complete {
            filter.complete = complete;
        }
        if let Some(incomplete) = self.incomplete {
            filter.incomplete = incomplete;
        }
        if let Some(ignored) = self.ignored {
            filter.ignored = ignored;
        }
        if let Some(one_region) = self.one_region {
            filter.one_region = one_region;
        }
        if let Some(name) = &self.name {
            filter.name = name.clone();
        }
        filter
    }
}

#[derive(Serialize)]
struct GamesResult {
    system_id: i64,
    filter: GameFilter,
    #[serde(flatten)]
    page: PageOutput<Game>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sizes: Option<Sizes>,
}

pub async fn run(
    args: GamesArgs,
    session: &mut Session,
    format: OutputFormat,
    _quiet: bool,
) -> Result<()> {
    let system_id = args
        .system_id
        .or(session.system_id)
        .context("No games loaded. Pass a system id.")?;
    let fetch = args.system_id.is_some();
    let store = &session.store;

    let filter = args.merge_filter(store.games.filter.get());
    if filter != store.games.filter.get() {
        query::set_game_filter(store, filter);
    }

    if fetch {
        let client = session.client.as_ref();
        let (games, sizes) = if args.sizes {
            let (games, sizes) = futures::join!(
                query::get_games_by_system_id(client, store, system_id),
                query::get_sizes_by_system_id(client, store, system_id),
            );
            (games, Some(sizes))
        } else {
            (query::get_games_by_system_id(client, store, system_id).await, None)
        };
        games.with_context(|| format!("Failed to fetch games for system {}", system_id))?;
        session.system_id = Some(system_id);
        query::set_games_page(store, args.page.unwrap_or(1));

        if let Some(sizes) = sizes {
            sizes.with_context(|| format!("Failed to fetch sizes for system {}", system_id))?;
        }
    } else {
        if let Some(page) = args.page {
            query::set_games_page(store, page);
        }
        if args.sizes {
            query::get_sizes_by_system_id(session.client.as_ref(), store, system_id)
                .await
                .with_context(|| format!("Failed to fetch sizes for system {}", system_id))?;
        }
    }

    let result = GamesResult {
        system_id,
        filter: store.games.filter.get(),
        page: PageOutput::from_collection(&store.games.filtered),
        sizes: args.sizes.then(|| store.sizes.snapshot()),
    };
    print_formatted(&result, format, format_games_text);

    Ok(())
}

fn format_game_line(game: &Game) -> String {
    let mut line = format!(
        "{} {:>6}  {}",
        status_marker(game.complete),
        game.id,
        game.name
    );
    match game.sorting {
        Sorting::OneRegion => line.push_str("  1G1R"),
        Sorting::Ignored => line.push_str("  ignored"),
        Sorting::AllRegions => {}
    }
    line
}

fn format_games_text(result: &GamesResult) -> String {
    let mut lines: Vec<String> = if result.page.total == 0 {
        vec![format!("No games match the filter for system {}", result.system_id)]
    } else {
        result.page.items.iter().map(format_game_line).collect()
    };
    lines.push(result.page.footer("games"));

    if let Some(sizes) = &result.sizes {
        lines.push(format!(
            "Original size: {} (one region: {})",
            format_size(sizes.total_original),
            format_size(sizes.one_region_original)
        ));
        lines.push(format!(
            "Actual size: {} (one region: {})",
            format_size(sizes.total_actual),
            format_size(sizes.one_region_actual)
        ));
    }

    lines.join("\n")
}
