//! Fetch and recompute operations.
//!
//! Each `get_*` function runs one query, replaces the matching raw collection
//! in the `Store` wholesale and recomputes the derived view. State is written
//! only after a response decodes, so a failed fetch leaves the store as it was.
//! The `set_*` functions change a paging or filter setting and recompute the
//! views that depend on it.

use std::time::Instant;

use crate::filter::GameFilter;
use crate::graphql::{self, GraphQlTransport, QueryError};
use crate::model::Sizes;
use crate::queries::{self, GamesData, RomsData, SizesData, SystemsData};
use crate::state::Store;

/// Fetch every system and show the current page
pub async fn get_systems<C>(client: &C, store: &Store) -> Result<(), QueryError>
where
    C: GraphQlTransport + ?Sized,
{
    let start = Instant::now();
    let data: SystemsData = graphql::request(client, &queries::systems()).await?;
    tracing::info!(
        "Fetched {} systems in {:.1}s",
        data.systems.len(),
        start.elapsed().as_secs_f32()
    );

    store.systems.items.set(data.systems);
    update_systems(store);
    Ok(())
}

pub fn update_systems(store: &Store) {
    store.systems.refresh(store.page_size.get());
}

/// Fetch the games of a system, then filter and page them
pub async fn get_games_by_system_id<C>(
    client: &C,
    store: &Store,
    system_id: i64,
) -> Result<(), QueryError>
where
    C: GraphQlTransport + ?Sized,
{
    let start = Instant::now();
    let data: GamesData =
        graphql::request(client, &queries::games_by_system_id(system_id)).await?;
    tracing::info!(
        "Fetched {} games for system {} in {:.1}s",
        data.games.len(),
        system_id,
        start.elapsed().as_secs_f32()
    );

    store.games.unfiltered.set(data.games);
    update_games(store);
    Ok(())
}

pub fn update_games(store: &Store) {
    store.games.refresh(store.page_size.get());
    tracing::debug!(
        "{} of {} games pass the filter",
        store.games.filtered.len(),
        store.games.unfiltered.with(|games| games.len())
    );
}

/// Fetch the ROMs of a game, flagged as ignored or not for `system_id`
pub async fn get_roms_by_game_id_and_system_id<C>(
    client: &C,
    store: &Store,
    game_id: i64,
    system_id: i64,
) -> Result<(), QueryError>
where
    C: GraphQlTransport + ?Sized,
{
    let start = Instant::now();
    let query = queries::roms_by_game_id_and_system_id(game_id, system_id);
    let data: RomsData = graphql::request(client, &query).await?;
    tracing::info!(
        "Fetched {} roms for game {} in {:.1}s",
        data.roms.len(),
        game_id,
        start.elapsed().as_secs_f32()
    );

    store.roms.items.set(data.roms);
    update_roms(store);
    Ok(())
}

pub fn update_roms(store: &Store) {
    store.roms.refresh(store.page_size.get());
}

/// Fetch the four size totals of a system
pub async fn get_sizes_by_system_id<C>(
    client: &C,
    store: &Store,
    system_id: i64,
) -> Result<(), QueryError>
where
    C: GraphQlTransport + ?Sized,
{
    let data: SizesData =
        graphql::request(client, &queries::sizes_by_system_id(system_id)).await?;
    let sizes = Sizes::from(data);
    tracing::debug!("Fetched sizes for system {}: {:?}", system_id, sizes);

    store.sizes.total_original.set(sizes.total_original);
    store.sizes.one_region_original.set(sizes.one_region_original);
    store.sizes.total_actual.set(sizes.total_actual);
    store.sizes.one_region_actual.set(sizes.one_region_actual);
    Ok(())
}

/// Change the page size (clamped to at least 1) and re-page every view
pub fn set_page_size(store: &Store, page_size: usize) {
    store.page_size.set(page_size.max(1));
    update_systems(store);
    update_games(store);
    update_roms(store);
}

pub fn set_systems_page(store: &Store, page: usize) {
    store.systems.page.set(page);
    update_systems(store);
}

pub fn set_games_page(store: &Store, page: usize) {
    store.games.filtered.page.set(page);
    update_games(store);
}

pub fn set_roms_page(store: &Store, page: usize) {
    store.roms.page.set(page);
    update_roms(store);
}

pub fn set_game_filter(store: &Store, filter: GameFilter) {
    store.games.filter.set(filter);
    update_games(store);
}
