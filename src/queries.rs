//! Query documents and the shapes of their `data`

use serde::Deserialize;

use crate::model::{Game, Rom, Sizes, System};

pub fn systems() -> String {
    r#"
    {
        systems {
            id
            name
            description
            complete
            merging
            arcade
        }
    }
    "#
    .to_string()
}

pub fn games_by_system_id(system_id: i64) -> String {
    format!(
        r#"
    {{
        games(systemId: {system_id}) {{
            id
            name
            description
            complete
            sorting
        }}
    }}
    "#
    )
}

pub fn roms_by_game_id_and_system_id(game_id: i64, system_id: i64) -> String {
    format!(
        r#"
    {{
        roms(gameId: {game_id}) {{
            name
            size
            romfile {{
                path
                size
            }}
            ignored(systemId: {system_id})
        }}
    }}
    "#
    )
}

pub fn sizes_by_system_id(system_id: i64) -> String {
    format!(
        r#"
    {{
        totalOriginalSize(systemId: {system_id})
        oneRegionOriginalSize(systemId: {system_id})
        totalActualSize(systemId: {system_id})
        oneRegionActualSize(systemId: {system_id})
    }}
    "#
    )
}

#[derive(Debug, Deserialize)]
pub struct SystemsData {
    pub systems: Vec<System>,
}

#[derive(Debug, Deserialize)]
pub struct GamesData {
    pub games: Vec<Game>,
}

#[derive(Debug, Deserialize)]
pub struct RomsData {
    pub roms: Vec<Rom>,
}

/// Sums come back null for a system without files
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SizesData {
    pub total_original_size: Option<u64>,
    pub one_region_original_size: Option<u64>,
    pub total_actual_size: Option<u64>,
    pub one_region_actual_size: Option<u64>,
}

impl From<SizesData> for Sizes {
    fn from(data: SizesData) -> Self {
        Self {
            total_original: data.total_original_size.unwrap_or(0),
            one_region_original: data.one_region_original_size.unwrap_or(0),
            total_actual: data.total_actual_size.unwrap_or(0),
            one_region_actual: data.one_region_actual_size.unwrap_or(0),
        }
    }
}
