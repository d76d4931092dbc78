//! Game filtering
//!
//! Filters are applied as successive exclusions in a fixed order. Each one is
//! independent, so a game is shown only if it survives all of them.

use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;

use crate::model::{Game, Sorting};

/// User-controlled game filter settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameFilter {
    /// Show complete games
    pub complete: bool,
    /// Show incomplete games
    pub incomplete: bool,
    /// Show games ignored by the one-region set
    pub ignored: bool,
    /// Show only games preferred by the one-region set
    pub one_region: bool,
    /// Substring the game name must contain (empty disables)
    pub name: String,
}

impl Default for GameFilter {
    fn default() -> Self {
        Self {
            complete: true,
            incomplete: true,
            ignored: false,
            one_region: false,
            name: String::new(),
        }
    }
}

impl GameFilter {
    /// Return the games that pass every enabled filter, in their original order.
    pub fn apply(&self, games: &[Game]) -> Vec<Game> {
        let mut games = games.to_vec();

        if !self.complete {
            games.retain(|game| !game.complete);
        }
        if !self.incomplete {
            games.retain(|game| game.complete);
        }
        if !self.ignored {
            games.retain(|game| game.sorting != Sorting::Ignored);
        }
        if self.one_region {
            games.retain(|game| game.sorting == Sorting::OneRegion);
        }
        if !self.name.is_empty() {
            let needle = normalize(&self.name);
            games.retain(|game| normalize(&game.name).contains(&needle));
        }

        games
    }
}

/// NFC-normalize and lower-case a name for comparison
fn normalize(value: &str) -> String {
    value.nfc().collect::<String>().to_lowercase()
}
