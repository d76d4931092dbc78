//! Records returned by the collection server.
//!
//! Enumerated columns (`merging`, `sorting`) travel as integers and are decoded
//! into enums here so the rest of the crate never compares magic numbers.

use serde::{Deserialize, Serialize};

/// How an arcade set stores parent and clone ROMs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Merging {
    Split,
    NonMerged,
    FullNonMerged,
    Merged,
    FullMerged,
}

impl Merging {
    pub fn label(&self) -> &'static str {
        match self {
            Merging::Split => "split",
            Merging::NonMerged => "non-merged",
            Merging::FullNonMerged => "full non-merged",
            Merging::Merged => "merged",
            Merging::FullMerged => "full merged",
        }
    }
}

impl TryFrom<i64> for Merging {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Merging::Split),
            1 => Ok(Merging::NonMerged),
            2 => Ok(Merging::FullNonMerged),
            3 => Ok(Merging::Merged),
            4 => Ok(Merging::FullMerged),
            other => Err(format!("unknown merging value: {}", other)),
        }
    }
}

impl From<Merging> for i64 {
    fn from(value: Merging) -> Self {
        match value {
            Merging::Split => 0,
            Merging::NonMerged => 1,
            Merging::FullNonMerged => 2,
            Merging::Merged => 3,
            Merging::FullMerged => 4,
        }
    }
}

/// Curation category of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub enum Sorting {
    /// Normal game, kept regardless of region
    AllRegions,
    /// Preferred release in a one-region set
    OneRegion,
    /// Excluded from the one-region set
    Ignored,
}

impl TryFrom<i64> for Sorting {
    type Error = String;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Sorting::AllRegions),
            1 => Ok(Sorting::OneRegion),
            2 => Ok(Sorting::Ignored),
            other => Err(format!("unknown sorting value: {}", other)),
        }
    }
}

impl From<Sorting> for i64 {
    fn from(value: Sorting) -> Self {
        match value {
            Sorting::AllRegions => 0,
            Sorting::OneRegion => 1,
            Sorting::Ignored => 2,
        }
    }
}

/// A system (one imported DAT)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct System {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub complete: bool,
    pub merging: Merging,
    pub arcade: bool,
}

/// A game within a system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub complete: bool,
    pub sorting: Sorting,
}

/// A file on disk backing a ROM
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Romfile {
    pub path: String,
    pub size: u64,
}

/// A ROM of a game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rom {
    pub name: String,
    pub size: u64,
    /// `None` when no matching file is in the collection
    pub romfile: Option<Romfile>,
    /// Whether the ROM is ignored for the system it was queried against
    pub ignored: bool,
}

/// Byte totals for a system
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Sizes {
    pub total_original: u64,
    pub one_region_original: u64,
    pub total_actual: u64,
    pub one_region_actual: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_decodes_sorting() {
        let game: Game = serde_json::from_str(
            r#"{"id": 7, "name": "Tetris", "description": "Tetris (World)", "complete": true, "sorting": 1}"#,
        )
        .unwrap();
        assert_eq!(game.sorting, Sorting::OneRegion);
        assert!(game.complete);
    }

    #[test]
    fn test_unknown_sorting_is_rejected() {
        let result: Result<Game, _> = serde_json::from_str(
            r#"{"id": 7, "name": "Tetris", "description": "", "complete": true, "sorting": 9}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_system_decodes_merging() {
        let system: System = serde_json::from_str(
            r#"{"id": 1, "name": "MAME", "description": "MAME 0.250", "complete": false, "merging": 3, "arcade": true}"#,
        )
        .unwrap();
        assert_eq!(system.merging, Merging::Merged);
        assert_eq!(system.merging.label(), "merged");
    }

    #[test]
    fn test_rom_without_file() {
        let rom: Rom = serde_json::from_str(
            r#"{"name": "game.bin", "size": 1024, "romfile": null, "ignored": false}"#,
        )
        .unwrap();
        assert!(rom.romfile.is_none());
    }

    #[test]
    fn test_sorting_serializes_as_integer() {
        assert_eq!(serde_json::to_string(&Sorting::Ignored).unwrap(), "2");
    }
}
