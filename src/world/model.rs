use serde::Deserialize;
use std::collections::HashSet;

//////////////////////////////
/// GAME STRUCTS AND ENUMS ///
//////////////////////////////

/// Grid coordinate. Generated coordinates are non-negative by construction;
/// movement applies unit steps with no bounds check, so a runtime position
/// may leave the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Coord { x, y }
    }
}

/// Parsed game script: roster of player names plus the ordered room list.
/// Both are fixed after load.
#[derive(Debug, Deserialize)]
pub struct GameScript {
    pub players: Vec<String>,
    #[serde(default)]
    pub room: Vec<RoomConfig>, // [[room]] blocks
}

#[derive(Debug, Deserialize)]
pub struct RoomConfig {
    pub name: String,
    pub width: i32,
    pub height: i32,

    #[serde(default)]
    pub loot: Vec<String>,

    /// Absent key and empty list are different: a room without the key has
    /// no enemy set at all.
    #[serde(default)]
    pub enemies: Option<Vec<String>>,

    #[serde(default)]
    pub exits: Vec<ExitDir>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExitDir {
    North,
    South,
    East,
    West,
}

/// Character sheet document. Only the nested `sheet` object matters here;
/// unknown fields are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CharacterFile {
    pub sheet: Sheet,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Sheet {
    pub name: String,
    /// Action points available per turn.
    pub speed: u32,
}

/// Generated room layout used by the turn loop. Coordinate collections are
/// sets so membership checks stay O(1) and order-independent.
pub struct Room {
    pub name: String,
    pub width: i32,
    pub height: i32,
    pub walls: HashSet<Coord>,
    pub loot: HashSet<Coord>,
    pub enemies: Option<HashSet<Coord>>,
    pub exits: HashSet<Coord>,
}

/// A player: immutable sheet data plus the current grid position.
pub struct Character {
    pub sheet: Sheet,
    pub pos: Coord,
}

impl Character {
    pub fn new(sheet: Sheet) -> Self {
        Character {
            sheet,
            pos: Coord::new(0, 0),
        }
    }
}
