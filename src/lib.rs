//! Turn-based ASCII dungeon crawl: TOML game scripts declare players and
//! rooms, each room self-generates a scattered layout of walls, loot,
//! enemies, and exits, and a strictly sequential console loop moves one
//! character at a time across the grid.

pub mod config;
pub mod engine;
pub mod game;
pub mod world;
