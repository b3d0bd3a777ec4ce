mod loader;
mod model;
mod validator;

pub use loader::{
    load_character_from_str, load_characters, load_script_from_file, load_script_from_str,
};

// Minimal, intentional surface area: re-export only what the game/engine uses.
pub use model::{Character, CharacterFile, Coord, ExitDir, GameScript, Room, RoomConfig, Sheet};
pub use validator::{validate_script, ValidationError};
