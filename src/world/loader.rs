use std::fs;
use std::io;
use std::path::Path;

use log::debug;

use crate::config::Config;

use super::model::{CharacterFile, GameScript};

//////////////////////////////
/// SCRIPT / SHEET LOADING ///
//////////////////////////////

/// Parse a game script from TOML text.
pub fn load_script_from_str(contents: &str) -> io::Result<GameScript> {
    let script: GameScript = toml::from_str(contents)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))?;

    // Basic validation; the validator reports the full structural picture.
    if script.players.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "script declares no players",
        ));
    }

    Ok(script)
}

/// Public API: load a game script from a .toml file on disk.
pub fn load_script_from_file(path: &Path) -> io::Result<GameScript> {
    let contents = fs::read_to_string(path).map_err(|e| {
        io::Error::new(e.kind(), format!("game script '{}': {}", path.display(), e))
    })?;
    load_script_from_str(&contents)
}

/// Parse a character sheet from JSON text.
pub fn load_character_from_str(contents: &str) -> io::Result<CharacterFile> {
    serde_json::from_str(contents)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e.to_string()))
}

/// Resolve `<root>/characters/<name>.json` for every declared player, in
/// script order. The data root comes in as explicit configuration.
pub fn load_characters(config: &Config, names: &[String]) -> io::Result<Vec<CharacterFile>> {
    let mut sheets = Vec::with_capacity(names.len());

    for name in names {
        let path = config.characters_dir().join(format!("{}.json", name));
        debug!("loading character sheet {}", path.display());

        let contents = fs::read_to_string(&path).map_err(|e| {
            io::Error::new(
                e.kind(),
                format!("character sheet '{}': {}", path.display(), e),
            )
        })?;

        sheets.push(load_character_from_str(&contents)?);
    }

    Ok(sheets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::ExitDir;

    const SCRIPT: &str = r#"
        players = ["fighter", "rogue"]

        [[room]]
        name = "entry"
        width = 8
        height = 6
        loot = ["torch", "coin"]
        exits = ["north", "west"]

        [[room]]
        name = "hall"
        width = 10
        height = 10
        enemies = ["goblin"]
        exits = ["south"]
    "#;

    #[test]
    fn parses_players_and_rooms_in_order() {
        let script = load_script_from_str(SCRIPT).unwrap();
        assert_eq!(script.players, vec!["fighter", "rogue"]);
        assert_eq!(script.room.len(), 2);

        let entry = &script.room[0];
        assert_eq!(entry.name, "entry");
        assert_eq!((entry.width, entry.height), (8, 6));
        assert_eq!(entry.loot, vec!["torch", "coin"]);
        assert_eq!(entry.exits, vec![ExitDir::North, ExitDir::West]);
    }

    #[test]
    fn absent_enemies_key_stays_absent() {
        let script = load_script_from_str(SCRIPT).unwrap();
        assert!(script.room[0].enemies.is_none());
        assert_eq!(script.room[1].enemies.as_deref(), Some(&["goblin".to_string()][..]));
    }

    #[test]
    fn empty_player_list_is_rejected() {
        let err = load_script_from_str("players = []").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn malformed_toml_is_invalid_data() {
        let err = load_script_from_str("players = 3").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[test]
    fn parses_character_sheet_and_ignores_extras() {
        let sheet = load_character_from_str(
            r#"{ "sheet": { "name": "Brom", "speed": 3, "class": "fighter", "strength": 17 } }"#,
        )
        .unwrap();
        assert_eq!(sheet.sheet.name, "Brom");
        assert_eq!(sheet.sheet.speed, 3);
    }

    #[test]
    fn sheet_without_speed_is_invalid_data() {
        let err = load_character_from_str(r#"{ "sheet": { "name": "Brom" } }"#).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
