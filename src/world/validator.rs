use std::collections::HashSet;

use super::model::GameScript;

#[derive(Debug, Clone)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    fn new(msg: impl Into<String>) -> Self {
        ValidationError {
            message: msg.into(),
        }
    }
}

/// Structural checks on a parsed script. Returns every problem found so the
/// author can fix them in one pass.
pub fn validate_script(script: &GameScript) -> Vec<ValidationError> {
    let mut errors: Vec<ValidationError> = Vec::new();

    if script.players.is_empty() {
        errors.push(ValidationError::new("script has no players"));
    }

    for name in &script.players {
        if name.trim().is_empty() {
            errors.push(ValidationError::new("script has an empty player name"));
        }
    }

    if script.room.is_empty() {
        errors.push(ValidationError::new("script has no rooms"));
    }

    let mut seen: HashSet<&str> = HashSet::new();

    for room in &script.room {
        if room.name.trim().is_empty() {
            errors.push(ValidationError::new("a room has an empty name"));
            continue;
        }

        if !seen.insert(room.name.as_str()) {
            errors.push(ValidationError::new(format!(
                "duplicate room name: {}",
                room.name
            )));
        }

        // Anything smaller has no interior to scatter into.
        if room.width < 3 || room.height < 3 {
            errors.push(ValidationError::new(format!(
                "room '{}' is {}x{}; rooms must be at least 3x3",
                room.name, room.width, room.height
            )));
        }

        for entry in &room.loot {
            if entry.trim().is_empty() {
                errors.push(ValidationError::new(format!(
                    "room '{}' has an empty loot entry",
                    room.name
                )));
            }
        }

        if let Some(enemies) = &room.enemies {
            for entry in enemies {
                if entry.trim().is_empty() {
                    errors.push(ValidationError::new(format!(
                        "room '{}' has an empty enemy entry",
                        room.name
                    )));
                }
            }
        }
    }

    errors
}
