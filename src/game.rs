use std::io::{self, BufRead, Write};

use log::{debug, info};
use rand::Rng;

use crate::engine::{self, ApRule, TurnOutcome};
use crate::world::{Character, CharacterFile, GameScript, Room};

/// Owns the character roster and the generated rooms, both in script order
/// and fixed after construction.
pub struct Game {
    players: Vec<Character>,
    rooms: Vec<Room>,
    ap_rule: ApRule,
}

impl Game {
    /// Every room is generated up front at load time, not per visit.
    pub fn new(
        script: &GameScript,
        sheets: Vec<CharacterFile>,
        ap_rule: ApRule,
        rng: &mut impl Rng,
    ) -> Game {
        let players: Vec<Character> = sheets
            .into_iter()
            .map(|file| Character::new(file.sheet))
            .collect();
        let rooms: Vec<Room> = script
            .room
            .iter()
            .map(|cfg| engine::build_room(rng, cfg))
            .collect();

        info!(
            "game ready: {} player(s), {} room(s)",
            players.len(),
            rooms.len()
        );

        Game {
            players,
            rooms,
            ap_rule,
        }
    }

    pub fn players(&self) -> &[Character] {
        &self.players
    }

    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    /// One round per character per room, in order. A quit from any turn ends
    /// the whole session at once.
    pub fn start(&mut self, input: &mut impl BufRead, screen: &mut impl Write) -> io::Result<()> {
        for room_idx in 0..self.rooms.len() {
            let room = &self.rooms[room_idx];
            info!(
                "entering room '{}' ({}x{})",
                room.name, room.width, room.height
            );

            for active in 0..self.players.len() {
                match engine::take_turn(
                    room,
                    &mut self.players,
                    active,
                    self.ap_rule,
                    input,
                    screen,
                )? {
                    TurnOutcome::Quit => {
                        writeln!(screen, "Goodbye.")?;
                        return Ok(());
                    }
                    TurnOutcome::Completed => {
                        debug!("{} finished their round", self.players[active].sheet.name);
                    }
                }
            }
        }

        writeln!(screen, "The adventure is over.")?;
        Ok(())
    }
}
