use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::{cursor, execute, terminal};

use crate::engine::output::Output;
use crate::world::{Coord, Room};

/// Fixed padding applied to every grid cell.
pub const CELL_WIDTH: usize = 2;

/// Brief pause after clearing so successive redraws don't flicker.
const REDRAW_DELAY: Duration = Duration::from_millis(10);

const SYM_WALL: char = '^';
const SYM_PLAYER: char = '$';
const SYM_EXIT: char = '>';
const SYM_LOOT: char = '*';
const SYM_ENEMY: char = '&';
const SYM_EMPTY: char = '.';

/// Symbol for one cell. First matching category wins:
/// wall > player > exit > loot > enemy > empty.
fn symbol_at(room: &Room, players: &[Coord], cell: Coord) -> char {
    if room.walls.contains(&cell) {
        SYM_WALL
    } else if players.contains(&cell) {
        SYM_PLAYER
    } else if room.exits.contains(&cell) {
        SYM_EXIT
    } else if room.loot.contains(&cell) {
        SYM_LOOT
    } else if room.enemies.as_ref().map_or(false, |e| e.contains(&cell)) {
        SYM_ENEMY
    } else {
        SYM_EMPTY
    }
}

/// Render the room grid, one text block per row, plus an optional action
/// point readout. Pure with respect to its inputs: the same snapshot always
/// renders to the same blocks.
pub fn render_grid(out: &mut Output, room: &Room, players: &[Coord], ap: Option<u32>) {
    out.title(room.name.clone());

    for y in 0..room.height {
        let mut row = String::with_capacity(room.width as usize * CELL_WIDTH);
        for x in 0..room.width {
            let sym = symbol_at(room, players, Coord::new(x, y));
            row.push_str(&format!("{:<width$}", sym, width = CELL_WIDTH));
        }
        out.say(row);
    }

    if let Some(ap) = ap {
        out.event(format!("AP remaining: {}", ap));
    }
}

/// Clear the terminal and park the cursor at the origin, then wait briefly.
/// Presentational only.
pub fn clear_screen(w: &mut impl Write) -> io::Result<()> {
    execute!(
        w,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    thread::sleep(REDRAW_DELAY);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::output::OutputBlock;
    use std::collections::HashSet;

    fn empty_room(width: i32, height: i32) -> Room {
        Room {
            name: "test".to_string(),
            width,
            height,
            walls: HashSet::new(),
            loot: HashSet::new(),
            enemies: None,
            exits: HashSet::new(),
        }
    }

    #[test]
    fn priority_order_at_an_overlapping_cell() {
        let cell = Coord::new(1, 1);
        let mut room = empty_room(4, 4);
        room.walls.insert(cell);
        room.exits.insert(cell);
        room.loot.insert(cell);
        room.enemies = Some([cell].into_iter().collect());
        let players = [cell];

        assert_eq!(symbol_at(&room, &players, cell), '^');
        room.walls.remove(&cell);
        assert_eq!(symbol_at(&room, &players, cell), '$');
        assert_eq!(symbol_at(&room, &[], cell), '>');
        room.exits.remove(&cell);
        assert_eq!(symbol_at(&room, &[], cell), '*');
        room.loot.remove(&cell);
        assert_eq!(symbol_at(&room, &[], cell), '&');
        room.enemies = None;
        assert_eq!(symbol_at(&room, &[], cell), '.');
    }

    #[test]
    fn rows_cover_the_grid_at_fixed_cell_width() {
        let room = empty_room(5, 3);
        let mut out = Output::new();
        render_grid(&mut out, &room, &[], None);

        let rows: Vec<&String> = out
            .blocks
            .iter()
            .filter_map(|b| match b {
                OutputBlock::Text(s) => Some(s),
                _ => None,
            })
            .collect();

        assert_eq!(rows.len(), 3);
        for row in rows {
            assert_eq!(row.chars().count(), 5 * CELL_WIDTH);
        }
    }

    #[test]
    fn rendering_the_same_snapshot_twice_is_identical() {
        let mut room = empty_room(6, 6);
        room.walls.insert(Coord::new(2, 2));
        room.loot.insert(Coord::new(3, 4));
        room.exits.insert(Coord::new(1, 0));
        let players = [Coord::new(4, 4)];

        let mut first = Output::new();
        render_grid(&mut first, &room, &players, Some(3));
        let mut second = Output::new();
        render_grid(&mut second, &room, &players, Some(3));

        assert_eq!(first.blocks, second.blocks);
    }

    #[test]
    fn ap_readout_is_an_event_block() {
        let room = empty_room(3, 3);
        let mut out = Output::new();
        render_grid(&mut out, &room, &[], Some(2));
        assert!(out
            .blocks
            .contains(&OutputBlock::Event("AP remaining: 2".to_string())));
    }
}
