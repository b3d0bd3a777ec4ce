use std::io::{self, BufRead, Write};

use log::{debug, info, warn};

use crate::engine::output::{self, Output};
use crate::engine::render;
use crate::world::{Character, Coord, Room};

/// Consecutive blocked attempts tolerated before the turn engine gives up on
/// the input stream. A bounded loop, never recursion.
const MAX_BLOCKED_ATTEMPTS: u32 = 32;

/// What an accepted move costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApRule {
    /// Each accepted move costs one action point; the turn ends at zero.
    DrainPerMove,
    /// Action points never drain; the move sub-loop runs until error or EOF.
    LegacyUnbounded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Move,
    Attack,
    Inventory,
    Quit,
}

impl MenuAction {
    /// The first character of the line decides, matching the single-letter
    /// menu prompt. The command alphabet is lowercase-only.
    pub fn parse(cmd: &str) -> Option<Self> {
        match cmd.trim().chars().next()? {
            'm' => Some(MenuAction::Move),
            'a' => Some(MenuAction::Attack),
            'e' => Some(MenuAction::Inventory),
            'q' => Some(MenuAction::Quit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    /// Lowercase-only, like the menu.
    pub fn parse(cmd: &str) -> Option<Self> {
        match cmd.trim().chars().next()? {
            'w' => Some(Direction::Up),
            'a' => Some(Direction::Left),
            's' => Some(Direction::Down),
            'd' => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Unit step in a direction. No bounds check.
pub fn step(pos: Coord, dir: Direction) -> Coord {
    match dir {
        Direction::Up => Coord::new(pos.x, pos.y - 1),
        Direction::Left => Coord::new(pos.x - 1, pos.y),
        Direction::Down => Coord::new(pos.x, pos.y + 1),
        Direction::Right => Coord::new(pos.x + 1, pos.y),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Moved(Coord),
    Blocked(Coord),
    AtExit(Coord),
}

/// Resolve one candidate step against the room layout. Walls win over exits;
/// anything else is an accepted move. The grid border is not a barrier unless
/// a wall happens to sit there.
pub fn try_move(room: &Room, pos: Coord, dir: Direction) -> MoveOutcome {
    let candidate = step(pos, dir);
    if room.walls.contains(&candidate) {
        MoveOutcome::Blocked(candidate)
    } else if room.exits.contains(&candidate) {
        MoveOutcome::AtExit(candidate)
    } else {
        MoveOutcome::Moved(candidate)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    Completed,
    Quit,
}

/// Run one full turn for `players[active]`: the menu choice, then the
/// movement sub-loop seeded with the character's speed.
pub fn take_turn(
    room: &Room,
    players: &mut [Character],
    active: usize,
    ap_rule: ApRule,
    input: &mut impl BufRead,
    screen: &mut impl Write,
) -> io::Result<TurnOutcome> {
    let name = players[active].sheet.name.clone();
    debug!("turn start: {} in room '{}'", name, room.name);

    loop {
        // The menu shows the current state before asking: grid with every
        // player position, no AP readout yet.
        render::clear_screen(screen)?;
        let positions: Vec<Coord> = players.iter().map(|p| p.pos).collect();
        let mut out = Output::new();
        render::render_grid(&mut out, room, &positions, None);
        output::flush_to(screen, out)?;

        let menu = format!("{}: (m)ove, (a)ttack, (e)xamine gear, (q)uit? ", name);
        let line = match prompt(input, screen, &menu)? {
            Some(line) => line,
            None => {
                info!("input stream closed; ending session");
                return Ok(TurnOutcome::Quit);
            }
        };

        match MenuAction::parse(&line) {
            Some(MenuAction::Move) => break,
            Some(MenuAction::Quit) => {
                info!("{} quit the session", name);
                return Ok(TurnOutcome::Quit);
            }
            Some(MenuAction::Attack) => {
                info!("attack requested by {}: not yet supported", name);
                writeln!(screen, "Attacking is not yet supported.")?;
            }
            Some(MenuAction::Inventory) => {
                info!("inventory requested by {}: not yet supported", name);
                writeln!(screen, "Inventory is not yet supported.")?;
            }
            None => debug!("unrecognized menu input {:?}", line.trim()),
        }
    }

    run_move_loop(room, players, active, ap_rule, input, screen)
}

fn run_move_loop(
    room: &Room,
    players: &mut [Character],
    active: usize,
    ap_rule: ApRule,
    input: &mut impl BufRead,
    screen: &mut impl Write,
) -> io::Result<TurnOutcome> {
    let mut ap = players[active].sheet.speed;
    if ap_rule == ApRule::LegacyUnbounded {
        warn!("action point drain disabled; moves are unbounded this turn");
    }

    let mut blocked_attempts = 0u32;

    while ap >= 1 {
        render::clear_screen(screen)?;
        let positions: Vec<Coord> = players.iter().map(|p| p.pos).collect();
        let mut out = Output::new();
        render::render_grid(&mut out, room, &positions, Some(ap));
        output::flush_to(screen, out)?;

        let line = match prompt(input, screen, "Which way? (wasd) ")? {
            Some(line) => line,
            None => return Ok(TurnOutcome::Quit),
        };

        let dir = Direction::parse(&line).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("unrecognized direction input: {:?}", line.trim()),
            )
        })?;

        match try_move(room, players[active].pos, dir) {
            MoveOutcome::Blocked(c) => {
                blocked_attempts += 1;
                debug!("move blocked at ({}, {}), {} in a row", c.x, c.y, blocked_attempts);
                if blocked_attempts >= MAX_BLOCKED_ATTEMPTS {
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidInput,
                        "too many consecutive blocked moves",
                    ));
                }
                writeln!(screen, "A wall blocks the way.")?;
            }
            MoveOutcome::AtExit(c) => {
                blocked_attempts = 0;
                info!(
                    "exit reached at ({}, {}): room transitions are not yet supported",
                    c.x, c.y
                );
                writeln!(screen, "Leaving through exits is not yet supported.")?;
            }
            MoveOutcome::Moved(c) => {
                blocked_attempts = 0;
                players[active].pos = c;
                if ap_rule == ApRule::DrainPerMove {
                    ap -= 1;
                }
            }
        }
    }

    debug!("turn over: {} is out of action points", players[active].sheet.name);
    Ok(TurnOutcome::Completed)
}

fn prompt(
    input: &mut impl BufRead,
    screen: &mut impl Write,
    text: &str,
) -> io::Result<Option<String>> {
    write!(screen, "{}", text)?;
    screen.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
