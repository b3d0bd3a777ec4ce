mod generate;
mod output;
mod render;
mod turn;

pub use generate::{build_room, gen_cavern, place_exits, scatter, WALL_DENSITY};

pub use output::{flush_to, Output, OutputBlock};

pub use render::{clear_screen, render_grid, CELL_WIDTH};

pub use turn::{
    step, take_turn, try_move, ApRule, Direction, MenuAction, MoveOutcome, TurnOutcome,
};
