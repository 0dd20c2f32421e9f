//! Core Connect Four game logic: board representation, player types, and the
//! game state machine driven by piece drops.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, Run, HEIGHT, RUN_LENGTH, WIDTH};
pub use player::Player;
pub use state::{DropOutcome, GameState, GameStatus, IgnoredDrop, MoveError};
