use tracing::{debug, info};

use super::{Board, Player, Run, WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

impl GameStatus {
    /// Won and Draw are final; no further moves are accepted.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::InProgress
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is out of range (board has {} columns)", WIDTH)]
    InvalidColumn { column: usize },
}

/// Why a drop left the game untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoredDrop {
    ColumnFull,
    GameOver,
}

/// Result of a drop that was accepted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    Placed { row: usize, column: usize },
    Ignored(IgnoredDrop),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    status: GameStatus,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::One, // Player one starts
            status: GameStatus::InProgress,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Winning player, if the game has been won
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    /// The four cells that decided the game, if it has been won
    pub fn winning_run(&self) -> Option<Run> {
        self.winner()
            .and_then(|player| self.board.winning_run(player))
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..WIDTH)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Apply a drop and return the new state, leaving `self` untouched.
    ///
    /// Drops into a full column or a finished game return an identical state.
    pub fn drop_piece(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.drop_piece_mut(column)?;
        Ok(next)
    }

    /// Apply a drop in place.
    ///
    /// The piece lands on the lowest empty row of `column`. A win by the mover
    /// ends the game before the draw check, and the turn only passes on while
    /// the game is still in progress.
    pub fn drop_piece_mut(&mut self, column: usize) -> Result<DropOutcome, MoveError> {
        if column >= WIDTH {
            return Err(MoveError::InvalidColumn { column });
        }

        if self.is_terminal() {
            debug!(column, "drop ignored, game is over");
            return Ok(DropOutcome::Ignored(IgnoredDrop::GameOver));
        }

        let Some(row) = self.board.find_landing_row(column) else {
            debug!(column, "drop ignored, column is full");
            return Ok(DropOutcome::Ignored(IgnoredDrop::ColumnFull));
        };

        let player = self.current_player;
        self.board.place(row, column, player.to_cell());
        debug!(player = player.number(), row, column, "piece placed");

        if self.board.check_win(player) {
            self.status = GameStatus::Won(player);
            info!(player = player.number(), "game won");
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
            info!("game drawn");
        } else {
            self.current_player = player.other();
        }

        Ok(DropOutcome::Placed { row, column })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
