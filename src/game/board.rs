use super::Player;

pub const HEIGHT: usize = 4;
pub const WIDTH: usize = 4;
pub const RUN_LENGTH: usize = 4;

/// Four board coordinates, `(row, col)`, forming one straight line.
pub type Run = [(usize, usize); RUN_LENGTH];

/// Row/column steps for the run shapes anchored at each origin:
/// horizontal, vertical, diagonal down-right, diagonal down-left.
const RUN_SHAPES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; WIDTH]; HEIGHT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; WIDTH]; HEIGHT],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row HEIGHT - 1 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Lowest empty row in a column, or `None` when the column is full.
    ///
    /// `col` must be below `WIDTH`; range checks belong to the caller.
    pub fn find_landing_row(&self, col: usize) -> Option<usize> {
        (0..HEIGHT).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Check if a column is full
    ///
    /// Same contract as `find_landing_row`: `col` must be below `WIDTH`.
    pub fn is_column_full(&self, col: usize) -> bool {
        self.cells[0][col] != Cell::Empty
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..WIDTH).all(|col| self.is_column_full(col))
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// Write a piece into an empty cell. Cells are write-once.
    pub(crate) fn place(&mut self, row: usize, col: usize, cell: Cell) {
        debug_assert_eq!(self.cells[row][col], Cell::Empty, "cell ({row}, {col}) already set");
        self.cells[row][col] = cell;
    }

    /// Check whether `player` has four in a row anywhere on the board.
    pub fn check_win(&self, player: Player) -> bool {
        self.winning_run(player).is_some()
    }

    /// Find a run of four cells held by `player`.
    ///
    /// Every cell is tried as the origin of each run shape; runs that leave the
    /// board are skipped. Any run found is returned, there is no preferred order.
    pub fn winning_run(&self, player: Player) -> Option<Run> {
        let target = player.to_cell();
        for row in 0..HEIGHT {
            for col in 0..WIDTH {
                for (d_row, d_col) in RUN_SHAPES {
                    let Some(run) = Self::run_from(row, col, d_row, d_col) else {
                        continue;
                    };
                    if run.iter().all(|&(r, c)| self.cells[r][c] == target) {
                        return Some(run);
                    }
                }
            }
        }
        None
    }

    /// Coordinates of the run starting at `(row, col)` stepping by
    /// `(d_row, d_col)`, or `None` if any of them falls off the board.
    fn run_from(row: usize, col: usize, d_row: isize, d_col: isize) -> Option<Run> {
        let mut run = [(0, 0); RUN_LENGTH];
        for (step, slot) in run.iter_mut().enumerate() {
            let r = row as isize + d_row * step as isize;
            let c = col as isize + d_col * step as isize;
            if !(0..HEIGHT as isize).contains(&r) || !(0..WIDTH as isize).contains(&c) {
                return None;
            }
            *slot = (r as usize, c as usize);
        }
        Some(run)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
