use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::One => Cell::One,
            Player::Two => Cell::Two,
        }
    }

    /// Player number as shown to people (1 or 2)
    pub fn number(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::One.other(), Player::Two);
        assert_eq!(Player::Two.other(), Player::One);
    }

    #[test]
    fn test_player_cells() {
        assert_eq!(Player::One.to_cell(), Cell::One);
        assert_eq!(Player::Two.to_cell(), Cell::Two);
        assert_ne!(Player::One.to_cell(), Cell::Empty);
    }

    #[test]
    fn test_player_number() {
        assert_eq!(Player::One.number(), 1);
        assert_eq!(Player::Two.number(), 2);
    }
}
