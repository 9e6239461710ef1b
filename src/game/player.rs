use serde::Serialize;

use super::board::Cell;

/// The two players. `O` is player 0 and always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Player {
    O,
    X,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::O, Player::X];

    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::O => Player::X,
            Player::X => Player::O,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::O => Cell::O,
            Player::X => Cell::X,
        }
    }

    /// Player id as used in returns and prompts.
    pub fn index(self) -> usize {
        match self {
            Player::O => 0,
            Player::X => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Player> {
        match index {
            0 => Some(Player::O),
            1 => Some(Player::X),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Player::O => "Player 0",
            Player::X => "Player 1",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::O.other(), Player::X);
        assert_eq!(Player::X.other(), Player::O);
    }

    #[test]
    fn test_index_roundtrip() {
        for player in Player::ALL {
            assert_eq!(Player::from_index(player.index()), Some(player));
        }
        assert_eq!(Player::from_index(2), None);
    }

    #[test]
    fn test_player_marks() {
        assert_eq!(Player::O.to_cell(), Cell::O);
        assert_eq!(Player::X.to_cell().symbol(), 'x');
        assert_eq!(Player::X.name(), "Player 1");
    }
}
