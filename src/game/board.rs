use std::fmt;

use serde::Serialize;

use crate::error::InvariantViolation;

pub const HEIGHT: usize = 4;
pub const FILES: usize = 4;
pub const RANKS: usize = 4;
pub const NUM_ACTIONS: usize = FILES * RANKS;
pub const NUM_CELLS: usize = HEIGHT * FILES * RANKS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Cell {
    Empty,
    O,
    X,
}

impl Cell {
    /// Character used when rendering the board.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::O => 'o',
            Cell::X => 'x',
        }
    }

    /// Channel index of this cell in the one-hot observation.
    pub fn channel(self) -> usize {
        match self {
            Cell::Empty => 0,
            Cell::O => 1,
            Cell::X => 2,
        }
    }
}

/// A cell position. Row 0 is the bottom of the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Coord {
    pub row: usize,
    pub file: usize,
    pub rank: usize,
}

impl Coord {
    pub const fn new(row: usize, file: usize, rank: usize) -> Self {
        Coord { row, file, rank }
    }

    pub fn pole(self) -> Pole {
        Pole {
            file: self.file,
            rank: self.rank,
        }
    }
}

/// A vertical pole of four cells. Actions address poles, never cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Pole {
    pub file: usize,
    pub rank: usize,
}

impl Pole {
    /// Decode an action (`file * 4 + rank`), or `None` if it is out of range.
    pub fn from_action(action: usize) -> Option<Pole> {
        if action >= NUM_ACTIONS {
            return None;
        }
        Some(Pole {
            file: action / RANKS,
            rank: action % RANKS,
        })
    }

    pub fn action(self) -> usize {
        self.file * RANKS + self.rank
    }

    pub fn at(self, row: usize) -> Coord {
        Coord::new(row, self.file, self.rank)
    }

    /// All sixteen poles in action order.
    pub fn all() -> impl Iterator<Item = Pole> {
        (0..NUM_ACTIONS).filter_map(Pole::from_action)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Board {
    cells: [[[Cell; RANKS]; FILES]; HEIGHT],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[[Cell::Empty; RANKS]; FILES]; HEIGHT],
        }
    }

    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.row][coord.file][coord.rank]
    }

    /// A pole is exhausted once its top cell is occupied.
    pub fn is_pole_full(&self, pole: Pole) -> bool {
        self.cells[HEIGHT - 1][pole.file][pole.rank] != Cell::Empty
    }

    /// Lowest empty row of a pole, scanning upward from the bottom.
    pub fn landing_row(&self, pole: Pole) -> Result<usize, InvariantViolation> {
        (0..HEIGHT)
            .find(|&row| self.cells[row][pole.file][pole.rank] == Cell::Empty)
            .ok_or(InvariantViolation {
                file: pole.file,
                rank: pole.rank,
            })
    }

    /// Drop a piece into a pole, returns the cell where it landed.
    ///
    /// This is the only way cells change, which keeps every pole filled
    /// contiguously from row 0.
    pub fn drop_piece(&mut self, pole: Pole, cell: Cell) -> Result<Coord, InvariantViolation> {
        debug_assert_ne!(cell, Cell::Empty, "cannot drop an empty piece");
        let row = self.landing_row(pole)?;
        self.cells[row][pole.file][pole.rank] = cell;
        Ok(pole.at(row))
    }

    /// Check if every one of the 64 cells is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().flatten().all(|&cell| cell != Cell::Empty)
    }

    pub fn occupied(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    /// True when, in every pole, occupied cells form a block starting at row 0.
    pub fn satisfies_gravity(&self) -> bool {
        Pole::all().all(|pole| {
            (1..HEIGHT).all(|row| {
                self.cells[row][pole.file][pole.rank] == Cell::Empty
                    || self.cells[row - 1][pole.file][pole.rank] != Cell::Empty
            })
        })
    }

    /// Every coordinate, ordered by row, then file, then rank.
    pub fn coords() -> impl Iterator<Item = Coord> {
        (0..HEIGHT).flat_map(|row| {
            (0..FILES).flat_map(move |file| (0..RANKS).map(move |rank| Coord::new(row, file, rank)))
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Top row first; one line per file listing its four ranks, blank line after
/// each row.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..HEIGHT).rev() {
            for file in 0..FILES {
                for rank in 0..RANKS {
                    write!(f, "{}", self.cells[row][file][rank].symbol())?;
                }
                writeln!(f)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pole(file: usize, rank: usize) -> Pole {
        Pole { file, rank }
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for coord in Board::coords() {
            assert_eq!(board.get(coord), Cell::Empty);
        }
        assert_eq!(board.occupied(), 0);
    }

    #[test]
    fn test_coords_cover_cube() {
        assert_eq!(Board::coords().count(), NUM_CELLS);
        assert_eq!(Board::coords().next(), Some(Coord::new(0, 0, 0)));
        assert_eq!(Board::coords().last(), Some(Coord::new(3, 3, 3)));
    }

    #[test]
    fn test_action_pole_bijection() {
        for action in 0..NUM_ACTIONS {
            let pole = Pole::from_action(action).unwrap();
            assert_eq!(pole.file, action / 4);
            assert_eq!(pole.rank, action % 4);
            assert_eq!(pole.action(), action);
        }
        assert_eq!(Pole::from_action(16), None);
        assert_eq!(Pole::all().count(), NUM_ACTIONS);
    }

    #[test]
    fn test_drop_piece_stacks() {
        let mut board = Board::new();

        let landed = board.drop_piece(pole(2, 1), Cell::O).unwrap();
        assert_eq!(landed, Coord::new(0, 2, 1));

        let landed = board.drop_piece(pole(2, 1), Cell::X).unwrap();
        assert_eq!(landed, Coord::new(1, 2, 1));
        assert_eq!(board.get(Coord::new(1, 2, 1)), Cell::X);
        assert_eq!(board.landing_row(pole(2, 1)), Ok(2));
    }

    #[test]
    fn test_pole_full() {
        let mut board = Board::new();
        for _ in 0..HEIGHT {
            assert!(!board.is_pole_full(pole(0, 3)));
            board.drop_piece(pole(0, 3), Cell::O).unwrap();
        }

        assert!(board.is_pole_full(pole(0, 3)));
        assert_eq!(
            board.landing_row(pole(0, 3)),
            Err(InvariantViolation { file: 0, rank: 3 })
        );
        assert!(board.drop_piece(pole(0, 3), Cell::X).is_err());
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for p in Pole::all() {
            for _ in 0..HEIGHT {
                assert!(!board.is_full());
                board.drop_piece(p, Cell::X).unwrap();
            }
        }
        assert!(board.is_full());
        assert_eq!(board.occupied(), NUM_CELLS);
    }

    #[test]
    fn test_gravity_holds_after_drops() {
        let mut board = Board::new();
        for action in [0, 0, 5, 15, 15, 15, 0] {
            board.drop_piece(Pole::from_action(action).unwrap(), Cell::O).unwrap();
            assert!(board.satisfies_gravity());
        }
    }

    #[test]
    fn test_gravity_detects_floating_cell() {
        let mut board = Board::new();
        board.cells[2][1][1] = Cell::X;
        assert!(!board.satisfies_gravity());
    }

    #[test]
    fn test_render_puts_top_row_first() {
        let mut board = Board::new();
        board.drop_piece(pole(0, 0), Cell::O).unwrap();
        board.drop_piece(pole(0, 0), Cell::X).unwrap();
        board.drop_piece(pole(3, 2), Cell::O).unwrap();

        let empty_row = "....\n....\n....\n....\n\n";
        let expected = format!(
            "{empty_row}{empty_row}x...\n....\n....\n....\n\no...\n....\n....\n..o.\n\n"
        );
        assert_eq!(board.to_string(), expected);
    }
}
