//! Winning-line detection.
//!
//! The cube side equals the run length, so every direction class through a
//! cell has at most one line of length four, and only the cells on that line
//! can complete it. Each class is a gate (is the cell on the line?) plus the
//! four coordinates of the line.

use serde::Serialize;

use super::board::{Board, Cell, Coord, HEIGHT};

const LAST: usize = HEIGHT - 1;

/// The 13 undirected line directions that can pass through a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    /// The pole itself, rows 0..4.
    Pile,
    /// Fixed row and rank, files 0..4.
    File,
    /// Fixed row and file, ranks 0..4.
    Rank,
    /// `(i, i, rank)`
    RowFileRising,
    /// `(3 - i, i, rank)`
    RowFileFalling,
    /// `(i, file, i)`
    RowRankRising,
    /// `(3 - i, file, i)`
    RowRankFalling,
    /// `(row, i, i)`
    PlanarDiagonal,
    /// `(row, i, 3 - i)`
    PlanarAntiDiagonal,
    /// `(i, i, i)`
    SpaceDiagonalA,
    /// `(3 - i, i, i)`
    SpaceDiagonalB,
    /// `(i, i, 3 - i)`
    SpaceDiagonalC,
    /// `(3 - i, i, 3 - i)`
    SpaceDiagonalD,
}

impl Direction {
    pub const ALL: [Direction; 13] = [
        Direction::Pile,
        Direction::File,
        Direction::Rank,
        Direction::RowFileRising,
        Direction::RowFileFalling,
        Direction::RowRankRising,
        Direction::RowRankFalling,
        Direction::PlanarDiagonal,
        Direction::PlanarAntiDiagonal,
        Direction::SpaceDiagonalA,
        Direction::SpaceDiagonalB,
        Direction::SpaceDiagonalC,
        Direction::SpaceDiagonalD,
    ];

    /// Whether the length-four line of this class through `at` exists, i.e.
    /// `at` lies on it.
    pub fn passes_through(self, at: Coord) -> bool {
        let Coord { row, file, rank } = at;
        let planar = file == rank;
        let anti = file + rank == LAST;
        match self {
            Direction::Pile | Direction::File | Direction::Rank => true,
            Direction::RowFileRising => row == file,
            Direction::RowFileFalling => row == LAST - file,
            Direction::RowRankRising => row == rank,
            Direction::RowRankFalling => row == LAST - rank,
            Direction::PlanarDiagonal => planar,
            Direction::PlanarAntiDiagonal => anti,
            Direction::SpaceDiagonalA => planar && row == rank,
            Direction::SpaceDiagonalB => planar && row == LAST - rank,
            Direction::SpaceDiagonalC => anti && row == file,
            Direction::SpaceDiagonalD => anti && row == rank,
        }
    }

    /// The four cells of this class's line through `at`. Only meaningful when
    /// [`passes_through`](Self::passes_through) holds.
    pub fn cells(self, at: Coord) -> [Coord; 4] {
        let Coord { row, file, rank } = at;
        std::array::from_fn(|i| match self {
            Direction::Pile => Coord::new(i, file, rank),
            Direction::File => Coord::new(row, i, rank),
            Direction::Rank => Coord::new(row, file, i),
            Direction::RowFileRising => Coord::new(i, i, rank),
            Direction::RowFileFalling => Coord::new(LAST - i, i, rank),
            Direction::RowRankRising => Coord::new(i, file, i),
            Direction::RowRankFalling => Coord::new(LAST - i, file, i),
            Direction::PlanarDiagonal => Coord::new(row, i, i),
            Direction::PlanarAntiDiagonal => Coord::new(row, i, LAST - i),
            Direction::SpaceDiagonalA => Coord::new(i, i, i),
            Direction::SpaceDiagonalB => Coord::new(LAST - i, i, i),
            Direction::SpaceDiagonalC => Coord::new(i, i, LAST - i),
            Direction::SpaceDiagonalD => Coord::new(LAST - i, i, LAST - i),
        })
    }
}

/// Every direction whose line through `at` is made entirely of `mark`.
///
/// Each gated class is checked on its own; none is skipped because another
/// one already matched.
pub fn winning_directions(board: &Board, at: Coord, mark: Cell) -> Vec<Direction> {
    if mark == Cell::Empty {
        return Vec::new();
    }
    Direction::ALL
        .into_iter()
        .filter(|dir| dir.passes_through(at))
        .filter(|dir| dir.cells(at).iter().all(|&c| board.get(c) == mark))
        .collect()
}

/// Check if the piece `mark` just placed at `at` completes a run of four.
pub fn completes_line(board: &Board, at: Coord, mark: Cell) -> bool {
    mark != Cell::Empty
        && Direction::ALL.into_iter().any(|dir| {
            dir.passes_through(at) && dir.cells(at).iter().all(|&c| board.get(c) == mark)
        })
}
