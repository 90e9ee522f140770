use std::fmt;

use super::types::{Mark, Position};

pub const BOARD_SIZE: usize = 3;

pub type Grid = [[Mark; BOARD_SIZE]; BOARD_SIZE];

/// Every row, then every column, then the main and anti diagonal.
pub const LINES: [[Position; BOARD_SIZE]; 8] = [
    [Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
    [Position::new(1, 0), Position::new(1, 1), Position::new(1, 2)],
    [Position::new(2, 0), Position::new(2, 1), Position::new(2, 2)],
    [Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)],
    [Position::new(0, 1), Position::new(1, 1), Position::new(2, 1)],
    [Position::new(0, 2), Position::new(1, 2), Position::new(2, 2)],
    [Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)],
    [Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)],
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Board {
    cells: Grid,
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(cells: Grid) -> Self {
        Self { cells }
    }

    pub fn rows(&self) -> &Grid {
        &self.cells
    }

    pub fn contains(position: Position) -> bool {
        position.row < BOARD_SIZE && position.col < BOARD_SIZE
    }

    /// Panics if `position` is off the board; callers check with `Board::contains` first.
    pub fn get(&self, position: Position) -> Mark {
        self.cells[position.row][position.col]
    }

    pub fn set(&mut self, position: Position, mark: Mark) {
        self.cells[position.row][position.col] = mark;
    }

    pub fn is_empty_at(&self, position: Position) -> bool {
        self.get(position) == Mark::Empty
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn line(&self, line: &[Position; BOARD_SIZE]) -> [Mark; BOARD_SIZE] {
        std::array::from_fn(|i| self.get(line[i]))
    }
}

/// Empty cells in row-major order, recomputed from the board on every call.
pub fn get_available_moves(board: &Board) -> Vec<Position> {
    let mut moves = Vec::new();
    for (row, cells) in board.rows().iter().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            if cell == Mark::Empty {
                moves.push(Position::new(row, col));
            }
        }
    }
    moves
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---------")?;
        for row in &self.cells {
            write!(f, "|")?;
            for cell in row {
                write!(f, " {}", cell)?;
            }
            writeln!(f, " |")?;
        }
        write!(f, "---------")
    }
}
