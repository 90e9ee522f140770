use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => '_',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Zero-based cell address. Both fields are in `0..BOARD_SIZE` for any position
/// handed out by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    /// One-based, the way players type coordinates.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row + 1, self.col + 1)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    XWins,
    OWins,
    Draw,
}

impl Outcome {
    pub fn is_over(&self) -> bool {
        *self != Outcome::Ongoing
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::XWins => Some(Mark::X),
            Outcome::OWins => Some(Mark::O),
            Outcome::Ongoing | Outcome::Draw => None,
        }
    }

    pub(crate) fn won_by(mark: Mark) -> Outcome {
        match mark {
            Mark::X => Outcome::XWins,
            Mark::O => Outcome::OWins,
            Mark::Empty => Outcome::Ongoing,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "Game not finished"),
            Outcome::XWins => write!(f, "X wins"),
            Outcome::OWins => write!(f, "O wins"),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub start: Position,
    pub end: Position,
}

impl WinningLine {
    pub fn new(mark: Mark, start: Position, end: Position) -> Self {
        Self { mark, start, end }
    }
}

/// Move-selection strategy used by a computer player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Random,
    Heuristic,
    Minimax,
}

/// Who controls a side of the board. Serialized by its menu name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerKind {
    User,
    Easy,
    Medium,
    Hard,
}

impl PlayerKind {
    pub const ALL: [PlayerKind; 4] = [
        PlayerKind::User,
        PlayerKind::Easy,
        PlayerKind::Medium,
        PlayerKind::Hard,
    ];

    /// `None` for a human player.
    pub fn strategy(&self) -> Option<Strategy> {
        match self {
            PlayerKind::User => None,
            PlayerKind::Easy => Some(Strategy::Random),
            PlayerKind::Medium => Some(Strategy::Heuristic),
            PlayerKind::Hard => Some(Strategy::Minimax),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PlayerKind::User => "user",
            PlayerKind::Easy => "easy",
            PlayerKind::Medium => "medium",
            PlayerKind::Hard => "hard",
        }
    }
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for PlayerKind {
    type Err = super::EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PlayerKind::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| super::EngineError::InvalidStrategy(s.to_string()))
    }
}
