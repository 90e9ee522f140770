use super::types::{Mark, Position};

/// Contract violations reported by the move engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Asked for a move on a board with no empty cell left.
    NoEmptyCells,
    /// Asked to move on behalf of `Mark::Empty`.
    EmptyMark,
    /// A strategy selector name outside the known set.
    InvalidStrategy(String),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::NoEmptyCells => write!(f, "Invalid state: no empty cells left"),
            EngineError::EmptyMark => write!(f, "Invalid state: the empty mark cannot move"),
            EngineError::InvalidStrategy(name) => write!(f, "Invalid strategy: {}", name),
        }
    }
}

impl std::error::Error for EngineError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaceError {
    GameOver,
    HumanTurn(Mark),
    OutOfBounds(Position),
    Occupied { position: Position, mark: Mark },
    Engine(EngineError),
}

impl std::fmt::Display for PlaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlaceError::GameOver => write!(f, "Game is already over"),
            PlaceError::HumanTurn(mark) => write!(f, "{} is played by a user", mark),
            PlaceError::OutOfBounds(position) => {
                write!(f, "Position ({}, {}) out of bounds", position.row, position.col)
            }
            PlaceError::Occupied { position, mark } => write!(
                f,
                "Cell ({}, {}) is already marked with {}",
                position.row, position.col, mark
            ),
            PlaceError::Engine(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for PlaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PlaceError::Engine(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EngineError> for PlaceError {
    fn from(e: EngineError) -> Self {
        PlaceError::Engine(e)
    }
}
