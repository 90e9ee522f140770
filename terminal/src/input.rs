use common::games::tictactoe::{BOARD_SIZE, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    NotNumbers,
    OutOfRange,
}

impl std::fmt::Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputError::NotNumbers => write!(f, "You should enter numbers!"),
            InputError::OutOfRange => {
                write!(f, "Coordinates should be from 1 to {}!", BOARD_SIZE)
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Parses one-based `row column`. Extra words after the two numbers are ignored.
pub fn parse_coordinates(line: &str) -> Result<Position, InputError> {
    let mut words = line.split_whitespace();
    let mut next_number = || -> Result<usize, InputError> {
        words
            .next()
            .and_then(|word| word.parse::<usize>().ok())
            .ok_or(InputError::NotNumbers)
    };

    let row = next_number()?;
    let col = next_number()?;

    if !(1..=BOARD_SIZE).contains(&row) || !(1..=BOARD_SIZE).contains(&col) {
        return Err(InputError::OutOfRange);
    }

    Ok(Position::new(row - 1, col - 1))
}
