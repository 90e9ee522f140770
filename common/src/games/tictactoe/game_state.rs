use crate::games::SessionRng;
use crate::log;

use super::board::Board;
use super::bot_controller::{BotInput, calculate_move};
use super::error::PlaceError;
use super::types::{Mark, Outcome, PlayerKind, Position, WinningLine};
use super::win_detector::{check_win_with_line, evaluate};

/// Turn state of one game. X always moves first.
#[derive(Debug, Clone)]
pub struct TicTacToeGameState {
    board: Board,
    player_x: PlayerKind,
    player_o: PlayerKind,
    current_mark: Mark,
}

impl TicTacToeGameState {
    pub fn new(player_x: PlayerKind, player_o: PlayerKind) -> Self {
        Self {
            board: Board::new(),
            player_x,
            player_o,
            current_mark: Mark::X,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn current_player(&self) -> PlayerKind {
        self.player_for(self.current_mark)
    }

    pub fn player_for(&self, mark: Mark) -> PlayerKind {
        if mark == Mark::O {
            self.player_o
        } else {
            self.player_x
        }
    }

    pub fn status(&self) -> Outcome {
        evaluate(&self.board)
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }

    pub fn place_mark(&mut self, position: Position) -> Result<Outcome, PlaceError> {
        if self.status().is_over() {
            return Err(PlaceError::GameOver);
        }

        if !Board::contains(position) {
            return Err(PlaceError::OutOfBounds(position));
        }

        let existing = self.board.get(position);
        if existing != Mark::Empty {
            return Err(PlaceError::Occupied {
                position,
                mark: existing,
            });
        }

        self.board.set(position, self.current_mark);

        let status = self.status();
        if status.is_over() {
            log!("Game over after {} at {}: {}", self.current_mark, position, status);
        } else {
            self.switch_turn();
        }

        Ok(status)
    }

    /// Asks the engine for the current computer player's move and applies it.
    pub fn play_bot_move(&mut self, rng: &mut SessionRng) -> Result<Position, PlaceError> {
        if self.status().is_over() {
            return Err(PlaceError::GameOver);
        }

        let strategy = self
            .current_player()
            .strategy()
            .ok_or(PlaceError::HumanTurn(self.current_mark))?;

        let position = calculate_move(strategy, BotInput::from_game_state(self), rng)?;
        self.place_mark(position)?;
        Ok(position)
    }

    fn switch_turn(&mut self) {
        self.current_mark = if self.current_mark == Mark::X {
            Mark::O
        } else {
            Mark::X
        };
    }
}
