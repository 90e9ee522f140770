mod board;
mod bot_controller;
mod error;
mod game_state;
mod types;
mod win_detector;

pub use board::{BOARD_SIZE, Board, Grid, LINES, get_available_moves};
pub use bot_controller::{
    BotInput, calculate_heuristic_move, calculate_minimax_move, calculate_move, select_move,
};
pub use error::{EngineError, PlaceError};
pub use game_state::TicTacToeGameState;
pub use types::{Mark, Outcome, PlayerKind, Position, Strategy, WinningLine};
pub use win_detector::{check_win, check_win_with_line, evaluate, is_won_by};
