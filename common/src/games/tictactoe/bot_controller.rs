use crate::games::SessionRng;
use crate::log;

use super::board::{Board, LINES, get_available_moves};
use super::error::EngineError;
use super::game_state::TicTacToeGameState;
use super::types::{Mark, Position, Strategy};
use super::win_detector::is_won_by;

const WIN_SCORE: i32 = 10;

/// Snapshot handed to the engine. The engine never sees the live game board.
#[derive(Debug, Clone, Copy)]
pub struct BotInput {
    pub board: Board,
    pub current_mark: Mark,
}

impl BotInput {
    pub fn new(board: &Board, current_mark: Mark) -> Self {
        Self {
            board: *board,
            current_mark,
        }
    }

    pub fn from_game_state(state: &TicTacToeGameState) -> Self {
        Self::new(state.board(), state.current_mark())
    }
}

pub fn select_move(
    board: &Board,
    mark: Mark,
    strategy: Strategy,
    rng: &mut SessionRng,
) -> Result<Position, EngineError> {
    calculate_move(strategy, BotInput::new(board, mark), rng)
}

pub fn calculate_move(
    strategy: Strategy,
    input: BotInput,
    rng: &mut SessionRng,
) -> Result<Position, EngineError> {
    if input.current_mark == Mark::Empty {
        return Err(EngineError::EmptyMark);
    }

    let position = match strategy {
        Strategy::Random => calculate_random_move(&input, rng),
        Strategy::Heuristic => calculate_heuristic_move(&input, rng),
        Strategy::Minimax => calculate_minimax_move(&input),
    }?;

    log!(
        "{:?} picked {} for {}",
        strategy,
        position,
        input.current_mark
    );
    Ok(position)
}

fn calculate_random_move(input: &BotInput, rng: &mut SessionRng) -> Result<Position, EngineError> {
    let available_moves = get_available_moves(&input.board);
    rng.choose(&available_moves)
        .copied()
        .ok_or(EngineError::NoEmptyCells)
}

/// Completes our own two-in-a-row, else blocks the opponent's, else plays randomly.
pub fn calculate_heuristic_move(
    input: &BotInput,
    rng: &mut SessionRng,
) -> Result<Position, EngineError> {
    let bot_mark = input.current_mark;
    let opponent_mark = bot_mark.opponent().ok_or(EngineError::EmptyMark)?;

    if let Some(position) = find_line_completion(&input.board, bot_mark) {
        return Ok(position);
    }

    if let Some(position) = find_line_completion(&input.board, opponent_mark) {
        return Ok(position);
    }

    calculate_random_move(input, rng)
}

/// First line holding exactly two `mark`s and one empty cell, as the empty cell.
fn find_line_completion(board: &Board, mark: Mark) -> Option<Position> {
    LINES.iter().find_map(|line| {
        let cells = board.line(line);
        let marked = cells.iter().filter(|&&cell| cell == mark).count();
        let empty = cells.iter().filter(|&&cell| cell == Mark::Empty).count();

        if marked == 2 && empty == 1 {
            line.iter().copied().find(|&position| board.is_empty_at(position))
        } else {
            None
        }
    })
}

/// Exhaustive minimax. Ties keep the earliest candidate in row-major order.
pub fn calculate_minimax_move(input: &BotInput) -> Result<Position, EngineError> {
    let bot_mark = input.current_mark;
    let opponent_mark = bot_mark.opponent().ok_or(EngineError::EmptyMark)?;
    let available_moves = get_available_moves(&input.board);

    let mut board = input.board;
    let mut best: Option<(Position, i32)> = None;

    for position in available_moves {
        board.set(position, bot_mark);
        let score = minimax(&mut board, bot_mark, opponent_mark, false, 0);
        board.set(position, Mark::Empty);

        if best.is_none_or(|(_, best_score)| score > best_score) {
            best = Some((position, score));
        }
    }

    let (position, score) = best.ok_or(EngineError::NoEmptyCells)?;
    log!("minimax score {} at {}", score, position);
    Ok(position)
}

fn minimax(
    board: &mut Board,
    bot_mark: Mark,
    opponent_mark: Mark,
    is_maximizing: bool,
    depth: i32,
) -> i32 {
    if is_won_by(board, bot_mark) {
        return WIN_SCORE - depth;
    }
    if is_won_by(board, opponent_mark) {
        return depth - WIN_SCORE;
    }

    let moves = get_available_moves(board);
    if moves.is_empty() {
        return 0;
    }

    if is_maximizing {
        let mut max_eval = i32::MIN;
        for position in moves {
            board.set(position, bot_mark);
            let eval = minimax(board, bot_mark, opponent_mark, false, depth + 1);
            board.set(position, Mark::Empty);
            max_eval = max_eval.max(eval);
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for position in moves {
            board.set(position, opponent_mark);
            let eval = minimax(board, bot_mark, opponent_mark, true, depth + 1);
            board.set(position, Mark::Empty);
            min_eval = min_eval.min(eval);
        }
        min_eval
    }
}
