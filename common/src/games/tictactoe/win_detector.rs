use super::board::{Board, LINES};
use super::types::{Mark, Outcome, WinningLine};

/// Rows are scanned before columns, columns before diagonals.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    LINES.iter().find_map(|line| {
        let [first, second, third] = board.line(line);
        if first != Mark::Empty && first == second && second == third {
            Some(WinningLine::new(first, line[0], line[2]))
        } else {
            None
        }
    })
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|line| line.mark)
}

pub fn is_won_by(board: &Board, mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }
    LINES
        .iter()
        .any(|line| board.line(line).iter().all(|&cell| cell == mark))
}

pub fn evaluate(board: &Board) -> Outcome {
    if let Some(mark) = check_win(board) {
        return Outcome::won_by(mark);
    }

    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}
