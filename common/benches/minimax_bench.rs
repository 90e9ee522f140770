use common::games::SessionRng;
use common::games::tictactoe::{Board, Mark, Position, Strategy, evaluate, select_move};
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_minimax_single_move_empty_board() {
    let board = Board::new();
    let mut session_rng = SessionRng::new(0);
    let _ = black_box(select_move(&board, Mark::X, Strategy::Minimax, &mut session_rng));
}

fn bench_minimax_single_move_mid_game() {
    let mut board = Board::new();
    let moves = [(1, 1, Mark::X), (0, 0, Mark::O), (2, 2, Mark::X)];
    for (row, col, mark) in moves {
        board.set(Position::new(row, col), mark);
    }
    let mut session_rng = SessionRng::new(0);
    let _ = black_box(select_move(&board, Mark::O, Strategy::Minimax, &mut session_rng));
}

fn bench_minimax_self_play() {
    let mut board = Board::new();
    let mut current_mark = Mark::X;
    let mut session_rng = SessionRng::new(0);

    while !evaluate(&board).is_over() {
        match select_move(&board, current_mark, Strategy::Minimax, &mut session_rng) {
            Ok(position) => {
                board.set(position, current_mark);
                current_mark = if current_mark == Mark::X {
                    Mark::O
                } else {
                    Mark::X
                };
            }
            Err(_) => break,
        }
    }
    black_box(board);
}

fn bench_heuristic_random_game() {
    let mut board = Board::new();
    let mut current_mark = Mark::X;
    let mut session_rng = SessionRng::new(17);

    while !evaluate(&board).is_over() {
        let strategy = if current_mark == Mark::X {
            Strategy::Heuristic
        } else {
            Strategy::Random
        };
        match select_move(&board, current_mark, strategy, &mut session_rng) {
            Ok(position) => {
                board.set(position, current_mark);
                current_mark = if current_mark == Mark::X {
                    Mark::O
                } else {
                    Mark::X
                };
            }
            Err(_) => break,
        }
    }
    black_box(board);
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group.sample_size(10);

    group.bench_function("single_move_empty", |b| b.iter(bench_minimax_single_move_empty_board));

    group.bench_function("single_move_mid_game", |b| b.iter(bench_minimax_single_move_mid_game));

    group.bench_function("self_play", |b| b.iter(bench_minimax_self_play));

    group.finish();

    c.bench_function("heuristic_vs_random_game", |b| b.iter(bench_heuristic_random_game));
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
