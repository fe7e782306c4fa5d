use criterion::{criterion_group, criterion_main, Criterion};
use tictactoe_ai::{initial_board, Board, Solver};

use std::hint::black_box;

fn bench_solve_empty_board(c: &mut Criterion) {
    c.bench_function("solve_empty_board", |b| {
        b.iter(|| Solver::new(black_box(initial_board())).solve());
    });
}

fn bench_solve_parallel_empty_board(c: &mut Criterion) {
    c.bench_function("solve_parallel_empty_board", |b| {
        b.iter(|| Solver::new(black_box(initial_board())).solve_parallel());
    });
}

fn bench_solve_mid_game(c: &mut Criterion) {
    c.bench_function("solve_mid_game", |b| {
        // X centre, O corner, X opposite corner
        let board = Board::from_moves("519").expect("valid opening");
        b.iter(|| Solver::new(black_box(board)).solve());
    });
}

fn bench_self_play(c: &mut Criterion) {
    c.bench_function("self_play_full_game", |b| {
        b.iter(|| {
            let mut board = initial_board();
            while let Some(mv) = Solver::new(board).best_move() {
                board = match board.apply_move(mv) {
                    Ok(next) => next,
                    Err(_) => break,
                };
            }
            board
        });
    });
}

criterion_group!(
    benches,
    bench_solve_empty_board,
    bench_solve_parallel_empty_board,
    bench_solve_mid_game,
    bench_self_play
);
criterion_main!(benches);
