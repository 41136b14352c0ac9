use criterion::{Criterion, criterion_group, criterion_main};
use tictactoe_engine::board::Board;
use tictactoe_engine::bot_controller::choose_move;
use tictactoe_engine::types::{GameStatus, Mark};

fn bench_choose_move_empty_board(c: &mut Criterion) {
    c.bench_function("choose_move_empty_board", |b| {
        let board = Board::new();
        b.iter(|| choose_move(&board, Mark::X));
    });
}

fn bench_choose_move_midgame(c: &mut Criterion) {
    c.bench_function("choose_move_midgame", |b| {
        let mut board = Board::new();
        let moves = [
            (1, 1, Mark::X),
            (0, 0, Mark::O),
            (2, 2, Mark::X),
            (0, 2, Mark::O),
        ];
        for (row, col, mark) in moves {
            board.place(row, col, mark).unwrap();
        }
        b.iter(|| choose_move(&board, Mark::X));
    });
}

fn bench_full_perfect_game(c: &mut Criterion) {
    c.bench_function("full_game_perfect_vs_perfect", |b| {
        b.iter(|| {
            let mut board = Board::new();
            let mut mark = Mark::X;
            while board.status() == GameStatus::InProgress {
                let pos = choose_move(&board, mark).unwrap();
                board.place(pos.row, pos.col, mark).unwrap();
                mark = mark.opponent().unwrap();
            }
            board
        });
    });
}

criterion_group!(
    benches,
    bench_choose_move_empty_board,
    bench_choose_move_midgame,
    bench_full_perfect_game
);
criterion_main!(benches);
