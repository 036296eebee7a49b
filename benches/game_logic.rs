use criterion::{black_box, criterion_group, criterion_main, Criterion};
use falling_puzzle::core::{Board, Grid, PieceQueue};
use falling_puzzle::types::{PieceKind, RotationDirection};

fn bench_gravity_tick(c: &mut Criterion) {
    c.bench_function("gravity_tick", |b| {
        let mut board = Board::new(10, 20, 2, Some(12345));
        b.iter(|| {
            if !board.tick_gravity() {
                board = Board::new(10, 20, 2, Some(12345));
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut grid = Grid::new(10, 22);
            // Fill bottom 4 rows
            for y in 0..4 {
                for x in 0..10 {
                    grid.set(x, y, Some(PieceKind::I));
                }
            }
            black_box(grid.clear_full_rows());
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    c.bench_function("hard_drop", |b| {
        let mut board = Board::new(10, 20, 2, Some(12345));
        b.iter(|| {
            if board.game_over() {
                board = Board::new(10, 20, 2, Some(12345));
            }
            black_box(board.hard_drop());
        })
    });
}

fn bench_queue_draw(c: &mut Criterion) {
    let mut queue = PieceQueue::new(Some(12345));

    c.bench_function("queue_draw", |b| {
        b.iter(|| {
            black_box(queue.draw());
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut board = Board::new(10, 20, 2, Some(12345));

    c.bench_function("move", |b| {
        b.iter(|| {
            if !board.move_right() {
                while board.move_left() {}
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut board = Board::new(10, 20, 2, Some(12345));

    c.bench_function("rotate", |b| {
        b.iter(|| {
            board.rotate(black_box(RotationDirection::Clockwise));
        })
    });
}

fn bench_ghost(c: &mut Criterion) {
    let board = Board::new(10, 20, 2, Some(12345));

    c.bench_function("ghost_drop_distance", |b| {
        b.iter(|| black_box(board.ghost_drop_distance()))
    });
}

criterion_group!(
    benches,
    bench_gravity_tick,
    bench_line_clear,
    bench_hard_drop,
    bench_queue_draw,
    bench_move,
    bench_rotate,
    bench_ghost
);
criterion_main!(benches);
