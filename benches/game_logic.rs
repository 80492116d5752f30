use blockfall::core::{Board, BoardEngine, GameSnapshot};
use blockfall::term::{FrameBuffer, GameView, Viewport};
use blockfall::types::{GameAction, PieceKind, FRAME_MS};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_tick(c: &mut Criterion) {
    let mut engine = BoardEngine::new(12345);

    c.bench_function("engine_tick_16ms", |b| {
        b.iter(|| {
            if engine.is_game_over() {
                engine.reset();
            }
            engine.tick(black_box(FRAME_MS));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                for x in 0..10 {
                    board.set(x, y, Some(PieceKind::I));
                }
            }
            board.clear_full_rows();
        })
    });
}

fn bench_piece_spawn(c: &mut Criterion) {
    let mut engine = BoardEngine::new(12345);

    c.bench_function("spawn_piece", |b| {
        b.iter(|| {
            engine.spawn();
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let mut engine = BoardEngine::new(12345);

    c.bench_function("try_move", |b| {
        b.iter(|| {
            engine.try_move(black_box(1), 0);
            engine.try_move(black_box(-1), 0);
        })
    });
}

fn bench_try_rotate(c: &mut Criterion) {
    let mut engine = BoardEngine::new(12345);
    engine.apply_action(GameAction::MoveDown);

    c.bench_function("try_rotate", |b| {
        b.iter(|| {
            engine.try_rotate();
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let engine = BoardEngine::new(12345);
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(80, 24);

    c.bench_function("snapshot_and_render", |b| {
        b.iter(|| {
            engine.snapshot_into(&mut snap);
            view.render_into(black_box(&snap), viewport, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_piece_spawn,
    bench_try_move,
    bench_try_rotate,
    bench_render
);
criterion_main!(benches);
