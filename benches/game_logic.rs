use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_snake::core::{GameSnapshot, GameState, Grid, Snake};
use tui_snake::term::{FrameBuffer, GameView, Viewport};
use tui_snake::types::{Cell, Direction, GameAction, TICK_SECONDS};

fn bench_step(c: &mut Criterion) {
    // A long snake circling a large field keeps the self-collision scan busy.
    let grid = Grid::new(200, 60);
    let body: Vec<Cell> = (1..151).map(|x| Cell::new(x, 30)).collect();
    let start = GameState::from_parts(
        Snake::from_segments(body, Direction::Right, grid),
        Cell::new(1, 1),
        tui_snake::core::SimpleRng::new(7),
    );

    c.bench_function("step_long_snake", |b| {
        b.iter_batched(
            || start.clone(),
            |mut game| {
                game.step(black_box(grid));
                game
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn bench_advance_frame(c: &mut Criterion) {
    let mut game = GameState::new(120, 40, 12345);
    game.handle_input(GameAction::Right);

    c.bench_function("advance_frame_16ms", |b| {
        b.iter(|| {
            if game.dead() {
                game.handle_input(GameAction::Restart);
                game.handle_input(GameAction::Right);
            }
            game.advance_frame(black_box(TICK_SECONDS * 0.25), 120, 40)
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let game = GameState::new(160, 48, 12345);
    let view = GameView::new();
    let viewport = Viewport::new(160, 48);
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(160, 48);
    game.snapshot_into(&mut snap);

    c.bench_function("render_into_160x48", |b| {
        b.iter(|| {
            game.snapshot_into(&mut snap);
            view.render_into(black_box(&snap), viewport, &mut fb);
        })
    });
}

criterion_group!(benches, bench_step, bench_advance_frame, bench_render);
criterion_main!(benches);
