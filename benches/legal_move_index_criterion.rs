use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ray_chess::game_state::chess_types::GameState;
use ray_chess::move_generation::legal_move_index::LegalMoveIndex;
use ray_chess::turn::turn_controller::TurnController;
use ray_chess::utils::random_playout::random_playout;

fn bench_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_move_index");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    let start = GameState::new_game();
    group.bench_function("rebuild_startpos", |b| {
        b.iter(|| black_box(LegalMoveIndex::rebuild(black_box(&start))))
    });

    // A middlegame-ish position reached by a fixed random playout.
    let mut controller = TurnController::new_game();
    random_playout(&mut controller, 24, 11);
    let midgame = controller.game_state().clone();
    group.bench_function("rebuild_after_24_random_plies", |b| {
        b.iter(|| black_box(LegalMoveIndex::rebuild(black_box(&midgame))))
    });

    group.bench_function("random_playout_40", |b| {
        b.iter(|| {
            let mut controller = TurnController::new_game();
            black_box(random_playout(&mut controller, 40, black_box(3)).len())
        })
    });

    group.finish();
}

criterion_group!(index_benches, bench_rebuild);
criterion_main!(index_benches);
