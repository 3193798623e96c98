//! Benchmarks for the selection and modifier hot paths.
//!
//! Candidacy queries run per frame over the whole board in a client, and
//! modifiers run inside agent search loops, so both need to stay cheap.

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use tactics_core::cards::{Card, CardId, MoveArchetype};
use tactics_core::core::{Game, GameRng, Pawn, PawnId, PlayerId, Position, Rules, Tile};
use tactics_core::games::skirmish::{
    deployment_modifier, deployment_selector, movement_selector, setup,
};
use tactics_core::modifier::{Modifier, MovePawn, PlacePawn};
use tactics_core::select::{Selectable, Selector};
use tactics_core::session::GameSession;

fn bench_deployment_turn(c: &mut Criterion) {
    let session = GameSession::new(setup(Rules::default()), PlayerId::new(0));
    let pawn = Selectable::Pawn(*session.game.pawn(PawnId::new(0)).unwrap());
    let tile = Selectable::Tile(*session.game.board.tile(Position::new(2, 3)).unwrap());

    c.bench_function("deployment_turn", |b| {
        b.iter(|| {
            let mut selector = deployment_selector();
            selector.toggle(black_box(&session), black_box(&pawn));
            selector.toggle(black_box(&session), black_box(&tile));
            let tree = selector.take_finished().unwrap();
            black_box(deployment_modifier(&tree))
        });
    });
}

fn bench_movement_turn(c: &mut Criterion) {
    let mut game = setup(Rules::default());
    PlacePawn::new(PawnId::new(0), Position::new(4, 4)).apply(&mut game);
    let session = GameSession::new(game, PlayerId::new(0));
    let card = Card::new(CardId::new(0), MoveArchetype::knight());
    let pawn = Selectable::Pawn(*session.game.pawn(PawnId::new(0)).unwrap());
    let tile = Selectable::Tile(*session.game.board.tile(Position::new(6, 5)).unwrap());

    c.bench_function("movement_turn", |b| {
        b.iter(|| {
            let mut selector = movement_selector(card.clone());
            selector.toggle(black_box(&session), black_box(&pawn));
            selector.toggle(black_box(&session), black_box(&tile));
            black_box(selector.take_finished())
        });
    });
}

fn bench_candidacy_scan(c: &mut Criterion) {
    let session = GameSession::new(setup(Rules::default()), PlayerId::new(0));
    let mut selector = deployment_selector();
    selector.toggle(
        &session,
        &Selectable::Pawn(*session.game.pawn(PawnId::new(0)).unwrap()),
    );

    // The per-frame query: which of the 64 squares light up.
    c.bench_function("candidacy_scan_64_tiles", |b| {
        b.iter(|| {
            let mut candidates = 0u32;
            for tile in session.game.board.tiles() {
                if selector.is_candidate(black_box(&session), &Selectable::Tile(*tile)) {
                    candidates += 1;
                }
            }
            black_box(candidates)
        });
    });
}

fn bench_move_cycle(c: &mut Criterion) {
    let mut game = setup(Rules::default());
    PlacePawn::new(PawnId::new(0), Position::new(4, 4)).apply(&mut game);
    let mut mv = MovePawn::new(PawnId::new(0), Position::new(4, 5));

    c.bench_function("move_apply_rollback", |b| {
        b.iter(|| {
            mv.apply(black_box(&mut game));
            mv.rollback(black_box(&mut game));
        });
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut game = setup(Rules::default());
    for i in 0..8u32 {
        PlacePawn::new(PawnId::new(i), Position::new(i as i8, 0)).apply(&mut game);
    }
    let bytes = game.snapshot().unwrap();

    c.bench_function("snapshot_serialize", |b| {
        b.iter(|| black_box(game.snapshot()));
    });
    c.bench_function("snapshot_restore", |b| {
        b.iter(|| black_box(Game::from_snapshot(black_box(&bytes))));
    });
}

fn bench_random_deployment(c: &mut Criterion) {
    c.bench_function("full_deployment_8_turns", |b| {
        b.iter(|| {
            let mut rng = GameRng::new(black_box(42));
            let mut game = setup(Rules::default());
            for _ in 0..8 {
                let seat = game.current_player;
                let staged: Vec<PawnId> = game
                    .pawns
                    .iter()
                    .filter(|p| p.owner() == seat && p.is_staging())
                    .map(Pawn::id)
                    .collect();
                let open: Vec<Position> = game
                    .board
                    .tiles()
                    .filter(|t| t.is_empty())
                    .map(Tile::position)
                    .collect();
                PlacePawn::new(*rng.choose(&staged).unwrap(), *rng.choose(&open).unwrap())
                    .apply(&mut game);
                game.advance_turn();
            }
            black_box(game)
        });
    });
}

criterion_group!(
    benches,
    bench_deployment_turn,
    bench_movement_turn,
    bench_candidacy_scan,
    bench_move_cycle,
    bench_snapshot,
    bench_random_deployment
);
criterion_main!(benches);
