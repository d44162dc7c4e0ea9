//! Resolution throughput: one play, and a full quarter of plays.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rust_gridiron::{
    CoverageShell, DefenseFront, DefensePlayFlavor, DefensivePlayCall, GameRng, GameState,
    OffensePlayType, OffensivePlayCall, PersonnelGroup, PlayCall, PlayEngine, PlayResolver, Side,
    TeamInfo,
};

fn kickoff() -> GameState {
    GameState::initial(TeamInfo::new("Home", "HOM"), TeamInfo::new("Away", "AWY"), true)
}

fn calls() -> Vec<PlayCall> {
    OffensePlayType::ALL
        .into_iter()
        .zip(DefensePlayFlavor::ALL.into_iter().cycle())
        .map(|(play_type, flavor)| {
            PlayCall::new(
                OffensivePlayCall::new(Side::Home, PersonnelGroup::P11, play_type),
                DefensivePlayCall::new(Side::Away, DefenseFront::Nickel, flavor, CoverageShell::Cover3),
            )
        })
        .collect()
}

fn bench_single_play(c: &mut Criterion) {
    let engine = PlayEngine::default();
    let state = kickoff();
    let call = &calls()[0];
    let mut rng = GameRng::new(42);

    c.bench_function("resolve_single_play", |b| {
        b.iter(|| engine.resolve(black_box(&state), black_box(call), &mut rng))
    });
}

fn bench_series(c: &mut Criterion) {
    let engine = PlayEngine::default();
    let state = kickoff();
    let calls = calls();

    c.bench_function("resolve_series_40", |b| {
        b.iter(|| engine.resolve_series(black_box(&state), black_box(&calls), &mut GameRng::new(7)))
    });
}

criterion_group!(benches, bench_single_play, bench_series);
criterion_main!(benches);
