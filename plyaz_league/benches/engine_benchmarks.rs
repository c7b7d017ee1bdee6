use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use plyaz_league::{
    bracket::{Bracket, Entrant},
    entities::TeamId,
    fixture::{MatchStatus, validate_transition},
    schedule::round_robin,
    standings::{MatchResult, PointScheme, aggregate, rank},
};
use std::hint::black_box;

fn seeded(n: u32) -> Vec<Entrant> {
    (1..=n).map(|s| Entrant::new(&format!("seed-{s}"), s)).collect()
}

/// A full season where the home side always wins 2-1
fn season(n: usize) -> (Vec<TeamId>, Vec<MatchResult>) {
    let teams: Vec<TeamId> = (0..n).map(|i| TeamId::new(&format!("club-{i}"))).collect();
    let results = round_robin(&teams)
        .into_iter()
        .map(|f| MatchResult {
            home: f.home,
            away: f.away,
            home_goals: 2,
            away_goals: 1,
        })
        .collect();
    (teams, results)
}

/// Benchmark every transition pair
fn bench_transition_table(c: &mut Criterion) {
    c.bench_function("validate_all_transitions", |b| {
        b.iter(|| {
            for from in MatchStatus::ALL {
                for to in MatchStatus::ALL {
                    let _ = black_box(validate_transition(from, to));
                }
            }
        });
    });
}

/// Benchmark bracket generation at different field sizes
fn bench_bracket_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("bracket_generate");

    for n in [8u32, 37, 128, 256].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_entrants", n)),
            n,
            |b, &n| {
                let entrants = seeded(n);
                b.iter(|| Bracket::generate(black_box(&entrants)));
            },
        );
    }

    group.finish();
}

/// Benchmark resolving a whole bracket from round one to the final
fn bench_bracket_play_out(c: &mut Criterion) {
    let mut group = c.benchmark_group("bracket_play_out");

    for n in [16u32, 100].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_entrants", n)),
            n,
            |b, &n| {
                b.iter_batched(
                    || Bracket::generate(&seeded(n)).unwrap(),
                    |mut bracket| {
                        while let Some(&at) = bracket.playable_matches().first() {
                            let winner = bracket.get(at).and_then(|m| m.home.entrant()).cloned();
                            if let Some(winner) = winner {
                                let _ = bracket.record_winner(at, &winner);
                            }
                        }
                        bracket
                    },
                    criterion::BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

/// Benchmark aggregating and ranking a season
fn bench_standings(c: &mut Criterion) {
    let mut group = c.benchmark_group("standings");

    for n in [20usize, 64].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_teams", n)),
            n,
            |b, &n| {
                let (teams, results) = season(n);
                b.iter(|| rank(&aggregate(&results, &teams), &PointScheme::default()));
            },
        );
    }

    group.finish();
}

criterion_group!(fixture_operations, bench_transition_table);

criterion_group!(
    competition_operations,
    bench_bracket_generate,
    bench_bracket_play_out,
    bench_standings,
);

criterion_main!(fixture_operations, competition_operations);
