use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion, Throughput};

use mazerunner::{
    optimize, Action, DecisionEngine, InMemoryRunStore, Measurement, NavigationConfig,
    RecordingActuator, ScriptedSensor, Session, SessionKind,
};

fn make_script(ticks: usize) -> Vec<Measurement> {
    // Cycle through open floor, a near wall and a close wall, then finish on tape.
    let mut script: Vec<Measurement> = (0..ticks)
        .map(|i| match i % 3 {
            0 => Measurement::new(600.0, 4.0, 4.0),
            1 => Measurement::new(120.0, 4.0, 4.0),
            _ => Measurement::new(20.0, 4.0, 4.0),
        })
        .collect();
    script.push(Measurement::new(600.0, 0.5, 4.0));
    script
}

fn bench_decide(c: &mut Criterion) {
    let engine = DecisionEngine::default();
    let samples = make_script(1024);

    let mut group = c.benchmark_group("tick/decide");
    group.throughput(Throughput::Elements(samples.len() as u64));
    group.bench_function("mixed", |b| {
        b.iter(|| {
            for m in &samples {
                black_box(engine.decide(black_box(m)));
            }
        });
    });
    group.finish();
}

fn bench_optimize(c: &mut Criterion) {
    let log: Vec<Action> = (0..4096)
        .map(|i| Action::ALL[i % Action::ALL.len()])
        .collect();

    let mut group = c.benchmark_group("tick/optimize");
    group.throughput(Throughput::Elements(log.len() as u64));
    group.bench_function("4096_actions", |b| b.iter(|| black_box(optimize(black_box(&log)))));
    group.finish();
}

fn bench_solve_session(c: &mut Criterion) {
    c.bench_function("tick/solve_session_1024", |b| {
        b.iter_batched(
            || {
                Session::new(
                    ScriptedSensor::new(make_script(1024)),
                    RecordingActuator::new(),
                    InMemoryRunStore::new(),
                    NavigationConfig::default(),
                )
                .unwrap()
            },
            |mut session| {
                session.begin(SessionKind::Solve).unwrap();
                while !session.tick().unwrap().state.is_finished() {}
                session
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_decide, bench_optimize, bench_solve_session);
criterion_main!(benches);
