use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use faint_memory::scoring::{scaled_points, Evaluation};
use faint_memory::{CounterField, CounterSet, RuleTable, Tier};

fn gen_counter_sets(n: usize) -> Vec<CounterSet> {
    // Simple deterministic xorshift64, no rand dependency.
    let mut x: u64 = 0x1234_5678_9ABC_DEF0;
    let mut out = Vec::with_capacity(n);
    for i in 0..n {
        let mut set = CounterSet::new(format!("Combatant {}", i + 1));
        for field in CounterField::ALL {
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            set.set(field, (x % 8) as u32);
        }
        set.tier = Tier::new((x % 15) as i64 + 1).unwrap_or_default();
        out.push(set);
    }
    out
}

fn bench_evaluate(c: &mut Criterion) {
    let rules = RuleTable::default();
    let mut g = c.benchmark_group("faint_memory_scoring");
    for &n in &[6usize, 1024usize] {
        let sets = gen_counter_sets(n);
        g.bench_with_input(BenchmarkId::new("evaluate_batch", n), &sets, |b, s| {
            b.iter(|| {
                for set in s.iter() {
                    black_box(Evaluation::of(black_box(set), &rules));
                }
            })
        });
    }
    g.finish();
}

fn bench_scaled_points(c: &mut Criterion) {
    c.bench_function("scaled_points_1000", |b| {
        b.iter(|| black_box(scaled_points(black_box(1000), 10, 20)))
    });
}

criterion_group!(benches, bench_evaluate, bench_scaled_points);
criterion_main!(benches);
