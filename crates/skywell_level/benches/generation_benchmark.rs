//! Benchmark for level generation throughput.
//!
//! A chunk must cost well under a frame: generation is level-triggered
//! and at most one chunk runs per tick, so the budget is a fraction of
//! 16ms.
//!
//! Run with: cargo bench --package skywell_level --bench generation_benchmark

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;

use skywell_level::{
    ChunkGenerator, DestructionManager, LevelConfig, LevelEngine, NullDecorationHook,
    PlatformStore,
};

fn benchmark_single_chunk(c: &mut Criterion) {
    let config = LevelConfig::default();

    c.bench_function("single_chunk_generation", |b| {
        let mut generator = ChunkGenerator::with_rng(&config, StdRng::seed_from_u64(42));
        let mut store = PlatformStore::new(&config);
        let mut hook = NullDecorationHook;
        generator.generate_starting_platform(&mut store, &mut hook, 0);

        let manager = DestructionManager::new(&config);
        let mut tick = 0u64;
        b.iter(|| {
            tick += 1;
            let chunk = generator.generate_chunk(&mut store, &mut hook, tick);
            // Trail the frontier so the store stays at a steady size
            let frontier = generator.cursor().next_chunk_start_y;
            manager.sweep(frontier + 1200.0, &mut store, &mut hook);
            black_box(chunk)
        });
    });
}

fn benchmark_engine_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("engine_tick");
    group.throughput(Throughput::Elements(1));

    group.bench_function("steady_climb", |b| {
        let mut engine = LevelEngine::new(LevelConfig::default())
            .unwrap()
            .with_rng_seed(42);
        let mut tick = 0u64;
        b.iter(|| {
            tick += 1;
            let viewport_y = 668.0 - 15.0 * tick as f32;
            let hazard_y = viewport_y + 900.0;
            engine.update(black_box(viewport_y), black_box(hazard_y));
        });
    });

    group.finish();
}

fn benchmark_live_listing(c: &mut Criterion) {
    let mut engine = LevelEngine::new(LevelConfig::default())
        .unwrap()
        .with_rng_seed(42);
    // A settled mid-run store
    for tick in 0..200u32 {
        let viewport_y = 668.0 - 15.0 * tick as f32;
        engine.update(viewport_y, viewport_y + 900.0);
    }

    c.bench_function("list_live_platforms", |b| {
        b.iter(|| black_box(engine.list_live_platforms()));
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = benchmark_single_chunk,
              benchmark_engine_tick,
              benchmark_live_listing
}

criterion_main!(benches);
