use env_logger::Env;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};

use nanorand::{Rng, WyRand};
use terrain_pathfinding::{prelude::*, Point};

fn random_grid(width: usize, height: usize) -> Grid {
    let mut rng = WyRand::new_seed(4);
    Grid::from_fn((width, height), |_| {
        // mostly cheap terrain, with some water and forest in between
        match rng.generate_range(0..10u8) {
            0 => Terrain::Water,
            1 | 2 => Terrain::Forest,
            3 => Terrain::Sand,
            _ => Terrain::Grass,
        }
    })
}

fn random_queries(width: usize, height: usize, count: usize) -> Vec<(Point, Point)> {
    let mut rng = WyRand::new_seed(8);
    (0..count)
        .map(|_| {
            (
                (rng.generate_range(0..width), rng.generate_range(0..height)),
                (rng.generate_range(0..width), rng.generate_range(0..height)),
            )
        })
        .collect()
}

#[allow(unused)]
// Setup logging output
fn init() {
    let env = Env::default()
        .filter_or("MY_LOG_LEVEL", "info") // Change this to trace to log every single search.
        .write_style_or("MY_LOG_STYLE", "always");

    let _ = env_logger::Builder::from_env(env).is_test(true).try_init();
}

fn bench_repeated_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("Repeated queries");
    group.sample_size(10);

    init();

    for size in [64, 256] {
        let grid = random_grid(size, size);
        let queries = random_queries(size, size, 64);

        let id = format!("Reused Pathfinder, Map Size: ({}, {})", size, size);
        let mut pathfinder = Pathfinder::for_grid(&grid);
        group.bench_function(&id, |b| {
            b.iter(|| {
                for &(start, goal) in queries.iter() {
                    pathfinder.find_path(&grid, start, goal);
                }
            })
        });

        let id = format!("Fresh Pathfinder per query, Map Size: ({}, {})", size, size);
        group.bench_function(&id, |b| {
            b.iter(|| {
                for &(start, goal) in queries.iter() {
                    Pathfinder::for_grid(&grid).find_path(&grid, start, goal);
                }
            })
        });

        let id = format!("Octile estimate, Map Size: ({}, {})", size, size);
        let octile = grid.clone().with_heuristic(Heuristic::Octile);
        group.bench_function(&id, |b| {
            b.iter(|| {
                for &(start, goal) in queries.iter() {
                    pathfinder.find_path(&octile, start, goal);
                }
            })
        });

        let id = format!("Batch of {} queries, Map Size: ({}, {})", queries.len(), size, size);
        group.bench_function(&id, |b| {
            b.iter_batched(
                || queries.clone(),
                |queries| find_paths(&grid, &queries, PathfinderConfig::default()),
                BatchSize::SmallInput,
            )
        });
    }
}

criterion_group!(benches, bench_repeated_queries);
criterion_main!(benches);
