use criterion::{criterion_group, criterion_main, Criterion};
use grid_dijkstra::{GridModel, NodeGrid, NodeId, Relaxation, SearchEngine, TieBreak};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

fn random_grid(n: usize, rng: &mut StdRng) -> (NodeGrid, NodeId, NodeId) {
    let mut grid = NodeGrid::new(n, n);
    for id in grid.all_nodes().collect::<Vec<_>>() {
        grid.set_wall(id, rng.gen_bool(0.25));
    }
    let start = grid.node_id(0, 0).unwrap();
    let finish = grid.node_id(n - 1, n - 1).unwrap();
    grid.set_wall(start, false);
    grid.set_wall(finish, false);
    (grid, start, finish)
}

fn search_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    for n in [20, 50, 100] {
        let grids = (0..20)
            .map(|_| random_grid(n, &mut rng))
            .collect::<Vec<_>>();
        for (tie_break, relaxation) in [
            (TieBreak::Discovery, Relaxation::StrictImprovement),
            (TieBreak::Discovery, Relaxation::Unconditional),
            (TieBreak::RowMajor, Relaxation::StrictImprovement),
        ] {
            let engine = SearchEngine {
                tie_break,
                relaxation,
            };
            c.bench_function(
                format!("{n}x{n}, {tie_break:?}, {relaxation:?}").as_str(),
                |b| {
                    b.iter(|| {
                        for (grid, start, finish) in &grids {
                            let mut grid = grid.clone();
                            let trace = engine.run(&mut grid, *start, *finish);
                            black_box(SearchEngine::reconstruct_path(&grid, *finish));
                            black_box(trace);
                        }
                    })
                },
            );
        }
    }
}

criterion_group!(benches, search_bench);
criterion_main!(benches);
