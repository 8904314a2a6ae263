/// Fuzzes the search by checking for many random grids that the finish is visited exactly when it
/// is on the same connected component as the start, and that the reconstructed path is a valid
/// shortest path. All search settings (tie-breaking, relaxation) are tested.
use grid_dijkstra::{
    GridLayout, GridModel, NodeGrid, NodeId, Relaxation, SearchEngine, TieBreak, INFINITY,
};
use itertools::{iproduct, Itertools};
use rand::prelude::*;

fn random_layout(rows: usize, cols: usize, rng: &mut StdRng) -> GridLayout {
    let mut grid = NodeGrid::new(rows, cols);
    for id in grid.all_nodes().collect::<Vec<_>>() {
        grid.set_wall(id, rng.gen_bool(0.4));
    }
    let start = grid.node_id(0, 0).unwrap();
    let finish = grid.node_id(rows - 1, cols - 1).unwrap();
    grid.set_wall(start, false);
    grid.set_wall(finish, false);
    grid.update();
    GridLayout {
        grid,
        start,
        finish,
    }
}

fn engines() -> Vec<SearchEngine> {
    iproduct!(
        [TieBreak::Discovery, TieBreak::RowMajor],
        [Relaxation::StrictImprovement, Relaxation::Unconditional]
    )
    .map(|(tie_break, relaxation)| SearchEngine {
        tie_break,
        relaxation,
    })
    .collect()
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    for engine in engines() {
        for _ in 0..N_GRIDS {
            let mut layout = random_layout(N, N, &mut rng);
            let reachable = layout.grid.reachable(layout.start, layout.finish);
            let trace = engine.run(&mut layout.grid, layout.start, layout.finish);
            let path = SearchEngine::reconstruct_path(&layout.grid, layout.finish);
            // Show the grid if the search disagrees with the components
            if layout.grid.node(layout.finish).is_visited() != reachable {
                println!("{engine:?}\n{}", layout.render(&trace, &path));
            }
            assert_eq!(layout.grid.node(layout.finish).is_visited(), reachable);
            assert_eq!(trace.last() == Some(&layout.finish), reachable);
            assert!(trace.iter().all(|&n| !layout.grid.node(n).is_wall()));
            assert!(trace.iter().all_unique());
            if reachable {
                assert!(SearchEngine::is_valid_path(
                    &layout.grid,
                    &path,
                    layout.start,
                    layout.finish
                ));
                assert_eq!(
                    path.len() as u32,
                    layout.grid.node(layout.finish).distance() + 1
                );
            } else {
                assert_eq!(path, vec![layout.finish]);
            }
        }
    }
}

/// Both relaxation strategies agree on the finish distance, and it is never shorter than the
/// Manhattan distance.
#[test]
fn fuzz_distance() {
    const N: usize = 6;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(1);
    let strict = SearchEngine::new();
    let loose = SearchEngine {
        relaxation: Relaxation::Unconditional,
        ..SearchEngine::new()
    };
    for _ in 0..N_GRIDS {
        let layout = random_layout(N, N, &mut rng);
        let mut strict_grid = layout.grid.clone();
        let mut loose_grid = layout.grid.clone();
        let strict_path = strict.shortest_path(&mut strict_grid, layout.start, layout.finish);
        let loose_path = loose.shortest_path(&mut loose_grid, layout.start, layout.finish);
        assert_eq!(strict_path.is_some(), loose_path.is_some());
        if let (Some(a), Some(b)) = (strict_path, loose_path) {
            assert_eq!(a.len(), b.len());
            let finish = strict_grid.node(layout.finish);
            let manhattan = strict_grid.node(layout.start).manhattan_distance(finish);
            assert!(finish.distance() >= manhattan);
        }
    }
}

/// Every reached open cell gets the breadth-first distance when the finish is unreachable and
/// the search exhausts the component.
#[test]
fn fuzz_exhaustive_distances() {
    const N: usize = 7;
    let mut rng = StdRng::seed_from_u64(2);
    for _ in 0..500 {
        let mut layout = random_layout(N, N, &mut rng);
        // Wall off the finish so the whole start component is explored
        let finish = layout.finish;
        for n in layout.grid.neighbours_of(finish) {
            layout.grid.set_wall(n, true);
        }
        layout.grid.update();
        let start: NodeId = layout.start;
        let trace = SearchEngine::new().run(&mut layout.grid, start, finish);
        let component = layout
            .grid
            .all_nodes()
            .filter(|&n| layout.grid.reachable(start, n))
            .count();
        assert_eq!(trace.len(), component);
        for &n in &trace {
            let node = layout.grid.node(n);
            if let Some(prev) = node.previous() {
                assert_eq!(layout.grid.node(prev).distance() + 1, node.distance());
            } else {
                assert_eq!(n, start);
            }
        }
    }
}

/// Searches by stable-sorting the whole row-major unvisited list by distance before every
/// step and overwriting the distance of every unvisited neighbour, walls included.
fn resort_search(grid: &NodeGrid, start: NodeId, finish: NodeId) -> (Vec<NodeId>, Vec<NodeId>) {
    let (rows, cols) = (grid.rows(), grid.cols());
    let mut distance = vec![INFINITY; grid.len()];
    let mut visited = vec![false; grid.len()];
    let mut previous: Vec<Option<usize>> = vec![None; grid.len()];
    distance[start.index()] = 0;
    let mut unvisited = (0..grid.len()).collect::<Vec<usize>>();
    let mut trace = Vec::new();
    while !unvisited.is_empty() {
        unvisited.sort_by_key(|&i| distance[i]);
        let closest = unvisited.remove(0);
        if grid.nodes()[closest].is_wall() {
            continue;
        }
        if distance[closest] == INFINITY {
            break;
        }
        visited[closest] = true;
        trace.push(NodeId(closest));
        if closest == finish.index() {
            break;
        }
        let (row, col) = (closest / cols, closest % cols);
        let mut neighbours = Vec::new();
        if row > 0 {
            neighbours.push(closest - cols);
        }
        if row + 1 < rows {
            neighbours.push(closest + cols);
        }
        if col > 0 {
            neighbours.push(closest - 1);
        }
        if col + 1 < cols {
            neighbours.push(closest + 1);
        }
        for n in neighbours.into_iter().filter(|&n| !visited[n]) {
            distance[n] = distance[closest] + 1;
            previous[n] = Some(closest);
        }
    }
    let mut path = std::iter::successors(Some(finish.index()), |&i| previous[i])
        .map(NodeId)
        .collect::<Vec<NodeId>>();
    path.reverse();
    (trace, path)
}

/// Discovery tie-breaking with unconditional relaxation visits nodes in exactly the order of a
/// full stable re-sort per step, and leaves the same back-pointers.
#[test]
fn fuzz_matches_resort_order() {
    const N: usize = 8;
    const N_GRIDS: usize = 500;
    let mut rng = StdRng::seed_from_u64(7);
    let engine = SearchEngine {
        tie_break: TieBreak::Discovery,
        relaxation: Relaxation::Unconditional,
    };
    for _ in 0..N_GRIDS {
        let mut layout = random_layout(N, N, &mut rng);
        let (expected_trace, expected_path) =
            resort_search(&layout.grid, layout.start, layout.finish);
        let trace = engine.run(&mut layout.grid, layout.start, layout.finish);
        let path = SearchEngine::reconstruct_path(&layout.grid, layout.finish);
        if trace != expected_trace {
            println!("{}", layout.render(&trace, &path));
        }
        assert_eq!(trace, expected_trace);
        assert_eq!(path, expected_path);
    }
}

#[test]
fn centre_start_matches_resort_order() {
    let mut grid = NodeGrid::new(3, 3);
    let start = grid.node_id(1, 1).unwrap();
    let finish = grid.node_id(0, 0).unwrap();
    let (expected, _) = resort_search(&grid, start, finish);
    let trace = SearchEngine::new().run(&mut grid, start, finish);
    let coords = trace
        .iter()
        .map(|&n| (grid.node(n).row(), grid.node(n).col()))
        .collect::<Vec<_>>();
    assert_eq!(coords, vec![(1, 1), (0, 1), (1, 0), (1, 2), (2, 1), (0, 0)]);
    assert_eq!(trace, expected);
}
