use grid_dijkstra::{GridLayout, SearchEngine};

// In this example a path is found on a grid with shape
// S...#....
// .##.#.##.
// .#.....#.
// .#.###.#.
// ...#...#F
// where
// - # marks a wall
// - S marks the start
// - F marks the finish
//
// Nodes have a 4-neighborhood

fn main() {
    let mut layout: GridLayout = "
        S...#....
        .##.#.##.
        .#.....#.
        .#.###.#.
        ...#...#F
    "
    .parse()
    .unwrap();
    let engine = SearchEngine::new();
    let trace = engine.run(&mut layout.grid, layout.start, layout.finish);
    let path = SearchEngine::reconstruct_path(&layout.grid, layout.finish);
    println!("Visited {} nodes, path has {} nodes:", trace.len(), path.len());
    println!("{}", layout.render(&trace, &path));
}
