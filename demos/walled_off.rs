use grid_dijkstra::{GridLayout, GridModel, SearchEngine};

// The finish is enclosed, so the search exhausts the start's component
// S....
// ..###
// ..#F#
// ..###

fn main() {
    let mut layout: GridLayout = "
        S....
        ..###
        ..#F#
        ..###
    "
    .parse()
    .unwrap();
    println!(
        "Reachable according to components: {}",
        layout.grid.reachable(layout.start, layout.finish)
    );
    let trace = SearchEngine::new().run(&mut layout.grid, layout.start, layout.finish);
    if layout.grid.node(layout.finish).is_visited() {
        println!("Found a path");
    } else {
        println!("No path, {} nodes visited:", trace.len());
        println!("{}", layout.render(&trace, &[]));
    }
}
