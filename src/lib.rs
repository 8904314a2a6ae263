//! # grid_dijkstra
//!
//! The search core of a grid pathfinding visualizer. A rectangular grid of
//! [Node]s is searched from a start node to a finish node using
//! [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)
//! on unit-weight, 4-connected edges. A run yields the order in which nodes were
//! finalized (the trace, used for animation) and leaves back-pointers on the grid
//! from which the shortest path is reconstructed.
//!
//! ```
//! use grid_dijkstra::{GridLayout, SearchEngine};
//!
//! let mut layout: GridLayout = "S.#\n..F".parse().unwrap();
//! let engine = SearchEngine::new();
//! let trace = engine.run(&mut layout.grid, layout.start, layout.finish);
//! assert_eq!(trace.last(), Some(&layout.finish));
//! let path = SearchEngine::reconstruct_path(&layout.grid, layout.finish);
//! assert_eq!(path.len(), 4);
//! ```
//!
//! Connected components of open cells are tracked with a [UnionFind](petgraph::unionfind::UnionFind)
//! so callers can check reachability up front without flood-filling.
pub mod layout;
pub mod node;
pub mod node_grid;
pub mod search;

pub use layout::{GridLayout, LayoutError};
pub use node::{Node, NodeId, INFINITY};
pub use node_grid::{GridModel, NodeGrid};
pub use search::{Relaxation, SearchEngine, TieBreak};

/// Maximum number of neighbours of a node on a 4-connected grid.
pub const N_NEIGHBOURS: usize = 4;
/// Cost of a single move between adjacent nodes.
pub const EDGE_COST: u32 = 1;
