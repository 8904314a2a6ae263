//! Uniform-cost search over a [GridModel]. Every node is finalized in order of increasing
//! distance from the start; the order is recorded as the trace and each reached node keeps a
//! back-pointer to the node it was reached from.
use crate::node::NodeId;
use crate::node_grid::GridModel;
use crate::EDGE_COST;
use itertools::Itertools;
use log::{debug, warn};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::iter;

/// How nodes at equal distance are ordered when selecting the next node to finalize.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TieBreak {
    /// Nodes first reached by an earlier expansion go first; nodes first reached by the same
    /// expansion go in row-major order. This is the order a stable re-sort of the row-major
    /// unvisited list by distance produces.
    #[default]
    Discovery,
    /// The node with the lower row-major index goes first.
    RowMajor,
}

/// When a neighbour's distance and back-pointer are overwritten during expansion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Relaxation {
    /// Only when the new distance is strictly smaller.
    #[default]
    StrictImprovement,
    /// On every expansion of an adjacent node. Only correct with unit edge costs, where the
    /// expanded node is always a global minimum.
    Unconditional,
}

struct SmallestDistanceHolder {
    distance: u32,
    order: (usize, usize),
    id: NodeId,
}

impl Eq for SmallestDistanceHolder {}

impl PartialEq for SmallestDistanceHolder {
    fn eq(&self, other: &Self) -> bool {
        self.distance == other.distance && self.order == other.order
    }
}

impl PartialOrd for SmallestDistanceHolder {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestDistanceHolder {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed so the max-heap pops the smallest distance, then the smallest order
        match other.distance.cmp(&self.distance) {
            Ordering::Equal => other.order.cmp(&self.order),
            s => s,
        }
    }
}

/// Runs Dijkstra searches and reconstructs paths. Holds configuration only, the search
/// state lives on the grid's nodes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchEngine {
    pub tie_break: TieBreak,
    pub relaxation: Relaxation,
}

impl SearchEngine {
    pub fn new() -> SearchEngine {
        SearchEngine::default()
    }

    /// Searches from `start` until `finish` is finalized or no reachable node is left, and
    /// returns every finalized node in order. The finish node is the last element if and only
    /// if it was reached.
    ///
    /// The grid is expected to be pristine (see [NodeGrid::reset](crate::NodeGrid::reset)).
    /// Distances, visited flags and back-pointers are written to the grid's nodes. Walls are
    /// never visited and never receive a distance or back-pointer.
    pub fn run<G: GridModel>(&self, grid: &mut G, start: NodeId, finish: NodeId) -> Vec<NodeId> {
        if grid.all_nodes().any(|n| grid.node(n).is_visited) {
            warn!("Searching a grid with visited nodes from an earlier run, reset it first");
        }
        let mut trace = Vec::new();
        grid.node_mut(start).distance = 0;
        if grid.node(start).is_wall {
            debug!("Start {} is a wall, nothing to search", start);
            return trace;
        }

        let mut to_see = BinaryHeap::new();
        let mut expanded = 0;
        to_see.push(SmallestDistanceHolder {
            distance: 0,
            order: (0, start.index()),
            id: start,
        });
        while let Some(SmallestDistanceHolder { distance, id, .. }) = to_see.pop() {
            let node = grid.node(id);
            // A node may sit in the heap several times; only its current entry counts.
            if node.is_visited || node.distance != distance {
                continue;
            }
            grid.node_mut(id).is_visited = true;
            trace.push(id);
            if id == finish {
                debug!(
                    "Reached finish {} at distance {} after visiting {} nodes",
                    finish,
                    distance,
                    trace.len()
                );
                return trace;
            }

            expanded += 1;
            let candidate = distance + EDGE_COST;
            for n in grid.neighbours_of(id) {
                let neighbour = grid.node_mut(n);
                if neighbour.is_wall {
                    continue;
                }
                if self.relaxation == Relaxation::StrictImprovement
                    && candidate >= neighbour.distance
                {
                    continue;
                }
                let changed = candidate != neighbour.distance;
                neighbour.distance = candidate;
                neighbour.previous = Some(id);
                if changed {
                    to_see.push(SmallestDistanceHolder {
                        distance: candidate,
                        order: match self.tie_break {
                            TieBreak::Discovery => (expanded, n.index()),
                            TieBreak::RowMajor => (0, n.index()),
                        },
                        id: n,
                    });
                }
            }
        }
        debug!(
            "Finish {} is unreachable from {}, visited {} nodes",
            finish,
            start,
            trace.len()
        );
        trace
    }

    /// Follows back-pointers from `finish` and returns the chain in start-to-finish order.
    /// If `finish` was never reached this is a chain that does not begin at the start,
    /// typically just `[finish]`.
    pub fn reconstruct_path<G: GridModel>(grid: &G, finish: NodeId) -> Vec<NodeId> {
        let mut path = iter::successors(Some(finish), |&id| grid.node(id).previous)
            .take(grid.len())
            .collect::<Vec<NodeId>>();
        path.reverse();
        path
    }

    /// Runs a search and returns the shortest path from `start` to `finish`, or [None] if
    /// `finish` cannot be reached.
    pub fn shortest_path<G: GridModel>(
        &self,
        grid: &mut G,
        start: NodeId,
        finish: NodeId,
    ) -> Option<Vec<NodeId>> {
        self.run(grid, start, finish);
        if !grid.node(finish).is_visited {
            return None;
        }
        let path = Self::reconstruct_path(grid, finish);
        if path.first() == Some(&start) {
            Some(path)
        } else {
            warn!("Path to {} does not lead back to {}", finish, start);
            None
        }
    }

    /// Checks that `path` runs from `start` to `finish` through adjacent open cells.
    pub fn is_valid_path<G: GridModel>(
        grid: &G,
        path: &[NodeId],
        start: NodeId,
        finish: NodeId,
    ) -> bool {
        path.first() == Some(&start)
            && path.last() == Some(&finish)
            && path.iter().all(|&n| !grid.node(n).is_wall)
            && path
                .iter()
                .tuple_windows()
                .all(|(&a, &b)| grid.node(a).is_adjacent(grid.node(b)))
    }
}
