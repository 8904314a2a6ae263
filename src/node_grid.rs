use crate::node::{Node, NodeId};
use crate::N_NEIGHBOURS;
use core::fmt;
use grid_util::point::Point;
use itertools::iproduct;
use log::info;
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;
use std::iter::Map;
use std::ops::Range;

/// The view of a grid that [SearchEngine](crate::SearchEngine) works on.
pub trait GridModel {
    /// Container type for neighbours; at most [N_NEIGHBOURS] entries.
    type Neighbours: IntoIterator<Item = NodeId>;
    /// Iterator over every node in a stable order.
    type Nodes: Iterator<Item = NodeId>;

    fn node(&self, id: NodeId) -> &Node;
    fn node_mut(&mut self, id: NodeId) -> &mut Node;
    fn all_nodes(&self) -> Self::Nodes;
    /// The in-bounds, axis-aligned neighbours of a node that have not been visited yet.
    fn neighbours_of(&self, id: NodeId) -> Self::Neighbours;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// [NodeGrid] owns the nodes of a rectangular grid in row-major order and maintains
/// connected components of the open cells using a [UnionFind] structure.
#[derive(Clone, Debug)]
pub struct NodeGrid {
    rows: usize,
    cols: usize,
    nodes: Vec<Node>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for NodeGrid {
    fn default() -> NodeGrid {
        NodeGrid::new(0, 0)
    }
}

impl NodeGrid {
    /// Creates a grid of open, unvisited nodes.
    pub fn new(rows: usize, cols: usize) -> NodeGrid {
        let nodes = iproduct!(0..rows, 0..cols)
            .map(|(row, col)| Node::new(row, col))
            .collect::<Vec<Node>>();
        let mut grid = NodeGrid {
            rows,
            cols,
            nodes,
            components: UnionFind::new(0),
            components_dirty: false,
        };
        grid.generate_components();
        grid
    }
    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    pub fn node_id(&self, row: usize, col: usize) -> Option<NodeId> {
        (row < self.rows && col < self.cols).then(|| NodeId(row * self.cols + col))
    }
    /// Looks up a node by [Point], where `x` is the column and `y` the row.
    pub fn node_at_point(&self, point: Point) -> Option<NodeId> {
        if point.x < 0 || point.y < 0 {
            return None;
        }
        self.node_id(point.y as usize, point.x as usize)
    }
    pub fn get(&self, row: usize, col: usize) -> Option<&Node> {
        self.node_id(row, col).map(|id| &self.nodes[id.index()])
    }
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Places or removes a wall. Joins newly connected components and flags the components
    /// as dirty if components are (potentially) broken apart into multiple.
    pub fn set_wall(&mut self, id: NodeId, wall: bool) {
        let was_wall = self.nodes[id.index()].is_wall;
        self.nodes[id.index()].is_wall = wall;
        if wall {
            if !was_wall {
                self.components_dirty = true;
            }
        } else {
            for n in self.adjacent(id) {
                if !self.nodes[n.index()].is_wall {
                    self.components.union(id.index(), n.index());
                }
            }
        }
    }
    /// Flips the wall flag of a node and returns the new value.
    pub fn toggle_wall(&mut self, id: NodeId) -> bool {
        let wall = !self.nodes[id.index()].is_wall;
        self.set_wall(id, wall);
        wall
    }
    pub fn clear_walls(&mut self) {
        for node in self.nodes.iter_mut() {
            node.is_wall = false;
        }
        self.generate_components();
    }
    pub fn wall_count(&self) -> usize {
        self.nodes.iter().filter(|n| n.is_wall).count()
    }

    /// Restores every node to its pre-search state. Walls are kept.
    pub fn reset(&mut self) {
        for node in self.nodes.iter_mut() {
            node.reset();
        }
    }
    /// True if no node carries state from a previous search.
    pub fn is_pristine(&self) -> bool {
        self.nodes
            .iter()
            .all(|n| !n.is_visited && !n.is_reached() && n.previous.is_none())
    }

    /// All in-bounds axis-aligned neighbours, ordered up, down, left, right.
    fn adjacent(&self, id: NodeId) -> SmallVec<[NodeId; N_NEIGHBOURS]> {
        let (row, col) = (id.index() / self.cols, id.index() % self.cols);
        let mut neighbours = SmallVec::new();
        if row > 0 {
            neighbours.push(NodeId(id.index() - self.cols));
        }
        if row + 1 < self.rows {
            neighbours.push(NodeId(id.index() + self.cols));
        }
        if col > 0 {
            neighbours.push(NodeId(id.index() - 1));
        }
        if col + 1 < self.cols {
            neighbours.push(NodeId(id.index() + 1));
        }
        neighbours
    }

    /// Retrieves the component id a given node belongs to.
    pub fn get_component(&self, id: NodeId) -> usize {
        self.components.find(id.index())
    }
    /// Checks if start and goal are open cells on the same component. Components must be
    /// current, see [update](Self::update).
    pub fn reachable(&self, start: NodeId, goal: NodeId) -> bool {
        !self.unreachable(start, goal)
    }
    /// Checks if start and goal are not on the same component or either is a wall.
    pub fn unreachable(&self, start: NodeId, goal: NodeId) -> bool {
        if self.nodes[start.index()].is_wall || self.nodes[goal.index()].is_wall {
            return true;
        }
        !self.components.equiv(start.index(), goal.index())
    }
    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }
    /// Generates a new [UnionFind] structure and links up open grid neighbours to the same components.
    pub fn generate_components(&mut self) {
        self.components = UnionFind::new(self.nodes.len());
        self.components_dirty = false;
        for (row, col) in iproduct!(0..self.rows, 0..self.cols) {
            let ix = row * self.cols + col;
            if self.nodes[ix].is_wall {
                continue;
            }
            // Linking down and right covers every edge once
            if row + 1 < self.rows && !self.nodes[ix + self.cols].is_wall {
                self.components.union(ix, ix + self.cols);
            }
            if col + 1 < self.cols && !self.nodes[ix + 1].is_wall {
                self.components.union(ix, ix + 1);
            }
        }
    }
}

impl GridModel for NodeGrid {
    type Neighbours = SmallVec<[NodeId; N_NEIGHBOURS]>;
    type Nodes = Map<Range<usize>, fn(usize) -> NodeId>;

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }
    fn all_nodes(&self) -> Self::Nodes {
        (0..self.nodes.len()).map(NodeId as fn(usize) -> NodeId)
    }
    fn neighbours_of(&self, id: NodeId) -> Self::Neighbours {
        let mut neighbours = self.adjacent(id);
        neighbours.retain(|n| !self.nodes[n.index()].is_visited);
        neighbours
    }
    fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl fmt::Display for NodeGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.nodes.chunks(self.cols.max(1)) {
            let line = row
                .iter()
                .map(|n| {
                    if n.is_wall {
                        '#'
                    } else if n.is_visited {
                        'o'
                    } else {
                        '.'
                    }
                })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
