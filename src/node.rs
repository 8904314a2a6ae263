use core::fmt;
use grid_util::point::Point;

/// Distance of a node that has not been reached from the start.
pub const INFINITY: u32 = u32::MAX;

/// Row-major index of a [Node] within the grid that owns it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single grid cell. Coordinates are fixed at construction, the remaining fields
/// hold the wall flag and the per-run search state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    row: usize,
    col: usize,
    pub(crate) is_wall: bool,
    pub(crate) distance: u32,
    pub(crate) is_visited: bool,
    pub(crate) previous: Option<NodeId>,
}

impl Node {
    pub fn new(row: usize, col: usize) -> Node {
        Node {
            row,
            col,
            is_wall: false,
            distance: INFINITY,
            is_visited: false,
            previous: None,
        }
    }
    pub fn row(&self) -> usize {
        self.row
    }
    pub fn col(&self) -> usize {
        self.col
    }
    pub fn is_wall(&self) -> bool {
        self.is_wall
    }
    /// Places or removes a wall. [NodeGrid::set_wall](crate::NodeGrid::set_wall) should be
    /// preferred on a [NodeGrid](crate::NodeGrid) as it keeps the components up to date.
    pub fn set_wall(&mut self, wall: bool) {
        self.is_wall = wall;
    }
    /// Tentative distance from the start, [INFINITY] if not reached.
    pub fn distance(&self) -> u32 {
        self.distance
    }
    pub fn is_visited(&self) -> bool {
        self.is_visited
    }
    /// The node this node's current distance was derived from.
    pub fn previous(&self) -> Option<NodeId> {
        self.previous
    }
    pub fn is_reached(&self) -> bool {
        self.distance != INFINITY
    }
    /// Clears the search state, keeping the wall flag.
    pub fn reset(&mut self) {
        self.distance = INFINITY;
        self.is_visited = false;
        self.previous = None;
    }
    /// The coordinates as a [Point] with `x` the column and `y` the row.
    pub fn point(&self) -> Point {
        Point::new(self.col as i32, self.row as i32)
    }
    pub fn manhattan_distance(&self, other: &Node) -> u32 {
        self.point().manhattan_distance(&other.point()) as u32
    }
    /// Whether the two nodes share an edge on a 4-connected grid.
    pub fn is_adjacent(&self, other: &Node) -> bool {
        self.manhattan_distance(other) == 1
    }
}
