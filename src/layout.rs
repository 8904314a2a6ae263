//! Text layouts of a grid with its start and finish, e.g.
//!
//! ```text
//! S..#
//! .#..
//! ...F
//! ```
//!
//! where `S` marks the start, `F` the finish, `#` a wall and `.` an open cell.
use crate::node::NodeId;
use crate::node_grid::{GridModel, NodeGrid};
use std::collections::HashSet;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("layout has no rows")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown cell {cell:?} at row {row}, column {col}")]
    UnknownCell { row: usize, col: usize, cell: char },
    #[error("layout has no start cell 'S'")]
    MissingStart,
    #[error("layout has no finish cell 'F'")]
    MissingFinish,
    #[error("second start cell at row {row}, column {col}")]
    DuplicateStart { row: usize, col: usize },
    #[error("second finish cell at row {row}, column {col}")]
    DuplicateFinish { row: usize, col: usize },
}

/// A [NodeGrid] together with the designated start and finish nodes.
#[derive(Clone, Debug)]
pub struct GridLayout {
    pub grid: NodeGrid,
    pub start: NodeId,
    pub finish: NodeId,
}

impl GridLayout {
    /// Renders the layout with `o` on traced nodes and `*` on path nodes. Start and finish
    /// keep their own markers.
    pub fn render(&self, trace: &[NodeId], path: &[NodeId]) -> String {
        let trace = trace.iter().copied().collect::<HashSet<NodeId>>();
        let path = path.iter().copied().collect::<HashSet<NodeId>>();
        let mut out = String::with_capacity(self.grid.len() + self.grid.rows());
        for id in self.grid.all_nodes() {
            let cell = if id == self.start {
                'S'
            } else if id == self.finish {
                'F'
            } else if self.grid.node(id).is_wall() {
                '#'
            } else if path.contains(&id) {
                '*'
            } else if trace.contains(&id) {
                'o'
            } else {
                '.'
            };
            out.push(cell);
            if (id.index() + 1) % self.grid.cols() == 0 {
                out.push('\n');
            }
        }
        out
    }
}

impl FromStr for GridLayout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines = s
            .lines()
            .map(str::trim)
            .skip_while(|l| l.is_empty())
            .collect::<Vec<&str>>();
        let lines = match lines.iter().rposition(|l| !l.is_empty()) {
            Some(last) => &lines[..=last],
            None => return Err(LayoutError::Empty),
        };
        let cols = lines[0].chars().count();
        let mut grid = NodeGrid::new(lines.len(), cols);
        let mut start = None;
        let mut finish = None;
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != cols {
                return Err(LayoutError::RaggedRow {
                    row,
                    expected: cols,
                    found,
                });
            }
            for (col, cell) in line.chars().enumerate() {
                let id = NodeId(row * cols + col);
                match cell {
                    '.' => {}
                    '#' => grid.set_wall(id, true),
                    'S' if start.is_some() => return Err(LayoutError::DuplicateStart { row, col }),
                    'S' => start = Some(id),
                    'F' if finish.is_some() => {
                        return Err(LayoutError::DuplicateFinish { row, col })
                    }
                    'F' => finish = Some(id),
                    _ => return Err(LayoutError::UnknownCell { row, col, cell }),
                }
            }
        }
        grid.update();
        Ok(GridLayout {
            grid,
            start: start.ok_or(LayoutError::MissingStart)?,
            finish: finish.ok_or(LayoutError::MissingFinish)?,
        })
    }
}
