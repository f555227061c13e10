//! Graph structure of a grid: connectivity, edge count and dead ends
//!
//! Used to check that a grid is a perfect maze: every node open, every node
//! reachable and exactly one fewer open edge than nodes.

use std::collections::VecDeque;
use std::fmt;

use bitvec::prelude::*;

use crate::spatial::{Direction, Grid, Position};

/// Structural summary of a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Topology {
    /// Number of node positions on the grid
    pub nodes: usize,
    /// Nodes that are open floor
    pub floor_nodes: usize,
    /// Open edge cells joining two open nodes
    pub edges: usize,
    /// Nodes reachable from the first open node
    pub reachable: usize,
    /// Open nodes with exactly one open edge
    pub dead_ends: usize,
    /// 2x2 windows made entirely of floor
    pub open_blocks: usize,
}

impl Topology {
    /// Analyse a grid
    pub fn of(grid: &Grid) -> Self {
        let mut floor_nodes = 0;
        let mut edges = 0;
        let mut dead_ends = 0;

        for node in grid.nodes() {
            if grid.is_wall(node) {
                continue;
            }
            floor_nodes += 1;

            let degree = open_neighbors(grid, node).count();
            if degree == 1 {
                dead_ends += 1;
            }
            // Count each edge from its west or north end only
            edges += [Direction::East, Direction::South]
                .into_iter()
                .filter(|&direction| is_open_edge(grid, node, direction))
                .count();
        }

        Self {
            nodes: grid.node_count(),
            floor_nodes,
            edges,
            reachable: count_reachable(grid),
            dead_ends,
            open_blocks: count_open_blocks(grid),
        }
    }

    /// Every node open and reachable with no cycles
    pub const fn is_perfect(&self) -> bool {
        self.floor_nodes == self.nodes
            && self.reachable == self.nodes
            && self.edges + 1 == self.nodes
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "nodes {}/{} open, {} reachable, {} edges, {} dead ends, {} open 2x2 blocks ({})",
            self.floor_nodes,
            self.nodes,
            self.reachable,
            self.edges,
            self.dead_ends,
            self.open_blocks,
            if self.is_perfect() {
                "perfect"
            } else {
                "not perfect"
            }
        )
    }
}

fn is_open_edge(grid: &Grid, node: Position, direction: Direction) -> bool {
    grid.is_floor(node.step(direction, 1)) && grid.is_floor(node.step(direction, 2))
}

fn open_neighbors(grid: &Grid, node: Position) -> impl Iterator<Item = Position> + '_ {
    Direction::ALL
        .into_iter()
        .filter(move |&direction| is_open_edge(grid, node, direction))
        .map(move |direction| node.step(direction, 2))
}

fn node_index(grid: &Grid, node: Position) -> usize {
    (node.y / 2) * grid.node_columns() + node.x / 2
}

// Breadth-first walk over open nodes
fn count_reachable(grid: &Grid) -> usize {
    let Some(start) = grid.nodes().find(|&node| grid.is_floor(node)) else {
        return 0;
    };

    let mut visited = bitvec![0; grid.node_count()];
    let mut queue = VecDeque::from([start]);
    visited.set(node_index(grid, start), true);
    let mut reachable = 0;

    while let Some(node) = queue.pop_front() {
        reachable += 1;
        for neighbor in open_neighbors(grid, node) {
            let index = node_index(grid, neighbor);
            if visited.get(index).as_deref() == Some(&false) {
                visited.set(index, true);
                queue.push_back(neighbor);
            }
        }
    }

    reachable
}

fn count_open_blocks(grid: &Grid) -> usize {
    let mut blocks = 0;
    for y in 0..grid.height().saturating_sub(1) {
        for x in 0..grid.width().saturating_sub(1) {
            let corner = Position::new(x, y);
            let window = [
                corner,
                corner.step(Direction::East, 1),
                corner.step(Direction::South, 1),
                corner.step(Direction::South, 1).step(Direction::East, 1),
            ];
            if window.iter().all(|&cell| grid.is_floor(cell)) {
                blocks += 1;
            }
        }
    }
    blocks
}
