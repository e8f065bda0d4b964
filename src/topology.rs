//! Graph view of the open cells

use petgraph::algo::{astar, connected_components};
use petgraph::graph::NodeIndex;
use petgraph::{Graph, Undirected};

use crate::{Direction, Grid, Point};

/// Undirected graph with a node per open cell and an edge per pair of
/// 4-adjacent open cells.
pub struct MazeGraph {
    width: usize,
    /// Node indices, row-major; `None` for walls
    nodes: Vec<Option<NodeIndex>>,
    /// Node weights are the cell coordinates
    graph: Graph<Point, (), Undirected>,
}

impl MazeGraph {
    pub fn from_grid(grid: &Grid) -> Self {
        let mut this = Self {
            width: grid.width(),
            nodes: vec![None; grid.width() * grid.height()],
            graph: Graph::new_undirected(),
        };

        for cell in grid.open_cells() {
            let node_a = this.get_or_create_node(cell);
            // Only south and east: the graph is undirected
            for direction in [Direction::South, Direction::East] {
                if let Some(next) = grid.open_neighbor(cell, direction) {
                    let node_b = this.get_or_create_node(next);
                    this.graph.add_edge(node_a, node_b, ());
                }
            }
        }
        this
    }

    fn get_or_create_node(&mut self, point: Point) -> NodeIndex {
        let i = point.row * self.width + point.col;
        if let Some(node) = self.nodes[i] {
            node
        } else {
            let node = self.graph.add_node(point);
            self.nodes[i] = Some(node);
            node
        }
    }

    fn node(&self, point: Point) -> Option<NodeIndex> {
        if point.col >= self.width {
            return None;
        }
        self.nodes
            .get(point.row * self.width + point.col)
            .copied()
            .flatten()
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    fn is_connected(&self) -> bool {
        connected_components(&self.graph) == 1
    }

    /// Open cells form a spanning tree: connected, and one edge fewer than
    /// cells, hence acyclic.
    pub fn is_perfect(&self) -> bool {
        self.node_count() > 0 && self.edge_count() == self.node_count() - 1 && self.is_connected()
    }

    /// Cells on the shortest path from `from` to `to`, both included.
    ///
    /// `None` if either end is a wall or no path exists.
    pub fn shortest_path(&self, from: Point, to: Point) -> Option<Vec<Point>> {
        let start = self.node(from)?;
        let goal = self.node(to)?;
        let (_, path) = astar(&self.graph, start, |n| n == goal, |_| 1usize, |_| 0usize)?;
        Some(path.into_iter().map(|n| self.graph[n]).collect())
    }

    /// Number of steps on the shortest path
    pub fn shortest_path_len(&self, from: Point, to: Point) -> Option<usize> {
        self.shortest_path(from, to).map(|path| path.len() - 1)
    }
}
