//! Human-readable renderings of graphs and query results.
//!
//! These are thin formatting wrappers; none of them is used by the search
//! code itself.
use std::fmt::{self, Display, Formatter};

use crate::{
    adjacency_list::AdjacencyList,
    grid::{Cell, Grid},
    graph::Graph,
};

const SEPARATOR: &str = " -> ";

/// Renders each vertex with its neighbors, one vertex per line, in
/// [`Graph::vertex_ids`] order.
pub struct DisplayGraph<'g, G>(pub &'g G);

impl<G> Display for DisplayGraph<'_, G>
where
    G: Graph,
    G::VertexId: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph adjacency list:")?;
        for vertex in self.0.vertex_ids() {
            write!(f, "{vertex}:")?;
            for neighbor in self.0.neighbors(&vertex) {
                write!(f, " {neighbor}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl<V> Display for AdjacencyList<V>
where
    V: Eq + std::hash::Hash + Clone + fmt::Debug + Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        DisplayGraph(self).fmt(f)
    }
}

/// Renders a traversal order as `title: a -> b -> c`.
pub struct DisplayTraversal<'a, V> {
    title: &'a str,
    vertices: &'a [V],
}

impl<'a, V> DisplayTraversal<'a, V> {
    pub fn new(vertices: &'a [V]) -> Self {
        Self {
            title: "BFS Traversal",
            vertices,
        }
    }

    pub fn with_title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }
}

impl<V: Display> Display for DisplayTraversal<'_, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.title)?;
        write_joined(f, self.vertices)
    }
}

/// Renders a path as `title: a -> b -> c`, or `title: No path found` when
/// the path is empty.
pub struct DisplayPath<'a, V> {
    title: &'a str,
    path: &'a [V],
}

impl<'a, V> DisplayPath<'a, V> {
    pub fn new(path: &'a [V]) -> Self {
        Self {
            title: "Path",
            path,
        }
    }

    pub fn with_title(mut self, title: &'a str) -> Self {
        self.title = title;
        self
    }
}

impl<V: Display> Display for DisplayPath<'_, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.title)?;
        if self.path.is_empty() {
            write!(f, "No path found")
        } else {
            write_joined(f, self.path)
        }
    }
}

fn write_joined<V: Display>(f: &mut Formatter<'_>, items: &[V]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(SEPARATOR)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

/// Draws open cells as `.`, obstacles as `#`, one row per line.
impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows() {
            for col in 0..self.cols() {
                let ch = if self.is_open(Cell::new(row, col)) { '.' } else { '#' };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
