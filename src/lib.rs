//! Breadth-first search over adjacency-list graphs and 2D grids.
//!
//! Build a graph with [`GraphMut::add_edge`] and [`GraphMut::add_vertex`],
//! then run any of the queries in [`search`]: traversal order, shortest path
//! and distance, vertices at a given distance, connectivity and connected
//! components.  [`grid`] answers shortest-path queries on a grid of open and
//! blocked cells without building a graph.
pub mod adjacency_list;
pub mod dense_graph;
pub mod display;
pub mod edge_list;
pub mod graph;
pub mod grid;
pub mod prelude;
pub mod search;
pub mod tracing_support;

#[cfg(test)]
mod graph_test_support;

pub use adjacency_list::AdjacencyList;
pub use graph::{Directedness, Graph, GraphMut};
