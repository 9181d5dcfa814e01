//! `Graph` and `GraphMut` are the core traits for working with graphs in this
//! library. `Graph` provides read-only access to the adjacency structure, while
//! `GraphMut` extends `Graph` with methods for growing it.
//!
//! The traversal functions in [`crate::search`] only ever see a graph through
//! `Graph`, so any adjacency representation satisfying the contract below can
//! be searched:
//!
//! - A vertex is present iff it has an adjacency entry, possibly empty.
//! - Neighbor sequences keep insertion order and multiplicity; parallel edges
//!   and self-loops are stored as given.
//! - [`Graph::neighbors`] is total: an absent vertex has no neighbors.
//!
//! Graphs never shrink. There is no vertex or edge removal.
use std::{fmt::Debug, hash::Hash};

/// Whether an edge `(u, v)` can also be walked as `(v, u)`.
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Directedness {
    Directed,
    #[default]
    Undirected,
}

impl Directedness {
    pub fn is_directed(self) -> bool {
        matches!(self, Directedness::Directed)
    }
}

/// Read-only view of an adjacency-list graph.
pub trait Graph {
    type VertexId: Eq + Hash + Clone + Debug;

    /// Gets the directedness fixed when the graph was created.
    fn directedness(&self) -> Directedness;

    fn is_directed(&self) -> bool {
        self.directedness().is_directed()
    }

    /// Checks whether `vertex` has an adjacency entry.
    fn has_vertex(&self, vertex: &Self::VertexId) -> bool;

    /// Gets the neighbors of `vertex` in insertion order, or an empty slice
    /// if the vertex is absent.
    fn neighbors(&self, vertex: &Self::VertexId) -> &[Self::VertexId];

    /// Gets an iterator over every vertex in the graph.  The order is fixed
    /// for a given graph value but is otherwise implementation-defined.
    fn vertex_ids(&self) -> impl Iterator<Item = Self::VertexId> + '_;

    /// Gets the number of vertices in the graph.
    fn num_vertices(&self) -> usize {
        self.vertex_ids().count()
    }

    fn is_empty(&self) -> bool {
        self.num_vertices() == 0
    }

    /// Gets the total number of adjacency entries.  An undirected edge is
    /// stored once per endpoint and therefore counts twice.
    fn num_edges(&self) -> usize {
        self.vertex_ids().map(|v| self.neighbors(&v).len()).sum()
    }
}

/// A graph that can grow by adding vertices and edges.
pub trait GraphMut: Graph + Sized {
    /// Creates an empty graph.
    fn new(directedness: Directedness) -> Self;

    /// Checks whether `vertex` can be stored by this representation.  Adding
    /// a vertex that is not accepted may panic.
    fn accepts_vertex(&self, _vertex: &Self::VertexId) -> bool {
        true
    }

    /// Ensures `vertex` has an adjacency entry.  Re-adding is a no-op.
    fn add_vertex(&mut self, vertex: Self::VertexId);

    /// Appends `to` to the neighbors of `from` and, for undirected graphs,
    /// `from` to the neighbors of `to`.  Missing endpoints are created.
    /// Duplicate edges are not merged.
    fn add_edge(&mut self, from: Self::VertexId, to: Self::VertexId);

    /// Creates a graph from a sequence of edges.
    fn from_edges(
        directedness: Directedness,
        edges: impl IntoIterator<Item = (Self::VertexId, Self::VertexId)>,
    ) -> Self {
        let mut graph = Self::new(directedness);
        for (from, to) in edges {
            graph.add_edge(from, to);
        }
        graph
    }
}
