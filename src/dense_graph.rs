use bitvec::vec::BitVec;

use crate::graph::{Directedness, Graph, GraphMut};

/// An adjacency-list graph whose vertex ids are small `usize` values used
/// directly as indices.
///
/// Storage grows to the largest id seen.  `present` tracks which ids have an
/// adjacency entry, so a vertex with no edges is still distinguishable from
/// an id that was never added.  Vertices are reported in ascending id order.
///
/// Ids above [`DenseGraph::MAX_ID`] are not accepted; adding one panics.
#[derive(Clone, Debug, Default)]
pub struct DenseGraph {
    directedness: Directedness,
    adjacency: Vec<Vec<usize>>,
    present: BitVec,
}

impl DenseGraph {
    /// The largest vertex id the graph will store.
    pub const MAX_ID: usize = (1 << 24) - 1;

    /// Creates an empty graph with room for ids below `capacity`.
    pub fn with_capacity(directedness: Directedness, capacity: usize) -> Self {
        Self {
            directedness,
            adjacency: Vec::with_capacity(capacity),
            present: BitVec::with_capacity(capacity),
        }
    }

    fn ensure(&mut self, vertex: usize) {
        let len = match vertex.checked_add(1) {
            Some(len) if vertex <= Self::MAX_ID => len,
            _ => panic!("vertex id {vertex} exceeds DenseGraph::MAX_ID"),
        };
        if len > self.adjacency.len() {
            self.adjacency.resize_with(len, Vec::new);
            self.present.resize(len, false);
        }
        self.present.set(vertex, true);
    }
}

impl Graph for DenseGraph {
    type VertexId = usize;

    fn directedness(&self) -> Directedness {
        self.directedness
    }

    fn has_vertex(&self, vertex: &usize) -> bool {
        self.present.get(*vertex).is_some_and(|bit| *bit)
    }

    fn neighbors(&self, vertex: &usize) -> &[usize] {
        match self.adjacency.get(*vertex) {
            Some(neighbors) => neighbors,
            None => &[],
        }
    }

    fn vertex_ids(&self) -> impl Iterator<Item = usize> + '_ {
        self.present.iter_ones()
    }

    fn num_vertices(&self) -> usize {
        self.present.count_ones()
    }
}

impl GraphMut for DenseGraph {
    fn new(directedness: Directedness) -> Self {
        Self::with_capacity(directedness, 0)
    }

    fn accepts_vertex(&self, vertex: &usize) -> bool {
        *vertex <= Self::MAX_ID
    }

    fn add_vertex(&mut self, vertex: usize) {
        self.ensure(vertex);
    }

    fn add_edge(&mut self, from: usize, to: usize) {
        self.ensure(from);
        self.ensure(to);
        self.adjacency[from].push(to);
        if !self.directedness.is_directed() {
            self.adjacency[to].push(from);
        }
    }
}
