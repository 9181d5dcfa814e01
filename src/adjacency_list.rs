use std::{collections::HashMap, fmt::Debug, hash::Hash};

use derivative::Derivative;

use crate::graph::{Directedness, Graph, GraphMut};

/// An adjacency-list graph keyed by arbitrary vertex ids.
///
/// Each vertex owns a slot in `slots`; `index` maps a vertex id to its slot.
/// Slots are appended in the order vertices first appear, so
/// [`Graph::vertex_ids`] reports vertices in insertion order.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "V: Clone"),
    Debug(bound = "V: Debug"),
    Default(bound = "")
)]
pub struct AdjacencyList<V = i32> {
    directedness: Directedness,
    index: HashMap<V, usize>,
    slots: Vec<Slot<V>>,
}

#[derive(Derivative)]
#[derivative(Clone(bound = "V: Clone"), Debug(bound = "V: Debug"))]
struct Slot<V> {
    vertex: V,
    neighbors: Vec<V>,
}

impl<V> AdjacencyList<V>
where
    V: Eq + Hash + Clone + Debug,
{
    pub fn directed() -> Self {
        <Self as GraphMut>::new(Directedness::Directed)
    }

    pub fn undirected() -> Self {
        <Self as GraphMut>::new(Directedness::Undirected)
    }

    fn slot_of(&mut self, vertex: V) -> usize {
        if let Some(&slot) = self.index.get(&vertex) {
            return slot;
        }
        let slot = self.slots.len();
        self.index.insert(vertex.clone(), slot);
        self.slots.push(Slot {
            vertex,
            neighbors: Vec::new(),
        });
        slot
    }
}

impl<V> Graph for AdjacencyList<V>
where
    V: Eq + Hash + Clone + Debug,
{
    type VertexId = V;

    fn directedness(&self) -> Directedness {
        self.directedness
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    fn neighbors(&self, vertex: &V) -> &[V] {
        match self.index.get(vertex) {
            Some(&slot) => &self.slots[slot].neighbors,
            None => &[],
        }
    }

    fn vertex_ids(&self) -> impl Iterator<Item = V> + '_ {
        self.slots.iter().map(|slot| slot.vertex.clone())
    }

    fn num_vertices(&self) -> usize {
        self.slots.len()
    }
}

impl<V> GraphMut for AdjacencyList<V>
where
    V: Eq + Hash + Clone + Debug,
{
    fn new(directedness: Directedness) -> Self {
        Self {
            directedness,
            index: HashMap::new(),
            slots: Vec::new(),
        }
    }

    fn add_vertex(&mut self, vertex: V) {
        self.slot_of(vertex);
    }

    fn add_edge(&mut self, from: V, to: V) {
        let from_slot = self.slot_of(from.clone());
        let to_slot = self.slot_of(to.clone());
        self.slots[from_slot].neighbors.push(to);
        if !self.directedness.is_directed() {
            self.slots[to_slot].neighbors.push(from);
        }
    }
}
