//! Breadth-first queries over any [`Graph`].
//!
//! Each query runs its own search with a fresh visited set and FIFO
//! frontier; nothing is cached between calls and the graph is only read.
//! A vertex is marked visited when it is enqueued, so every vertex is
//! expanded at most once and a query costs O(V + E).
//!
//! Missing vertices are not errors.  A query whose start (or target) is
//! absent returns its empty result: `[]`, `None`, or `true` for the
//! connectivity of an empty graph.
use std::{
    collections::{HashMap, HashSet, VecDeque},
    hash::Hash,
};

use crate::{graph::Graph, tracing_support::info_span};

const DEFAULT_HASH_SET_CAPACITY: usize = 64;

/// Lazy breadth-first traversal yielding vertices in discovery order.
pub struct Bfs<'g, G: Graph> {
    graph: &'g G,
    visited: HashSet<G::VertexId>,
    queue: VecDeque<G::VertexId>,
}

impl<'g, G> Bfs<'g, G>
where
    G: Graph,
{
    /// Starts a traversal at `start`.  The iterator is empty if `start` is
    /// not in the graph.
    pub fn new(graph: &'g G, start: G::VertexId) -> Self {
        let mut visited = HashSet::with_capacity(DEFAULT_HASH_SET_CAPACITY);
        let mut queue = VecDeque::new();
        if graph.has_vertex(&start) {
            visited.insert(start.clone());
            queue.push_back(start);
        }
        Self {
            graph,
            visited,
            queue,
        }
    }

    /// Gets the number of vertices discovered so far, including those still
    /// waiting in the frontier.
    pub fn num_discovered(&self) -> usize {
        self.visited.len()
    }
}

impl<'g, G> Iterator for Bfs<'g, G>
where
    G: Graph,
{
    type Item = G::VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.queue.pop_front()?;
        for neighbor in self.graph.neighbors(&current) {
            if self.visited.insert(neighbor.clone()) {
                self.queue.push_back(neighbor.clone());
            }
        }
        Some(current)
    }
}

/// Lists every vertex reachable from `start`, in breadth-first order,
/// starting with `start` itself.
pub fn traverse<G: Graph>(graph: &G, start: G::VertexId) -> Vec<G::VertexId> {
    let _span = info_span!("traverse", ?start).entered();
    Bfs::new(graph, start).collect()
}

/// Finds a path with the fewest edges from `start` to `target`, including
/// both ends.  Returns `[start]` when the two are equal and an empty vector
/// when either is absent or `target` is unreachable.
pub fn shortest_path<G: Graph>(
    graph: &G,
    start: G::VertexId,
    target: G::VertexId,
) -> Vec<G::VertexId> {
    let _span = info_span!("shortest_path", ?start, ?target).entered();
    if !graph.has_vertex(&start) || !graph.has_vertex(&target) {
        return Vec::new();
    }
    if start == target {
        return vec![start];
    }

    let mut visited = HashSet::with_capacity(DEFAULT_HASH_SET_CAPACITY);
    let mut queue = VecDeque::new();
    // The start vertex never gets an entry; a missing parent ends the walk.
    let mut parent: HashMap<G::VertexId, G::VertexId> = HashMap::new();

    visited.insert(start.clone());
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == target {
            return reconstruct_path(&parent, current);
        }
        for neighbor in graph.neighbors(&current) {
            if visited.insert(neighbor.clone()) {
                parent.insert(neighbor.clone(), current.clone());
                queue.push_back(neighbor.clone());
            }
        }
    }
    Vec::new()
}

fn reconstruct_path<V>(parent: &HashMap<V, V>, target: V) -> Vec<V>
where
    V: Eq + Hash + Clone,
{
    let mut path = Vec::new();
    let mut node = Some(target);
    while let Some(current) = node {
        node = parent.get(&current).cloned();
        path.push(current);
    }
    path.reverse();
    path
}

/// Counts the edges on a shortest path from `start` to `target`.  Returns
/// `Some(0)` when the two are equal and `None` when either is absent or
/// `target` is unreachable.
pub fn shortest_distance<G: Graph>(
    graph: &G,
    start: G::VertexId,
    target: G::VertexId,
) -> Option<usize> {
    let _span = info_span!("shortest_distance", ?start, ?target).entered();
    if !graph.has_vertex(&start) || !graph.has_vertex(&target) {
        return None;
    }
    if start == target {
        return Some(0);
    }

    let mut visited = HashSet::with_capacity(DEFAULT_HASH_SET_CAPACITY);
    let mut queue = VecDeque::new();
    visited.insert(start.clone());
    queue.push_back((start, 0));

    while let Some((current, distance)) = queue.pop_front() {
        // The target is recognized on the edge that reaches it, before it
        // would be enqueued.
        for neighbor in graph.neighbors(&current) {
            if *neighbor == target {
                return Some(distance + 1);
            }
            if visited.insert(neighbor.clone()) {
                queue.push_back((neighbor.clone(), distance + 1));
            }
        }
    }
    None
}

/// Lists the vertices whose breadth-first distance from `start` is exactly
/// `distance`, in discovery order.  `[start]` for a distance of zero, empty
/// if `start` is absent.
pub fn vertices_at_distance<G: Graph>(
    graph: &G,
    start: G::VertexId,
    distance: usize,
) -> Vec<G::VertexId> {
    let _span = info_span!("vertices_at_distance", ?start, distance).entered();
    if !graph.has_vertex(&start) {
        return Vec::new();
    }
    if distance == 0 {
        return vec![start];
    }

    let mut result = Vec::new();
    let mut visited = HashSet::with_capacity(DEFAULT_HASH_SET_CAPACITY);
    let mut queue = VecDeque::new();
    visited.insert(start.clone());
    queue.push_back((start, 0));

    while let Some((current, current_distance)) = queue.pop_front() {
        if current_distance == distance {
            result.push(current);
            continue;
        }
        for neighbor in graph.neighbors(&current) {
            if visited.insert(neighbor.clone()) {
                queue.push_back((neighbor.clone(), current_distance + 1));
            }
        }
    }
    result
}

/// Checks whether every vertex is reachable from the first vertex reported
/// by [`Graph::vertex_ids`].  The empty graph is connected.
///
/// For directed graphs this is reachability from that one vertex, not strong
/// connectivity.
pub fn is_connected<G: Graph>(graph: &G) -> bool {
    let _span = info_span!("is_connected").entered();
    let Some(first) = graph.vertex_ids().next() else {
        return true;
    };
    Bfs::new(graph, first).count() == graph.num_vertices()
}

/// Groups vertices into connected components.
///
/// Vertices are scanned in [`Graph::vertex_ids`] order; each vertex not yet
/// claimed by a component starts a new one, listed in breadth-first order.
/// Each component's search has its own visited set, and a separate global set
/// records which vertices have been claimed.  For undirected graphs the
/// result partitions the vertex set.  For directed graphs a component holds
/// everything reachable from its first vertex, so it may repeat vertices
/// claimed by an earlier component.
pub fn find_connected_components<G: Graph>(graph: &G) -> Vec<Vec<G::VertexId>> {
    let _span = info_span!("find_connected_components").entered();
    let mut components = Vec::new();
    let mut global_visited = HashSet::with_capacity(graph.num_vertices());

    for vertex in graph.vertex_ids() {
        if global_visited.contains(&vertex) {
            continue;
        }
        let mut component = Vec::new();
        let mut visited = HashSet::with_capacity(DEFAULT_HASH_SET_CAPACITY);
        let mut queue = VecDeque::new();

        visited.insert(vertex.clone());
        global_visited.insert(vertex.clone());
        queue.push_back(vertex);

        while let Some(current) = queue.pop_front() {
            for neighbor in graph.neighbors(&current) {
                if visited.insert(neighbor.clone()) {
                    global_visited.insert(neighbor.clone());
                    queue.push_back(neighbor.clone());
                }
            }
            component.push(current);
        }
        components.push(component);
    }
    components
}
