use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use quickcheck::{Arbitrary, Gen};

use crate::prelude::*;
use crate::tracing_support::init_tracing;

/// Largest vertex id produced by [`ArbGraph`].  Ids above it are guaranteed
/// to be absent.
pub const MAX_ARB_VERTEX: u8 = 15;

impl Arbitrary for Directedness {
    fn arbitrary(g: &mut Gen) -> Self {
        if bool::arbitrary(g) {
            Directedness::Directed
        } else {
            Directedness::Undirected
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArbGraph<G> {
    pub graph: G,
}

impl<G> Arbitrary for ArbGraph<G>
where
    G: GraphMut + Clone + Debug + 'static,
    G::VertexId: From<u8>,
{
    fn arbitrary(g: &mut Gen) -> Self {
        init_tracing();
        let num_vertices = u8::arbitrary(g) % (MAX_ARB_VERTEX + 1);
        let num_edges = usize::arbitrary(g) % 30;
        let num_extra_parallel_edges = usize::arbitrary(g) % 3;
        let num_extra_self_loops = usize::arbitrary(g) % 3;

        let mut graph = G::new(Directedness::arbitrary(g));
        // Skip some ids so isolated vertices and gaps both occur.
        for v in 0..num_vertices {
            if u8::arbitrary(g) % 4 != 0 {
                graph.add_vertex(v.into());
            }
        }

        for i in 0..num_edges {
            if num_vertices == 0 {
                break;
            }
            let source = u8::arbitrary(g) % num_vertices;
            let target = u8::arbitrary(g) % num_vertices;
            graph.add_edge(source.into(), target.into());
            if i < num_extra_parallel_edges {
                graph.add_edge(source.into(), target.into());
            }
            if i < num_extra_self_loops {
                graph.add_edge(source.into(), source.into());
            }
        }

        ArbGraph { graph }
    }
}

pub fn has_duplicates<T: Eq + Hash>(items: impl IntoIterator<Item = T>) -> bool {
    let mut seen = HashSet::new();
    for item in items {
        if !seen.insert(item) {
            return true;
        }
    }
    false
}

/// Checks that consecutive vertices of `path` are joined by an edge.
pub fn is_walk<G: Graph>(graph: &G, path: &[G::VertexId]) -> bool {
    path.iter().all(|v| graph.has_vertex(v))
        && path
            .windows(2)
            .all(|pair| graph.neighbors(&pair[0]).contains(&pair[1]))
}

/// Checks the internal consistency of a graph.
pub fn check_graph_consistency<G: Graph>(graph: &G) {
    let ids: Vec<_> = graph.vertex_ids().collect();
    assert!(!has_duplicates(ids.iter()));
    assert_eq!(ids.len(), graph.num_vertices());
    assert_eq!(graph.is_empty(), ids.is_empty());

    let mut num_edges = 0;
    for vertex in &ids {
        assert!(graph.has_vertex(vertex));
        for neighbor in graph.neighbors(vertex) {
            assert!(graph.has_vertex(neighbor), "dangling neighbor {neighbor:?}");
            num_edges += 1;
        }
    }
    assert_eq!(num_edges, graph.num_edges());

    if !graph.is_directed() {
        for u in &ids {
            for v in graph.neighbors(u) {
                let forward = graph.neighbors(u).iter().filter(|&w| w == v).count();
                let backward = graph.neighbors(v).iter().filter(|&w| w == u).count();
                assert_eq!(forward, backward, "asymmetric edge {u:?} -- {v:?}");
            }
        }
    }
}
