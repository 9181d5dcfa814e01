//! Loading graphs from plain-text edge lists.
//!
//! One entry per line: `u v` adds the edge `(u, v)` and a lone `v` adds an
//! isolated vertex.  Tokens may be separated by whitespace or a comma.
//! Everything after `#` is a comment and blank lines are ignored.
use std::str::FromStr;

use thiserror::Error;

use crate::graph::{Directedness, GraphMut};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EdgeListError {
    #[error("line {line}: expected `vertex` or `from to`, found {found} tokens")]
    WrongTokenCount { line: usize, found: usize },
    #[error("line {line}: invalid vertex id {token:?}")]
    InvalidVertex { line: usize, token: String },
    #[error("line {line}: vertex id {token:?} is out of range for this graph")]
    VertexOutOfRange { line: usize, token: String },
}

/// Builds a graph of the given directedness from edge-list text.
pub fn parse_edge_list<G>(input: &str, directedness: Directedness) -> Result<G, EdgeListError>
where
    G: GraphMut,
    G::VertexId: FromStr,
{
    let mut graph = G::new(directedness);
    for (n, line) in input.lines().enumerate() {
        let line_number = n + 1;
        let content = line.split('#').next().unwrap_or_default();
        let tokens: Vec<&str> = content
            .split(|ch: char| ch.is_whitespace() || ch == ',')
            .filter(|token| !token.is_empty())
            .collect();
        match *tokens.as_slice() {
            [] => {}
            [vertex] => {
                let vertex = parse_vertex(&graph, vertex, line_number)?;
                graph.add_vertex(vertex);
            }
            [from, to] => {
                let from = parse_vertex(&graph, from, line_number)?;
                let to = parse_vertex(&graph, to, line_number)?;
                graph.add_edge(from, to);
            }
            _ => {
                return Err(EdgeListError::WrongTokenCount {
                    line: line_number,
                    found: tokens.len(),
                });
            }
        }
    }
    Ok(graph)
}

fn parse_vertex<G>(graph: &G, token: &str, line: usize) -> Result<G::VertexId, EdgeListError>
where
    G: GraphMut,
    G::VertexId: FromStr,
{
    let vertex = token
        .parse::<G::VertexId>()
        .map_err(|_| EdgeListError::InvalidVertex {
            line,
            token: token.to_string(),
        })?;
    if !graph.accepts_vertex(&vertex) {
        return Err(EdgeListError::VertexOutOfRange {
            line,
            token: token.to_string(),
        });
    }
    Ok(vertex)
}
