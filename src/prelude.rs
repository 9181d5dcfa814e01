pub use crate::adjacency_list::AdjacencyList;
pub use crate::dense_graph::DenseGraph;
pub use crate::graph::{Directedness, Graph, GraphMut};
pub use crate::grid::{Cell, Grid, grid_shortest_path};
pub use crate::search::{
    Bfs, find_connected_components, is_connected, shortest_distance, shortest_path, traverse,
    vertices_at_distance,
};
