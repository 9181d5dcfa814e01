use std::collections::BTreeSet;

use graphwalk::prelude::*;

fn as_sets(components: Vec<Vec<i32>>) -> BTreeSet<BTreeSet<i32>> {
    components
        .into_iter()
        .map(|component| component.into_iter().collect())
        .collect()
}

#[test]
fn tree_queries() {
    let graph = AdjacencyList::from_edges(Directedness::Undirected, [(0, 1), (0, 2), (1, 3)]);
    assert_eq!(traverse(&graph, 0), vec![0, 1, 2, 3]);
    assert_eq!(shortest_path(&graph, 0, 3), vec![0, 1, 3]);
    assert_eq!(shortest_distance(&graph, 0, 3), Some(2));
    assert_eq!(vertices_at_distance(&graph, 0, 1), vec![1, 2]);
    assert!(is_connected(&graph));
}

#[test]
fn empty_graph() {
    let graph = AdjacencyList::<i32>::undirected();
    assert!(is_connected(&graph));
    assert!(find_connected_components(&graph).is_empty());
    assert!(traverse(&graph, 0).is_empty());
}

#[test]
fn disconnected_graph() {
    let mut graph = AdjacencyList::undirected();
    graph.add_edge(0, 1);
    graph.add_vertex(2);
    assert!(!is_connected(&graph));
    let components = find_connected_components(&graph);
    assert_eq!(components.len(), 2);
    assert_eq!(
        as_sets(components),
        BTreeSet::from([BTreeSet::from([0, 1]), BTreeSet::from([2])])
    );
    assert_eq!(shortest_distance(&graph, 0, 2), None);
    assert!(shortest_path(&graph, 0, 2).is_empty());
}

#[test]
fn same_start_and_target() {
    let mut graph = AdjacencyList::directed();
    graph.add_vertex(5);
    assert_eq!(shortest_distance(&graph, 5, 5), Some(0));
    assert_eq!(shortest_path(&graph, 5, 5), vec![5]);
    assert_eq!(vertices_at_distance(&graph, 5, 0), vec![5]);
}

#[test]
fn small_grid() {
    let grid = Grid::from_rows(&[[0, 0], [1, 0]]).unwrap();
    let path = grid_shortest_path(&grid, Cell::new(0, 0), Cell::new(1, 1));
    assert_eq!(
        path,
        vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)]
    );
}

#[test]
fn absent_start_never_fails() {
    let graph = AdjacencyList::from_edges(Directedness::Directed, [(0, 1)]);
    assert!(traverse(&graph, 7).is_empty());
    assert!(shortest_path(&graph, 7, 1).is_empty());
    assert_eq!(shortest_distance(&graph, 7, 1), None);
    assert!(vertices_at_distance(&graph, 7, 0).is_empty());
    assert!(vertices_at_distance(&graph, 7, 3).is_empty());
}

#[test]
fn parallel_edges_do_not_change_results() {
    let single = AdjacencyList::from_edges(Directedness::Undirected, [(0, 1), (1, 2)]);
    let doubled =
        AdjacencyList::from_edges(Directedness::Undirected, [(0, 1), (0, 1), (1, 2), (2, 2)]);
    assert_eq!(traverse(&single, 0), traverse(&doubled, 0));
    assert_eq!(shortest_path(&single, 0, 2), shortest_path(&doubled, 0, 2));
    assert_eq!(
        find_connected_components(&single),
        find_connected_components(&doubled)
    );
}

#[test]
fn dense_and_hashed_graphs_agree() {
    let edges = [(0, 4), (4, 2), (2, 0), (5, 6), (3, 3)];
    let hashed = AdjacencyList::<usize>::from_edges(Directedness::Undirected, edges);
    let dense = DenseGraph::from_edges(Directedness::Undirected, edges);
    for start in 0..8 {
        assert_eq!(traverse(&hashed, start), traverse(&dense, start));
        for target in 0..8 {
            assert_eq!(
                shortest_distance(&hashed, start, target),
                shortest_distance(&dense, start, target)
            );
        }
    }
    assert_eq!(is_connected(&hashed), is_connected(&dense));
}

#[test]
fn directed_reachability() {
    let graph = AdjacencyList::from_edges(Directedness::Directed, [(0, 1), (1, 2), (3, 2)]);
    assert_eq!(traverse(&graph, 0), vec![0, 1, 2]);
    assert_eq!(shortest_distance(&graph, 0, 2), Some(2));
    assert_eq!(shortest_distance(&graph, 2, 0), None);
    assert_eq!(shortest_path(&graph, 3, 2), vec![3, 2]);
    assert!(!is_connected(&graph));
}
