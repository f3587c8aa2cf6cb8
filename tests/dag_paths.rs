use graph_condensation_analyzer::domain::dag_paths::{
    reconstruct_path, DagPaths, INF, NEG_INF, NO_PREDECESSOR,
};
use graph_condensation_analyzer::domain::graph::Graph;

fn diamond() -> Graph {
    let mut g = Graph::new(4, true);
    g.add_edge(0, 1, 5);
    g.add_edge(0, 2, 2);
    g.add_edge(1, 3, 1);
    g.add_edge(2, 3, 4);
    g
}

#[test]
fn shortest_paths_on_a_chain() {
    let mut g = Graph::new(3, true);
    g.add_edge(0, 1, 2);
    g.add_edge(1, 2, 3);

    let mut paths = DagPaths::new(&g);
    let result = paths.shortest_paths(0);
    assert_eq!(result.distances, vec![0, 2, 5]);
    assert_eq!(reconstruct_path(&result.predecessors, 0, 2), vec![0, 1, 2]);
}

#[test]
fn diamond_tie_keeps_the_first_relaxed_predecessor() {
    // Both routes to 3 cost 6; 0 -> 1 -> 3 is relaxed first and the
    // strict comparison prevents the later route from overwriting it.
    let g = diamond();
    let mut paths = DagPaths::new(&g);

    let shortest = paths.shortest_paths(0);
    assert_eq!(shortest.distances[3], 6);
    assert_eq!(shortest.predecessors[3], 1);

    let longest = paths.longest_paths(0);
    assert_eq!(longest.distances[3], 6);
    assert_eq!(longest.predecessors[3], 1);
}

#[test]
fn unreachable_vertices_keep_the_sentinel() {
    let mut g = Graph::new(4, true);
    g.add_edge(0, 1, 5);
    g.add_edge(2, 3, 3);

    let mut paths = DagPaths::new(&g);
    let result = paths.shortest_paths(0);
    assert_eq!(result.distances, vec![0, 5, INF, INF]);
    assert!(reconstruct_path(&result.predecessors, 0, 2).is_empty());

    let result = paths.longest_paths(0);
    assert_eq!(result.distances, vec![0, 5, NEG_INF, NEG_INF]);
}

#[test]
fn cyclic_input_returns_initialized_arrays_without_relaxing() {
    let mut g = Graph::new(3, true);
    g.add_edge(0, 1, 1);
    g.add_edge(1, 2, 1);
    g.add_edge(2, 0, 1);

    let mut paths = DagPaths::new(&g);
    let result = paths.shortest_paths(0);
    assert_eq!(result.distances, vec![0, INF, INF]);
    assert!(result.predecessors.iter().all(|&p| p == NO_PREDECESSOR));
    assert_eq!(paths.metrics().operations_count(), 0);
}

#[test]
fn critical_path_spans_the_heaviest_route() {
    let mut g = Graph::new(6, true);
    g.add_edge(0, 1, 3);
    g.add_edge(0, 2, 2);
    g.add_edge(1, 3, 4);
    g.add_edge(2, 3, 1);
    g.add_edge(3, 4, 2);
    g.add_edge(4, 5, 3);

    let mut paths = DagPaths::new(&g);
    let critical = paths.find_critical_path();
    assert_eq!(critical.length, 12);
    assert_eq!(critical.path, vec![0, 1, 3, 4, 5]);
}

#[test]
fn critical_path_on_empty_graph_is_empty_with_length_zero() {
    let g = Graph::new(0, true);
    let mut paths = DagPaths::new(&g);
    let critical = paths.find_critical_path();
    assert!(critical.path.is_empty());
    assert_eq!(critical.length, 0);
}

#[test]
fn critical_path_with_no_edges_picks_the_smallest_vertex() {
    let g = Graph::new(2, true);
    let mut paths = DagPaths::new(&g);
    let critical = paths.find_critical_path();
    assert_eq!(critical.path, vec![0]);
    assert_eq!(critical.length, 0);
}

#[test]
fn critical_path_tie_prefers_the_smaller_source() {
    // Two parallel chains of equal weight; the one starting at the
    // smaller vertex id wins.
    let mut g = Graph::new(4, true);
    g.add_edge(0, 1, 7);
    g.add_edge(2, 3, 7);

    let mut paths = DagPaths::new(&g);
    let critical = paths.find_critical_path();
    assert_eq!(critical.length, 7);
    assert_eq!(critical.path, vec![0, 1]);
}

#[test]
fn negative_weights_are_honored_on_a_dag() {
    let mut g = Graph::new(3, true);
    g.add_edge(0, 1, -4);
    g.add_edge(0, 2, 1);
    g.add_edge(1, 2, 2);

    let mut paths = DagPaths::new(&g);
    let result = paths.shortest_paths(0);
    assert_eq!(result.distances, vec![0, -4, -2]);
    assert_eq!(reconstruct_path(&result.predecessors, 0, 2), vec![0, 1, 2]);
}

#[test]
fn reconstruct_source_equals_dest_is_singleton() {
    let g = diamond();
    let mut paths = DagPaths::new(&g);
    let result = paths.shortest_paths(0);
    assert_eq!(reconstruct_path(&result.predecessors, 0, 0), vec![0]);
}
