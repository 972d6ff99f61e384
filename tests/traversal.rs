//! Traversal-order tests: DFS (both variants) and BFS.

use graphlet::graph::{Graph, GraphBuilder, Traversal};

/// Undirected: A-B, A-C, B-D, C-D, C-E, D-E, D-F.
fn letter_graph() -> Graph<&'static str> {
    GraphBuilder::undirected()
        .edge("A", "B")
        .edge("A", "C")
        .edge("B", "D")
        .edge("C", "D")
        .edge("C", "E")
        .edge("D", "E")
        .edge("D", "F")
        .build()
}

/// Directed: 1→2, 1→3, 2→4, 3→4, 3→5, 4→5, 5→6.
fn number_graph() -> Graph<u32> {
    GraphBuilder::directed()
        .edge(1, 2)
        .edge(1, 3)
        .edge(2, 4)
        .edge(3, 4)
        .edge(3, 5)
        .edge(4, 5)
        .edge(5, 6)
        .build()
}

// ==================== Undirected Scenario ====================

#[test]
fn test_dfs_undirected_scenario() {
    let graph = letter_graph();
    assert_eq!(graph.dfs(&"A"), ["A", "B", "D", "C", "E", "F"]);
}

#[test]
fn test_dfs_iterative_undirected_scenario() {
    let graph = letter_graph();
    assert_eq!(graph.dfs_iterative(&"A"), ["A", "B", "D", "C", "E", "F"]);
}

#[test]
fn test_bfs_undirected_scenario() {
    let graph = letter_graph();
    assert_eq!(graph.bfs(&"A"), ["A", "B", "C", "D", "E", "F"]);
}

// ==================== Directed Scenario ====================

#[test]
fn test_dfs_directed_scenario() {
    let graph = number_graph();
    assert_eq!(graph.dfs(&1), [1, 2, 4, 5, 6, 3]);
}

#[test]
fn test_dfs_iterative_directed_scenario() {
    let graph = number_graph();
    assert_eq!(graph.dfs_iterative(&1), [1, 2, 4, 5, 6, 3]);
}

#[test]
fn test_bfs_directed_scenario() {
    let graph = number_graph();
    assert_eq!(graph.bfs(&1), [1, 2, 3, 4, 5, 6]);
}

// ==================== Reachability ====================

#[test]
fn test_unknown_start_returns_empty() {
    let graph = letter_graph();
    assert!(graph.dfs(&"Z").is_empty());
    assert!(graph.dfs_iterative(&"Z").is_empty());
    assert!(graph.bfs(&"Z").is_empty());
}

#[test]
fn test_isolated_start() {
    let mut graph = letter_graph();
    graph.add_vertex("Z");

    assert_eq!(graph.dfs(&"Z"), ["Z"]);
    assert_eq!(graph.dfs_iterative(&"Z"), ["Z"]);
    assert_eq!(graph.bfs(&"Z"), ["Z"]);
}

#[test]
fn test_unreachable_vertices_not_visited() {
    let mut graph = Graph::directed();
    graph.add_edge(1, 2);
    graph.add_edge(3, 4);

    assert_eq!(graph.dfs(&1), [1, 2]);
    assert_eq!(graph.bfs(&1), [1, 2]);
}

#[test]
fn test_directed_edges_not_followed_backwards() {
    let mut graph = Graph::directed();
    graph.add_edge(1, 2);
    graph.add_edge(3, 2);

    // 3's edge into 2 must not pull 3 into the traversal
    assert_eq!(graph.dfs(&1), [1, 2]);
    assert_eq!(graph.bfs(&1), [1, 2]);
}

#[test]
fn test_cycle_terminates() {
    let mut graph = Graph::directed();
    graph.add_edge(1, 2);
    graph.add_edge(2, 3);
    graph.add_edge(3, 1);

    assert_eq!(graph.dfs(&1), [1, 2, 3]);
    assert_eq!(graph.dfs_iterative(&1), [1, 2, 3]);
    assert_eq!(graph.bfs(&1), [1, 2, 3]);
}

#[test]
fn test_self_loop_visited_once() {
    let mut graph = Graph::undirected();
    graph.add_edge("A", "A");
    graph.add_edge("A", "B");

    assert_eq!(graph.dfs(&"A"), ["A", "B"]);
    assert_eq!(graph.dfs_iterative(&"A"), ["A", "B"]);
    assert_eq!(graph.bfs(&"A"), ["A", "B"]);
}

#[test]
fn test_parallel_edges_single_visit() {
    let mut graph = Graph::undirected();
    graph.add_edge("A", "B");
    graph.add_edge("A", "B");

    assert_eq!(graph.dfs(&"A"), ["A", "B"]);
    assert_eq!(graph.bfs(&"A"), ["A", "B"]);
}

#[test]
fn test_bfs_diamond_enqueued_once() {
    let mut graph = Graph::directed();
    graph.add_edge(1, 2);
    graph.add_edge(1, 3);
    graph.add_edge(2, 4);
    graph.add_edge(3, 4);

    // 4 is reachable twice within one frontier but must appear once
    assert_eq!(graph.bfs(&1), [1, 2, 3, 4]);
}

// ==================== Variant Equivalence ====================

#[test]
fn test_iterative_matches_recursive_everywhere() {
    let mut graph = Graph::undirected();
    graph.add_edge(0, 1);
    graph.add_edge(0, 2);
    graph.add_edge(1, 3);
    graph.add_edge(2, 3);
    graph.add_edge(3, 4);
    graph.add_edge(4, 0);
    graph.add_edge(4, 4);
    graph.add_edge(2, 4);
    graph.add_edge(2, 4);
    graph.add_vertex(5);

    let starts: Vec<u32> = graph.vertices().to_vec();
    for start in starts {
        assert_eq!(
            graph.dfs(&start),
            graph.dfs_iterative(&start),
            "variant mismatch from {}",
            start
        );
    }
}

#[test]
fn test_traversals_visit_reachable_exactly_once() {
    let graph = letter_graph();
    for order in [graph.dfs(&"A"), graph.dfs_iterative(&"A"), graph.bfs(&"A")] {
        let mut sorted = order.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), order.len(), "duplicate visit in {:?}", order);
        assert_eq!(order.len(), graph.vertex_count());
    }
}

// ==================== Algorithm Selection ====================

#[test]
fn test_traverse_dispatch() {
    let graph = letter_graph();
    assert_eq!(graph.traverse(Traversal::Dfs, &"A"), graph.dfs(&"A"));
    assert_eq!(
        graph.traverse(Traversal::DfsIterative, &"A"),
        graph.dfs_iterative(&"A")
    );
    assert_eq!(graph.traverse(Traversal::Bfs, &"A"), graph.bfs(&"A"));
}

#[test]
fn test_traversal_from_name() {
    assert_eq!(Traversal::from_name("dfs"), Some(Traversal::Dfs));
    assert_eq!(Traversal::from_name("dfs-iterative"), Some(Traversal::DfsIterative));
    assert_eq!(Traversal::from_name("dfs-iter"), Some(Traversal::DfsIterative));
    assert_eq!(Traversal::from_name("BFS"), Some(Traversal::Bfs));
    assert_eq!(Traversal::from_name("dijkstra"), None);
}

#[test]
fn test_traversal_names() {
    assert_eq!(Traversal::Dfs.name(), "dfs");
    assert_eq!(Traversal::DfsIterative.name(), "dfs-iterative");
    assert_eq!(Traversal::Bfs.to_string(), "bfs");
}
