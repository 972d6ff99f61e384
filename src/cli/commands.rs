//! CLI command implementations.

use std::fmt::Display;

use log::debug;

use crate::graph::{Graph, GraphBuilder, Traversal};
use crate::types::{GraphError, GraphKind, GraphResult};

/// Parse `u:v` edge specs from the command line.
fn parse_edges(specs: &[String]) -> GraphResult<Vec<(String, String)>> {
    let mut edges = Vec::with_capacity(specs.len());
    for spec in specs {
        let (u, v) = spec
            .split_once(':')
            .ok_or_else(|| GraphError::InvalidEdgeSpec(spec.clone()))?;
        if u.is_empty() || v.is_empty() {
            return Err(GraphError::InvalidEdgeSpec(spec.clone()));
        }
        edges.push((u.to_string(), v.to_string()));
    }
    Ok(edges)
}

/// Build a graph from CLI vertex and edge arguments.
fn build_graph(
    kind_name: &str,
    vertices: &[String],
    edge_specs: &[String],
) -> GraphResult<Graph<String>> {
    let kind = GraphKind::from_name(kind_name)
        .ok_or_else(|| GraphError::UnknownKind(kind_name.to_string()))?;

    let mut builder = GraphBuilder::new(kind);
    for id in vertices {
        builder = builder.vertex(id.clone());
    }
    for (u, v) in parse_edges(edge_specs)? {
        builder = builder.edge(u, v);
    }

    let graph = builder.build();
    debug!(
        "built {} graph: {} vertices, {} edges",
        kind,
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

/// Join a visit order as `a -> b -> c`.
fn order_line<V: Display>(order: &[V]) -> String {
    order
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

/// Build a graph from arguments and print one traversal's visit order.
pub fn cmd_traverse(
    kind_name: &str,
    algo_name: &str,
    vertices: &[String],
    edge_specs: &[String],
    start: &str,
    json: bool,
) -> GraphResult<()> {
    let algorithm = Traversal::from_name(algo_name)
        .ok_or_else(|| GraphError::UnknownTraversal(algo_name.to_string()))?;
    let graph = build_graph(kind_name, vertices, edge_specs)?;

    let order = graph.traverse(algorithm, &start.to_string());
    debug!(
        "{} from {}: visited {} of {} vertices",
        algorithm,
        start,
        order.len(),
        graph.vertex_count()
    );

    if json {
        let payload = serde_json::json!({
            "kind": graph.kind(),
            "algorithm": algorithm,
            "start": start,
            "visited": order,
        });
        println!("{}", payload);
    } else if order.is_empty() {
        println!("{} from {}: (start vertex not in graph)", algorithm, start);
    } else {
        println!("{} from {}: {}", algorithm, start, order_line(&order));
    }
    Ok(())
}

/// Build a graph from arguments and print its structure and counts.
pub fn cmd_stats(
    kind_name: &str,
    vertices: &[String],
    edge_specs: &[String],
    json: bool,
) -> GraphResult<()> {
    let graph = build_graph(kind_name, vertices, edge_specs)?;

    if json {
        let mut adjacency = serde_json::Map::new();
        for vertex in graph.vertices() {
            adjacency.insert(vertex.clone(), serde_json::json!(graph.neighbors(vertex)));
        }
        let payload = serde_json::json!({
            "kind": graph.kind(),
            "vertices": graph.vertices(),
            "vertex_count": graph.vertex_count(),
            "edge_count": graph.edge_count(),
            "adjacency": adjacency,
        });
        println!("{}", payload);
    } else {
        print!("{}", graph);
    }
    Ok(())
}

/// Run the scripted demonstration: a handful of small graphs with their
/// structure dumps and traversal orders.
pub fn cmd_demo() -> GraphResult<()> {
    demo_undirected();
    demo_directed();
    demo_edge_ops();
    demo_triangle();
    Ok(())
}

fn demo_undirected() {
    println!("=== Undirected graph ===");
    let graph = GraphBuilder::undirected()
        .edge("A", "B")
        .edge("A", "C")
        .edge("B", "D")
        .edge("C", "D")
        .edge("C", "E")
        .edge("D", "E")
        .edge("D", "F")
        .build();
    print!("{}", graph);

    println!("DFS (recursive) from A: {}", order_line(&graph.dfs(&"A")));
    println!(
        "DFS (iterative) from A: {}",
        order_line(&graph.dfs_iterative(&"A"))
    );
    println!("BFS from A:             {}", order_line(&graph.bfs(&"A")));
    println!();
}

fn demo_directed() {
    println!("=== Directed graph ===");
    let graph = GraphBuilder::directed()
        .edge(1, 2)
        .edge(1, 3)
        .edge(2, 4)
        .edge(3, 4)
        .edge(3, 5)
        .edge(4, 5)
        .edge(5, 6)
        .build();
    print!("{}", graph);

    println!("DFS from 1: {}", order_line(&graph.dfs(&1)));
    println!("BFS from 1: {}", order_line(&graph.bfs(&1)));
    println!();
}

fn demo_edge_ops() {
    println!("=== Edge operations ===");
    let mut graph = GraphBuilder::undirected()
        .edge("X", "Y")
        .edge("Y", "Z")
        .edge("X", "Z")
        .build();
    print!("{}", graph);

    println!("has_edge(X, Y): {}", graph.has_edge(&"X", &"Y"));
    println!("has_edge(X, Z): {}", graph.has_edge(&"X", &"Z"));
    println!("has_edge(Y, X): {}", graph.has_edge(&"Y", &"X"));

    println!("removing edge X-Z");
    graph.remove_edge(&"X", &"Z");
    print!("{}", graph);
    println!("has_edge(X, Z): {}", graph.has_edge(&"X", &"Z"));
    println!();
}

fn demo_triangle() {
    println!("=== Triangle ===");
    let graph = GraphBuilder::undirected()
        .edge("A", "B")
        .edge("B", "C")
        .edge("A", "C")
        .build();
    print!("{}", graph);

    println!("DFS from A: {}", order_line(&graph.dfs(&"A")));
    println!("BFS from A: {}", order_line(&graph.bfs(&"A")));
}
