//! 100K node traversal demo.
//!
//! Builds a deterministic sparse graph and times BFS/DFS over it.

use std::time::Instant;

use graphwalk::{AdjacencyGraph, GraphResult};

fn main() -> GraphResult<(), usize> {
    env_logger::init();

    let node_count = 100_000;
    let edges_per_node = 3;

    println!("Creating graph with {} nodes...", node_count);
    let start = Instant::now();

    let graph: AdjacencyGraph<usize> = (0..node_count)
        .map(|i| {
            let neighbors = (1..=edges_per_node)
                .map(|j| (i + j * 7) % node_count)
                .filter(|&target| target != i)
                .collect();
            (i, neighbors)
        })
        .collect();

    println!(
        "  Graph built in {:?} ({} nodes, {} edges)",
        start.elapsed(),
        graph.node_count(),
        graph.edge_count()
    );

    let start = Instant::now();
    let order = graph.bfs(&0)?;
    println!("  BFS visited {} nodes in {:?}", order.len(), start.elapsed());

    let start = Instant::now();
    let order = graph.dfs(&0)?;
    println!("  DFS visited {} nodes in {:?}", order.len(), start.elapsed());

    Ok(())
}
