//! Basic build -> traverse flow.

use graphwalk::{GraphBuilder, GraphResult};

fn main() -> GraphResult<(), &'static str> {
    env_logger::init();

    // Build the graph
    let mut builder = GraphBuilder::new();
    builder.edge("A", "B");
    builder.edge("A", "C");
    builder.edge("A", "D");
    builder.edge("B", "H");
    builder.edge("D", "E");
    builder.edge("D", "F");
    let graph = builder.build();

    println!(
        "Graph created with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    // Traverse breadth-first, then depth-first
    let breadth = graph.bfs(&"A")?;
    println!("BFS from A: {}", breadth.join(" "));

    let depth = graph.dfs(&"A")?;
    println!("DFS from A: {}", depth.join(" "));

    Ok(())
}
