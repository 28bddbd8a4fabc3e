//! Graph traversal algorithms (BFS + DFS).

use std::collections::{HashSet, VecDeque};

use log::trace;

use crate::types::{GraphError, GraphResult, NodeId};

use super::AdjacencyGraph;

/// BFS traversal from `root`, returning nodes in breadth-first discovery order.
///
/// Neighbors are enqueued whenever they are unvisited at enqueue time, but a
/// node is marked visited (and appended to the result) only when dequeued —
/// so a node may sit in the queue more than once, yet is visited at most once.
///
/// Errors with [`GraphError::InvalidRoot`] if `root` has no adjacency entry,
/// and [`GraphError::UnknownNode`] if a dequeued node has none (a dangling
/// neighbor reference).
pub fn bfs<N: NodeId>(graph: &AdjacencyGraph<N>, root: &N) -> GraphResult<Vec<N>, N> {
    if !graph.contains(root) {
        return Err(GraphError::InvalidRoot(root.clone()));
    }

    let mut visited: HashSet<N> = HashSet::new();
    let mut order: Vec<N> = Vec::new();
    let mut queue: VecDeque<N> = VecDeque::new();
    queue.push_back(root.clone());

    while let Some(node) = queue.pop_front() {
        let neighbors = graph
            .neighbors(&node)
            .ok_or_else(|| GraphError::UnknownNode(node.clone()))?;

        if !visited.contains(&node) {
            order.push(node.clone());
            visited.insert(node);
        }

        for neighbor in neighbors {
            if !visited.contains(neighbor) {
                queue.push_back(neighbor.clone());
            }
        }
    }

    trace!(
        "bfs from {:?} visited {} of {} nodes",
        root,
        order.len(),
        graph.node_count()
    );
    Ok(order)
}

/// DFS traversal from `root`, returning nodes in depth-first pre-order.
///
/// Each node's neighbors are explored in list order, a branch fully before
/// its siblings. Errors with [`GraphError::InvalidRoot`] if `root` has no
/// adjacency entry, and [`GraphError::UnknownNode`] if any node reached
/// through an edge has none.
pub fn dfs<N: NodeId>(graph: &AdjacencyGraph<N>, root: &N) -> GraphResult<Vec<N>, N> {
    if !graph.contains(root) {
        return Err(GraphError::InvalidRoot(root.clone()));
    }

    let mut visited: HashSet<N> = HashSet::new();
    let mut order: Vec<N> = Vec::new();
    dfs_visit(graph, root, &mut visited, &mut order)?;

    trace!(
        "dfs from {:?} visited {} of {} nodes",
        root,
        order.len(),
        graph.node_count()
    );
    Ok(order)
}

fn dfs_visit<N: NodeId>(
    graph: &AdjacencyGraph<N>,
    node: &N,
    visited: &mut HashSet<N>,
    order: &mut Vec<N>,
) -> GraphResult<(), N> {
    if visited.contains(node) {
        return Ok(());
    }

    let neighbors = graph
        .neighbors(node)
        .ok_or_else(|| GraphError::UnknownNode(node.clone()))?;

    visited.insert(node.clone());
    order.push(node.clone());

    for neighbor in neighbors {
        dfs_visit(graph, neighbor, visited, order)?;
    }
    Ok(())
}
