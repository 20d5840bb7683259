//! Minimum spanning trees, by Kruskal's and Prim's algorithms.
//!
//! Both assume a connected graph with non-negative weights. On a
//! disconnected graph Kruskal returns the weight of a spanning forest
//! and Prim only the weight of the tree around its start vertex.
//! Totals saturate at `Weight::MAX`.

use log::{debug, trace};

use crate::disjoint_set::DisjointSet;
use crate::error::Result;
use crate::frontier::Frontier;
use crate::graph::{check_vertex, Edge, Graph, Vertex, Weight};

/// Total weight of a minimum spanning tree over `vertex_count`
/// vertices, built from a raw edge list.
///
/// Edges are sorted stably by weight, so equal weights are considered
/// in input order.
pub fn kruskal_mst(edges: &[Edge], vertex_count: usize) -> Result<Weight> {
    for edge in edges {
        check_vertex(edge.source, vertex_count)?;
        check_vertex(edge.destination, vertex_count)?;
    }

    let mut sorted = edges.to_vec();
    sorted.sort_by_key(|edge| edge.weight);

    let mut sets = DisjointSet::new(vertex_count);
    let target = vertex_count.saturating_sub(1);
    let mut accepted = 0;
    let mut cost: Weight = 0;

    for edge in sorted {
        if accepted == target {
            break;
        }

        if sets.union(edge.source, edge.destination) {
            trace!(
                "kruskal: accept ({}, {}, {})",
                edge.source,
                edge.destination,
                edge.weight
            );
            cost = cost.saturating_add(edge.weight);
            accepted += 1;
        }
    }

    debug!(
        "kruskal: {} of {} tree edges accepted, cost {}",
        accepted, target, cost
    );
    Ok(cost)
}

/// Total weight of a minimum spanning tree grown from vertex 0.
pub fn prim_mst(graph: &Graph) -> Weight {
    if graph.vertex_count() == 0 {
        return 0;
    }
    prim_mst_from(graph, 0)
}

/// Total weight of a minimum spanning tree grown from `start`.
///
/// Panics if `start` is not a vertex of the graph.
pub fn prim_mst_from(graph: &Graph, start: Vertex) -> Weight {
    let mut visited = vec![false; graph.vertex_count()];
    let mut frontier = Frontier::new(|entry: &(Vertex, Weight)| entry.1);
    frontier.push((start, 0));

    let mut cost: Weight = 0;
    let mut tree_size = 0;

    while let Some((v, edge_cost)) = frontier.pop() {
        if visited[v] {
            continue;
        }

        visited[v] = true;
        cost = cost.saturating_add(edge_cost);
        tree_size += 1;
        trace!("prim: add vertex {} at cost {}", v, edge_cost);

        for edge in graph.neighbors(v) {
            if !visited[edge.destination] {
                frontier.push((edge.destination, edge.weight));
            }
        }
    }

    debug!(
        "prim: spanned {} of {} vertices, cost {}",
        tree_size,
        graph.vertex_count(),
        cost
    );
    cost
}
