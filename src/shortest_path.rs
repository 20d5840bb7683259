//! Single-source shortest paths.
//!
//! Distances are `Option<Weight>`, with `None` marking a vertex that
//! was never reached.

use std::collections::VecDeque;

use log::{debug, trace};

use crate::error::{GraphError, Result};
use crate::graph::{check_vertex, Edge, Graph, Vertex, Weight};

pub type Distances = Vec<Option<Weight>>;

/// Bellman-Ford shortest distances from `source`, tolerating negative
/// edge weights.
///
/// Runs exactly `v - 1` relaxation passes and nothing more. If a
/// negative cycle is reachable from `source` the returned distances
/// are not final; use [`bellman_ford_checked`] to detect that case.
pub fn bellman_ford(graph: &Graph, source: Vertex) -> Result<Distances> {
    check_vertex(source, graph.vertex_count())?;

    let mut distance: Distances = vec![None; graph.vertex_count()];
    distance[source] = Some(0);

    for pass in 1..graph.vertex_count() {
        let updated = relax_all(graph, &mut distance);
        trace!("bellman-ford: pass {} relaxed {} edges", pass, updated);
    }

    debug!(
        "bellman-ford: {} of {} vertices reachable from {}",
        distance.iter().filter(|d| d.is_some()).count(),
        graph.vertex_count(),
        source
    );
    Ok(distance)
}

/// Like [`bellman_ford`], followed by one extra pass over every edge.
/// Fails with [`GraphError::NegativeCycle`] if that pass still finds
/// an improvement.
pub fn bellman_ford_checked(
    graph: &Graph,
    source: Vertex,
) -> Result<Distances> {
    let mut distance = bellman_ford(graph, source)?;

    if relax_all(graph, &mut distance) > 0 {
        return Err(GraphError::NegativeCycle);
    }

    Ok(distance)
}

fn relax_all(graph: &Graph, distance: &mut Distances) -> usize {
    let mut updated = 0;

    for edge in graph.edges() {
        if let Some(from) = distance[edge.source] {
            let candidate = from.saturating_add(edge.weight);
            if improves(candidate, distance[edge.destination]) {
                distance[edge.destination] = Some(candidate);
                updated += 1;
            }
        }
    }

    updated
}

fn improves(candidate: Weight, best: Option<Weight>) -> bool {
    match best {
        Some(best) => candidate < best,
        None => true,
    }
}

#[derive(Debug, Clone, Copy)]
struct Hop {
    vertex: Vertex,
    cost: Weight,
    stops: usize,
}

/// The cheapest cost from `source` to `dest` using at most `k`
/// intermediate stops, or `None` if no such route exists.
///
/// This is a breadth-first relaxation: vertices are never finalized,
/// so a vertex may be queued again whenever a cheaper cost reaches
/// it. The queue can grow quickly on dense graphs with a large `k`.
pub fn cheapest_bounded_path(
    vertex_count: usize,
    edges: &[Edge],
    source: Vertex,
    dest: Vertex,
    k: usize,
) -> Result<Option<Weight>> {
    check_vertex(source, vertex_count)?;
    check_vertex(dest, vertex_count)?;
    let graph = Graph::build(vertex_count, edges.iter().copied())?;

    let mut distance: Distances = vec![None; vertex_count];
    distance[source] = Some(0);

    let mut queue = VecDeque::new();
    queue.push_back(Hop {
        vertex: source,
        cost: 0,
        stops: 0,
    });

    let mut dequeued = 0;
    while let Some(hop) = queue.pop_front() {
        dequeued += 1;
        if hop.stops > k {
            continue;
        }

        for edge in graph.neighbors(hop.vertex) {
            let candidate = hop.cost.saturating_add(edge.weight);
            if improves(candidate, distance[edge.destination]) {
                trace!(
                    "cheapest: {} reached at {} after {} stops",
                    edge.destination,
                    candidate,
                    hop.stops
                );
                distance[edge.destination] = Some(candidate);
                queue.push_back(Hop {
                    vertex: edge.destination,
                    cost: candidate,
                    stops: hop.stops + 1,
                });
            }
        }
    }

    debug!(
        "cheapest: {} queue entries processed, k = {}",
        dequeued, k
    );
    Ok(distance[dest])
}
