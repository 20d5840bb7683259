//! Strongly connected components by Kosaraju's algorithm.
//!
//! Both depth-first passes run on an explicit instruction stack
//! instead of the call stack, and visit vertices in exactly the
//! order a recursive DFS would.

use std::collections::VecDeque;

use log::debug;

use crate::graph::{Graph, Vertex};
use crate::state::State;

#[derive(Debug)]
enum Inst {
    /// Enter `w` and schedule its outgoing edges
    Recur(Vertex),
    /// Follow an edge to `u` unless `u` was already entered
    Loop(Vertex),
    /// Every descendant of `w` has been explored
    Return(Vertex),
}

type InstStack = VecDeque<Inst>;

fn run_inst(
    inst: Inst,
    stack: &mut InstStack,
    state: &mut State,
    graph: &Graph,
) {
    match inst {
        Inst::Recur(w) => {
            state.mut_recur(w);
            stack.push_front(Inst::Return(w));

            graph.neighbors(w).iter().rev().for_each(|edge| {
                stack.push_front(Inst::Loop(edge.destination))
            });
        }
        Inst::Loop(u) => {
            if !state.visited[u] {
                stack.push_front(Inst::Recur(u));
            }
        }
        Inst::Return(w) => state.mut_return(w),
    }
}

fn depth_first(graph: &Graph, root: Vertex, state: &mut State) {
    let mut stack: InstStack = VecDeque::new();
    stack.push_front(Inst::Recur(root));
    while let Some(inst) = stack.pop_front() {
        run_inst(inst, &mut stack, state, graph);
    }
}

/// Vertices of `graph` ordered by DFS finishing time, starting a new
/// search from each unvisited vertex in index order.
pub fn finishing_order(graph: &Graph) -> Vec<Vertex> {
    let mut state = State::initialize(graph.vertex_count());

    for n in 0..graph.vertex_count() {
        if !state.visited[n] {
            depth_first(graph, n, &mut state);
        }
    }

    state.finished
}

/// The strongly connected components of a directed graph.
///
/// Components are listed in the order they are discovered and each
/// lists its vertices in DFS discovery order. Every vertex appears in
/// exactly one component.
pub fn kosaraju_scc(graph: &Graph) -> Vec<Vec<Vertex>> {
    let order = finishing_order(graph);
    let transpose = graph.transpose();

    let mut state = State::initialize(graph.vertex_count());
    for &n in order.iter().rev() {
        if !state.visited[n] {
            let start = state.preorder.len();
            depth_first(&transpose, n, &mut state);
            state.add_component(start);
        }
    }

    debug!(
        "kosaraju: {} components over {} vertices",
        state.components().len(),
        graph.vertex_count()
    );
    state.components
}

/// Labels every vertex with the index of the component containing it.
///
/// Panics if a component names a vertex outside `0..vertex_count`.
pub fn component_labels(
    components: &[Vec<Vertex>],
    vertex_count: usize,
) -> Vec<usize> {
    let mut labels = vec![usize::MAX; vertex_count];
    for (ix, comp) in components.iter().enumerate() {
        for &v in comp {
            labels[v] = ix;
        }
    }
    labels
}
