pub mod disjoint_set;
pub mod error;
pub mod flood_fill;
pub mod frontier;
pub mod graph;
pub mod mst;
pub mod scc;
pub mod shortest_path;
pub mod state;

pub use disjoint_set::DisjointSet;
pub use error::{GraphError, Result};
pub use flood_fill::flood_fill;
pub use graph::{Direction, Edge, GfaGraph, Graph, Vertex, Weight};
pub use mst::{kruskal_mst, prim_mst};
pub use scc::kosaraju_scc;
pub use shortest_path::{
    bellman_ford, bellman_ford_checked, cheapest_bounded_path,
};
