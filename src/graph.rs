use std::io::prelude::*;

use bstr::BString;
use fxhash::FxHashMap;
use gfa::gfa::GFA;
use gfa::parser::GFAParser;
use log::debug;

use crate::error::{GraphError, Result};

pub type Vertex = usize;
pub type Weight = i64;

/// A weighted, directed edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    pub source: Vertex,
    pub destination: Vertex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: Vertex, destination: Vertex, weight: Weight) -> Edge {
        Edge {
            source,
            destination,
            weight,
        }
    }

    pub fn reversed(&self) -> Edge {
        Edge::new(self.destination, self.source, self.weight)
    }
}

impl From<(Vertex, Vertex, Weight)> for Edge {
    fn from((source, destination, weight): (Vertex, Vertex, Weight)) -> Edge {
        Edge::new(source, destination, weight)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Directed,
    /// Every input edge is inserted in both directions.
    Undirected,
}

pub type AdjacencyList = Vec<Edge>;

/// An adjacency list representation of a graph over the vertices
/// `0..n`. Outgoing edges are kept in insertion order, which fixes
/// the order in which the traversal-based algorithms break ties.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<AdjacencyList>,
    edge_count: usize,
}

impl Graph {
    /// Builds a directed graph with `n` vertices. Fails if any edge
    /// endpoint is outside `0..n`.
    pub fn build<I>(n: usize, edges: I) -> Result<Graph>
    where
        I: IntoIterator<Item = Edge>,
    {
        Graph::with_direction(n, edges, Direction::Directed)
    }

    /// Builds an undirected graph by inserting `(u, v, w)` followed
    /// by `(v, u, w)` for every input edge.
    pub fn undirected<I>(n: usize, edges: I) -> Result<Graph>
    where
        I: IntoIterator<Item = Edge>,
    {
        Graph::with_direction(n, edges, Direction::Undirected)
    }

    pub fn with_direction<I>(
        n: usize,
        edges: I,
        direction: Direction,
    ) -> Result<Graph>
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut adjacency: Vec<AdjacencyList> = vec![Vec::new(); n];
        let mut edge_count = 0;

        for edge in edges {
            check_vertex(edge.source, n)?;
            check_vertex(edge.destination, n)?;

            adjacency[edge.source].push(edge);
            edge_count += 1;

            if direction == Direction::Undirected {
                adjacency[edge.destination].push(edge.reversed());
                edge_count += 1;
            }
        }

        Ok(Graph {
            adjacency,
            edge_count,
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// The outgoing edges of `v`, in insertion order.
    ///
    /// Panics if `v` is not a vertex of the graph.
    pub fn neighbors(&self, v: Vertex) -> &[Edge] {
        assert!(
            v < self.adjacency.len(),
            "vertex {} out of range for graph with {} vertices",
            v,
            self.adjacency.len()
        );
        &self.adjacency[v]
    }

    /// Every edge of the graph, grouped by source vertex.
    pub fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.adjacency.iter().flatten()
    }

    /// The same vertex set with every edge reversed.
    pub fn transpose(&self) -> Graph {
        let mut adjacency: Vec<AdjacencyList> =
            vec![Vec::new(); self.vertex_count()];

        for edge in self.edges() {
            adjacency[edge.destination].push(edge.reversed());
        }

        Graph {
            adjacency,
            edge_count: self.edge_count,
        }
    }
}

pub(crate) fn check_vertex(v: Vertex, vertex_count: usize) -> Result<()> {
    if v < vertex_count {
        Ok(())
    } else {
        Err(GraphError::VertexOutOfRange {
            vertex: v,
            vertex_count,
        })
    }
}

/// The smallest vertex count that contains every endpoint in `edges`.
/// Fails if that count does not fit in a `usize`.
pub fn implied_vertex_count(edges: &[Edge]) -> Result<usize> {
    let mut count = 0;
    for e in edges {
        let largest = e.source.max(e.destination);
        let needed = largest.checked_add(1).ok_or(
            GraphError::VertexOutOfRange {
                vertex: largest,
                vertex_count: usize::MAX,
            },
        )?;
        count = count.max(needed);
    }
    Ok(count)
}

/// Reads a whitespace separated edge list, one `src dst [weight]`
/// triple per line. Missing weights default to 1; blank lines and
/// lines starting with `#` are skipped.
pub fn parse_edge_list<T: BufRead>(reader: T) -> Result<Vec<Edge>> {
    let mut edges = Vec::new();

    for (ix, line) in reader.lines().enumerate() {
        let line = line?;
        let line_no = ix + 1;
        let trimmed = line.trim();

        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        if fields.len() < 2 || fields.len() > 3 {
            return Err(GraphError::Parse {
                line: line_no,
                message: format!(
                    "expected `src dst [weight]`, found {} fields",
                    fields.len()
                ),
            });
        }

        let parse_vertex = |field: &str| -> Result<Vertex> {
            let v = field.parse::<Vertex>().map_err(|err| GraphError::Parse {
                line: line_no,
                message: format!("invalid vertex `{}`: {}", field, err),
            })?;
            if v == Vertex::MAX {
                return Err(GraphError::Parse {
                    line: line_no,
                    message: format!("vertex `{}` is too large", field),
                });
            }
            Ok(v)
        };

        let source = parse_vertex(fields[0])?;
        let destination = parse_vertex(fields[1])?;
        let weight = match fields.get(2) {
            Some(field) => {
                field.parse::<Weight>().map_err(|err| GraphError::Parse {
                    line: line_no,
                    message: format!("invalid weight `{}`: {}", field, err),
                })?
            }
            None => 1,
        };

        edges.push(Edge::new(source, destination, weight));
    }

    debug!("parsed {} edges", edges.len());
    Ok(edges)
}

/// A graph built from the links of a GFA file, including the map
/// required to go from vertex index to GFA segment name
pub struct GfaGraph {
    pub graph: Graph,
    pub inv_names: Vec<BString>,
}

impl GfaGraph {
    /// Constructs a graph from the given GFA input stream, keeping
    /// only the links. Segments are numbered in the order they first
    /// appear in a link and every link gets weight 1.
    pub fn from_gfa_reader<T: BufRead>(
        reader: &mut T,
        direction: Direction,
    ) -> Result<GfaGraph> {
        let lines =
            reader.lines().collect::<std::io::Result<Vec<String>>>()?;

        let parser: GFAParser<Vec<u8>, ()> = GFAParser::new();
        let gfa: GFA<Vec<u8>, ()> = parser
            .parse_lines(lines.iter().map(|l| l.as_bytes()))
            .map_err(|err| GraphError::Gfa(format!("{:?}", err)))?;

        let mut name_map: FxHashMap<Vec<u8>, Vertex> = FxHashMap::default();
        let mut inv_names = Vec::new();

        let mut get_ix = |name: &Vec<u8>| {
            if let Some(ix) = name_map.get(name) {
                *ix
            } else {
                let ix = name_map.len();
                name_map.insert(name.clone(), ix);
                inv_names.push(BString::from(name.clone()));
                ix
            }
        };

        let mut edges = Vec::with_capacity(gfa.links.len());
        for link in gfa.links.iter() {
            let from_ix = get_ix(&link.from_segment);
            let to_ix = get_ix(&link.to_segment);
            edges.push(Edge::new(from_ix, to_ix, 1));
        }

        let graph = Graph::with_direction(inv_names.len(), edges, direction)?;
        debug!(
            "loaded GFA graph with {} segments and {} links",
            graph.vertex_count(),
            gfa.links.len()
        );

        Ok(GfaGraph { graph, inv_names })
    }

    pub fn name(&self, v: Vertex) -> &BString {
        &self.inv_names[v]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_rejects_out_of_range_endpoint() {
        let err = Graph::build(3, vec![Edge::new(0, 3, 1)]).unwrap_err();
        assert!(matches!(
            err,
            GraphError::VertexOutOfRange {
                vertex: 3,
                vertex_count: 3
            }
        ));
    }

    #[test]
    fn neighbors_keep_insertion_order() {
        let graph = Graph::build(
            3,
            vec![Edge::new(0, 2, 5), Edge::new(0, 1, 1), Edge::new(1, 2, 3)],
        )
        .unwrap();

        let dests: Vec<_> =
            graph.neighbors(0).iter().map(|e| e.destination).collect();
        assert_eq!(dests, vec![2, 1]);
        assert_eq!(graph.edge_count(), 3);
    }

    #[test]
    fn undirected_inserts_both_directions() {
        let graph = Graph::undirected(2, vec![Edge::new(0, 1, 7)]).unwrap();
        assert_eq!(graph.neighbors(0), &[Edge::new(0, 1, 7)]);
        assert_eq!(graph.neighbors(1), &[Edge::new(1, 0, 7)]);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn parse_edge_list_skips_comments_and_defaults_weight() {
        let input = "# a comment\n0 1 -4\n\n1 2\n";
        let edges = parse_edge_list(input.as_bytes()).unwrap();
        assert_eq!(edges, vec![Edge::new(0, 1, -4), Edge::new(1, 2, 1)]);
        assert_eq!(implied_vertex_count(&edges).unwrap(), 3);
    }

    #[test]
    fn parse_edge_list_reports_line_number() {
        let input = "0 1 2\n0 x 1\n";
        match parse_edge_list(input.as_bytes()) {
            Err(GraphError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn oversized_vertex_ids_are_rejected() {
        let input = format!("0 1 1\n{} 0 1\n", usize::MAX);
        match parse_edge_list(input.as_bytes()) {
            Err(GraphError::Parse { line, .. }) => assert_eq!(line, 2),
            other => panic!("expected parse error, got {:?}", other),
        }

        let edges = vec![Edge::new(usize::MAX, 0, 1)];
        assert!(matches!(
            implied_vertex_count(&edges),
            Err(GraphError::VertexOutOfRange { .. })
        ));
    }

    #[test]
    fn gfa_links_become_edges() {
        let gfa = "H\tVN:Z:1.0\n\
                   S\ta\tACGT\n\
                   S\tb\tTTGA\n\
                   S\tc\tGGCC\n\
                   L\ta\t+\tb\t+\t0M\n\
                   L\tb\t+\tc\t+\t0M\n\
                   L\tc\t+\ta\t+\t0M\n";
        let mut reader = gfa.as_bytes();
        let loaded =
            GfaGraph::from_gfa_reader(&mut reader, Direction::Directed)
                .unwrap();

        assert_eq!(loaded.graph.vertex_count(), 3);
        assert_eq!(loaded.graph.edge_count(), 3);
        assert_eq!(loaded.name(0), &BString::from("a"));
        assert_eq!(loaded.graph.neighbors(2), &[Edge::new(2, 0, 1)]);
    }
}
