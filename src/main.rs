use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use bstr::ByteSlice;
use log::info;
use structopt::StructOpt;

use classic_graph::graph::{implied_vertex_count, parse_edge_list};
use classic_graph::{
    bellman_ford, bellman_ford_checked, cheapest_bounded_path, kosaraju_scc,
    kruskal_mst, prim_mst, Direction, Edge, GfaGraph, Graph, Weight,
};

#[derive(StructOpt, Debug)]
#[structopt(
    name = "classic-graph",
    about = "Run a classical graph algorithm on an edge list or GFA file"
)]
enum Command {
    /// Total weight of a minimum spanning tree; edges are always
    /// read as undirected
    Mst {
        /// Use Prim's algorithm instead of Kruskal's
        #[structopt(long)]
        prim: bool,
        #[structopt(flatten)]
        input: Input,
    },
    /// Single-source shortest distances, allowing negative weights
    BellmanFord {
        #[structopt(short, long)]
        source: usize,
        /// Fail if a negative cycle is reachable from the source
        #[structopt(long)]
        check_negative_cycle: bool,
        #[structopt(flatten)]
        input: Input,
    },
    /// Cheapest route using at most K intermediate stops
    Cheapest {
        #[structopt(short, long)]
        source: usize,
        #[structopt(short, long)]
        dest: usize,
        #[structopt(short = "k", long)]
        stops: usize,
        #[structopt(flatten)]
        input: Input,
    },
    /// Strongly connected components of a directed graph
    Scc {
        #[structopt(flatten)]
        input: Input,
    },
}

#[derive(StructOpt, Debug)]
struct Input {
    /// Edge list (`src dst [weight]` per line), or GFA with --gfa
    #[structopt(parse(from_os_str))]
    path: PathBuf,
    /// Read the input as GFA; every link becomes an edge of weight 1
    #[structopt(long)]
    gfa: bool,
    /// Insert every input edge in both directions
    #[structopt(long)]
    undirected: bool,
    /// Number of vertices; defaults to the largest endpoint plus one
    #[structopt(long)]
    vertices: Option<usize>,
}

struct Loaded {
    edges: Vec<Edge>,
    graph: Graph,
    names: Option<GfaGraph>,
}

impl Input {
    fn direction(&self) -> Direction {
        if self.undirected {
            Direction::Undirected
        } else {
            Direction::Directed
        }
    }

    fn load(&self, direction: Direction) -> Result<Loaded> {
        if self.gfa && self.vertices.is_some() {
            bail!("--vertices cannot be combined with --gfa");
        }

        let path = self.path.display();
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open {}", path))?;
        let mut reader = BufReader::new(file);

        if self.gfa {
            let gfa = GfaGraph::from_gfa_reader(&mut reader, direction)
                .with_context(|| format!("Failed to load {}", path))?;
            let edges = gfa.graph.edges().copied().collect();
            let graph = gfa.graph.clone();
            return Ok(Loaded {
                edges,
                graph,
                names: Some(gfa),
            });
        }

        let edges = parse_edge_list(reader)
            .with_context(|| format!("Failed to parse {}", path))?;
        let n = match self.vertices {
            Some(n) => n,
            None => implied_vertex_count(&edges)?,
        };
        let graph =
            Graph::with_direction(n, edges.iter().copied(), direction)?;
        let edges = graph.edges().copied().collect();

        Ok(Loaded {
            edges,
            graph,
            names: None,
        })
    }
}

/// Spanning trees only make sense without edge direction, so the
/// input is always loaded undirected.
fn mst_cost(input: &Input, prim: bool) -> Result<Weight> {
    let loaded = input.load(Direction::Undirected)?;
    let n = loaded.graph.vertex_count();
    let cost = if prim {
        prim_mst(&loaded.graph)
    } else {
        kruskal_mst(&loaded.edges, n)?
    };
    Ok(cost)
}

impl Loaded {
    fn label(&self, v: usize) -> String {
        match &self.names {
            Some(gfa) => gfa.name(v).to_str_lossy().into_owned(),
            None => v.to_string(),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let command = Command::from_args();
    info!("{:?}", command);

    match command {
        Command::Mst { prim, input } => {
            let cost = mst_cost(&input, prim)?;
            println!("Minimum spanning tree cost: {}", cost);
        }
        Command::BellmanFord {
            source,
            check_negative_cycle,
            input,
        } => {
            let loaded = input.load(input.direction())?;
            let distance = if check_negative_cycle {
                bellman_ford_checked(&loaded.graph, source)?
            } else {
                bellman_ford(&loaded.graph, source)?
            };

            println!("Shortest distances from {}:", loaded.label(source));
            for (v, d) in distance.iter().enumerate() {
                match d {
                    Some(d) => println!("{}\t{}", loaded.label(v), d),
                    None => println!("{}\tINF", loaded.label(v)),
                }
            }
        }
        Command::Cheapest {
            source,
            dest,
            stops,
            input,
        } => {
            let loaded = input.load(input.direction())?;
            let n = loaded.graph.vertex_count();
            let cost = cheapest_bounded_path(
                n,
                &loaded.edges,
                source,
                dest,
                stops,
            )?;
            println!("Cheapest cost: {}", cost.unwrap_or(-1));
        }
        Command::Scc { input } => {
            let loaded = input.load(input.direction())?;
            let comps = kosaraju_scc(&loaded.graph);

            println!("# of components: {}", comps.len());
            for comp in comps {
                print!("component:");
                for v in comp {
                    print!(" {}", loaded.label(v));
                }
                println!();
            }
        }
    }

    Ok(())
}
