use crate::graph::Vertex;

/// Bookkeeping for one depth-first pass over a graph.
#[derive(Default, Debug, Clone)]
pub struct State {
    pub visited: Vec<bool>,
    /// Vertices in the order they were first entered
    pub preorder: Vec<Vertex>,
    /// Vertices in the order their descendants were exhausted
    pub finished: Vec<Vertex>,
    pub components: Vec<Vec<Vertex>>,
}

impl State {
    pub fn initialize(num_nodes: usize) -> State {
        State {
            visited: vec![false; num_nodes],
            preorder: Vec::with_capacity(num_nodes),
            finished: Vec::with_capacity(num_nodes),
            components: Vec::new(),
        }
    }

    pub fn mut_recur(&mut self, w: Vertex) {
        self.visited[w] = true;
        self.preorder.push(w);
    }

    pub fn mut_return(&mut self, w: Vertex) {
        self.finished.push(w);
    }

    pub fn components(&self) -> &Vec<Vec<Vertex>> {
        &self.components
    }

    /// Closes a component made of every vertex entered since the
    /// preorder had length `start`.
    pub fn add_component(&mut self, start: usize) {
        self.components.push(self.preorder[start..].to_vec());
    }
}
