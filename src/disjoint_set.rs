/// Union-find over the elements `0..n`, with path compression and
/// union by rank.
///
/// Elements are plain indices. Passing an index outside `0..n` is a
/// logic error and panics.
#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl DisjointSet {
    /// Creates `n` singleton sets.
    pub fn new(n: usize) -> DisjointSet {
        DisjointSet {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the representative of the set containing `x`.
    ///
    /// Every node on the path from `x` to its root is re-pointed
    /// directly at the root, so the lookup mutates the forest without
    /// changing the partition.
    pub fn find(&mut self, x: usize) -> usize {
        self.check(x);

        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = x;
        while current != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }

        root
    }

    /// Merges the sets containing `a` and `b`. Returns `false` if they
    /// already shared a set.
    ///
    /// The lower-rank root is attached under the higher-rank one. On
    /// equal ranks `b`'s root goes under `a`'s root and `a`'s root
    /// grows one rank.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);

        if root_a == root_b {
            return false;
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Greater => self.parent[root_b] = root_a,
            std::cmp::Ordering::Less => self.parent[root_a] = root_b,
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }

        true
    }

    pub fn same_set(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    fn check(&self, x: usize) {
        assert!(
            x < self.parent.len(),
            "element {} out of range for disjoint set of size {}",
            x,
            self.parent.len()
        );
    }
}
