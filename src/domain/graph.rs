use std::collections::HashMap;

/// A directed edge with a signed weight. Stored in `adj[from]` in
/// insertion order; parallel edges and self-loops are preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub weight: i64,
}

/// Adjacency-list container for a directed or undirected edge-weighted
/// graph over vertex ids `0..n`. Vertex count and directedness are fixed
/// at construction. Out-of-range vertex ids are a programming error and
/// panic via indexing.
#[derive(Debug, Clone)]
pub struct Graph {
    directed: bool,
    adj: Vec<Vec<Edge>>,
    node_weights: HashMap<usize, i64>,
}

impl Graph {
    pub fn new(n: usize, directed: bool) -> Self {
        Self {
            directed,
            adj: vec![Vec::new(); n],
            node_weights: HashMap::new(),
        }
    }

    /// Appends `(u, v, weight)` to `adj[u]`; an undirected graph also
    /// records the mirror edge `(v, u, weight)`.
    pub fn add_edge(&mut self, u: usize, v: usize, weight: i64) {
        self.adj[u].push(Edge { from: u, to: v, weight });
        if !self.directed {
            self.adj[v].push(Edge { from: v, to: u, weight });
        }
    }

    pub fn set_node_weight(&mut self, node: usize, weight: i64) {
        self.node_weights.insert(node, weight);
    }

    /// Node weight, defaulting to 0. Unused by the algorithms but
    /// preserved by `reverse`.
    pub fn node_weight(&self, node: usize) -> i64 {
        self.node_weights.get(&node).copied().unwrap_or(0)
    }

    pub fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    pub fn edge_count(&self) -> usize {
        let total: usize = self.adj.iter().map(|edges| edges.len()).sum();
        if self.directed {
            total
        } else {
            total / 2
        }
    }

    /// Outgoing edges of `u` in insertion order.
    pub fn neighbors(&self, u: usize) -> &[Edge] {
        &self.adj[u]
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// New graph with every stored edge `(u, v, w)` flipped to `(v, u, w)`;
    /// node weights copied verbatim.
    pub fn reverse(&self) -> Graph {
        let mut reversed = Graph::new(self.vertex_count(), self.directed);
        for edges in &self.adj {
            for edge in edges {
                reversed.adj[edge.to].push(Edge {
                    from: edge.to,
                    to: edge.from,
                    weight: edge.weight,
                });
            }
        }
        reversed.node_weights = self.node_weights.clone();
        reversed
    }
}
