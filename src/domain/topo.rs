use crate::domain::graph::Graph;
use crate::domain::metrics::Metrics;
use std::collections::VecDeque;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Color {
    White,
    Gray,
    Black,
}

/// Topological ordering and cycle detection over a borrowed graph.
pub struct TopologicalSort<'g> {
    graph: &'g Graph,
    metrics: Metrics,
}

impl<'g> TopologicalSort<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            metrics: Metrics::new(),
        }
    }

    /// Kahn's algorithm. Returns a topological ordering, or an empty
    /// sequence if the graph contains a cycle.
    ///
    /// Tie-breaks are deterministic: the seed scan adds zero-in-degree
    /// vertices in ascending id order, the queue is FIFO, and successors
    /// are enqueued in the insertion order of the edge that drops their
    /// in-degree to zero.
    pub fn kahn_sort(&mut self) -> Vec<usize> {
        let graph = self.graph;
        let n = graph.vertex_count();
        let mut in_degree = vec![0usize; n];

        self.metrics.start_timer();

        for u in 0..n {
            for edge in graph.neighbors(u) {
                in_degree[edge.to] += 1;
                self.metrics.increment_operations();
            }
        }

        let mut queue: VecDeque<usize> = VecDeque::new();
        for v in 0..n {
            if in_degree[v] == 0 {
                queue.push_back(v);
                self.metrics.increment_operations();
            }
        }

        let mut order: Vec<usize> = Vec::with_capacity(n);
        while let Some(u) = queue.pop_front() {
            order.push(u);
            self.metrics.increment_operations();

            for edge in graph.neighbors(u) {
                in_degree[edge.to] -= 1;
                self.metrics.increment_operations();

                if in_degree[edge.to] == 0 {
                    queue.push_back(edge.to);
                    self.metrics.increment_operations();
                }
            }
        }

        self.metrics.stop_timer();

        if order.len() != n {
            return Vec::new();
        }
        order
    }

    /// DFS-based topological sort: reverse postorder over an iterative
    /// DFS that visits vertices in ascending id order and neighbors in
    /// insertion order. The output is undefined on a cyclic graph;
    /// callers gate with `is_dag`. Resets the metrics before running.
    pub fn dfs_sort(&mut self) -> Vec<usize> {
        let graph = self.graph;
        let n = graph.vertex_count();
        let mut visited = vec![false; n];
        let mut postorder: Vec<usize> = Vec::with_capacity(n);

        self.metrics.reset();
        self.metrics.start_timer();

        let mut frames: Vec<(usize, usize)> = Vec::new();
        for start in 0..n {
            if visited[start] {
                continue;
            }
            visited[start] = true;
            self.metrics.increment_operations();
            frames.push((start, 0));

            while let Some(frame) = frames.last_mut() {
                let u = frame.0;
                if frame.1 < graph.neighbors(u).len() {
                    let w = graph.neighbors(u)[frame.1].to;
                    frame.1 += 1;
                    self.metrics.increment_operations();

                    if !visited[w] {
                        visited[w] = true;
                        self.metrics.increment_operations();
                        frames.push((w, 0));
                    }
                } else {
                    frames.pop();
                    postorder.push(u);
                }
            }
        }

        self.metrics.stop_timer();

        postorder.reverse();
        postorder
    }

    /// Three-color DFS cycle detection: false iff some DFS finds a back
    /// edge to a vertex still on the current spine.
    pub fn is_dag(&self) -> bool {
        let graph = self.graph;
        let n = graph.vertex_count();
        let mut color = vec![Color::White; n];

        let mut frames: Vec<(usize, usize)> = Vec::new();
        for start in 0..n {
            if color[start] != Color::White {
                continue;
            }
            color[start] = Color::Gray;
            frames.push((start, 0));

            while let Some(frame) = frames.last_mut() {
                let u = frame.0;
                if frame.1 < graph.neighbors(u).len() {
                    let w = graph.neighbors(u)[frame.1].to;
                    frame.1 += 1;

                    match color[w] {
                        Color::Gray => return false,
                        Color::White => {
                            color[w] = Color::Gray;
                            frames.push((w, 0));
                        }
                        Color::Black => {}
                    }
                } else {
                    color[u] = Color::Black;
                    frames.pop();
                }
            }
        }

        true
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}
