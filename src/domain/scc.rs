use crate::domain::graph::Graph;
use crate::domain::metrics::Metrics;
use std::collections::HashSet;

const UNSEEN: usize = usize::MAX;

/// Tarjan's strongly-connected-components algorithm over a borrowed graph,
/// plus construction of the condensation DAG.
///
/// Components are emitted in the order they close, which is a reverse
/// topological order of the condensation: a component is emitted before
/// any component that reaches it. Within one component the vertex order
/// is the stack pop order. Downstream code relies on this ordering.
///
/// The DFS uses an explicit work-stack so deep graphs cannot overflow
/// the call stack.
pub struct TarjanScc<'g> {
    graph: &'g Graph,
    metrics: Metrics,
    sccs: Option<Vec<Vec<usize>>>,
}

impl<'g> TarjanScc<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            metrics: Metrics::new(),
            sccs: None,
        }
    }

    /// Runs the full scan, caching and returning the component list.
    pub fn find_sccs(&mut self) -> &[Vec<usize>] {
        let graph = self.graph;
        let n = graph.vertex_count();

        let mut disc = vec![UNSEEN; n];
        let mut low = vec![0usize; n];
        let mut on_stack = vec![false; n];
        let mut stack: Vec<usize> = Vec::new();
        let mut sccs: Vec<Vec<usize>> = Vec::new();
        let mut time = 0usize;

        self.metrics.start_timer();

        // (vertex, index of the next outgoing edge to inspect)
        let mut frames: Vec<(usize, usize)> = Vec::new();

        for root in 0..n {
            if disc[root] != UNSEEN {
                continue;
            }
            disc[root] = time;
            low[root] = time;
            time += 1;
            stack.push(root);
            on_stack[root] = true;
            self.metrics.increment_operations();
            frames.push((root, 0));

            while let Some(frame) = frames.last_mut() {
                let v = frame.0;
                if frame.1 < graph.neighbors(v).len() {
                    let edge = graph.neighbors(v)[frame.1];
                    frame.1 += 1;
                    self.metrics.increment_operations();

                    let w = edge.to;
                    if disc[w] == UNSEEN {
                        disc[w] = time;
                        low[w] = time;
                        time += 1;
                        stack.push(w);
                        on_stack[w] = true;
                        self.metrics.increment_operations();
                        frames.push((w, 0));
                    } else if on_stack[w] {
                        low[v] = low[v].min(disc[w]);
                    }
                } else {
                    frames.pop();
                    if low[v] == disc[v] {
                        let mut component = Vec::new();
                        while let Some(x) = stack.pop() {
                            on_stack[x] = false;
                            component.push(x);
                            if x == v {
                                break;
                            }
                        }
                        sccs.push(component);
                    }
                    if let Some(parent) = frames.last_mut() {
                        low[parent.0] = low[parent.0].min(low[v]);
                    }
                }
            }
        }

        self.metrics.stop_timer();

        self.sccs.insert(sccs).as_slice()
    }

    /// Cached accessor; runs `find_sccs` on first call.
    pub fn sccs(&mut self) -> &[Vec<usize>] {
        if self.sccs.is_none() {
            self.find_sccs();
        }
        self.sccs.as_deref().unwrap_or(&[])
    }

    /// Deduplicated condensation: one vertex per component (component
    /// index = condensation vertex id), at most one edge per ordered
    /// component pair, carrying the weight of the first qualifying edge
    /// in scan order (`u` ascending, then insertion order).
    pub fn build_condensation(&mut self) -> Graph {
        if self.sccs.as_ref().map_or(true, |sccs| sccs.is_empty()) {
            self.find_sccs();
        }
        let sccs = self.sccs.as_deref().unwrap_or(&[]);
        let graph = self.graph;

        let mut vertex_to_scc = vec![0usize; graph.vertex_count()];
        for (scc_index, component) in sccs.iter().enumerate() {
            for &v in component {
                vertex_to_scc[v] = scc_index;
            }
        }

        let mut condensation = Graph::new(sccs.len(), true);
        let mut added: HashSet<(usize, usize)> = HashSet::new();
        for u in 0..graph.vertex_count() {
            let a = vertex_to_scc[u];
            for edge in graph.neighbors(u) {
                let b = vertex_to_scc[edge.to];
                if a != b && added.insert((a, b)) {
                    condensation.add_edge(a, b, edge.weight);
                }
            }
        }

        condensation
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}
