use crate::domain::graph::Graph;
use crate::domain::metrics::Metrics;
use crate::domain::topo::TopologicalSort;

/// Unreachable-distance sentinel. The halved range leaves headroom so
/// `dist[u] + weight` cannot overflow under a single bounded addition.
pub const INF: i64 = i64::MAX / 2;
pub const NEG_INF: i64 = -INF;

/// No-predecessor sentinel in `PathResult::predecessors`.
pub const NO_PREDECESSOR: usize = usize::MAX;

/// Distances and predecessor links from one source. Unreachable vertices
/// keep `INF` (shortest) or `NEG_INF` (longest) and `NO_PREDECESSOR`.
#[derive(Debug, Clone)]
pub struct PathResult {
    pub distances: Vec<i64>,
    pub predecessors: Vec<usize>,
}

/// The longest-weight path in the whole graph and its total weight.
#[derive(Debug, Clone)]
pub struct CriticalPathResult {
    pub path: Vec<usize>,
    pub length: i64,
}

/// Single-source shortest and longest paths on a DAG, relaxing vertices
/// in Kahn order. If the input turns out to be cyclic (empty Kahn order),
/// the initialized sentinel arrays are returned without relaxing.
pub struct DagPaths<'g> {
    graph: &'g Graph,
    metrics: Metrics,
}

impl<'g> DagPaths<'g> {
    pub fn new(graph: &'g Graph) -> Self {
        Self {
            graph,
            metrics: Metrics::new(),
        }
    }

    pub fn shortest_paths(&mut self, source: usize) -> PathResult {
        let graph = self.graph;
        let n = graph.vertex_count();
        let mut dist = vec![INF; n];
        let mut pred = vec![NO_PREDECESSOR; n];
        dist[source] = 0;

        self.metrics.start_timer();

        let order = TopologicalSort::new(graph).kahn_sort();
        if order.is_empty() {
            self.metrics.stop_timer();
            return PathResult {
                distances: dist,
                predecessors: pred,
            };
        }

        for &u in &order {
            if dist[u] == INF {
                continue;
            }
            for edge in graph.neighbors(u) {
                let next = dist[u] + edge.weight;
                self.metrics.increment_operations();

                // Strict comparison: on ties the earlier-scanned
                // predecessor wins.
                if next < dist[edge.to] {
                    dist[edge.to] = next;
                    pred[edge.to] = u;
                }
            }
        }

        self.metrics.stop_timer();

        PathResult {
            distances: dist,
            predecessors: pred,
        }
    }

    pub fn longest_paths(&mut self, source: usize) -> PathResult {
        let graph = self.graph;
        let n = graph.vertex_count();
        let mut dist = vec![NEG_INF; n];
        let mut pred = vec![NO_PREDECESSOR; n];
        dist[source] = 0;

        self.metrics.start_timer();

        let order = TopologicalSort::new(graph).kahn_sort();
        if order.is_empty() {
            self.metrics.stop_timer();
            return PathResult {
                distances: dist,
                predecessors: pred,
            };
        }

        for &u in &order {
            if dist[u] == NEG_INF {
                continue;
            }
            for edge in graph.neighbors(u) {
                let next = dist[u] + edge.weight;
                self.metrics.increment_operations();

                if next > dist[edge.to] {
                    dist[edge.to] = next;
                    pred[edge.to] = u;
                }
            }
        }

        self.metrics.stop_timer();

        PathResult {
            distances: dist,
            predecessors: pred,
        }
    }

    /// Brute-force critical path: `longest_paths` from every source,
    /// keeping the global maximum. Strictly-greater updates mean the
    /// smallest `(source, target)` pair wins ties. Acceptable only
    /// because it runs on the condensation, which is typically small.
    pub fn find_critical_path(&mut self) -> CriticalPathResult {
        let n = self.graph.vertex_count();
        let mut max_length = NEG_INF;
        let mut end_vertex = NO_PREDECESSOR;
        let mut best: Option<(usize, PathResult)> = None;

        for source in 0..n {
            let result = self.longest_paths(source);
            let mut improved = false;
            for v in 0..n {
                let d = result.distances[v];
                if d != NEG_INF && d > max_length {
                    max_length = d;
                    end_vertex = v;
                    improved = true;
                }
            }
            if improved {
                best = Some((source, result));
            }
        }

        match best {
            Some((source, result)) if end_vertex != NO_PREDECESSOR => {
                let path = reconstruct_path(&result.predecessors, source, end_vertex);
                CriticalPathResult {
                    path,
                    length: max_length,
                }
            }
            _ => CriticalPathResult {
                path: Vec::new(),
                length: 0,
            },
        }
    }

    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    pub fn metrics_mut(&mut self) -> &mut Metrics {
        &mut self.metrics
    }
}

/// Walks predecessor links from `dest` back to `source` and returns the
/// forward vertex sequence. An unreachable `dest` yields an empty path;
/// `source == dest` yields `[source]` even with no predecessor recorded.
pub fn reconstruct_path(predecessors: &[usize], source: usize, dest: usize) -> Vec<usize> {
    let mut path = Vec::new();
    if source != dest && predecessors[dest] == NO_PREDECESSOR {
        return path;
    }

    let mut current = dest;
    loop {
        path.push(current);
        if current == source {
            break;
        }
        current = predecessors[current];
        if current == NO_PREDECESSOR {
            break;
        }
    }

    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconstruct_returns_singleton_when_source_is_dest() {
        let pred = vec![NO_PREDECESSOR, 0];
        assert_eq!(reconstruct_path(&pred, 0, 0), vec![0]);
    }

    #[test]
    fn reconstruct_returns_empty_for_unreachable_dest() {
        let pred = vec![NO_PREDECESSOR, NO_PREDECESSOR];
        assert!(reconstruct_path(&pred, 0, 1).is_empty());
    }

    #[test]
    fn reconstruct_walks_the_predecessor_chain_forward() {
        let pred = vec![NO_PREDECESSOR, 0, 1];
        assert_eq!(reconstruct_path(&pred, 0, 2), vec![0, 1, 2]);
    }
}
