use serde::Serialize;

/// Aggregate counters for one analyzed graph, emitted in the final event
/// and the stderr summary line.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AnalysisStats {
    pub vertices: usize,
    pub edges: usize,
    pub components: usize,
    pub condensation_vertices: usize,
    pub condensation_edges: usize,
    pub operations_total: u64,
}
