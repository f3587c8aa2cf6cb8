use crate::domain::dag_paths::{reconstruct_path, CriticalPathResult, DagPaths, PathResult};
use crate::domain::dag_paths::{INF, NEG_INF};
use crate::domain::metrics::MetricsSnapshot;
use crate::domain::scc::TarjanScc;
use crate::domain::topo::TopologicalSort;
use crate::infrastructure::graph_json_adapter::{to_graph, GraphFileDto};
use crate::usecase::event::AppEvent;
use crate::usecase::stats::AnalysisStats;
use anyhow::Result;
use tokio::sync::mpsc;

/// One reachable target of a path run: its distance and the
/// reconstructed vertex sequence from the source.
#[derive(Debug, Clone)]
pub struct PathEntry {
    pub target: usize,
    pub distance: i64,
    pub path: Vec<usize>,
}

#[derive(Debug, Clone)]
pub struct PathSection {
    pub source: usize,
    pub entries: Vec<PathEntry>,
    pub metrics: MetricsSnapshot,
}

/// Everything the CLI needs to render one analyzed graph. The path
/// sections are absent when the condensation is empty.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub vertices: usize,
    pub edges: usize,
    pub weight_warning: Option<String>,
    pub sccs: Vec<Vec<usize>>,
    pub scc_metrics: MetricsSnapshot,
    pub condensation_vertices: usize,
    pub condensation_edges: usize,
    /// `None` when the sorted graph contains a cycle; always `Some` for
    /// a condensation.
    pub topo_order: Option<Vec<usize>>,
    pub topo_metrics: MetricsSnapshot,
    pub shortest: Option<PathSection>,
    pub longest: Option<PathSection>,
    pub critical: Option<CriticalPathResult>,
    pub critical_metrics: MetricsSnapshot,
    pub stats: AnalysisStats,
}

/// Drives the full pipeline for one parsed graph description:
/// Tarjan SCCs, condensation, topological order, then shortest, longest,
/// and critical paths over the condensation.
pub async fn analyze_graph(
    input: &GraphFileDto,
    sink: Option<mpsc::Sender<AppEvent>>,
) -> Result<AnalysisReport> {
    let graph = to_graph(input)?;

    let weight_warning = match input.weight_model.as_deref() {
        Some(model) if model != "edge" => Some(format!("weight model is {model}")),
        _ => None,
    };

    emit(&sink, AppEvent::PhaseStarted { name: "scc".into() }).await;
    let mut tarjan = TarjanScc::new(&graph);
    tarjan.find_sccs();
    let sccs = tarjan.sccs().to_vec();
    let scc_metrics = tarjan.metrics().snapshot();
    emit(
        &sink,
        AppEvent::SccComputed {
            vertices: graph.vertex_count(),
            edges: graph.edge_count(),
            components: sccs.len(),
        },
    )
    .await;
    emit(&sink, AppEvent::PhaseFinished { name: "scc".into() }).await;

    emit(
        &sink,
        AppEvent::PhaseStarted {
            name: "condensation".into(),
        },
    )
    .await;
    let condensation = tarjan.build_condensation();
    emit(
        &sink,
        AppEvent::CondensationBuilt {
            vertices: condensation.vertex_count(),
            edges: condensation.edge_count(),
        },
    )
    .await;
    emit(
        &sink,
        AppEvent::PhaseFinished {
            name: "condensation".into(),
        },
    )
    .await;

    emit(&sink, AppEvent::PhaseStarted { name: "topo".into() }).await;
    let mut topo = TopologicalSort::new(&condensation);
    let topo_order = if topo.is_dag() {
        Some(topo.kahn_sort())
    } else {
        None
    };
    let topo_metrics = topo.metrics().snapshot();
    emit(
        &sink,
        AppEvent::TopoSorted {
            order: topo_order.clone().unwrap_or_default(),
        },
    )
    .await;
    emit(&sink, AppEvent::PhaseFinished { name: "topo".into() }).await;

    let mut shortest = None;
    let mut longest = None;
    let mut critical = None;
    let mut critical_metrics = MetricsSnapshot::default();

    if condensation.vertex_count() > 0 {
        emit(&sink, AppEvent::PhaseStarted { name: "paths".into() }).await;

        let source = match input.source {
            Some(vertex) => scc_containing(&sccs, vertex),
            None => 0,
        };
        let mut paths = DagPaths::new(&condensation);

        let result = paths.shortest_paths(source);
        let section = path_section(source, &result, INF, paths.metrics().snapshot());
        emit(
            &sink,
            AppEvent::PathsComputed {
                kind: "shortest".into(),
                source,
                reachable: section.entries.len(),
            },
        )
        .await;
        shortest = Some(section);

        paths.metrics_mut().reset();
        let result = paths.longest_paths(source);
        let section = path_section(source, &result, NEG_INF, paths.metrics().snapshot());
        emit(
            &sink,
            AppEvent::PathsComputed {
                kind: "longest".into(),
                source,
                reachable: section.entries.len(),
            },
        )
        .await;
        longest = Some(section);

        paths.metrics_mut().reset();
        let result = paths.find_critical_path();
        critical_metrics = paths.metrics().snapshot();
        emit(
            &sink,
            AppEvent::CriticalPathFound {
                length: result.length,
                vertices: result.path.len(),
            },
        )
        .await;
        critical = Some(result);

        emit(&sink, AppEvent::PhaseFinished { name: "paths".into() }).await;
    }

    let stats = AnalysisStats {
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        components: sccs.len(),
        condensation_vertices: condensation.vertex_count(),
        condensation_edges: condensation.edge_count(),
        operations_total: scc_metrics.operations
            + topo_metrics.operations
            + shortest.as_ref().map_or(0, |s| s.metrics.operations)
            + longest.as_ref().map_or(0, |s| s.metrics.operations)
            + critical_metrics.operations,
    };

    emit(
        &sink,
        AppEvent::Finished {
            stats: stats.clone(),
        },
    )
    .await;

    Ok(AnalysisReport {
        vertices: graph.vertex_count(),
        edges: graph.edge_count(),
        weight_warning,
        sccs,
        scc_metrics,
        condensation_vertices: condensation.vertex_count(),
        condensation_edges: condensation.edge_count(),
        topo_order,
        topo_metrics,
        shortest,
        longest,
        critical,
        critical_metrics,
        stats,
    })
}

/// Index of the first component containing `vertex`, falling back to 0.
fn scc_containing(sccs: &[Vec<usize>], vertex: usize) -> usize {
    sccs.iter()
        .position(|component| component.contains(&vertex))
        .unwrap_or(0)
}

fn path_section(
    source: usize,
    result: &PathResult,
    unreachable: i64,
    metrics: MetricsSnapshot,
) -> PathSection {
    let entries = result
        .distances
        .iter()
        .enumerate()
        .filter(|&(_, &d)| d != unreachable)
        .map(|(target, &distance)| PathEntry {
            target,
            distance,
            path: reconstruct_path(&result.predecessors, source, target),
        })
        .collect();
    PathSection {
        source,
        entries,
        metrics,
    }
}

async fn emit(sink: &Option<mpsc::Sender<AppEvent>>, event: AppEvent) {
    if let Some(tx) = sink {
        let _ = tx.send(event).await;
    }
}
