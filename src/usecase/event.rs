use crate::usecase::stats::AnalysisStats;
use serde::Serialize;

/// Machine-readable progress events delivered over an mpsc channel to
/// the NDJSON printer when `--emit-events` is set.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type")]
pub enum AppEvent {
    PhaseStarted {
        name: String,
    },
    PhaseFinished {
        name: String,
    },

    SccComputed {
        vertices: usize,
        edges: usize,
        components: usize,
    },

    CondensationBuilt {
        vertices: usize,
        edges: usize,
    },

    TopoSorted {
        order: Vec<usize>,
    },

    PathsComputed {
        kind: String,
        source: usize,
        reachable: usize,
    },

    CriticalPathFound {
        length: i64,
        vertices: usize,
    },

    Finished {
        stats: AnalysisStats,
    },
}
