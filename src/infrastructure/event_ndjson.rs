use crate::usecase::event::AppEvent;
use serde_json::json;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

fn app_event_to_json(ev: &AppEvent) -> serde_json::Value {
    match ev {
        AppEvent::PhaseStarted { name } => json!({"type":"phase_started","name":name}),
        AppEvent::PhaseFinished { name } => json!({"type":"phase_finished","name":name}),
        AppEvent::SccComputed {
            vertices,
            edges,
            components,
        } => {
            json!({"type":"scc_computed","vertices":vertices,"edges":edges,"components":components})
        }
        AppEvent::CondensationBuilt { vertices, edges } => {
            json!({"type":"condensation_built","vertices":vertices,"edges":edges})
        }
        AppEvent::TopoSorted { order } => json!({"type":"topo_sorted","order":order}),
        AppEvent::PathsComputed {
            kind,
            source,
            reachable,
        } => {
            json!({"type":"paths_computed","kind":kind,"source":source,"reachable":reachable})
        }
        AppEvent::CriticalPathFound { length, vertices } => {
            json!({"type":"critical_path_found","length":length,"vertices":vertices})
        }
        AppEvent::Finished { stats } => json!({"type":"finished","stats":stats}),
    }
}

pub fn spawn_ndjson_printer(mut rx: mpsc::Receiver<AppEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(ev) = rx.recv().await {
            let line = app_event_to_json(&ev);

            // NDJSON to stdout.
            println!("{line}");
        }
    })
}
