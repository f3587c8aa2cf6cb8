use crate::infrastructure::event_ndjson::spawn_ndjson_printer;
use crate::infrastructure::graph_json_adapter::read_graph_file;
use crate::usecase::analyze::{analyze_graph, AnalysisReport};
use crate::usecase::event::AppEvent;
use anyhow::{anyhow, Context, Result};
use std::env;
use tokio::fs;
use tokio::sync::mpsc;

pub async fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    run_with_args(&args).await
}

pub async fn run_with_args(args: &[String]) -> Result<()> {
    let Cli::Analyze { input, emit_events } = Cli::parse(args)?;

    let (tx, rx) = mpsc::channel::<AppEvent>(1024);
    let printer = if emit_events {
        Some(spawn_ndjson_printer(rx))
    } else {
        drop(rx);
        None
    };
    let sink = if emit_events {
        Some(tx)
    } else {
        drop(tx);
        None
    };

    match input {
        Some(path) => process_file(&path, &sink, emit_events).await?,
        None => process_all_datasets(&sink, emit_events).await?,
    }

    drop(sink);
    if let Some(handle) = printer {
        handle.await.ok();
    }

    Ok(())
}

#[derive(Debug)]
enum Cli {
    Analyze {
        input: Option<String>,
        emit_events: bool,
    },
}

impl Cli {
    fn parse(args: &[String]) -> Result<Self> {
        // Expected:
        // <bin> [<input.json>] [--emit-events]
        let mut input: Option<String> = None;
        let mut emit_events = false;

        for arg in args.iter().skip(1) {
            match arg.as_str() {
                "--emit-events" => {
                    emit_events = true;
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other if other.starts_with('-') => {
                    return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage())))
                }
                other => {
                    if input.is_some() {
                        return Err(anyhow!(format!(
                            "unexpected extra arg: {other}\n\n{}",
                            usage()
                        )));
                    }
                    input = Some(other.to_string());
                }
            }
        }

        Ok(Cli::Analyze { input, emit_events })
    }
}

fn usage() -> &'static str {
    "Usage:\n  graph-condensation-analyzer [<input.json>] [--emit-events]\n\nWith an input path, analyzes that file. Without one, analyzes every\n*.json file under ./data in name order.\n\nEvents:\n  If --emit-events is set, NDJSON events are written to stdout; the\n  human-readable report and summary go to stderr."
}

/// The human-readable report goes to stdout, or to stderr when stdout
/// carries the NDJSON event stream.
fn report_line(emit_events: bool, text: &str) {
    if emit_events {
        eprintln!("{text}");
    } else {
        println!("{text}");
    }
}

async fn process_all_datasets(
    sink: &Option<mpsc::Sender<AppEvent>>,
    emit_events: bool,
) -> Result<()> {
    let mut entries = fs::read_dir("data")
        .await
        .context("opening 'data' directory")?;

    let mut files: Vec<String> = Vec::new();
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) == Some("json") {
            if let Some(p) = path.to_str() {
                files.push(p.to_string());
            }
        }
    }

    if files.is_empty() {
        report_line(emit_events, "No JSON files found in data directory!");
        return Ok(());
    }

    files.sort();
    report_line(emit_events, &format!("Processing {} datasets\n", files.len()));

    for file in &files {
        process_file(file, sink, emit_events).await?;
        report_line(emit_events, "");
    }

    Ok(())
}

/// Analyzes one file. Load and conversion failures are reported as a
/// single line so a batch run continues with the next file.
async fn process_file(
    path: &str,
    sink: &Option<mpsc::Sender<AppEvent>>,
    emit_events: bool,
) -> Result<()> {
    report_line(emit_events, &format!("File: {path}"));

    let dto = match read_graph_file(path).await {
        Ok(dto) => dto,
        Err(e) => {
            report_line(emit_events, &format!("Error loading graph: {e:#}"));
            return Ok(());
        }
    };

    let report = match analyze_graph(&dto, sink.clone()).await {
        Ok(report) => report,
        Err(e) => {
            report_line(emit_events, &format!("Error loading graph: {e:#}"));
            return Ok(());
        }
    };

    report_line(emit_events, &render_report(&report));

    eprintln!(
        "summary: vertices={} edges={} components={} condensation_edges={} operations={}",
        report.stats.vertices,
        report.stats.edges,
        report.stats.components,
        report.stats.condensation_edges,
        report.stats.operations_total
    );

    Ok(())
}

fn render_report(report: &AnalysisReport) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!(
        "Vertices: {}, Edges: {}",
        report.vertices, report.edges
    ));
    if let Some(warning) = &report.weight_warning {
        lines.push(format!("Warning: {warning}"));
    }

    lines.push(String::new());
    lines.push("1. SCC Detection:".to_string());
    lines.push(format!("Total SCCs: {}", report.sccs.len()));
    for (i, scc) in report.sccs.iter().enumerate() {
        lines.push(format!("  SCC {i} (size {}): {:?}", scc.len(), scc));
    }
    lines.push(format!("Operations: {}", report.scc_metrics.operations));
    lines.push(format!("Time: {:.3} ms", report.scc_metrics.elapsed_ms));

    lines.push(String::new());
    lines.push(format!(
        "Condensation: {} nodes, {} edges",
        report.condensation_vertices, report.condensation_edges
    ));

    lines.push(String::new());
    lines.push("2. Topological Sort:".to_string());
    match &report.topo_order {
        Some(order) => {
            lines.push(format!("Topological order: {order:?}"));
            lines.push(format!("Operations: {}", report.topo_metrics.operations));
            lines.push(format!("Time: {:.3} ms", report.topo_metrics.elapsed_ms));
            lines.push(String::new());
            lines.push("Task order:".to_string());
            for (i, &scc_index) in order.iter().enumerate() {
                lines.push(format!(
                    "  {}. SCC {}: {:?}",
                    i + 1,
                    scc_index,
                    report.sccs[scc_index]
                ));
            }
        }
        None => lines.push("Graph contains cycles".to_string()),
    }

    if let (Some(shortest), Some(longest), Some(critical)) =
        (&report.shortest, &report.longest, &report.critical)
    {
        lines.push(String::new());
        lines.push("3. DAG Paths:".to_string());

        lines.push(String::new());
        lines.push(format!("Shortest paths from SCC {}:", shortest.source));
        for entry in &shortest.entries {
            lines.push(format!(
                "  To SCC {}: distance={}, path={:?}",
                entry.target, entry.distance, entry.path
            ));
        }
        lines.push(format!("Operations: {}", shortest.metrics.operations));
        lines.push(format!("Time: {:.3} ms", shortest.metrics.elapsed_ms));

        lines.push(String::new());
        lines.push(format!("Longest paths from SCC {}:", longest.source));
        for entry in &longest.entries {
            lines.push(format!(
                "  To SCC {}: distance={}, path={:?}",
                entry.target, entry.distance, entry.path
            ));
        }
        lines.push(format!("Operations: {}", longest.metrics.operations));
        lines.push(format!("Time: {:.3} ms", longest.metrics.elapsed_ms));

        lines.push(String::new());
        lines.push("Critical path:".to_string());
        lines.push(format!("  Path: {:?}", critical.path));
        lines.push(format!("  Length: {}", critical.length));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parse_defaults_to_batch_mode() {
        let args = vec!["bin".to_string()];
        match Cli::parse(&args).expect("parse") {
            Cli::Analyze { input, emit_events } => {
                assert!(input.is_none());
                assert!(!emit_events);
            }
        }
    }

    #[test]
    fn parse_accepts_path_and_emit_events_flag() {
        let args = vec![
            "bin".to_string(),
            "data/task_dag.json".to_string(),
            "--emit-events".to_string(),
        ];
        match Cli::parse(&args).expect("parse") {
            Cli::Analyze { input, emit_events } => {
                assert_eq!(input.as_deref(), Some("data/task_dag.json"));
                assert!(emit_events);
            }
        }
    }

    #[test]
    fn parse_rejects_unknown_flags_and_extra_positionals() {
        let args = vec!["bin".to_string(), "--wat".to_string()];
        let err = Cli::parse(&args).unwrap_err().to_string();
        assert!(err.contains("unknown arg"));
        assert!(err.contains("Usage"));

        let args = vec!["bin".to_string(), "a.json".to_string(), "b.json".to_string()];
        let err = Cli::parse(&args).unwrap_err().to_string();
        assert!(err.contains("unexpected extra arg"));
    }

    #[test]
    fn parse_help_returns_error_with_usage() {
        let args = vec!["bin".to_string(), "--help".to_string()];
        let err = Cli::parse(&args).unwrap_err().to_string();
        assert!(err.contains("Usage"));
    }

    #[tokio::test]
    async fn run_with_args_analyzes_a_single_file() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("graph.json");
        std::fs::write(
            &path,
            r#"{"directed": true, "n": 3, "edges": [
                {"u": 0, "v": 1, "w": 2},
                {"u": 1, "v": 2, "w": 3}
            ], "source": 0}"#,
        )
        .expect("write input");

        let args = vec!["bin".to_string(), path.to_str().unwrap().to_string()];
        run_with_args(&args).await.expect("run");
    }

    #[tokio::test]
    async fn run_with_args_emit_events_smoke() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("graph.json");
        std::fs::write(
            &path,
            r#"{"directed": true, "n": 2, "edges": [{"u": 0, "v": 1, "w": 1}]}"#,
        )
        .expect("write input");

        let args = vec![
            "bin".to_string(),
            path.to_str().unwrap().to_string(),
            "--emit-events".to_string(),
        ];
        run_with_args(&args).await.expect("run");
    }

    #[tokio::test]
    async fn missing_input_file_is_reported_not_fatal() {
        let args = vec!["bin".to_string(), "no/such/file.json".to_string()];
        run_with_args(&args).await.expect("batch continues");
    }

    #[tokio::test]
    async fn render_covers_every_report_section() {
        let dto = crate::infrastructure::graph_json_adapter::GraphFileDto {
            directed: true,
            n: 4,
            edges: vec![
                crate::infrastructure::graph_json_adapter::EdgeDto { u: 0, v: 1, w: 5 },
                crate::infrastructure::graph_json_adapter::EdgeDto { u: 0, v: 2, w: 2 },
                crate::infrastructure::graph_json_adapter::EdgeDto { u: 1, v: 3, w: 1 },
                crate::infrastructure::graph_json_adapter::EdgeDto { u: 2, v: 3, w: 4 },
            ],
            source: Some(0),
            weight_model: Some("node".to_string()),
            extra: Default::default(),
        };
        let report = analyze_graph(&dto, None).await.expect("analyze");
        let rendered = render_report(&report);

        assert!(rendered.contains("Vertices: 4, Edges: 4"));
        assert!(rendered.contains("Warning: weight model is node"));
        assert!(rendered.contains("1. SCC Detection:"));
        assert!(rendered.contains("Total SCCs: 4"));
        assert!(rendered.contains("2. Topological Sort:"));
        assert!(rendered.contains("Task order:"));
        assert!(rendered.contains("3. DAG Paths:"));
        assert!(rendered.contains("Shortest paths from SCC"));
        assert!(rendered.contains("Longest paths from SCC"));
        assert!(rendered.contains("Critical path:"));
    }
}
