use crate::domain::graph::Graph;
use crate::infrastructure::schema_validator::validate_graph_file;
use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tokio::fs;

/// The JSON graph description. Unknown fields are collected into `extra`
/// and ignored by the pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GraphFileDto {
    pub directed: bool,

    pub n: usize,

    #[serde(default)]
    pub edges: Vec<EdgeDto>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_model: Option<String>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct EdgeDto {
    pub u: usize,
    pub v: usize,
    pub w: i64,
}

/// Reads and schema-validates a graph description file.
pub async fn read_graph_file(path: &str) -> Result<GraphFileDto> {
    let raw = fs::read_to_string(path).await?;
    let doc: Value = serde_json::from_str(&raw)?;
    validate_graph_file(&doc)?;
    let dto: GraphFileDto = serde_json::from_value(doc)?;
    Ok(dto)
}

/// Converts the DTO into a `Graph`, rejecting edges that reference a
/// vertex outside `0..n`.
pub fn to_graph(dto: &GraphFileDto) -> Result<Graph> {
    let mut graph = Graph::new(dto.n, dto.directed);
    for edge in &dto.edges {
        if edge.u >= dto.n || edge.v >= dto.n {
            return Err(anyhow!(
                "edge ({}, {}) references a vertex out of range (n = {})",
                edge.u,
                edge.v,
                dto.n
            ));
        }
        graph.add_edge(edge.u, edge.v, edge.w);
    }
    Ok(graph)
}
