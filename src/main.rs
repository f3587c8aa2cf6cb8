//! Binary entrypoint.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    graph_condensation_analyzer::interface::cli::run().await
}
