//! # Tarefas Backend Service
//!
//! Thin entry point that delegates to the server module for setup.

use tarefas_backend::{start_server, Config};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    start_server(config).await
}
