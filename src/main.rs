use anyhow::Result;
use policy_gateway::cli;

#[tokio::main]
async fn main() -> Result<()> {
    cli::run().await
}
