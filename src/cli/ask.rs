use anyhow::{Result, anyhow};

use crate::client::ChatClient;
use crate::client::render::render_text;
use crate::core::AppConfig;

pub async fn run(query: String, config: AppConfig) -> Result<()> {
    let mut client = ChatClient::from_config(&config);
    let msg = client
        .ask(&query)
        .await
        .map_err(|e| anyhow!("Not sending query: {}", e))?;
    println!("{}", render_text(&msg));
    Ok(())
}
