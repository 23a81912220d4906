use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod ask;
pub mod chat;
pub mod serve;

use crate::core::AppConfig;

#[derive(Subcommand)]
enum Command {
    /// Run the query gateway
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "2222")]
        port: String,

        /// Override the upstream answering service base URL
        #[arg(long)]
        upstream_url: Option<String>,
    },
    /// Start an interactive chat session against a running gateway
    Chat {
        /// Override the gateway base URL
        #[arg(long)]
        gateway_url: Option<String>,
    },
    /// Send a single question to a running gateway
    Ask {
        #[arg(long)]
        query: String,

        /// Override the gateway base URL
        #[arg(long)]
        gateway_url: Option<String>,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();
    let mut config = AppConfig::default();

    // Handle each sub command
    match args.command {
        Some(Command::Serve {
            host,
            port,
            upstream_url,
        }) => {
            if let Some(url) = upstream_url {
                config = with_upstream_url(config, &url);
            }
            serve::run(host, port, config).await?;
        }
        Some(Command::Chat { gateway_url }) => {
            if let Some(url) = gateway_url {
                config = with_gateway_url(config, &url);
            }
            chat::run(config).await?;
        }
        Some(Command::Ask { query, gateway_url }) => {
            if let Some(url) = gateway_url {
                config = with_gateway_url(config, &url);
            }
            ask::run(query, config).await?;
        }
        None => {}
    }

    Ok(())
}

fn with_gateway_url(config: AppConfig, url: &str) -> AppConfig {
    AppConfig {
        gateway_url: AppConfig::new(&config.upstream_url, url).gateway_url,
        ..config
    }
}

fn with_upstream_url(config: AppConfig, url: &str) -> AppConfig {
    AppConfig {
        upstream_url: AppConfig::new(url, &config.gateway_url).upstream_url,
        ..config
    }
}
