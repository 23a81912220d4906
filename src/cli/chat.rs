use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::client::render::render_text;
use crate::client::{ChatClient, SubmitRejected};
use crate::core::AppConfig;

const GREETING: &str = "Hello! I can help you answer questions about the privacy policies of companies in the database. Ask me anything!";

pub async fn run(config: AppConfig) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let mut client = ChatClient::from_config(&config);

    println!("{}\n", GREETING);

    // The prompt is only shown while the session is idle so a second
    // question can't be typed while one is in flight
    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                    println!("...");
                }
                match client.ask(&line).await {
                    Ok(msg) => println!("{}\n", render_text(&msg)),
                    Err(SubmitRejected::Empty) => continue,
                    Err(SubmitRejected::Busy) => {
                        tracing::warn!("Dropped input while a request was pending")
                    }
                }
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
