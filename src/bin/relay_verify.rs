//! Smoke-check a running relay: post one message to `/api/chat` and print
//! the decoded envelope. Usage:
//!
//! ```text
//! relay-verify [message] [base-url]
//! ```
//!
//! The base URL defaults to the local relay on the configured port.

use forecast_relay::config::RelayConfig;
use serde_json::{json, Value};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let config = RelayConfig::from_env();
    let mut args = std::env::args().skip(1);
    let message = args.next().unwrap_or_else(|| "hi".to_string());
    let base = args
        .next()
        .unwrap_or_else(|| format!("http://localhost:{}", config.port));
    let url = format!("{base}/api/chat");

    let client = reqwest::Client::new();
    let response = match client
        .post(&url)
        .json(&json!({ "message": message }))
        .send()
        .await
    {
        Ok(response) => response,
        Err(err) => {
            eprintln!("request failed: {err}");
            std::process::exit(1);
        }
    };

    println!("status: {}", response.status());
    let body = response.text().await.unwrap_or_default();
    match serde_json::from_str::<Value>(&body) {
        Ok(value) => println!("response: {value:#}"),
        Err(_) => println!("response: {body}"),
    }
}
