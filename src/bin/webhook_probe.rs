//! Fire one request straight at the configured webhook and dump whatever
//! comes back, bypassing the relay. Usage:
//!
//! ```text
//! webhook-probe [session-id] [input]
//! ```
//!
//! Status and headers go to stdout; the raw body lands in
//! `debug_output.json` for inspection.

use forecast_relay::config::RelayConfig;
use serde_json::json;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let mut args = std::env::args().skip(1);
    let session_id = args.next().unwrap_or_else(|| "test1".to_string());
    let input = args.next().unwrap_or_else(|| "hi".to_string());

    let config = RelayConfig::from_env();
    println!("POST {}", config.webhook_url);

    let client = reqwest::Client::new();
    let response = match client
        .post(&config.webhook_url)
        .json(&json!({ "sessionId": session_id, "input": input }))
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
    println!("headers:");
    for (name, value) in response.headers() {
        println!("  {}: {}", name, value.to_str().unwrap_or("(non-utf8)"));
    }

    let body = response.text().await.unwrap_or_default();
    match std::fs::write("debug_output.json", &body) {
        Ok(()) => println!("body written to debug_output.json ({} bytes)", body.len()),
        Err(err) => eprintln!("failed to write debug_output.json: {err}"),
    }
}
