//! Shows how the client reports failures.
//!
//! This example shows how to:
//! - Catch argument errors before anything is sent
//! - Tell a missing instance apart from other HTTP errors
//! - Read the messages of the server's error envelope
//! - Bound a call with a timeout and cancel it with a token
//!
//! Run with: `cargo run --example error_handling`

use evolution_client::types::message::SendTextRequest;
use evolution_client::{Client, Error};
use std::time::Duration;
use tokio_util::sync::CancellationToken;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("evolution_client=info")
        .init();

    let base_url =
        std::env::var("EVOLUTION_API_URL").unwrap_or_else(|_| "http://localhost:8080".to_string());
    let api_key = std::env::var("EVOLUTION_API_KEY").unwrap_or_default();

    let client = Client::builder()
        .base_url(&base_url)?
        .api_key(&api_key)
        .timeout(Duration::from_secs(10))
        .build()?;

    println!("=== Example 1: Validation errors ===");
    // Blank arguments are rejected locally; no request reaches the server.
    match client
        .messages()
        .send_text("  ", &SendTextRequest::new("5511999999999", "hi"))
        .await
    {
        Err(e @ Error::InvalidArgument { .. }) => {
            println!("Rejected locally: {}", e);
            println!("  Is validation: {}", e.is_validation());
        }
        other => println!("Unexpected: {:?}", other.map(|r| r.key.id)),
    }
    println!();

    println!("=== Example 2: Unknown instance ===");
    match client.instances().connection_state("no-such-instance").await {
        Ok(state) => println!("State: {}", state.instance.state),
        Err(Error::NotFound { payload, .. }) => {
            println!("Instance does not exist");
            for message in payload.map(|p| p.messages()).unwrap_or_default() {
                println!("  Server says: {}", message);
            }
        }
        Err(e) => println!("Other error: {}", e),
    }
    println!();

    println!("=== Example 3: HTTP errors ===");
    match client
        .messages()
        .send_text("no-such-instance", &SendTextRequest::new("0", "hi"))
        .await
    {
        Ok(sent) => println!("Sent {}", sent.key.id),
        Err(e) => {
            println!("Error: {}", e);
            println!("  Status code: {:?}", e.status());
            println!("  Raw response: {:?}", e.raw_response());
            if let Some(payload) = e.payload() {
                println!("  Envelope: {:?}", payload.messages());
            }
        }
    }
    println!();

    println!("=== Example 4: Cancellation ===");
    let token = CancellationToken::new();
    let cancellable = client.with_cancellation(token.clone());
    token.cancel();

    match cancellable.instances().fetch_instances(None).await {
        Err(e) if e.is_cancelled() => println!("Cancelled before sending: {}", e),
        other => println!("Unexpected: {:?}", other.map(|list| list.len())),
    }
    println!();

    println!("=== Example 5: Network errors ===");
    let unreachable = Client::builder()
        .base_url("http://127.0.0.1:9")?
        .timeout(Duration::from_secs(2))
        .build()?;

    match unreachable.instances().fetch_instances(None).await {
        Err(Error::Network(e)) => {
            println!("Network Error!");
            println!("  Error: {}", e);
            println!("  Is connect: {}", e.is_connect());
        }
        Err(Error::Timeout) => println!("Timed out"),
        other => println!("Unexpected: {:?}", other.map(|list| list.len())),
    }

    Ok(())
}
