//! Checks that an instance is connected and sends it a text message.
//!
//! Reads `EVOLUTION_API_URL` and `EVOLUTION_API_KEY` from the environment.
//!
//! Run with: `cargo run --example send_text -- <instance> <number> <text>`

use evolution_client::types::chat::WhatsappNumbersRequest;
use evolution_client::types::message::SendTextRequest;
use evolution_client::types::SendOptions;
use evolution_client::{Client, ClientOptions};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter("evolution_client=debug")
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(instance), Some(number), Some(text)) = (args.next(), args.next(), args.next()) else {
        eprintln!("usage: send_text <instance> <number> <text>");
        std::process::exit(2);
    };

    let mut options = ClientOptions::from_env()?;
    options.log_requests = true;
    let client = Client::from_options(&options)?;

    let state = client.instances().connection_state(&instance).await?;
    println!("Instance {} is {}", state.instance.instance_name, state.instance.state);
    if !state.instance.is_open() {
        println!("Scan the QR code from `instance/connect/{}` first", instance);
        return Ok(());
    }

    let numbers = client
        .chat()
        .whatsapp_numbers(&instance, &WhatsappNumbersRequest::new([number.as_str()]))
        .await?;
    if !numbers.iter().any(|n| n.exists) {
        println!("{} is not on WhatsApp", number);
        return Ok(());
    }

    let request =
        SendTextRequest::new(&number, &text).with_options(SendOptions::default().delay(1200));
    let sent = client.messages().send_text(&instance, &request).await?;

    println!("Sent message {}", sent.key.id);
    println!("  To: {}", sent.key.remote_jid);
    println!("  Status: {:?}", sent.status);
    println!("  Timestamp: {:?}", sent.message_timestamp);

    Ok(())
}
