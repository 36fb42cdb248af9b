//! # evolution-client - a typed client for the Evolution API
//!
//! Evolution API is a self-hosted WhatsApp gateway. This crate exposes one
//! async method per remote endpoint, grouped by resource area: instances,
//! messages, chats, contacts, groups, profile, settings, event sinks
//! (webhook, WebSocket, RabbitMQ, SQS), Chatwoot and the chatbot
//! integrations (Typebot, OpenAI, Dify, Flowise, EvolutionBot, n8n, EvoAI).
//!
//! Each method validates its required arguments before any network I/O,
//! builds the endpoint path, sends exactly one request through the shared
//! [`HttpTransport`](transport::HttpTransport) and returns the typed response.
//!
//! ## Quick Start
//!
//! ```no_run
//! use evolution_client::Client;
//! use evolution_client::types::message::SendTextRequest;
//! use evolution_client::types::SendOptions;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), evolution_client::Error> {
//!     let client = Client::builder()
//!         .base_url("http://localhost:8080")?
//!         .api_key("secret")
//!         .build()?;
//!
//!     let request = SendTextRequest::new("5511999999999", "Hello from Rust")
//!         .with_options(SendOptions::default().delay(1200));
//!     let sent = client.messages().send_text("inst-1", &request).await?;
//!     println!("sent message {}", sent.key.id);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Validation failures, HTTP errors, transport failures and undecodable
//! bodies are all reported as [`Error`]. HTTP errors keep the raw body and
//! the parsed server error envelope:
//!
//! ```no_run
//! use evolution_client::{Client, Error};
//!
//! # async fn example() -> Result<(), Error> {
//! # let client = Client::builder().base_url("http://localhost:8080")?.build()?;
//! match client.groups().fetch_all_groups("inst-1", false).await {
//!     Ok(groups) => println!("{} groups", groups.len()),
//!     Err(Error::NotFound { .. }) => eprintln!("no such instance"),
//!     Err(Error::HttpError { status, payload, .. }) => {
//!         let messages = payload.map(|p| p.messages()).unwrap_or_default();
//!         eprintln!("HTTP {}: {}", status, messages.join("; "));
//!     }
//!     Err(Error::DeserializationFailed { raw_response, serde_error, .. }) => {
//!         eprintln!("unexpected body {}: {}", raw_response, serde_error);
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! Requests are traced with `tracing`: method, path and status at `debug`
//! (or `info` with [`ClientBuilder::log_requests`]), bodies only when
//! explicitly enabled. The API key header is never logged.

pub mod api;
mod client;
pub mod config;
mod error;
pub mod metadata;
mod response;
pub mod transport;
pub mod types;
pub mod upload;
mod validate;

pub use client::{Client, ClientBuilder};
pub use config::ClientOptions;
pub use error::{ApiErrorPayload, Error, Result};
pub use response::Response;
pub use upload::{FileUpload, MultipartUpload};
