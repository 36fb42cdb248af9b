//! Shared helpers for the wiremock-backed tests.

#![allow(dead_code)]

use evolution_client::Client;
use serde_json::{json, Value};
use wiremock::MockServer;

pub const API_KEY: &str = "test-key";

/// A client pointed at `server` with [`API_KEY`].
pub fn client(server: &MockServer) -> Client {
    Client::builder()
        .base_url(server.uri())
        .unwrap()
        .api_key(API_KEY)
        .build()
        .unwrap()
}

/// The envelope returned by `message/send*`.
pub fn sent_message(remote_jid: &str, id: &str) -> Value {
    json!({
        "key": {"remoteJid": remote_jid, "fromMe": true, "id": id},
        "message": {"conversation": "hi"},
        "messageTimestamp": "1714730400",
        "status": "PENDING"
    })
}

/// The body the server sends for an unknown instance.
pub fn instance_not_found(instance: &str) -> Value {
    json!({
        "status": 404,
        "error": "Not Found",
        "response": {"message": [format!("The \"{}\" instance does not exist", instance)]}
    })
}
