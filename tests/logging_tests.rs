//! Request logging toggles.

mod common;

use std::io::Write;
use std::sync::{Arc, Mutex};

use common::sent_message;
use evolution_client::types::message::SendTextRequest;
use evolution_client::types::SendMessageResponse;
use evolution_client::{Client, Error};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const SECRET_KEY: &str = "sk-live-7f3a90c2";
const REQUEST_TEXT: &str = "order 4471 is ready";
const RESPONSE_ID: &str = "3EB0C7A1F00D";

/// Collects formatted log lines in memory.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

struct Outcome {
    sent: SendMessageResponse,
    rejected: Error,
    logs: String,
}

async fn send_both(server: &MockServer, verbose: bool) -> Outcome {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter("evolution_client=debug")
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let client = Client::builder()
        .base_url(server.uri())
        .unwrap()
        .api_key(SECRET_KEY)
        .log_requests(verbose)
        .log_request_body(verbose)
        .log_response_body(verbose)
        .build()
        .unwrap();

    let request = SendTextRequest::new("5511888888888", REQUEST_TEXT);
    let sent = client.messages().send_text("inst-1", &request).await.unwrap();
    let rejected = client
        .messages()
        .send_text("inst-2", &request)
        .await
        .unwrap_err();

    Outcome {
        sent,
        rejected,
        logs: captured.text(),
    }
}

#[tokio::test]
async fn test_logging_toggles_change_logs_not_outcomes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/message/sendText/inst-1"))
        .and(header("apikey", SECRET_KEY))
        .and(body_json(json!({"number": "5511888888888", "text": REQUEST_TEXT})))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(sent_message("5511888888888@s.whatsapp.net", RESPONSE_ID)),
        )
        .expect(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/message/sendText/inst-2"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "status": 400,
            "error": "Bad Request",
            "response": {"message": ["Connection Closed"]}
        })))
        .expect(2)
        .mount(&mock_server)
        .await;

    let quiet = send_both(&mock_server, false).await;
    let verbose = send_both(&mock_server, true).await;

    assert_eq!(quiet.sent, verbose.sent);
    assert_eq!(verbose.sent.key.id, RESPONSE_ID);
    assert_eq!(quiet.rejected.status(), verbose.rejected.status());
    assert_eq!(quiet.rejected.raw_response(), verbose.rejected.raw_response());
    assert!(matches!(verbose.rejected, Error::HttpError { .. }));

    assert!(quiet.logs.contains("DEBUG"));
    assert!(quiet.logs.contains("Sending request"));
    assert!(!quiet.logs.contains("Request body"));
    assert!(!quiet.logs.contains("Response body"));
    assert!(!quiet.logs.contains(REQUEST_TEXT));
    assert!(!quiet.logs.contains(RESPONSE_ID));

    assert!(verbose.logs.contains("INFO"));
    assert!(verbose.logs.contains("Request body"));
    assert!(verbose.logs.contains(REQUEST_TEXT));
    assert!(verbose.logs.contains("Response body"));
    assert!(verbose.logs.contains(RESPONSE_ID));

    // 4xx bodies are logged at error level either way.
    assert!(quiet.logs.contains("Connection Closed"));
    assert!(verbose.logs.contains("Connection Closed"));

    assert!(!quiet.logs.contains(SECRET_KEY));
    assert!(!verbose.logs.contains(SECRET_KEY));
}
