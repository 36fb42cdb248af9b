//! Request and response bodies, one module per resource area.
//!
//! Request types serialize with the API's camelCase names and omit unset
//! optional fields. Response types are lenient: absent fields take their
//! default and unknown fields are ignored.

pub mod bots;
pub mod chat;
pub mod chatwoot;
pub mod common;
pub mod events;
pub mod group;
pub mod instance;
pub mod message;
pub mod profile;
pub mod settings;
pub mod timestamp;
pub mod webhook_event;

pub use common::{MessageKey, OperationStatus, Quoted, SendOptions, SendMessageResponse};
