//! Resource modules, one per remote resource area.
//!
//! Every method validates its arguments, formats the endpoint path and makes
//! exactly one call through the shared [`HttpTransport`](crate::transport::HttpTransport).
//! The parsed response is returned unchanged.

pub mod bots;
pub mod chat;
pub mod chatwoot;
pub mod contacts;
pub mod events;
pub mod groups;
pub mod instances;
pub mod messages;
pub mod profile;
pub mod settings;

pub use bots::{
    BotKind, Bots, Dify, Evoai, EvolutionBot, Flowise, N8n, OpenAi, Typebot,
};
pub use chat::Chat;
pub use chatwoot::Chatwoot;
pub use contacts::Contacts;
pub use events::{EventSink, Events, Rabbitmq, Sqs, Webhook, Websocket};
pub use groups::Groups;
pub use instances::Instances;
pub use messages::Messages;
pub use profile::Profile;
pub use settings::Settings;
