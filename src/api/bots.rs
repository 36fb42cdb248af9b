//! Chatbot integrations.
//!
//! Typebot, OpenAI, Dify, Flowise, EvolutionBot, N8n and EvoAI expose the
//! same endpoint family under their own path segment. [`Bots`] implements
//! that family once, parameterized by a [`BotKind`] marker that supplies
//! the segment, the config type and the wire name of the fallback-bot
//! setting.

use crate::{
    metadata::endpoint,
    transport::HttpTransport,
    types::{
        bots::{
            BotDefaultSettings, BotRecord, BotSession, ChangeStatusRequest, DifyConfig,
            EvoaiConfig, EvolutionBotConfig, FlowiseConfig, IgnoreJidRequest, N8nConfig,
            OpenaiBotConfig, OpenaiCreds, OpenaiCredsRequest, TypebotConfig, TypebotStartRequest,
        },
        OperationStatus,
    },
    validate::{require, require_instance, require_segment},
    Error, Response, Result,
};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::fmt::Debug;
use std::marker::PhantomData;

const FALLBACK_KEY: &str = "fallbackId";

/// One bot backend.
pub trait BotKind: Send + Sync + 'static {
    /// Path segment, e.g. `typebot`.
    const RESOURCE: &'static str;
    /// Wire name of the default-settings fallback bot id, e.g. `typebotIdFallback`.
    const FALLBACK_FIELD: &'static str;
    /// Bot definition accepted by `create`/`update`.
    type Config: Serialize + DeserializeOwned + Debug + Send + Sync;
}

macro_rules! bot_kind {
    ($(#[$doc:meta])* $name:ident, $resource:literal, $fallback:literal, $config:ty) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl BotKind for $name {
            const RESOURCE: &'static str = $resource;
            const FALLBACK_FIELD: &'static str = $fallback;
            type Config = $config;
        }
    };
}

bot_kind!(
    /// Typebot flows.
    Typebot, "typebot", "typebotIdFallback", TypebotConfig
);
bot_kind!(
    /// OpenAI assistants and chat completions.
    OpenAi, "openai", "openaiIdFallback", OpenaiBotConfig
);
bot_kind!(
    /// Dify apps.
    Dify, "dify", "difyIdFallback", DifyConfig
);
bot_kind!(
    /// Flowise chatflows.
    Flowise, "flowise", "flowiseIdFallback", FlowiseConfig
);
bot_kind!(
    /// Any HTTP endpoint speaking the Evolution bot protocol.
    EvolutionBot, "evolutionBot", "botIdFallback", EvolutionBotConfig
);
bot_kind!(
    /// n8n workflows.
    N8n, "n8n", "n8nIdFallback", N8nConfig
);
bot_kind!(
    /// EvoAI agents.
    Evoai, "evoai", "evoaiIdFallback", EvoaiConfig
);

/// The `{bot}/*` endpoints for one [`BotKind`].
///
/// # Examples
///
/// ```no_run
/// use evolution_client::Client;
/// use evolution_client::types::bots::{TriggerSettings, TypebotConfig};
///
/// # async fn example() -> Result<(), evolution_client::Error> {
/// let client = Client::builder().base_url("http://localhost:8080")?.api_key("secret").build()?;
///
/// let config = TypebotConfig {
///     enabled: true,
///     url: "https://bot.example.com".into(),
///     typebot: "support-flow".into(),
///     trigger: TriggerSettings::all(),
///     ..Default::default()
/// };
/// let bot = client.typebot().create("inst-1", &config).await?;
/// println!("created typebot {}", bot.id);
/// # Ok(())
/// # }
/// ```
pub struct Bots<B> {
    transport: HttpTransport,
    kind: PhantomData<B>,
}

impl<B: BotKind> Bots<B> {
    pub(crate) fn new(transport: HttpTransport) -> Self {
        Self {
            transport,
            kind: PhantomData,
        }
    }

    fn path(action: &str, bot_id: Option<&str>, instance_name: &str) -> String {
        match bot_id {
            Some(id) => endpoint(&[B::RESOURCE, action, id, instance_name]),
            None => endpoint(&[B::RESOURCE, action, instance_name]),
        }
    }

    /// `POST {bot}/create/{instance}`
    pub async fn create(
        &self,
        instance_name: &str,
        config: &B::Config,
    ) -> Result<BotRecord<B::Config>> {
        require_instance(instance_name)?;
        self.transport
            .post(Self::path("create", None, instance_name), config)
            .await
            .map(Response::into_data)
    }

    /// Every bot of this kind on the instance. `GET {bot}/find/{instance}`
    pub async fn find(&self, instance_name: &str) -> Result<Vec<BotRecord<B::Config>>> {
        require_instance(instance_name)?;
        let bots: Option<Vec<BotRecord<B::Config>>> = self
            .transport
            .get(Self::path("find", None, instance_name))
            .await
            .map(Response::into_data)?;
        Ok(bots.unwrap_or_default())
    }

    /// `GET {bot}/fetch/{botId}/{instance}`
    pub async fn fetch(&self, instance_name: &str, bot_id: &str) -> Result<BotRecord<B::Config>> {
        require_instance(instance_name)?;
        require_segment("botId", bot_id)?;
        self.transport
            .get(Self::path("fetch", Some(bot_id), instance_name))
            .await
            .map(Response::into_data)
    }

    /// Replaces the bot definition. `PUT {bot}/update/{botId}/{instance}`
    pub async fn update(
        &self,
        instance_name: &str,
        bot_id: &str,
        config: &B::Config,
    ) -> Result<BotRecord<B::Config>> {
        require_instance(instance_name)?;
        require_segment("botId", bot_id)?;
        self.transport
            .put(Self::path("update", Some(bot_id), instance_name), config)
            .await
            .map(Response::into_data)
    }

    /// `DELETE {bot}/delete/{botId}/{instance}`
    pub async fn delete(&self, instance_name: &str, bot_id: &str) -> Result<Value> {
        require_instance(instance_name)?;
        require_segment("botId", bot_id)?;
        self.transport
            .delete(Self::path("delete", Some(bot_id), instance_name))
            .await
            .map(Response::into_data)
    }

    /// Defaults for every bot of this kind. `POST {bot}/settings/{instance}`
    pub async fn set_settings(
        &self,
        instance_name: &str,
        settings: &BotDefaultSettings,
    ) -> Result<BotDefaultSettings> {
        require_instance(instance_name)?;
        let body = settings_to_wire(settings, B::FALLBACK_FIELD)?;
        let response = self
            .transport
            .post(Self::path("settings", None, instance_name), &body)
            .await?;
        settings_from_wire(response, B::FALLBACK_FIELD)
    }

    /// `GET {bot}/fetchSettings/{instance}`
    pub async fn fetch_settings(&self, instance_name: &str) -> Result<BotDefaultSettings> {
        require_instance(instance_name)?;
        let response = self
            .transport
            .get(Self::path("fetchSettings", None, instance_name))
            .await?;
        settings_from_wire(response, B::FALLBACK_FIELD)
    }

    /// Opens, pauses or closes the bot session of one conversation.
    /// `POST {bot}/changeStatus/{instance}`
    pub async fn change_status(
        &self,
        instance_name: &str,
        request: &ChangeStatusRequest,
    ) -> Result<Value> {
        require_instance(instance_name)?;
        require("remoteJid", &request.remote_jid)?;
        self.transport
            .post(Self::path("changeStatus", None, instance_name), request)
            .await
            .map(Response::into_data)
    }

    /// `GET {bot}/fetchSessions/{botId}/{instance}`
    pub async fn fetch_sessions(
        &self,
        instance_name: &str,
        bot_id: &str,
    ) -> Result<Vec<BotSession>> {
        require_instance(instance_name)?;
        require_segment("botId", bot_id)?;
        self.transport
            .get(Self::path("fetchSessions", Some(bot_id), instance_name))
            .await
            .map(Response::into_data)
    }

    /// `POST {bot}/ignoreJid/{instance}`
    pub async fn ignore_jid(
        &self,
        instance_name: &str,
        request: &IgnoreJidRequest,
    ) -> Result<Value> {
        require_instance(instance_name)?;
        require("remoteJid", &request.remote_jid)?;
        self.transport
            .post(Self::path("ignoreJid", None, instance_name), request)
            .await
            .map(Response::into_data)
    }
}

impl Bots<Typebot> {
    /// Starts a flow in a conversation without waiting for a trigger.
    /// `POST typebot/start/{instance}`
    pub async fn start(&self, instance_name: &str, request: &TypebotStartRequest) -> Result<Value> {
        require_instance(instance_name)?;
        require("url", &request.url)?;
        require("typebot", &request.typebot)?;
        require("remoteJid", &request.remote_jid)?;
        self.transport
            .post(Self::path("start", None, instance_name), request)
            .await
            .map(Response::into_data)
    }
}

impl Bots<OpenAi> {
    /// Stores an OpenAI API key. `POST openai/creds/{instance}`
    pub async fn set_creds(
        &self,
        instance_name: &str,
        request: &OpenaiCredsRequest,
    ) -> Result<OpenaiCreds> {
        require_instance(instance_name)?;
        require("name", &request.name)?;
        require("apiKey", &request.api_key)?;
        self.transport
            .post(Self::path("creds", None, instance_name), request)
            .await
            .map(Response::into_data)
    }

    /// `GET openai/creds/{instance}`
    pub async fn find_creds(&self, instance_name: &str) -> Result<Vec<OpenaiCreds>> {
        require_instance(instance_name)?;
        self.transport
            .get(Self::path("creds", None, instance_name))
            .await
            .map(Response::into_data)
    }

    /// `DELETE openai/creds/{credsId}/{instance}`
    pub async fn delete_creds(
        &self,
        instance_name: &str,
        creds_id: &str,
    ) -> Result<OperationStatus> {
        require_instance(instance_name)?;
        require_segment("openaiCredsId", creds_id)?;
        self.transport
            .delete(Self::path("creds", Some(creds_id), instance_name))
            .await
            .map(Response::into_data)
    }
}

impl<B> Clone for Bots<B> {
    fn clone(&self) -> Self {
        Self {
            transport: self.transport.clone(),
            kind: PhantomData,
        }
    }
}

impl<B: BotKind> Debug for Bots<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bots")
            .field("kind", &B::RESOURCE)
            .field("transport", &self.transport)
            .finish()
    }
}

fn settings_to_wire(settings: &BotDefaultSettings, fallback_field: &str) -> Result<Value> {
    let mut body =
        serde_json::to_value(settings).map_err(|e| Error::SerializationFailed(e.to_string()))?;
    if let Some(object) = body.as_object_mut() {
        if let Some(id) = object.remove(FALLBACK_KEY) {
            object.insert(fallback_field.to_string(), id);
        }
    }
    Ok(body)
}

fn settings_from_wire(
    response: Response<Value>,
    fallback_field: &str,
) -> Result<BotDefaultSettings> {
    let Response {
        data: mut body,
        raw_body,
        status,
        ..
    } = response;
    if let Some(object) = body.as_object_mut() {
        if let Some(id) = object.remove(fallback_field) {
            object.insert(FALLBACK_KEY.to_string(), id);
        }
    }
    if body.is_null() {
        return Ok(BotDefaultSettings::default());
    }
    serde_json::from_value(body).map_err(|e| Error::DeserializationFailed {
        raw_response: raw_body,
        serde_error: e.to_string(),
        status,
    })
}
