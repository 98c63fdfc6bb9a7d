use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

/// Fallback when `MANNMITRA_ENDPOINT` is not configured.
const DEFAULT_ENDPOINT: &str = "http://localhost:8000/chat";

#[derive(Debug, Error)]
pub enum ChatError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("assistant endpoint error {status}: {body}")]
    Endpoint { status: StatusCode, body: String },

    #[error("malformed assistant reply: {0}")]
    MalformedReply(#[from] serde_json::Error),
}

pub type ChatResult<T> = Result<T, ChatError>;

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Deserialize)]
struct ChatReply {
    response: String,
}

/// A reply body must be a JSON object with a string `response` field;
/// anything else counts as a failed request. Extra fields are ignored.
fn parse_reply(body: &str) -> ChatResult<String> {
    let reply: ChatReply = serde_json::from_str(body)?;
    Ok(reply.response)
}

#[async_trait]
pub trait AssistantBackend: Send + Sync {
    async fn reply(&self, message: &str) -> ChatResult<String>;
}

/// Client for the assistant chat endpoint.
pub struct HttpAssistant {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpAssistant {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }

    /// Endpoint is fixed at startup: `MANNMITRA_ENDPOINT` if set (the
    /// bundled config seeds it), otherwise the local default.
    pub fn from_env() -> Self {
        let endpoint = env::var("MANNMITRA_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.into());
        Self::new(endpoint)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AssistantBackend for HttpAssistant {
    async fn reply(&self, message: &str) -> ChatResult<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&ChatRequest { message })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(ChatError::Endpoint { status, body });
        }

        parse_reply(&body)
    }
}
