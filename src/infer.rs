use serde_json::{Map, Value};

pub mod config;
mod error;
mod gemini;
mod openai;

pub use config::{ProviderConfig, ProviderKind};
pub use error::InferError;

/// Reply used when the upstream call succeeded but no text could be found in it.
pub const UNEXTRACTABLE_REPLY: &str = "Could not extract response";
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// What gets sent upstream for a single chat turn.
#[derive(Debug, Clone, Copy)]
pub struct Prompt<'a> {
    pub context: Option<&'a str>,
    pub message: &'a str,
}

impl<'a> Prompt<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { context: None, message }
    }

    pub fn with_context(mut self, context: Option<&'a str>) -> Self {
        self.context = context;
        self
    }
}

/// Talks to the configured provider. One pooled HTTP client per process.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    provider: ProviderConfig,
}

impl Client {
    pub fn new(provider: ProviderConfig) -> Self {
        Self::with_http_client(reqwest::Client::new(), provider)
    }

    pub fn with_http_client(http: reqwest::Client, provider: ProviderConfig) -> Self {
        Self { http, provider }
    }

    pub fn provider(&self) -> &ProviderConfig {
        &self.provider
    }

    fn build_request(&self, prompt: &Prompt<'_>) -> reqwest::RequestBuilder {
        match self.provider.kind() {
            ProviderKind::OpenAi => openai::build_request(&self.http, &self.provider, prompt),
            ProviderKind::Gemini => gemini::build_request(&self.http, &self.provider, prompt),
        }
    }

    fn extract_reply<'v>(&self, body: &'v Value) -> Option<&'v str> {
        match self.provider.kind() {
            ProviderKind::OpenAi => openai::extract_reply(body),
            ProviderKind::Gemini => gemini::extract_reply(body),
        }
    }

    /// Sends one request upstream and returns the reply text.
    ///
    /// A successful response without a recognizable reply yields
    /// [`UNEXTRACTABLE_REPLY`] instead of an error.
    pub async fn infer(&self, prompt: &Prompt<'_>) -> Result<Box<str>, InferError> {
        let kind = self.provider.kind();

        let response = self
            .build_request(prompt)
            .send()
            .await
            .map_err(|source| InferError::Unreachable { kind, source })?;

        let status = response.status();
        let body = read_json(response).await;
        tracing::debug!(provider = %kind, %status, body = %body, "Upstream response");

        if !status.is_success() {
            let message = error_message(&body).unwrap_or(UNKNOWN_ERROR);
            tracing::error!(provider = %kind, %status, "Upstream error: {}", message);
            return Err(InferError::Rejected {
                kind,
                status,
                message: message.into(),
            });
        }

        match self.extract_reply(&body) {
            Some(reply) => Ok(reply.into()),
            None => {
                tracing::warn!(provider = %kind, "Could not find reply text in upstream response");
                Ok(UNEXTRACTABLE_REPLY.into())
            }
        }
    }
}

/// Body as JSON; anything unreadable or unparsable becomes an empty object.
async fn read_json(response: reqwest::Response) -> Value {
    match response.bytes().await {
        Ok(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|error| {
            tracing::debug!("Upstream body is not JSON: {}", error);
            Value::Object(Map::new())
        }),
        Err(error) => {
            tracing::debug!("Failed to read upstream body: {}", error);
            Value::Object(Map::new())
        }
    }
}

fn non_empty_str<'v>(body: &'v Value, pointer: &str) -> Option<&'v str> {
    body.pointer(pointer)
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
}

fn error_message(body: &Value) -> Option<&str> {
    non_empty_str(body, "/error/message")
}
