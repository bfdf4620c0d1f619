use crate::{
    actuators::chat::dto::{ChatReply, ChatRequest},
    infer::{Client, Prompt, ProviderConfig, ProviderKind},
    prompts,
    service::{self, Error},
};

/// Stateless chat relay. Holds nothing but the provider chosen at startup.
#[derive(Debug, Clone)]
pub struct Relay {
    client: Option<Client>,
}

impl Relay {
    pub fn new(provider: Option<ProviderConfig>) -> Self {
        Self {
            client: provider.map(Client::new),
        }
    }

    pub fn provider_kind(&self) -> Option<ProviderKind> {
        self.client.as_ref().map(|client| client.provider().kind())
    }

    pub async fn chat(&self, request: ChatRequest) -> service::Result<ChatReply> {
        let message = request
            .message
            .as_deref()
            .filter(|message| !message.trim().is_empty())
            .ok_or(Error::EmptyMessage)?;

        let client = self.client.as_ref().ok_or(Error::Misconfigured)?;

        tracing::debug!(
            provider = %client.provider().kind(),
            tasks = request.tasks.len(),
            "Incoming chat message: {:?}",
            message
        );

        let context = prompts::task_context(&request.tasks);
        let prompt = Prompt::new(message).with_context(context.as_deref());
        let reply = client.infer(&prompt).await?;

        Ok(ChatReply::new(reply))
    }
}
