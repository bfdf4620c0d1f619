use reqwest::{Client, StatusCode};

use crate::actuators::chat::dto::{ChatReply, ChatRequest, TaskRecord};

/// Typed client for a running relay.
#[derive(Debug, Clone)]
pub struct RelayClient {
    http: Client,
    base_url: Box<str>,
}

impl RelayClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').into(),
        }
    }

    /// Posts one message. Error statuses still carry a reply, so they are returned, not raised.
    pub async fn send_message(
        &self,
        message: &str,
        tasks: &[TaskRecord],
    ) -> reqwest::Result<(StatusCode, ChatReply)> {
        let response = self
            .http
            .post(format!("{}/chat", self.base_url))
            .json(&ChatRequest::new(message).with_tasks(tasks.to_vec()))
            .send()
            .await?;

        let status = response.status();
        Ok((status, response.json::<ChatReply>().await?))
    }
}
