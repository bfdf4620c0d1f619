use serde::Serialize;
use serde_json::Value;

use super::{Prompt, ProviderConfig};
use crate::prompts;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const MODEL: &str = "gpt-3.5-turbo";

pub const ROLE_SYSTEM: &str = "system";
pub const ROLE_USER: &str = "user";

#[derive(Debug, Serialize)]
pub struct OpenAIRequest<'a> {
    pub model: &'a str,
    pub messages: [OpenAIMessage<'a>; 2],
}

#[derive(Debug, Serialize)]
pub struct OpenAIMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

pub fn build_request(
    http: &reqwest::Client,
    config: &ProviderConfig,
    prompt: &Prompt<'_>,
) -> reqwest::RequestBuilder {
    let system = prompts::system(prompt.context);
    let openai_request = OpenAIRequest {
        model: MODEL,
        messages: [
            OpenAIMessage { role: ROLE_SYSTEM, content: &system },
            OpenAIMessage { role: ROLE_USER, content: prompt.message },
        ],
    };

    http.post(format!("{}/v1/chat/completions", config.base_url()))
        .bearer_auth(config.api_key())
        .json(&openai_request)
}

/// `choices[0].message.content`
pub fn extract_reply(body: &Value) -> Option<&str> {
    super::non_empty_str(body, "/choices/0/message/content")
}
