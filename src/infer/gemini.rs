use serde::Serialize;
use serde_json::Value;

use super::{Prompt, ProviderConfig};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const MODEL: &str = "gemini-2.5-flash";
pub const TEMPERATURE: f64 = 0.7;
pub const MAX_OUTPUT_TOKENS: u32 = 800;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiRequest<'a> {
    pub contents: [GeminiContent<'a>; 1],
    pub generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
pub struct GeminiContent<'a> {
    pub parts: [GeminiPart<'a>; 1],
}

#[derive(Debug, Serialize)]
pub struct GeminiPart<'a> {
    pub text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub temperature: f64,
    pub max_output_tokens: u32,
}

/// Gemini has no system role here, so the context is folded into the user text.
fn user_text(prompt: &Prompt<'_>) -> String {
    match prompt.context {
        Some(context) => format!("{context}\n\nUser message: {}", prompt.message),
        None => format!("User message: {}", prompt.message),
    }
}

pub fn build_request(
    http: &reqwest::Client,
    config: &ProviderConfig,
    prompt: &Prompt<'_>,
) -> reqwest::RequestBuilder {
    let text = user_text(prompt);
    let gemini_request = GeminiRequest {
        contents: [GeminiContent { parts: [GeminiPart { text: &text }] }],
        generation_config: GenerationConfig {
            temperature: TEMPERATURE,
            max_output_tokens: MAX_OUTPUT_TOKENS,
        },
    };

    http.post(format!(
        "{}/v1beta/models/{MODEL}:generateContent",
        config.base_url()
    ))
    .query(&[("key", config.api_key())])
    .json(&gemini_request)
}

/// `candidates[0].content.parts[0].text`
pub fn extract_reply(body: &Value) -> Option<&str> {
    super::non_empty_str(body, "/candidates/0/content/parts/0/text")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infer::ProviderKind;
    use serde_json::json;

    fn sent_body(prompt: &Prompt<'_>) -> (reqwest::Request, Value) {
        let config =
            ProviderConfig::new(ProviderKind::Gemini, "gm-test").with_base_url("http://upstream");
        let request = build_request(&reqwest::Client::new(), &config, prompt).build().unwrap();
        let body = serde_json::from_slice(request.body().unwrap().as_bytes().unwrap()).unwrap();
        (request, body)
    }

    #[test]
    fn posts_generate_content_with_key_in_query() {
        let (request, body) = sent_body(&Prompt::new("Plan my day"));

        assert_eq!(
            request.url().as_str(),
            "http://upstream/v1beta/models/gemini-2.5-flash:generateContent?key=gm-test"
        );
        assert!(request.headers().get("authorization").is_none());
        assert_eq!(
            body,
            json!({
                "contents": [{ "parts": [{ "text": "User message: Plan my day" }] }],
                "generationConfig": { "temperature": 0.7, "maxOutputTokens": 800 },
            })
        );
    }

    #[test]
    fn context_precedes_user_message() {
        let (_, body) = sent_body(&Prompt::new("Plan my day").with_context(Some("TASKS")));

        assert_eq!(
            body["contents"][0]["parts"][0]["text"],
            "TASKS\n\nUser message: Plan my day"
        );
    }

    #[test]
    fn extracts_first_candidate_part() {
        let body = json!({
            "candidates": [
                {
                    "content": {
                        "parts": [{ "text": "Hello" }, { "text": "more" }],
                        "role": "model",
                    },
                },
            ],
        });
        assert_eq!(extract_reply(&body), Some("Hello"));
    }

    #[test]
    fn blocked_candidate_extracts_nothing() {
        let body = json!({ "candidates": [{ "finishReason": "SAFETY" }] });
        assert_eq!(extract_reply(&body), None);
        assert_eq!(extract_reply(&json!({ "promptFeedback": {} })), None);
    }
}
