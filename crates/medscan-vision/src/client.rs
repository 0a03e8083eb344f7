//! HTTP client for the `chat/completions` endpoint.
//!
//! Wraps `reqwest` with bearer auth and typed (de)serialization. Non-2xx
//! responses surface as [`VisionError::UnexpectedStatus`] with the response
//! body attached, since providers put the useful detail there.

use std::time::Duration;

use medscan_core::Language;
use reqwest::{Client, Url};

use crate::error::VisionError;
use crate::image::ImagePayload;
use crate::prompt::build_prompt;
use crate::types::{
    ChatCompletionRequest, ChatCompletionResponse, ChatMessage, ContentPart, ImageUrl,
};

const DEFAULT_TEMPERATURE: f32 = 0.3;
const DEFAULT_MAX_COMPLETION_TOKENS: u32 = 1024;

/// Longest slice of an error body kept in [`VisionError::UnexpectedStatus`].
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Client for one vision model behind an OpenAI-compatible API.
///
/// Use [`VisionClient::new`] with the provider's base URL (e.g.
/// `https://api.groq.com/openai/v1`) or a wiremock URI in tests.
pub struct VisionClient {
    client: Client,
    api_key: String,
    endpoint: Url,
    model: String,
    temperature: f32,
    max_completion_tokens: u32,
}

impl VisionClient {
    /// Creates a client with default sampling (temperature 0.3, 1024 tokens).
    ///
    /// # Errors
    ///
    /// Returns [`VisionError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`VisionError::InvalidBaseUrl`] if
    /// `base_url` is not a valid URL.
    pub fn new(
        api_key: &str,
        base_url: &str,
        model: &str,
        timeout_secs: u64,
        user_agent: &str,
    ) -> Result<Self, VisionError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        // Ensure exactly one trailing slash so `join` appends rather than
        // replacing the last path segment (`/openai/v1` → `/openai/v1/chat/...`).
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let endpoint = Url::parse(&normalised)
            .and_then(|base| base.join("chat/completions"))
            .map_err(|e| VisionError::InvalidBaseUrl {
                url: base_url.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            endpoint,
            model: model.to_owned(),
            temperature: DEFAULT_TEMPERATURE,
            max_completion_tokens: DEFAULT_MAX_COMPLETION_TOKENS,
        })
    }

    /// Overrides sampling parameters.
    #[must_use]
    pub fn with_sampling(mut self, temperature: f32, max_completion_tokens: u32) -> Self {
        self.temperature = temperature;
        self.max_completion_tokens = max_completion_tokens;
        self
    }

    /// Asks the model to read the package in `image`, answering in `language`.
    ///
    /// Returns the first choice's text, or an empty string when the model
    /// returns no choices or no content.
    ///
    /// # Errors
    ///
    /// - [`VisionError::Http`] on network failure.
    /// - [`VisionError::UnexpectedStatus`] on a non-2xx status.
    /// - [`VisionError::Deserialize`] if the body is not a chat completion.
    pub async fn extract_text(
        &self,
        image: &ImagePayload,
        language: Language,
    ) -> Result<String, VisionError> {
        let prompt = build_prompt(language);
        let data_uri = image.data_uri();
        let request = self.build_request(&prompt, &data_uri);

        let start = std::time::Instant::now();
        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(VisionError::UnexpectedStatus {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let completion: ChatCompletionResponse =
            serde_json::from_str(&body).map_err(|e| VisionError::Deserialize {
                context: format!("chat completion from {}", self.endpoint),
                source: e,
            })?;

        let text = completion
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        tracing::info!(
            model = %self.model,
            %language,
            image_bytes = image.bytes.len(),
            elapsed_ms = %start.elapsed().as_millis(),
            text_len = text.len(),
            "vision extraction complete"
        );

        Ok(text)
    }

    fn build_request<'a>(
        &'a self,
        prompt: &'a str,
        data_uri: &'a str,
    ) -> ChatCompletionRequest<'a> {
        ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: vec![
                    ContentPart::Text { text: prompt },
                    ContentPart::ImageUrl {
                        image_url: ImageUrl { url: data_uri },
                    },
                ],
            }],
            temperature: self.temperature,
            max_completion_tokens: self.max_completion_tokens,
            top_p: 1.0,
            stream: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(base_url: &str) -> VisionClient {
        VisionClient::new("test-key", base_url, "test-model", 30, "medscan-test/0.1")
            .expect("client construction should not fail")
    }

    #[test]
    fn endpoint_appends_chat_completions() {
        let client = test_client("https://api.groq.com/openai/v1");
        assert_eq!(
            client.endpoint.as_str(),
            "https://api.groq.com/openai/v1/chat/completions"
        );
    }

    #[test]
    fn endpoint_strips_trailing_slash() {
        let client = test_client("https://api.groq.com/openai/v1/");
        assert_eq!(
            client.endpoint.as_str(),
            "https://api.groq.com/openai/v1/chat/completions"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let result = VisionClient::new("k", "not a url", "m", 30, "ua");
        assert!(matches!(result, Err(VisionError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn request_carries_sampling_and_both_parts() {
        let client = test_client("https://example.test").with_sampling(0.1, 256);
        let request = client.build_request("read this", "data:image/png;base64,AA==");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "test-model");
        assert_eq!(json["max_completion_tokens"], 256);
        assert_eq!(json["stream"], false);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"][0]["text"], "read this");
        assert_eq!(
            json["messages"][0]["content"][1]["image_url"]["url"],
            "data:image/png;base64,AA=="
        );
    }
}
