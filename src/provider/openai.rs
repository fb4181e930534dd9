use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::{checked_body, http_client, ChatProvider, ImageGenerator};
use crate::errors::DesignError;
use crate::wire::{ChatCompletion, ChatCompletionBody, ChatRequest, ImageBody, ImageResponse};

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
const PROVIDER: &str = "OpenAI";

fn require_key(key: &Option<String>) -> Result<&str, DesignError> {
    key.as_deref()
        .map(str::trim)
        .filter(|k| !k.is_empty())
        .ok_or(DesignError::MissingCredential { provider: PROVIDER })
}

/// OpenAI-compatible chat completions endpoint.
pub struct OpenAiChat {
    model: String,
    api_key: Option<String>,
    api_base: String,
    client: Client,
}

impl OpenAiChat {
    pub fn new(model: impl Into<String>, api_key: Option<String>, timeout_secs: u64) -> Self {
        Self {
            model: model.into(),
            api_key,
            api_base: DEFAULT_API_BASE.into(),
            client: http_client(timeout_secs),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }
}

/// First choice's content, trimmed. An empty completion counts as a failed call.
pub fn completion_text(body: &str) -> Result<String, DesignError> {
    let parsed: ChatCompletion = serde_json::from_str(body)
        .map_err(|e| DesignError::remote(None, format!("failed to parse chat completion: {e}")))?;
    parsed
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message.content)
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
        .ok_or_else(|| DesignError::remote(None, "model returned an empty completion"))
}

#[async_trait]
impl ChatProvider for OpenAiChat {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn complete(&self, req: &ChatRequest) -> Result<String, DesignError> {
        let key = require_key(&self.api_key)?;
        let url = format!("{}/chat/completions", self.api_base.trim_end_matches('/'));
        let body = ChatCompletionBody {
            model: &self.model,
            messages: req.messages(),
            temperature: req.temperature,
        };
        debug!(%url, model = %self.model, "POST chat completion");

        let resp = self.client.post(&url).bearer_auth(key).json(&body).send().await?;
        let text = checked_body(resp, "Synthesis failed").await?;
        completion_text(&text)
    }
}

/// OpenAI images endpoint: one square image, returned as a URL.
pub struct OpenAiImages {
    model: String,
    size: String,
    api_key: Option<String>,
    api_base: String,
    client: Client,
}

impl OpenAiImages {
    pub fn new(model: impl Into<String>, api_key: Option<String>, timeout_secs: u64) -> Self {
        Self {
            model: model.into(),
            size: "1024x1024".into(),
            api_key,
            api_base: DEFAULT_API_BASE.into(),
            client: http_client(timeout_secs),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_size(mut self, size: impl Into<String>) -> Self {
        self.size = size.into();
        self
    }
}

pub fn image_url(body: &str) -> Result<String, DesignError> {
    let parsed: ImageResponse = serde_json::from_str(body)
        .map_err(|e| DesignError::remote(None, format!("failed to parse image response: {e}")))?;
    parsed
        .data
        .into_iter()
        .next()
        .and_then(|d| d.url)
        .ok_or_else(|| DesignError::remote(None, "Generation failed"))
}

#[async_trait]
impl ImageGenerator for OpenAiImages {
    async fn generate(&self, prompt: &str) -> Result<String, DesignError> {
        let key = require_key(&self.api_key)?;
        let url = format!("{}/images/generations", self.api_base.trim_end_matches('/'));
        let body = ImageBody {
            model: &self.model,
            prompt,
            n: 1,
            size: &self.size,
            response_format: "url",
        };
        debug!(%url, model = %self.model, prompt_len = prompt.len(), "POST image generation");

        let resp = self.client.post(&url).bearer_auth(key).json(&body).send().await?;
        let text = checked_body(resp, "Generation failed").await?;
        image_url(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn chat_without_key_fails_before_any_request() {
        // unroutable base: reaching the network would fail differently
        let chat = OpenAiChat::new("gpt-4o-mini", None, 1).with_api_base("http://127.0.0.1:9");
        let req = ChatRequest { system: "s".into(), user: "u".into(), temperature: 0.7 };
        let err = chat.complete(&req).await.unwrap_err();
        assert_eq!(err, DesignError::MissingCredential { provider: "OpenAI" });
    }

    #[tokio::test]
    async fn images_with_blank_key_fail_as_missing_credential() {
        let images = OpenAiImages::new("dall-e-3", Some("  ".into()), 1).with_api_base("http://127.0.0.1:9");
        let err = images.generate("a poster").await.unwrap_err();
        assert!(matches!(err, DesignError::MissingCredential { .. }));
    }

    #[test]
    fn completion_text_is_trimmed() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"\n  A festive poster...  \n"}}]}"#;
        assert_eq!(completion_text(body).unwrap(), "A festive poster...");
    }

    #[test]
    fn blank_completion_is_an_error() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"   "}}]}"#;
        assert!(matches!(completion_text(body), Err(DesignError::Remote { .. })));
        assert!(completion_text(r#"{"choices":[]}"#).is_err());
    }

    #[test]
    fn image_url_takes_first_datum() {
        let body = r#"{"created":1,"data":[{"url":"https://img.example/a.png"},{"url":"https://img.example/b.png"}]}"#;
        assert_eq!(image_url(body).unwrap(), "https://img.example/a.png");
        assert!(image_url(r#"{"data":[]}"#).is_err());
    }
}
