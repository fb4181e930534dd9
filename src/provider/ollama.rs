use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use super::{checked_body, http_client, ChatProvider};
use crate::errors::DesignError;
use crate::wire::{ChatRequest, OllamaChatBody, OllamaChatResponse, OllamaOptions};

pub const DEFAULT_URL: &str = "http://localhost:11434";

/// Local Ollama server; needs no credential.
pub struct OllamaChat {
    model: String,
    url: String,
    client: Client,
}

impl OllamaChat {
    pub fn new(model: impl Into<String>, url: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            model: model.into(),
            url: url.into(),
            client: http_client(timeout_secs),
        }
    }
}

pub fn message_text(body: &str) -> Result<String, DesignError> {
    let parsed: OllamaChatResponse = serde_json::from_str(body)
        .map_err(|e| DesignError::remote(None, format!("failed to parse ollama response: {e}")))?;
    let content = parsed.message.content.trim();
    if content.is_empty() {
        return Err(DesignError::remote(None, "model returned an empty completion"));
    }
    Ok(content.to_string())
}

#[async_trait]
impl ChatProvider for OllamaChat {
    fn name(&self) -> &'static str {
        "Ollama"
    }

    async fn complete(&self, req: &ChatRequest) -> Result<String, DesignError> {
        let url = format!("{}/api/chat", self.url.trim_end_matches('/'));
        let body = OllamaChatBody {
            model: &self.model,
            messages: req.messages(),
            stream: false,
            options: OllamaOptions { temperature: req.temperature },
        };
        debug!(%url, model = %self.model, "POST ollama chat");

        let resp = self.client.post(&url).json(&body).send().await?;
        let text = checked_body(resp, "Synthesis failed").await?;
        message_text(&text)
    }
}
