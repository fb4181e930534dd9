use async_trait::async_trait;
use std::sync::Arc;

use crate::config::Config;
use crate::errors::DesignError;
use crate::wire::{self, ChatRequest};

pub mod ollama;
pub mod openai;

/// A chat model that turns one system + user exchange into free text.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    fn name(&self) -> &'static str;
    async fn complete(&self, req: &ChatRequest) -> Result<String, DesignError>;
}

/// A text-to-image service returning the URL of one rendered image.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, DesignError>;
}

pub type DynProvider = Arc<dyn ChatProvider>;

pub fn make_image_generator(cfg: &Config) -> openai::OpenAiImages {
    openai::OpenAiImages::new(&cfg.image_model, cfg.api_key.clone(), cfg.timeout_secs)
        .with_api_base(&cfg.api_base)
        .with_size(&cfg.image_size)
}

#[async_trait]
impl<P: ChatProvider + ?Sized> ChatProvider for Arc<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    async fn complete(&self, req: &ChatRequest) -> Result<String, DesignError> {
        (**self).complete(req).await
    }
}

/// Read the body, turning a non-2xx status into `DesignError::Remote` with
/// the API's own message when it sent one.
pub(crate) async fn checked_body(resp: reqwest::Response, fallback: &str) -> Result<String, DesignError> {
    let status = resp.status();
    let text = resp.text().await?;
    tracing::debug!(status = %status, bytes = text.len(), "remote response");
    if !status.is_success() {
        let message = wire::error_message(&text).unwrap_or_else(|| fallback.to_string());
        return Err(DesignError::remote(Some(status.as_u16()), message));
    }
    Ok(text)
}

pub(crate) fn http_client(timeout_secs: u64) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(std::time::Duration::from_secs(timeout_secs))
        .build()
        .unwrap_or_default()
}
