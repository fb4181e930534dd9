use async_trait::async_trait;

use super::Synthesizer;
use crate::errors::DesignError;
use crate::intent::{DesignIntent, JobType};
use crate::prompt;
use crate::provider::ChatProvider;
use crate::wire::ChatRequest;

pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Delegates prompt writing to a chat model. Output is not deterministic.
pub struct RemoteSynthesizer<P> {
    provider: P,
    temperature: f32,
}

impl<P: ChatProvider> RemoteSynthesizer<P> {
    pub fn new(provider: P) -> Self {
        Self { provider, temperature: DEFAULT_TEMPERATURE }
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn request(&self, job: Option<&JobType>, intent: &DesignIntent) -> ChatRequest {
        ChatRequest {
            system: prompt::system_prompt_synthesis(),
            user: prompt::user_prompt_synthesis(job, intent),
            temperature: self.temperature,
        }
    }
}

#[async_trait]
impl<P: ChatProvider> Synthesizer for RemoteSynthesizer<P> {
    fn name(&self) -> &'static str {
        self.provider.name()
    }

    async fn synthesize(&self, job: Option<&JobType>, intent: &DesignIntent) -> Result<String, DesignError> {
        let req = self.request(job, intent);
        let text = self.provider.complete(&req).await?;
        let text = text.trim();
        if text.is_empty() {
            return Err(DesignError::remote(None, "model returned an empty completion"));
        }
        Ok(text.to_string())
    }
}
