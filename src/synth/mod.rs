//! Higher-fidelity alternatives to the plain compiler, plus the fallback
//! that guarantees the caller always gets a usable prompt.

use async_trait::async_trait;
use serde::Serialize;
use tracing::{info, warn};

use crate::cli::ProviderKind;
use crate::compiler;
use crate::config::Config;
use crate::errors::DesignError;
use crate::intent::{DesignIntent, JobType, ModifierSet};
use crate::provider::{ollama::OllamaChat, openai::OpenAiChat};

pub mod expert;
pub mod remote;

pub use expert::ExpertSynthesizer;
pub use remote::RemoteSynthesizer;

#[async_trait]
pub trait Synthesizer: Send + Sync {
    fn name(&self) -> &'static str;
    async fn synthesize(&self, job: Option<&JobType>, intent: &DesignIntent) -> Result<String, DesignError>;
}

pub type DynSynthesizer = Box<dyn Synthesizer>;

pub fn make_synthesizer(cfg: &Config) -> DynSynthesizer {
    match cfg.provider {
        ProviderKind::Local => Box::new(ExpertSynthesizer::new().with_latency(cfg.simulated_latency())),
        ProviderKind::OpenAI => Box::new(
            RemoteSynthesizer::new(
                OpenAiChat::new(&cfg.model, cfg.api_key.clone(), cfg.timeout_secs).with_api_base(&cfg.api_base),
            )
            .with_temperature(cfg.temperature),
        ),
        ProviderKind::Ollama => Box::new(
            RemoteSynthesizer::new(OllamaChat::new(&cfg.model, &cfg.ollama_url, cfg.timeout_secs))
                .with_temperature(cfg.temperature),
        ),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    Synthesized,
    Compiled,
}

#[derive(Debug, Clone, Serialize)]
pub struct Generated {
    pub prompt: String,
    pub source: Source,
    /// Why synthesis was abandoned, when it was.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
}

/// Try the synthesizer once; on any failure log it and compile instead.
pub async fn generate_prompt(
    synth: &dyn Synthesizer,
    job: Option<&JobType>,
    intent: &DesignIntent,
) -> Generated {
    match synth.synthesize(job, intent).await {
        Ok(prompt) => {
            info!(synthesizer = synth.name(), chars = prompt.chars().count(), "prompt synthesized");
            Generated { prompt, source: Source::Synthesized, fallback_reason: None }
        }
        Err(err) => {
            warn!(synthesizer = synth.name(), error = %err, "synthesis failed, falling back to compiler");
            Generated {
                prompt: compiler::compile(job, intent, &ModifierSet::new()),
                source: Source::Compiled,
                fallback_reason: Some(err.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::Category;

    struct Failing;

    #[async_trait]
    impl Synthesizer for Failing {
        fn name(&self) -> &'static str {
            "failing"
        }

        async fn synthesize(&self, _: Option<&JobType>, _: &DesignIntent) -> Result<String, DesignError> {
            Err(DesignError::remote(Some(500), "upstream exploded"))
        }
    }

    #[tokio::test]
    async fn failure_falls_back_to_compiler() {
        let job = JobType::new(Category::Funeral);
        let intent = DesignIntent::default();
        let out = generate_prompt(&Failing, Some(&job), &intent).await;
        assert_eq!(out.source, Source::Compiled);
        assert_eq!(out.prompt, compiler::compile(Some(&job), &intent, &ModifierSet::new()));
        assert_eq!(out.fallback_reason.as_deref(), Some("remote call failed (500): upstream exploded"));
    }

    #[test]
    fn factory_follows_configured_provider() {
        let mut cfg = Config::default();
        assert_eq!(make_synthesizer(&cfg).name(), "expert");
        cfg.provider = ProviderKind::OpenAI;
        assert_eq!(make_synthesizer(&cfg).name(), "OpenAI");
        cfg.provider = ProviderKind::Ollama;
        assert_eq!(make_synthesizer(&cfg).name(), "Ollama");
    }

    #[tokio::test]
    async fn openai_without_key_still_yields_a_prompt() {
        let cfg = Config { provider: ProviderKind::OpenAI, api_key: None, ..Config::default() };
        let synth = make_synthesizer(&cfg);
        let out = generate_prompt(synth.as_ref(), None, &DesignIntent::default()).await;
        assert_eq!(out.source, Source::Compiled);
        assert_eq!(out.fallback_reason.as_deref(), Some("OpenAI API key is missing"));
    }

    #[tokio::test]
    async fn success_keeps_synthesized_text() {
        let job = JobType::new(Category::Festival);
        let intent = DesignIntent::default();
        let out = generate_prompt(&ExpertSynthesizer::new(), Some(&job), &intent).await;
        assert_eq!(out.source, Source::Synthesized);
        assert_eq!(out.prompt, expert::compose(Some(&job), &intent));
        assert!(out.fallback_reason.is_none());
    }
}
