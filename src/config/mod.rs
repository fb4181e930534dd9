use anyhow::{Context, Result};
use fs_err as fs;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::cli::{Args, ProviderKind};
use crate::provider::{ollama, openai};
use crate::synth::remote::DEFAULT_TEMPERATURE;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub schema_version: String,
    pub provider: ProviderKind,
    pub model: String,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub api_base: String,
    pub ollama_url: String,
    pub temperature: f32,
    pub timeout_secs: u64,
    pub image_model: String,
    pub image_size: String,
    /// Artificial pause before the local expert answers.
    pub simulated_latency_ms: u64,
    pub out_dir: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            schema_version: "2026-01-01".into(),
            provider: ProviderKind::Local,
            model: "gpt-4o-mini".into(),
            api_key: None,
            api_base: openai::DEFAULT_API_BASE.into(),
            ollama_url: ollama::DEFAULT_URL.into(),
            temperature: DEFAULT_TEMPERATURE,
            timeout_secs: 120,
            image_model: "dall-e-3".into(),
            image_size: "1024x1024".into(),
            simulated_latency_ms: 0,
            out_dir: ".".into(),
        }
    }
}

/// Deserialize a JSON, YAML or TOML file, picked by extension (TOML when
/// there is none).
pub fn load_file<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)?;
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    let parsed = match ext.as_str() {
        "json" => serde_json::from_str(&raw).map_err(anyhow::Error::from),
        "yaml" | "yml" => serde_yaml::from_str(&raw).map_err(anyhow::Error::from),
        _ => toml::from_str(&raw).map_err(anyhow::Error::from),
    };
    parsed.with_context(|| format!("invalid file: {}", path.display()))
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut cfg = match path {
            Some(p) => load_file::<Config>(p)?,
            None => Config::default(),
        };
        if cfg.api_key.as_deref().map_or(true, |k| k.trim().is_empty()) {
            cfg.api_key = std::env::var("OPENAI_API_KEY").ok();
        }
        Ok(cfg)
    }

    pub fn apply_args(&mut self, args: &Args) {
        if let Some(p) = args.provider {
            self.provider = p;
        }
        if let Some(m) = &args.model {
            self.model = m.clone();
        }
        if let Some(t) = args.timeout_secs {
            self.timeout_secs = t;
        }
    }

    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(self.simulated_latency_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn write_tmp(suffix: &str, body: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        f.write_all(body.as_bytes()).unwrap();
        f
    }

    #[test]
    fn loads_partial_toml_over_defaults() {
        let f = write_tmp(
            ".toml",
            "provider = \"ollama\"\nmodel = \"llama3.1\"\ntemperature = 0.2\napi_key = \"sk-test\"\n",
        );
        let cfg = Config::load(Some(f.path())).unwrap();
        assert_eq!(cfg.provider, ProviderKind::Ollama);
        assert_eq!(cfg.model, "llama3.1");
        assert_eq!(cfg.temperature, 0.2);
        assert_eq!(cfg.api_key.as_deref(), Some("sk-test"));
        assert_eq!(cfg.image_model, "dall-e-3");
    }

    #[test]
    fn loads_yaml() {
        let f = write_tmp(".yaml", "provider: openai\nsimulated_latency_ms: 800\napi_key: sk-yaml\n");
        let cfg = Config::load(Some(f.path())).unwrap();
        assert_eq!(cfg.provider, ProviderKind::OpenAI);
        assert_eq!(cfg.simulated_latency(), Duration::from_millis(800));
    }

    #[test]
    fn malformed_file_reports_path() {
        let f = write_tmp(".toml", "provider = [");
        let err = Config::load(Some(f.path())).unwrap_err();
        assert!(format!("{err:#}").contains("invalid file"));
    }

    #[test]
    fn args_override_config() {
        let mut cfg = Config::default();
        let args = Args::parse_from(["mind2design", "--provider", "ollama", "--model", "phi3", "--timeout-secs", "5"]);
        cfg.apply_args(&args);
        assert_eq!(cfg.provider, ProviderKind::Ollama);
        assert_eq!(cfg.model, "phi3");
        assert_eq!(cfg.timeout_secs, 5);
    }

    #[test]
    fn api_key_is_never_serialized() {
        let cfg = Config { api_key: Some("sk-secret".into()), ..Config::default() };
        let out = serde_json::to_string(&cfg).unwrap();
        assert!(!out.contains("sk-secret"));
    }
}
