use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config;
use crate::intent::{DesignIntent, DesignMode, JobType, Layout, Modifier, ModifierSet, Religion, Symbol};

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    /// Local expert rule tables, no network.
    #[value(alias = "expert")]
    Local,
    #[value(name = "openai", alias = "open-ai")]
    OpenAI,
    Ollama,
}

#[derive(Parser, Debug, Default)]
#[command(name = "mind2design", version, about = "Compile South Indian print design intents into image-generation prompts")]
pub struct Args {
    /// Design category: festival, crackers, funeral, business, event, or any custom title
    #[arg(long)]
    pub job: Option<String>,

    /// Load the intent from a JSON, YAML or TOML file; flags below override it
    #[arg(long)]
    pub intent: Option<PathBuf>,

    #[arg(long)]
    pub occasion: Option<String>,

    #[arg(long)]
    pub custom_occasion: Option<String>,

    #[arg(long)]
    pub style: Option<String>,

    #[arg(long)]
    pub mood: Option<String>,

    #[arg(long, default_value_t = false)]
    pub people: bool,

    #[arg(long)]
    pub theme_color: Option<String>,

    #[arg(long)]
    pub tech_words: Option<String>,

    /// Literal text to render in the design (Tamil script is detected)
    #[arg(long)]
    pub text: Option<String>,

    #[arg(long)]
    pub category_answer: Option<String>,

    /// none | hindu | muslim | christian
    #[arg(long)]
    pub symbol: Option<String>,

    /// ai | real
    #[arg(long)]
    pub mode: Option<String>,

    #[arg(long)]
    pub note: Option<String>,

    #[arg(long)]
    pub business: Option<String>,

    #[arg(long, default_value_t = false)]
    pub reference_image: bool,

    /// secular | hindu | muslim | christian
    #[arg(long)]
    pub religion: Option<String>,

    #[arg(long)]
    pub layout: Option<String>,

    #[arg(long)]
    pub aspect_ratio: Option<String>,

    /// Refinement tags; implies plain compilation
    #[arg(long = "modifier", value_enum)]
    pub modifiers: Vec<Modifier>,

    #[arg(long, value_enum)]
    pub provider: Option<ProviderKind>,

    #[arg(long)]
    pub model: Option<String>,

    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Skip synthesis and run the deterministic compiler only
    #[arg(long, default_value_t = false)]
    pub compile_only: bool,

    /// Send the final prompt to the image API and print the image URL
    #[arg(long, default_value_t = false)]
    pub render: bool,

    /// Save intent, prompt and description under the output directory
    #[arg(long, default_value_t = false)]
    pub save: bool,

    /// Toggle modifiers and edit the note after the first result
    #[arg(long, default_value_t = false)]
    pub interactive: bool,

    /// Print the options, styles and questions for --job (or every category)
    #[arg(long, default_value_t = false)]
    pub list_options: bool,

    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

fn set(slot: &mut String, value: &Option<String>) {
    if let Some(v) = value {
        *slot = v.clone();
    }
}

impl Args {
    pub fn job_type(&self) -> Option<JobType> {
        self.job.as_deref().map(JobType::from_id)
    }

    pub fn modifier_set(&self) -> ModifierSet {
        self.modifiers.iter().copied().collect()
    }

    /// A fresh intent (file first, if given) with flag overrides applied.
    pub fn build_intent(&self) -> anyhow::Result<DesignIntent> {
        let mut intent = match &self.intent {
            Some(path) => config::load_file::<DesignIntent>(path)?,
            None => DesignIntent::default(),
        };

        set(&mut intent.occasion, &self.occasion);
        set(&mut intent.custom_occasion, &self.custom_occasion);
        set(&mut intent.style, &self.style);
        set(&mut intent.mood, &self.mood);
        set(&mut intent.theme_color, &self.theme_color);
        set(&mut intent.tech_words, &self.tech_words);
        set(&mut intent.specific_text, &self.text);
        set(&mut intent.category_answer, &self.category_answer);
        set(&mut intent.extra_note, &self.note);
        set(&mut intent.business_type, &self.business);
        set(&mut intent.aspect_ratio, &self.aspect_ratio);

        if self.people {
            intent.include_people = true;
        }
        if self.reference_image {
            intent.use_reference_image = true;
        }
        if let Some(s) = &self.symbol {
            intent.symbol = Symbol::from_key(s);
        }
        if let Some(m) = &self.mode {
            intent.design_mode = DesignMode::from_key(m);
        }
        if let Some(r) = &self.religion {
            intent.religion = Religion::from_key(r);
        }
        if let Some(l) = &self.layout {
            intent.layout = Layout::from_key(l);
        }
        Ok(intent)
    }
}
