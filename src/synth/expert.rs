use async_trait::async_trait;
use std::time::Duration;

use super::Synthesizer;
use crate::compiler;
use crate::errors::DesignError;
use crate::intent::{present, Category, DesignIntent, JobType};
use crate::knowledge::{self as kb, EXPERT_RELIGION, EXPERT_STYLE_ACCENTS};

/// Local "expert system": deeper per-category knowledge, organised into
/// labelled sections separated by blank lines.
#[derive(Debug, Clone, Default)]
pub struct ExpertSynthesizer {
    latency: Duration,
}

impl ExpertSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pause before answering so a UI can show a "processing" state.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

fn section(label: &str, parts: &[&str]) -> Option<String> {
    let body: Vec<&str> = parts.iter().copied().filter(|p| !p.is_empty()).collect();
    (!body.is_empty()).then(|| format!("{label}: {}", body.join(", ")))
}

/// Pure, deterministic sectioned composition.
pub fn compose(job: Option<&JobType>, intent: &DesignIntent) -> String {
    let category = job.map(|j| j.category);
    let profile = kb::profile(category);

    let subject = intent
        .occasion_name(category)
        .or_else(|| present(&intent.business_type).map(str::to_string))
        .unwrap_or_else(|| "General".to_string());
    let niche = format!("{subject} {}", intent.category_answer);

    let subject_line = compiler::subject_line(job, intent);
    let style = compiler::style_directive(intent, &Default::default());
    let accent = EXPERT_STYLE_ACCENTS.find(&intent.style).unwrap_or_default();
    let focus = format!("specifically for: {subject}");
    let motif = kb::motif_for(&niche, category).unwrap_or_default();

    let cultural = match intent.faith() {
        Some(faith) => EXPERT_RELIGION.get(faith.key()),
        None if profile.requires_secular_statement => kb::SECULAR,
        None => "regional South Indian festive traditions, no specific religious iconography",
    };

    let literal = intent.literal_text().map(|text| {
        format!(
            "prominently feature the text \"{text}\" {} in a culturally appropriate decorative South Indian font style",
            compiler::script_note(text)
        )
    });
    let brand = match category {
        Some(Category::Business) => present(&intent.business_type)
            .map(|b| format!("brand name \"{b}\" in large decorative typography")),
        _ => None,
    };

    let color = compiler::color_directive(intent, &Default::default());
    let detail = compiler::category_detail(profile, intent).unwrap_or_default();
    let reference = if intent.use_reference_image { kb::REFERENCE_IMAGE } else { "" };
    let tech = present(&intent.tech_words)
        .map(|w| format!("technical parameters: {w}"))
        .unwrap_or_default();
    let note = present(&intent.extra_note)
        .map(|n| format!("CRITICAL DESIGN INSTRUCTION: {n}"))
        .unwrap_or_default();

    let sections = [
        section("TITLE", &[subject_line.as_str()]),
        section("AESTHETIC", &[profile.aesthetic, compiler::render_mode(intent), style.as_str(), accent]),
        section("SUBJECT FOCUS", &[focus.as_str(), motif]),
        section("CULTURAL CONTEXT", &[cultural]),
        section(
            "BRANDING",
            &[literal.as_deref().unwrap_or_default(), brand.as_deref().unwrap_or_default()],
        ),
        section("DECOR", &[detail.as_str(), color.as_str()]),
        section("LAYOUT", &[reference, profile.layout]),
        section("CONSTRAINTS", &[compiler::people_directive(intent), note.as_str()]),
        section("TECHNICAL", &[tech.as_str(), kb::EXPERT_TECHNICAL, kb::QUALITY_STANDARDS]),
    ];

    sections.into_iter().flatten().collect::<Vec<_>>().join("\n\n")
}

#[async_trait]
impl Synthesizer for ExpertSynthesizer {
    fn name(&self) -> &'static str {
        "expert"
    }

    async fn synthesize(&self, job: Option<&JobType>, intent: &DesignIntent) -> Result<String, DesignError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        Ok(compose(job, intent))
    }
}
