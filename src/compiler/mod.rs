//! Deterministic prompt compiler: intent fields → ordered fragments → one
//! comma-joined prompt.

use regex::Regex;
use std::sync::OnceLock;

use crate::intent::{present, DesignIntent, DesignMode, JobType, Modifier, ModifierSet};
use crate::knowledge::{self as kb, CategoryProfile};

fn tamil_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\x{0B80}-\x{0BFF}]").expect("static regex"))
}

/// True when the text contains any character from the Tamil Unicode block.
pub fn contains_tamil(text: &str) -> bool {
    tamil_re().is_match(text)
}

pub fn script_note(text: &str) -> &'static str {
    if contains_tamil(text) {
        kb::TAMIL_SCRIPT
    } else {
        kb::LATIN_TYPOGRAPHY
    }
}

pub fn render_mode(intent: &DesignIntent) -> &'static str {
    match intent.design_mode {
        DesignMode::Ai => kb::RENDER_AI,
        DesignMode::Real => kb::RENDER_REAL,
    }
}

pub fn people_directive(intent: &DesignIntent) -> &'static str {
    if intent.include_people {
        kb::PEOPLE_PRESENT
    } else {
        kb::PEOPLE_ABSENT
    }
}

/// The category's core subject line with occasion, business name and title
/// filled in (each falling back to its default).
pub fn subject_line(job: Option<&JobType>, intent: &DesignIntent) -> String {
    let category = job.map(|j| j.category);
    let occasion = intent
        .occasion_name(category)
        .unwrap_or_else(|| kb::DEFAULT_OCCASION.to_string());
    let business = present(&intent.business_type).unwrap_or(kb::DEFAULT_BUSINESS);
    let title = job
        .and_then(|j| present(&j.title_en))
        .unwrap_or(kb::DEFAULT_TITLE);
    kb::profile(category).subject_line(&occasion, business, title)
}

/// Faith symbols, the secular directive, or nothing (festivals only).
pub fn faith_directive(profile: &CategoryProfile, intent: &DesignIntent) -> Option<&'static str> {
    match intent.faith() {
        Some(faith) => Some(kb::faith_fragment(Some(faith))),
        None if profile.requires_secular_statement => Some(kb::SECULAR),
        None => None,
    }
}

pub fn literal_text_directive(intent: &DesignIntent) -> Option<String> {
    intent.literal_text().map(|text| {
        format!(
            "include the specific text: \"{text}\" prominently in the design {}",
            script_note(text)
        )
    })
}

pub fn style_directive(intent: &DesignIntent, modifiers: &ModifierSet) -> String {
    let mut style = kb::style_fragment(&intent.style).to_string();
    if modifiers.contains(Modifier::MoreTraditional) {
        style.push_str(", ");
        style.push_str(kb::MORE_TRADITIONAL);
    }
    if modifiers.contains(Modifier::MoreFestive) {
        style.push_str(", ");
        style.push_str(kb::MORE_FESTIVE);
    }
    style
}

/// A theme color overrides everything; otherwise the mood, unless the user
/// asked for a fresh palette.
pub fn color_directive(intent: &DesignIntent, modifiers: &ModifierSet) -> String {
    if let Some(color) = present(&intent.theme_color) {
        return format!("dominant theme color: {color}");
    }
    if modifiers.contains(Modifier::ChangeColors) {
        kb::FRESH_PALETTE.to_string()
    } else {
        kb::mood_fragment(&intent.mood).to_string()
    }
}

pub fn category_detail(profile: &CategoryProfile, intent: &DesignIntent) -> Option<String> {
    profile.detail.as_ref().map(|d| {
        let answer = present(&intent.category_answer).unwrap_or(d.default_answer);
        format!("{}: {}. {}", d.label, answer, d.trailer)
    })
}

/// The ordered fragments `compile` joins. Never empty; always ends with
/// [`kb::QUALITY_STANDARDS`].
pub fn fragments(job: Option<&JobType>, intent: &DesignIntent, modifiers: &ModifierSet) -> Vec<String> {
    let profile = kb::profile(job.map(|j| j.category));
    let mut parts: Vec<String> = Vec::with_capacity(16);

    if intent.use_reference_image {
        parts.push(kb::REFERENCE_IMAGE.into());
    }
    parts.push(render_mode(intent).into());
    parts.push(subject_line(job, intent));
    if let Some(faith) = faith_directive(profile, intent) {
        parts.push(faith.into());
    }
    if let Some(text) = literal_text_directive(intent) {
        parts.push(text);
    }
    parts.push(people_directive(intent).into());
    parts.push(style_directive(intent, modifiers));
    parts.push(color_directive(intent, modifiers));
    if let Some(detail) = category_detail(profile, intent) {
        parts.push(detail);
    }
    if let Some(words) = present(&intent.tech_words) {
        parts.push(format!("technical parameters: {words}"));
    }
    if let Some(note) = present(&intent.extra_note) {
        parts.push(format!("CRITICAL DESIGN INSTRUCTION: {note}"));
    }
    if modifiers.contains(Modifier::LockLayout) {
        parts.push(kb::LOCK_LAYOUT.into());
    }
    if modifiers.contains(Modifier::LessDecoration) {
        parts.push(kb::LESS_DECORATION.into());
    }
    parts.push(kb::QUALITY_STANDARDS.into());
    parts
}

/// Compile an intent into a single image-generation prompt. Total and pure.
pub fn compile(job: Option<&JobType>, intent: &DesignIntent, modifiers: &ModifierSet) -> String {
    fragments(job, intent, modifiers).join(", ")
}
