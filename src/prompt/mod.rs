//! Instructions sent to the remote chat model when synthesis is delegated.

use crate::intent::{present, DesignIntent, DesignMode, JobType};
use crate::knowledge as kb;

pub fn system_prompt_synthesis() -> String {
    format!(
        r#"You are an expert prompt engineer for South Indian print design: festival posters, cracker box wrappers, obituary notices, shop and business advertisements, event flyers.

You receive a field-by-field summary of what the customer wants. Write ONE descriptive prompt for a text-to-image model that will produce a print-ready design.

Rules:
- Output only the prompt text. No markdown, no headings, no quotes around the whole prompt, no commentary.
- Reproduce any "Literal text" value exactly, character for character, inside double quotes. If it is Tamil, say it must be rendered exactly in Tamil script.
- If "Faith" is none, the design must be strictly secular with no religious symbols (festival posters may simply omit religion).
- If "Include people" is no, there must be no human faces.
- Cracker wrappers are flat, unfolded 2D rectangular artwork, never a 3D box.
- A theme color, when given, dominates the palette.
- Respect the render mode: "ai" means imaginative illustrated art, "real" means photorealistic commercial design.
- Prefer concrete regional motifs (kolam, diyas, marigold garlands, temple borders, sugarcane, banana leaves) where they fit the category.
- End the prompt with: {quality}"#,
        quality = kb::QUALITY_STANDARDS
    )
}

fn yes_no(b: bool) -> &'static str {
    if b {
        "yes"
    } else {
        "no"
    }
}

/// Serialize the intent as `Field: value` lines. Blank free-text fields are
/// left out; enumerated fields are always listed.
pub fn user_prompt_synthesis(job: Option<&JobType>, intent: &DesignIntent) -> String {
    let category = job.map(|j| j.category);
    let mut lines: Vec<String> = Vec::new();

    match job {
        Some(j) => lines.push(format!("Category: {} ({})", j.title_en, j.category)),
        None => lines.push(format!("Category: {}", kb::DEFAULT_TITLE)),
    }
    if let Some(occasion) = intent.occasion_name(category) {
        lines.push(format!("Occasion: {occasion}"));
    }
    if let Some(business) = present(&intent.business_type) {
        lines.push(format!("Business: {business}"));
    }
    lines.push(format!("Style: {}", kb::style_fragment(&intent.style)));
    lines.push(format!(
        "Render mode: {}",
        match intent.design_mode {
            DesignMode::Ai => "ai",
            DesignMode::Real => "real",
        }
    ));
    lines.push(format!(
        "Faith: {}",
        intent.faith().map(|f| f.key()).unwrap_or("none")
    ));
    lines.push(format!("Include people: {}", yes_no(intent.include_people)));
    lines.push(format!("Use reference image: {}", yes_no(intent.use_reference_image)));
    if let Some(text) = intent.literal_text() {
        lines.push(format!("Literal text: \"{text}\""));
    }
    match present(&intent.theme_color) {
        Some(color) => lines.push(format!("Theme color: {color}")),
        None => lines.push(format!("Mood: {}", kb::mood_fragment(&intent.mood))),
    }
    if let Some(detail) = kb::profile(category).detail.as_ref() {
        let answer = present(&intent.category_answer).unwrap_or(detail.default_answer);
        lines.push(format!("{}: {}", detail.label, answer));
    }
    if let Some(words) = present(&intent.tech_words) {
        lines.push(format!("Technical words: {words}"));
    }
    if let Some(note) = present(&intent.extra_note) {
        lines.push(format!("Extra note: {note}"));
    }
    lines.push(format!("Aspect ratio: {}", intent.aspect_ratio));

    format!(
        "Design request:\n{}\n\nWrite the image prompt now.",
        lines.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::{Category, Symbol};

    #[test]
    fn summary_lists_fields_one_per_line() {
        let intent = DesignIntent {
            occasion: "diwali".into(),
            symbol: Symbol::Hindu,
            specific_text: "Happy Diwali".into(),
            category_answer: "High (Very bright)".into(),
            ..DesignIntent::default()
        };
        let user = user_prompt_synthesis(Some(&JobType::new(Category::Festival)), &intent);
        assert!(user.contains("Category: Festival Poster (festival)\n"));
        assert!(user.contains("Occasion: Diwali\n"));
        assert!(user.contains("Faith: hindu\n"));
        assert!(user.contains("Literal text: \"Happy Diwali\"\n"));
        assert!(user.contains("Lighting density: High (Very bright)\n"));
        assert!(!user.contains("Business:"));
        assert!(!user.contains("Extra note:"));
    }

    #[test]
    fn theme_color_replaces_mood_line() {
        let intent = DesignIntent { theme_color: "Emerald".into(), ..DesignIntent::default() };
        let user = user_prompt_synthesis(None, &intent);
        assert!(user.contains("Theme color: Emerald"));
        assert!(!user.contains("Mood:"));
    }

    #[test]
    fn system_prompt_ends_with_quality_floor() {
        assert!(system_prompt_synthesis().trim_end().ends_with(kb::QUALITY_STANDARDS));
    }
}
