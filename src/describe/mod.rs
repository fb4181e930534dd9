//! Tamil restatement of an intent, for the user to check before generating.
//!
//! Mirrors the compiler's decision points and defaults so the two never
//! disagree about a field that was filled in.

use crate::intent::{present, Category, DesignIntent, DesignMode, Faith, JobType};
use crate::knowledge as kb;

const DEFAULT_OCCASION_TA: &str = "கொண்டாட்டம்";
const DEFAULT_BUSINESS_TA: &str = "வணிகம்";

pub const CLOSER_TA: &str = "இந்தக் கட்டளை அச்சுக்கு ஏற்ற வகையில் (300 DPI) துல்லியமாக வடிவமைக்கப்பட்டுள்ளது.";

fn faith_ta(faith: Faith) -> &'static str {
    match faith {
        Faith::Hindu => "இந்து",
        Faith::Muslim => "முஸ்லீம்",
        Faith::Christian => "கிறிஸ்தவ",
    }
}

fn opening(job: Option<&JobType>, intent: &DesignIntent) -> String {
    let category = job.map(|j| j.category);
    let occasion = intent
        .occasion_name_ta(category)
        .unwrap_or_else(|| DEFAULT_OCCASION_TA.to_string());
    match category {
        Some(Category::Business) => {
            let business = present(&intent.business_type).unwrap_or(DEFAULT_BUSINESS_TA);
            format!("இது {business} நிறுவனத்திற்கான ஒரு தொழில்முறை விளம்பர வடிவமைப்பு.")
        }
        Some(Category::Crackers) => {
            format!("இது {occasion} பட்டாசு பெட்டிக்கான பிரத்யேக உறை வடிவமைப்பு. இது நீண்ட செவ்வக மற்றும் சமச்சீர் அமைப்பைக் கொண்டிருக்கும்.")
        }
        Some(Category::Funeral) => {
            "இது ஒரு மரியாதைக்குரிய நினைவஞ்சலி சுவரொட்டி வடிவமைப்பு.".to_string()
        }
        _ => format!("இது {occasion} குறித்த ஒரு உயர்தர வடிவமைப்பு."),
    }
}

/// Describe the intent in Tamil. Total; never returns an empty string.
pub fn describe_in_tamil(job: Option<&JobType>, intent: &DesignIntent) -> String {
    let profile = kb::profile(job.map(|j| j.category));
    let mut sentences = vec![opening(job, intent)];

    if intent.use_reference_image {
        sentences.push("வழங்கப்பட்ட குறிப்புப் படத்தைப் போலவே இது வடிவமைக்கப்படும்.".into());
    }

    sentences.push(match intent.design_mode {
        DesignMode::Ai => "இது ஒரு கற்பனை கலைநயமிக்க தோற்றத்தில் இருக்கும்.".into(),
        DesignMode::Real => "இது ஒரு புகைப்படத்தைப் போன்ற தத்ரூபமான தோற்றத்தில் இருக்கும்.".into(),
    });

    match intent.faith() {
        Some(faith) => sentences.push(format!("இதில் {} மதச் சின்னங்கள் சேர்க்கப்பட்டுள்ளன.", faith_ta(faith))),
        None if profile.requires_secular_statement => {
            sentences.push("இதில் எந்த மதச் சின்னங்களும் இல்லை, இது ஒரு பொதுவான டிசைன்.".into())
        }
        None => {}
    }

    sentences.push(if intent.include_people {
        "இதில் மக்கள் பாரம்பரிய உடையில் இருப்பார்கள்.".into()
    } else {
        "இதில் மனித உருவங்கள் இருக்காது.".into()
    });

    if let Some(text) = intent.literal_text() {
        sentences.push(format!("இதில் \"{text}\" என்ற சொற்கள் முக்கியமாக இடம்பெறும்."));
    }

    if let Some(color) = present(&intent.theme_color) {
        sentences.push(format!("டிசைனின் முக்கிய நிறம் {color} ஆக இருக்கும்."));
    }

    sentences.push(CLOSER_TA.into());
    sentences.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::Symbol;

    #[test]
    fn literal_text_is_quoted_as_entered() {
        let intent = DesignIntent { specific_text: " இனிய பொங்கல் ".into(), ..DesignIntent::default() };
        let out = describe_in_tamil(None, &intent);
        assert!(out.contains("\" இனிய பொங்கல் \""));
    }

    #[test]
    fn default_intent_still_describes_something() {
        let out = describe_in_tamil(None, &DesignIntent::default());
        assert!(out.starts_with("இது கொண்டாட்டம் குறித்த"));
        assert!(out.ends_with(CLOSER_TA));
    }

    #[test]
    fn business_opening_uses_business_name() {
        let intent = DesignIntent { business_type: "Anbu Textiles".into(), ..DesignIntent::default() };
        let out = describe_in_tamil(Some(&JobType::new(Category::Business)), &intent);
        assert!(out.starts_with("இது Anbu Textiles நிறுவனத்திற்கான"));
        assert!(out.contains("எந்த மதச் சின்னங்களும் இல்லை"));
    }

    #[test]
    fn festival_occasion_id_resolves_to_tamil_name() {
        let intent = DesignIntent {
            occasion: "pongal".into(),
            symbol: Symbol::Hindu,
            ..DesignIntent::default()
        };
        let out = describe_in_tamil(Some(&JobType::new(Category::Festival)), &intent);
        assert!(out.contains("பொங்கல் குறித்த"));
        assert!(out.contains("இந்து மதச் சின்னங்கள்"));
        assert!(!out.contains("எந்த மதச் சின்னங்களும் இல்லை"));
    }

    #[test]
    fn festival_without_faith_has_no_secular_sentence() {
        let out = describe_in_tamil(Some(&JobType::new(Category::Festival)), &DesignIntent::default());
        assert!(!out.contains("மதச் சின்னங்கள"));
    }

    #[test]
    fn user_text_and_color_are_echoed() {
        let intent = DesignIntent {
            specific_text: "இனிய தீபாவளி".into(),
            theme_color: "Deep Red".into(),
            include_people: true,
            ..DesignIntent::default()
        };
        let out = describe_in_tamil(Some(&JobType::new(Category::Crackers)), &intent);
        assert!(out.contains("\"இனிய தீபாவளி\""));
        assert!(out.contains("Deep Red"));
        assert!(out.contains("பாரம்பரிய உடையில்"));
    }
}
