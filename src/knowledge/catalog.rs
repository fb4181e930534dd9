//! Suggestion sets offered to the user while building an intent.

use crate::intent::Category;

#[derive(Debug, Clone, Copy)]
pub struct CatalogOption {
    pub id: &'static str,
    pub name_en: &'static str,
    pub name_ta: &'static str,
}

const fn opt(id: &'static str, name_en: &'static str, name_ta: &'static str) -> CatalogOption {
    CatalogOption { id, name_en, name_ta }
}

const FESTIVAL_OPTIONS: &[CatalogOption] = &[
    opt("diwali", "Diwali", "தீபாவளி"),
    opt("pongal", "Pongal", "பொங்கல்"),
    opt("holi", "Holi", "ஹோலி"),
    opt("eid", "Eid", "ஈத்"),
    opt("navratri", "Navratri", "நவராத்திரி"),
    opt("republic", "Republic Day", "குடியரசு தினம்"),
    opt("onam", "Onam", "ஓணம்"),
    opt("raksha", "Raksha Bandhan", "ரக்ஷா பந்தன்"),
    opt("christmas", "Christmas", "கிறிஸ்துமஸ்"),
];

const CRACKER_OPTIONS: &[CatalogOption] = &[
    opt("red_wrapper", "Red Wrapper", "சிவப்பு உறை"),
    opt("green_wrapper", "Green Wrapper", "பச்சை உறை"),
    opt("box_design", "Box Design", "பெட்டி வடிவமைப்பு"),
    opt("sparklers", "Sparklers", "கம்பி மத்தாப்பு"),
    opt("chakra", "Ground Spinner", "தரைச்சக்கரம்"),
    opt("flowerpot", "Flower Pot", "பூச்சட்டி"),
];

const FUNERAL_OPTIONS: &[CatalogOption] = &[
    opt("condolence", "Condolence", "இரங்கல்"),
    opt("memorial", "Memorial", "நினைவஞ்சலி"),
    opt("sympathy", "Sympathy", "ஆறுதல்"),
    opt("tribute", "Tribute", "புகழஞ்சலி"),
];

const BUSINESS_OPTIONS: &[CatalogOption] = &[
    opt("opening", "Shop Opening", "கடை திறப்பு விழா"),
    opt("offer", "Discount Offer", "தள்ளுபடி சலுகை"),
    opt("new_arrival", "New Arrival", "புதிய வரவு"),
    opt("menu", "Service Menu", "சேவை விவரம்"),
];

const EVENT_OPTIONS: &[CatalogOption] = &[
    opt("political", "Political Meeting", "அரசியல் கூட்டம்"),
    opt("concert", "Music Concert", "இசை நிகழ்ச்சி"),
    opt("school", "School/College", "பள்ளி/கல்லூரி"),
    opt("feast", "Temple Feast", "கோவில் திருவிழா"),
];

/// Step-1 picks per category (occasion, wrapper kind, notice kind, ...).
pub fn options(category: Category) -> &'static [CatalogOption] {
    match category {
        Category::Festival | Category::Custom => FESTIVAL_OPTIONS,
        Category::Crackers => CRACKER_OPTIONS,
        Category::Funeral => FUNERAL_OPTIONS,
        Category::Business => BUSINESS_OPTIONS,
        Category::Event => EVENT_OPTIONS,
    }
}

pub fn find_option(category: Category, id: &str) -> Option<&'static CatalogOption> {
    let id = id.trim();
    options(category).iter().find(|o| o.id.eq_ignore_ascii_case(id))
}

const FESTIVAL_STYLES: &[CatalogOption] = &[
    opt("traditional", "Traditional", "பாரம்பரியம்"),
    opt("festive_pop", "Festive Pop", "கொண்டாட்ட பாப்"),
    opt("realistic", "Realistic", "தத்ரூபம்"),
    opt("cartoon", "Cartoon", "கார்ட்டூன்"),
];

const CRACKER_STYLES: &[CatalogOption] = &[
    opt("explosive", "Explosive", "வெடிப்பு"),
    opt("shiny_foil", "Shiny Foil", "மின்னும் படலம்"),
    opt("vintage", "Vintage", "பழமை"),
    opt("minimal_box", "Minimal Box", "எளிய பெட்டி"),
];

const FUNERAL_STYLES: &[CatalogOption] = &[
    opt("serene", "Serene", "அமைதி"),
    opt("classic_black", "Classic Black", "கருப்பு தங்கம்"),
    opt("floral_ethereal", "Floral", "மலர் அலங்காரம்"),
    opt("peaceful", "Peaceful", "சாந்தம்"),
];

const BUSINESS_STYLES: &[CatalogOption] = &[
    opt("corporate", "Corporate", "நிறுவன பாணி"),
    opt("ecommerce", "E-commerce", "இணைய வணிகம்"),
    opt("luxury_brand", "Luxury Brand", "ஆடம்பர பிராண்ட்"),
    opt("local_shop", "Local Shop", "உள்ளூர் கடை"),
];

const GENERAL_STYLES: &[CatalogOption] = &[
    opt("traditional", "Traditional", "பாரம்பரியம்"),
    opt("modern", "Modern", "நவீனமானது"),
    opt("cartoon", "Cartoon", "கார்ட்டூன்"),
    opt("luxury", "Luxury", "ஆடம்பரம்"),
];

/// Styles offered per category; the first entry is the picker's default.
pub fn styles(category: Category) -> &'static [CatalogOption] {
    match category {
        Category::Festival => FESTIVAL_STYLES,
        Category::Crackers => CRACKER_STYLES,
        Category::Funeral => FUNERAL_STYLES,
        Category::Business => BUSINESS_STYLES,
        Category::Event | Category::Custom => GENERAL_STYLES,
    }
}

/// The category-specific question asked in step 3, with suggested answers.
pub struct CategoryQuestion {
    pub question_en: &'static str,
    pub question_ta: &'static str,
    pub choices: &'static [&'static str],
}

pub fn question(category: Category) -> Option<CategoryQuestion> {
    let q = match category {
        Category::Festival => CategoryQuestion {
            question_en: "How dense should the lighting be?",
            question_ta: "ஒளி அலங்காரம் எவ்வளவு அடர்த்தியாக இருக்க வேண்டும்?",
            choices: &["High (Very bright)", "Medium (Balanced)", "Low (Subtle)"],
        },
        Category::Crackers => CategoryQuestion {
            question_en: "Where should the safety text go?",
            question_ta: "பாதுகாப்பு வாசகம் எங்கே இடம்பெற வேண்டும்?",
            choices: &["Bottom & Sides", "Back Panel Only", "Bottom Strip"],
        },
        Category::Funeral => CategoryQuestion {
            question_en: "What decoration style suits the notice?",
            question_ta: "அறிவிப்புக்கு எந்த அலங்கார பாணி பொருந்தும்?",
            choices: &["Minimal Flowers", "Marigold Garlands", "White Lilies & Jasmine"],
        },
        Category::Business => CategoryQuestion {
            question_en: "Which niche does the business serve?",
            question_ta: "வணிகம் எந்த துறையைச் சேர்ந்தது?",
            choices: &["Hotel & Food", "Juice & Shakes", "Textiles", "Jewellery", "Luxury Interior"],
        },
        Category::Event => CategoryQuestion {
            question_en: "Where will the design be displayed?",
            question_ta: "வடிவமைப்பு எங்கே காட்சிப்படுத்தப்படும்?",
            choices: &["Stage Backdrop", "Street Banner", "Invitation Card"],
        },
        Category::Custom => return None,
    };
    Some(q)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::knowledge::STYLES;

    #[test]
    fn every_catalog_style_is_in_the_style_table() {
        for c in Category::ALL {
            for s in styles(c) {
                assert!(STYLES.find(s.id).is_some(), "style {} missing from table", s.id);
            }
        }
    }

    #[test]
    fn find_option_is_case_insensitive() {
        let o = find_option(Category::Crackers, "Flowerpot").unwrap();
        assert_eq!(o.name_en, "Flower Pot");
        assert!(find_option(Category::Funeral, "diwali").is_none());
    }

    #[test]
    fn custom_jobs_have_no_step_three_question() {
        assert!(question(Category::Custom).is_none());
        assert!(question(Category::Crackers).unwrap().choices.contains(&"Bottom & Sides"));
    }
}
