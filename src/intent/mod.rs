use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use crate::knowledge::catalog;

/// ========================================
/// Design categories and job types
/// ========================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Category {
    Festival,
    Crackers,
    Funeral,
    Business,
    Event,
    Custom,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Festival,
        Category::Crackers,
        Category::Funeral,
        Category::Business,
        Category::Event,
        Category::Custom,
    ];

    /// Total parse: anything unrecognised is a custom job.
    pub fn from_id(id: &str) -> Self {
        match id.trim().to_ascii_lowercase().as_str() {
            "festival" => Self::Festival,
            "crackers" | "cracker" => Self::Crackers,
            "funeral" | "obituary" => Self::Funeral,
            "business" => Self::Business,
            "event" => Self::Event,
            _ => Self::Custom,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Self::Festival => "festival",
            Self::Crackers => "crackers",
            Self::Funeral => "funeral",
            Self::Business => "business",
            Self::Event => "event",
            Self::Custom => "custom",
        }
    }

    pub fn default_title_en(self) -> &'static str {
        match self {
            Self::Festival => "Festival Poster",
            Self::Crackers => "Crackers Box",
            Self::Funeral => "Funeral Notice",
            Self::Business => "Business Poster",
            Self::Event => "Event Flyer",
            Self::Custom => "Custom Design",
        }
    }

    pub fn default_title_ta(self) -> &'static str {
        match self {
            Self::Festival => "திருவிழா சுவரொட்டி",
            Self::Crackers => "பட்டாசு பெட்டி",
            Self::Funeral => "இரங்கல் அறிவிப்பு",
            Self::Business => "வணிக விளம்பரம்",
            Self::Event => "நிகழ்ச்சி அறிவிப்பு",
            Self::Custom => "தனிப்பயன் வடிவமைப்பு",
        }
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Self::from_id(&s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The chosen design purpose plus its localized display titles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobType {
    pub category: Category,
    pub title_en: String,
    pub title_ta: String,
}

impl JobType {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            title_en: category.default_title_en().to_string(),
            title_ta: category.default_title_ta().to_string(),
        }
    }

    /// Unknown ids become a custom job titled after the id itself.
    pub fn from_id(id: &str) -> Self {
        let category = Category::from_id(id);
        let mut job = Self::new(category);
        if category == Category::Custom && !id.trim().is_empty() && !id.eq_ignore_ascii_case("custom") {
            job.title_en = id.trim().to_string();
        }
        job
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title_en = title.into();
        self
    }
}

/// ========================================
/// Enumerated intent fields
/// ========================================

macro_rules! lenient_key_enum {
    ($name:ident, default = $default:ident, { $($variant:ident => $key:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase", from = "String")]
        pub enum $name {
            #[default]
            $default,
            $($variant),+
        }

        impl $name {
            /// Unknown keys fall back to the default variant.
            pub fn from_key(key: &str) -> Self {
                match key.trim().to_ascii_lowercase().as_str() {
                    $($key => Self::$variant,)+
                    _ => Self::$default,
                }
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::from_key(&s)
            }
        }
    };
}

lenient_key_enum!(Symbol, default = None, {
    Hindu => "hindu",
    Muslim => "muslim",
    Christian => "christian",
});

lenient_key_enum!(Religion, default = Secular, {
    Hindu => "hindu",
    Muslim => "muslim",
    Christian => "christian",
});

lenient_key_enum!(DesignMode, default = Real, {
    Ai => "ai",
});

lenient_key_enum!(Layout, default = Center, {
    Left => "left",
    Right => "right",
    Full => "full",
});

/// The faith whose symbols a design should carry, once `symbol` and
/// `religion` have been reconciled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Faith {
    Hindu,
    Muslim,
    Christian,
}

impl Faith {
    pub fn key(self) -> &'static str {
        match self {
            Self::Hindu => "hindu",
            Self::Muslim => "muslim",
            Self::Christian => "christian",
        }
    }
}

impl Symbol {
    pub fn faith(self) -> Option<Faith> {
        match self {
            Self::None => None,
            Self::Hindu => Some(Faith::Hindu),
            Self::Muslim => Some(Faith::Muslim),
            Self::Christian => Some(Faith::Christian),
        }
    }
}

impl Religion {
    pub fn faith(self) -> Option<Faith> {
        match self {
            Self::Secular => None,
            Self::Hindu => Some(Faith::Hindu),
            Self::Muslim => Some(Faith::Muslim),
            Self::Christian => Some(Faith::Christian),
        }
    }
}

/// ========================================
/// Refinement modifiers
/// ========================================

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modifier {
    #[value(name = "more_traditional", alias = "more-traditional")]
    MoreTraditional,
    #[value(name = "change_colors", alias = "change-colors")]
    ChangeColors,
    #[value(name = "lock_layout", alias = "lock-layout")]
    LockLayout,
    #[value(name = "more_festive", alias = "more-festive")]
    MoreFestive,
    #[value(name = "less_decoration", alias = "less-decoration")]
    LessDecoration,
}

impl Modifier {
    pub const ALL: [Modifier; 5] = [
        Modifier::MoreTraditional,
        Modifier::ChangeColors,
        Modifier::LockLayout,
        Modifier::MoreFestive,
        Modifier::LessDecoration,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::MoreTraditional => "more_traditional",
            Self::ChangeColors => "change_colors",
            Self::LockLayout => "lock_layout",
            Self::MoreFestive => "more_festive",
            Self::LessDecoration => "less_decoration",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        let norm = id.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL.into_iter().find(|m| m.id() == norm)
    }
}

/// Unordered set of active refinement tags; iteration order is fixed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModifierSet(BTreeSet<Modifier>);

impl ModifierSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, m: Modifier) -> bool {
        self.0.contains(&m)
    }

    pub fn insert(&mut self, m: Modifier) {
        self.0.insert(m);
    }

    /// Flip membership; returns whether the modifier is now active.
    pub fn toggle(&mut self, m: Modifier) -> bool {
        if self.0.remove(&m) {
            false
        } else {
            self.0.insert(m);
            true
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Modifier> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Modifier> for ModifierSet {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// ========================================
/// Design intent
/// ========================================

fn default_style() -> String {
    "traditional".into()
}

fn default_mood() -> String {
    "festive".into()
}

fn default_aspect_ratio() -> String {
    "1:1".into()
}

/// Everything the user chose for one generation request. Every field has a
/// safe default, so `DesignIntent::default()` is the reset state used when a
/// new category is picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DesignIntent {
    pub occasion: String,
    pub custom_occasion: String,
    #[serde(default = "default_style")]
    pub style: String,
    #[serde(default = "default_mood", alias = "colors")]
    pub mood: String,
    pub include_people: bool,
    pub theme_color: String,
    pub tech_words: String,
    pub specific_text: String,
    pub category_answer: String,
    pub symbol: Symbol,
    pub design_mode: DesignMode,
    pub extra_note: String,
    pub business_type: String,
    pub use_reference_image: bool,
    pub religion: Religion,
    pub layout: Layout,
    #[serde(default = "default_aspect_ratio")]
    pub aspect_ratio: String,
}

impl Default for DesignIntent {
    fn default() -> Self {
        Self {
            occasion: String::new(),
            custom_occasion: String::new(),
            style: default_style(),
            mood: default_mood(),
            include_people: false,
            theme_color: String::new(),
            tech_words: String::new(),
            specific_text: String::new(),
            category_answer: String::new(),
            symbol: Symbol::None,
            design_mode: DesignMode::Real,
            extra_note: String::new(),
            business_type: String::new(),
            use_reference_image: false,
            religion: Religion::Secular,
            layout: Layout::Center,
            aspect_ratio: default_aspect_ratio(),
        }
    }
}

/// Trimmed text, or `None` when blank.
pub fn present(s: &str) -> Option<&str> {
    let t = s.trim();
    (!t.is_empty()).then_some(t)
}

impl DesignIntent {
    /// The literal text exactly as entered, or `None` when it is blank.
    pub fn literal_text(&self) -> Option<&str> {
        present(&self.specific_text).map(|_| self.specific_text.as_str())
    }

    /// Symbol wins over religion; `none`/`secular` mean no faith.
    pub fn faith(&self) -> Option<Faith> {
        self.symbol.faith().or_else(|| self.religion.faith())
    }

    /// Custom occasion, then the picked occasion (catalog ids resolve to
    /// their English name).
    pub fn occasion_name(&self, category: Option<Category>) -> Option<String> {
        if let Some(custom) = present(&self.custom_occasion) {
            return Some(custom.to_string());
        }
        present(&self.occasion).map(|occ| {
            category
                .and_then(|c| catalog::find_option(c, occ))
                .map(|o| o.name_en.to_string())
                .unwrap_or_else(|| occ.to_string())
        })
    }

    pub fn occasion_name_ta(&self, category: Option<Category>) -> Option<String> {
        if let Some(custom) = present(&self.custom_occasion) {
            return Some(custom.to_string());
        }
        present(&self.occasion).map(|occ| {
            category
                .and_then(|c| catalog::find_option(c, occ))
                .map(|o| o.name_ta.to_string())
                .unwrap_or_else(|| occ.to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_text_is_untrimmed_but_blank_is_absent() {
        let intent = DesignIntent { specific_text: " வணக்கம் ".into(), ..DesignIntent::default() };
        assert_eq!(intent.literal_text(), Some(" வணக்கம் "));
        let blank = DesignIntent { specific_text: " \t".into(), ..DesignIntent::default() };
        assert_eq!(blank.literal_text(), None);
    }

    #[test]
    fn unknown_job_id_becomes_custom_with_its_title() {
        let job = JobType::from_id("wedding");
        assert_eq!(job.category, Category::Custom);
        assert_eq!(job.title_en, "wedding");

        let job = JobType::from_id("Crackers");
        assert_eq!(job.category, Category::Crackers);
        assert_eq!(job.title_en, "Crackers Box");
    }

    #[test]
    fn lenient_enums_fall_back_to_default() {
        assert_eq!(Symbol::from_key("jain"), Symbol::None);
        assert_eq!(Symbol::from_key(" Hindu "), Symbol::Hindu);
        assert_eq!(Religion::from_key(""), Religion::Secular);
        assert_eq!(DesignMode::from_key("cartoonish"), DesignMode::Real);
        assert_eq!(Layout::from_key("diagonal"), Layout::Center);
    }

    #[test]
    fn symbol_takes_precedence_over_religion() {
        let intent = DesignIntent {
            symbol: Symbol::Muslim,
            religion: Religion::Hindu,
            ..DesignIntent::default()
        };
        assert_eq!(intent.faith(), Some(Faith::Muslim));

        let intent = DesignIntent { religion: Religion::Christian, ..DesignIntent::default() };
        assert_eq!(intent.faith(), Some(Faith::Christian));

        assert_eq!(DesignIntent::default().faith(), None);
    }

    #[test]
    fn toggle_flips_membership() {
        let mut mods = ModifierSet::new();
        assert!(mods.toggle(Modifier::LockLayout));
        assert!(mods.contains(Modifier::LockLayout));
        assert!(!mods.toggle(Modifier::LockLayout));
        assert!(mods.is_empty());
    }

    #[test]
    fn modifier_ids_accept_dashes() {
        assert_eq!(Modifier::from_id("change-colors"), Some(Modifier::ChangeColors));
        assert_eq!(Modifier::from_id("more_festive"), Some(Modifier::MoreFestive));
        assert_eq!(Modifier::from_id("sparkle"), None);
    }

    #[test]
    fn intent_deserializes_from_wizard_json() {
        let raw = r#"{
            "occasion": "diwali",
            "style": "festive_pop",
            "colors": "warm",
            "symbol": "zoroastrian",
            "designMode": "ai",
            "includePeople": true
        }"#;
        let intent: DesignIntent = serde_json::from_str(raw).unwrap();
        assert_eq!(intent.mood, "warm");
        assert_eq!(intent.symbol, Symbol::None);
        assert_eq!(intent.design_mode, DesignMode::Ai);
        assert!(intent.include_people);
        assert_eq!(intent.aspect_ratio, "1:1");
    }

    #[test]
    fn occasion_ids_resolve_through_catalog() {
        let intent = DesignIntent { occasion: "diwali".into(), ..DesignIntent::default() };
        assert_eq!(intent.occasion_name(Some(Category::Festival)).as_deref(), Some("Diwali"));
        assert_eq!(intent.occasion_name_ta(Some(Category::Festival)).as_deref(), Some("தீபாவளி"));
        assert_eq!(intent.occasion_name(None).as_deref(), Some("diwali"));

        let intent = DesignIntent {
            occasion: "diwali".into(),
            custom_occasion: "Karthigai Deepam".into(),
            ..DesignIntent::default()
        };
        assert_eq!(intent.occasion_name(Some(Category::Festival)).as_deref(), Some("Karthigai Deepam"));
    }
}
