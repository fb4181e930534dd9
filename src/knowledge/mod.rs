//! Static design knowledge: key → fragment tables and per-category profiles.
//!
//! Every table carries a designated default so lookups are total. Adding a
//! category or a style is a data change here, not a new branch in the
//! composers.

use crate::intent::{Category, Faith};

pub mod catalog;

/// A lookup table with a designated fallback entry.
pub struct Table {
    pub default_key: &'static str,
    pub entries: &'static [(&'static str, &'static str)],
}

impl Table {
    pub fn find(&self, key: &str) -> Option<&'static str> {
        let key = key.trim();
        self.entries
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| *v)
    }

    /// Unknown keys resolve to the default entry.
    pub fn get(&self, key: &str) -> &'static str {
        self.find(key)
            .or_else(|| self.find(self.default_key))
            .unwrap_or_default()
    }
}

pub static STYLES: Table = Table {
    default_key: "traditional",
    entries: &[
        // general
        ("traditional", "traditional Indian art style, intricate details, cultural motifs"),
        ("modern", "clean modern look, sleek typography, minimalist aesthetic"),
        ("cartoon", "playful cartoon illustration, bright colors, friendly characters"),
        ("luxury", "premium high-end feel, gold accents, elegant gradients"),
        // festival
        ("festive_pop", "vibrant festive pop art, neon highlights, high energy, celebratory"),
        ("realistic", "photorealistic Indian festival scene, cinematic depth of field, 8k"),
        // crackers
        ("explosive", "dynamic explosive graphics, high-impact visual, bright flashes, action-oriented"),
        ("shiny_foil", "metallic foil texture, glossy finish, iridescent highlights, packaging-ready"),
        ("vintage", "restored vintage Indian firework art, lithographic style, aged paper texture"),
        ("minimal_box", "clean minimal packaging, focus on branding, geometric simplicity"),
        // business
        ("corporate", "professional corporate identity, clean lines, trustworthy blue and white tones"),
        ("ecommerce", "bold e-commerce design, bright call-to-action buttons, high conversion layout"),
        ("luxury_brand", "sophisticated luxury branding, serif typography, minimalist gold leaf"),
        ("local_shop", "friendly local shop aesthetic, colorful and inviting, hand-painted sign style"),
        // funeral
        ("serene", "serene and pure white aesthetic, holy light, peaceful calm"),
        ("classic_black", "classic memorial black and gold, gold foil accents, formal and respectful"),
        ("floral_ethereal", "ethereal floral background, soft focus, blooming marigolds and lilies"),
        ("peaceful", "peaceful landscape background, sunset horizon, eternal peace atmosphere"),
    ],
};

pub static MOODS: Table = Table {
    default_key: "festive",
    entries: &[
        ("bright", "high saturation, vivid colors, high contrast"),
        ("warm", "warm color palette, red and gold tones, welcoming glow"),
        ("calm", "muted soft colors, peaceful atmosphere, respectful tones"),
        ("festive", "vibrant festive colors, sparkling elements, celebratory mood"),
    ],
};

pub static SYMBOLS: Table = Table {
    default_key: "none",
    entries: &[
        ("hindu", "featuring Hindu symbols like Om and Swastik, traditional vedic motifs"),
        ("muslim", "featuring Islamic patterns, crescent and star motifs, arabesque geometry"),
        ("christian", "featuring Christian cross symbol, elegant sacred design elements"),
        ("none", "secular design, no religious symbols, neutral cultural patterns"),
    ],
};

/// Richer faith imagery used by the expert synthesizer.
pub static EXPERT_RELIGION: Table = Table {
    default_key: "hindu",
    entries: &[
        ("hindu", "sacred Hindu symbols like Om and Swastika, divine presence of Lord Ganesha or Lakshmi in the background, traditional temple oil lamps, auspicious saffron and turmeric accents"),
        ("muslim", "elegant Islamic motifs, crescent moon and star symbol, mosque silhouette in far background, intricate geometric patterns, green and gold decorative elements"),
        ("christian", "sacred Christian symbols like the Holy Cross, soft divine light from above, presence of Jesus Christ figure in a serene artistic style, white doves, elegant church architecture motifs"),
    ],
};

/// Extra accents the expert synthesizer layers on top of the style fragment.
/// Most styles have none.
pub static EXPERT_STYLE_ACCENTS: Table = Table {
    default_key: "",
    entries: &[
        ("traditional", "deeply traditional elements, heritage motifs"),
        ("luxury_brand", "premium gold foil accents, elegant serif typography, elite branding"),
        ("festive_pop", "bright neon highlights, explosive energy, celebratory atmosphere"),
        ("local_shop", "authentic local street shop board style, vibrant and inviting"),
    ],
};

pub fn style_fragment(key: &str) -> &'static str {
    STYLES.get(key)
}

pub fn mood_fragment(key: &str) -> &'static str {
    MOODS.get(key)
}

pub fn symbol_fragment(key: &str) -> &'static str {
    SYMBOLS.get(key)
}

pub fn faith_fragment(faith: Option<Faith>) -> &'static str {
    SYMBOLS.get(faith.map(Faith::key).unwrap_or("none"))
}

/// ========================================
/// Fixed fragments
/// ========================================

pub const REFERENCE_IMAGE: &str =
    "IMPORTANT: use the attached image as a close visual reference for layout and style";
pub const RENDER_AI: &str =
    "AI generated artistic illustration, imaginative and creative digital art, vibrant surreal elements";
pub const RENDER_REAL: &str =
    "photorealistic commercial graphic design, sharp focus, clean professional layout, 8k resolution, cinematic lighting";
pub const SECULAR: &str = "strictly secular, no religious symbols, clean commercial backdrop";
pub const PEOPLE_PRESENT: &str =
    "featuring happy Indian people in traditional attire, cultural authenticity";
pub const PEOPLE_ABSENT: &str = "no human faces, focus on objects, patterns, and typography";
pub const MORE_TRADITIONAL: &str = "extremely traditional, ancient motifs, historical accuracy";
pub const MORE_FESTIVE: &str = "highly celebratory, extra sparkles, maximum vibrant colors";
pub const FRESH_PALETTE: &str = "re-imagined color palette, fresh and unique color harmony";
pub const LOCK_LAYOUT: &str =
    "preserve current composition and object placements, strictly keep layout structure";
pub const LESS_DECORATION: &str =
    "extremely minimal decoration, focus on negative space, simple and clean";
pub const TAMIL_SCRIPT: &str = "exactly in Tamil script";
pub const LATIN_TYPOGRAPHY: &str = "using elegant typography";
pub const EXPERT_TECHNICAL: &str =
    "8k resolution, cinematic lighting, sharp details, commercial graphic design quality";

/// Closes every composed prompt.
pub const QUALITY_STANDARDS: &str = "Indian cultural accuracy, 300 DPI, sharp details, professional graphic design composition, print-ready, high resolution";

pub const DEFAULT_OCCASION: &str = "celebration";
pub const DEFAULT_BUSINESS: &str = "business";
pub const DEFAULT_TITLE: &str = "graphic design";

/// ========================================
/// Category profiles
/// ========================================

/// The step-3 question each category asks, as it lands in the prompt.
pub struct CategoryDetail {
    pub label: &'static str,
    pub default_answer: &'static str,
    pub trailer: &'static str,
}

pub struct CategoryProfile {
    pub category: Category,
    /// Placeholders: `{occasion}`, `{business}`, `{title}`.
    pub subject: &'static str,
    pub detail: Option<CategoryDetail>,
    pub layout: &'static str,
    pub aesthetic: &'static str,
    /// Festivals are allowed to stay silent about religion.
    pub requires_secular_statement: bool,
}

const BUSINESS_BOARD: &str = "bold horizontal shop frontage style, prominent brand name in large decorative typography";
const SOUTH_INDIAN_LOCAL: &str = "South Indian local shop aesthetic, high-saturation colors, vibrant flex banner texture, glossy offset print finish, hand-painted sign influences, regional cultural motifs";
const TRADITIONAL_TAMIL: &str = "traditional Tamil cultural aesthetic, intricate temple-inspired borders, oil lamps (diyas), marigold flower garlands, silk fabric textures";

pub static PROFILES: [CategoryProfile; 6] = [
    CategoryProfile {
        category: Category::Festival,
        subject: "High-quality Indian festival poster design for {occasion}",
        detail: Some(CategoryDetail {
            label: "Lighting density",
            default_answer: "high density of diyas",
            trailer: "Traditional festive motifs, marigold decor.",
        }),
        layout: "vibrant celebratory collage with traditional motifs at corners, central focus on the deity or celebration",
        aesthetic: TRADITIONAL_TAMIL,
        requires_secular_statement: false,
    },
    CategoryProfile {
        category: Category::Crackers,
        subject: "Indian crackers flat unfolded wrapper design, strictly flat 2D rectangular graphic design for {occasion}, NO 3D box shape, NO human faces, secular commercial design",
        detail: Some(CategoryDetail {
            label: "Safety text placement",
            default_answer: "bottom and sides",
            trailer: "Symmetrical design, high gloss finish, offset print ready.",
        }),
        layout: "long rectangular landscape packaging layout, symmetrical fireworks art, side safety text blocks",
        aesthetic: SOUTH_INDIAN_LOCAL,
        requires_secular_statement: true,
    },
    CategoryProfile {
        category: Category::Funeral,
        subject: "Respectful and solemn Indian funeral memorial poster design",
        detail: Some(CategoryDetail {
            label: "Decoration style",
            default_answer: "minimal flowers",
            trailer: "Muted tones, centered portrait space, respectful framing.",
        }),
        layout: "centered portrait composition within a gold-bordered oval frame, respected title at top",
        aesthetic: TRADITIONAL_TAMIL,
        requires_secular_statement: true,
    },
    CategoryProfile {
        category: Category::Business,
        subject: "Professional business advertisement design for a {business}",
        detail: Some(CategoryDetail {
            label: "Niche specific detail",
            default_answer: "professional branding",
            trailer: "Commercial appeal, clear service offering.",
        }),
        layout: BUSINESS_BOARD,
        aesthetic: SOUTH_INDIAN_LOCAL,
        requires_secular_statement: true,
    },
    CategoryProfile {
        category: Category::Event,
        subject: "Professional {title}",
        detail: Some(CategoryDetail {
            label: "Event format",
            default_answer: "stage backdrop banner",
            trailer: "Bold headline hierarchy, clear space for date and venue.",
        }),
        layout: BUSINESS_BOARD,
        aesthetic: SOUTH_INDIAN_LOCAL,
        requires_secular_statement: true,
    },
    CategoryProfile {
        category: Category::Custom,
        subject: "Professional {title}",
        detail: None,
        layout: BUSINESS_BOARD,
        aesthetic: SOUTH_INDIAN_LOCAL,
        requires_secular_statement: true,
    },
];

/// No job type at all falls back to the custom profile.
pub fn profile(category: Option<Category>) -> &'static CategoryProfile {
    let idx = match category.unwrap_or(Category::Custom) {
        Category::Festival => 0,
        Category::Crackers => 1,
        Category::Funeral => 2,
        Category::Business => 3,
        Category::Event => 4,
        Category::Custom => 5,
    };
    &PROFILES[idx]
}

impl CategoryProfile {
    /// Fill the subject template in one pass; inserted values are never
    /// rescanned for placeholders.
    pub fn subject_line(&self, occasion: &str, business: &str, title: &str) -> String {
        let slots = [("{occasion}", occasion), ("{business}", business), ("{title}", title)];
        let mut out = String::with_capacity(self.subject.len() + occasion.len() + business.len());
        let mut rest = self.subject;
        while let Some(start) = rest.find('{') {
            out.push_str(&rest[..start]);
            let tail = &rest[start..];
            match slots.iter().find(|(key, _)| tail.starts_with(key)) {
                Some((key, value)) => {
                    out.push_str(value);
                    rest = &tail[key.len()..];
                }
                None => {
                    out.push('{');
                    rest = &tail[1..];
                }
            }
        }
        out.push_str(rest);
        out
    }
}

/// ========================================
/// Expert motif rules
/// ========================================

/// A motif fires when any keyword appears in the lower-cased niche text, or
/// the job belongs to one of `categories`. Rules are tried in order.
pub struct MotifRule {
    pub keywords: &'static [&'static str],
    pub categories: &'static [Category],
    pub motif: &'static str,
}

pub static MOTIF_RULES: &[MotifRule] = &[
    MotifRule {
        keywords: &["pongal"],
        categories: &[],
        motif: "fresh sugarcane stalks leaning, traditional painted clay pot overflowing with rice, turmeric leaves, sun symbol, rural Tamil village background",
    },
    MotifRule {
        keywords: &["diwali", "deepavali"],
        categories: &[Category::Crackers],
        motif: "grand display of colorful firecrackers, multiple glowing clay lamps (diyas), festive sparkles, marigold decorations",
    },
    MotifRule {
        keywords: &["hotel", "food"],
        categories: &[],
        motif: "steaming hot food platters, traditional stainless steel service, authentic South Indian meal arrangement, warm inviting dining atmosphere",
    },
    MotifRule {
        keywords: &["juice", "shake"],
        categories: &[],
        motif: "beaded water droplets on fresh glass, vibrant tropical fruits, splash of juice, refreshing and chilled aesthetic",
    },
    MotifRule {
        keywords: &[],
        categories: &[Category::Funeral],
        motif: "respectful floral wreaths, white lilies and jasmine, soft serene lighting, peaceful sacred atmosphere, muted elegant background",
    },
];

pub fn motif_for(niche: &str, category: Option<Category>) -> Option<&'static str> {
    let niche = niche.to_lowercase();
    MOTIF_RULES
        .iter()
        .find(|rule| {
            rule.keywords.iter().any(|k| niche.contains(k))
                || category.is_some_and(|c| rule.categories.contains(&c))
        })
        .map(|rule| rule.motif)
}
