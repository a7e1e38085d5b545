//! Fixed vocabularies backing signal extraction and classification.
//!
//! These lists are data, not behavior: tuning them changes which practices
//! read as interdisciplinary vs graphic, so they live in one place.

/// Common, geographic and self-referential terms excluded from keyword
/// counting.
pub const STOPWORDS: &[&str] = &[
    "the", "and", "for", "with", "this", "that", "from", "have", "has", "are", "was", "were",
    "their", "they", "them", "our", "your", "you", "his", "her", "its", "about", "into", "over",
    "under", "within", "between", "across", "through", "studio", "works", "work", "based", "new",
    "york", "london", "paris", "berlin", "milan", "rome", "tokyo", "seoul", "china", "italy",
    "france", "usa", "united", "states", "project", "projects", "practice", "practices",
    "international", "using", "use", "explores", "explore", "exploration", "research", "focus",
    "focusing", "focuses", "artist", "artists", "designer", "designers", "design", "art",
    "company", "group", "collective", "team", "workshop", "info", "bio", "statement", "cv",
    "email", "contact", "phone", "copyright", "all", "rights", "reserved",
];

/// Curated practice vocabulary, preferred over raw frequency when building
/// the keyword list. Art/interdisciplinary-leaning terms first, then
/// graphic-leaning ones.
pub const WHITELIST_KEYWORDS: &[&str] = &[
    // art / interdisciplinary leaning
    "installation",
    "performance",
    "research",
    "sound",
    "video",
    "sculpture",
    "painting",
    "media",
    "interactive",
    "interactivity",
    "generative",
    "spatial",
    "exhibition",
    "archive",
    "mapping",
    "data",
    "algorithm",
    "algorithmic",
    "sonic",
    "photography",
    "film",
    "cinema",
    "motion",
    "theatre",
    "theater",
    "projection",
    "virtual",
    "xr",
    "ar",
    "vr",
    // graphic leaning
    "typography",
    "type",
    "lettering",
    "editorial",
    "publication",
    "print",
    "poster",
    "branding",
    "identity",
    "logo",
    "packaging",
    "web",
    "website",
    "ui",
    "ux",
    "interface",
    "illustration",
    "infographics",
];

/// Keywords counted as graphic-design evidence by the classifier.
pub const GRAPHIC_KEYWORDS: &[&str] = &[
    "typography",
    "type",
    "lettering",
    "editorial",
    "publication",
    "print",
    "poster",
    "branding",
    "identity",
    "logo",
    "packaging",
    "web",
    "website",
    "ui",
    "ux",
    "interface",
    "illustration",
    "infographic",
    "infographics",
    "layout",
    "visual",
    "communication",
];

/// Keywords that, combined with an art mention, tip the classification to
/// interdisciplinary.
pub const INTERDISCIPLINARY_HINTS: &[&str] = &[
    "installation",
    "performance",
    "media",
    "research",
    "sound",
    "video",
    "sculpture",
    "painting",
    "interactive",
    "generative",
    "spatial",
    "exhibition",
    "mapping",
    "data",
    "photography",
    "motion",
    "projection",
];

/// Terms whose word-boundary presence marks a sentence as educational
/// background.
pub const EDU_TERMS: &[&str] = &[
    "studied",
    "graduated",
    "ba",
    "ma",
    "mfa",
    "phd",
    "academy",
    "university",
];
