use serde::{Deserialize, Serialize};

/// One input row. Identity is the row position; rows are not deduplicated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    pub url: Option<String>,
    pub notes: Option<String>,
}

/// A successfully fetched and cleaned page, in fetch order.
#[derive(Debug, Clone)]
pub struct PageRecord {
    pub url: String,
    pub clean_text: String,
}

/// Practice category. Serialized names double as the output partition keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Interdisciplinary,
    #[serde(rename = "Graphic-only")]
    GraphicOnly,
    #[serde(rename = "Unclear_missing")]
    UnclearMissing,
}

impl Category {
    pub const ALL: [Category; 3] = [
        Category::Interdisciplinary,
        Category::GraphicOnly,
        Category::UnclearMissing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Interdisciplinary => "Interdisciplinary",
            Category::GraphicOnly => "Graphic-only",
            Category::UnclearMissing => "Unclear_missing",
        }
    }
}

/// Terminal processing status of one entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowStatus {
    Ok,
    NoText,
    FetchError,
    MissingUrl,
    Exception,
}

impl RowStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RowStatus::Ok => "ok",
            RowStatus::NoText => "no_text",
            RowStatus::FetchError => "fetch_error",
            RowStatus::MissingUrl => "missing_url",
            RowStatus::Exception => "exception",
        }
    }
}

/// The full enrichment verdict for one entity, one per input row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichmentRecord {
    pub name: String,
    pub url: String,
    pub resolved_url: String,
    /// Fetched pages joined by `"; "`, fetch order.
    pub source_pages: String,
    pub status: RowStatus,
    pub about_text_excerpt: String,
    pub text_length: usize,
    pub education_excerpt: String,
    pub mentions_design: bool,
    pub mentions_art: bool,
    /// Extracted keywords joined by `", "`.
    pub self_keywords: String,
    pub category: Category,
    pub category_reason: String,
    pub confidence_score: u8,
}

impl EnrichmentRecord {
    /// A record for an entity that produced no evidence: default category,
    /// zero confidence, empty signals.
    pub fn unprocessed(name: &str, url: &str, status: RowStatus) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
            resolved_url: String::new(),
            source_pages: String::new(),
            status,
            about_text_excerpt: String::new(),
            text_length: 0,
            education_excerpt: String::new(),
            mentions_design: false,
            mentions_art: false,
            self_keywords: String::new(),
            category: Category::UnclearMissing,
            category_reason: String::new(),
            confidence_score: 0,
        }
    }
}
