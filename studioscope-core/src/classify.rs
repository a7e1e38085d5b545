use crate::record::Category;
use crate::vocab;

/// Combined text shorter than this is never classified on content.
pub const MIN_TEXT_LENGTH: usize = 150;

/// Assign a category from the extracted signals. Pure and deterministic;
/// rule order is the tie-break, so art-plus-hint evidence dominates a
/// simultaneous design-only match.
pub fn classify(
    mentions_design: bool,
    mentions_art: bool,
    keywords: &[String],
    text_length: usize,
    pages_count: usize,
) -> (Category, &'static str) {
    if text_length < MIN_TEXT_LENGTH || pages_count == 0 {
        return (
            Category::UnclearMissing,
            "Insufficient text or no about page",
        );
    }

    if mentions_art
        && keywords
            .iter()
            .any(|keyword| vocab::INTERDISCIPLINARY_HINTS.contains(&keyword.as_str()))
    {
        return (
            Category::Interdisciplinary,
            "mentions_art and keywords include interdisciplinary terms",
        );
    }

    if mentions_design && !mentions_art {
        let graphic_count = keywords
            .iter()
            .filter(|keyword| vocab::GRAPHIC_KEYWORDS.contains(&keyword.as_str()))
            .count();
        if graphic_count >= (keywords.len() / 2).max(3) {
            return (
                Category::GraphicOnly,
                "mentions_design, mostly graphic keywords",
            );
        }
    }

    (Category::UnclearMissing, "Ambiguous signals")
}

/// Deterministic [0,100] evidence score: up to 60 points for text volume
/// (saturating at 1500 chars), up to 25 for page coverage (saturating at
/// 4 pages), plus a flat 15 when an education excerpt was found.
pub fn confidence_score(text_length: usize, pages_count: usize, has_education: bool) -> u8 {
    let mut score = text_length.min(1500) as f64 / 1500.0 * 60.0;
    score += pages_count.min(4) as f64 / 4.0 * 25.0;
    if has_education {
        score += 15.0;
    }
    score.round().clamp(0.0, 100.0) as u8
}
