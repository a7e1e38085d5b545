use crate::vocab;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

/// Keyword list cap.
pub const MAX_KEYWORDS: usize = 10;
const MAX_EDUCATION_CHARS: usize = 500;

/// The boolean and keyword evidence computed from one entity's combined
/// text.
#[derive(Debug, Clone, Default)]
pub struct SignalSet {
    pub mentions_design: bool,
    pub mentions_art: bool,
    pub keywords: Vec<String>,
    pub education_excerpt: String,
}

static DESIGN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\bdesign\b|\bdesigner\b|graphic design|communication design|visual design|design studio",
    )
    .expect("design pattern compiles")
});

static ART_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bart\b|\bartist\b|\bartistic\b|contemporary art|visual art|media art")
        .expect("art pattern compiles")
});

static EDU_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:studied|graduated|ba|ma|mfa|phd|academy|university)\b")
        .expect("education pattern compiles")
});

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-zA-Z][a-zA-Z\-]{2,}").expect("token pattern compiles"));

static STOPWORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| vocab::STOPWORDS.iter().copied().collect());

static WHITELIST: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| vocab::WHITELIST_KEYWORDS.iter().copied().collect());

/// Compute all signals over the combined text in one pass.
pub fn extract_signals(text: &str) -> SignalSet {
    SignalSet {
        mentions_design: DESIGN_RE.is_match(text),
        mentions_art: ART_RE.is_match(text),
        keywords: extract_keywords(text),
        education_excerpt: education_excerpt(text),
    }
}

/// Sentences mentioning an education term, joined and capped at 500 chars.
/// Empty input or no word-boundary match yields an empty string.
pub fn education_excerpt(text: &str) -> String {
    if text.is_empty() || !EDU_RE.is_match(text) {
        return String::new();
    }
    let hits: Vec<&str> = split_sentences(text)
        .into_iter()
        .filter(|segment| EDU_RE.is_match(segment))
        .collect();
    let snippet = hits.join(" ");
    snippet.chars().take(MAX_EDUCATION_CHARS).collect()
}

/// Two-phase keyword selection: curated vocabulary terms present in the
/// text first (by falling frequency, then alphabetically), then the most
/// frequent remaining tokens until ten are collected or the text runs dry.
pub fn extract_keywords(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }

    let lowered = text.to_lowercase();
    let mut counts: HashMap<String, usize> = HashMap::new();
    for found in TOKEN_RE.find_iter(&lowered) {
        let token = found.as_str().trim_matches(&['-', '_'][..]);
        if token.len() < 3 || STOPWORDS.contains(token) {
            continue;
        }
        *counts.entry(token.to_string()).or_default() += 1;
    }
    if counts.is_empty() {
        return Vec::new();
    }

    // Pass 1: whitelist terms present in the frequency table.
    let mut picked: Vec<&str> = vocab::WHITELIST_KEYWORDS
        .iter()
        .copied()
        .filter(|term| counts.contains_key(*term))
        .collect();
    picked.sort_by(|a, b| counts[*b].cmp(&counts[*a]).then(a.cmp(b)));
    picked.truncate(MAX_KEYWORDS);

    // Pass 2: fill remaining slots from the rest of the table.
    if picked.len() < MAX_KEYWORDS {
        let mut rest: Vec<(&str, usize)> = counts
            .iter()
            .filter(|(token, _)| !WHITELIST.contains(token.as_str()))
            .map(|(token, &count)| (token.as_str(), count))
            .collect();
        rest.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        for (token, _) in rest {
            picked.push(token);
            if picked.len() == MAX_KEYWORDS {
                break;
            }
        }
    }

    picked.into_iter().map(|token| token.to_string()).collect()
}

/// Split into sentence-like segments after `.`, `!` or `?` followed by
/// whitespace.
fn split_sentences(text: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, ch)) = chars.next() {
        if matches!(ch, '.' | '!' | '?')
            && chars.peek().is_some_and(|&(_, next)| next.is_whitespace())
        {
            segments.push(&text[start..i + 1]);
            while chars.peek().is_some_and(|&(_, next)| next.is_whitespace()) {
                chars.next();
            }
            start = chars.peek().map(|&(j, _)| j).unwrap_or(text.len());
        }
    }
    if start < text.len() {
        segments.push(&text[start..]);
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn design_and_art_mentions_are_independent() {
        let signals = extract_signals("A graphic design practice rooted in contemporary art.");
        assert!(signals.mentions_design);
        assert!(signals.mentions_art);

        let signals = extract_signals("We build branding and identity systems.");
        assert!(!signals.mentions_design);
        assert!(!signals.mentions_art);
    }

    #[test]
    fn design_requires_word_boundary() {
        assert!(!extract_signals("redesigned interiors").mentions_design);
        assert!(extract_signals("design for print").mentions_design);
    }

    #[test]
    fn art_does_not_match_inside_words() {
        assert!(!extract_signals("partners in particular").mentions_art);
        assert!(extract_signals("works of art").mentions_art);
    }

    #[test]
    fn education_excerpt_keeps_matching_sentences_only() {
        let text = "We are a studio. Anna studied at the Gerrit Rietveld Academie. \
                    We love posters. She graduated in 2015.";
        let excerpt = education_excerpt(text);
        assert!(excerpt.contains("studied"));
        assert!(excerpt.contains("graduated in 2015"));
        assert!(!excerpt.contains("posters"));
    }

    #[test]
    fn education_terms_need_word_boundaries() {
        // "bachelor" contains none of the terms on a word boundary; "ba"
        // inside "basalt" must not match.
        assert_eq!(education_excerpt("We carve basalt and marble."), "");
        assert_ne!(education_excerpt("She holds a BA in typography."), "");
    }

    #[test]
    fn education_excerpt_is_capped() {
        let sentence = format!("He studied {}.", "x".repeat(600));
        let excerpt = education_excerpt(&sentence);
        assert_eq!(excerpt.chars().count(), 500);
    }

    #[test]
    fn empty_text_yields_empty_signals() {
        let signals = extract_signals("");
        assert!(!signals.mentions_design);
        assert!(!signals.mentions_art);
        assert!(signals.keywords.is_empty());
        assert!(signals.education_excerpt.is_empty());
    }

    #[test]
    fn keywords_prefer_whitelist_over_frequency() {
        // "installation" appears once, filler words three times; the
        // whitelist term still sorts first.
        let text = "installation murmur murmur murmur";
        let keywords = extract_keywords(text);
        assert_eq!(keywords[0], "installation");
        assert!(keywords.contains(&"murmur".to_string()));
    }

    #[test]
    fn whitelist_terms_order_by_frequency_then_alpha() {
        let text = "video video sound painting painting";
        let keywords = extract_keywords(text);
        assert_eq!(keywords[0], "painting");
        assert_eq!(keywords[1], "video");
        assert_eq!(keywords[2], "sound");
    }

    #[test]
    fn keywords_are_capped_unique_and_stopword_free() {
        let text = "installation performance sound video sculpture painting media \
                    interactive generative spatial exhibition mapping the and for \
                    studio artist design art";
        let keywords = extract_keywords(text);
        assert!(keywords.len() <= MAX_KEYWORDS);
        let unique: HashSet<&String> = keywords.iter().collect();
        assert_eq!(unique.len(), keywords.len());
        for keyword in &keywords {
            assert!(!vocab::STOPWORDS.contains(&keyword.as_str()));
        }
    }

    #[test]
    fn short_tokens_and_stopwords_are_dropped() {
        let keywords = extract_keywords("we do ux in the studio at no 12");
        assert!(keywords.is_empty());
    }

    #[test]
    fn hyphenated_tokens_survive_with_edges_trimmed() {
        let keywords = extract_keywords("site-specific site-specific -fringe-");
        assert!(keywords.contains(&"site-specific".to_string()));
        assert!(keywords.contains(&"fringe".to_string()));
    }

    #[test]
    fn split_sentences_cuts_after_terminal_punctuation() {
        let segments = split_sentences("One. Two! Three? Four");
        assert_eq!(segments, vec!["One.", "Two!", "Three?", "Four"]);
    }

    #[test]
    fn split_sentences_ignores_unspaced_punctuation() {
        let segments = split_sentences("v2.0 of the archive. done");
        assert_eq!(segments, vec!["v2.0 of the archive.", "done"]);
    }
}
