use scraper::{Html, Selector};
use std::collections::HashSet;
use tracing::debug;
use url::Url;

/// Terms that mark a link as biographical/organizational self-description,
/// matched as case-insensitive substrings of the link path or anchor text.
const ABOUT_TERMS: [&str; 6] = ["about", "info", "bio", "statement", "profile", "cv"];

/// Upper bound on about-pages fetched per entity.
pub const MAX_ABOUT_PAGES: usize = 3;

/// Find same-host "about"-like links in homepage markup.
///
/// Links are absolutized against the resolved homepage URL (falling back
/// to the requested one), deduplicated by absolute URL in first-seen
/// order, and capped at [`MAX_ABOUT_PAGES`]. Links on a different host
/// than the resolved homepage are never returned.
pub fn discover_about_links(
    html: &str,
    requested_url: &str,
    resolved_url: Option<&str>,
) -> Vec<String> {
    let base = resolved_url.unwrap_or(requested_url);
    let Ok(base_url) = Url::parse(base) else {
        return Vec::new();
    };
    let Some(base_host) = base_url.host_str().map(|h| h.to_string()) else {
        return Vec::new();
    };

    let document = Html::parse_document(html);
    let link_selector = Selector::parse("a[href]").expect("static selector parses");

    let mut seen: HashSet<String> = HashSet::new();
    let mut candidates = Vec::new();

    for element in document.select(&link_selector) {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        let Some(absolute) = resolve_href(&base_url, href) else {
            continue;
        };
        let absolute_str = absolute.to_string();
        if !seen.insert(absolute_str.clone()) {
            continue;
        }
        if absolute.host_str() != Some(base_host.as_str()) {
            debug!("skipping cross-host link {}", absolute_str);
            continue;
        }

        let path = absolute.path().to_lowercase();
        let label = element.text().collect::<Vec<_>>().join(" ").to_lowercase();
        let is_candidate = ABOUT_TERMS
            .iter()
            .any(|term| path.contains(term) || label.contains(term));
        if is_candidate {
            candidates.push(absolute_str);
            if candidates.len() == MAX_ABOUT_PAGES {
                break;
            }
        }
    }

    candidates
}

fn resolve_href(base: &Url, href: &str) -> Option<Url> {
    if href.is_empty()
        || href.starts_with("javascript:")
        || href.starts_with("mailto:")
        || href.starts_with("tel:")
        || href.starts_with('#')
    {
        return None;
    }

    let mut resolved = base.join(href).ok()?;
    resolved.set_fragment(None);
    Some(resolved)
}
