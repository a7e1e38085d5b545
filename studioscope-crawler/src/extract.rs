use scraper::Html;
use ego_tree::NodeRef;
use scraper::node::{Element, Node};

/// Subtrees that never contribute visible prose.
const DROPPED_TAGS: [&str; 12] = [
    "script", "style", "noscript", "svg", "canvas", "form", "input", "button", "header", "footer",
    "nav", "aside",
];

/// Reduce HTML to its visible text: non-content and hidden subtrees are
/// dropped, the remaining text nodes are joined with single spaces, and
/// runs of whitespace collapse to one space.
///
/// Structural cleaning only — genuinely visible prose is preserved.
/// Running it on already-clean text is a no-op.
pub fn clean_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let mut parts: Vec<String> = Vec::new();
    collect_visible(document.tree.root(), &mut parts);
    let joined = parts.join(" ");
    joined.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn collect_visible(node: NodeRef<'_, Node>, parts: &mut Vec<String>) {
    match node.value() {
        Node::Text(text) => {
            let trimmed = text.trim();
            if !trimmed.is_empty() {
                parts.push(trimmed.to_string());
            }
        }
        Node::Element(element) => {
            if is_hidden(element) {
                return;
            }
            for child in node.children() {
                collect_visible(child, parts);
            }
        }
        Node::Comment(_) | Node::Doctype(_) | Node::ProcessingInstruction(_) => {}
        _ => {
            for child in node.children() {
                collect_visible(child, parts);
            }
        }
    }
}

fn is_hidden(element: &Element) -> bool {
    if DROPPED_TAGS.contains(&element.name()) {
        return true;
    }
    if element.attr("aria-hidden").is_some() {
        return true;
    }
    if let Some(style) = element.attr("style") {
        let style = style.to_lowercase();
        if style.contains("display:none") || style.contains("visibility:hidden") {
            return true;
        }
    }
    false
}
