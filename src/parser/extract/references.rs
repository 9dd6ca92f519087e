use scraper::{ElementRef, Html};

use super::section::find_marker;
use crate::parser::markers::MarkerRule;
use crate::parser::{main_content, visible_text};
use crate::record::Field;

/// Same boundary walk as the generic extractor, with a `Link:` line added
/// after any sibling that is itself an anchor, in document order.
pub fn extract(doc: &Html, rule: MarkerRule) -> String {
    let scope = main_content(doc);
    let Some(marker) = find_marker(scope, rule, Field::References.label()) else {
        return String::new();
    };

    let mut lines = Vec::new();
    let mut next = marker.next_sibling();
    while let Some(node) = next {
        if let Some(el) = ElementRef::wrap(node) {
            if rule.is_boundary(el) {
                break;
            }
            let text = visible_text(el);
            if !text.is_empty() {
                lines.push(text);
            }
            if el.value().name() == "a" {
                if let Some(href) = el.value().attr("href") {
                    lines.push(format!("Link: {href}"));
                }
            }
        }
        next = node.next_sibling();
    }
    lines.join("\n")
}
