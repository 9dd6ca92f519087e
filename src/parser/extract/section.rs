use scraper::{ElementRef, Html};

use crate::parser::markers::MarkerRule;
use crate::parser::{main_content, visible_text};

/// Locate the marker for `name` and collect the text of its following
/// siblings up to the next section boundary. An absent section extracts as
/// empty text, not an error.
pub fn extract(doc: &Html, rule: MarkerRule, name: &str) -> String {
    let scope = main_content(doc);
    let Some(marker) = find_marker(scope, rule, name) else {
        return String::new();
    };
    collect_until_boundary(marker, rule).join("\n")
}

/// First element under `scope` (scope itself excluded) that opens the named
/// section. Later duplicate markers are ignored.
pub(crate) fn find_marker<'a>(
    scope: ElementRef<'a>,
    rule: MarkerRule,
    name: &str,
) -> Option<ElementRef<'a>> {
    scope
        .descendants()
        .skip(1)
        .filter_map(ElementRef::wrap)
        .find(|el| rule.opens_section(*el, name))
}

/// Walk element siblings after the marker. A sibling that is itself a
/// boundary starts the next section; its text is excluded. Siblings whose
/// text is empty after trimming are dropped.
fn collect_until_boundary(marker: ElementRef<'_>, rule: MarkerRule) -> Vec<String> {
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
        }
        next = node.next_sibling();
    }
    lines
}
