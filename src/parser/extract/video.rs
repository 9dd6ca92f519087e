use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use super::section::find_marker;
use crate::parser::main_content;
use crate::parser::markers::MarkerRule;
use crate::record::Field;

static ANY_LINK: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a[href]").unwrap());

/// Href of the first link after the Video marker. Unlike the generic walk,
/// this keeps scanning past later section markers until a link turns up.
pub fn extract(doc: &Html, rule: MarkerRule) -> String {
    let scope = main_content(doc);
    let Some(marker) = find_marker(scope, rule, Field::Video.label()) else {
        return String::new();
    };

    let mut next = marker.next_sibling();
    while let Some(node) = next {
        if let Some(el) = ElementRef::wrap(node) {
            if let Some(href) = first_href(el) {
                return href.to_string();
            }
        }
        next = node.next_sibling();
    }
    String::new()
}

fn first_href(el: ElementRef<'_>) -> Option<&str> {
    if el.value().name() == "a" {
        if let Some(href) = el.value().attr("href") {
            return Some(href);
        }
    }
    el.select(&ANY_LINK).next().and_then(|a| a.value().attr("href"))
}
