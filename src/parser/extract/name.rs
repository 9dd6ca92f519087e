use std::sync::LazyLock;

use scraper::{Html, Selector};

use crate::parser::visible_text;
use crate::record::UNKNOWN_CAVE;

static H1: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h1").unwrap());
static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").unwrap());

/// Page heading, else document title, else the sentinel. Never empty.
pub fn extract(doc: &Html) -> String {
    for selector in [&*H1, &*TITLE] {
        let text = doc
            .select(selector)
            .next()
            .map(visible_text)
            .filter(|t| !t.is_empty());
        if let Some(text) = text {
            return text;
        }
    }
    UNKNOWN_CAVE.to_string()
}
