pub mod extract;
pub mod markers;

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::record::{CaveRecord, Field};
use markers::MarkerRule;

static CAVE_INFO: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div#caveInfo").unwrap());
static CONTENT: LazyLock<Selector> = LazyLock::new(|| Selector::parse("div#content").unwrap());
static BODY: LazyLock<Selector> = LazyLock::new(|| Selector::parse("body").unwrap());

/// Lenient parse: malformed or truncated markup yields a best-effort tree,
/// never an error.
pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

/// One extraction pass: the name extractor, the generic section extractor
/// per plain field, and the two specialized extractors.
pub fn extract_record(doc: &Html, rule: MarkerRule) -> CaveRecord {
    CaveRecord {
        name: extract::name::extract(doc),
        overview: extract::section::extract(doc, rule, Field::Overview.label()),
        history: extract::section::extract(doc, rule, Field::History.label()),
        location: extract::section::extract(doc, rule, Field::Location.label()),
        access: extract::section::extract(doc, rule, Field::Access.label()),
        description: extract::section::extract(doc, rule, Field::Description.label()),
        tackle: extract::section::extract(doc, rule, Field::Tackle.label()),
        video: extract::video::extract(doc, rule),
        references: extract::references::extract(doc, rule),
        warnings: extract::section::extract(doc, rule, Field::Warnings.label()),
        disclaimer: extract::section::extract(doc, rule, Field::Disclaimer.label()),
    }
}

/// The subtree section markers are searched in: the cave-info div when the
/// page has one, else the generic content div, else body.
pub(crate) fn main_content(doc: &Html) -> ElementRef<'_> {
    for selector in [&*CAVE_INFO, &*CONTENT, &*BODY] {
        if let Some(el) = doc.select(selector).next() {
            return el;
        }
    }
    doc.root_element()
}

/// Element's own visible text with whitespace collapsed to single spaces.
pub(crate) fn visible_text(el: ElementRef<'_>) -> String {
    el.text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whole-document visible text, one line per text node. Used for the
/// raw-text snapshot only.
pub fn document_text(doc: &Html) -> String {
    doc.root_element()
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}
