use clap::ValueEnum;
use scraper::ElementRef;

use super::visible_text;
use crate::record::Field;

/// Which convention marks the start of a named section. Older pages put
/// section names in <h2>/<div> headings; current pages use
/// <div class="subheaders"> markers. Selected once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum MarkerRule {
    /// Section names inside <h2>/<div> headings, matched by substring.
    HeadingSubstring,
    /// <div class="subheaders"> markers, matched by name.
    #[default]
    ClassExact,
}

impl MarkerRule {
    /// True when `el` is the marker that opens the section called `name`.
    /// Substring match, case-insensitive, so "Access" also matches a
    /// heading titled "Access Details".
    pub fn opens_section(self, el: ElementRef<'_>, name: &str) -> bool {
        match self {
            MarkerRule::HeadingSubstring => is_heading_candidate(el) && contains_name(el, name),
            MarkerRule::ClassExact => has_marker_class(el) && contains_name(el, name),
        }
    }

    /// True when `el` delimits *any* known section; the sibling walk stops
    /// here and excludes the element's own text.
    pub fn is_boundary(self, el: ElementRef<'_>) -> bool {
        match self {
            MarkerRule::HeadingSubstring => {
                is_heading_candidate(el)
                    && Field::ALL.iter().any(|f| contains_name(el, f.label()))
            }
            MarkerRule::ClassExact => has_marker_class(el),
        }
    }
}

fn is_heading_candidate(el: ElementRef<'_>) -> bool {
    matches!(el.value().name(), "h2" | "div")
}

fn has_marker_class(el: ElementRef<'_>) -> bool {
    el.value()
        .attr("class")
        .is_some_and(|classes| {
            classes
                .split_whitespace()
                .any(|c| c.eq_ignore_ascii_case("subheaders"))
        })
}

fn contains_name(el: ElementRef<'_>, name: &str) -> bool {
    visible_text(el).to_lowercase().contains(&name.to_lowercase())
}
