//! Thin field-extraction layer over the `scraper` DOM engine.
//!
//! All lookups are first-match and treat an empty value the same as a
//! missing one, so callers only ever deal with `Option<String>`. Selector
//! strings are named constants owned by the parser that uses them; a
//! selector that fails to parse is a programmer error, hence the `expect`
//! at compile sites rather than a recoverable `Result`.

use scraper::{ElementRef, Selector};

/// Compiles a selector constant.
fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("valid css selector")
}

/// `true` when at least one node under `scope` matches `css`.
pub(crate) fn has_match(scope: ElementRef<'_>, css: &str) -> bool {
    scope.select(&selector(css)).next().is_some()
}

/// Trimmed text content of the first node under `scope` matching `css`.
/// `None` when nothing matches or the text is empty.
pub(crate) fn first_text(scope: ElementRef<'_>, css: &str) -> Option<String> {
    let element = scope.select(&selector(css)).next()?;
    let text = element.text().collect::<String>();
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Trimmed value of `attr` on the first node under `scope` matching `css`.
/// `None` when nothing matches, the attribute is missing, or its value is
/// empty.
pub(crate) fn first_attr(scope: ElementRef<'_>, css: &str, attr: &str) -> Option<String> {
    scope
        .select(&selector(css))
        .next()
        .and_then(|element| element.value().attr(attr))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Inner markup of the first node under `scope` matching `css`.
pub(crate) fn first_inner_html(scope: ElementRef<'_>, css: &str) -> Option<String> {
    scope
        .select(&selector(css))
        .next()
        .map(|element| element.inner_html())
}
