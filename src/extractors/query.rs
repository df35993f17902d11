//! Scoped CSS selection helpers.
//!
//! Every page region on the details page is optional, so all helpers
//! take the scope as `Option<ElementRef>`: a missing region simply
//! yields the empty value instead of an error.

use scraper::{ElementRef, Selector};

/// First element matching `selector` under `scope`, if any.
pub fn first_element<'a>(
    scope: Option<ElementRef<'a>>,
    selector: &Selector,
) -> Option<ElementRef<'a>> {
    scope.and_then(|s| s.select(selector).next())
}

/// Trimmed text content of the first match, or empty string.
pub fn first_text(scope: Option<ElementRef<'_>>, selector: &Selector) -> String {
    first_element(scope, selector)
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Attribute value of the first match, if the element and attribute exist.
pub fn first_attr(
    scope: Option<ElementRef<'_>>,
    selector: &Selector,
    attr: &str,
) -> Option<String> {
    first_element(scope, selector).and_then(|el| el.value().attr(attr).map(String::from))
}

/// Trimmed text of every match, in document order.
pub fn all_texts(scope: Option<ElementRef<'_>>, selector: &Selector) -> Vec<String> {
    scope
        .into_iter()
        .flat_map(|s| s.select(selector))
        .map(|el| el.text().collect::<String>().trim().to_string())
        .collect()
}

/// Attribute value of every match that carries it, in document order.
pub fn all_attrs(scope: Option<ElementRef<'_>>, selector: &Selector, attr: &str) -> Vec<String> {
    scope
        .into_iter()
        .flat_map(|s| s.select(selector))
        .filter_map(|el| el.value().attr(attr).map(String::from))
        .collect()
}

/// Whether any element under `scope` matches `selector`.
pub fn exists(scope: Option<ElementRef<'_>>, selector: &Selector) -> bool {
    first_element(scope, selector).is_some()
}
