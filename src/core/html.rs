// src/core/html.rs
//
// Small helpers over `scraper` for walking parsed markup.

use scraper::{ElementRef, Selector};

/// Parse a CSS selector from a crate constant.
/// Constants are fixed at compile time, so a failure is a programming error.
pub fn selector(css: &str) -> Selector {
    match Selector::parse(css) {
        Ok(sel) => sel,
        Err(e) => panic!("invalid CSS selector {css:?}: {e:?}"),
    }
}

/// First descendant of `el` matching `sel`.
pub fn first<'a>(el: ElementRef<'a>, sel: &Selector) -> Option<ElementRef<'a>> {
    el.select(sel).next()
}

/// Whether any descendant of `el` matches `sel`.
pub fn contains(el: ElementRef<'_>, sel: &Selector) -> bool {
    el.select(sel).next().is_some()
}

/// All descendant text, concatenated and trimmed at both ends.
pub fn text(el: ElementRef<'_>) -> String {
    let joined: String = el.text().collect();
    s!(joined.trim())
}
